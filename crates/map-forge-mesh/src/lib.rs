//! The Map-Forge mesh kernel. Map models are assembled face by face out of
//! raw vector coordinates; this crate owns the geometric value types and the
//! vertex-pool deduplication that keeps independently declared faces stitched
//! into one consistent indexed mesh.

#![warn(clippy::pedantic)]

use std::fmt::{self, Display, Formatter};

pub mod face;
pub mod mesh;
pub mod vector;

pub use face::Face;
pub use mesh::{BoundingBox, Mesh};
pub use vector::Vec3;

/// Distance below which two vertex positions are merged into one pool entry.
///
/// The band is closed-open: positions at exactly this distance stay distinct,
/// strictly closer ones share an entry.
pub const EPSILON: f64 = 1e-6;

/// Why a face failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateKind {
    /// Fewer than 3 pairwise-distinct points were supplied.
    TooFewPoints,
    /// The first three points are collinear, so no normal exists.
    Collinear,
    /// A point past the first three lies off their plane.
    NonPlanar,
}

impl Display for DegenerateKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints => write!(f, "fewer than 3 distinct points"),
            Self::Collinear => write!(f, "collinear points"),
            Self::NonPlanar => write!(f, "point off the face plane"),
        }
    }
}

/// An error raised while constructing mesh data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A non-finite scalar was passed to checked arithmetic.
    InvalidValue,
    /// A face could not be turned into a valid planar polygon.
    DegenerateFace(DegenerateKind),
    /// An operation requiring at least one vertex met a mesh with none.
    EmptyMesh,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue => write!(f, "non-finite scalar in vector arithmetic"),
            Self::DegenerateFace(kind) => write!(f, "degenerate face: {kind}"),
            Self::EmptyMesh => write!(f, "the mesh has no vertices"),
        }
    }
}

impl std::error::Error for Error {}
