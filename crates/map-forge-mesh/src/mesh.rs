//! Indexed meshes with a deduplicated vertex pool.
//!
//! Maps are assembled face by face from independently declared quads that
//! share edges. Without merging, every shared edge would produce duplicate,
//! disconnected vertices and break anything downstream that depends on
//! topology. The ε-merge in [`Mesh::add_face`] is the mechanism that keeps
//! the assembled mesh connected.

use serde::Serialize;

use crate::face::Face;
use crate::vector::Vec3;
use crate::Error;

/// A mesh built incrementally out of faces.
///
/// The pool holds every distinct vertex position once, in insertion order;
/// faces are stored as index lists into it. The pool and the index lists are
/// owned exclusively: faces and vectors passed in are copied, never aliased.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Vec<usize>>,
}

/// Axis-aligned bounds of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl Mesh {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a face, resolving each of its points against the vertex pool.
    ///
    /// A point strictly within [`crate::EPSILON`] of an existing pool entry
    /// reuses that entry (the first such entry in insertion order, so the
    /// result does not depend on lookup internals). Points matching no entry
    /// are appended to the pool.
    pub fn add_face(&mut self, face: &Face) {
        let indices = face
            .points()
            .iter()
            .map(|&point| self.resolve_vertex(point))
            .collect();
        self.faces.push(indices);
    }

    /// Insert-or-reuse lookup. Linear over the pool; large maps may want a
    /// coordinate-keyed bucket index instead, as long as the first-in-
    /// insertion-order convention survives.
    fn resolve_vertex(&mut self, position: Vec3) -> usize {
        match self.vertices.iter().position(|v| v.close_to(position)) {
            Some(index) => index,
            None => {
                self.vertices.push(position);
                self.vertices.len() - 1
            }
        }
    }

    /// Number of distinct vertices in the pool.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces added so far.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// The ordered vertex pool. Together with [`Mesh::faces`] this is the
    /// host-agnostic form a host adapter consumes.
    #[must_use]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// The ordered face list, each face an ordered index list into the pool.
    #[must_use]
    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    /// Axis-aligned bounds, recomputed over the pool.
    ///
    /// # Errors
    /// Returns [`Error::EmptyMesh`] if the pool is empty.
    pub fn bounding_box(&self) -> Result<BoundingBox, Error> {
        let Some(&first) = self.vertices.first() else {
            return Err(Error::EmptyMesh);
        };

        let mut min = first;
        let mut max = first;
        for vertex in &self.vertices[1..] {
            min.x = min.x.min(vertex.x);
            min.y = min.y.min(vertex.y);
            min.z = min.z.min(vertex.z);
            max.x = max.x.max(vertex.x);
            max.y = max.y.max(vertex.y);
            max.z = max.z.max(vertex.z);
        }

        Ok(BoundingBox { min, max })
    }
}
