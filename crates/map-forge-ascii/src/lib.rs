//! Map-Forge can preview a mesh right in the console: the mesh is projected
//! onto one of the three axis-aligned planes and its edges are rasterized
//! into a small character grid. Meant for quick sanity checks of a model
//! before it is handed to a host, not for faithful rendering.

#![warn(clippy::pedantic)]

use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};

use map_forge_mesh::Vec3;

pub mod grid;

pub use grid::Grid;

/// The axis-aligned orthographic view to project along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Plane {
    /// Looking down the Z axis; keeps (x, y).
    #[default]
    Top,
    /// Looking down the Y axis; keeps (x, z).
    Front,
    /// Looking down the X axis; keeps (y, z).
    Side,
}

impl Plane {
    /// Project a point onto the retained axes as (horizontal, vertical).
    #[must_use]
    pub fn project(self, point: Vec3) -> (f64, f64) {
        match self {
            Self::Top => (point.x, point.y),
            Self::Front => (point.x, point.z),
            Self::Side => (point.y, point.z),
        }
    }
}

impl Display for Plane {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Front => write!(f, "front"),
            Self::Side => write!(f, "side"),
        }
    }
}

/// Character-grid resolution of a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Resolution {
    /// The historical console preview height.
    pub const PREVIEW_HEIGHT: usize = 4;

    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// A grid of the given height with width proportional to the projected
    /// extent. Terminal cells are roughly twice as tall as they are wide,
    /// hence the doubling.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn proportional(extent: (f64, f64), height: usize) -> Self {
        let width = if extent.0 > 0.0 && extent.1 > 0.0 {
            ((extent.0 / extent.1) * height as f64 * 2.0).ceil() as usize
        } else {
            height * 2
        };

        Self {
            width: width.max(1),
            height,
        }
    }

    /// The default preview grid: [`Self::PREVIEW_HEIGHT`] rows tall.
    #[must_use]
    pub fn preview(extent: (f64, f64)) -> Self {
        Self::proportional(extent, Self::PREVIEW_HEIGHT)
    }
}

/// An error raised while configuring or running a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested grid has a zero-sized axis.
    InvalidConfiguration(Resolution),
    /// The kernel rejected the mesh.
    Mesh(map_forge_mesh::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(resolution) => write!(
                f,
                "invalid grid resolution: {} by {}",
                resolution.width, resolution.height
            ),
            Self::Mesh(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<map_forge_mesh::Error> for Error {
    fn from(err: map_forge_mesh::Error) -> Self {
        Self::Mesh(err)
    }
}

/// The console preview writer.
#[derive(Debug)]
pub struct Ascii<W: Write> {
    /// The write stream.
    writer: W,
}

impl<W: Write> Ascii<W> {
    /// Write a projected grid as text: a one-line header with the view and
    /// mesh bounds, then the grid rows top to bottom.
    ///
    /// # Errors
    /// Returns any error of the underlying stream.
    pub fn draw(grid: &Grid, writer: W) -> io::Result<()> {
        let mut ascii = Self { writer };

        ascii.header(grid)?;
        ascii.body(grid)
    }

    fn header(&mut self, grid: &Grid) -> io::Result<()> {
        let bounds = grid.bounds();

        writeln!(
            &mut self.writer,
            "{} view, {} by {} cells, bounds {} to {}",
            grid.plane(),
            grid.width(),
            grid.height(),
            bounds.min,
            bounds.max,
        )
    }

    fn body(&mut self, grid: &Grid) -> io::Result<()> {
        for row in grid.rows() {
            writeln!(&mut self.writer, "{row}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planes_keep_the_advertised_axes() {
        let point = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!(Plane::Top.project(point), (1.0, 2.0));
        assert_eq!(Plane::Front.project(point), (1.0, 3.0));
        assert_eq!(Plane::Side.project(point), (2.0, 3.0));
    }

    #[test]
    fn preview_resolution_follows_the_aspect_ratio() {
        assert_eq!(Resolution::preview((8.0, 4.0)), Resolution::new(16, 4));
        assert_eq!(Resolution::preview((1.0, 4.0)), Resolution::new(2, 4));
        // Degenerate extents still produce a drawable grid.
        assert_eq!(Resolution::preview((0.0, 0.0)), Resolution::new(8, 4));
    }
}
