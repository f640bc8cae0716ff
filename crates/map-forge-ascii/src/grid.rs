//! Projection of a mesh onto a fixed-resolution character grid.

use std::fmt::{self, Display, Formatter};

use map_forge_mesh::{BoundingBox, Mesh};

use crate::{Error, Plane, Resolution};

/// The glyph marking cells touched by an edge.
pub const FILL: char = '#';
/// The glyph of untouched cells.
pub const BLANK: char = ' ';

/// A rasterized orthographic projection of one mesh.
///
/// Holds the character buffer and the affine map from mesh space to cell
/// coordinates. Built fresh per render call and thrown away after being
/// turned into text.
#[derive(Debug, Clone)]
pub struct Grid {
    plane: Plane,
    width: usize,
    height: usize,
    bounds: BoundingBox,
    origin: (f64, f64),
    units_per_cell: f64,
    cells: Vec<char>,
}

impl Grid {
    /// Project `mesh` onto `plane` at the given resolution.
    ///
    /// The scale is uniform on both axes, taken as the larger of the two
    /// extent-to-resolution factors, so the projection never distorts
    /// shape. It only lets one axis under-fill. Every edge of every face is
    /// drawn, the closing edge included; overlapping geometry overdraws,
    /// there is no depth sorting or hidden-line removal.
    ///
    /// The same mesh, plane and resolution always produce the same grid,
    /// and the mesh is left untouched.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if either resolution axis is
    /// zero and [`Error::Mesh`] with
    /// [`EmptyMesh`](map_forge_mesh::Error::EmptyMesh) if the mesh has no
    /// vertices.
    #[allow(clippy::cast_precision_loss)]
    pub fn project(mesh: &Mesh, plane: Plane, resolution: Resolution) -> Result<Self, Error> {
        if resolution.width == 0 || resolution.height == 0 {
            return Err(Error::InvalidConfiguration(resolution));
        }

        let bounds = mesh.bounding_box()?;
        let (min_h, min_v) = plane.project(bounds.min);
        let (max_h, max_v) = plane.project(bounds.max);

        let cells_h = (resolution.width - 1).max(1) as f64;
        let cells_v = (resolution.height - 1).max(1) as f64;
        let units_per_cell = f64::max((max_h - min_h) / cells_h, (max_v - min_v) / cells_v);

        let mut grid = Self {
            plane,
            width: resolution.width,
            height: resolution.height,
            bounds,
            origin: (min_h, min_v),
            units_per_cell,
            cells: vec![BLANK; resolution.width * resolution.height],
        };

        for face in mesh.faces() {
            let corners: Vec<(usize, usize)> = face
                .iter()
                .map(|&index| grid.to_cell(plane.project(mesh.vertices()[index])))
                .collect();

            for (i, &corner) in corners.iter().enumerate() {
                grid.line(corner, corners[(i + 1) % corners.len()]);
            }
        }

        Ok(grid)
    }

    /// The view this grid was projected along.
    #[must_use]
    pub fn plane(&self) -> Plane {
        self.plane
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bounds of the projected mesh.
    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// The cell at `column`, `row` in display coordinates: row 0 is the top
    /// row, column 0 the left column.
    ///
    /// # Panics
    /// Panics if the coordinates are out of range.
    #[must_use]
    pub fn cell(&self, column: usize, row: usize) -> char {
        assert!(column < self.width && row < self.height, "cell out of range");
        self.cells[(self.height - 1 - row) * self.width + column]
    }

    /// The rows of the grid, top to bottom, each exactly `width` characters.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.width)
            .rev()
            .map(|row| row.iter().collect())
    }

    /// Map a projected point to cell coordinates, vertical axis growing
    /// upwards. Degenerate extents collapse onto cell (0, 0).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn to_cell(&self, (h, v): (f64, f64)) -> (usize, usize) {
        if self.units_per_cell <= 0.0 {
            return (0, 0);
        }

        let column = ((h - self.origin.0) / self.units_per_cell).round().max(0.0) as usize;
        let row = ((v - self.origin.1) / self.units_per_cell).round().max(0.0) as usize;

        (column.min(self.width - 1), row.min(self.height - 1))
    }

    /// Rasterize one edge with the integer line walk (Bresenham).
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn line(&mut self, from: (usize, usize), to: (usize, usize)) {
        let (mut x, mut y) = (from.0 as isize, from.1 as isize);
        let (x1, y1) = (to.0 as isize, to.1 as isize);

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let step_x = if x < x1 { 1 } else { -1 };
        let step_y = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.cells[y as usize * self.width + x as usize] = FILL;
            if x == x1 && y == y1 {
                break;
            }
            let doubled = 2 * err;
            if doubled >= dy {
                err += dy;
                x += step_x;
            }
            if doubled <= dx {
                err += dx;
                y += step_y;
            }
        }
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut rows = self.rows();

        if let Some(row) = rows.next() {
            write!(f, "{row}")?;
        }
        for row in rows {
            write!(f, "\n{row}")?;
        }

        Ok(())
    }
}
