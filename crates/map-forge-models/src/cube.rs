//! A cube assembled from six independently declared quads.
//!
//! Every edge is shared by two quads and the pool must collapse the 24
//! declared corners into 8 vertices, which makes this model double as the
//! assembly smoke test.

use map_forge_mesh::{Error, Face, Mesh, Vec3};

use crate::Params;

/// Build an axis-aligned cube with its corner at the origin. Parameters:
/// `size` (default 1).
pub fn build(params: &Params) -> Result<Mesh, Error> {
    let size = params.get_or("size", 1.0);

    let o = Vec3::ZERO;
    let x = Vec3::FORWARD.scaled(size)?;
    let y = Vec3::LEFT.scaled(size)?;
    let z = Vec3::UP.scaled(size)?;

    // Floor, ceiling, then the four walls, each wound outward.
    let quads = [
        [o, y, x + y, x],
        [z, x + z, x + y + z, y + z],
        [o, x, x + z, z],
        [x, x + y, x + y + z, x + z],
        [x + y, y, y + z, x + y + z],
        [y, o, z, y + z],
    ];

    let mut mesh = Mesh::new();
    for corners in quads {
        mesh.add_face(&Face::new(corners.to_vec())?);
    }

    Ok(mesh)
}
