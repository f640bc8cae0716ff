//! The smoke-test map: a single floor quad.

use map_forge_mesh::{Error, Face, Mesh, Vec3};

use crate::Params;

/// Build a flat square floor. Parameters: `size` (default 1).
pub fn build(params: &Params) -> Result<Mesh, Error> {
    let size = params.get_or("size", 1.0);

    let forward = Vec3::FORWARD.scaled(size)?;
    let left = Vec3::LEFT.scaled(size)?;

    let mut mesh = Mesh::new();
    mesh.add_face(&Face::new(vec![
        Vec3::ZERO,
        forward,
        forward + left,
        left,
    ])?);

    Ok(mesh)
}
