//! An underpass: two stair flights descending into a shared sunken hall
//! from opposite ends.
//!
//! The far flight is the near one turned half a circle and moved across the
//! hall, and the hall floor is declared separately in absolute coordinates.
//! The vertex pool is what stitches all three back together.

use map_forge_mesh::{Error, Face, Mesh, Vec3};

use crate::{stairs, Params};

/// Build an underpass. Parameters: `width`, `depth`, `length` and `steps`
/// as for `stairs`, plus `hall`, the floor span between the two flight
/// landings (default 6).
pub fn build(params: &Params) -> Result<Mesh, Error> {
    let width = params.get_or("width", 4.0);
    let depth = params.get_or("depth", 3.0);
    let length = params.get_or("length", depth);
    let hall = params.get_or("hall", 6.0);

    let flight = stairs::flight(params)?;

    let mut mesh = Mesh::new();
    for face in &flight {
        mesh.add_face(face);
    }

    // Hall floor between the two landings.
    let landing = Vec3::FORWARD.scaled(length)? + Vec3::DOWN.scaled(depth)?;
    let along = Vec3::FORWARD.scaled(hall)?;
    let left = Vec3::LEFT.scaled(width)?;
    mesh.add_face(&Face::new(vec![
        landing,
        landing + along,
        landing + along + left,
        landing + left,
    ])?);

    // The far flight: the same faces, turned around and walked in from the
    // opposite end of the hall.
    let offset = Vec3::FORWARD.scaled(2.0 * length + hall)? + left;
    for face in &flight {
        mesh.add_face(&face.rotated_z(2).translated(offset));
    }

    Ok(mesh)
}
