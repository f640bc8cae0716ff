//! A flight of stairs descending forward from ground level.

use map_forge_mesh::{Error, Face, Mesh, Vec3};

use crate::Params;

/// Build one stair flight. Parameters: `width` (default 4), `depth`, the
/// total drop (default 3), `length`, the footprint along the walk
/// direction (default `depth`), and `steps` (default 10).
pub fn build(params: &Params) -> Result<Mesh, Error> {
    let mut mesh = Mesh::new();
    for face in flight(params)? {
        mesh.add_face(&face);
    }

    Ok(mesh)
}

/// The faces of a flight starting at the origin: alternating treads and
/// risers, one pair per step.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub(crate) fn flight(params: &Params) -> Result<Vec<Face>, Error> {
    let width = params.get_or("width", 4.0);
    let depth = params.get_or("depth", 3.0);
    let length = params.get_or("length", depth);
    let steps = params.get_or("steps", 10.0).round().max(1.0) as usize;

    let left = Vec3::LEFT.scaled(width)?;
    let run = Vec3::FORWARD.scaled(length)? / steps as f64;
    let fall = Vec3::DOWN.scaled(depth)? / steps as f64;

    let mut faces = Vec::with_capacity(steps * 2);
    let mut near = Vec3::ZERO;
    for _ in 0..steps {
        let far = near + run;
        let low = far + fall;
        // Walkable tread, then the riser down to the next tread level.
        faces.push(Face::new(vec![near, far, far + left, near + left])?);
        faces.push(Face::new(vec![far + left, far, low, low + left])?);
        near += run + fall;
    }

    Ok(faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_step_is_a_tread_and_a_riser() {
        let mut params = Params::new();
        params.set("steps", 4.0);

        let mesh = build(&params).unwrap();
        assert_eq!(mesh.face_count(), 8);
        assert_eq!(mesh.vertex_count(), 18);
    }

    #[test]
    fn the_flight_spans_the_requested_drop() {
        let mut params = Params::new();
        params.set("depth", 2.0);
        params.set("length", 6.0);
        params.set("steps", 8.0);

        let bounds = build(&params).unwrap().bounding_box().unwrap();
        assert!((bounds.min.z + 2.0).abs() < 1e-9);
        assert!((bounds.max.x - 6.0).abs() < 1e-9);
        assert!(bounds.max.z.abs() < 1e-9);
    }
}
