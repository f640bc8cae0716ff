//! A central pillar: a regular n-gon disc extruded into a prism.

use map_forge_mesh::{Error, Face, Mesh, Vec3};

use crate::Params;

/// Build a vertical prism around the origin. Parameters: `radius`
/// (default 1), `segments` (default 16, at least 3), `height` (default 4).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn build(params: &Params) -> Result<Mesh, Error> {
    let radius = params.get_or("radius", 1.0);
    let segments = params.get_or("segments", 16.0).round().max(3.0) as usize;
    let height = params.get_or("height", 4.0);

    let up = Vec3::UP.scaled(height)?;
    let ring = ring(radius, segments)?;

    let mut mesh = Mesh::new();
    // The ring runs clockwise seen from above, so as-is it is the downward
    // floor disc; reversed and lifted it is the ceiling.
    mesh.add_face(&Face::new(ring.clone())?);
    mesh.add_face(&Face::new(
        ring.iter().rev().map(|&p| p + up).collect(),
    )?);
    for (i, &a) in ring.iter().enumerate() {
        let b = ring[(i + 1) % ring.len()];
        mesh.add_face(&Face::new(vec![b, a, a + up, b + up])?);
    }

    Ok(mesh)
}

/// The n-gon outline on the floor plane.
#[allow(clippy::cast_precision_loss)]
fn ring(radius: f64, segments: usize) -> Result<Vec<Vec3>, Error> {
    (0..segments)
        .map(|i| {
            let angle = (360.0 * i as f64 / segments as f64).to_radians();
            Vec3::new(angle.sin(), angle.cos(), 0.0).scaled(radius)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_prism_shares_its_ring_vertices() {
        let mut params = Params::new();
        params.set("segments", 8.0);

        let mesh = build(&params).unwrap();
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.face_count(), 10);
        assert_eq!(mesh.faces()[0].len(), 8);
        assert_eq!(mesh.faces()[1].len(), 8);
    }

    #[test]
    fn height_sets_the_vertical_bounds() {
        let mut params = Params::new();
        params.set("height", 2.5);
        params.set("radius", 3.0);

        let bounds = build(&params).unwrap().bounding_box().unwrap();
        assert!((bounds.max.z - 2.5).abs() < 1e-9);
        assert!((bounds.max.y - 3.0).abs() < 1e-9);
        assert!((bounds.min.z).abs() < 1e-9);
    }

    #[test]
    fn a_non_finite_radius_is_rejected() {
        let mut params = Params::new();
        params.set("radius", f64::INFINITY);

        assert_eq!(build(&params).unwrap_err(), Error::InvalidValue);
    }
}
