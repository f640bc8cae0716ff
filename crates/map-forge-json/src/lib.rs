//! Map-Forge hands finished meshes to host adapters as JSON: the ordered
//! vertex pool and the per-face index lists, exactly as the mesh stores
//! them. This is the format writer responsible for that.

#![warn(clippy::pedantic)]

use map_forge_mesh::Mesh;

/// The JSON format writer.
#[derive(Debug, Default)]
pub struct Json;

impl Json {
    /// Output the mesh as JSON.
    ///
    /// # Panics
    /// Panicking is a bug.
    #[must_use]
    pub fn draw(mesh: &Mesh) -> String {
        serde_json::to_string(mesh).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use map_forge_mesh::{Face, Mesh, Vec3};

    use super::*;

    #[test]
    fn output_preserves_pool_and_topology() {
        let mut mesh = Mesh::new();
        mesh.add_face(
            &Face::new(vec![
                Vec3::ZERO,
                Vec3::FORWARD,
                Vec3::FORWARD + Vec3::LEFT,
                Vec3::LEFT,
            ])
            .unwrap(),
        );

        let value: serde_json::Value = serde_json::from_str(&Json::draw(&mesh)).unwrap();

        assert_eq!(value["vertices"].as_array().unwrap().len(), 4);
        assert_eq!(value["faces"].as_array().unwrap().len(), 1);
        assert_eq!(value["faces"][0], serde_json::json!([0, 1, 2, 3]));
        assert_eq!(value["vertices"][1]["x"], serde_json::json!(1.0));
    }
}
