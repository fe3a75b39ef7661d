// obj.rs
use std::path::Path;

use crate::error::ModelError;
use crate::vertex::{bind_positions, Vertex, POSITION_COMPONENTS};

/// Positions of every mesh in an OBJ file, flattened into a triangle list.
pub struct Obj {
    vertices: Vec<Vertex>,
}

impl Obj {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )?;

        let mut positions = Vec::new();
        for model in &models {
            let mesh = &model.mesh;
            for &index in &mesh.indices {
                let start = index as usize * POSITION_COMPONENTS;
                let Some(p) = mesh.positions.get(start..start + POSITION_COMPONENTS) else {
                    return Err(tobj::LoadError::FaceVertexOutOfBounds.into());
                };
                positions.extend_from_slice(p);
            }
        }

        if positions.is_empty() {
            return Err(ModelError::Empty);
        }

        let vertices = bind_positions(&positions)?;
        log::info!(
            "loaded {} ({} meshes, {} triangles)",
            path.display(),
            models.len(),
            vertices.len() / 3
        );
        Ok(Obj { vertices })
    }

    pub fn from_vertices(vertices: Vec<Vertex>) -> Self {
        Obj { vertices }
    }

    pub fn get_vertex_array(&self) -> &[Vertex] {
        &self.vertices
    }
}
