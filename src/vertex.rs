// vertex.rs
use raylib::prelude::{Vector3, Vector4};

use crate::error::BindError;

/// Input slot the position attribute is bound to.
pub const POSITION_ATTRIBUTE_SLOT: u32 = 0;
/// Components per position attribute.
pub const POSITION_COMPONENTS: usize = 3;
/// Distance in bytes between consecutive positions in a bound buffer.
pub const POSITION_STRIDE: usize = POSITION_COMPONENTS * std::mem::size_of::<f32>();

#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Vector3, // object space
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vertex {
            position: Vector3::new(x, y, z),
        }
    }
}

/// What the vertex stage hands to the rasterizer.
#[derive(Debug, Clone, Copy)]
pub struct VertexOutput {
    pub clip_position: Vector4,
    pub vert_pos: Vector3, // the `vertPos` varying
}

/// Binds a tightly packed float buffer to `slot`.
pub fn bind_attribute(slot: u32, data: &[f32]) -> Result<Vec<Vertex>, BindError> {
    if slot != POSITION_ATTRIBUTE_SLOT {
        return Err(BindError::AttributeSlot(slot));
    }
    bind_positions(data)
}

/// Splits a flat `[x, y, z, x, y, z, ...]` buffer into position attributes.
pub fn bind_positions(data: &[f32]) -> Result<Vec<Vertex>, BindError> {
    if data.len() % POSITION_COMPONENTS != 0 {
        return Err(BindError::AttributeLayout {
            len: data.len(),
            components: POSITION_COMPONENTS,
        });
    }

    Ok(data
        .chunks_exact(POSITION_COMPONENTS)
        .map(|p| Vertex::new(p[0], p[1], p[2]))
        .collect())
}
