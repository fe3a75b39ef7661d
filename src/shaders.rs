// shaders.rs
use raylib::prelude::*;

use crate::error::BindError;
use crate::fragment::Fragment;
use crate::vertex::{Vertex, VertexOutput};

/// Name of the flat-color uniform.
pub const ALBEDO_UNIFORM: &str = "albedo";
/// Name of the position varying shared by both stages.
pub const VERT_POS_VARYING: &str = "vertPos";

/// Which output the fragment stage is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ShadingMode {
    /// Object-space position remapped from [-1, 1] to [0, 1].
    #[default]
    DebugPosition,
    /// The `albedo` uniform, unmodified.
    FlatAlbedo,
}

impl ShadingMode {
    pub fn toggled(self) -> Self {
        match self {
            ShadingMode::DebugPosition => ShadingMode::FlatAlbedo,
            ShadingMode::FlatAlbedo => ShadingMode::DebugPosition,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Uniforms {
    pub albedo: Vector4,
}

impl Default for Uniforms {
    fn default() -> Self {
        Uniforms {
            albedo: Vector4::new(1.0, 1.0, 1.0, 1.0),
        }
    }
}

impl Uniforms {
    /// Resolves a uniform name to its location.
    pub fn location(name: &str) -> Option<u32> {
        match name {
            ALBEDO_UNIFORM => Some(0),
            _ => None,
        }
    }

    pub fn set_vec4(&mut self, name: &str, value: Vector4) -> Result<(), BindError> {
        match Self::location(name) {
            Some(0) => {
                self.albedo = value;
                Ok(())
            }
            _ => Err(BindError::UnknownUniform(name.to_owned())),
        }
    }
}

/// Barycentric blend of three per-vertex values.
pub trait Varying: Copy {
    fn barycentric(a: Self, b: Self, c: Self, w0: f32, w1: f32, w2: f32) -> Self;
}

impl Varying for f32 {
    fn barycentric(a: Self, b: Self, c: Self, w0: f32, w1: f32, w2: f32) -> Self {
        a * w0 + b * w1 + c * w2
    }
}

impl Varying for Vector3 {
    fn barycentric(a: Self, b: Self, c: Self, w0: f32, w1: f32, w2: f32) -> Self {
        Vector3::new(
            f32::barycentric(a.x, b.x, c.x, w0, w1, w2),
            f32::barycentric(a.y, b.y, c.y, w0, w1, w2),
            f32::barycentric(a.z, b.z, c.z, w0, w1, w2),
        )
    }
}

impl Varying for Vector4 {
    fn barycentric(a: Self, b: Self, c: Self, w0: f32, w1: f32, w2: f32) -> Self {
        Vector4::new(
            f32::barycentric(a.x, b.x, c.x, w0, w1, w2),
            f32::barycentric(a.y, b.y, c.y, w0, w1, w2),
            f32::barycentric(a.z, b.z, c.z, w0, w1, w2),
            f32::barycentric(a.w, b.w, c.w, w0, w1, w2),
        )
    }
}

/// Object space is used directly as clip space; w is always 1.
pub fn vertex_shader(vertex: &Vertex) -> VertexOutput {
    let p = vertex.position;
    VertexOutput {
        clip_position: Vector4::new(p.x, p.y, p.z, 1.0),
        vert_pos: p,
    }
}

/// Maps [-1, 1] per axis to [0, 1]. Out-of-range input is not clamped.
pub fn position_to_color(pos: Vector3) -> Vector4 {
    Vector4::new(pos.x / 2.0 + 0.5, pos.y / 2.0 + 0.5, pos.z / 2.0 + 0.5, 1.0)
}

/// Inverse of [`position_to_color`].
pub fn color_to_position(color: Vector4) -> Vector3 {
    Vector3::new(
        (color.x - 0.5) * 2.0,
        (color.y - 0.5) * 2.0,
        (color.z - 0.5) * 2.0,
    )
}

pub fn fragment_shader(fragment: &Fragment, uniforms: &Uniforms, mode: ShadingMode) -> Vector4 {
    match mode {
        ShadingMode::DebugPosition => position_to_color(fragment.vert_pos),
        ShadingMode::FlatAlbedo => uniforms.albedo,
    }
}
