// pipeline.rs
use crate::framebuffer::Framebuffer;
use crate::matrix::create_viewport_matrix;
use crate::shaders::{fragment_shader, vertex_shader, ShadingMode, Uniforms};
use crate::triangle::{triangle, InterpolationMode, Viewport};
use crate::vertex::Vertex;

/// Fixed state chosen before the pipeline is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    pub shading_mode: ShadingMode,
    pub interpolation_mode: InterpolationMode,
}

/// Counters for one draw call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub vertices: usize,
    pub triangles: usize,
    pub fragments: usize,
    pub samples_written: usize,
}

pub struct Pipeline {
    config: PipelineConfig,
    viewport: Viewport,
}

impl Pipeline {
    pub fn new(config: PipelineConfig, width: usize, height: usize) -> Self {
        Pipeline {
            config,
            viewport: Viewport {
                matrix: create_viewport_matrix(0.0, 0.0, width as f32, height as f32),
                width,
                height,
            },
        }
    }

    pub fn config(&self) -> PipelineConfig {
        self.config
    }

    /// Switches output strategy. Only valid between draw calls, which the
    /// `&mut self` receiver enforces.
    pub fn set_shading_mode(&mut self, mode: ShadingMode) {
        if self.config.shading_mode != mode {
            log::info!("shading mode: {:?} -> {:?}", self.config.shading_mode, mode);
            self.config.shading_mode = mode;
        }
    }

    /// Draws `vertices` as a triangle list. A trailing partial triangle is dropped.
    pub fn draw(&self, framebuffer: &mut Framebuffer, uniforms: &Uniforms, vertices: &[Vertex]) -> DrawStats {
        let transformed_vertices: Vec<_> = vertices.iter().map(vertex_shader).collect();

        let mut stats = DrawStats {
            vertices: transformed_vertices.len(),
            ..DrawStats::default()
        };

        for tri in transformed_vertices.chunks_exact(3) {
            stats.triangles += 1;

            for fragment in triangle(&tri[0], &tri[1], &tri[2], &self.viewport, self.config.interpolation_mode) {
                stats.fragments += 1;
                let final_color = fragment_shader(&fragment, uniforms, self.config.shading_mode);
                if framebuffer.point(
                    fragment.position.x as i32,
                    fragment.position.y as i32,
                    final_color,
                    fragment.depth,
                ) {
                    stats.samples_written += 1;
                }
            }
        }

        log::trace!("draw: {:?}", stats);
        stats
    }
}
