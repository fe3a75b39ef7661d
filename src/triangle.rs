// triangle.rs
use raylib::prelude::*;

use crate::fragment::Fragment;
use crate::matrix::multiply_matrix_vector4;
use crate::shaders::Varying;
use crate::vertex::VertexOutput;

/// How varyings are weighted across a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum InterpolationMode {
    /// Screen-space weights corrected by each vertex's clip w.
    #[default]
    Perspective,
    /// Screen-space weights as-is.
    Linear,
}

/// Target area the rasterizer writes into.
pub struct Viewport {
    pub matrix: Matrix,
    pub width: usize,
    pub height: usize,
}

const DEPTH_SLACK: f32 = 1e-5;

struct ScreenVertex {
    position: Vector3,
    inv_w: f32,
}

impl ScreenVertex {
    fn is_finite(&self) -> bool {
        self.position.x.is_finite()
            && self.position.y.is_finite()
            && self.position.z.is_finite()
            && self.inv_w.is_finite()
    }
}

fn to_screen(vertex: &VertexOutput, viewport: &Matrix) -> ScreenVertex {
    let clip = vertex.clip_position;

    let ndc = if clip.w != 0.0 {
        Vector4::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w, 1.0)
    } else {
        Vector4::new(clip.x, clip.y, clip.z, 1.0)
    };
    let screen = multiply_matrix_vector4(viewport, &ndc);

    ScreenVertex {
        position: Vector3::new(screen.x, screen.y, screen.z),
        inv_w: if clip.w != 0.0 { 1.0 / clip.w } else { 1.0 },
    }
}

fn edge_function(a: &Vector3, b: &Vector3, p: &Vector3) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Normalized screen-space weights of `p` in triangle `abc`, or `None` for a
/// degenerate triangle. Weights are all non-negative for points inside,
/// whichever way the triangle winds.
pub fn barycentric_weights(a: &Vector3, b: &Vector3, c: &Vector3, p: &Vector3) -> Option<(f32, f32, f32)> {
    let area = edge_function(a, b, c);
    if !area.is_finite() || area.abs() <= f32::EPSILON {
        return None;
    }

    let w0 = edge_function(b, c, p) / area;
    let w1 = edge_function(c, a, p) / area;
    let w2 = edge_function(a, b, p) / area;
    Some((w0, w1, w2))
}

/// Rasterizes one triangle, sampling at pixel centers.
pub fn triangle(
    v1: &VertexOutput,
    v2: &VertexOutput,
    v3: &VertexOutput,
    viewport: &Viewport,
    mode: InterpolationMode,
) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    if viewport.width == 0 || viewport.height == 0 {
        return fragments;
    }

    let s1 = to_screen(v1, &viewport.matrix);
    let s2 = to_screen(v2, &viewport.matrix);
    let s3 = to_screen(v3, &viewport.matrix);
    if ![&s1, &s2, &s3].iter().all(|s| s.is_finite()) {
        return fragments;
    }
    let (a, b, c) = (&s1.position, &s2.position, &s3.position);

    let area = edge_function(a, b, c);
    if !area.is_finite() || area.abs() <= f32::EPSILON {
        return fragments;
    }

    let min_x = a.x.min(b.x).min(c.x).floor().max(0.0);
    let min_y = a.y.min(b.y).min(c.y).floor().max(0.0);
    let max_x = a.x.max(b.x).max(c.x).ceil().min(viewport.width as f32 - 1.0);
    let max_y = a.y.max(b.y).max(c.y).ceil().min(viewport.height as f32 - 1.0);
    if min_x > max_x || min_y > max_y {
        return fragments;
    }

    for y in min_y as usize..=max_y as usize {
        for x in min_x as usize..=max_x as usize {
            let sample = Vector3::new(x as f32 + 0.5, y as f32 + 0.5, 0.0);
            let Some((w1, w2, w3)) = barycentric_weights(a, b, c, &sample) else {
                return fragments;
            };
            // NaN weights fail this too.
            if !(w1 >= 0.0 && w2 >= 0.0 && w3 >= 0.0) {
                continue;
            }

            // Near/far clipping. The slack keeps samples on the planes
            // themselves despite rounding in the weights.
            let depth = f32::barycentric(a.z, b.z, c.z, w1, w2, w3);
            if !(-DEPTH_SLACK..=1.0 + DEPTH_SLACK).contains(&depth) {
                continue;
            }
            let depth = depth.clamp(0.0, 1.0);

            let (p1, p2, p3) = match mode {
                InterpolationMode::Linear => (w1, w2, w3),
                InterpolationMode::Perspective => {
                    let (p1, p2, p3) = (w1 * s1.inv_w, w2 * s2.inv_w, w3 * s3.inv_w);
                    let sum = p1 + p2 + p3;
                    if sum == 0.0 {
                        (w1, w2, w3)
                    } else {
                        (p1 / sum, p2 / sum, p3 / sum)
                    }
                }
            };
            let vert_pos = Vector3::barycentric(v1.vert_pos, v2.vert_pos, v3.vert_pos, p1, p2, p3);

            fragments.push(Fragment::new(x as f32, y as f32, depth, vert_pos));
        }
    }

    fragments
}
