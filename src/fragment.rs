// fragment.rs
use raylib::prelude::Vector3;

pub struct Fragment {
    pub position: Vector3, // window position, z = depth
    pub depth: f32,
    pub vert_pos: Vector3, // interpolated `vertPos`
}

impl Fragment {
    pub fn new(x: f32, y: f32, depth: f32, vert_pos: Vector3) -> Self {
        Fragment {
            position: Vector3::new(x, y, depth),
            depth,
            vert_pos,
        }
    }
}
