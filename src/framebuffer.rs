// framebuffer.rs
use raylib::prelude::*;

/// Color write: saturate to [0, 1] and quantize to 8 bits per channel.
pub fn quantize(color: Vector4) -> Color {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::new(channel(color.x), channel(color.y), channel(color.z), channel(color.w))
}

pub struct Framebuffer {
    pub width: usize,
    pub height: usize,
    color_buffer: Vec<Color>,
    depth_buffer: Vec<f32>,
    background_color: Color,
    texture: Option<Texture2D>, // created on first present
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        let background_color = Color::new(0, 0, 0, 255);
        Framebuffer {
            width,
            height,
            color_buffer: vec![background_color; width * height],
            depth_buffer: vec![f32::INFINITY; width * height],
            background_color,
            texture: None,
        }
    }

    pub fn set_background_color(&mut self, color: Vector4) {
        self.background_color = quantize(color);
    }

    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background_color);
        self.depth_buffer.fill(f32::INFINITY);
    }

    /// Writes one sample if it is on screen and closer than what is stored.
    pub fn point(&mut self, x: i32, y: i32, color: Vector4, depth: f32) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return false;
        }

        let index = y as usize * self.width + x as usize;
        // NaN depth never passes.
        if !(depth < self.depth_buffer[index]) {
            return false;
        }

        self.depth_buffer[index] = depth;
        self.color_buffer[index] = quantize(color);
        true
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.color_buffer[y * self.width + x])
    }

    pub fn get_depth(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.depth_buffer[y * self.width + x])
    }

    /// RGBA8 bytes, row-major, as uploaded to the screen texture.
    pub fn pixel_bytes(&self) -> Vec<u8> {
        self.color_buffer
            .iter()
            .flat_map(|c| [c.r, c.g, c.b, c.a])
            .collect()
    }

    pub fn swap_buffers(&mut self, window: &mut RaylibHandle, raylib_thread: &RaylibThread) {
        if self.texture.is_none() {
            let image = Image::gen_image_color(self.width as i32, self.height as i32, self.background_color);
            match window.load_texture_from_image(raylib_thread, &image) {
                Ok(texture) => self.texture = Some(texture),
                Err(err) => {
                    log::warn!("failed to create screen texture: {err}");
                    return;
                }
            }
        }

        let pixels = self.pixel_bytes();
        let Some(texture) = self.texture.as_mut() else {
            return;
        };
        if let Err(err) = texture.update_texture(&pixels) {
            log::warn!("failed to upload framebuffer: {err}");
            return;
        }

        let mut d = window.begin_drawing(raylib_thread);
        d.clear_background(self.background_color);
        d.draw_texture(&*texture, 0, 0, Color::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_write_saturates() {
        assert_eq!(quantize(Vector4::new(-0.5, 0.5, 1.5, 1.0)), Color::new(0, 128, 255, 255));
        assert_eq!(quantize(Vector4::new(0.2, 0.3, 0.3, 1.0)), Color::new(51, 77, 77, 255));
    }

    #[test]
    fn nearer_samples_win() {
        let mut fb = Framebuffer::new(4, 4);
        let red = Vector4::new(1.0, 0.0, 0.0, 1.0);
        let blue = Vector4::new(0.0, 0.0, 1.0, 1.0);

        assert!(fb.point(1, 2, red, 0.5));
        assert!(!fb.point(1, 2, blue, 0.75));
        assert_eq!(fb.get_pixel(1, 2), Some(Color::new(255, 0, 0, 255)));

        assert!(fb.point(1, 2, blue, 0.25));
        assert_eq!(fb.get_pixel(1, 2), Some(Color::new(0, 0, 255, 255)));
        assert_eq!(fb.get_depth(1, 2), Some(0.25));
    }

    #[test]
    fn nan_depth_is_rejected() {
        let mut fb = Framebuffer::new(2, 2);
        assert!(!fb.point(0, 0, Vector4::new(1.0, 1.0, 1.0, 1.0), f32::NAN));
        assert_eq!(fb.get_pixel(0, 0), Some(Color::new(0, 0, 0, 255)));
        assert_eq!(fb.get_depth(0, 0), Some(f32::INFINITY));
    }

    #[test]
    fn pixel_bytes_are_rgba_rows() {
        let mut fb = Framebuffer::new(2, 2);
        fb.point(1, 0, Vector4::new(1.0, 0.0, 0.5, 1.0), 0.5);

        let bytes = fb.pixel_bytes();
        assert_eq!(bytes.len(), 2 * 2 * 4);
        assert_eq!(&bytes[0..4], &[0, 0, 0, 255]);
        assert_eq!(&bytes[4..8], &[255, 0, 128, 255]);
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut fb = Framebuffer::new(2, 2);
        let white = Vector4::new(1.0, 1.0, 1.0, 1.0);

        assert!(!fb.point(-1, 0, white, 0.0));
        assert!(!fb.point(2, 0, white, 0.0));
        assert_eq!(fb.get_pixel(2, 0), None);
    }

    #[test]
    fn clear_restores_background() {
        let mut fb = Framebuffer::new(2, 2);
        fb.set_background_color(Vector4::new(0.2, 0.3, 0.3, 1.0));
        fb.point(0, 0, Vector4::new(1.0, 1.0, 1.0, 1.0), 0.1);
        fb.clear();

        assert_eq!(fb.get_pixel(0, 0), Some(Color::new(51, 77, 77, 255)));
        assert_eq!(fb.get_depth(0, 0), Some(f32::INFINITY));
    }
}
