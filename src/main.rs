// main.rs
mod config;
mod error;
mod fragment;
mod framebuffer;
mod logging;
mod matrix;
mod obj;
mod pipeline;
mod shaders;
mod triangle;
mod vertex;

use std::f32::consts::FRAC_PI_2;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;

use config::Config;
use framebuffer::Framebuffer;
use logging::init_logging;
use obj::Obj;
use pipeline::Pipeline;
use shaders::{Uniforms, ALBEDO_UNIFORM};
use vertex::{bind_attribute, POSITION_ATTRIBUTE_SLOT};

const TRIANGLE: [f32; 9] = [
    -0.5, -0.5, 0.0, // bottom left
    0.5, -0.5, 0.0, // bottom right
    0.0, 0.5, 0.0, // up
];

const CLEAR_COLOR: (f32, f32, f32, f32) = (0.2, 0.3, 0.3, 1.0);

/// Host-side color animation fed to the `albedo` uniform.
fn animated_albedo(seconds: f32) -> Vector4 {
    let time = seconds * 5.0;
    let red_value = (time.cos() / 2.0) + 0.5;
    let green_value = (time.sin() / 2.0) + 0.5;
    let blue_value = (time.cos() / 2.0 + FRAC_PI_2) + 0.5;
    Vector4::new(red_value, green_value, blue_value, 1.0)
}

fn load_geometry(config: &Config) -> Result<Obj> {
    match &config.model {
        Some(path) => Obj::load(path).with_context(|| format!("loading {}", path.display())),
        None => {
            let vertices = bind_attribute(POSITION_ATTRIBUTE_SLOT, &TRIANGLE)
                .context("binding the built-in triangle")?;
            Ok(Obj::from_vertices(vertices))
        }
    }
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.logging());

    let geometry = load_geometry(&config)?;
    let vertex_array = geometry.get_vertex_array();

    let (mut window, raylib_thread) = raylib::init()
        .size(config.width as i32, config.height as i32)
        .title("OpenGL playground")
        .log_level(TraceLogLevel::LOG_WARNING)
        .vsync()
        .build();
    window.set_target_fps(60);

    let (width, height) = (config.width as usize, config.height as usize);
    let mut framebuffer = Framebuffer::new(width, height);
    let (r, g, b, a) = CLEAR_COLOR;
    framebuffer.set_background_color(Vector4::new(r, g, b, a));

    let mut pipeline = Pipeline::new(config.pipeline(), width, height);
    let mut uniforms = Uniforms::default();

    log::info!(
        "drawing {} vertices with {:?}",
        vertex_array.len(),
        pipeline.config()
    );

    while !window.window_should_close() {
        if window.is_key_pressed(KeyboardKey::KEY_M) {
            pipeline.set_shading_mode(pipeline.config().shading_mode.toggled());
        }

        uniforms.set_vec4(ALBEDO_UNIFORM, animated_albedo(window.get_time() as f32))?;

        framebuffer.clear();
        pipeline.draw(&mut framebuffer, &uniforms, vertex_array);
        framebuffer.swap_buffers(&mut window, &raylib_thread);

        log::debug!("FPS: {}", window.get_fps());
    }

    Ok(())
}
