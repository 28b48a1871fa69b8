//! Demo driver: renders a scene to an image file.
//!
//! Usage: `trigon [OUTPUT] [OBJ_FILE]`
//!
//! Renders the built-in colored cube (or the given OBJ mesh) through the
//! software pipeline and writes the framebuffer to OUTPUT (default
//! `frame.png`; the format follows the file extension, e.g. `.tga`).

use std::env;
use std::error::Error;

use trigon::math::{Mat4, Vec3};
use trigon::{mesh, pipeline, FrameBuffer};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let output = env::args().nth(1).unwrap_or_else(|| "frame.png".to_string());
    let triangles = match env::args().nth(2) {
        Some(path) => {
            log::info!("loading mesh from {}", path);
            mesh::load_obj(&path)?
        }
        None => mesh::cube(),
    };

    let model = Mat4::rotation_y(0.65) * Mat4::rotation_x(0.35);
    let view = Mat4::look_at(
        Vec3::new(0.0, 0.0, 6.0),
        Vec3::ZERO,
        Vec3::new(0.0, 1.0, 0.0),
    );
    let projection = Mat4::perspective(
        45.0_f32.to_radians(),
        WIDTH as f32 / HEIGHT as f32,
        0.1,
        100.0,
    );

    let mut framebuffer = FrameBuffer::new(WIDTH, HEIGHT);
    pipeline::render(&triangles, &model, &view, &projection, &mut framebuffer);

    // The framebuffer's row 0 is the bottom of the view volume; image files
    // expect the top row first.
    let bytes = framebuffer.to_rgb_bytes();
    let row_stride = (WIDTH * 3) as usize;
    let mut flipped = Vec::with_capacity(bytes.len());
    for y in (0..HEIGHT as usize).rev() {
        flipped.extend_from_slice(&bytes[y * row_stride..(y + 1) * row_stride]);
    }

    image::save_buffer(&output, &flipped, WIDTH, HEIGHT, image::ExtendedColorType::Rgb8)?;
    log::info!("wrote {}x{} frame to {}", WIDTH, HEIGHT, output);
    Ok(())
}
