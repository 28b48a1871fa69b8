//! Linear RGB color constants and 8-bit conversion.
//!
//! Colors travel through the pipeline as `Vec3` with components in [0, 1]
//! (unclamped storage); clamping to 8 bits happens only at export.

use crate::math::Vec3;

pub const BLACK: Vec3 = Vec3::new(0.0, 0.0, 0.0);
pub const WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
pub const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);
pub const GREEN: Vec3 = Vec3::new(0.0, 1.0, 0.0);
pub const BLUE: Vec3 = Vec3::new(0.0, 0.0, 1.0);
pub const YELLOW: Vec3 = Vec3::new(1.0, 1.0, 0.0);
pub const CYAN: Vec3 = Vec3::new(0.0, 1.0, 1.0);
pub const MAGENTA: Vec3 = Vec3::new(1.0, 0.0, 1.0);
pub const ORANGE: Vec3 = Vec3::new(1.0, 0.5, 0.0);

/// Default framebuffer clear color, a dark neutral gray.
pub const BACKGROUND: Vec3 = Vec3::new(0.118, 0.118, 0.118);

/// Convert a linear color to 8-bit RGB.
///
/// Each component is scaled by 255, clamped to [0, 255], and rounded toward
/// zero.
pub fn to_rgb8(color: Vec3) -> [u8; 3] {
    [
        (color.x * 255.0).clamp(0.0, 255.0) as u8,
        (color.y * 255.0).clamp(0.0, 255.0) as u8,
        (color.z * 255.0).clamp(0.0, 255.0) as u8,
    ]
}
