//! Triangle rasterization with perspective-correct interpolation.
//!
//! The rasterizer walks the pixel bounding box of a screen-space triangle,
//! evaluates barycentric coordinates at each pixel center, and writes color
//! and depth through the framebuffer's z-test.
//!
//! # Barycentric computation
//!
//! For triangle vertices A, B, C and sample point P, two helper vectors
//!
//! ```text
//! u = (B.x - A.x, C.x - A.x, A.x - P.x)
//! v = (B.y - A.y, C.y - A.y, A.y - P.y)
//! ```
//!
//! are crossed; with n = u x v the weights are
//!
//! ```text
//! (alpha, beta, gamma) = (1 - (n.x + n.y) / n.z,  n.x / n.z,  n.y / n.z)
//! ```
//!
//! n.z is twice the signed triangle area, so dividing by it normalizes the
//! weights for either winding. A pixel is inside when all three weights are
//! non-negative; ties on an edge are included, so shared edges of adjacent
//! triangles may overdraw.
//!
//! # Perspective correction
//!
//! Color varies linearly in *clip* space, not in screen space. With the
//! per-vertex clip-space w values the per-triangle constant
//! `pv = (w_b * w_c, w_a * w_c, w_a * w_b)` rescales the screen-space
//! weights into clip-space ones without any per-pixel division by w.
//! Depth needs no such correction: NDC z is already an affine function of
//! screen position, so the linear weights interpolate it exactly.

use crate::framebuffer::FrameBuffer;
use crate::math::Vec3;
use crate::vertex::ScreenTriangle;

/// Triangles whose doubled signed area falls below this are treated as
/// degenerate and produce no pixels. Tunable; chosen to reject slivers well
/// under a hundredth of a pixel.
const DEGENERATE_AREA: f32 = 0.01;

/// Barycentric weights of sample point (px, py) in the triangle (a, b, c).
///
/// Returns the sentinel (-1, 1, 1) for degenerate triangles, which fails
/// the non-negativity inside test at every pixel.
#[inline]
fn barycentric(a: Vec3, b: Vec3, c: Vec3, px: f32, py: f32) -> Vec3 {
    let u = Vec3::new(b.x - a.x, c.x - a.x, a.x - px);
    let v = Vec3::new(b.y - a.y, c.y - a.y, a.y - py);
    let n = u.cross(v);

    if n.z.abs() < DEGENERATE_AREA {
        return Vec3::new(-1.0, 1.0, 1.0);
    }
    Vec3::new(1.0 - (n.x + n.y) / n.z, n.x / n.z, n.y / n.z)
}

/// Fill a screen-space triangle into the framebuffer.
///
/// Pixels are sampled at their centers (x + 0.5, y + 0.5). Each covered
/// pixel receives perspective-correct interpolated vertex color and a
/// linearly interpolated depth, written through the depth test.
pub fn fill_triangle(triangle: &ScreenTriangle, framebuffer: &mut FrameBuffer) {
    let [a, b, c] = triangle.vertices;
    let (pa, pb, pc) = (a.position, b.position, c.position);

    let min_x = (pa.x.min(pb.x).min(pc.x).floor() as i32).max(0);
    let max_x = (pa.x.max(pb.x).max(pc.x).ceil() as i32).min(framebuffer.width() as i32 - 1);
    let min_y = (pa.y.min(pb.y).min(pc.y).floor() as i32).max(0);
    let max_y = (pa.y.max(pb.y).max(pc.y).ceil() as i32).min(framebuffer.height() as i32 - 1);

    // Per-triangle constants for perspective correction: products of the
    // preserved clip-space w values, one per opposite-vertex pair.
    let pv = Vec3::new(pb.w * pc.w, pa.w * pc.w, pa.w * pb.w);

    let a2 = pa.xyz();
    let b2 = pb.xyz();
    let c2 = pc.xyz();

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let bary = barycentric(a2, b2, c2, x as f32 + 0.5, y as f32 + 0.5);
            if bary.x < 0.0 || bary.y < 0.0 || bary.z < 0.0 {
                continue;
            }

            let depth = bary.x * pa.z + bary.y * pb.z + bary.z * pc.z;

            let weighted = pv.mul_componentwise(bary);
            let correct = weighted * (1.0 / pv.dot(bary));
            let color = a.color * correct.x + b.color * correct.y + c.color * correct.z;

            framebuffer.set_pixel_with_depth(x, y, depth, color);
        }
    }
}
