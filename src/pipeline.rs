//! The geometry pipeline: transform, clip, project, rasterize.
//!
//! A frame is a strict sequence over the input triangles:
//!
//! 1. [`transform_triangles`] applies the composed model-view-projection
//!    matrix, producing clip-space triangles.
//! 2. [`clip_triangles`] clips each against the view volume and
//!    re-triangulates the surviving polygons.
//! 3. Each clipped vertex is projected and viewport-mapped by
//!    [`to_screen`], preserving clip-space w.
//! 4. [`rasterizer::fill_triangle`] fills the result with depth testing.
//!
//! The whole pipeline is single-threaded and non-blocking; [`render`] is
//! deterministic for a fixed triangle order.

use crate::clipper::{self, MAX_CLIPPED_VERTICES};
use crate::framebuffer::FrameBuffer;
use crate::math::{Mat4, Vec4};
use crate::rasterizer;
use crate::vertex::{ClipTriangle, ClipVertex, ScreenTriangle, ScreenVertex, Triangle};

/// Transform model-space triangles to clip space.
///
/// Each position is promoted to a homogeneous point (w=1) and multiplied by
/// `mvp`; colors pass through unchanged. Triangle ordering and per-triangle
/// vertex ordering are preserved.
pub fn transform_triangles(triangles: &[Triangle], mvp: &Mat4) -> Vec<ClipTriangle> {
    triangles
        .iter()
        .map(|triangle| {
            ClipTriangle::new(triangle.vertices.map(|v| {
                ClipVertex::new(*mvp * Vec4::from_vec3(v.position, 1.0), v.color)
            }))
        })
        .collect()
}

/// Clip triangles against the view volume.
///
/// Fully visible triangles pass through unchanged; partially visible ones
/// are replaced by their fan re-triangulation; invisible ones are dropped.
pub fn clip_triangles(triangles: &[ClipTriangle]) -> Vec<ClipTriangle> {
    let mut clipped = Vec::with_capacity(triangles.len());

    for (index, triangle) in triangles.iter().enumerate() {
        let mut polygon = [triangle.vertices[0]; MAX_CLIPPED_VERTICES];
        let count = clipper::clip_triangle(&triangle.vertices, &mut polygon);
        if count < 3 {
            continue;
        }

        // A clipped triangle can fan out into several; grow once for the
        // worst case of the remaining input to amortize reallocation.
        let fan_count = count - 2;
        if fan_count > 1 {
            clipped.reserve(fan_count + (triangles.len() - index - 1));
        }

        for vertices in clipper::fan(&polygon[..count]) {
            clipped.push(ClipTriangle::new(vertices));
        }
    }

    clipped
}

/// Project a clipped vertex and map it to screen coordinates.
///
/// Performs the perspective divide, then maps NDC x and y to pixel
/// coordinates and NDC z to a [0, 1] depth. The clip-space w survives in
/// the w slot of the result for perspective-correct interpolation.
pub fn to_screen(vertex: &ClipVertex, width: u32, height: u32) -> ScreenVertex {
    let p = vertex.position;
    let ndc = p.xyz() * (1.0 / p.w);
    ScreenVertex::new(
        Vec4::new(
            (ndc.x + 1.0) * width as f32 / 2.0,
            (ndc.y + 1.0) * height as f32 / 2.0,
            (ndc.z + 1.0) / 2.0,
            p.w,
        ),
        vertex.color,
    )
}

/// Render triangles through the full pipeline into the framebuffer.
///
/// Composes MVP = projection * view * model and defers to
/// [`render_with_mvp`]. The framebuffer is not cleared first; callers clear
/// it once per frame.
pub fn render(
    triangles: &[Triangle],
    model: &Mat4,
    view: &Mat4,
    projection: &Mat4,
    framebuffer: &mut FrameBuffer,
) {
    let mvp = *projection * *view * *model;
    render_with_mvp(triangles, &mvp, framebuffer);
}

/// Render triangles with a pre-composed model-view-projection matrix.
pub fn render_with_mvp(triangles: &[Triangle], mvp: &Mat4, framebuffer: &mut FrameBuffer) {
    let clip_triangles_in = transform_triangles(triangles, mvp);
    let visible = clip_triangles(&clip_triangles_in);
    log::debug!(
        "pipeline: {} triangles in, {} after clipping",
        triangles.len(),
        visible.len()
    );

    let width = framebuffer.width();
    let height = framebuffer.height();
    for triangle in &visible {
        let screen = ScreenTriangle::new(
            triangle.vertices.map(|v| to_screen(&v, width, height)),
        );
        rasterizer::fill_triangle(&screen, framebuffer);
    }
}
