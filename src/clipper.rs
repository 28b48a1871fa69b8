//! Homogeneous clipping against the canonical view volume.
//!
//! Clipping occurs after projection (in homogeneous clip space), before the
//! perspective divide. The clip volume is defined by:
//!
//! ```text
//! -w <= x <= w
//! -w <= y <= w
//! -w <= z <= w
//! ```
//!
//! This approach is simpler than view-space clipping because:
//! - The planes are fixed (no FOV-dependent angles)
//! - No need to rebuild when projection parameters change
//! - This is how GPU hardware performs clipping
//!
//! A triangle is clipped against one plane at a time (Sutherland-Hodgman),
//! ping-ponging between two fixed-capacity scratch buffers. The result is a
//! convex polygon of at most [`MAX_CLIPPED_VERTICES`] vertices, which
//! [`fan`] re-triangulates from its first vertex.

use crate::math::Vec4;
use crate::vertex::ClipAttributes;

/// Upper bound on the vertex count of a triangle clipped against all six
/// planes. Each plane pass can add at most one vertex, so the geometric
/// maximum is 9; 12 leaves headroom.
pub const MAX_CLIPPED_VERTICES: usize = 12;

/// The 6 planes of the canonical clip-space volume.
///
/// Each plane is defined implicitly by a linear inequality on (x, y, z, w).
/// The signed distance is non-negative when inside the clip volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClipPlane {
    /// Right plane: x <= w
    Right,
    /// Left plane: x >= -w
    Left,
    /// Top plane: y <= w
    Top,
    /// Bottom plane: y >= -w
    Bottom,
    /// Far plane: z <= w
    Far,
    /// Near plane: z >= -w
    Near,
}

/// Fixed clipping order: +x, -x, +y, -y, +z, -z.
const CLIP_PLANES: [ClipPlane; 6] = [
    ClipPlane::Right,
    ClipPlane::Left,
    ClipPlane::Top,
    ClipPlane::Bottom,
    ClipPlane::Far,
    ClipPlane::Near,
];

impl ClipPlane {
    /// Returns the signed distance from a clip-space position to this plane.
    /// Non-negative = inside the clip volume, negative = outside.
    fn signed_distance(&self, p: Vec4) -> f32 {
        match self {
            Self::Right => p.w - p.x,  // x <= w   =>  w - x >= 0
            Self::Left => p.w + p.x,   // x >= -w  =>  w + x >= 0
            Self::Top => p.w - p.y,    // y <= w   =>  w - y >= 0
            Self::Bottom => p.w + p.y, // y >= -w  =>  w + y >= 0
            Self::Far => p.w - p.z,    // z <= w   =>  w - z >= 0
            Self::Near => p.w + p.z,   // z >= -w  =>  w + z >= 0
        }
    }
}

/// Fast inside test for the trivial-accept path.
///
/// The |x| <= |w|, |y| <= |w| comparisons are a shortcut that ignores the
/// sign of w, so this predicate is only valid as an *inside* test; anything
/// that fails it goes through the full plane-by-plane loop.
fn trivially_inside<V: ClipAttributes>(vertex: &V) -> bool {
    let p = vertex.clip_position();
    p.x.abs() <= p.w.abs()
        && p.y.abs() <= p.w.abs()
        && ClipPlane::Far.signed_distance(p) >= 0.0
        && ClipPlane::Near.signed_distance(p) >= 0.0
}

/// Clip a closed polygon against a single plane.
///
/// Vertices are interpreted as a closed loop (an edge runs from the last
/// vertex back to the first). Each inside vertex is emitted; each edge that
/// crosses the plane additionally emits the intersection vertex, obtained by
/// interpolating at `t = d_a / (d_a - d_b)`. The denominator is nonzero
/// whenever the endpoints lie on opposite sides. An edge with both endpoints
/// exactly on the plane crosses nothing and emits no intersection.
fn clip_polygon_against_plane<V: ClipAttributes>(
    input: &[V],
    output: &mut [V; MAX_CLIPPED_VERTICES],
    plane: ClipPlane,
) -> usize {
    let mut count = 0;
    let mut a = input[0];
    let mut dist_a = plane.signed_distance(a.clip_position());

    for i in 1..=input.len() {
        let b = input[i % input.len()];
        let dist_b = plane.signed_distance(b.clip_position());
        let a_inside = dist_a >= 0.0;
        let b_inside = dist_b >= 0.0;

        if a_inside {
            output[count] = a;
            count += 1;
        }
        if a_inside != b_inside {
            let t = dist_a / (dist_a - dist_b);
            output[count] = a.lerp(&b, t);
            count += 1;
        }

        a = b;
        dist_a = dist_b;
    }

    count
}

/// Clip a triangle against all six planes of the clip volume.
///
/// Writes the clipped convex polygon into `output` and returns its vertex
/// count: 3 for a fully inside triangle (vertices copied unchanged, in
/// order), 0 for a fully rejected one, and up to [`MAX_CLIPPED_VERTICES`]
/// otherwise. Output ordering preserves the winding direction of the input.
pub fn clip_triangle<V: ClipAttributes>(
    triangle: &[V; 3],
    output: &mut [V; MAX_CLIPPED_VERTICES],
) -> usize {
    if triangle.iter().all(trivially_inside) {
        output[..3].copy_from_slice(triangle);
        return 3;
    }

    // Ping-pong scratch buffers: each plane pass reads one and writes the
    // other.
    let mut front = [triangle[0]; MAX_CLIPPED_VERTICES];
    let mut back = [triangle[0]; MAX_CLIPPED_VERTICES];
    front[..3].copy_from_slice(triangle);
    let mut count = 3;

    for plane in CLIP_PLANES {
        if count == 0 {
            break;
        }
        count = clip_polygon_against_plane(&front[..count], &mut back, plane);
        std::mem::swap(&mut front, &mut back);
    }

    output[..count].copy_from_slice(&front[..count]);
    count
}

/// Fan-triangulate a convex polygon from its first vertex.
///
/// Returns the N-2 triangles {(V[0], V[j], V[j+1])}. Fan triangulation is
/// sufficient here because six-plane clipping always yields a convex
/// polygon, and it preserves winding.
pub fn fan<V: Copy>(vertices: &[V]) -> impl Iterator<Item = [V; 3]> + '_ {
    (1..vertices.len().saturating_sub(1)).map(move |i| [vertices[0], vertices[i], vertices[i + 1]])
}
