//! Vertex and triangle types for each pipeline stage.
//!
//! Every stage has its own vertex kind: model space ([`Vertex`]), homogeneous
//! clip space ([`ClipVertex`]), and screen space ([`ScreenVertex`]). The
//! clipper itself is generic over the [`ClipAttributes`] trait, so any vertex
//! carrying a clip-space position and a linear attribute set can be clipped.

use crate::math::{Vec3, Vec4};

/// A model-space vertex with a linear RGB color in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub color: Vec3,
}

impl Vertex {
    pub const fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}

/// A vertex in homogeneous clip space, before the perspective divide.
///
/// After clipping it satisfies `-w <= x, y, z <= w` up to numeric boundary
/// cases at plane intersections.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipVertex {
    /// Position in clip space (x, y, z, w).
    pub position: Vec4,
    pub color: Vec3,
}

impl ClipVertex {
    pub const fn new(position: Vec4, color: Vec3) -> Self {
        Self { position, color }
    }
}

/// A vertex after perspective divide and viewport mapping.
///
/// `position` carries screen-space x and y in pixels, viewport depth z in
/// [0, 1], and the preserved (positive) clip-space w that the rasterizer
/// needs for perspective-correct attribute interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenVertex {
    pub position: Vec4,
    pub color: Vec3,
}

impl ScreenVertex {
    pub const fn new(position: Vec4, color: Vec3) -> Self {
        Self { position, color }
    }
}

/// Capabilities the clipper needs from a vertex.
///
/// Attributes must vary linearly along an edge in clip space, which holds
/// for any attribute interpolated before the perspective divide.
pub trait ClipAttributes: Copy {
    /// The homogeneous clip-space position.
    fn clip_position(&self) -> Vec4;

    /// Interpolate all attributes between two vertices.
    /// Used when a polygon edge crosses a clipping plane.
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl ClipAttributes for ClipVertex {
    fn clip_position(&self) -> Vec4 {
        self.position
    }

    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            color: self.color.lerp(other.color, t),
        }
    }
}

/// An ordered triple of model-space vertices. Winding order is preserved
/// through every pipeline stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub const fn new(vertices: [Vertex; 3]) -> Self {
        Self { vertices }
    }
}

/// An ordered triple of clip-space vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipTriangle {
    pub vertices: [ClipVertex; 3],
}

impl ClipTriangle {
    pub const fn new(vertices: [ClipVertex; 3]) -> Self {
        Self { vertices }
    }
}

/// An ordered triple of screen-space vertices, ready for rasterization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTriangle {
    pub vertices: [ScreenVertex; 3],
}

impl ScreenTriangle {
    pub const fn new(vertices: [ScreenVertex; 3]) -> Self {
        Self { vertices }
    }
}
