//! Scene geometry input: OBJ loading and built-in shapes.
//!
//! Meshes are flattened into independent colored [`Triangle`]s, the input
//! format of the rendering pipeline. Per-vertex colors come from the OBJ
//! file when present and fall back to a fixed palette otherwise.

use std::fmt;
use std::path::Path;

use crate::color;
use crate::math::Vec3;
use crate::vertex::{Triangle, Vertex};

#[derive(Debug)]
pub enum LoadError {
    Tobj(tobj::LoadError),
    NoModels,
    NoVertices,
    InvalidFaces,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Tobj(e) => write!(f, "failed to load OBJ: {}", e),
            LoadError::NoModels => write!(f, "OBJ file contains no models"),
            LoadError::NoVertices => write!(f, "mesh has no vertices"),
            LoadError::InvalidFaces => write!(f, "face indices not divisible by 3"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Tobj(e) => Some(e),
            _ => None,
        }
    }
}

impl From<tobj::LoadError> for LoadError {
    fn from(e: tobj::LoadError) -> Self {
        LoadError::Tobj(e)
    }
}

/// Vertex colors assigned by index when the source mesh has none.
const PALETTE: [Vec3; 8] = [
    color::RED,
    color::GREEN,
    color::BLUE,
    color::YELLOW,
    color::CYAN,
    color::MAGENTA,
    color::ORANGE,
    color::WHITE,
];

/// Load the first model of an OBJ file as a colored triangle list.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Vec<Triangle>, LoadError> {
    let (models, _materials) = tobj::load_obj(path.as_ref(), &tobj::GPU_LOAD_OPTIONS)?;

    // For now we only support a single model
    let model = models.into_iter().next().ok_or(LoadError::NoModels)?;
    let mesh = model.mesh;

    if mesh.positions.is_empty() {
        return Err(LoadError::NoVertices);
    }
    if mesh.indices.len() % 3 != 0 {
        return Err(LoadError::InvalidFaces);
    }

    // Convert flat [x, y, z, x, y, z, ...] to Vec3
    let positions: Vec<Vec3> = mesh
        .positions
        .chunks_exact(3)
        .map(|c| Vec3::new(c[0], c[1], c[2]))
        .collect();
    let colors: Vec<Vec3> = mesh
        .vertex_color
        .chunks_exact(3)
        .map(|c| Vec3::new(c[0], c[1], c[2]))
        .collect();

    let vertex = |index: u32| {
        let index = index as usize;
        let color = colors
            .get(index)
            .copied()
            .unwrap_or(PALETTE[index % PALETTE.len()]);
        Vertex::new(positions[index], color)
    };

    Ok(mesh
        .indices
        .chunks_exact(3)
        .map(|face| Triangle::new([vertex(face[0]), vertex(face[1]), vertex(face[2])]))
        .collect())
}

const CUBE_CORNERS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

const CUBE_FACES: [[usize; 3]; 12] = [
    // Front face
    [0, 1, 2],
    [0, 2, 3],
    // Right face
    [3, 2, 4],
    [3, 4, 5],
    // Back face
    [5, 4, 6],
    [5, 6, 7],
    // Left face
    [7, 6, 1],
    [7, 1, 0],
    // Top face
    [1, 6, 4],
    [1, 4, 2],
    // Bottom face
    [5, 7, 0],
    [5, 0, 3],
];

/// A unit cube centered at the origin with palette-colored corners.
pub fn cube() -> Vec<Triangle> {
    CUBE_FACES
        .iter()
        .map(|face| {
            Triangle::new(face.map(|corner| Vertex::new(CUBE_CORNERS[corner], PALETTE[corner])))
        })
        .collect()
}
