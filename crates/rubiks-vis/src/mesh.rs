//! Sub-cube geometry with a per-vertex colour channel.
//!
//! Every sub-cube is a neutral body box with a slightly smaller sticker quad
//! floating just above each of its six faces. Both runs are laid out face by
//! face in [`FACE_ORDER`], six vertices (two triangles) per face:
//!
//! ```text
//! 0..36    body      R L U D F B
//! 36..72   stickers  R L U D F B
//! ```
//!
//! Only sticker colours ever change; [`face_offset`] locates a face's run.

use glam::Vec3;
use rubiks_topology::{neutral, Face, Rgb};

/// Vertices per face (two triangles, not indexed).
pub const FACE_VERTICES: usize = 6;
pub const BODY_VERTICES: usize = 6 * FACE_VERTICES;
pub const VERTEX_COUNT: usize = BODY_VERTICES + 6 * FACE_VERTICES;

/// Body edge length relative to the spacing between sub-cube centres.
pub const BODY_SCALE: f32 = 0.96;
const STICKER_SCALE: f32 = 0.85;
const STICKER_LIFT: f32 = 0.002;

/// Order in which faces are laid out in the vertex buffer (+X, -X, +Y, -Y, +Z, -Z).
pub const FACE_ORDER: [Face; 6] = [
    Face::Right,
    Face::Left,
    Face::Up,
    Face::Down,
    Face::Front,
    Face::Back,
];

/// First vertex of the sticker run for `face`.
pub fn face_offset(face: Face) -> usize {
    let slot = match face {
        Face::Right => 0,
        Face::Left => 1,
        Face::Up => 2,
        Face::Down => 3,
        Face::Front => 4,
        Face::Back => 5,
    };
    BODY_VERTICES + slot * FACE_VERTICES
}

fn face_normal(face: Face) -> Vec3 {
    let [x, y, z] = face.normal();
    Vec3::new(x as f32, y as f32, z as f32)
}

/// Interleaved vertex for upload to a render surface.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub colour: [f32; 3],
}

/// Fixed geometry whose colour buffer is rewritten in place.
#[derive(Debug, Clone)]
pub struct ColoredMesh {
    centre: Vec3,
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    colours: Vec<Rgb>,
    dirty: bool,
}

impl ColoredMesh {
    /// Build a neutral sub-cube centred on `centre` with body edge `edge`.
    pub fn sub_cube(centre: Vec3, edge: f32) -> Self {
        let half = edge / 2.0;
        let mut positions = Vec::with_capacity(VERTEX_COUNT);
        let mut normals = Vec::with_capacity(VERTEX_COUNT);

        for face in FACE_ORDER {
            push_quad(&mut positions, &mut normals, centre, face, half, half);
        }
        for face in FACE_ORDER {
            let depth = half + STICKER_LIFT * edge;
            push_quad(&mut positions, &mut normals, centre, face, depth, half * STICKER_SCALE);
        }

        Self {
            centre,
            positions,
            normals,
            colours: vec![neutral(); VERTEX_COUNT],
            dirty: true,
        }
    }

    pub fn centre(&self) -> Vec3 {
        self.centre
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    pub fn colours(&self) -> &[Rgb] {
        &self.colours
    }

    /// Colour buffer as raw bytes, three `f32` per vertex.
    pub fn colour_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colours)
    }

    /// Interleaved position, normal and colour for every vertex.
    pub fn vertices(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.colours)
            .map(|((&position, &normal), &colour)| MeshVertex {
                position,
                normal,
                colour,
            })
            .collect()
    }

    /// Colour of the sticker on `face`.
    pub fn face_colour(&self, face: Face) -> Rgb {
        self.colours[face_offset(face)]
    }

    /// Write `colour` into the six sticker vertices of `face`.
    pub fn paint_face(&mut self, face: Face, colour: Rgb) {
        let offset = face_offset(face);
        self.colours[offset..offset + FACE_VERTICES].fill(colour);
        self.dirty = true;
    }

    /// Whether the colour buffer changed since the last [`ColoredMesh::take_dirty`].
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, returning its previous value.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

fn push_quad(
    positions: &mut Vec<[f32; 3]>,
    normals: &mut Vec<[f32; 3]>,
    centre: Vec3,
    face: Face,
    depth: f32,
    half_extent: f32,
) {
    let normal = face_normal(face);
    // Next axis round X -> Y -> Z, so u x v == normal
    let u = Vec3::new(normal.z.abs(), normal.x.abs(), normal.y.abs());
    let v = normal.cross(u);
    let corner = |su: f32, sv: f32| (centre + normal * depth + (u * su + v * sv) * half_extent).to_array();

    // Counter-clockwise seen from outside
    positions.extend([
        corner(-1.0, -1.0),
        corner(1.0, -1.0),
        corner(1.0, 1.0),
        corner(-1.0, -1.0),
        corner(1.0, 1.0),
        corner(-1.0, 1.0),
    ]);
    normals.extend([normal.to_array(); FACE_VERTICES]);
}
