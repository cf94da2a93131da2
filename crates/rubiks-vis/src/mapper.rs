//! Facelet state to sub-cube colours.

use glam::Vec3;
use rubiks_topology::{colour, FaceletState, SubCube, SUBCUBES, SUBCUBE_COUNT};

use crate::mesh::{ColoredMesh, BODY_SCALE};

/// The 26 sub-cube meshes, in the same order as [`SUBCUBES`].
#[derive(Debug, Clone)]
pub struct CubeMeshes {
    meshes: Vec<ColoredMesh>,
}

impl CubeMeshes {
    /// Lay out neutral sub-cubes `spacing` apart.
    pub fn new(spacing: f32) -> Self {
        let meshes = SUBCUBES
            .iter()
            .map(|cube| {
                let [x, y, z] = cube.position;
                let centre = Vec3::new(x as f32, y as f32, z as f32) * spacing;
                ColoredMesh::sub_cube(centre, spacing * BODY_SCALE)
            })
            .collect();
        Self { meshes }
    }

    /// Lay out sub-cubes and colour them from `state`.
    pub fn with_state(state: &FaceletState, spacing: f32) -> Self {
        let mut meshes = Self::new(spacing);
        recolor(state, &mut meshes);
        meshes
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ColoredMesh> {
        self.meshes.get(index)
    }

    /// Each mesh paired with the sub-cube it draws.
    pub fn iter(&self) -> impl Iterator<Item = (&SubCube, &ColoredMesh)> {
        SUBCUBES.iter().zip(&self.meshes)
    }

    /// Indices of meshes whose colours changed, clearing their dirty flags.
    pub fn take_dirty(&mut self) -> Vec<usize> {
        self.meshes
            .iter_mut()
            .enumerate()
            .filter_map(|(i, mesh)| mesh.take_dirty().then_some(i))
            .collect()
    }
}

/// Paint every sticker from `state`.
///
/// Faces no facelet refers to keep the neutral colour. Running it twice with
/// the same state leaves the buffers unchanged.
pub fn recolor(state: &FaceletState, meshes: &mut CubeMeshes) {
    debug_assert_eq!(meshes.meshes.len(), SUBCUBE_COUNT);
    for (cube, mesh) in SUBCUBES.iter().zip(meshes.meshes.iter_mut()) {
        for &(index, face) in cube.facelets {
            mesh.paint_face(face, colour(state[index]));
        }
    }
}
