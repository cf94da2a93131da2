//! The 26 visible sub-cubes and the facelets each one carries.
//!
//! Every facelet index appears on exactly one sub-cube face. Corners carry three
//! facelets, edges two and face centres one, so the table covers all 54 facelets.
//! Both facts are checked at compile time.

use crate::face::Face;
use crate::facelet::FACELET_COUNT;

/// Number of sub-cubes that make up the puzzle (the hidden core is omitted).
pub const SUBCUBE_COUNT: usize = 26;

pub const CORNER_COUNT: usize = 8;
pub const EDGE_COUNT: usize = 12;
pub const CENTRE_COUNT: usize = 6;

/// What kind of piece a sub-cube is, by how many outer faces it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Centre,
    Edge,
    Corner,
}

/// A sub-cube's lattice position and the facelets painted on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubCube {
    /// Lattice coordinates, each in `-1..=1`
    pub position: [i8; 3],
    /// (facelet index, face) pairs
    pub facelets: &'static [(usize, Face)],
}

impl SubCube {
    pub fn kind(&self) -> PieceKind {
        match self.facelets.len() {
            3 => PieceKind::Corner,
            2 => PieceKind::Edge,
            _ => PieceKind::Centre,
        }
    }

    /// Facelet index painted on `face`, if this sub-cube shows that face.
    pub fn facelet_on(&self, face: Face) -> Option<usize> {
        self.facelets
            .iter()
            .find(|(_, f)| *f == face)
            .map(|(index, _)| *index)
    }
}

const fn sc(position: [i8; 3], facelets: &'static [(usize, Face)]) -> SubCube {
    SubCube { position, facelets }
}

use Face::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};

/// Every sub-cube, top layer first.
pub const SUBCUBES: [SubCube; SUBCUBE_COUNT] = [
    sc([-1, 1, -1], &[(0, U), (9, L), (20, B)]),
    sc([0, 1, -1], &[(1, U), (19, B)]),
    sc([1, 1, -1], &[(2, U), (17, R), (18, B)]),
    sc([-1, 1, 0], &[(3, U), (10, L)]),
    sc([0, 1, 0], &[(4, U)]),
    sc([1, 1, 0], &[(5, U), (16, R)]),
    sc([-1, 1, 1], &[(6, U), (11, L), (12, F)]),
    sc([0, 1, 1], &[(7, U), (13, F)]),
    sc([1, 1, 1], &[(8, U), (14, F), (15, R)]),
    sc([-1, 0, -1], &[(21, L), (32, B)]),
    sc([-1, 0, 0], &[(22, L)]),
    sc([-1, 0, 1], &[(23, L), (24, F)]),
    sc([0, 0, 1], &[(25, F)]),
    sc([1, 0, 1], &[(26, F), (27, R)]),
    sc([1, 0, 0], &[(28, R)]),
    sc([1, 0, -1], &[(29, R), (30, B)]),
    sc([0, 0, -1], &[(31, B)]),
    sc([-1, -1, -1], &[(33, L), (44, B), (51, D)]),
    sc([-1, -1, 0], &[(34, L), (48, D)]),
    sc([-1, -1, 1], &[(35, L), (36, F), (45, D)]),
    sc([0, -1, 1], &[(37, F), (46, D)]),
    sc([1, -1, 1], &[(38, F), (39, R), (47, D)]),
    sc([1, -1, 0], &[(40, R), (50, D)]),
    sc([1, -1, -1], &[(41, R), (42, B), (53, D)]),
    sc([0, -1, -1], &[(43, B), (52, D)]),
    sc([0, -1, 0], &[(49, D)]),
];

const fn count_with(len: usize) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < SUBCUBE_COUNT {
        if SUBCUBES[i].facelets.len() == len {
            count += 1;
        }
        i += 1;
    }
    count
}

const fn covers_each_facelet_once() -> bool {
    let mut seen = [false; FACELET_COUNT];
    let mut i = 0;
    while i < SUBCUBE_COUNT {
        let facelets = SUBCUBES[i].facelets;
        let mut j = 0;
        while j < facelets.len() {
            let index = facelets[j].0;
            if index >= FACELET_COUNT || seen[index] {
                return false;
            }
            seen[index] = true;
            j += 1;
        }
        i += 1;
    }
    let mut k = 0;
    while k < FACELET_COUNT {
        if !seen[k] {
            return false;
        }
        k += 1;
    }
    true
}

const _: () = assert!(count_with(3) == CORNER_COUNT);
const _: () = assert!(count_with(2) == EDGE_COUNT);
const _: () = assert!(count_with(1) == CENTRE_COUNT);
const _: () = assert!(3 * CORNER_COUNT + 2 * EDGE_COUNT + CENTRE_COUNT == FACELET_COUNT);
const _: () = assert!(covers_each_facelet_once());

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn facelet_pairs_partition_the_state() {
        let total: usize = SUBCUBES.iter().map(|c| c.facelets.len()).sum();
        assert_eq!(total, FACELET_COUNT);

        let kinds = |kind| SUBCUBES.iter().filter(|c| c.kind() == kind).count();
        assert_eq!(kinds(PieceKind::Corner), 8);
        assert_eq!(kinds(PieceKind::Edge), 12);
        assert_eq!(kinds(PieceKind::Centre), 6);
    }

    #[test]
    fn positions_are_the_non_core_lattice_points() {
        let positions: HashSet<[i8; 3]> = SUBCUBES.iter().map(|c| c.position).collect();
        assert_eq!(positions.len(), SUBCUBE_COUNT);
        assert!(!positions.contains(&[0, 0, 0]));
        for p in &positions {
            assert!(p.iter().all(|v| (-1..=1).contains(v)));
        }
    }

    #[test]
    fn faces_point_outward_from_position() {
        for cube in &SUBCUBES {
            for &(_, face) in cube.facelets {
                let n = face.normal();
                let axis = n.iter().position(|v| *v != 0).unwrap();
                assert_eq!(cube.position[axis], n[axis], "{:?} on {:?}", face, cube.position);
            }
        }
    }

    #[test]
    fn pair_count_matches_outer_faces() {
        for cube in &SUBCUBES {
            let outer = cube.position.iter().filter(|v| **v != 0).count();
            assert_eq!(cube.facelets.len(), outer);
        }
    }

    #[test]
    fn face_letters_agree_with_facelet_numbering() {
        for cube in &SUBCUBES {
            for &(index, face) in cube.facelets {
                assert_eq!(Face::of_facelet(index), Some(face), "facelet {index}");
            }
        }
    }

    #[test]
    fn facelet_on_finds_face() {
        let corner = &SUBCUBES[8];
        assert_eq!(corner.facelet_on(Face::Front), Some(14));
        assert_eq!(corner.facelet_on(Face::Back), None);
    }
}
