//! Rubiks Cube Topology
//!
//! The shared vocabulary between the visualiser and the transformation service:
//! the 54-facelet numbering, the colour palette, the move alphabet, the table of
//! 26 sub-cubes and the permutation each move performs.
//!
//! # Facelet numbering
//!
//! Indices 0-8 are the top face, 45-53 the bottom face. The 36 indices between run
//! round the belt in three rows of twelve, three each for L, F, R and B.
//!
//! # Invariants
//!
//! The sub-cube table carries 8 corners with three facelets, 12 edges with two and
//! 6 centres with one. Together they cover every facelet exactly once; this is
//! asserted at compile time in [`subcube`].

mod error;
mod face;
mod facelet;
mod moves;
mod palette;
pub mod engine;
pub mod subcube;
#[cfg(feature = "serde")]
pub mod wire;

pub use error::{MoveError, StateError};
pub use face::Face;
pub use facelet::{FaceletState, FACELET_COUNT};
pub use moves::{Axis, Direction, Move};
pub use palette::{colour, neutral, rgb_from_hex, FaceletColour, Rgb, COLOUR_COUNT, NEUTRAL_HEX};
pub use subcube::{PieceKind, SubCube, SUBCUBES, SUBCUBE_COUNT};
