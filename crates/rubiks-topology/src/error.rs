//! Error types for rubiks-topology.

use thiserror::Error;

use crate::facelet::FACELET_COUNT;
use crate::palette::COLOUR_COUNT;

/// A facelet layout that cannot describe a cube.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// The layout does not carry exactly one entry per facelet.
    #[error("facelet state must have {expected} entries, got {actual}", expected = FACELET_COUNT)]
    WrongLength { actual: usize },

    /// A facelet carries a colour code outside the palette.
    #[error("facelet {index} has colour code {value}, expected a code below {limit}", limit = COLOUR_COUNT)]
    InvalidColour { index: usize, value: u8 },
}

/// A character that is not one of the move symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("unknown move symbol {0:?}")]
    UnknownSymbol(char),
}
