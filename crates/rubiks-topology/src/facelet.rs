//! The 54-facelet cube state.

use std::ops::Index;

use crate::error::StateError;
use crate::palette::{FaceletColour, COLOUR_COUNT};

/// Number of facelets on a 3x3x3 cube.
pub const FACELET_COUNT: usize = 54;

/// Colour code of every facelet, indexed by the fixed facelet numbering.
///
/// Always exactly 54 codes, each below [`COLOUR_COUNT`]. A state is never edited
/// in place; transformations produce a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct FaceletState([u8; FACELET_COUNT]);

impl FaceletState {
    /// The solved layout every session starts from.
    pub const SOLVED: FaceletState = FaceletState([
        0, 0, 0, 0, 0, 0, 0, 0, 0, //
        1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, //
        1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, //
        1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, //
        5, 5, 5, 5, 5, 5, 5, 5, 5,
    ]);

    /// Build a state from raw colour codes, rejecting codes outside the palette.
    pub fn new(codes: [u8; FACELET_COUNT]) -> Result<Self, StateError> {
        if let Some((index, &value)) = codes
            .iter()
            .enumerate()
            .find(|&(_, &code)| code as usize >= COLOUR_COUNT)
        {
            return Err(StateError::InvalidColour { index, value });
        }
        Ok(Self(codes))
    }

    /// Build a state from a layout already known to hold valid colour codes,
    /// such as a permutation of an existing state.
    pub(crate) fn from_valid(codes: [u8; FACELET_COUNT]) -> Self {
        Self(codes)
    }

    pub fn codes(&self) -> &[u8; FACELET_COUNT] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Colour at a facelet index.
    pub fn colour(&self, index: usize) -> Option<FaceletColour> {
        self.0.get(index).copied().and_then(FaceletColour::from_code)
    }

    /// Number of facelets carrying each colour code.
    pub fn colour_counts(&self) -> [usize; COLOUR_COUNT] {
        let mut counts = [0; COLOUR_COUNT];
        for &code in &self.0 {
            counts[code as usize] += 1;
        }
        counts
    }
}

impl Default for FaceletState {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl Index<usize> for FaceletState {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl TryFrom<&[u8]> for FaceletState {
    type Error = StateError;

    fn try_from(codes: &[u8]) -> Result<Self, StateError> {
        let codes: [u8; FACELET_COUNT] = codes
            .try_into()
            .map_err(|_| StateError::WrongLength { actual: codes.len() })?;
        Self::new(codes)
    }
}

impl TryFrom<Vec<u8>> for FaceletState {
    type Error = StateError;

    fn try_from(codes: Vec<u8>) -> Result<Self, StateError> {
        Self::try_from(codes.as_slice())
    }
}

impl From<FaceletState> for Vec<u8> {
    fn from(state: FaceletState) -> Self {
        state.to_vec()
    }
}
