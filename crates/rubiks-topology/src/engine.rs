//! Face-turn permutations over the facelet numbering.
//!
//! Each clockwise move is a fixed set of 4-cycles: the colour at the first index of
//! a cycle moves to the second, the second to the third, and so on. The
//! counter-clockwise move is the inverse permutation. Indices outside every cycle
//! keep their colour.

use crate::face::Face;
use crate::facelet::{FaceletState, FACELET_COUNT};
use crate::moves::{Axis, Direction, Move};

type Cycles = [[u8; 4]];

const F_CYCLES: [[u8; 4]; 5] = [[6, 15, 47, 35], [7, 27, 46, 23], [8, 39, 45, 11], [12, 14, 38, 36], [13, 26, 37, 24]];
const L_CYCLES: [[u8; 4]; 5] = [[0, 12, 45, 44], [3, 24, 48, 32], [6, 36, 51, 20], [9, 11, 35, 33], [10, 23, 34, 21]];
const R_CYCLES: [[u8; 4]; 5] = [[2, 42, 47, 14], [5, 30, 50, 26], [8, 18, 53, 38], [15, 17, 41, 39], [16, 29, 40, 27]];
const B_CYCLES: [[u8; 4]; 5] = [[0, 33, 53, 17], [1, 21, 52, 29], [2, 9, 51, 41], [18, 20, 44, 42], [19, 32, 43, 30]];
const U_CYCLES: [[u8; 4]; 5] = [[0, 2, 8, 6], [1, 5, 7, 3], [9, 18, 15, 12], [10, 19, 16, 13], [11, 20, 17, 14]];
const D_CYCLES: [[u8; 4]; 5] = [[33, 36, 39, 42], [34, 37, 40, 43], [35, 38, 41, 44], [45, 47, 53, 51], [46, 50, 52, 48]];

const X_CYCLES: [[u8; 4]; 13] = [
    [0, 44, 45, 12], [1, 43, 46, 13], [2, 42, 47, 14], [3, 32, 48, 24], [4, 31, 49, 25],
    [5, 30, 50, 26], [6, 20, 51, 36], [7, 19, 52, 37], [8, 18, 53, 38], [9, 33, 35, 11],
    [10, 21, 34, 23], [15, 17, 41, 39], [16, 29, 40, 27],
];
const Y_CYCLES: [[u8; 4]; 13] = [
    [0, 2, 8, 6], [1, 5, 7, 3], [9, 18, 15, 12], [10, 19, 16, 13], [11, 20, 17, 14],
    [21, 30, 27, 24], [22, 31, 28, 25], [23, 32, 29, 26], [33, 42, 39, 36], [34, 43, 40, 37],
    [35, 44, 41, 38], [45, 51, 53, 47], [46, 48, 52, 50],
];
const Z_CYCLES: [[u8; 4]; 13] = [
    [0, 17, 53, 33], [1, 29, 52, 21], [2, 41, 51, 9], [3, 16, 50, 34], [4, 28, 49, 22],
    [5, 40, 48, 10], [6, 15, 47, 35], [7, 27, 46, 23], [8, 39, 45, 11], [12, 14, 38, 36],
    [13, 26, 37, 24], [18, 42, 44, 20], [19, 30, 43, 32],
];

/// A rearrangement of facelet positions. `destination(i)` is where the colour at
/// index `i` ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permutation([u8; FACELET_COUNT]);

impl Permutation {
    pub const IDENTITY: Permutation = Permutation::identity();

    const fn identity() -> Self {
        let mut map = [0u8; FACELET_COUNT];
        let mut i = 0;
        while i < FACELET_COUNT {
            map[i] = i as u8;
            i += 1;
        }
        Permutation(map)
    }

    const fn from_cycles(cycles: &Cycles) -> Self {
        let mut map = Self::identity().0;
        let mut c = 0;
        while c < cycles.len() {
            let cycle = cycles[c];
            let mut k = 0;
            while k < 4 {
                map[cycle[k] as usize] = cycle[(k + 1) % 4];
                k += 1;
            }
            c += 1;
        }
        Permutation(map)
    }

    /// The permutation that undoes this one.
    pub const fn inverse(&self) -> Self {
        let mut map = [0u8; FACELET_COUNT];
        let mut i = 0;
        while i < FACELET_COUNT {
            map[self.0[i] as usize] = i as u8;
            i += 1;
        }
        Permutation(map)
    }

    /// Where the colour at `index` moves to.
    pub fn destination(&self, index: usize) -> usize {
        self.0[index] as usize
    }

    /// Apply `self` first, then `next`.
    pub fn then(&self, next: &Permutation) -> Permutation {
        let mut map = [0u8; FACELET_COUNT];
        for (i, slot) in map.iter_mut().enumerate() {
            *slot = next.0[self.0[i] as usize];
        }
        Permutation(map)
    }

    pub fn apply(&self, state: &FaceletState) -> FaceletState {
        let codes = state.codes();
        let mut next = [0u8; FACELET_COUNT];
        for (from, &to) in self.0.iter().enumerate() {
            next[to as usize] = codes[from];
        }
        FaceletState::from_valid(next)
    }
}

const F_CW: Permutation = Permutation::from_cycles(&F_CYCLES);
const L_CW: Permutation = Permutation::from_cycles(&L_CYCLES);
const R_CW: Permutation = Permutation::from_cycles(&R_CYCLES);
const B_CW: Permutation = Permutation::from_cycles(&B_CYCLES);
const U_CW: Permutation = Permutation::from_cycles(&U_CYCLES);
const D_CW: Permutation = Permutation::from_cycles(&D_CYCLES);
const X_CW: Permutation = Permutation::from_cycles(&X_CYCLES);
const Y_CW: Permutation = Permutation::from_cycles(&Y_CYCLES);
const Z_CW: Permutation = Permutation::from_cycles(&Z_CYCLES);

/// The facelet permutation a move performs.
pub fn permutation(mv: Move) -> Permutation {
    let (clockwise, direction) = match mv {
        Move::Turn { face, direction } => {
            let p = match face {
                Face::Front => F_CW,
                Face::Left => L_CW,
                Face::Right => R_CW,
                Face::Back => B_CW,
                Face::Up => U_CW,
                Face::Down => D_CW,
            };
            (p, direction)
        }
        Move::Rotate { axis, direction } => {
            let p = match axis {
                Axis::X => X_CW,
                Axis::Y => Y_CW,
                Axis::Z => Z_CW,
            };
            (p, direction)
        }
    };
    match direction {
        Direction::Clockwise => clockwise,
        Direction::CounterClockwise => clockwise.inverse(),
    }
}

/// Apply one move.
pub fn apply(state: &FaceletState, mv: Move) -> FaceletState {
    permutation(mv).apply(state)
}

/// Result of applying a symbol string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub state: FaceletState,
    /// Symbols that were not moves and were skipped
    pub ignored: Vec<char>,
}

/// Apply every symbol of `symbols` left to right. Characters that are not move
/// symbols are skipped and reported in [`Applied::ignored`].
pub fn apply_sequence(state: &FaceletState, symbols: &str) -> Applied {
    let mut state = *state;
    let mut ignored = Vec::new();
    for symbol in symbols.chars() {
        match Move::try_from(symbol) {
            Ok(mv) => state = apply(&state, mv),
            Err(_) => ignored.push(symbol),
        }
    }
    Applied { state, ignored }
}

/// Compose the permutations of a symbol string, skipping non-move characters.
pub fn sequence_permutation(symbols: &str) -> Permutation {
    symbols
        .chars()
        .filter_map(|symbol| Move::try_from(symbol).ok())
        .fold(Permutation::IDENTITY, |acc, mv| acc.then(&permutation(mv)))
}
