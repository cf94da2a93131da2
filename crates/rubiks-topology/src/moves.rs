//! Move symbols.
//!
//! A move is a single character: an upper-case face letter turns that face a
//! quarter clockwise (looking at the face), the lower-case letter turns it
//! counter-clockwise. `X`, `Y` and `Z` (and their lower-case inverses) turn the
//! whole cube about the R, U and F axes.

use std::fmt;

use crate::error::MoveError;
use crate::face::Face;

/// Quarter-turn direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Whole-cube rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Turns with R
    X,
    /// Turns with U
    Y,
    /// Turns with F
    Z,
}

/// A single quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Turn one outer face.
    Turn { face: Face, direction: Direction },
    /// Rotate the whole cube.
    Rotate { axis: Axis, direction: Direction },
}

impl Move {
    /// The twelve face turns offered as move buttons, clockwise first.
    pub const FACE_TURNS: [Move; 12] = [
        Move::cw(Face::Front),
        Move::cw(Face::Left),
        Move::cw(Face::Back),
        Move::cw(Face::Right),
        Move::cw(Face::Up),
        Move::cw(Face::Down),
        Move::ccw(Face::Front),
        Move::ccw(Face::Left),
        Move::ccw(Face::Back),
        Move::ccw(Face::Right),
        Move::ccw(Face::Up),
        Move::ccw(Face::Down),
    ];

    pub const fn cw(face: Face) -> Self {
        Move::Turn {
            face,
            direction: Direction::Clockwise,
        }
    }

    pub const fn ccw(face: Face) -> Self {
        Move::Turn {
            face,
            direction: Direction::CounterClockwise,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Move::Turn { direction, .. } | Move::Rotate { direction, .. } => direction,
        }
    }

    /// The move that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Move::Turn { face, direction } => Move::Turn {
                face,
                direction: direction.reversed(),
            },
            Move::Rotate { axis, direction } => Move::Rotate {
                axis,
                direction: direction.reversed(),
            },
        }
    }

    /// The character this move is written as.
    pub fn symbol(self) -> char {
        let upper = match self {
            Move::Turn { face, .. } => face.letter(),
            Move::Rotate { axis: Axis::X, .. } => 'X',
            Move::Rotate { axis: Axis::Y, .. } => 'Y',
            Move::Rotate { axis: Axis::Z, .. } => 'Z',
        };
        match self.direction() {
            Direction::Clockwise => upper,
            Direction::CounterClockwise => upper.to_ascii_lowercase(),
        }
    }
}

impl TryFrom<char> for Move {
    type Error = MoveError;

    fn try_from(symbol: char) -> Result<Self, MoveError> {
        let direction = if symbol.is_ascii_uppercase() {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        };
        let upper = symbol.to_ascii_uppercase();

        if let Some(face) = Face::from_letter(upper) {
            return Ok(Move::Turn { face, direction });
        }
        let axis = match upper {
            'X' => Axis::X,
            'Y' => Axis::Y,
            'Z' => Axis::Z,
            _ => return Err(MoveError::UnknownSymbol(symbol)),
        };
        Ok(Move::Rotate { axis, direction })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
