//! The six outer faces of the cube.

/// One face of the cube, named from the viewer's perspective.
///
/// Axes follow the renderer: +X is right, +Y is up, +Z points at the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    Front,
    Left,
    Back,
    Right,
    Up,
    Down,
}

impl Face {
    /// All faces in move-button order.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Left,
        Face::Back,
        Face::Right,
        Face::Up,
        Face::Down,
    ];

    /// Single-letter name (`F`, `L`, `B`, `R`, `U`, `D`).
    pub fn letter(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Left => 'L',
            Face::Back => 'B',
            Face::Right => 'R',
            Face::Up => 'U',
            Face::Down => 'D',
        }
    }

    /// Parse an upper-case face letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|face| face.letter() == letter)
    }

    /// Outward unit normal on the sub-cube lattice.
    pub fn normal(self) -> [i8; 3] {
        match self {
            Face::Front => [0, 0, 1],
            Face::Back => [0, 0, -1],
            Face::Right => [1, 0, 0],
            Face::Left => [-1, 0, 0],
            Face::Up => [0, 1, 0],
            Face::Down => [0, -1, 0],
        }
    }

    /// Which face a facelet index lies on.
    ///
    /// Indices 0-8 are the top face, 45-53 the bottom, and the three middle rows
    /// of twelve run L, F, R, B around the belt.
    pub fn of_facelet(index: usize) -> Option<Self> {
        match index {
            0..=8 => Some(Face::Up),
            9..=44 => {
                let column = (index - 9) % 12;
                Some(match column / 3 {
                    0 => Face::Left,
                    1 => Face::Front,
                    2 => Face::Right,
                    _ => Face::Back,
                })
            }
            45..=53 => Some(Face::Down),
            _ => None,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
