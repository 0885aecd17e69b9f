use strum::VariantArray;

use crate::location::Location;

/// One of the four diagonal strokes a letter may join with.
///
/// The names follow the numbering of the puzzle (1 up, 2 left, 3 right, 4 down); each one reaches a diagonal neighbour.
/// Two letters are joined only when each holds the stroke pointing at the other, see [`Connection::invert`].
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
#[repr(u8)]
pub enum Connection {
    /// Reaches the upper-left neighbour.
    Up = 1,
    /// Reaches the upper-right neighbour.
    Left = 2,
    /// Reaches the lower-left neighbour.
    Right = 3,
    /// Reaches the lower-right neighbour.
    Down = 4,
}

impl Connection {
    /// The puzzle's number for this direction, `1..=4`.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// The direction a neighbour must hold to join back, numbered `5 - self`.
    pub fn invert(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
        }
    }

    /// Step diagonally from `location` in this direction.
    pub fn attempt_from(self, location: Location) -> Location {
        let d = self.number() as isize;
        location.offset_by((1 - (d % 2) * 2, if d < 3 { -1 } else { 1 }))
    }

    /// Find the direction leading from `a` to `b`, if they are diagonal neighbours.
    pub fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|dir| dir.attempt_from(a) == b)
    }
}
