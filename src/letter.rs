use std::fmt::{Display, Formatter};

use itertools::Itertools;
use strum::VariantArray;
use thiserror::Error;

use crate::connection::Connection;
use crate::connection::Connection::{Down, Left, Right, Up};

/// The 23 letters an alphabet tree is made of: every capital except `B`, `D` and `O`.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
#[repr(u8)]
pub enum Letter {
    A = b'A',
    C = b'C',
    E = b'E',
    F = b'F',
    G = b'G',
    H = b'H',
    I = b'I',
    J = b'J',
    K = b'K',
    L = b'L',
    M = b'M',
    N = b'N',
    P = b'P',
    Q = b'Q',
    R = b'R',
    S = b'S',
    T = b'T',
    U = b'U',
    V = b'V',
    W = b'W',
    X = b'X',
    Y = b'Y',
    Z = b'Z',
}

/// A character which is not one of the [`Letter`]s.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("{0:?} is not a tree letter")]
pub struct NotALetter(pub char);

impl Letter {
    /// The strokes this letter's glyph joins with. Ordered by direction number.
    pub fn connections(self) -> &'static [Connection] {
        match self {
            Self::A | Self::M | Self::R => &[Right, Down],
            Self::C | Self::E => &[Left, Down],
            Self::F | Self::N | Self::S => &[Left, Right],
            Self::G => &[Left],
            Self::H | Self::I | Self::K | Self::X => &[Up, Left, Right, Down],
            Self::J => &[Up, Right],
            Self::L | Self::Z => &[Up, Down],
            Self::P => &[Right],
            Self::Q => &[Down],
            Self::T | Self::U | Self::V | Self::W | Self::Y => &[Up, Left],
        }
    }

    /// Whether `connection` is among [`Self::connections`].
    pub fn holds(self, connection: Connection) -> bool {
        self.connections().contains(&connection)
    }

    /// The capital this letter is written as.
    pub fn glyph(self) -> char {
        char::from(self as u8)
    }
}

impl TryFrom<char> for Letter {
    type Error = NotALetter;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::VARIANTS.iter()
            .copied()
            .find(|letter| letter.glyph() == value)
            .ok_or(NotALetter(value))
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Whether `character` may appear in a diagram at all: a [`Letter`] or a space.
pub fn is_valid_character(character: char) -> bool {
    character == ' ' || Letter::try_from(character).is_ok()
}

/// Spell out `letters` as one word.
pub(crate) fn spell(letters: &[Letter]) -> String {
    letters.iter().join("")
}
