use std::collections::BTreeMap;
use std::convert::Infallible;

use crate::connection::Connection;
use crate::letter::Letter;
use crate::location::{Coord, Location};

/// The most lines a diagram may have.
pub const MAX_LINES: usize = 30;

/// The lines of a diagram, as captured from a source.
///
/// Capture stops once a line past [`MAX_LINES`] has been offered; that line is dropped and [`Grid::overflowed`] is set.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Grid {
    lines: Vec<String>,
    overflowed: bool,
}

impl Grid {
    /// Pull lines from a fallible `source`, stopping early at the line cap.
    ///
    /// The first error from `source` is returned as is; nothing after it is read.
    pub fn capture<I, S, E>(source: I) -> Result<Self, E>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: Into<String>,
    {
        let mut grid = Self::default();

        for line in source {
            let line = line?;
            if grid.lines.len() == MAX_LINES {
                grid.overflowed = true;
                break;
            }
            grid.lines.push(line.into());
        }

        Ok(grid)
    }

    /// Shorthand for [`Self::capture`] over lines which cannot fail.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match Self::capture(lines.into_iter().map(Ok::<S, Infallible>)) {
            Ok(grid) => grid,
            Err(never) => match never {},
        }
    }

    /// The captured lines, without newlines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether the source offered more than [`MAX_LINES`] lines.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// Number of captured lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Length of the longest line, in characters.
    pub fn width(&self) -> usize {
        self.lines.iter().map(|line| line.chars().count()).max().unwrap_or(0)
    }

    /// Place a [`Node`] at every cell holding a [`Letter`]. Anything else, valid or not, is skipped.
    pub fn nodes(&self) -> NodeSet {
        self.lines.iter()
            .enumerate()
            .flat_map(|(y, line)| line.chars()
                .enumerate()
                .filter_map(move |(x, character)| Letter::try_from(character).ok()
                    .map(|letter| Node { location: Location(x, y), letter })))
            .collect()
    }
}

/// A letter placed on a diagram.
#[derive(Copy, Clone, Hash, PartialEq, Eq, Ord, PartialOrd, Debug)]
pub struct Node {
    pub location: Location,
    pub letter: Letter,
}

impl Node {
    pub fn connections(&self) -> &'static [Connection] {
        self.letter.connections()
    }

    pub fn holds(&self, connection: Connection) -> bool {
        self.letter.holds(connection)
    }
}

/// Every [`Node`] of one diagram, at most one per location, iterated in reading order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NodeSet {
    // keyed by (row, column)
    nodes: BTreeMap<(Coord, Coord), Node>,
}

impl NodeSet {
    /// The node at `location`, if a letter was placed there.
    pub fn node_at(&self, location: Location) -> Option<Node> {
        self.nodes.get(&location.as_index()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.values().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl FromIterator<Node> for NodeSet {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Self {
            nodes: iter.into_iter().map(|node| (node.location.as_index(), node)).collect(),
        }
    }
}
