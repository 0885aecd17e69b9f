use std::collections::{BTreeSet, HashSet};

use itertools::Itertools;
use strum::VariantArray;
use thiserror::Error;

use crate::grid::{Grid, MAX_LINES};
use crate::letter::{is_valid_character, spell, Letter};

/// The most characters a line may have, not counting its newline.
pub const MAX_LINE_LENGTH: usize = 29;

/// A rule of the puzzle which a diagram breaks.
///
/// Problems never stop a check; they are gathered and reported together.
/// The [`Display`](std::fmt::Display) form is the line (or lines) printed in a report.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Problem {
    /// The source offered more than [`MAX_LINES`] lines.
    #[error("PROBLEM: more than 30 lines.")]
    TooManyLines,
    /// A line longer than [`MAX_LINE_LENGTH`]; `line` counts from 1.
    #[error("PROBLEM: more than 30 characters in line {line} (including newline).")]
    LineTooLong { line: usize },
    /// A line using characters other than letters and spaces.
    #[error("PROBLEM: Invalid characters in line {line}:\n{}", .characters.iter().join(""))]
    InvalidCharacters { line: usize, characters: BTreeSet<char> },
    /// Every occurrence of a letter past its first, in reading order.
    #[error("PROBLEM: Duplicate letters:\n{}", spell(.0))]
    DuplicateLetters(Vec<Letter>),
    /// Letters which appear nowhere, in alphabetical order.
    #[error("PROBLEM: Missing letters:\n{}", spell(.0))]
    MissingLetters(Vec<Letter>),
    /// Not a single letter was placed, so there is no tree at all.
    #[error("PROBLEM: No valid letters present.")]
    NoValidLetters,
    /// The letters fall apart into this many separate trees.
    #[error("PROBLEM: {0} disconnected trees:")]
    DisconnectedTrees(usize),
}

/// Check the shape and spelling of a diagram, without regard to how its letters join up.
pub fn validate(grid: &Grid) -> Vec<Problem> {
    let mut problems = Vec::new();

    for (index, line) in grid.lines().iter().enumerate() {
        let number = index + 1;

        if line.chars().count() > MAX_LINE_LENGTH {
            problems.push(Problem::LineTooLong { line: number });
        }

        let characters: BTreeSet<char> = line.chars()
            .filter(|c| !is_valid_character(*c))
            .collect();
        if !characters.is_empty() {
            problems.push(Problem::InvalidCharacters { line: number, characters });
        }
    }

    if grid.overflowed() {
        problems.push(Problem::TooManyLines);
    }

    let present = present_letters(grid);

    let duplicates = duplicate_letters(&present);
    if !duplicates.is_empty() {
        problems.push(Problem::DuplicateLetters(duplicates));
    }

    let missing = missing_letters(&present);
    if !missing.is_empty() {
        problems.push(Problem::MissingLetters(missing));
    }

    problems
}

/// All letters of the diagram in reading order, whitespace and invalid characters dropped.
fn present_letters(grid: &Grid) -> Vec<Letter> {
    grid.lines().iter()
        .flat_map(|line| line.chars())
        .filter(|c| !c.is_whitespace())
        .filter_map(|c| Letter::try_from(c).ok())
        .collect_vec()
}

/// Drop the first occurrence of each letter; whatever remains is surplus.
pub(crate) fn duplicate_letters(present: &[Letter]) -> Vec<Letter> {
    let mut seen = HashSet::with_capacity(Letter::VARIANTS.len());
    present.iter()
        .copied()
        .filter(|letter| !seen.insert(*letter))
        .collect_vec()
}

pub(crate) fn missing_letters(present: &[Letter]) -> Vec<Letter> {
    let present: HashSet<&Letter> = present.iter().collect();
    Letter::VARIANTS.iter()
        .filter(|letter| !present.contains(letter))
        .copied()
        .sorted()
        .collect_vec()
}
