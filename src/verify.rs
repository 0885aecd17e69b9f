use std::convert::Infallible;
use std::fmt::{Display, Formatter};

use crate::forest::Forest;
use crate::grid::Grid;
use crate::render;
use crate::validator::{validate, Problem};

/// Everything found by one check of a diagram.
///
/// Its [`Display`] form is the full printed report: the problems (or the success line), a blank line,
/// then a drawing of every tree separated by [`DIVIDER`](render::DIVIDER) lines.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    problems: Vec<Problem>,
    drawings: Vec<String>,
}

impl Report {
    /// Whether the diagram breaks no rule at all.
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }

    /// Problems in the order they are reported.
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// One drawing per tree, in reading order of each tree's first letter.
    pub fn drawings(&self) -> &[String] {
        &self.drawings
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            writeln!(f, "This is a valid tree.")?;
        }
        for problem in &self.problems {
            writeln!(f, "{problem}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.drawings.join(&format!("\n{}\n", render::DIVIDER)))
    }
}

/// Check a diagram read line by line from `source`.
///
/// Reading stops early past the line cap, or at the first error from `source`, which is returned.
pub fn try_verify<I, S, E>(source: I) -> Result<Report, E>
where
    I: IntoIterator<Item = Result<S, E>>,
    S: Into<String>,
{
    Ok(verify_grid(&Grid::capture(source)?))
}

/// Check a diagram given as lines without newlines.
pub fn verify<I, S>(lines: I) -> Report
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    match try_verify(lines.into_iter().map(Ok::<S, Infallible>)) {
        Ok(report) => report,
        Err(never) => match never {},
    }
}

/// Check an already captured diagram.
pub fn verify_grid(grid: &Grid) -> Report {
    let mut problems = validate(grid);

    let trees = Forest::grow(&grid.nodes()).trees();
    match trees.len() {
        0 => problems.push(Problem::NoValidLetters),
        1 => {}
        n => problems.push(Problem::DisconnectedTrees(n)),
    }

    Report {
        problems,
        drawings: trees.iter().map(|tree| render::draw(tree, grid)).collect(),
    }
}
