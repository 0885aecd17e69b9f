use itertools::Itertools;
use ndarray::Array2;

use crate::connection::Connection;
use crate::forest::Tree;
use crate::grid::Grid;
use crate::location::Location;

/// Printed between the drawings of separate trees.
pub const DIVIDER: &str = "________________________________________";

/// The glyph joining `location` to the cell below and to the right of it.
///
/// `\` when `location` reaches down to its lower-right neighbour and that one reaches back up;
/// otherwise `/` when the cell below reaches its upper-right neighbour (the cell to the right of `location`) and is reached back;
/// otherwise a space. Only nodes of `tree` count.
pub fn connector_at(tree: &Tree, location: Location) -> char {
    let down_right = location.offset_by((1, 1));
    if let (Some(upper), Some(lower)) = (tree.node_at(location), tree.node_at(down_right)) {
        if upper.holds(Connection::Down) && lower.holds(Connection::Up) {
            return '\\';
        }
    }

    let down = location.offset_by((0, 1));
    let right = location.offset_by((1, 0));
    if let (Some(lower), Some(upper)) = (tree.node_at(down), tree.node_at(right)) {
        if lower.holds(Connection::Left) && upper.holds(Connection::Right) {
            return '/';
        }
    }

    ' '
}

/// Redraw `grid` showing only the letters of `tree`, spread out so the strokes joining them can be drawn in between.
///
/// Every character is followed by a spacer column and every line but the last by a connector row.
/// A row keeps the length of the line it came from, doubled.
pub fn draw(tree: &Tree, grid: &Grid) -> String {
    let lines = grid.lines();
    if lines.is_empty() {
        return String::new();
    }

    // (row, column) canvas; widths[row] is how much of each canvas row belongs to its line
    let mut canvas = Array2::from_elem((lines.len() * 2 - 1, grid.width() * 2), ' ');
    let mut widths = Vec::with_capacity(canvas.nrows());

    for (y, line) in lines.iter().enumerate() {
        let length = line.chars().count();

        for (x, character) in line.chars().enumerate() {
            if tree.contains(Location(x, y)) {
                canvas[[y * 2, x * 2]] = character;
            }
        }
        widths.push(length * 2);

        if y + 1 < lines.len() {
            for x in 0..length {
                canvas[[y * 2 + 1, x * 2 + 1]] = connector_at(tree, Location(x, y));
            }
            widths.push(length * 2);
        }
    }

    print(&canvas, &widths)
}

/// Dump `canvas` one row per line, cutting each row to its width.
fn print(canvas: &Array2<char>, widths: &[usize]) -> String {
    canvas.rows()
        .into_iter()
        .zip(widths)
        .map(|(row, width)| row.iter().take(*width).collect::<String>())
        .join("\n")
}
