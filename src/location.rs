pub(crate) type Coord = usize;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A cell `(column, row)` of a diagram. The first character of the first line is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// Row-major index, i.e. reading order.
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }
    // stepping off the top or left edge wraps to a location no line can reach
    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}
