//! Cell coordinates

use std::fmt;

/// A coordinate on the square grid.
///
/// `x` is the row and `y` the column, so renderers map `x` onto the
/// vertical screen axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether the coordinate lies inside an N×N domain
    pub fn is_within(&self, side_length: usize) -> bool {
        self.x < side_length && self.y < side_length
    }

    /// Offset the cell by a signed delta, staying inside `[0, side_length)`
    pub(crate) fn offset(&self, dx: isize, dy: isize, side_length: usize) -> Option<Cell> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let cell = Cell::new(x, y);
        cell.is_within(side_length).then_some(cell)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_respects_edges() {
        let corner = Cell::new(0, 0);
        assert_eq!(corner.offset(-1, 0, 4), None);
        assert_eq!(corner.offset(0, -1, 4), None);
        assert_eq!(corner.offset(1, 1, 4), Some(Cell::new(1, 1)));

        let far = Cell::new(3, 3);
        assert_eq!(far.offset(1, 0, 4), None);
        assert_eq!(far.offset(-1, -1, 4), Some(Cell::new(2, 2)));
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::from((2, 5)).to_string(), "(2, 5)");
    }
}
