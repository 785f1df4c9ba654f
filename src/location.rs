use std::num::NonZero;

/// A single grid coordinate.
pub type Coord = usize;
/// A grid width or height, never zero.
pub type Dimension = NonZero<Coord>;

/// A cell on the grid, as `(x, y)` i.e. `(column, row)` with `y = 0` being the top row.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Debug)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    /// Shift by `(dx, dy)`. Wraps rather than going negative, so the result may be far out of bounds.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    pub(crate) fn within(&self, dims: (Dimension, Dimension)) -> bool {
        self.0 < dims.0.get() && self.1 < dims.1.get()
    }
}

// row-major, so that slots sort the way they read on the page
impl Ord for Location {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
