use strum::{Display, VariantArray};

use crate::location::{Coord, Location};

/// The axis a slot runs along.
#[derive(Copy, Clone, VariantArray, Display, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Left to right.
    Across,
    /// Top to bottom.
    Down,
}

impl Direction {
    /// Step `distance` cells from `location` along this axis.
    pub fn attempt_from(&self, location: Location, distance: usize) -> Location {
        match self {
            Self::Across => location.offset_by((distance as isize, 0)),
            Self::Down => location.offset_by((0, distance as isize)),
        }
    }
}

/// A slot in the grid which must hold exactly one word.
///
/// Variables are plain values; two variables are the same slot iff they share start location,
/// direction and length. The derived ordering is row-major by start location, then direction,
/// then length, and is what breaks ties between otherwise equally good slots during search.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub struct Variable {
    start: Location,
    direction: Direction,
    length: usize,
}

impl Variable {
    /// The slot of `length` cells starting at `start` and running in `direction`.
    pub fn new(start: Location, direction: Direction, length: usize) -> Self {
        Self { start, direction, length }
    }

    /// The first cell.
    #[inline]
    pub fn start(&self) -> Location {
        self.start
    }

    /// Row of the first cell.
    #[inline]
    pub fn row(&self) -> Coord {
        self.start.1
    }

    /// Column of the first cell.
    #[inline]
    pub fn col(&self) -> Coord {
        self.start.0
    }

    /// The axis the slot runs along.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of cells, and so the length of any word placed here.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Every cell covered by this slot, in word order.
    pub fn cells(&self) -> impl Iterator<Item = Location> {
        let (start, direction) = (self.start, self.direction);
        (0..self.length).map(move |k| direction.attempt_from(start, k))
    }

    /// Whether `word` satisfies this slot's unary constraint.
    #[inline]
    pub fn fits(&self, word: &str) -> bool {
        word.chars().count() == self.length
    }
}

/// The character at `index` in `word`, counting characters rather than bytes.
#[inline]
pub(crate) fn letter_at(word: &str, index: usize) -> Option<char> {
    word.chars().nth(index)
}
