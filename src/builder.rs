//! Constructing a [`Puzzle`] from a grid structure.

use std::collections::HashMap;
use std::num::NonZero;

use itertools::Itertools;
use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use strum::VariantArray;

use crate::location::{Dimension, Location};
use crate::puzzle::{Overlap, Puzzle};
use crate::variable::{Direction, Variable};

/// The character marking an open cell in a structure file. Any other character is a block.
pub const OPEN_CELL: char = '_';

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A cell or slot was placed outside the bounds specified by `dims` on the builder.
    OutOfBounds,
    /// A structure string contained no rows.
    EmptyStructure,
}

/// Builds a [`Puzzle`] by marking cells of a rectangular grid open or blocked.
///
/// Slots are not declared directly; [`build`](Self::build) derives them from the open cells, the
/// same way a solver reads a printed grid. Every maximal run of at least two open cells, across
/// or down, becomes a [`Variable`].
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone)]
pub struct PuzzleBuilder {
    // width, height
    dims: (Dimension, Dimension),
    cells: Array2<bool>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl PuzzleBuilder {
    /// Construct a new builder with the specified dimensions, specified in `(x, y)` order.
    /// Every cell starts out blocked.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_elem((dims.1.get(), dims.0.get()), false),
            invalid_reasons: Default::default(),
        }
    }

    /// Read a structure in which each line is a row and [`OPEN_CELL`] marks an open cell.
    ///
    /// The grid is as wide as the longest line; shorter lines are padded with blocks.
    /// Input with no lines at all leaves the builder in an
    /// [`EmptyStructure`](BuilderInvalidReason::EmptyStructure) invalid state.
    pub fn from_structure(structure: &str) -> Self {
        let rows = structure.lines().map(|line| line.trim_end_matches('\r')).collect_vec();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);

        let (Some(width), Some(height)) = (NonZero::new(width), NonZero::new(rows.len())) else {
            let mut builder = Self::with_dims((NonZero::<usize>::MIN, NonZero::<usize>::MIN));
            builder.invalid_reasons.push(BuilderInvalidReason::EmptyStructure);
            return builder;
        };

        let mut builder = Self::with_dims((width, height));
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.chars().enumerate() {
                if cell == OPEN_CELL {
                    builder.open(Location(x, y));
                }
            }
        }

        builder
    }

    /// Mark `location` as fillable.
    ///
    /// May cause the builder to enter an [`OutOfBounds`](BuilderInvalidReason::OutOfBounds) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn open(&mut self, location: Location) -> &mut Self {
        self.set(location, true)
    }

    /// Mark `location` as a block.
    ///
    /// May cause the builder to enter an [`OutOfBounds`](BuilderInvalidReason::OutOfBounds) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn block(&mut self, location: Location) -> &mut Self {
        self.set(location, false)
    }

    /// Open every cell of a slot starting at `start` and running `length` cells in `direction`.
    ///
    /// Whether this produces exactly one variable depends on the surrounding cells: a run that
    /// touches other open cells is merged with them when the builder derives slots.
    /// May cause the builder to enter an [`OutOfBounds`](BuilderInvalidReason::OutOfBounds) invalid state if
    /// any cell of the slot is out of bounds, in which case no cell is opened.
    pub fn open_slot(&mut self, start: Location, direction: Direction, length: usize) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let slot = Variable::new(start, direction, length);
        if !slot.cells().all(|location| location.within(self.dims)) {
            self.invalid_reasons.push(BuilderInvalidReason::OutOfBounds);
            return self;
        }

        for location in slot.cells() {
            self.set(location, true);
        }

        self
    }

    fn set(&mut self, location: Location, open: bool) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        match self.cells.get_mut(location.as_index()) {
            Some(cell) => *cell = open,
            None => self.invalid_reasons.push(BuilderInvalidReason::OutOfBounds),
        }

        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Puzzle`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Puzzle, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let variables = self.derive_variables();
        let mut graph = UnGraphMap::with_capacity(variables.len(), variables.len());

        // each open cell, and the (variable, offset) pairs running through it
        let mut occupants: HashMap<Location, Vec<(Variable, usize)>> = HashMap::new();
        for variable in &variables {
            graph.add_node(*variable);
            for (offset, location) in variable.cells().enumerate() {
                occupants.entry(location).or_default().push((*variable, offset));
            }
        }

        // across and down slots can share at most one cell, and two slots on the same axis never touch
        for (_, through) in occupants.into_iter().sorted_by_key(|(location, _)| *location) {
            for ((a, a_offset), (b, b_offset)) in through.into_iter().tuple_combinations() {
                let overlap = if a < b {
                    Overlap { lower: a_offset, higher: b_offset }
                } else {
                    Overlap { lower: b_offset, higher: a_offset }
                };
                graph.add_edge(a, b, overlap);
            }
        }

        Ok(Puzzle {
            graph,
            dims: self.dims,
            structure: self.cells.clone(),
        })
    }

    /// Scan each row for across slots, then each column for down slots.
    fn derive_variables(&self) -> Vec<Variable> {
        let (width, height) = (self.dims.0.get(), self.dims.1.get());
        let mut variables = Vec::new();

        for direction in Direction::VARIANTS {
            let lines = match direction {
                Direction::Across => (0..height).map(|y| Location(0, y)).collect_vec(),
                Direction::Down => (0..width).map(|x| Location(x, 0)).collect_vec(),
            };
            let span = match direction {
                Direction::Across => width,
                Direction::Down => height,
            };

            for line_start in lines {
                let mut run_start: Option<usize> = None;

                // one step past the end closes a run touching the edge
                for k in 0..=span {
                    let open = k < span && self.cells[direction.attempt_from(line_start, k).as_index()];

                    match (open, run_start) {
                        (true, None) => run_start = Some(k),
                        (false, Some(first)) => {
                            if k - first > 1 {
                                variables.push(Variable::new(
                                    direction.attempt_from(line_start, first),
                                    *direction,
                                    k - first,
                                ));
                            }
                            run_start = None;
                        }
                        _ => {}
                    }
                }
            }
        }

        variables
    }
}
