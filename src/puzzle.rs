use std::fmt::{Display, Formatter};

use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;

use crate::assignment::Assignment;
use crate::location::{Dimension, Location};
use crate::solver::{CrosswordSolver, Solution, SolverFailure};
use crate::variable::{letter_at, Variable};

/// Where two crossing slots share a cell.
///
/// Offsets are stored relative to the [`Ord`] of the two endpoints, since an undirected graph
/// edge has no intrinsic orientation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) struct Overlap {
    // offset into the lesser variable's word
    pub(crate) lower: usize,
    // offset into the greater variable's word
    pub(crate) higher: usize,
}

/// The static shape of a crossword: which cells are open, which slots exist, and where slots cross.
///
/// Puzzles should be built using a [`PuzzleBuilder`](crate::builder::PuzzleBuilder).
/// A puzzle never changes once built; solving borrows it.
pub struct Puzzle {
    pub(crate) graph: UnGraphMap<Variable, Overlap>,
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) structure: Array2<bool>,
}

impl Puzzle {
    /// Width and height of the grid, in that order.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// Whether `location` is an open (fillable) cell.
    pub fn is_open(&self, location: Location) -> bool {
        self.structure.get(location.as_index()).copied().unwrap_or(false)
    }

    /// All slots, in the order the builder discovered them.
    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.graph.nodes()
    }

    /// Number of slots.
    pub fn variable_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Slots sharing a cell with `variable`.
    pub fn neighbors(&self, variable: Variable) -> impl Iterator<Item = Variable> + '_ {
        self.graph.neighbors(variable)
    }

    /// Number of slots crossing `variable`.
    pub fn degree(&self, variable: Variable) -> usize {
        self.graph.neighbors(variable).count()
    }

    /// `Some((i, j))` if character `i` of `x` and character `j` of `y` occupy the same cell.
    pub fn overlap(&self, x: Variable, y: Variable) -> Option<(usize, usize)> {
        self.graph.edge_weight(x, y).map(|overlap| {
            if x < y {
                (overlap.lower, overlap.higher)
            } else {
                (overlap.higher, overlap.lower)
            }
        })
    }

    /// Project a (possibly partial) assignment onto the grid.
    pub fn letter_grid(&self, assignment: &Assignment) -> Array2<Option<char>> {
        let mut letters = Array2::from_elem(self.structure.raw_dim(), None);

        for (variable, word) in assignment.iter() {
            for (k, location) in variable.cells().enumerate() {
                if let Some(cell) = letters.get_mut(location.as_index()) {
                    *cell = letter_at(word, k);
                }
            }
        }

        letters
    }

    /// Fill this puzzle from `words` with the default solver configuration.
    ///
    /// Returns according to the result of [`CrosswordSolver::solve`].
    pub fn solve<I, S>(&self, words: I) -> Result<Solution<'_>, SolverFailure>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CrosswordSolver::new(self, words).solve()
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.structure.rows() {
            for open in row {
                write!(f, "{}", if *open { '_' } else { '#' })?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
