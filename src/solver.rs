use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

use log::{debug, info, trace};
use ndarray::Array2;

use crate::assignment::Assignment;
use crate::config::SolverConfig;
use crate::consistency::{self, Arc};
use crate::domain::Domains;
use crate::location::Location;
use crate::puzzle::Puzzle;
use crate::search;
use crate::variable::Variable;

/// Reasons a [`CrosswordSolver`] may fail to fill a puzzle.
///
/// Both mean the puzzle has no fill with the given words; they differ only in how that was found.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolverFailure {
    /// Constraint propagation left `variable` with no candidate words, so no search was attempted.
    Inconsistent {
        /// The slot left empty.
        variable: Variable,
    },
    /// Backtracking search tried every candidate for every slot without completing the grid.
    Exhausted,
}

impl Display for SolverFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inconsistent { variable } => write!(
                f,
                "no word fits the {} slot of length {} at row {}, column {}",
                variable.direction(),
                variable.length(),
                variable.row(),
                variable.col(),
            ),
            Self::Exhausted => write!(f, "search exhausted every candidate"),
        }
    }
}

impl Error for SolverFailure {}

/// Where a backtracking search ended up.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SearchOutcome {
    /// Every slot is filled consistently.
    Solved(Assignment),
    /// No extension of the starting assignment works.
    Exhausted,
}

/// Counters collected while solving.
#[derive(Clone, Debug, Default)]
pub struct Statistics {
    /// Search states entered, including the root.
    pub states: u64,
    /// Tentative assignments undone.
    pub backtracks: u64,
    /// Candidates dropped for having the wrong length.
    pub node_consistency_removed: usize,
    /// Candidates dropped by AC-3.
    pub arc_consistency_removed: usize,
    /// Wall time of a full [`CrosswordSolver::solve`]; zero when the steps are driven by hand.
    pub duration: Duration,
}

/// A completely filled puzzle.
pub struct Solution<'p> {
    puzzle: &'p Puzzle,
    assignment: Assignment,
    statistics: Statistics,
}

impl<'p> Solution<'p> {
    /// The puzzle that was filled.
    pub fn puzzle(&self) -> &'p Puzzle {
        self.puzzle
    }

    /// The word chosen for every slot.
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Discard the puzzle reference, keeping only the words.
    pub fn into_assignment(self) -> Assignment {
        self.assignment
    }

    /// Counters from the solve that produced this.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// The filled grid, `None` on blocked cells.
    pub fn letter_grid(&self) -> Array2<Option<char>> {
        self.puzzle.letter_grid(&self.assignment)
    }
}

impl Display for Solution<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.letter_grid().rows().into_iter().enumerate() {
            for (x, letter) in row.iter().enumerate() {
                let display = match self.puzzle.is_open(Location(x, y)) {
                    true => letter.unwrap_or(' '),
                    false => '█',
                };
                write!(f, "{}", display)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Fills a [`Puzzle`] from a word list by constraint propagation followed by backtracking search.
/// Use [`Self::solve`] to run the whole pipeline, or drive the individual steps directly.
///
/// The solver owns the candidate words for each slot. Only node consistency and
/// [`ac3`](Self::ac3) shrink them; search reads them but never writes them back.
pub struct CrosswordSolver<'p> {
    puzzle: &'p Puzzle,
    domains: Domains,
    config: SolverConfig,
    statistics: Statistics,
}

impl<'p> CrosswordSolver<'p> {
    /// Start every slot of `puzzle` off with the whole of `words` as candidates.
    pub fn new<I, S>(puzzle: &'p Puzzle, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: BTreeSet<String> = words.into_iter().map(Into::into).collect();
        Self {
            puzzle,
            domains: Domains::initialize(puzzle.variables(), &words),
            config: SolverConfig::default(),
            statistics: Statistics::default(),
        }
    }

    /// Replace the default [`SolverConfig`].
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// The puzzle being solved.
    pub fn puzzle(&self) -> &'p Puzzle {
        self.puzzle
    }

    /// Current candidates for every slot.
    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    /// Counters so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Remove every candidate whose length does not match its slot.
    pub fn enforce_node_consistency(&mut self) {
        let removed = self.domains.enforce_node_consistency();
        self.statistics.node_consistency_removed += removed;
        debug!("node consistency removed {} words", removed);
    }

    /// See [`consistency::revise`].
    pub fn revise(&mut self, x: Variable, y: Variable) -> bool {
        consistency::revise(self.puzzle, &mut self.domains, x, y)
    }

    /// Make every slot arc consistent, starting from `arcs` or from every arc if `None`.
    /// See [`consistency::ac3`].
    pub fn ac3(&mut self, arcs: Option<Vec<Arc>>) -> Result<(), SolverFailure> {
        let removed = consistency::ac3(self.puzzle, &mut self.domains, arcs, self.config.worklist)?;
        self.statistics.arc_consistency_removed += removed;
        Ok(())
    }

    /// See [`search::assignment_complete`].
    pub fn assignment_complete(&self, assignment: &Assignment) -> bool {
        search::assignment_complete(self.puzzle, assignment)
    }

    /// See [`search::consistent`].
    pub fn consistent(&self, assignment: &Assignment) -> bool {
        search::consistent(self.puzzle, assignment)
    }

    /// See [`search::select_unassigned_variable`].
    pub fn select_unassigned_variable(&self, assignment: &Assignment) -> Option<Variable> {
        search::select_unassigned_variable(self.puzzle, &self.domains, assignment)
    }

    /// See [`search::order_domain_values`].
    pub fn order_domain_values(&self, variable: Variable, assignment: &Assignment) -> Vec<String> {
        search::order_domain_values(self.puzzle, &self.domains, variable, assignment)
    }

    /// Extend `assignment` depth first until every slot is filled or every option is tried.
    pub fn backtrack(&mut self, mut assignment: Assignment) -> SearchOutcome {
        match self.extend(&mut assignment) {
            true => SearchOutcome::Solved(assignment),
            false => SearchOutcome::Exhausted,
        }
    }

    fn extend(&mut self, assignment: &mut Assignment) -> bool {
        self.statistics.states += 1;

        if self.assignment_complete(assignment) {
            return true;
        }

        let Some(variable) = self.select_unassigned_variable(assignment) else {
            return false;
        };

        for word in self.order_domain_values(variable, assignment) {
            trace!("trying {} in {:?} at depth {}", word, variable, assignment.len());
            assignment.assign(variable, word);

            if self.consistent(assignment) && self.extend(assignment) {
                return true;
            }

            assignment.unassign(variable);
            self.statistics.backtracks += 1;
        }

        false
    }

    /// Enforce node and arc consistency, then search.
    ///
    /// Returns a [`Solution`] on success. If arc consistency already proves the puzzle unfillable,
    /// no search is attempted and [`SolverFailure::Inconsistent`] is returned; otherwise a failed
    /// search yields [`SolverFailure::Exhausted`].
    pub fn solve(mut self) -> Result<Solution<'p>, SolverFailure> {
        let started = Instant::now();

        self.enforce_node_consistency();
        if let Some(variable) = self.puzzle.variables().find(|variable| self.domains.is_empty_for(*variable)) {
            debug!("no word has the length of {:?}", variable);
            return Err(SolverFailure::Inconsistent { variable });
        }

        self.ac3(None)?;

        let outcome = self.backtrack(Assignment::new());
        self.statistics.duration = started.elapsed();
        debug!("search finished: {:?}", self.statistics);

        match outcome {
            SearchOutcome::Solved(assignment) => {
                info!(
                    "filled {} slots after {} states and {} backtracks in {:?}",
                    assignment.len(),
                    self.statistics.states,
                    self.statistics.backtracks,
                    self.statistics.duration,
                );
                Ok(Solution {
                    puzzle: self.puzzle,
                    assignment,
                    statistics: self.statistics,
                })
            }
            SearchOutcome::Exhausted => Err(SolverFailure::Exhausted),
        }
    }
}
