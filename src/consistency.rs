//! Arc consistency over the slot constraint graph.

use std::collections::VecDeque;

use itertools::Itertools;
use log::{debug, trace};

use crate::config::Worklist;
use crate::domain::Domains;
use crate::puzzle::Puzzle;
use crate::solver::SolverFailure;
use crate::variable::{letter_at, Variable};

/// An ordered pair `(x, y)`: make `x` consistent with `y`.
pub type Arc = (Variable, Variable);

/// Every `(x, neighbor)` arc in the puzzle.
pub fn all_arcs(puzzle: &Puzzle) -> Vec<Arc> {
    puzzle.variables()
        .flat_map(move |x| puzzle.neighbors(x).map(move |y| (x, y)))
        .collect_vec()
}

/// Arcs still to be revised, taken off in the order the [`Worklist`] discipline dictates.
#[derive(Debug)]
struct ArcQueue {
    discipline: Worklist,
    arcs: VecDeque<Arc>,
}

impl ArcQueue {
    fn with_initial_arcs(discipline: Worklist, arcs: Vec<Arc>) -> Self {
        Self { discipline, arcs: VecDeque::from(arcs) }
    }

    fn pop(&mut self) -> Option<Arc> {
        match self.discipline {
            Worklist::Lifo => self.arcs.pop_back(),
            Worklist::Fifo => self.arcs.pop_front(),
        }
    }

    fn push(&mut self, arc: Arc) {
        self.arcs.push_back(arc);
    }
}

/// Make `x` arc consistent with `y`.
///
/// A candidate for `x` survives only if some candidate for `y` agrees with it on the shared cell
/// and is a different word, since no word may fill two slots. Unsupported candidates are removed
/// in one batch. Returns whether anything was removed; slots which do not cross never constrain
/// each other, so those return `false` untouched.
pub fn revise(puzzle: &Puzzle, domains: &mut Domains, x: Variable, y: Variable) -> bool {
    let Some((i, j)) = puzzle.overlap(x, y) else {
        return false;
    };

    let support = domains.get(y);
    let unsupported = domains.get(x).iter()
        .filter(|word_x| {
            let letter = letter_at(word_x, i);
            !support.iter().any(|word_y| letter.is_some() && letter_at(word_y, j) == letter && *word_x != word_y)
        })
        .cloned()
        .collect_vec();

    if unsupported.is_empty() {
        return false;
    }

    trace!("revising {:?} against {:?} removed {} words", x, y, unsupported.len());
    domains.remove_all(x, &unsupported);
    true
}

/// Run AC-3 starting from `arcs`, or from every arc in the puzzle if `arcs` is `None`.
///
/// Whenever a revision shrinks the domain of `x`, every other neighbor of `x` is requeued against
/// it, since support it relied on may be gone. Returns the number of words removed, or
/// [`SolverFailure::Inconsistent`] naming the first variable left with no candidates, at which
/// point propagation stops.
pub fn ac3(
    puzzle: &Puzzle,
    domains: &mut Domains,
    arcs: Option<Vec<Arc>>,
    discipline: Worklist,
) -> Result<usize, SolverFailure> {
    let before = domains.total();
    let mut queue = ArcQueue::with_initial_arcs(discipline, arcs.unwrap_or_else(|| all_arcs(puzzle)));
    debug!("starting arc consistency with {} arcs ({})", queue.arcs.len(), discipline);

    while let Some((x, y)) = queue.pop() {
        if !revise(puzzle, domains, x, y) {
            continue;
        }

        if domains.is_empty_for(x) {
            debug!("arc consistency emptied the domain of {:?}", x);
            return Err(SolverFailure::Inconsistent { variable: x });
        }

        for neighbor in puzzle.neighbors(x).filter(|neighbor| *neighbor != y) {
            queue.push((neighbor, x));
        }
    }

    let removed = before - domains.total();
    debug!("arc consistency removed {} words", removed);
    Ok(removed)
}
