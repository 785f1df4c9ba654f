//! Checks and orderings used by backtracking search.

use std::cmp::Reverse;

use itertools::Itertools;

use crate::assignment::Assignment;
use crate::domain::Domains;
use crate::puzzle::Puzzle;
use crate::variable::{letter_at, Variable};

/// Whether every slot in the puzzle has a word.
pub fn assignment_complete(puzzle: &Puzzle, assignment: &Assignment) -> bool {
    puzzle.variables().all(|variable| assignment.is_assigned(variable))
}

/// Whether a possibly partial assignment breaks no rule among the slots it covers.
///
/// Words must fit their slots, no word may be used twice, and crossing slots must agree on the
/// shared letter. Unassigned slots are ignored.
pub fn consistent(puzzle: &Puzzle, assignment: &Assignment) -> bool {
    if !assignment.iter().all(|(variable, word)| variable.fits(word)) {
        return false;
    }

    if !assignment.iter().map(|(_, word)| word).all_unique() {
        return false;
    }

    assignment.iter().all(|(variable, word)| {
        puzzle.neighbors(variable).all(|neighbor| {
            match (assignment.word(neighbor), puzzle.overlap(variable, neighbor)) {
                (Some(other), Some((i, j))) => letter_at(word, i) == letter_at(other, j),
                _ => true,
            }
        })
    })
}

/// Pick the next slot to fill: fewest remaining candidates, then most crossings, then the
/// earliest slot in reading order. `None` once every slot is assigned.
pub fn select_unassigned_variable(puzzle: &Puzzle, domains: &Domains, assignment: &Assignment) -> Option<Variable> {
    puzzle.variables()
        .filter(|variable| !assignment.is_assigned(*variable))
        .min_by_key(|variable| (domains.len_of(*variable), Reverse(puzzle.degree(*variable)), *variable))
}

/// Every candidate for `variable`, least constraining first.
///
/// A candidate's cost is the number of candidates it would rule out across all unassigned
/// crossing slots. Equal costs keep alphabetical order.
pub fn order_domain_values(puzzle: &Puzzle, domains: &Domains, variable: Variable, assignment: &Assignment) -> Vec<String> {
    let open_crossings = puzzle.neighbors(variable)
        .filter(|neighbor| !assignment.is_assigned(*neighbor))
        .filter_map(|neighbor| puzzle.overlap(variable, neighbor).map(|offsets| (neighbor, offsets)))
        .collect_vec();

    domains.get(variable).iter()
        .map(|word| {
            let eliminated: usize = open_crossings.iter()
                .map(|(neighbor, (i, j))| {
                    let letter = letter_at(word, *i);
                    domains.get(*neighbor).iter()
                        .filter(|other| letter_at(other, *j) != letter)
                        .count()
                })
                .sum();
            (word, eliminated)
        })
        .sorted_by_key(|(_, eliminated)| *eliminated)
        .map(|(word, _)| word.clone())
        .collect_vec()
}
