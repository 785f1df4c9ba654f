use std::collections::{BTreeSet, HashMap};

use crate::variable::Variable;

/// The candidate words still possible for each slot.
///
/// Candidates are kept sorted so iteration, and therefore every tie-break downstream of it, is
/// reproducible from run to run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Domains {
    candidates: HashMap<Variable, BTreeSet<String>>,
}

impl Domains {
    /// Give every variable its own copy of the full word list.
    pub fn initialize(variables: impl IntoIterator<Item = Variable>, words: &BTreeSet<String>) -> Self {
        Self {
            candidates: variables.into_iter().map(|variable| (variable, words.clone())).collect(),
        }
    }

    /// Drop every candidate whose length differs from its variable's, returning how many went.
    pub fn enforce_node_consistency(&mut self) -> usize {
        let mut removed = 0;
        for (variable, words) in self.candidates.iter_mut() {
            let before = words.len();
            words.retain(|word| variable.fits(word));
            removed += before - words.len();
        }

        removed
    }

    /// Candidates for `variable`; empty if it is not part of the puzzle.
    pub fn get(&self, variable: Variable) -> &BTreeSet<String> {
        static NONE: BTreeSet<String> = BTreeSet::new();
        self.candidates.get(&variable).unwrap_or(&NONE)
    }

    /// Number of candidates left for `variable`.
    pub fn len_of(&self, variable: Variable) -> usize {
        self.get(variable).len()
    }

    /// Whether `variable` has run out of candidates.
    pub fn is_empty_for(&self, variable: Variable) -> bool {
        self.get(variable).is_empty()
    }

    /// Total candidates across all variables.
    pub fn total(&self) -> usize {
        self.candidates.values().map(BTreeSet::len).sum()
    }

    /// Remove `words` from `variable`'s candidates in one batch.
    pub(crate) fn remove_all<'a>(&mut self, variable: Variable, words: impl IntoIterator<Item = &'a String>) {
        if let Some(candidates) = self.candidates.get_mut(&variable) {
            for word in words {
                candidates.remove(word);
            }
        }
    }
}
