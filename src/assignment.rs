use std::collections::HashMap;

use crate::variable::Variable;

/// A partial or complete mapping from slots to the words chosen for them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    words: HashMap<Variable, String>,
}

impl Assignment {
    /// An assignment with no slots filled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `word` in `variable`, returning whatever was there before.
    pub fn assign(&mut self, variable: Variable, word: impl Into<String>) -> Option<String> {
        self.words.insert(variable, word.into())
    }

    /// Clear `variable`, returning the word it held.
    pub fn unassign(&mut self, variable: Variable) -> Option<String> {
        self.words.remove(&variable)
    }

    /// The word in `variable`, if any.
    pub fn word(&self, variable: Variable) -> Option<&str> {
        self.words.get(&variable).map(String::as_str)
    }

    /// Whether `variable` holds a word.
    pub fn is_assigned(&self, variable: Variable) -> bool {
        self.words.contains_key(&variable)
    }

    /// Number of filled slots.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no slot is filled.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Filled slots and their words, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, &str)> {
        self.words.iter().map(|(variable, word)| (*variable, word.as_str()))
    }
}

impl FromIterator<(Variable, String)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (Variable, String)>>(iter: T) -> Self {
        Self { words: iter.into_iter().collect() }
    }
}
