use std::collections::BTreeSet;
use std::convert::Infallible;
use std::str::FromStr;

/// A deduplicated, upper-cased vocabulary read from a word file with one word per line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    words: BTreeSet<String>,
}

impl WordList {
    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the file held no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word`, already upper-cased, is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Words in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl FromStr for WordList {
    type Err = Infallible;

    /// Blank lines are skipped and surrounding whitespace is trimmed.
    fn from_str(contents: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            words: contents.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_uppercase)
                .collect(),
        })
    }
}

impl IntoIterator for WordList {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}
