//! The candidates a search runs over.

use std::ops::Deref;
use std::sync::Arc;

/// One corpus entry, e.g. a file path, as raw bytes.
///
/// Cloning is a reference count bump, so matches can hand candidates out
/// without copying them.
pub type Candidate = Arc<[u8]>;

/// An ordered, read-only list of candidates.
///
/// A corpus is built once and then shared (usually behind an `Arc`) by every
/// search. Nothing in this crate mutates it after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    items: Vec<Candidate>,
}

impl Corpus {
    /// Wraps already built candidates.
    pub fn new(items: Vec<Candidate>) -> Self {
        Self { items }
    }

    /// Builds a corpus from anything that can be viewed as bytes.
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        lines.into_iter().map(|line| Candidate::from(line.as_ref())).collect()
    }

    /// The candidates, in corpus order.
    pub fn as_slice(&self) -> &[Candidate] {
        &self.items
    }
}

impl Deref for Corpus {
    type Target = [Candidate];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl FromIterator<Candidate> for Corpus {
    fn from_iter<T: IntoIterator<Item = Candidate>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
