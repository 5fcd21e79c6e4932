//! Quickopen ranks a corpus of lines (typically file paths) against a typed query.
//!
//! Every candidate is scored with a gap-penalized subsequence matcher, the
//! corpus is split over a fixed pool of worker threads, and the merged matches
//! are ranked by descending score. It is meant to be fast enough to re-rank on
//! every keystroke of a quick-open picker.
//!
//! # Examples
//!
//! ```no_run
//! use quickopen::prelude::*;
//!
//! let corpus = Arc::new(Corpus::from_lines(["main.go", "model.go", "makefile"]));
//! let session = SearchSession::new(corpus, &QuickOpenOptions::default()).unwrap();
//!
//! let results = session.search(b"mg");
//! assert_eq!(results[0].text(), "main.go");
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

use std::sync::Arc;

pub use crate::corpus::{Candidate, Corpus};
pub use crate::dispatcher::{Chunking, MatchResult, ParallelDispatcher};
pub use crate::error::{QuickOpenError, Result};
pub use crate::options::QuickOpenOptions;
pub use crate::ranker::{DEFAULT_LIMIT, top_k};
pub use crate::session::{LogObserver, SearchObserver, SearchSession};

pub mod corpus;
pub mod dispatcher;
mod error;
pub mod fuzzy_matcher;
pub mod matrix;
pub mod options;
pub mod prelude;
pub mod ranker;
pub mod reader;
pub mod session;

//------------------------------------------------------------------------------
/// Case handling when comparing needle and candidate bytes
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "snake_case"))]
pub enum CaseMatching {
    /// Bytes must be equal
    #[default]
    Respect,
    /// ASCII letters match regardless of case
    Ignore,
    /// Ignore case unless the needle contains an uppercase ASCII letter
    Smart,
}

//------------------------------------------------------------------------------
/// Scores `needle` against every candidate of `corpus` and returns the best
/// [`DEFAULT_LIMIT`] matches, best first.
///
/// This builds a throwaway [`SearchSession`] sized to the available hardware
/// parallelism. Keep a session around when searching the same corpus repeatedly.
pub fn search(corpus: Arc<Corpus>, needle: &[u8]) -> Result<Vec<MatchResult>> {
    let session = SearchSession::new(corpus, &QuickOpenOptions::default())?;
    Ok(session.search(needle))
}
