//! Convenience re-exports of commonly used types.
//!
//! This module provides a convenient way to import all the commonly used
//! quickopen types and traits with a single `use quickopen::prelude::*;` statement.

pub use crate::fuzzy_matcher::subsequence::{SubsequenceMatch, SubsequenceMatcher};
pub use crate::fuzzy_matcher::{FuzzyMatcher, ScoreType};
pub use crate::matrix::ScoreMatrix;
pub use crate::options::{QuickOpenOptions, QuickOpenOptionsBuilder};
pub use crate::reader::read_corpus;
pub use crate::*;
pub use std::sync::Arc;
