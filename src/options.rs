//! Configuration options for quickopen.
//!
//! [`QuickOpenOptions`] configures both the library ([`SearchSession`]) and the
//! `qo` binary. Build it with [`QuickOpenOptionsBuilder`] or, with the `cli`
//! feature, parse it from the command line.
//!
//! [`SearchSession`]: crate::SearchSession

use std::path::PathBuf;

use derive_builder::Builder;

use crate::CaseMatching;
use crate::dispatcher::Chunking;
use crate::ranker::DEFAULT_LIMIT;

/// qo - rank lines against a fuzzy query
///
/// Reads lines from FILE (or stdin), scores every line against the filter
/// and prints the best matches, best first.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(default)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "qo", args_override_self = true, verbatim_doc_comment, version, about)
)]
pub struct QuickOpenOptions {
    //  --- Search ---
    /// Query to match the lines against
    ///
    /// An empty query matches every line with a score of 0.
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Search"))]
    #[builder(setter(into, strip_option))]
    pub filter: Option<String>,

    /// Case handling
    ///
    /// * **respect**: bytes must be equal
    /// * **ignore**: ASCII letters match either case
    /// * **smart**: ignore case unless the query has an uppercase letter
    #[cfg_attr(
        feature = "cli",
        arg(long, value_enum, default_value = "respect", help_heading = "Search", verbatim_doc_comment)
    )]
    pub case: CaseMatching,

    /// Maximum number of results to keep
    #[cfg_attr(feature = "cli", arg(short = 'n', long, default_value_t = DEFAULT_LIMIT, help_heading = "Search"))]
    pub limit: usize,

    //  --- Workers ---
    /// Number of worker threads
    ///
    /// Defaults to the available hardware parallelism. 0 means the same.
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Workers"))]
    #[builder(setter(into, strip_option))]
    pub threads: Option<usize>,

    /// How the lines are split between the workers
    ///
    /// * **balanced**: every line is assigned to exactly one worker
    /// * **truncated**: `lines / workers` per worker, the remainder is never scored
    #[cfg_attr(
        feature = "cli",
        arg(long, value_enum, default_value = "balanced", help_heading = "Workers", verbatim_doc_comment)
    )]
    pub chunking: Chunking,

    //  --- Input / Output ---
    /// Read input delimited by ASCII NUL characters
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Input/Output"))]
    pub read0: bool,

    /// Print output delimited by ASCII NUL characters
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Input/Output"))]
    pub print0: bool,

    /// Print the score before each line, separated by a tab
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Input/Output"))]
    pub print_score: bool,

    /// Print the score matrix of the best match to stderr
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Input/Output"))]
    pub explain: bool,

    /// File to read the lines from, stdin if absent
    #[cfg_attr(feature = "cli", arg(value_name = "FILE"))]
    #[builder(setter(into, strip_option))]
    pub input: Option<PathBuf>,
}

impl Default for QuickOpenOptions {
    fn default() -> Self {
        Self {
            filter: None,
            case: CaseMatching::default(),
            limit: DEFAULT_LIMIT,
            threads: None,
            chunking: Chunking::default(),
            read0: false,
            print0: false,
            print_score: false,
            explain: false,
            input: None,
        }
    }
}

impl QuickOpenOptions {
    /// The query as bytes, empty when none was given.
    pub fn needle(&self) -> &[u8] {
        self.filter.as_deref().unwrap_or_default().as_bytes()
    }

    /// Line terminator for reading the corpus.
    pub fn line_ending(&self) -> u8 {
        if self.read0 { b'\0' } else { b'\n' }
    }

    /// Terminator written after each printed result.
    pub fn output_ending(&self) -> &'static str {
        if self.print0 { "\0" } else { "\n" }
    }
}
