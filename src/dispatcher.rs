//! Fan-out/fan-in of the matcher over a corpus.
//!
//! The corpus is cut into one contiguous chunk per worker. Each worker scores
//! its chunk on its own, keeping the matches in a local `Vec`, and only takes
//! the shared lock once, to append that `Vec` to the merged results.
use std::borrow::Cow;
use std::num::NonZeroUsize;
use std::ops::Range;
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::corpus::{Candidate, Corpus};
use crate::error::Result;
use crate::fuzzy_matcher::{FuzzyMatcher, ScoreType};

//------------------------------------------------------------------------------
/// A candidate that matched, with its score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult {
    /// The matching candidate
    pub candidate: Candidate,
    /// Its fitness score, higher is better
    pub score: ScoreType,
    /// Position of the candidate in the corpus
    pub index: usize,
}

impl MatchResult {
    /// The candidate decoded for display, invalid UTF-8 replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.candidate)
    }
}

//------------------------------------------------------------------------------
/// Strategy used to split the corpus between workers
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "snake_case"))]
pub enum Chunking {
    /// `len / workers` candidates per chunk, the first `len % workers` chunks
    /// take one more. Every candidate is scored.
    #[default]
    Balanced,
    /// `len / workers` candidates per chunk and nothing more: the trailing
    /// `len % workers` candidates are never scored. Kept for parity with the
    /// historical behaviour.
    Truncated,
}

impl Chunking {
    /// Splits `len` candidates into one contiguous range per worker.
    ///
    /// Always returns `workers` ranges (some may be empty), in corpus order.
    pub fn partition(self, len: usize, workers: usize) -> Vec<Range<usize>> {
        let workers = workers.max(1);
        let chunk_size = len / workers;
        match self {
            Chunking::Balanced => {
                let extra = len % workers;
                (0..workers)
                    .map(|ix| {
                        let start = ix * chunk_size + ix.min(extra);
                        let end = start + chunk_size + usize::from(ix < extra);
                        start..end
                    })
                    .collect()
            }
            Chunking::Truncated => (0..workers)
                .map(|ix| {
                    let start = ix * chunk_size;
                    start..(start + chunk_size).min(len)
                })
                .collect(),
        }
    }

    /// Number of candidates a corpus of `len` loses with `workers` workers.
    pub fn dropped(self, len: usize, workers: usize) -> usize {
        match self {
            Chunking::Balanced => 0,
            Chunking::Truncated => len % workers.max(1),
        }
    }
}

/// Available hardware parallelism, 1 if it cannot be determined.
pub fn available_workers() -> usize {
    thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

//------------------------------------------------------------------------------
/// Runs a matcher over every candidate of a corpus on a fixed worker pool.
pub struct ParallelDispatcher {
    pool: ThreadPool,
    workers: usize,
    chunking: Chunking,
    matcher: Arc<dyn FuzzyMatcher>,
}

impl ParallelDispatcher {
    /// Creates a dispatcher with one worker per available hardware thread.
    pub fn new(matcher: Arc<dyn FuzzyMatcher>) -> Result<Self> {
        Self::with_workers(matcher, available_workers(), Chunking::default())
    }

    /// Creates a dispatcher with an explicit worker count (`0` means hardware
    /// parallelism) and chunking strategy.
    pub fn with_workers(matcher: Arc<dyn FuzzyMatcher>, workers: usize, chunking: Chunking) -> Result<Self> {
        let workers = if workers == 0 { available_workers() } else { workers };
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|ix| format!("quickopen-worker-{ix}"))
            .build()?;
        debug!("dispatcher: {workers} workers, {chunking:?} chunking");
        Ok(Self {
            pool,
            workers,
            chunking,
            matcher,
        })
    }

    /// Number of workers, which is also the number of chunks per search.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// The chunking strategy in use.
    pub fn chunking(&self) -> Chunking {
        self.chunking
    }

    /// Matches `needle` against every candidate and returns all the matches.
    ///
    /// Blocks until every chunk is done. The order of the returned matches
    /// depends on which worker finished first.
    pub fn search_all(&self, corpus: &Corpus, needle: &[u8]) -> Vec<MatchResult> {
        let merged = Mutex::new(Vec::new());
        let matcher = &*self.matcher;
        let chunks = self.chunking.partition(corpus.len(), self.workers);
        trace!("search_all start, total: {}, chunks: {}", corpus.len(), chunks.len());

        self.pool.scope(|scope| {
            for chunk in chunks {
                let merged = &merged;
                scope.spawn(move |_| {
                    let local = match_chunk(matcher, corpus, chunk.clone(), needle);
                    trace!("chunk {chunk:?}: {} matched", local.len());
                    merged.lock().extend(local);
                });
            }
        });

        let merged = merged.into_inner();
        trace!("search_all stop, total matched: {}", merged.len());
        merged
    }
}

fn match_chunk(matcher: &dyn FuzzyMatcher, corpus: &Corpus, chunk: Range<usize>, needle: &[u8]) -> Vec<MatchResult> {
    let start = chunk.start;
    corpus[chunk]
        .iter()
        .enumerate()
        .filter_map(|(offset, candidate)| {
            matcher.fuzzy_match(candidate, needle).map(|score| MatchResult {
                candidate: candidate.clone(),
                score,
                index: start + offset,
            })
        })
        .collect()
}
