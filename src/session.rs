//! Search sessions.
//!
//! A [`SearchSession`] ties together everything a search needs: the shared
//! corpus, the worker pool, the display limit and an instrumentation hook that
//! brackets every search. Nothing is global; callers create as many sessions as
//! they need.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::corpus::Corpus;
use crate::dispatcher::{MatchResult, ParallelDispatcher};
use crate::error::{QuickOpenError, Result};
use crate::fuzzy_matcher::subsequence::SubsequenceMatcher;
use crate::options::QuickOpenOptions;
use crate::ranker::top_k;

//------------------------------------------------------------------------------
/// Hook called around every search of a session.
pub trait SearchObserver: Send + Sync {
    /// Called before the corpus is dispatched.
    fn begin(&self, needle: &[u8]);
    /// Called once the results are ranked.
    fn end(&self, needle: &[u8], matched: usize, elapsed: Duration);
}

/// Default observer, reporting each search through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn begin(&self, needle: &[u8]) {
        debug!("search begin: {:?}", String::from_utf8_lossy(needle));
    }

    fn end(&self, needle: &[u8], matched: usize, elapsed: Duration) {
        debug!(
            "search end: {:?}, {matched} matched in {elapsed:?}",
            String::from_utf8_lossy(needle)
        );
    }
}

//------------------------------------------------------------------------------
/// Everything needed to search one corpus repeatedly.
pub struct SearchSession {
    corpus: Arc<Corpus>,
    dispatcher: ParallelDispatcher,
    limit: usize,
    observer: Box<dyn SearchObserver>,
}

impl SearchSession {
    /// Creates a session over `corpus` configured from `options`.
    ///
    /// Starts the worker pool, which is the only way this can fail.
    pub fn new(corpus: Arc<Corpus>, options: &QuickOpenOptions) -> Result<Self> {
        if options.limit == 0 {
            return Err(QuickOpenError::InvalidOptions(String::from("limit must be at least 1")));
        }
        let matcher = Arc::new(SubsequenceMatcher::new(options.case));
        let dispatcher = ParallelDispatcher::with_workers(matcher, options.threads.unwrap_or(0), options.chunking)?;
        Ok(Self::with_dispatcher(corpus, dispatcher, options.limit))
    }

    /// Creates a session around an existing dispatcher.
    pub fn with_dispatcher(corpus: Arc<Corpus>, dispatcher: ParallelDispatcher, limit: usize) -> Self {
        Self {
            corpus,
            dispatcher,
            limit,
            observer: Box::new(LogObserver),
        }
    }

    /// Replaces the instrumentation hook.
    pub fn observer(mut self, observer: Box<dyn SearchObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The corpus searched by this session.
    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    /// The dispatcher running the searches.
    pub fn dispatcher(&self) -> &ParallelDispatcher {
        &self.dispatcher
    }

    /// Maximum number of results returned by [`SearchSession::search`].
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Every match of `needle`, in corpus order.
    pub fn search_all(&self, needle: &[u8]) -> Vec<MatchResult> {
        let mut results = self.dispatcher.search_all(&self.corpus, needle);
        // workers merge in completion order
        results.sort_unstable_by_key(|r| r.index);
        results
    }

    /// The best matches of `needle`, best first.
    ///
    /// Equal scores come out in corpus order, so repeated searches return the
    /// same list.
    pub fn search(&self, needle: &[u8]) -> Vec<MatchResult> {
        self.observer.begin(needle);
        let start = Instant::now();
        let results = top_k(self.search_all(needle), self.limit);
        self.observer.end(needle, results.len(), start.elapsed());
        results
    }
}
