#[allow(dead_code)]
#[macro_use]
mod common;

use common::{corpus_of, session};
use quickopen::prelude::*;

fn matching(corpus: &Corpus, needle: &[u8]) -> Vec<usize> {
    let matcher = SubsequenceMatcher::default();
    (0..corpus.len())
        .filter(|&ix| matcher.fuzzy_match(&corpus[ix], needle).is_some())
        .collect()
}

fn lines(len: usize) -> Vec<String> {
    // every third line cannot match "ab"
    (0..len)
        .map(|ix| if ix % 3 == 2 { format!("zz{ix}") } else { format!("a{ix}b") })
        .collect()
}

#[test]
fn balanced_chunking_scores_every_candidate() {
    for len in [0, 1, 4, 7, 13, 29] {
        for workers in 1..=5 {
            let corpus = corpus_of(lines(len));
            let expected = matching(&corpus, b"ab");
            let session = session(corpus, workers, Chunking::Balanced);
            let found: Vec<_> = session.search_all(b"ab").iter().map(|r| r.index).collect();
            assert_eq!(found, expected, "len={len} workers={workers}");
            assert_eq!(Chunking::Balanced.dropped(len, workers), 0);
        }
    }
}

#[test]
fn truncated_chunking_drops_the_remainder() {
    for len in [0, 1, 4, 7, 13, 29] {
        for workers in 1..=5 {
            let corpus = corpus_of(lines(len));
            let all_matches = matching(&corpus, b"ab");
            let dropped = Chunking::Truncated.dropped(len, workers);
            assert_eq!(dropped, len % workers);

            let kept = len - dropped;
            let dropped_matches = all_matches.iter().filter(|&&ix| ix >= kept).count();

            let session = session(corpus, workers, Chunking::Truncated);
            let found: Vec<_> = session.search_all(b"ab").iter().map(|r| r.index).collect();
            assert_eq!(found.len() + dropped_matches, all_matches.len(), "len={len} workers={workers}");
            assert!(found.iter().all(|&ix| ix < kept));
        }
    }
}

#[test]
fn scenario_one_more_candidate_than_workers() {
    let workers = 4;
    let corpus = corpus_of(["ab"; 5]);

    let truncated = session(corpus.clone(), workers, Chunking::Truncated);
    let found: Vec<_> = truncated.search(b"ab").iter().map(|r| r.index).collect();
    assert_eq!(found, [0, 1, 2, 3]);

    let balanced = session(corpus, workers, Chunking::Balanced);
    let found: Vec<_> = balanced.search(b"ab").iter().map(|r| r.index).collect();
    assert_eq!(found, [0, 1, 2, 3, 4]);
}

#[test]
fn hardware_sized_pool() {
    let corpus = corpus_of(lines(10));
    let session = SearchSession::new(corpus, &QuickOpenOptions::default()).unwrap();
    let workers = session.dispatcher().workers();
    assert!(workers >= 1);
    assert_eq!(session.search_all(b"ab").len(), matching(session.corpus(), b"ab").len());
}
