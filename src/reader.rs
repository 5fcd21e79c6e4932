//! Building a corpus from a byte stream.
//!
//! Lines are kept as raw bytes; nothing is decoded. Empty lines are skipped, a
//! trailing `\r` before a `\n` terminator is stripped.

use std::io::BufRead;

use crate::corpus::{Candidate, Corpus};
use crate::error::Result;

/// Reads every `line_ending`-terminated record of `source` into a corpus.
pub fn read_corpus<R: BufRead>(source: R, line_ending: u8) -> Result<Corpus> {
    let mut items = Vec::new();
    for record in source.split(line_ending) {
        let mut record = record?;
        if line_ending == b'\n' && record.last() == Some(&b'\r') {
            record.pop();
        }
        if record.is_empty() {
            continue;
        }
        items.push(Candidate::from(record));
    }
    trace!("read {} candidates", items.len());
    Ok(Corpus::new(items))
}
