//! Microbenchmark that isolates the subsequence matcher from all other overhead
//! (threading, merging, sorting).

use criterion::{Criterion, criterion_group, criterion_main};

use quickopen::fuzzy_matcher::FuzzyMatcher;
use quickopen::fuzzy_matcher::subsequence::SubsequenceMatcher;

fn synthetic_lines() -> Vec<String> {
    let mut lines = Vec::with_capacity(50_000);
    for ix in 0..50_000 {
        lines.push(format!(
            "src/module_{}/sub_{}/file_{ix}.{}",
            ix % 97,
            ix % 13,
            ["rs", "go", "swift", "md"][ix % 4]
        ));
    }
    lines
}

fn bench_matcher(c: &mut Criterion) {
    let lines = synthetic_lines();

    c.bench_function("micro_subsequence", |b| {
        let m = SubsequenceMatcher::default();
        b.iter(|| {
            let mut count = 0u64;
            for line in &lines {
                if m.fuzzy_match(line.as_bytes(), b"msf1").is_some() {
                    count += 1;
                }
            }
            count
        });
    });

    c.bench_function("micro_subsequence_matrix", |b| {
        let m = SubsequenceMatcher::default();
        b.iter(|| {
            let mut count = 0u64;
            for line in &lines {
                if m.match_matrix(line.as_bytes(), b"msf1").is_some() {
                    count += 1;
                }
            }
            count
        });
    });

    c.bench_function("micro_subsequence_ignore_case", |b| {
        let m = SubsequenceMatcher::default().ignore_case();
        b.iter(|| {
            let mut count = 0u64;
            for line in &lines {
                if m.fuzzy_match(line.as_bytes(), b"MSF1").is_some() {
                    count += 1;
                }
            }
            count
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_matcher
);
criterion_main!(benches);
