use quickopen::prelude::*;

/// Every combination of a few directories and file names, in a fixed order.
pub fn paths() -> Vec<String> {
    let dirs = ["src", "src/engine", "src/tui", "tests", "benches", "docs/guide"];
    let stems = [
        "main", "model", "matcher", "makefile", "mod", "options", "reader", "ranker", "session", "util",
    ];
    let exts = ["rs", "go", "md", "txt"];
    let mut paths = Vec::new();
    for dir in dirs {
        for stem in stems {
            for ext in exts {
                paths.push(format!("{dir}/{stem}.{ext}"));
            }
        }
    }
    paths
}

pub fn corpus_of<I, L>(lines: I) -> Arc<Corpus>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    Arc::new(Corpus::from_lines(lines))
}

pub fn session(corpus: Arc<Corpus>, threads: usize, chunking: Chunking) -> SearchSession {
    let options = QuickOpenOptionsBuilder::default()
        .threads(threads)
        .chunking(chunking)
        .build()
        .unwrap();
    SearchSession::new(corpus, &options).unwrap()
}

/// `text:score` pairs joined on one line, for snapshots.
pub fn render(results: &[MatchResult]) -> String {
    results
        .iter()
        .map(|r| format!("{}:{}", r.text(), r.score))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(feature = "cli")]
pub mod cli {
    use std::io::Write;
    use std::process::{Command, Output, Stdio};

    pub fn qo_bin() -> &'static str {
        env!("CARGO_BIN_EXE_qo")
    }

    /// Runs `qo` with `args`, feeding `input` on stdin.
    pub fn run_qo(input: &[u8], args: &[&str]) -> Output {
        let mut child = Command::new(qo_bin())
            .args(args)
            .env("QUICKOPEN_DEFAULT_OPTIONS", "")
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("run qo");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input)
            .expect("write qo input");
        child.wait_with_output().expect("wait for qo")
    }
}

/// Declares a test feeding `$input` lines to `qo $args`, then checking stdout
/// and the exit code.
#[cfg(feature = "cli")]
macro_rules! qo_test {
    ($name:ident, $input:expr, $args:expr, @stdout $stdout:expr, @code $code:expr) => {
        #[test]
        fn $name() {
            let input = $input.join("\n");
            let output = crate::common::cli::run_qo(input.as_bytes(), $args);
            assert_eq!(
                output.status.code(),
                Some($code),
                "stderr: {}",
                String::from_utf8_lossy(&output.stderr)
            );
            assert_eq!(String::from_utf8_lossy(&output.stdout), $stdout);
        }
    };
}
