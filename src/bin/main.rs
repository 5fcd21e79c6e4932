extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate quickopen;
extern crate shlex;

use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use quickopen::fuzzy_matcher::subsequence::{SubsequenceMatcher, render_matrix};
use quickopen::prelude::*;

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();
    if let Err(err) = color_eyre::install() {
        warn!("could not install the error report handler: {err}");
    }

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // if downstream pipe is closed, exit silently
            if err
                .downcast_ref::<std::io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
            {
                std::process::exit(0)
            }
            eprintln!("{err:?}");
            std::process::exit(2)
        }
    }
}

fn parse_args() -> QuickOpenOptions {
    let mut args = Vec::new();

    args.push(env::args().next().unwrap_or_else(|| String::from("qo")));
    args.extend(
        env::var("QUICKOPEN_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    args.extend(env::args().skip(1));

    QuickOpenOptions::parse_from(args)
}

fn real_main() -> Result<i32> {
    let opts = parse_args();

    //------------------------------------------------------------------------------
    // read the corpus from the file or from stdin
    let corpus = match &opts.input {
        Some(path) => {
            let file = File::open(path).wrap_err_with(|| format!("cannot open {}", path.display()))?;
            read_corpus(BufReader::new(file), opts.line_ending())?
        }
        None => read_corpus(std::io::stdin().lock(), opts.line_ending())?,
    };
    let corpus = Arc::new(corpus);
    debug!("corpus: {} candidates", corpus.len());

    //------------------------------------------------------------------------------
    // search
    let session = SearchSession::new(corpus, &opts)?;
    let needle = opts.needle();
    let results = session.search(needle);

    if opts.explain {
        explain(&opts, results.first());
    }

    //------------------------------------------------------------------------------
    // output
    let mut stdout = BufWriter::new(std::io::stdout().lock());
    let ending = opts.output_ending();
    for result in &results {
        if opts.print_score {
            write!(stdout, "{}\t", result.score)?;
        }
        stdout.write_all(&result.candidate)?;
        write!(stdout, "{ending}")?;
    }
    stdout.flush()?;

    Ok(if results.is_empty() { 1 } else { 0 })
}

fn explain(opts: &QuickOpenOptions, best: Option<&MatchResult>) {
    let Some(best) = best else {
        eprintln!("no match");
        return;
    };
    let needle = opts.needle();
    if let Some(m) = SubsequenceMatcher::new(opts.case).match_matrix(&best.candidate, needle) {
        eprintln!("{}\t{}", m.score, best.text());
        eprintln!("{}", render_matrix(&m.matrix, &best.candidate, needle));
    }
}
