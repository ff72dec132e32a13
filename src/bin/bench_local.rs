//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of the lexicon tools and the grid scanner on *your* machine.
//! - Loads the word list once, then runs each case several times and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release -- -w words.txt`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -w words.txt -r 5`
//! - Print a few results:            `cargo run --bin bench_local --release -- -w words.txt -p 5`
//!
//! NOTES
//! -----
//! - Not statistically rigorous; use the same machine and `--release` for comparable numbers.
//! - One warm-up run per case is done (not included in timing).
//! - Printing is kept outside the timed section.

use clap::Parser;
use std::hint::black_box;
use std::path::PathBuf;
use std::time::Instant;
use wordplay::common_words::CommonWordSet;
use wordplay::grid::{self, Grid};
use wordplay::solver::{self, AnagramQuery, CrosswordQuery, JumbleQuery, SolverError, UnscrambleQuery};
use wordplay::word_list::{Lexicon, LexiconOptions};

/// Simple local benchmark runner: load the word list once, time several queries.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Newline-delimited word list (defaults to the built-in list)
    #[arg(short, long)]
    word_list: Option<PathBuf>,

    /// Number of repeats per case (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Print up to this many results per case (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

#[derive(Clone, Copy)]
enum Tool {
    Anagram,
    Unscramble,
    Jumble,
    Crossword,
}

struct Case {
    tool: Tool,
    input: &'static str,
}

fn get_cases() -> Vec<Case> {
    vec![
        Case { tool: Tool::Anagram, input: "listen" },
        Case { tool: Tool::Anagram, input: "retains??" },
        Case { tool: Tool::Unscramble, input: "triangles" },
        Case { tool: Tool::Jumble, input: "dictionary" },
        Case { tool: Tool::Crossword, input: "c?t" },
        Case { tool: Tool::Crossword, input: "??a??e" },
    ]
}

const BENCH_GRID: &str = "\
LISTENABCD
EARTHQWXYZ
STONESPEAR
TRIANGLEXO
PLATESHARE
";

fn run_case(case: &Case, lexicon: &Lexicon) -> Result<Vec<String>, SolverError> {
    match case.tool {
        Tool::Anagram => solver::solve_anagram(&AnagramQuery::new(case.input), lexicon, CommonWordSet::builtin()),
        Tool::Unscramble => solver::solve_unscramble(&UnscrambleQuery::new(case.input), lexicon),
        Tool::Jumble => solver::solve_jumble(&JumbleQuery::new(case.input), lexicon),
        Tool::Crossword => solver::solve_crossword(&CrosswordQuery::new(case.input), lexicon),
    }
}

fn tool_name(tool: Tool) -> &'static str {
    match tool {
        Tool::Anagram => "anagram",
        Tool::Unscramble => "unscramble",
        Tool::Jumble => "jumble",
        Tool::Crossword => "crossword",
    }
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn pluralizer(count: usize, singular: &str) -> String {
    if count == 1 { singular.to_string() } else { format!("{singular}s") }
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let lexicon = match &cli.word_list {
        Some(path) => Lexicon::load_from_path(path, LexiconOptions::default())?,
        None => Lexicon::fallback(),
    };
    eprintln!("Loaded {} words in {:.3}s", lexicon.len(), t_load.elapsed().as_secs_f64());

    let mut summary: Vec<(String, f64, usize)> = Vec::new();

    for (idx, case) in get_cases().iter().enumerate() {
        let name = format!("{} {}", tool_name(case.tool), case.input);
        eprintln!("\n[{:02}] {name}", idx + 1);

        if let Err(e) = run_case(case, &lexicon) {
            eprintln!("  ✗ Warm-up failed: {}", e.display_detailed());
            continue;
        }

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_results = Vec::new();
        for _ in 0..cli.num_repeats {
            let t_solve = Instant::now();
            let Ok(results) = run_case(black_box(case), &lexicon) else { continue };
            times.push(t_solve.elapsed().as_secs_f64());
            last_results = results;
        }

        let med = median(times);
        for word in last_results.iter().take(cli.print_limit) {
            println!("{word}");
        }
        eprintln!(
            "  → median {med:.6}s over {} run(s); {} {}",
            cli.num_repeats,
            last_results.len(),
            pluralizer(last_results.len(), "result")
        );
        summary.push((name, med, last_results.len()));
    }

    let grid: Grid = BENCH_GRID.parse().map_err(|e: Box<wordplay::errors::ParseError>| std::io::Error::from(*e))?;
    let targets = ["listen", "earth", "stones", "triangle", "share", "zebra"];
    let mut grid_times = Vec::with_capacity(cli.num_repeats);
    let mut found = 0;
    for _ in 0..cli.num_repeats {
        let t_scan = Instant::now();
        let outcomes = grid::find_words(black_box(&grid), &targets);
        grid_times.push(t_scan.elapsed().as_secs_f64());
        found = grid::found_placements(&outcomes).len();
    }
    summary.push(("word search (6 words)".to_string(), median(grid_times), found));

    eprintln!("\n==== Summary ====");
    eprintln!("{:<28} | {:>12} | {:>9}", "case", "median (s)", "# results");
    eprintln!("{:-<28}-+-{:-<12}-+-{:-<9}", "", "", "");
    for (name, med, count) in &summary {
        eprintln!("{name:<28} | {med:>12.6} | {count:>9}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralizer() {
        assert_eq!(pluralizer(0, "result"), "results");
        assert_eq!(pluralizer(1, "result"), "result");
        assert_eq!(pluralizer(2, "result"), "results");
    }

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_bench_grid_is_valid() {
        let grid: Grid = BENCH_GRID.parse().unwrap();
        assert_eq!((grid.rows(), grid.cols()), (5, 10));
    }
}
