use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use wordplay::common_words::CommonWordSet;
use wordplay::grid::{self, Grid};
use wordplay::hangman::{self, Difficulty, GameStatus, GuessOutcome, HangmanGame, SessionStats};
use wordplay::parser::LetterMultiset;
use wordplay::rhyme::{self, SyllableFilter};
use wordplay::solver::{self, AnagramQuery, CrosswordQuery, JumbleQuery, SolverError, UnscrambleQuery};
use wordplay::sorting::{self, ResultStats, SortKey};
use wordplay::thesaurus::Thesaurus;
use wordplay::word_list::{Lexicon, LexiconOptions};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Word-puzzle helpers: anagrams, crosswords, word searches, rhymes and more
#[derive(Parser, Debug)]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
struct Cli {
    /// Newline-delimited word list (defaults to a small built-in list)
    #[arg(short, long, global = true)]
    word_list: Option<PathBuf>,

    /// Shortest word kept when loading the word list
    #[arg(long, global = true, default_value_t = 2)]
    min_len: usize,

    /// Longest word kept when loading the word list
    #[arg(long, global = true, default_value_t = 15)]
    max_len: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Words spellable from the letters ('?' is a blank tile)
    Anagram {
        letters: String,
        #[arg(long, default_value_t = 2)]
        min: usize,
        #[arg(long, default_value_t = 15)]
        max: usize,
        /// Positional pattern such as "??t"
        #[arg(short, long)]
        pattern: Option<String>,
        /// length, alphabetical or common
        #[arg(short, long, default_value = "length")]
        sort: String,
    },
    /// Words using only the given letters
    Unscramble {
        letters: String,
        #[arg(long, default_value_t = 2)]
        min: usize,
        /// Letters every result must contain
        #[arg(short, long, default_value = "")]
        contains: String,
    },
    /// Words formed from a scrambled jumble
    Jumble {
        letters: String,
        /// Only words of exactly this length
        #[arg(short, long)]
        length: Option<usize>,
    },
    /// Words fitting a crossword pattern such as "c?t"
    Crossword {
        pattern: String,
        #[arg(short, long)]
        length: Option<usize>,
        #[arg(short = 'b', long)]
        starts_with: Option<String>,
    },
    /// Words rhyming with a word
    Rhyme {
        word: String,
        /// all, 1, 2 or 3 (three or more)
        #[arg(short, long, default_value = "all")]
        syllables: String,
    },
    /// Synonyms and antonyms from the built-in thesaurus
    Thesaurus { word: String },
    /// Find words in a word-search grid
    Search {
        /// File containing the grid, one row per line
        #[arg(short, long)]
        grid: PathBuf,
        words: Vec<String>,
    },
    /// Play hangman on the terminal
    Hangman {
        /// all, easy, medium or hard
        #[arg(short, long, default_value = "all")]
        difficulty: String,
    },
}

/// Entry point of the wordplay CLI.
///
/// Delegates to [`try_main`], printing any error in detailed form before
/// exiting with code 1.
fn main() -> ExitCode {
    wordplay::log::init_logger(wordplay::log::debug_requested());

    if let Err(e) = try_main() {
        if let Some(solver_err) = e.downcast_ref::<SolverError>() {
            eprintln!("Error: {}", solver_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn load_lexicon(cli: &Cli) -> Result<Lexicon, Box<dyn std::error::Error>> {
    let options = LexiconOptions { min_len: cli.min_len, max_len: cli.max_len };
    let t_load = Instant::now();
    let lexicon = match &cli.word_list {
        Some(path) => Lexicon::load_from_path(path, options)?,
        None => {
            log::info!("no --word-list given; using the built-in list");
            Lexicon::fallback()
        }
    };
    log::debug!("loaded {} words in {:.3}s", lexicon.len(), t_load.elapsed().as_secs_f64());
    Ok(lexicon)
}

fn parse_arg<T>(raw: &str) -> Result<T, SolverError>
where
    T: std::str::FromStr<Err = Box<wordplay::errors::ParseError>>,
{
    Ok(raw.parse::<T>()?)
}

fn print_words(words: &[String]) {
    for word in words {
        println!("{word}");
    }
    eprintln!("{} result(s)", words.len());
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Anagram { letters, min, max, pattern, sort } => {
            let lexicon = load_lexicon(&cli)?;
            let common = CommonWordSet::builtin();
            let query = AnagramQuery {
                letters: letters.clone(),
                min_len: *min,
                max_len: *max,
                pattern: pattern.clone(),
                sort: parse_arg::<SortKey>(sort)?,
            };
            let t_solve = Instant::now();
            let results = solver::solve_anagram(&query, &lexicon, common)?;
            let solve_secs = t_solve.elapsed().as_secs_f64();
            let rack = parse_arg::<LetterMultiset>(letters)?;
            print_anagram_groups(&results, &rack, common);

            eprintln!(
                "{} letter(s), {} unique, {} blank(s)",
                rack.letter_count(),
                rack.distinct_letters(),
                rack.wildcards()
            );
            let stats = ResultStats::compute(&results, common);
            eprintln!(
                "{} word(s), {} common, average length {:.1}; solved in {solve_secs:.3}s",
                stats.total, stats.common_words, stats.average_length
            );
            if let Some(longest) = stats.longest {
                eprintln!("longest: {longest}");
            }
        }
        Command::Unscramble { letters, min, contains } => {
            let lexicon = load_lexicon(&cli)?;
            let query = UnscrambleQuery { letters: letters.clone(), min_len: *min, contains: contains.clone() };
            print_words(&solver::solve_unscramble(&query, &lexicon)?);
        }
        Command::Jumble { letters, length } => {
            let lexicon = load_lexicon(&cli)?;
            let query = JumbleQuery { letters: letters.clone(), exact_len: *length };
            print_words(&solver::solve_jumble(&query, &lexicon)?);
        }
        Command::Crossword { pattern, length, starts_with } => {
            let lexicon = load_lexicon(&cli)?;
            let query = CrosswordQuery {
                pattern: pattern.clone(),
                length: *length,
                starts_with: starts_with.clone(),
            };
            let results = solver::solve_crossword(&query, &lexicon)?;
            print_words(&results);
            let lengths: Vec<String> = solver::available_lengths(&results).iter().map(usize::to_string).collect();
            if !lengths.is_empty() {
                eprintln!("lengths: {}", lengths.join(", "));
            }
        }
        Command::Rhyme { word, syllables } => {
            let lexicon = load_lexicon(&cli)?;
            let filter = parse_arg::<SyllableFilter>(syllables)?;
            for rhyme in rhyme::find_rhymes(word, &lexicon, filter) {
                println!("{rhyme}\t{} syl", rhyme::count_syllables(&rhyme));
            }
        }
        Command::Thesaurus { word } => match Thesaurus::builtin().lookup(word) {
            Some(entry) => {
                println!("synonyms: {}", entry.synonyms.join(", "));
                println!("antonyms: {}", entry.antonyms.join(", "));
            }
            None => eprintln!("no entry for \"{}\"", word.trim()),
        },
        Command::Search { grid: grid_path, words } => {
            let text = std::fs::read_to_string(grid_path)
                .map_err(|e| io::Error::new(e.kind(), format!("failed to read grid from '{}': {e}", grid_path.display())))?;
            let grid = parse_arg::<Grid>(&text)?;
            let outcomes = grid::find_words(&grid, words);
            for outcome in &outcomes {
                match &outcome.placement {
                    Some(placement) => println!("{placement}"),
                    None => eprintln!("{}: not found", outcome.word),
                }
            }
            eprintln!("found {} of {} word(s)", grid::found_placements(&outcomes).len(), outcomes.len());
        }
        Command::Hangman { difficulty } => {
            let lexicon = load_lexicon(&cli)?;
            let difficulty = parse_arg::<Difficulty>(difficulty)?;
            play_hangman(&lexicon, difficulty)?;
        }
    }

    Ok(())
}

/// Anagram results grouped by length; full anagrams are flagged and
/// common words starred.
fn print_anagram_groups(results: &[String], letters: &LetterMultiset, common: &CommonWordSet) {
    for (len, words) in sorting::group_by_length(results).iter() {
        let flag = if sorting::is_complete_anagram(len, letters) { " (full anagram)" } else { "" };
        println!("== {len} letters{flag} ==");
        for word in words {
            let star = if common.contains(word) { " *" } else { "" };
            println!("{word}{star}");
        }
    }
}

fn play_hangman(lexicon: &Lexicon, difficulty: Difficulty) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut stats = SessionStats::default();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    'games: loop {
        let Some(word) = hangman::choose_word(lexicon, difficulty, &mut rng) else {
            eprintln!("the word list is empty");
            return Ok(());
        };
        let mut game = HangmanGame::new(word);
        println!("New game ({difficulty}). Guess a letter, '?' for a hint, 'quit' to stop.");

        while game.status() == GameStatus::InProgress {
            let guessed: String = game.guessed_letters().collect();
            println!(
                "{}   wrong: {}/{}   hints: {}   tried: {guessed}",
                game.masked(),
                game.wrong_guesses(),
                game.max_wrong(),
                game.hints_remaining()
            );
            print!("> ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else { break 'games };
            let input = line?;
            let input = input.trim();
            if input.eq_ignore_ascii_case("quit") {
                break 'games;
            }
            if input == "?" {
                match game.hint(&mut rng) {
                    Some(letter) => println!("hint: '{letter}'"),
                    None => println!("no hints left"),
                }
                continue;
            }
            let mut chars = input.chars();
            let (Some(letter), None) = (chars.next(), chars.next()) else {
                println!("enter a single letter");
                continue;
            };
            match game.guess(letter) {
                GuessOutcome::Correct => println!("yes!"),
                GuessOutcome::Wrong => println!("no '{letter}'"),
                GuessOutcome::AlreadyGuessed => println!("already guessed '{letter}'"),
                GuessOutcome::Invalid => println!("letters a-z only"),
                GuessOutcome::GameOver => {}
            }
        }

        stats.record(game.status());
        match game.status() {
            GameStatus::Won => println!("You won! The word was \"{}\".", game.word()),
            GameStatus::Lost => println!("Out of guesses. The word was \"{}\".", game.masked()),
            GameStatus::InProgress => {}
        }
        println!("played {}, solved {}", stats.played, stats.solved);
    }

    eprintln!("played {}, solved {}", stats.played, stats.solved);
    Ok(())
}
