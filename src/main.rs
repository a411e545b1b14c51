//! Wordle Entropy - CLI
//!
//! Solve, simulate, analyze and play Wordle with an entropy-maximizing solver.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wordle_entropy::{
    commands::{
        SimulationConfig, analyze_word, load_statistics, play_interactive, simulate, solve_word,
    },
    core::Word,
    output::{print_analysis_result, print_simulation_report, print_solve_result, print_statistics},
    record::{JsonStore, ResultSink},
    solver::{Solver, SolverConfig, StdinOracle, oracle::MAX_TURNS},
    wordlists::{Corpus, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_entropy",
    about = "Wordle solver that maximizes expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'all' (default), 'answers' (answers only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Opening word played on the first turn
    #[arg(short = 'o', long, global = true, default_value = "slate")]
    opening: Word,

    /// File of past answers to remove from the candidate pool
    #[arg(short = 'x', long, global = true)]
    exclude: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and entropy for each turn
        #[arg(long)]
        verbose: bool,
    },

    /// Play random games and compare opening words
    Simulate {
        /// Number of random games per opener
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Seed for answer selection
        #[arg(short, long)]
        seed: Option<u64>,

        /// Opening words to compare (default: --opening)
        openers: Vec<Word>,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,

        /// Number of top-ranked alternatives to list
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Play along with a real game, entering its colors after each guess
    Play {
        /// JSON file to record the finished game in
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Show statistics from a JSON result store
    Stats {
        /// Result store written by `play --store`
        path: PathBuf,
    },
}

/// Load word lists based on the -w flag
///
/// - "all": embedded allowed guesses, embedded answers as candidates
/// - "answers": embedded answers for both
/// - "<path>": one custom list for both
fn load_corpus(wordlist: &str) -> Result<Corpus> {
    match wordlist {
        "all" => Ok(Corpus::embedded()),
        "answers" => Ok(Corpus::answers_only()),
        path => Corpus::from_file(path).with_context(|| format!("failed to load word list {path}")),
    }
}

fn load_exclusions(path: Option<&Path>) -> Result<Vec<Word>> {
    path.map_or_else(
        || Ok(Vec::new()),
        |path| {
            load_from_file(path)
                .with_context(|| format!("failed to load exclusion list {}", path.display()))
        },
    )
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    let corpus = load_corpus(&cli.wordlist)?;
    let exclude = load_exclusions(cli.exclude.as_deref())?;
    let config = SolverConfig {
        opening: cli.opening.clone(),
        max_turns: MAX_TURNS,
    };

    match cli.command {
        Commands::Solve { word, verbose } => {
            let solver = Solver::new(config, &corpus);
            let result = solve_word(&solver, &word, &exclude)
                .with_context(|| format!("failed to solve '{word}'"))?;
            print_solve_result(&result, verbose);
        }
        Commands::Simulate {
            games,
            seed,
            openers,
        } => {
            let openers = if openers.is_empty() {
                vec![config.opening]
            } else {
                openers
            };
            run_simulate_command(&corpus, games, seed, openers);
        }
        Commands::Analyze { word, top } => {
            let result = analyze_word(&word, &corpus, top)?;
            print_analysis_result(&result);
        }
        Commands::Play { store } => {
            let solver = Solver::new(config, &corpus);
            run_play_command(&solver, &exclude, store.as_deref())?;
        }
        Commands::Stats { path } => {
            print_statistics(&load_statistics(&path)?);
        }
    }

    Ok(())
}

fn run_simulate_command(corpus: &Corpus, games: usize, seed: Option<u64>, openers: Vec<Word>) {
    let names: Vec<String> = openers.iter().map(|w| w.text().to_uppercase()).collect();
    println!("Simulating {games} games for {}...", names.join(", "));

    let progress = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        progress.set_style(style.progress_chars("█▓▒░"));
    }

    let config = SimulationConfig {
        games,
        seed,
        openers,
        max_turns: MAX_TURNS,
    };
    let reports = simulate(corpus, &config, &progress);
    progress.finish_with_message("Complete!");

    print_simulation_report(&reports);
}

fn run_play_command(solver: &Solver<'_>, exclude: &[Word], store: Option<&Path>) -> Result<()> {
    let mut store = store
        .map(|path| {
            JsonStore::open(path)
                .with_context(|| format!("failed to open result store {}", path.display()))
        })
        .transpose()?;

    println!("Enter the colors for each guess: G = green, Y = yellow, - = gray.");
    let mut oracle = StdinOracle::stdin();
    let sink = store.as_mut().map(|s| s as &mut dyn ResultSink);

    match play_interactive(solver, &mut oracle, exclude, sink)? {
        Some(record) if record.won => println!("Solved in {} guesses!", record.turns),
        Some(record) => println!("Out of guesses after {} turns.", record.turns),
        None => println!("Game abandoned."),
    }
    Ok(())
}
