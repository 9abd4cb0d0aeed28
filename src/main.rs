//! Wordmaster - CLI
//!
//! Word-guessing game for the terminal with word lengths from 3 to 8.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use wordmaster::{
    commands::{SessionConfig, run_play},
    interactive::Console,
    wordlists::{ALLOWED, Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordmaster",
    about = "Guess the secret word in six tries, with word lengths from 3 to 8",
    version,
    author
)]
struct Cli {
    /// Word length to play with (prompted for when omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(3..=8))]
    length: Option<u8>,

    /// Newline-delimited file of secret words (default: embedded list)
    #[arg(short = 'w', long)]
    wordlist: Option<PathBuf>,

    /// Seed for picking secrets, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl From<Cli> for SessionConfig {
    fn from(cli: Cli) -> Self {
        Self {
            word_length: cli.length.map(usize::from),
            wordlist: cli.wordlist,
            seed: cli.seed,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Load the dictionary selected by the config
///
/// A custom word list replaces the secrets only; guesses are still checked
/// against the embedded allowed list as well.
fn load_dictionary(config: &SessionConfig) -> Result<Dictionary> {
    let dictionary = match &config.wordlist {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Could not load word list from {}", path.display()))?
            .with_allowed(ALLOWED),
        None => Dictionary::embedded(),
    };

    log::info!(
        "Dictionary ready: {} secrets, {} accepted guesses",
        dictionary.secret_count(),
        dictionary.allowed_count()
    );

    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SessionConfig::from(cli);
    let dictionary = load_dictionary(&config)?;

    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let mut console = Console::stdio();
    run_play(&mut console, &dictionary, config.word_length, &mut rng)?;

    Ok(())
}
