//! Interactive play session
//!
//! Asks for a word length, plays games until the player stops, and offers a
//! rematch after each one.

use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, is_supported_length};
use crate::game::{GameObserver, GameState, GameStatus, GuessInput, run_game};
use crate::interactive::Console;
use crate::output::print_banner;
use crate::wordlists::{Validator, WordSource};
use rand::Rng;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Configuration for a play session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Word length to play with; prompted for when None
    pub word_length: Option<usize>,
    /// Custom dictionary file; the embedded one when None
    pub wordlist: Option<PathBuf>,
    /// Seed for secret selection; random when None
    pub seed: Option<u64>,
}

/// Errors that end a session early
#[derive(Debug)]
pub enum SessionError {
    UnsupportedLength(usize),
    NoWordsOfLength(usize),
    Io(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLength(len) => {
                write!(
                    f,
                    "Word length must be from {MIN_WORD_LENGTH} to {MAX_WORD_LENGTH}, got {len}"
                )
            }
            Self::NoWordsOfLength(len) => {
                write!(f, "The dictionary has no {len}-letter words")
            }
            Self::Io(e) => write!(f, "Terminal I/O failed: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Result of a session: the status of every game played, in order
pub type SessionResult = Vec<GameStatus>;

/// Run the interactive session on a console
///
/// # Errors
///
/// Returns an error if the requested length is unsupported, the dictionary
/// has no words of that length, or the console fails.
pub fn run_play<R, W, D, G>(
    console: &mut Console<R, W>,
    dictionary: &D,
    word_length: Option<usize>,
    rng: &mut G,
) -> Result<SessionResult, SessionError>
where
    R: BufRead,
    W: Write,
    D: WordSource + Validator,
    G: Rng + ?Sized,
{
    print_banner(console.writer())?;

    let word_length = match word_length {
        Some(length) if is_supported_length(length) => length,
        Some(length) => return Err(SessionError::UnsupportedLength(length)),
        None => match console.prompt_word_length()? {
            Some(length) => length,
            None => return Ok(Vec::new()),
        },
    };

    play_games(console, dictionary, word_length, rng)
}

/// Play games of one word length until the player declines another
///
/// # Errors
///
/// Returns an error if no secret of `word_length` letters exists or the
/// player's input or output fails.
pub fn play_games<P, D, G>(
    player: &mut P,
    dictionary: &D,
    word_length: usize,
    rng: &mut G,
) -> Result<SessionResult, SessionError>
where
    P: GuessInput + GameObserver + Rematch + ?Sized,
    D: WordSource + Validator,
    G: Rng + ?Sized,
{
    let mut results = Vec::new();

    loop {
        let secret = dictionary
            .pick_secret(word_length, rng)
            .ok_or(SessionError::NoWordsOfLength(word_length))?
            .clone();
        log::debug!("Picked secret {secret}");

        let mut state = GameState::new(secret);
        let status = run_game(&mut state, player, dictionary)?;
        results.push(status);

        if status == GameStatus::Abandoned || !player.wants_rematch()? {
            break;
        }
    }

    log::info!(
        "Session over: {} games, {} won",
        results.len(),
        results.iter().filter(|&&s| s == GameStatus::Won).count()
    );

    Ok(results)
}

/// Asks the player whether to play another game
pub trait Rematch {
    /// # Errors
    /// Returns an I/O error if the answer cannot be read.
    fn wants_rematch(&mut self) -> io::Result<bool>;
}

impl<R: BufRead, W: Write> Rematch for Console<R, W> {
    fn wants_rematch(&mut self) -> io::Result<bool> {
        self.prompt_play_again()
    }
}
