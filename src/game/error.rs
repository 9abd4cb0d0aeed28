//! Rejected guesses

use super::GameStatus;
use std::fmt;

/// Reasons a guess is not accepted
///
/// None of these use an attempt. Everything except `GameOver` is a player
/// mistake that is answered by asking again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    WrongLength { expected: usize, actual: usize },
    InvalidCharacters,
    NotInDictionary(String),
    GameOver(GameStatus),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, .. } => {
                write!(f, "Guess must consist of {expected} letters")
            }
            Self::InvalidCharacters => write!(f, "Guess must contain only letters"),
            Self::NotInDictionary(_) => write!(f, "Word not recognised"),
            Self::GameOver(status) => write!(f, "The game is already over: {status}"),
        }
    }
}

impl std::error::Error for GuessError {}
