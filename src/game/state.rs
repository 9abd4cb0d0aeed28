//! Game state and turn transitions

use super::GuessError;
use crate::core::{Feedback, Word};
use crate::wordlists::Validator;
use std::fmt;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
    /// The player quit before the game finished
    Abandoned,
}

impl GameStatus {
    /// True for every terminal status
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::Won => "you won",
            Self::Lost => "you lost",
            Self::Abandoned => "you quit",
        };
        f.write_str(text)
    }
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
}

/// A single game: the secret, the turns so far, and the status
///
/// The number of attempts used is always the length of the history, and the
/// word length is fixed by the secret for the whole game.
#[derive(Debug, Clone)]
pub struct GameState {
    secret: Word,
    max_attempts: usize,
    history: Vec<Turn>,
    status: GameStatus,
}

impl GameState {
    /// Start a game with the standard six attempts
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self::with_max_attempts(secret, MAX_ATTEMPTS)
    }

    /// Start a game with a custom attempt limit (at least one)
    #[must_use]
    pub fn with_max_attempts(secret: Word, max_attempts: usize) -> Self {
        Self {
            secret,
            max_attempts: max_attempts.max(1),
            history: Vec::with_capacity(max_attempts),
            status: GameStatus::InProgress,
        }
    }

    /// The secret word
    ///
    /// Only meant to be shown once the game is over.
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts - self.history.len()
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Play one guess
    ///
    /// Rejected guesses leave the state untouched and do not use an attempt.
    ///
    /// # Errors
    /// - `GuessError::GameOver` if the game already finished
    /// - `GuessError::WrongLength` if the guess has the wrong number of letters
    /// - `GuessError::InvalidCharacters` if the guess is not all ASCII letters
    /// - `GuessError::NotInDictionary` if the validator rejects it
    ///
    /// # Panics
    /// Will not panic - feedback is only computed once lengths are known to match.
    ///
    /// # Examples
    /// ```
    /// use wordmaster::core::Word;
    /// use wordmaster::game::{GameState, GameStatus};
    ///
    /// let accept_all = |_: &str, _: usize| true;
    /// let mut game = GameState::new(Word::new("crane").unwrap());
    ///
    /// assert!(game.submit_guess("cat", &accept_all).is_err());
    /// assert_eq!(game.attempts_used(), 0);
    ///
    /// game.submit_guess("crane", &accept_all).unwrap();
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    pub fn submit_guess<V: Validator + ?Sized>(
        &mut self,
        raw: &str,
        validator: &V,
    ) -> Result<&Turn, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::GameOver(self.status));
        }

        let trimmed = raw.trim();
        let length = trimmed.chars().count();
        if length != self.word_length() {
            return Err(GuessError::WrongLength {
                expected: self.word_length(),
                actual: length,
            });
        }

        let guess = Word::new(trimmed).map_err(|_| GuessError::InvalidCharacters)?;

        if !validator.is_valid_word(guess.text(), self.word_length()) {
            return Err(GuessError::NotInDictionary(guess.text().to_string()));
        }

        let feedback =
            Feedback::calculate(&self.secret, &guess).expect("guess length already validated");
        let won = feedback.is_perfect();
        let (correct, present) = (feedback.count_correct(), feedback.count_present());

        self.history.push(Turn { guess, feedback });

        self.status = if won {
            GameStatus::Won
        } else if self.history.len() >= self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        log::debug!(
            "Attempt {}/{}: {correct} correct, {present} present, {}",
            self.history.len(),
            self.max_attempts,
            self.status
        );

        Ok(&self.history[self.history.len() - 1])
    }

    /// Quit the game
    ///
    /// Only an in-progress game can be abandoned; finished games keep their status.
    pub fn abandon(&mut self) {
        if !self.status.is_over() {
            log::debug!("Game abandoned after {} attempts", self.history.len());
            self.status = GameStatus::Abandoned;
        }
    }
}
