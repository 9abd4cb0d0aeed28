//! Line-based terminal console
//!
//! Reads player input from any `BufRead` and writes colored output to any
//! `Write`, so whole sessions can be driven from in-memory buffers.

use crate::core::{Keyboard, MAX_WORD_LENGTH, MIN_WORD_LENGTH, is_supported_length};
use crate::game::{GameObserver, GameState, GuessError, GuessInput, Turn};
use crate::output::{print_game_start, print_outcome, print_progress, print_rejection};
use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Inputs that quit the current game
const QUIT_COMMANDS: [&str; 3] = ["0", "quit", "exit"];

/// Interactive console for one player
pub struct Console<R, W> {
    reader: R,
    writer: W,
    keyboard: Keyboard,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            keyboard: Keyboard::new(),
        }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the console, returning the writer
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// The keyboard for the current game
    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// Show `prompt` and read one trimmed line
    ///
    /// Returns None at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Ask for a word length until a number from 3 to 8 is entered
    ///
    /// Returns None at end of input.
    ///
    /// # Errors
    /// Returns an error if reading or writing fails.
    pub fn prompt_word_length(&mut self) -> io::Result<Option<usize>> {
        let prompt = format!(
            "Please enter the length of words you would like to play with ({MIN_WORD_LENGTH} to {MAX_WORD_LENGTH}): "
        );

        loop {
            let Some(input) = self.prompt(&prompt)? else {
                return Ok(None);
            };

            match input.parse::<usize>() {
                Ok(length) if is_supported_length(length) => return Ok(Some(length)),
                Ok(_) => writeln!(
                    self.writer,
                    "ERROR: The number must be from {MIN_WORD_LENGTH} to {MAX_WORD_LENGTH}."
                )?,
                Err(_) => writeln!(self.writer, "ERROR: The input must be an integer.")?,
            }
        }
    }

    /// Ask whether to start another game; only `y` means yes
    ///
    /// # Errors
    /// Returns an error if reading or writing fails.
    pub fn prompt_play_again(&mut self) -> io::Result<bool> {
        let answer = self.prompt("Would you like to play again? (y/n) ")?;
        Ok(answer.is_some_and(|a| a.eq_ignore_ascii_case("y")))
    }
}

impl<R: BufRead, W: Write> GuessInput for Console<R, W> {
    fn next_guess(&mut self, state: &GameState) -> io::Result<Option<String>> {
        let prompt = format!(
            "Please enter a guess ({} letters, attempt {}/{}), or 0 to quit: ",
            state.word_length(),
            state.attempts_used() + 1,
            state.max_attempts()
        );

        Ok(self.prompt(&prompt)?.filter(|input| {
            !QUIT_COMMANDS
                .iter()
                .any(|quit| input.eq_ignore_ascii_case(quit))
        }))
    }
}

impl<R: BufRead, W: Write> GameObserver for Console<R, W> {
    fn on_start(&mut self, state: &GameState) -> io::Result<()> {
        self.keyboard.clear();
        print_game_start(&mut self.writer, state)
    }

    fn on_rejected(&mut self, _state: &GameState, error: &GuessError) -> io::Result<()> {
        print_rejection(&mut self.writer, error)
    }

    fn on_turn(&mut self, state: &GameState, turn: &Turn) -> io::Result<()> {
        self.keyboard.record(&turn.guess, &turn.feedback);
        print_progress(&mut self.writer, state, &self.keyboard)
    }

    fn on_finished(&mut self, state: &GameState) -> io::Result<()> {
        print_outcome(&mut self.writer, state)
    }
}
