//! Display functions for game events

use super::formatters::{format_board, format_keyboard, shout};
use crate::core::Keyboard;
use crate::game::{GameState, GameStatus, GuessError};
use colored::Colorize;
use std::io::{self, Write};

/// Print the welcome banner
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "WORDMASTER".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        "Guess the secret word in six tries. {} = right spot, {} = wrong spot.",
        "GREEN".green().bold(),
        "YELLOW".yellow().bold()
    )?;
    writeln!(out, "Enter 0 at any guess prompt to quit.")
}

/// Print the start of a new game
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_game_start<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    writeln!(
        out,
        "\nNew game: {} letters, {} attempts.",
        state.word_length(),
        state.max_attempts()
    )
}

/// Print the board and keyboard after a turn
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_progress<W: Write>(
    out: &mut W,
    state: &GameState,
    keyboard: &Keyboard,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format_board(state))?;
    writeln!(out)?;
    writeln!(out, "{}", format_keyboard(keyboard))
}

/// Print why a guess was not accepted
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_rejection<W: Write>(out: &mut W, error: &GuessError) -> io::Result<()> {
    writeln!(out, "{}", error.to_string().red())
}

/// Print the end-of-game message
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_outcome<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    match state.status() {
        GameStatus::Won => writeln!(
            out,
            "{}",
            format!("Correct guess! Number of tries = {}", state.attempts_used())
                .green()
                .bold()
        ),
        GameStatus::Lost => writeln!(
            out,
            "{} {}",
            ":( The word was".red(),
            shout(state.secret()).bright_yellow().bold()
        ),
        GameStatus::Abandoned => writeln!(out, "QUIT"),
        GameStatus::InProgress => Ok(()),
    }
}
