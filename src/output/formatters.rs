//! Formatting utilities for terminal output
//!
//! Correct letters are green and capitalised, present letters yellow and
//! capitalised, absent letters plain lowercase.

use crate::core::{KEY_ROWS, Keyboard, LetterFeedback, Word};
use crate::game::{GameState, Turn};
use colored::{ColoredString, Colorize};

/// Placeholder for a cell that has not been played yet
pub const EMPTY_CELL: char = '_';

/// Style one guessed letter according to its feedback
#[must_use]
pub fn colorize_letter(letter: u8, feedback: LetterFeedback) -> ColoredString {
    let letter = char::from(letter);
    match feedback {
        LetterFeedback::Correct => letter.to_ascii_uppercase().to_string().green().bold(),
        LetterFeedback::Present => letter.to_ascii_uppercase().to_string().yellow().bold(),
        LetterFeedback::Absent => letter.to_ascii_lowercase().to_string().normal(),
    }
}

/// Format a scored guess as space-separated styled letters
#[must_use]
pub fn format_turn(turn: &Turn) -> String {
    turn.guess
        .chars()
        .iter()
        .zip(&turn.feedback)
        .map(|(&letter, &f)| colorize_letter(letter, f).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the full board: played rows first, then empty rows up to the limit
#[must_use]
pub fn format_board(state: &GameState) -> String {
    let empty_row = vec![EMPTY_CELL.to_string(); state.word_length()].join(" ");

    let mut rows: Vec<String> = state.history().iter().map(format_turn).collect();
    rows.resize(state.max_attempts(), empty_row);
    rows.join("\n")
}

/// Format the virtual keyboard
///
/// Each row is indented one more space than the last, like a real keyboard.
/// Used keys are colored like guessed letters and struck through.
#[must_use]
pub fn format_keyboard(keyboard: &Keyboard) -> String {
    KEY_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .bytes()
                .map(|key| match keyboard.state(key) {
                    Some(f) => format_used_key(key, f).to_string(),
                    None => char::from(key).to_string(),
                })
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_used_key(key: u8, feedback: LetterFeedback) -> ColoredString {
    let key = char::from(key).to_string();
    match feedback {
        LetterFeedback::Correct => key.green().strikethrough(),
        LetterFeedback::Present => key.yellow().strikethrough(),
        LetterFeedback::Absent => key.strikethrough(),
    }
}

/// Uppercased word for messages
#[must_use]
pub fn shout(word: &Word) -> String {
    word.text().to_uppercase()
}
