//! Core domain types for the game
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and testable in isolation.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, FeedbackError, LetterFeedback, compute_feedback};
pub use keyboard::{KEY_ROWS, Keyboard};
pub use word::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word, WordError, is_supported_length};
