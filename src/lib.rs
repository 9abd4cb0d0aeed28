//! Wordmaster
//!
//! A terminal word-guessing game: pick a word length from 3 to 8, then find
//! the secret word in six tries using per-letter feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordmaster::core::Word;
//! use wordmaster::game::{GameState, GameStatus};
//! use wordmaster::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["crane", "trace", "slate"]);
//! let mut game = GameState::new(Word::new("crane").unwrap());
//!
//! let turn = game.submit_guess("trace", &dictionary).unwrap();
//! println!("Feedback: {}", turn.feedback.to_emoji());
//!
//! game.submit_guess("crane", &dictionary).unwrap();
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists and dictionary lookup
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive terminal interface
pub mod interactive;
