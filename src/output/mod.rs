//! Terminal output formatting
//!
//! Colored rendering of the board, keyboard and game messages.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_game_start, print_outcome, print_progress, print_rejection,
};
