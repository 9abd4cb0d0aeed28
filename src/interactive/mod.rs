//! Interactive terminal interface
//!
//! Prompts, input handling and per-turn rendering for a human player.

mod console;

pub use console::Console;
