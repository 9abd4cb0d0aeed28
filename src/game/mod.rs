//! Game state machine and driver
//!
//! A game moves from `InProgress` to exactly one of `Won`, `Lost` or
//! `Abandoned`, and accepts no guesses afterwards.

mod error;
mod runner;
mod state;

pub use error::GuessError;
pub use runner::{GameObserver, GuessInput, run_game};
pub use state::{GameState, GameStatus, MAX_ATTEMPTS, Turn};
