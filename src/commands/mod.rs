//! Command implementations

pub mod play;

pub use play::{Rematch, SessionConfig, SessionError, SessionResult, play_games, run_play};
