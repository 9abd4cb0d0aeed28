//! Turn-by-turn game driver
//!
//! Pulls guesses from a [`GuessInput`] until the game ends, reporting every
//! event to a [`GameObserver`]. The terminal console implements both; tests
//! use scripted players.

use super::{GameState, GameStatus, GuessError, Turn};
use crate::wordlists::Validator;
use std::io;

/// Source of raw guesses
pub trait GuessInput {
    /// Next guess from the player, or None if they quit
    ///
    /// # Errors
    /// Returns an I/O error if input cannot be read.
    fn next_guess(&mut self, state: &GameState) -> io::Result<Option<String>>;
}

/// Receives game events as they happen
///
/// Every method defaults to doing nothing.
pub trait GameObserver {
    fn on_start(&mut self, _state: &GameState) -> io::Result<()> {
        Ok(())
    }

    fn on_rejected(&mut self, _state: &GameState, _error: &GuessError) -> io::Result<()> {
        Ok(())
    }

    fn on_turn(&mut self, _state: &GameState, _turn: &Turn) -> io::Result<()> {
        Ok(())
    }

    fn on_finished(&mut self, _state: &GameState) -> io::Result<()> {
        Ok(())
    }
}

/// Play `state` to completion
///
/// Rejected guesses are reported and asked for again without using an
/// attempt. A `None` guess abandons the game.
///
/// # Errors
/// Returns an I/O error from the input or the observer.
pub fn run_game<P, V>(
    state: &mut GameState,
    player: &mut P,
    validator: &V,
) -> io::Result<GameStatus>
where
    P: GuessInput + GameObserver + ?Sized,
    V: Validator + ?Sized,
{
    player.on_start(state)?;

    while !state.status().is_over() {
        let Some(raw) = player.next_guess(state)? else {
            state.abandon();
            break;
        };

        match state.submit_guess(&raw, validator) {
            Ok(turn) => {
                let turn = turn.clone();
                player.on_turn(state, &turn)?;
            }
            Err(error) => {
                log::debug!("Rejected guess {raw:?}: {error}");
                player.on_rejected(state, &error)?;
            }
        }
    }

    log::info!(
        "Game finished ({}) after {} attempts",
        state.status(),
        state.attempts_used()
    );
    player.on_finished(state)?;

    Ok(state.status())
}
