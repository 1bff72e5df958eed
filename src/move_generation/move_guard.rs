//! Scoped move application.
//!
//! A `MoveGuard` applies a move when built and undoes it when dropped, so a
//! frame that returns early (cutoff, abort, illegal move) still leaves the
//! position exactly as it found it.

use std::ops::{Deref, DerefMut};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};

pub struct MoveGuard<'a> {
    game_state: &'a mut GameState,
    undo: UndoState,
}

impl<'a> MoveGuard<'a> {
    /// Apply `mv` to `game_state` until the guard is dropped.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`apply_move`].
    #[inline]
    pub fn new(game_state: &'a mut GameState, mv: Move) -> Self {
        let undo = apply_move(game_state, mv);
        Self { game_state, undo }
    }

    #[inline]
    pub fn undo_state(&self) -> &UndoState {
        &self.undo
    }
}

impl Deref for MoveGuard<'_> {
    type Target = GameState;

    #[inline]
    fn deref(&self) -> &GameState {
        self.game_state
    }
}

impl DerefMut for MoveGuard<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut GameState {
        self.game_state
    }
}

impl Drop for MoveGuard<'_> {
    #[inline]
    fn drop(&mut self) {
        undo_move(self.game_state, self.undo);
    }
}
