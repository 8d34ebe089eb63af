//! Game state: scores, turn progress, and win status.
//!
//! `GameState` is a single owned value holding everything observable
//! about a game in progress. It is created fresh on every new game and
//! replaced wholesale; there is no partial carry-over between games.
//!
//! The state exposes primitive mutators (accumulate, bank, switch).
//! Precondition gating and the computer policy live in the engine,
//! which is the only caller of these mutators.

use serde::{Deserialize, Serialize};

use super::seat::{Seat, SeatPair};

/// Banked score a seat must reach to win.
pub const WIN_THRESHOLD: u32 = 100;

/// Whether the game is running or decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is running; exactly one seat is active.
    InProgress,
    /// Terminal. The named seat banked `WIN_THRESHOLD` or more.
    Won(Seat),
}

impl GameStatus {
    /// Check if the game is still running.
    #[must_use]
    pub fn is_in_progress(self) -> bool {
        matches!(self, GameStatus::InProgress)
    }

    /// Get the winning seat, if decided.
    #[must_use]
    pub fn winner(self) -> Option<Seat> {
        match self {
            GameStatus::Won(seat) => Some(seat),
            GameStatus::InProgress => None,
        }
    }
}

/// Complete observable game state.
///
/// ## Invariants
///
/// - `current_score` is 0 immediately after every turn switch
/// - `scores[seat]` never decreases within a game
/// - once `status` is `Won`, nothing mutates until a new game replaces
///   this state
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Banked points per seat.
    pub scores: SeatPair<u32>,

    /// Unbanked points accumulated during the active seat's turn.
    pub current_score: u32,

    /// The seat whose turn it is.
    pub active_seat: Seat,

    /// Running or decided.
    pub status: GameStatus,

    /// Face of the most recent roll, for display. `None` before the
    /// first roll of a game.
    pub last_roll: Option<u8>,

    /// Turn counter (starts at 1, bumps on every switch).
    pub turn_number: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a fresh state: scores (0, 0), seat 0 active, in progress.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scores: SeatPair::with_value(0),
            current_score: 0,
            active_seat: Seat::ZERO,
            status: GameStatus::InProgress,
            last_roll: None,
            turn_number: 1,
        }
    }

    /// Add a non-bust roll to the turn's unbanked points.
    pub(crate) fn accumulate(&mut self, face: u8) {
        self.current_score += u32::from(face);
    }

    /// Bank the turn's unbanked points into the active seat's score.
    ///
    /// Returns the active seat's new banked total. Does not switch the
    /// turn or check the win threshold; the engine does both.
    pub(crate) fn bank_current(&mut self) -> u32 {
        self.scores[self.active_seat] += self.current_score;
        self.scores[self.active_seat]
    }

    /// Zero the unbanked points and flip the active seat.
    ///
    /// The sole place `active_seat` changes.
    pub(crate) fn switch_turn(&mut self) {
        self.current_score = 0;
        self.active_seat = self.active_seat.other();
        self.turn_number += 1;
    }

    /// Freeze the game with the given winner. `current_score` is left
    /// as-is.
    pub(crate) fn set_won(&mut self, seat: Seat) {
        self.status = GameStatus::Won(seat);
    }
}
