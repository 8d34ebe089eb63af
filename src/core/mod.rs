//! Core engine types: seats, state, RNG.
//!
//! This module contains the fundamental building blocks that are
//! presentation-agnostic. The rules of Pig live in `engine`.

pub mod rng;
pub mod seat;
pub mod state;

pub use rng::{DiceRng, DiceRngState, DieSource, ScriptedDie, DIE_SIDES};
pub use seat::{Seat, SeatKind, SeatPair};
pub use state::{GameState, GameStatus, WIN_THRESHOLD};
