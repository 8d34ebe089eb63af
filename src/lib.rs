//! # pig-dice
//!
//! A two-player engine for the dice game Pig.
//!
//! ## Rules
//!
//! Players take turns rolling a six-sided die. Each non-1 face adds to
//! the turn's unbanked points; rolling a 1 forfeits them and passes the
//! turn. Holding banks the unbanked points; the first seat to bank 100
//! wins.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: transitions return data describing what happened
//!    (die face, events, intents). Rendering, audio, and timing belong
//!    to the presentation layer that calls in.
//!
//! 2. **Precondition no-ops**: calls that are invalid for the current
//!    state (rolling a decided game, rolling for a computer seat)
//!    return `None` and leave state untouched. There are no engine
//!    errors to surface.
//!
//! 3. **Deterministic**: the die is seeded ChaCha8 behind the
//!    `DieSource` trait; tests script exact roll sequences.
//!
//! ## Modules
//!
//! - `core`: seats, game state, RNG
//! - `engine`: the rules engine, computer policy, events, mode selection

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    DiceRng, DiceRngState, DieSource, GameState, GameStatus, ScriptedDie, Seat, SeatKind,
    SeatPair, DIE_SIDES, WIN_THRESHOLD,
};

pub use crate::engine::{
    ComputerStep, DiceOutcome, Events, GameBuilder, GameEvent, GameMode, HoldOutcome, PigGame,
    TurnIntent, COMPUTER_HOLD_THRESHOLD,
};
