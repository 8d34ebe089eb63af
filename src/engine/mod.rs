//! The Pig rules engine: transitions, computer policy, events, modes.

pub mod event;
pub mod game;
pub mod mode;

pub use event::{Events, GameEvent};
pub use game::{
    ComputerStep, DiceOutcome, HoldOutcome, PigGame, TurnIntent, COMPUTER_HOLD_THRESHOLD,
};
pub use mode::{GameBuilder, GameMode};
