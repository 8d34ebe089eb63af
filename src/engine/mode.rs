//! Mode selection and session construction.
//!
//! A mode maps to a seat-kind pair, and a session is always a fresh
//! engine built for that mode. There is no re-wiring of an existing
//! session when the mode changes; the presentation layer discards the
//! old engine and builds a new one.

use serde::{Deserialize, Serialize};

use crate::core::{DiceRng, DieSource, SeatKind, SeatPair};

use super::game::PigGame;

/// How the two seats are occupied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans sharing one screen.
    #[default]
    LocalMultiplayer,
    /// Seat 0 human, seat 1 computer.
    VsComputer,
}

impl GameMode {
    /// The seat kinds this mode plays with. Seat 0 is always human.
    #[must_use]
    pub fn seat_kinds(self) -> SeatPair<SeatKind> {
        match self {
            GameMode::LocalMultiplayer => SeatPair::new(SeatKind::Human, SeatKind::Human),
            GameMode::VsComputer => SeatPair::new(SeatKind::Human, SeatKind::Computer),
        }
    }

    /// Display name for mode-selection UI.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            GameMode::LocalMultiplayer => "Local Multiplayer",
            GameMode::VsComputer => "Vs Computer",
        }
    }
}

/// Builder for a fresh game session.
///
/// ## Example
///
/// ```
/// use pig_dice::engine::{GameBuilder, GameMode};
///
/// let game = GameBuilder::new()
///     .mode(GameMode::VsComputer)
///     .seed(42)
///     .build();
///
/// assert!(game.controls_enabled());
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    mode: GameMode,
    seed: u64,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            seed: 0,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the game mode.
    pub fn mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the die seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build a fresh engine for this mode with a seeded die.
    #[must_use]
    pub fn build(self) -> PigGame<DiceRng> {
        PigGame::new(self.mode.seat_kinds(), self.seed)
    }

    /// Build with an explicit die source.
    #[must_use]
    pub fn build_with_die<D: DieSource>(self, die: D) -> PigGame<D> {
        PigGame::with_die(self.mode.seat_kinds(), die)
    }
}
