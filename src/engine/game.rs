//! The Pig rules engine.
//!
//! `PigGame` owns the single `GameState` for a session plus the seat
//! kinds and the die. All transitions are synchronous and return data
//! describing what happened; the engine never renders, plays audio,
//! sleeps, or schedules. Invalid calls (wrong seat kind, game already
//! decided) are precondition no-ops returning `None`, not errors — the
//! presentation layer is expected to gate its calls on observable state.
//!
//! ## Transitions
//!
//! - `roll(1)` → bust, turn switches
//! - `roll(2..=6)` → accumulate, turn continues
//! - `hold` reaching 100 → `Won`
//! - `hold` below 100 → turn switches
//!
//! The computer seat advances one roll at a time via
//! [`PigGame::computer_turn_step`], which reports the next action as a
//! [`TurnIntent`] so that delays between computer moves stay a caller
//! concern.

use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::core::{
    DiceRng, DieSource, GameState, GameStatus, Seat, SeatKind, SeatPair, WIN_THRESHOLD,
};

use super::event::{Events, GameEvent};

/// Unbanked total at which the computer seat stops rolling and holds.
pub const COMPUTER_HOLD_THRESHOLD: u32 = 15;

/// The next action a computer seat's caller should take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnIntent {
    /// Below the hold threshold: call `computer_turn_step` again.
    RollAgain,
    /// At or above the hold threshold: call `hold_turn`.
    Hold,
    /// A 1 was rolled; the turn already switched. Nothing to do.
    SwitchTurn,
}

/// Result of a human roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceOutcome {
    /// The face rolled.
    pub face: u8,
    /// Whether the roll was a 1, forfeiting the turn's points.
    pub busted: bool,
    /// What happened, in order.
    pub events: Events,
}

/// Result of banking the turn's points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldOutcome {
    /// The holding seat's banked total after the hold.
    pub banked: u32,
    /// `Some` if this hold won the game.
    pub winner: Option<Seat>,
    /// What happened, in order.
    pub events: Events,
}

/// Result of one computer roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerStep {
    /// The face rolled.
    pub face: u8,
    /// What the caller should do next.
    pub intent: TurnIntent,
    /// What happened, in order.
    pub events: Events,
}

/// The Pig game engine.
///
/// Generic over the die source so tests can script exact roll
/// sequences; production games use the seeded [`DiceRng`].
///
/// ## Example
///
/// ```
/// use pig_dice::core::{SeatKind, SeatPair};
/// use pig_dice::engine::PigGame;
///
/// let kinds = SeatPair::new(SeatKind::Human, SeatKind::Human);
/// let mut game = PigGame::new(kinds, 42);
///
/// let outcome = game.roll_dice().unwrap();
/// assert!((1..=6).contains(&outcome.face));
/// ```
#[derive(Clone, Debug)]
pub struct PigGame<D: DieSource = DiceRng> {
    kinds: SeatPair<SeatKind>,
    state: GameState,
    die: D,
}

impl PigGame<DiceRng> {
    /// Create a game with a seeded PRNG die.
    #[must_use]
    pub fn new(seat_kinds: SeatPair<SeatKind>, seed: u64) -> Self {
        Self::with_die(seat_kinds, DiceRng::new(seed))
    }
}

impl<D: DieSource> PigGame<D> {
    /// Create a game with an explicit die source.
    #[must_use]
    pub fn with_die(seat_kinds: SeatPair<SeatKind>, die: D) -> Self {
        Self {
            kinds: seat_kinds,
            state: GameState::new(),
            die,
        }
    }

    // === Observable state ===

    /// The full game state, for rendering.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Banked scores, seat 0 first.
    #[must_use]
    pub fn scores(&self) -> &SeatPair<u32> {
        &self.state.scores
    }

    /// The active seat's unbanked points this turn.
    #[must_use]
    pub fn current_score(&self) -> u32 {
        self.state.current_score
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn active_seat(&self) -> Seat {
        self.state.active_seat
    }

    /// Running or decided.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// What occupies a seat.
    #[must_use]
    pub fn seat_kind(&self, seat: Seat) -> SeatKind {
        self.kinds[seat]
    }

    /// The most recent die face, for display.
    #[must_use]
    pub fn last_roll(&self) -> Option<u8> {
        self.state.last_roll
    }

    /// Whether roll/hold controls should be live: the game is running
    /// and the active seat is human.
    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        self.state.status.is_in_progress() && self.kinds[self.state.active_seat].is_human()
    }

    // === Transitions ===

    /// Start a fresh game, replacing any prior state in full.
    ///
    /// Seat 0 is active; scores and the current turn reset to zero.
    /// Always succeeds, including over a decided game.
    pub fn start_game(&mut self, seat_kinds: SeatPair<SeatKind>) -> Events {
        self.kinds = seat_kinds;
        self.state = GameState::new();
        smallvec![GameEvent::GameStarted]
    }

    /// Roll the die for the active human seat.
    ///
    /// A 1 busts: the turn's unbanked points are forfeited and the turn
    /// switches. Any other face accumulates and the turn continues.
    ///
    /// Returns `None` without touching state when the game is decided
    /// or the active seat is a computer (which rolls through
    /// [`computer_turn_step`](PigGame::computer_turn_step)).
    pub fn roll_dice(&mut self) -> Option<DiceOutcome> {
        if !self.state.status.is_in_progress() {
            return None;
        }
        if !self.kinds[self.state.active_seat].is_human() {
            return None;
        }

        let face = self.roll();
        let mut events: Events = smallvec![GameEvent::DiceRolled(face)];

        let busted = face == 1;
        if busted {
            events.push(GameEvent::Bust);
            self.switch_turn(&mut events);
        } else {
            self.state.accumulate(face);
        }

        Some(DiceOutcome {
            face,
            busted,
            events,
        })
    }

    /// Bank the active seat's unbanked points.
    ///
    /// Reaching the win threshold decides the game: the state freezes
    /// and the turn does not switch. Otherwise the turn switches.
    ///
    /// Also used on behalf of a computer seat when
    /// [`computer_turn_step`](PigGame::computer_turn_step) reports
    /// [`TurnIntent::Hold`].
    ///
    /// Returns `None` without touching state when the game is decided.
    pub fn hold_turn(&mut self) -> Option<HoldOutcome> {
        if !self.state.status.is_in_progress() {
            return None;
        }

        let seat = self.state.active_seat;
        let banked = self.state.bank_current();
        let mut events: Events = smallvec![GameEvent::PointsBanked {
            seat,
            total: banked
        }];

        let winner = if banked >= WIN_THRESHOLD {
            self.state.set_won(seat);
            events.push(GameEvent::GameWon(seat));
            Some(seat)
        } else {
            self.switch_turn(&mut events);
            None
        };

        Some(HoldOutcome {
            banked,
            winner,
            events,
        })
    }

    /// Roll once for the active computer seat and report the next
    /// action as an intent.
    ///
    /// Threshold policy: a 1 busts (turn already switched on return);
    /// otherwise the computer keeps rolling until its unbanked total
    /// reaches [`COMPUTER_HOLD_THRESHOLD`], then holds. The engine
    /// never schedules the follow-up call itself — any delay between
    /// computer moves belongs to the caller.
    ///
    /// Returns `None` without touching state when the game is decided
    /// or the active seat is human.
    pub fn computer_turn_step(&mut self) -> Option<ComputerStep> {
        if !self.state.status.is_in_progress() {
            return None;
        }
        if self.kinds[self.state.active_seat].is_human() {
            return None;
        }

        let face = self.roll();
        let mut events: Events = smallvec![GameEvent::DiceRolled(face)];

        let intent = if face == 1 {
            events.push(GameEvent::Bust);
            self.switch_turn(&mut events);
            TurnIntent::SwitchTurn
        } else {
            self.state.accumulate(face);
            if self.state.current_score < COMPUTER_HOLD_THRESHOLD {
                TurnIntent::RollAgain
            } else {
                TurnIntent::Hold
            }
        };

        Some(ComputerStep {
            face,
            intent,
            events,
        })
    }

    // === Internals ===

    fn roll(&mut self) -> u8 {
        let face = self.die.roll_die();
        self.state.last_roll = Some(face);
        face
    }

    fn switch_turn(&mut self, events: &mut Events) {
        self.state.switch_turn();
        events.push(GameEvent::TurnSwitched {
            to: self.state.active_seat,
        });
    }
}
