//! Game events reported to the presentation layer.
//!
//! Events describe what a transition did, in the order it happened.
//! The engine performs no I/O; a presentation layer maps events to
//! whatever feedback it owns (dice image, active-seat highlight, the
//! roll/hold/new-game/win sound cues) after each call returns.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Seat;

/// Something that happened during a single engine transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh game began; seat 0 is active.
    GameStarted,
    /// The die showed this face.
    DiceRolled(u8),
    /// A 1 was rolled; the turn's unbanked points were forfeited.
    Bust,
    /// Unbanked points were committed to a seat's score.
    PointsBanked {
        /// The seat that banked.
        seat: Seat,
        /// The seat's new banked total.
        total: u32,
    },
    /// The active seat changed.
    TurnSwitched {
        /// The seat whose turn it now is.
        to: Seat,
    },
    /// A seat reached the win threshold. Terminal.
    GameWon(Seat),
}

/// Event list for one transition.
///
/// A single call emits at most a handful of events (roll, bust, switch),
/// so these stay inline without heap allocation.
pub type Events = SmallVec<[GameEvent; 3]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_stay_inline() {
        let mut events = Events::new();
        events.push(GameEvent::DiceRolled(1));
        events.push(GameEvent::Bust);
        events.push(GameEvent::TurnSwitched { to: Seat::ONE });

        assert!(!events.spilled());
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::PointsBanked {
            seat: Seat::ZERO,
            total: 42,
        };

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
    }
}
