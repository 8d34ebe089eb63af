//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! Type-safe identifier for one of the two player slots. A seat is a
//! position, not a person: each seat is occupied by a `SeatKind`.
//!
//! ## SeatPair
//!
//! Per-seat data storage backed by `[T; 2]` for O(1) access.
//! Supports iteration and indexing by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier. Exactly two seats exist: 0 and 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat(u8);

impl Seat {
    /// The first seat. Always starts the game.
    pub const ZERO: Seat = Seat(0);

    /// The second seat.
    pub const ONE: Seat = Seat(1);

    /// Create a seat from a raw index.
    ///
    /// Panics if `index` is not 0 or 1.
    #[must_use]
    pub fn new(index: u8) -> Self {
        assert!(index < 2, "Seat index must be 0 or 1");
        Self(index)
    }

    /// Get the raw seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the opposing seat.
    ///
    /// ```
    /// use pig_dice::core::Seat;
    ///
    /// assert_eq!(Seat::ZERO.other(), Seat::ONE);
    /// assert_eq!(Seat::ONE.other(), Seat::ZERO);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both seats in order.
    pub fn both() -> impl Iterator<Item = Seat> {
        [Seat::ZERO, Seat::ONE].into_iter()
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// What occupies a seat: a human player or the scripted computer opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatKind {
    /// Controlled by a person via the presentation layer.
    Human,
    /// Controlled by the built-in threshold policy.
    Computer,
}

impl SeatKind {
    /// Check if this seat is human-controlled.
    #[must_use]
    pub fn is_human(self) -> bool {
        matches!(self, SeatKind::Human)
    }
}

/// Per-seat data storage with O(1) access.
///
/// Backed by a `[T; 2]` with one entry per seat.
///
/// ## Example
///
/// ```
/// use pig_dice::core::{Seat, SeatPair};
///
/// let mut scores: SeatPair<u32> = SeatPair::with_value(0);
///
/// scores[Seat::ONE] = 42;
/// assert_eq!(scores[Seat::ZERO], 0);
/// assert_eq!(scores[Seat::ONE], 42);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatPair<T> {
    data: [T; 2],
}

impl<T> SeatPair<T> {
    /// Create a new SeatPair from explicit per-seat values.
    #[must_use]
    pub const fn new(seat0: T, seat1: T) -> Self {
        Self {
            data: [seat0, seat1],
        }
    }

    /// Create a new SeatPair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (Seat(i as u8), v))
    }

    /// Both values as a plain array, seat 0 first.
    #[must_use]
    pub fn as_array(&self) -> &[T; 2] {
        &self.data
    }
}

impl<T> Index<Seat> for SeatPair<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatPair<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_basics() {
        assert_eq!(Seat::ZERO.index(), 0);
        assert_eq!(Seat::ONE.index(), 1);
        assert_eq!(Seat::new(1), Seat::ONE);
        assert_eq!(format!("{}", Seat::ZERO), "Seat 0");
    }

    #[test]
    fn test_seat_other() {
        assert_eq!(Seat::ZERO.other(), Seat::ONE);
        assert_eq!(Seat::ONE.other(), Seat::ZERO);
        assert_eq!(Seat::ZERO.other().other(), Seat::ZERO);
    }

    #[test]
    fn test_seat_both() {
        let seats: Vec<_> = Seat::both().collect();
        assert_eq!(seats, vec![Seat::ZERO, Seat::ONE]);
    }

    #[test]
    #[should_panic(expected = "Seat index must be 0 or 1")]
    fn test_seat_out_of_range() {
        let _ = Seat::new(2);
    }

    #[test]
    fn test_seat_kind() {
        assert!(SeatKind::Human.is_human());
        assert!(!SeatKind::Computer.is_human());
    }

    #[test]
    fn test_seat_pair_new() {
        let pair = SeatPair::new(10u32, 20u32);
        assert_eq!(pair[Seat::ZERO], 10);
        assert_eq!(pair[Seat::ONE], 20);
    }

    #[test]
    fn test_seat_pair_with_value() {
        let pair: SeatPair<u32> = SeatPair::with_value(7);
        assert_eq!(pair[Seat::ZERO], 7);
        assert_eq!(pair[Seat::ONE], 7);
    }

    #[test]
    fn test_seat_pair_mutation() {
        let mut pair: SeatPair<u32> = SeatPair::with_value(0);
        pair[Seat::ZERO] = 5;
        pair[Seat::ONE] = 9;

        assert_eq!(pair[Seat::ZERO], 5);
        assert_eq!(pair[Seat::ONE], 9);
    }

    #[test]
    fn test_seat_pair_iter() {
        let pair = SeatPair::new(1u32, 2u32);
        let items: Vec<_> = pair.iter().collect();
        assert_eq!(items, vec![(Seat::ZERO, &1), (Seat::ONE, &2)]);
    }

    #[test]
    fn test_seat_pair_serialization() {
        let pair = SeatPair::new(3u32, 4u32);
        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: SeatPair<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
