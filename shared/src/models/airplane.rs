//! Airplane seating models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Cabin geometry of an airplane
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatingLayout {
    pub rows: i32,
    pub seats_in_row: i32,
}

impl SeatingLayout {
    /// Create a layout.
    /// Returns None unless both dimensions are positive.
    pub fn new(rows: i32, seats_in_row: i32) -> Option<Self> {
        if rows > 0 && seats_in_row > 0 {
            Some(Self { rows, seats_in_row })
        } else {
            None
        }
    }

    /// Total number of seats on the airplane
    pub fn capacity(&self) -> i64 {
        self.rows as i64 * self.seats_in_row as i64
    }

    /// Whether a seat position exists in this cabin
    pub fn holds(&self, seat: Seat) -> bool {
        (1..=self.rows).contains(&seat.row) && (1..=self.seats_in_row).contains(&seat.seat)
    }
}

/// A single seat position on a flight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
pub struct Seat {
    pub row: i32,
    pub seat: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_requires_positive_dimensions() {
        assert!(SeatingLayout::new(20, 6).is_some());
        assert!(SeatingLayout::new(0, 6).is_none());
        assert!(SeatingLayout::new(20, 0).is_none());
        assert!(SeatingLayout::new(-1, 6).is_none());
    }

    #[test]
    fn capacity_is_rows_times_seats() {
        let layout = SeatingLayout::new(20, 6).unwrap();
        assert_eq!(layout.capacity(), 120);
    }

    #[test]
    fn holds_accepts_seats_inside_the_cabin() {
        let layout = SeatingLayout::new(20, 6).unwrap();
        assert!(layout.holds(Seat { row: 1, seat: 1 }));
        assert!(layout.holds(Seat { row: 20, seat: 6 }));
    }

    #[test]
    fn holds_rejects_seats_outside_the_cabin() {
        let layout = SeatingLayout::new(20, 6).unwrap();
        assert!(!layout.holds(Seat { row: 0, seat: 1 }));
        assert!(!layout.holds(Seat { row: 21, seat: 1 }));
        assert!(!layout.holds(Seat { row: 1, seat: 0 }));
        assert!(!layout.holds(Seat { row: 1, seat: 7 }));
    }
}
