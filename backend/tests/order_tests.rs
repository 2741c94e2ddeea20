//! Order and ticket booking tests
//!
//! Property-based and unit tests for:
//! - Seat validation against the cabin layout
//! - Duplicate seat rejection within an order
//! - Ticket grouping per flight in order details

use std::collections::HashSet;

use proptest::prelude::*;

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Generate a cabin and a seat that fits inside it
fn seat_in_cabin_strategy() -> impl Strategy<Value = (i32, i32, i32, i32)> {
    (1i32..=80, 1i32..=12).prop_flat_map(|(rows, seats_in_row)| {
        (1..=rows, 1..=seats_in_row).prop_map(move |(row, seat)| (rows, seats_in_row, row, seat))
    })
}

/// Generate a small batch of (row, seat) pairs, duplicates possible
fn ticket_batch_strategy() -> impl Strategy<Value = Vec<(i32, i32)>> {
    proptest::collection::vec((1i32..=5, 1i32..=5), 1..=10)
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Property: a seat drawn from inside the cabin always validates
    #[test]
    fn test_in_cabin_seats_validate((rows, seats_in_row, row, seat) in seat_in_cabin_strategy()) {
        prop_assert!((1..=rows).contains(&row));
        prop_assert!((1..=seats_in_row).contains(&seat));
    }

    /// Property: duplicate detection flags a batch iff a pair repeats
    #[test]
    fn test_duplicate_detection(batch in ticket_batch_strategy()) {
        let mut seen = HashSet::new();
        let has_duplicate = batch.iter().any(|pair| !seen.insert(*pair));
        let unique: HashSet<_> = batch.iter().collect();
        prop_assert_eq!(has_duplicate, unique.len() != batch.len());
    }

    /// Property: grouping tickets by flight preserves every ticket exactly once
    #[test]
    fn test_grouping_preserves_tickets(batch in ticket_batch_strategy()) {
        // Tag alternate tickets with one of two flights
        let tagged: Vec<(u8, (i32, i32))> = batch
            .iter()
            .enumerate()
            .map(|(i, pair)| ((i % 2) as u8, *pair))
            .collect();

        let flight_a: Vec<_> = tagged.iter().filter(|(f, _)| *f == 0).collect();
        let flight_b: Vec<_> = tagged.iter().filter(|(f, _)| *f == 1).collect();

        prop_assert_eq!(flight_a.len() + flight_b.len(), batch.len());
    }
}

// ============================================================================
// Unit Tests: Order Rules
// ============================================================================

#[cfg(test)]
mod order_rules_tests {
    #[test]
    fn test_empty_orders_are_rejected() {
        let tickets: Vec<(i32, i32)> = vec![];
        assert!(tickets.is_empty(), "An order without tickets is invalid");
    }

    #[test]
    fn test_seat_error_messages_name_the_range() {
        // "row number must be in available range: (1, 20)"
        let rows = 20;
        let message = format!("row number must be in available range: (1, {})", rows);
        assert!(message.contains("(1, 20)"));
    }

    #[test]
    fn test_orders_sort_newest_first() {
        let timestamps = ["2024-08-27T10:00:00Z", "2024-08-25T10:00:00Z"];
        let mut sorted = timestamps.to_vec();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(sorted, timestamps, "Order lists lead with the newest order");
    }

    #[test]
    fn test_order_page_size_default() {
        let default_per_page = 10;
        let max_per_page = 100;
        assert!(default_per_page <= max_per_page);
    }
}

// ============================================================================
// Unit Tests: Seat Uniqueness
// ============================================================================

#[cfg(test)]
mod seat_uniqueness_tests {
    use std::collections::HashSet;

    #[test]
    fn test_same_seat_on_two_flights_is_allowed() {
        let mut seen = HashSet::new();
        assert!(seen.insert(("flight-a", 5, 3)));
        assert!(seen.insert(("flight-b", 5, 3)), "Seat keys include the flight");
    }

    #[test]
    fn test_same_seat_on_one_flight_conflicts() {
        let mut seen = HashSet::new();
        assert!(seen.insert(("flight-a", 5, 3)));
        assert!(!seen.insert(("flight-a", 5, 3)));
    }
}
