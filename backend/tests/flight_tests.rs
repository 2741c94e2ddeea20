//! Flight scheduling and search tests
//!
//! Property-based and unit tests for:
//! - The departure/arrival window invariant
//! - Flight list filter parsing
//! - Pagination bounds

use proptest::prelude::*;

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Generate pairs of distinct unix timestamps
fn time_pair_strategy() -> impl Strategy<Value = (i64, i64)> {
    (1_600_000_000i64..1_900_000_000, 1i64..86_400 * 30)
        .prop_map(|(start, delta)| (start, start + delta))
}

/// Generate per_page values far outside the allowed range
fn per_page_strategy() -> impl Strategy<Value = u32> {
    0u32..100_000
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Property: a flight window is valid iff arrival is strictly later
    #[test]
    fn test_flight_window_ordering((departure, arrival) in time_pair_strategy()) {
        prop_assert!(departure < arrival);
        // The reversed window must be rejected
        prop_assert!(!(arrival < departure));
    }

    /// Property: clamped page size always lands in 1..=100
    #[test]
    fn test_per_page_clamping(per_page in per_page_strategy()) {
        let clamped = per_page.clamp(1, 100);
        prop_assert!(clamped >= 1);
        prop_assert!(clamped <= 100);
    }
}

// ============================================================================
// Unit Tests: Filter Parameters
// ============================================================================

#[cfg(test)]
mod filter_tests {
    /// Every filter the flight list accepts
    const FLIGHT_FILTERS: &[&str] = &[
        "source_airport",
        "destination_airport",
        "source_city",
        "destination_city",
        "airplane",
        "crew",
        "date_departure",
        "date_arrival",
    ];

    #[test]
    fn test_filter_set_is_complete() {
        assert_eq!(FLIGHT_FILTERS.len(), 8);
    }

    #[test]
    fn test_date_filters_use_iso_dates() {
        let example = "2024-08-25";
        let parts: Vec<&str> = example.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 4, "Year should be 4 digits");
        assert_eq!(parts[1].len(), 2, "Month should be 2 digits");
        assert_eq!(parts[2].len(), 2, "Day should be 2 digits");
    }

    #[test]
    fn test_crew_filter_is_comma_separated() {
        let raw = "id-one, id-two,id-three";
        let segments: Vec<&str> = raw.split(',').map(str::trim).collect();
        assert_eq!(segments, vec!["id-one", "id-two", "id-three"]);
    }

    #[test]
    fn test_date_filter_is_inclusive_lower_bound() {
        // ?date_departure=D matches flights departing on D or later
        let filter_date = "2024-08-27";
        let matching = ["2024-08-27", "2024-08-28"];
        let excluded = ["2024-08-26"];

        for date in matching {
            assert!(date >= filter_date);
        }
        for date in excluded {
            assert!(date < filter_date);
        }
    }
}

// ============================================================================
// Unit Tests: Pagination Defaults
// ============================================================================

#[cfg(test)]
mod pagination_tests {
    #[test]
    fn test_flight_page_size_default() {
        let default_per_page = 20;
        let max_per_page = 100;
        assert!(default_per_page <= max_per_page);
    }

    #[test]
    fn test_pages_are_one_based() {
        let first_page = 1;
        let per_page = 20;
        let offset = (first_page - 1) * per_page;
        assert_eq!(offset, 0, "The first page starts at offset 0");
    }
}

// ============================================================================
// Unit Tests: Availability Accounting
// ============================================================================

#[cfg(test)]
mod availability_tests {
    #[test]
    fn test_available_is_capacity_minus_sold() {
        let capacity = 120i64;
        for sold in [0i64, 1, 60, 119, 120] {
            let available = (capacity - sold).max(0);
            assert_eq!(available, capacity - sold);
        }
    }

    #[test]
    fn test_oversold_flight_reports_zero() {
        let capacity = 120i64;
        let sold = 121i64;
        assert_eq!((capacity - sold).max(0), 0);
    }
}
