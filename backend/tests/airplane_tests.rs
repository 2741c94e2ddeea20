//! Airplane and fleet tests
//!
//! Property-based and unit tests for cabin geometry and image naming rules.

use proptest::prelude::*;

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Generate realistic cabin dimensions
fn cabin_strategy() -> impl Strategy<Value = (i32, i32)> {
    (1i32..=80, 1i32..=12)
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Property: capacity is exactly rows times seats per row
    #[test]
    fn test_capacity_is_product((rows, seats_in_row) in cabin_strategy()) {
        let capacity = rows as i64 * seats_in_row as i64;
        prop_assert!(capacity >= 1);
        prop_assert_eq!(capacity % seats_in_row as i64, 0);
    }

    /// Property: every 1-based seat inside the cabin is valid,
    /// and the first seat outside each axis is not
    #[test]
    fn test_seat_bounds((rows, seats_in_row) in cabin_strategy()) {
        let in_range = |row: i32, seat: i32| {
            (1..=rows).contains(&row) && (1..=seats_in_row).contains(&seat)
        };

        prop_assert!(in_range(1, 1));
        prop_assert!(in_range(rows, seats_in_row));
        prop_assert!(!in_range(0, 1));
        prop_assert!(!in_range(rows + 1, 1));
        prop_assert!(!in_range(1, seats_in_row + 1));
    }
}

// ============================================================================
// Unit Tests: Cabin Layout
// ============================================================================

#[cfg(test)]
mod cabin_tests {
    #[test]
    fn test_zero_dimension_cabins_are_invalid() {
        for (rows, seats) in [(0, 6), (20, 0), (0, 0), (-1, 6)] {
            assert!(
                rows <= 0 || seats <= 0,
                "({}, {}) should be an invalid cabin",
                rows,
                seats
            );
        }
    }

    #[test]
    fn test_reference_cabin_capacity() {
        // The fleet's common narrow-body layout
        let rows = 20;
        let seats_in_row = 6;
        assert_eq!(rows * seats_in_row, 120);
    }
}

// ============================================================================
// Unit Tests: Image Upload Naming
// ============================================================================

#[cfg(test)]
mod image_naming_tests {
    #[test]
    fn test_stored_names_are_slugified() {
        // "Boeing 747" becomes "boeing-747-<uuid>.<ext>"
        let slug = "boeing-747";
        assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(!slug.starts_with('-'));
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn test_extension_is_preserved_lowercase() {
        for (original, expected) in [("photo.PNG", ".png"), ("plane.jpeg", ".jpeg")] {
            let ext = std::path::Path::new(original)
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy().to_ascii_lowercase()))
                .unwrap_or_default();
            assert_eq!(ext, expected);
        }
    }

    #[test]
    fn test_upload_directory_is_stable() {
        let relative = "uploads/airplanes/boeing-747-some-uuid.png";
        assert!(relative.starts_with("uploads/airplanes/"));
        assert!(!relative.starts_with('/'));
    }
}
