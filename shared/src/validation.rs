//! Validation helpers shared by the service layer

use chrono::{DateTime, Utc};

use crate::models::{Seat, SeatingLayout};

// ============================================================================
// Account Validations
// ============================================================================

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if validator::validate_email(email) {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

// ============================================================================
// Booking Validations
// ============================================================================

/// Which seat coordinate fell outside the cabin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatBound {
    Row { max: i32 },
    Seat { max: i32 },
}

/// Validate that a seat position exists on the given airplane.
/// Row and seat numbers are 1-based.
pub fn validate_seat(layout: SeatingLayout, seat: Seat) -> Result<(), SeatBound> {
    if !(1..=layout.rows).contains(&seat.row) {
        return Err(SeatBound::Row { max: layout.rows });
    }
    if !(1..=layout.seats_in_row).contains(&seat.seat) {
        return Err(SeatBound::Seat {
            max: layout.seats_in_row,
        });
    }
    Ok(())
}

// ============================================================================
// Scheduling Validations
// ============================================================================

/// Validate a flight's time window
pub fn validate_flight_window(
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
) -> Result<(), &'static str> {
    if departure >= arrival {
        return Err("Arrival time must be later than departure time");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn layout() -> SeatingLayout {
        SeatingLayout::new(20, 6).unwrap()
    }

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name@domain.co").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@.").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("password123").is_ok());
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("short").is_err());
    }

    #[test]
    fn test_validate_seat_in_range() {
        assert!(validate_seat(layout(), Seat { row: 1, seat: 1 }).is_ok());
        assert!(validate_seat(layout(), Seat { row: 20, seat: 6 }).is_ok());
        assert!(validate_seat(layout(), Seat { row: 7, seat: 3 }).is_ok());
    }

    #[test]
    fn test_validate_seat_row_out_of_range() {
        assert_eq!(
            validate_seat(layout(), Seat { row: 0, seat: 1 }),
            Err(SeatBound::Row { max: 20 })
        );
        assert_eq!(
            validate_seat(layout(), Seat { row: 21, seat: 1 }),
            Err(SeatBound::Row { max: 20 })
        );
    }

    #[test]
    fn test_validate_seat_number_out_of_range() {
        assert_eq!(
            validate_seat(layout(), Seat { row: 1, seat: 0 }),
            Err(SeatBound::Seat { max: 6 })
        );
        assert_eq!(
            validate_seat(layout(), Seat { row: 1, seat: 7 }),
            Err(SeatBound::Seat { max: 6 })
        );
    }

    #[test]
    fn test_validate_flight_window() {
        let departure = Utc.with_ymd_and_hms(2024, 8, 25, 14, 0, 0).unwrap();
        let arrival = Utc.with_ymd_and_hms(2024, 8, 25, 16, 0, 0).unwrap();
        assert!(validate_flight_window(departure, arrival).is_ok());
        assert!(validate_flight_window(arrival, departure).is_err());
        assert!(validate_flight_window(departure, departure).is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Seats drawn from inside the cabin always validate
            #[test]
            fn in_cabin_seats_validate(
                (rows, seats_in_row) in (1i32..=80, 1i32..=12),
                row_frac in 0.0f64..1.0,
                seat_frac in 0.0f64..1.0,
            ) {
                let layout = SeatingLayout::new(rows, seats_in_row).unwrap();
                let seat = Seat {
                    row: 1 + (row_frac * (rows - 1) as f64) as i32,
                    seat: 1 + (seat_frac * (seats_in_row - 1) as f64) as i32,
                };
                prop_assert!(validate_seat(layout, seat).is_ok());
            }

            /// A seat outside either axis is rejected with that axis's bound
            #[test]
            fn out_of_cabin_seats_are_rejected(
                (rows, seats_in_row) in (1i32..=80, 1i32..=12),
            ) {
                let layout = SeatingLayout::new(rows, seats_in_row).unwrap();
                prop_assert_eq!(
                    validate_seat(layout, Seat { row: rows + 1, seat: 1 }),
                    Err(SeatBound::Row { max: rows })
                );
                prop_assert_eq!(
                    validate_seat(layout, Seat { row: 1, seat: seats_in_row + 1 }),
                    Err(SeatBound::Seat { max: seats_in_row })
                );
            }
        }
    }
}
