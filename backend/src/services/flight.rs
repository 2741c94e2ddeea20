//! Flight scheduling and search service

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, QueryBuilder};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use shared::types::{PaginatedResponse, Pagination};
use shared::validation::validate_flight_window;

use crate::error::{AppError, AppResult};
use crate::models::{airport_label, crew_label, tickets_available, Seat, SeatingLayout};
use crate::services::airplane::AirplaneListItem;

/// Default page size for the flight list
pub const FLIGHTS_PER_PAGE: u32 = 20;

/// Flight service for scheduling and searching flights
#[derive(Clone)]
pub struct FlightService {
    db: PgPool,
}

/// Query filters for the flight list
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FlightFilters {
    /// Source airport name, substring match
    pub source_airport: Option<String>,
    /// Destination airport name, substring match
    pub destination_airport: Option<String>,
    /// Source city, substring match
    pub source_city: Option<String>,
    /// Destination city, substring match
    pub destination_city: Option<String>,
    /// Airplane name, substring match
    pub airplane: Option<String>,
    /// Comma-separated crew ids (ex. ?crew=<id>,<id>)
    pub crew: Option<String>,
    /// Departures on or after this date (ex. ?date_departure=2024-08-25)
    pub date_departure: Option<NaiveDate>,
    /// Arrivals on or after this date (ex. ?date_arrival=2024-09-03)
    pub date_arrival: Option<NaiveDate>,
}

/// Flight row used by the list endpoint
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FlightListItem {
    pub id: Uuid,
    pub route_source: String,
    pub route_dest: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub airplane_name: String,
    pub airplane_capacity: i64,
    pub tickets_available: i64,
}

/// Flight detail with nested airplane, crew labels and sold seats
#[derive(Debug, Serialize, ToSchema)]
pub struct FlightDetail {
    pub id: Uuid,
    pub route_source: String,
    pub route_dest: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub airplane: AirplaneListItem,
    pub crew: Vec<String>,
    pub taken_places: Vec<Seat>,
}

/// A scheduled flight as stored
#[derive(Debug, Serialize, ToSchema)]
pub struct Flight {
    pub id: Uuid,
    pub route_id: Uuid,
    pub airplane_id: Uuid,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub crew: Vec<Uuid>,
}

/// Input for scheduling a flight
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFlightInput {
    pub route_id: Uuid,
    pub airplane_id: Uuid,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    #[serde(default)]
    pub crew: Vec<Uuid>,
}

#[derive(Debug, sqlx::FromRow)]
struct FlightRow {
    id: Uuid,
    source_name: String,
    source_city: String,
    destination_name: String,
    destination_city: String,
    departure_time: DateTime<Utc>,
    arrival_time: DateTime<Utc>,
    airplane_name: String,
    seat_rows: i32,
    seats_in_row: i32,
    tickets_sold: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct FlightDetailRow {
    id: Uuid,
    source_name: String,
    source_city: String,
    destination_name: String,
    destination_city: String,
    departure_time: DateTime<Utc>,
    arrival_time: DateTime<Utc>,
    airplane_id: Uuid,
    airplane_name: String,
    seat_rows: i32,
    seats_in_row: i32,
    airplane_type: String,
    airplane_manufacturer: Option<String>,
}

const FLIGHT_JOINS: &str = " FROM flights f \
     JOIN routes r ON r.id = f.route_id \
     JOIN airports sa ON sa.id = r.source_id \
     JOIN airports da ON da.id = r.destination_id \
     JOIN airplanes a ON a.id = f.airplane_id";

impl FlightListItem {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn build(
        id: Uuid,
        source_name: &str,
        source_city: &str,
        destination_name: &str,
        destination_city: &str,
        departure_time: DateTime<Utc>,
        arrival_time: DateTime<Utc>,
        airplane_name: String,
        seat_rows: i32,
        seats_in_row: i32,
        tickets_sold: i64,
    ) -> Self {
        let capacity = SeatingLayout::new(seat_rows, seats_in_row)
            .map(|layout| layout.capacity())
            .unwrap_or(0);

        Self {
            id,
            route_source: airport_label(source_name, source_city),
            route_dest: airport_label(destination_name, destination_city),
            departure_time,
            arrival_time,
            airplane_name,
            airplane_capacity: capacity,
            tickets_available: tickets_available(capacity, tickets_sold),
        }
    }
}

impl FlightService {
    /// Create a new FlightService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List flights matching the filters, ordered by departure time
    pub async fn list_flights(
        &self,
        filters: FlightFilters,
        pagination: Pagination,
    ) -> AppResult<PaginatedResponse<FlightListItem>> {
        let crew_ids = match &filters.crew {
            Some(raw) => Some(parse_id_list(raw)?),
            None => None,
        };

        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*)");
        count_query.push(FLIGHT_JOINS);
        push_filters(&mut count_query, &filters, &crew_ids);

        let total_items: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.db)
            .await?;

        let mut query = QueryBuilder::<Postgres>::new(
            "SELECT f.id, \
                    sa.name AS source_name, sa.closest_big_city AS source_city, \
                    da.name AS destination_name, da.closest_big_city AS destination_city, \
                    f.departure_time, f.arrival_time, \
                    a.name AS airplane_name, a.seat_rows, a.seats_in_row, \
                    (SELECT COUNT(*) FROM tickets t WHERE t.flight_id = f.id) AS tickets_sold",
        );
        query.push(FLIGHT_JOINS);
        push_filters(&mut query, &filters, &crew_ids);
        query.push(" ORDER BY f.departure_time ASC, f.id ASC");
        query.push(" LIMIT ").push_bind(pagination.limit());
        query.push(" OFFSET ").push_bind(pagination.offset());

        let rows: Vec<FlightRow> = query.build_query_as().fetch_all(&self.db).await?;

        let data = rows
            .into_iter()
            .map(|row| {
                FlightListItem::build(
                    row.id,
                    &row.source_name,
                    &row.source_city,
                    &row.destination_name,
                    &row.destination_city,
                    row.departure_time,
                    row.arrival_time,
                    row.airplane_name,
                    row.seat_rows,
                    row.seats_in_row,
                    row.tickets_sold,
                )
            })
            .collect();

        Ok(PaginatedResponse::new(data, pagination, total_items as u64))
    }

    /// Get a flight by ID with crew and sold seats
    pub async fn get_flight(&self, flight_id: Uuid) -> AppResult<FlightDetail> {
        let row = sqlx::query_as::<_, FlightDetailRow>(
            r#"
            SELECT f.id,
                   sa.name AS source_name, sa.closest_big_city AS source_city,
                   da.name AS destination_name, da.closest_big_city AS destination_city,
                   f.departure_time, f.arrival_time,
                   a.id AS airplane_id, a.name AS airplane_name,
                   a.seat_rows, a.seats_in_row,
                   t.name AS airplane_type,
                   m.name AS airplane_manufacturer
            FROM flights f
            JOIN routes r ON r.id = f.route_id
            JOIN airports sa ON sa.id = r.source_id
            JOIN airports da ON da.id = r.destination_id
            JOIN airplanes a ON a.id = f.airplane_id
            JOIN airplane_types t ON t.id = a.airplane_type_id
            LEFT JOIN airplane_manufacturers m ON m.id = t.manufacturer_id
            WHERE f.id = $1
            "#,
        )
        .bind(flight_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Flight".to_string()))?;

        let crew = sqlx::query_as::<_, (String, String, String)>(
            r#"
            SELECT p.name, c.first_name, c.last_name
            FROM flight_crew fc
            JOIN crews c ON c.id = fc.crew_id
            JOIN crew_positions p ON p.id = c.position_id
            WHERE fc.flight_id = $1
            ORDER BY p.name ASC, c.first_name ASC, c.last_name ASC
            "#,
        )
        .bind(flight_id)
        .fetch_all(&self.db)
        .await?
        .into_iter()
        .map(|(position, first_name, last_name)| crew_label(&position, &first_name, &last_name))
        .collect();

        let taken_places = sqlx::query_as::<_, (i32, i32)>(
            "SELECT seat_row, seat FROM tickets WHERE flight_id = $1 ORDER BY seat_row ASC, seat ASC",
        )
        .bind(flight_id)
        .fetch_all(&self.db)
        .await?
        .into_iter()
        .map(|(row, seat)| Seat { row, seat })
        .collect();

        Ok(FlightDetail {
            id: row.id,
            route_source: airport_label(&row.source_name, &row.source_city),
            route_dest: airport_label(&row.destination_name, &row.destination_city),
            departure_time: row.departure_time,
            arrival_time: row.arrival_time,
            airplane: AirplaneListItem {
                id: row.airplane_id,
                name: row.airplane_name,
                rows: row.seat_rows,
                seats_in_row: row.seats_in_row,
                airplane_type: row.airplane_type,
                airplane_manufacturer: row.airplane_manufacturer,
            },
            crew,
            taken_places,
        })
    }

    /// Schedule a new flight
    pub async fn create_flight(&self, input: CreateFlightInput) -> AppResult<Flight> {
        validate_flight_window(input.departure_time, input.arrival_time)
            .map_err(|msg| AppError::InvalidSchedule(msg.to_string()))?;

        let route_exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM routes WHERE id = $1")
            .bind(input.route_id)
            .fetch_one(&self.db)
            .await?;

        if route_exists == 0 {
            return Err(AppError::Validation {
                field: "route_id".to_string(),
                message: "Unknown route".to_string(),
            });
        }

        let airplane_exists =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM airplanes WHERE id = $1")
                .bind(input.airplane_id)
                .fetch_one(&self.db)
                .await?;

        if airplane_exists == 0 {
            return Err(AppError::Validation {
                field: "airplane_id".to_string(),
                message: "Unknown airplane".to_string(),
            });
        }

        // Assignment lists may repeat an id; store each crew member once
        let mut crew_ids: Vec<Uuid> = Vec::with_capacity(input.crew.len());
        for id in &input.crew {
            if !crew_ids.contains(id) {
                crew_ids.push(*id);
            }
        }

        if !crew_ids.is_empty() {
            let found = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM crews WHERE id = ANY($1)")
                .bind(&crew_ids)
                .fetch_one(&self.db)
                .await?;

            if found != crew_ids.len() as i64 {
                return Err(AppError::Validation {
                    field: "crew".to_string(),
                    message: "Unknown crew member".to_string(),
                });
            }
        }

        let mut tx = self.db.begin().await?;

        let flight_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO flights (route_id, airplane_id, departure_time, arrival_time)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(input.route_id)
        .bind(input.airplane_id)
        .bind(input.departure_time)
        .bind(input.arrival_time)
        .fetch_one(&mut *tx)
        .await?;

        for crew_id in &crew_ids {
            sqlx::query("INSERT INTO flight_crew (flight_id, crew_id) VALUES ($1, $2)")
                .bind(flight_id)
                .bind(crew_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(Flight {
            id: flight_id,
            route_id: input.route_id,
            airplane_id: input.airplane_id,
            departure_time: input.departure_time,
            arrival_time: input.arrival_time,
            crew: crew_ids,
        })
    }
}

fn push_filters(
    query: &mut QueryBuilder<Postgres>,
    filters: &FlightFilters,
    crew_ids: &Option<Vec<Uuid>>,
) {
    query.push(" WHERE TRUE");

    if let Some(name) = &filters.source_airport {
        query.push(" AND sa.name ILIKE ").push_bind(like_pattern(name));
    }
    if let Some(name) = &filters.destination_airport {
        query.push(" AND da.name ILIKE ").push_bind(like_pattern(name));
    }
    if let Some(city) = &filters.source_city {
        query
            .push(" AND sa.closest_big_city ILIKE ")
            .push_bind(like_pattern(city));
    }
    if let Some(city) = &filters.destination_city {
        query
            .push(" AND da.closest_big_city ILIKE ")
            .push_bind(like_pattern(city));
    }
    if let Some(airplane) = &filters.airplane {
        query.push(" AND a.name ILIKE ").push_bind(like_pattern(airplane));
    }
    if let Some(ids) = crew_ids {
        query
            .push(" AND f.id IN (SELECT fc.flight_id FROM flight_crew fc WHERE fc.crew_id = ANY(")
            .push_bind(ids.clone())
            .push("))");
    }
    if let Some(date) = filters.date_departure {
        query
            .push(" AND f.departure_time >= ")
            .push_bind(start_of_day(date));
    }
    if let Some(date) = filters.date_arrival {
        query
            .push(" AND f.arrival_time >= ")
            .push_bind(start_of_day(date));
    }
}

/// Parse a comma-separated id list such as "id1, id2"
pub fn parse_id_list(raw: &str) -> AppResult<Vec<Uuid>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            Uuid::parse_str(s).map_err(|_| AppError::Validation {
                field: "crew".to_string(),
                message: format!("'{}' is not a valid id", s),
            })
        })
        .collect()
}

/// Substring pattern for ILIKE with wildcard characters escaped
fn like_pattern(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// Midnight UTC of the given date, the lower bound for date filters
fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_list_accepts_spaces() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let parsed = parse_id_list(&format!("{}, {}", a, b)).unwrap();
        assert_eq!(parsed, vec![a, b]);
    }

    #[test]
    fn parse_id_list_skips_empty_segments() {
        let a = Uuid::new_v4();
        let parsed = parse_id_list(&format!("{},,", a)).unwrap();
        assert_eq!(parsed, vec![a]);
    }

    #[test]
    fn parse_id_list_rejects_garbage() {
        assert!(parse_id_list("not-an-id").is_err());
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("JFK"), "%JFK%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
    }

    #[test]
    fn start_of_day_is_midnight_utc() {
        let date = NaiveDate::from_ymd_opt(2024, 8, 25).unwrap();
        let dt = start_of_day(date);
        assert_eq!(dt.to_rfc3339(), "2024-08-25T00:00:00+00:00");
    }

    #[test]
    fn list_item_capacity_and_availability() {
        let now = Utc::now();
        let item = FlightListItem::build(
            Uuid::new_v4(),
            "Heathrow",
            "London",
            "Boryspil",
            "Kyiv",
            now,
            now + chrono::Duration::hours(2),
            "Dreamliner".to_string(),
            20,
            6,
            30,
        );
        assert_eq!(item.route_source, "Heathrow (London)");
        assert_eq!(item.route_dest, "Boryspil (Kyiv)");
        assert_eq!(item.airplane_capacity, 120);
        assert_eq!(item.tickets_available, 90);
    }
}
