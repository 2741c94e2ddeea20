//! Order and ticket booking service

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use shared::types::{PaginatedResponse, Pagination};
use shared::validation::{validate_seat, SeatBound};

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::models::{airport_label, route_label, Seat, SeatingLayout};
use crate::services::flight::FlightListItem;

/// Default page size for the order list
pub const ORDERS_PER_PAGE: u32 = 10;

/// Order service for ticket bookings
#[derive(Clone)]
pub struct OrderService {
    db: PgPool,
}

/// Input for one ticket in an order
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TicketInput {
    pub row: i32,
    pub seat: i32,
    pub flight_id: Uuid,
}

/// Input for creating an order
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderInput {
    pub tickets: Vec<TicketInput>,
}

/// A stored ticket
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Ticket {
    pub id: Uuid,
    pub row: i32,
    pub seat: i32,
    pub flight_id: Uuid,
}

/// Order as returned from creation
#[derive(Debug, Serialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub tickets: Vec<Ticket>,
}

/// Ticket with its flight summary, used by the order list
#[derive(Debug, Serialize, ToSchema)]
pub struct TicketListItem {
    pub id: Uuid,
    pub row: i32,
    pub seat: i32,
    pub flight: FlightListItem,
}

/// Order list row with its tickets embedded
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderListItem {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub tickets: Vec<TicketListItem>,
}

/// One flight inside an order detail, with the booked seats
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderFlight {
    pub id: Uuid,
    pub route: String,
    pub airplane: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub tickets: Vec<Seat>,
}

/// Order detail with tickets grouped per flight
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderDetail {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub flights: Vec<OrderFlight>,
}

#[derive(Debug, sqlx::FromRow)]
struct OrderTicketRow {
    id: Uuid,
    order_id: Uuid,
    seat_row: i32,
    seat: i32,
    flight_id: Uuid,
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
pub(crate) struct OrderDetailRow {
    pub(crate) flight_id: Uuid,
    pub(crate) source_name: String,
    pub(crate) source_city: String,
    pub(crate) destination_name: String,
    pub(crate) destination_city: String,
    pub(crate) departure_time: DateTime<Utc>,
    pub(crate) arrival_time: DateTime<Utc>,
    pub(crate) airplane_name: String,
    pub(crate) seat_row: i32,
    pub(crate) seat: i32,
}

impl OrderService {
    /// Create a new OrderService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List the user's orders, newest first
    pub async fn list_orders(
        &self,
        user_id: Uuid,
        pagination: Pagination,
    ) -> AppResult<PaginatedResponse<OrderListItem>> {
        let total_items =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.db)
                .await?;

        let orders = sqlx::query_as::<_, (Uuid, DateTime<Utc>)>(
            r#"
            SELECT id, created_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.db)
        .await?;

        let order_ids: Vec<Uuid> = orders.iter().map(|(id, _)| *id).collect();

        let ticket_rows = sqlx::query_as::<_, OrderTicketRow>(
            r#"
            SELECT t.id, t.order_id, t.seat_row, t.seat,
                   f.id AS flight_id,
                   sa.name AS source_name, sa.closest_big_city AS source_city,
                   da.name AS destination_name, da.closest_big_city AS destination_city,
                   f.departure_time, f.arrival_time,
                   a.name AS airplane_name, a.seat_rows, a.seats_in_row,
                   (SELECT COUNT(*) FROM tickets ts WHERE ts.flight_id = f.id) AS tickets_sold
            FROM tickets t
            JOIN flights f ON f.id = t.flight_id
            JOIN routes r ON r.id = f.route_id
            JOIN airports sa ON sa.id = r.source_id
            JOIN airports da ON da.id = r.destination_id
            JOIN airplanes a ON a.id = f.airplane_id
            WHERE t.order_id = ANY($1)
            ORDER BY f.departure_time ASC, t.seat_row ASC, t.seat ASC
            "#,
        )
        .bind(&order_ids)
        .fetch_all(&self.db)
        .await?;

        let mut tickets_by_order: HashMap<Uuid, Vec<TicketListItem>> = HashMap::new();
        for row in ticket_rows {
            let flight = FlightListItem::build(
                row.flight_id,
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
            );
            tickets_by_order
                .entry(row.order_id)
                .or_default()
                .push(TicketListItem {
                    id: row.id,
                    row: row.seat_row,
                    seat: row.seat,
                    flight,
                });
        }

        let data = orders
            .into_iter()
            .map(|(id, created_at)| OrderListItem {
                id,
                created_at,
                tickets: tickets_by_order.remove(&id).unwrap_or_default(),
            })
            .collect();

        Ok(PaginatedResponse::new(data, pagination, total_items as u64))
    }

    /// Get one of the user's orders with tickets grouped per flight
    pub async fn get_order(&self, user_id: Uuid, order_id: Uuid) -> AppResult<OrderDetail> {
        let order = sqlx::query_as::<_, (Uuid, DateTime<Utc>)>(
            "SELECT id, created_at FROM orders WHERE id = $1 AND user_id = $2",
        )
        .bind(order_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Order".to_string()))?;

        let rows = sqlx::query_as::<_, OrderDetailRow>(
            r#"
            SELECT f.id AS flight_id,
                   sa.name AS source_name, sa.closest_big_city AS source_city,
                   da.name AS destination_name, da.closest_big_city AS destination_city,
                   f.departure_time, f.arrival_time,
                   a.name AS airplane_name,
                   t.seat_row, t.seat
            FROM tickets t
            JOIN flights f ON f.id = t.flight_id
            JOIN routes r ON r.id = f.route_id
            JOIN airports sa ON sa.id = r.source_id
            JOIN airports da ON da.id = r.destination_id
            JOIN airplanes a ON a.id = f.airplane_id
            WHERE t.order_id = $1
            ORDER BY f.departure_time ASC, t.seat_row ASC, t.seat ASC
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.db)
        .await?;

        Ok(OrderDetail {
            id: order.0,
            created_at: order.1,
            flights: group_tickets_by_flight(rows),
        })
    }

    /// Create an order with its tickets in one transaction
    pub async fn create_order(&self, user_id: Uuid, input: CreateOrderInput) -> AppResult<Order> {
        if input.tickets.is_empty() {
            return Err(AppError::Validation {
                field: "tickets".to_string(),
                message: "An order must contain at least one ticket".to_string(),
            });
        }

        // Reject duplicate seats within the request itself
        let mut requested: HashSet<(Uuid, i32, i32)> = HashSet::new();
        for ticket in &input.tickets {
            if !requested.insert((ticket.flight_id, ticket.row, ticket.seat)) {
                return Err(AppError::Conflict {
                    resource: "ticket".to_string(),
                    message: format!(
                        "Seat {}-{} is requested more than once",
                        ticket.row, ticket.seat
                    ),
                });
            }
        }

        // Look up each flight's cabin once
        let mut layouts: HashMap<Uuid, SeatingLayout> = HashMap::new();
        for ticket in &input.tickets {
            if layouts.contains_key(&ticket.flight_id) {
                continue;
            }

            let layout = sqlx::query_as::<_, (i32, i32)>(
                r#"
                SELECT a.seat_rows, a.seats_in_row
                FROM flights f
                JOIN airplanes a ON a.id = f.airplane_id
                WHERE f.id = $1
                "#,
            )
            .bind(ticket.flight_id)
            .fetch_optional(&self.db)
            .await?
            .and_then(|(rows, seats)| SeatingLayout::new(rows, seats))
            .ok_or_else(|| AppError::NotFound("Flight".to_string()))?;

            layouts.insert(ticket.flight_id, layout);
        }

        for ticket in &input.tickets {
            seat_range_error(
                layouts[&ticket.flight_id],
                Seat {
                    row: ticket.row,
                    seat: ticket.seat,
                },
            )?;
        }

        let mut tx = self.db.begin().await?;

        let (order_id, created_at) = sqlx::query_as::<_, (Uuid, DateTime<Utc>)>(
            "INSERT INTO orders (user_id) VALUES ($1) RETURNING id, created_at",
        )
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        let mut tickets = Vec::with_capacity(input.tickets.len());
        for ticket in &input.tickets {
            let id = sqlx::query_scalar::<_, Uuid>(
                r#"
                INSERT INTO tickets (seat_row, seat, flight_id, order_id)
                VALUES ($1, $2, $3, $4)
                RETURNING id
                "#,
            )
            .bind(ticket.row)
            .bind(ticket.seat)
            .bind(ticket.flight_id)
            .bind(order_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::Conflict {
                        resource: "ticket".to_string(),
                        message: format!(
                            "Seat {}-{} on this flight is already taken",
                            ticket.row, ticket.seat
                        ),
                    }
                } else {
                    e.into()
                }
            })?;

            tickets.push(Ticket {
                id,
                row: ticket.row,
                seat: ticket.seat,
                flight_id: ticket.flight_id,
            });
        }

        tx.commit().await?;

        Ok(Order {
            id: order_id,
            created_at,
            tickets,
        })
    }

    /// Delete one of the user's orders; tickets go with it
    pub async fn delete_order(&self, user_id: Uuid, order_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1 AND user_id = $2")
            .bind(order_id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Order".to_string()));
        }

        Ok(())
    }
}

/// Group an order's tickets per flight, keeping the flights in the order
/// they first appear. Every ticket lands in exactly one group.
pub(crate) fn group_tickets_by_flight(rows: Vec<OrderDetailRow>) -> Vec<OrderFlight> {
    let mut flights: Vec<OrderFlight> = Vec::new();
    let mut index_by_flight: HashMap<Uuid, usize> = HashMap::new();

    for row in rows {
        let seat = Seat {
            row: row.seat_row,
            seat: row.seat,
        };

        match index_by_flight.get(&row.flight_id) {
            Some(&i) => flights[i].tickets.push(seat),
            None => {
                let source = airport_label(&row.source_name, &row.source_city);
                let destination = airport_label(&row.destination_name, &row.destination_city);
                index_by_flight.insert(row.flight_id, flights.len());
                flights.push(OrderFlight {
                    id: row.flight_id,
                    route: route_label(&source, &destination),
                    airplane: row.airplane_name,
                    departure_time: row.departure_time,
                    arrival_time: row.arrival_time,
                    tickets: vec![seat],
                });
            }
        }
    }

    flights
}

fn seat_range_error(layout: SeatingLayout, seat: Seat) -> AppResult<()> {
    match validate_seat(layout, seat) {
        Ok(()) => Ok(()),
        Err(SeatBound::Row { max }) => Err(AppError::Validation {
            field: "row".to_string(),
            message: format!("row number must be in available range: (1, {})", max),
        }),
        Err(SeatBound::Seat { max }) => Err(AppError::Validation {
            field: "seat".to_string(),
            message: format!("seat number must be in available range: (1, {})", max),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_row(flight_id: Uuid, seat_row: i32, seat: i32) -> OrderDetailRow {
        let departure = Utc::now();
        OrderDetailRow {
            flight_id,
            source_name: "Heathrow".to_string(),
            source_city: "London".to_string(),
            destination_name: "Boryspil".to_string(),
            destination_city: "Kyiv".to_string(),
            departure_time: departure,
            arrival_time: departure + chrono::Duration::hours(3),
            airplane_name: "Dreamliner".to_string(),
            seat_row,
            seat,
        }
    }

    #[test]
    fn grouping_collects_tickets_per_flight() {
        let flight_a = Uuid::new_v4();
        let flight_b = Uuid::new_v4();
        let rows = vec![
            detail_row(flight_a, 1, 1),
            detail_row(flight_a, 1, 2),
            detail_row(flight_b, 5, 3),
        ];

        let grouped = group_tickets_by_flight(rows);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].id, flight_a);
        assert_eq!(
            grouped[0].tickets,
            vec![Seat { row: 1, seat: 1 }, Seat { row: 1, seat: 2 }]
        );
        assert_eq!(grouped[1].id, flight_b);
        assert_eq!(grouped[1].tickets, vec![Seat { row: 5, seat: 3 }]);
    }

    #[test]
    fn grouping_preserves_first_appearance_order() {
        let flight_a = Uuid::new_v4();
        let flight_b = Uuid::new_v4();
        let rows = vec![
            detail_row(flight_b, 2, 2),
            detail_row(flight_a, 1, 1),
            detail_row(flight_b, 2, 3),
        ];

        let grouped = group_tickets_by_flight(rows);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].id, flight_b);
        assert_eq!(grouped[1].id, flight_a);
        assert_eq!(grouped[0].tickets.len(), 2);
    }

    #[test]
    fn grouping_renders_route_and_keeps_every_ticket() {
        let flight = Uuid::new_v4();
        let rows = vec![detail_row(flight, 1, 1), detail_row(flight, 2, 1)];

        let grouped = group_tickets_by_flight(rows);

        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].route, "Heathrow (London) - Boryspil (Kyiv)");
        assert_eq!(grouped[0].tickets.len(), 2);
    }

    #[test]
    fn seat_range_errors_name_the_field() {
        let layout = SeatingLayout::new(20, 6).unwrap();

        let row_err = seat_range_error(layout, Seat { row: 21, seat: 1 }).unwrap_err();
        assert!(matches!(
            row_err,
            AppError::Validation { ref field, .. } if field == "row"
        ));

        let seat_err = seat_range_error(layout, Seat { row: 1, seat: 7 }).unwrap_err();
        assert!(matches!(
            seat_err,
            AppError::Validation { ref field, .. } if field == "seat"
        ));

        assert!(seat_range_error(layout, Seat { row: 20, seat: 6 }).is_ok());
    }
}
