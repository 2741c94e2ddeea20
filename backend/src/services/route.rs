//! Route management service

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::airport_label;

/// Route service for managing source-destination airport pairs
#[derive(Clone)]
pub struct RouteService {
    db: PgPool,
}

/// A route between two airports
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Route {
    pub id: Uuid,
    pub source_id: Uuid,
    pub destination_id: Uuid,
    pub distance: i32,
}

/// Route list row with rendered airport labels
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RouteListItem {
    pub id: Uuid,
    pub source: String,
    pub destination: String,
    pub distance: i32,
}

/// Input for creating a route
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRouteInput {
    pub source_id: Uuid,
    pub destination_id: Uuid,
    pub distance: i32,
}

#[derive(Debug, sqlx::FromRow)]
struct RouteRow {
    id: Uuid,
    source_name: String,
    source_city: String,
    destination_name: String,
    destination_city: String,
    distance: i32,
}

impl RouteService {
    /// Create a new RouteService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all routes ordered by their endpoints
    pub async fn list_routes(&self) -> AppResult<Vec<RouteListItem>> {
        let rows = sqlx::query_as::<_, RouteRow>(
            r#"
            SELECT r.id,
                   sa.name AS source_name,
                   sa.closest_big_city AS source_city,
                   da.name AS destination_name,
                   da.closest_big_city AS destination_city,
                   r.distance
            FROM routes r
            JOIN airports sa ON sa.id = r.source_id
            JOIN airports da ON da.id = r.destination_id
            ORDER BY sa.name ASC, da.name ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| RouteListItem {
                id: row.id,
                source: airport_label(&row.source_name, &row.source_city),
                destination: airport_label(&row.destination_name, &row.destination_city),
                distance: row.distance,
            })
            .collect())
    }

    /// Create a new route
    pub async fn create_route(&self, input: CreateRouteInput) -> AppResult<Route> {
        if input.distance <= 0 {
            return Err(AppError::Validation {
                field: "distance".to_string(),
                message: "Distance must be a positive number of kilometers".to_string(),
            });
        }

        for (field, id) in [
            ("source_id", input.source_id),
            ("destination_id", input.destination_id),
        ] {
            let exists =
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM airports WHERE id = $1")
                    .bind(id)
                    .fetch_one(&self.db)
                    .await?;

            if exists == 0 {
                return Err(AppError::Validation {
                    field: field.to_string(),
                    message: "Unknown airport".to_string(),
                });
            }
        }

        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (source_id, destination_id, distance)
            VALUES ($1, $2, $3)
            RETURNING id, source_id, destination_id, distance
            "#,
        )
        .bind(input.source_id)
        .bind(input.destination_id)
        .bind(input.distance)
        .fetch_one(&self.db)
        .await?;

        Ok(route)
    }
}
