//! Airport catalog service

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{is_unique_violation, AppError, AppResult};

/// Airport service for managing the airport catalog
#[derive(Clone)]
pub struct AirportService {
    db: PgPool,
}

/// Airport information
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Airport {
    pub id: Uuid,
    pub name: String,
    pub closest_big_city: String,
}

/// Input for creating an airport
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAirportInput {
    pub name: String,
    pub closest_big_city: String,
}

impl AirportService {
    /// Create a new AirportService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all airports ordered by name
    pub async fn list_airports(&self) -> AppResult<Vec<Airport>> {
        let airports = sqlx::query_as::<_, Airport>(
            "SELECT id, name, closest_big_city FROM airports ORDER BY name ASC",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(airports)
    }

    /// Create a new airport
    pub async fn create_airport(&self, input: CreateAirportInput) -> AppResult<Airport> {
        if input.name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Airport name cannot be empty".to_string(),
            });
        }

        let airport = sqlx::query_as::<_, Airport>(
            r#"
            INSERT INTO airports (name, closest_big_city)
            VALUES ($1, $2)
            RETURNING id, name, closest_big_city
            "#,
        )
        .bind(&input.name)
        .bind(&input.closest_big_city)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::DuplicateEntry("airport name".to_string())
            } else {
                e.into()
            }
        })?;

        Ok(airport)
    }
}
