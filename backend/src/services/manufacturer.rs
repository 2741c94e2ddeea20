//! Airplane manufacturer service

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{is_unique_violation, AppError, AppResult};

/// Manufacturer service
#[derive(Clone)]
pub struct ManufacturerService {
    db: PgPool,
}

/// Airplane manufacturer information
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct AirplaneManufacturer {
    pub id: Uuid,
    pub name: String,
}

/// Input for creating a manufacturer
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateManufacturerInput {
    pub name: String,
}

impl ManufacturerService {
    /// Create a new ManufacturerService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all manufacturers ordered by name
    pub async fn list_manufacturers(&self) -> AppResult<Vec<AirplaneManufacturer>> {
        let manufacturers = sqlx::query_as::<_, AirplaneManufacturer>(
            "SELECT id, name FROM airplane_manufacturers ORDER BY name ASC",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(manufacturers)
    }

    /// Create a new manufacturer
    pub async fn create_manufacturer(
        &self,
        input: CreateManufacturerInput,
    ) -> AppResult<AirplaneManufacturer> {
        if input.name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Manufacturer name cannot be empty".to_string(),
            });
        }

        let manufacturer = sqlx::query_as::<_, AirplaneManufacturer>(
            r#"
            INSERT INTO airplane_manufacturers (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(&input.name)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::DuplicateEntry("manufacturer name".to_string())
            } else {
                e.into()
            }
        })?;

        Ok(manufacturer)
    }
}
