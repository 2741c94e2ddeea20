//! Airplane type service

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{is_unique_violation, AppError, AppResult};

/// Airplane type service
#[derive(Clone)]
pub struct AirplaneTypeService {
    db: PgPool,
}

/// Airplane type information
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct AirplaneType {
    pub id: Uuid,
    pub name: String,
    pub manufacturer_id: Option<Uuid>,
}

/// Airplane type list row with the manufacturer name rendered
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct AirplaneTypeListItem {
    pub id: Uuid,
    pub name: String,
    pub manufacturer: Option<String>,
}

/// Input for creating an airplane type
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAirplaneTypeInput {
    pub name: String,
    pub manufacturer_id: Option<Uuid>,
}

impl AirplaneTypeService {
    /// Create a new AirplaneTypeService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all airplane types with their manufacturer names
    pub async fn list_airplane_types(&self) -> AppResult<Vec<AirplaneTypeListItem>> {
        let types = sqlx::query_as::<_, AirplaneTypeListItem>(
            r#"
            SELECT t.id, t.name, m.name AS manufacturer
            FROM airplane_types t
            LEFT JOIN airplane_manufacturers m ON m.id = t.manufacturer_id
            ORDER BY t.name ASC, m.name ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(types)
    }

    /// Create a new airplane type
    pub async fn create_airplane_type(
        &self,
        input: CreateAirplaneTypeInput,
    ) -> AppResult<AirplaneType> {
        if input.name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Airplane type name cannot be empty".to_string(),
            });
        }

        if let Some(manufacturer_id) = input.manufacturer_id {
            let exists = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM airplane_manufacturers WHERE id = $1",
            )
            .bind(manufacturer_id)
            .fetch_one(&self.db)
            .await?;

            if exists == 0 {
                return Err(AppError::Validation {
                    field: "manufacturer_id".to_string(),
                    message: "Unknown manufacturer".to_string(),
                });
            }
        }

        let airplane_type = sqlx::query_as::<_, AirplaneType>(
            r#"
            INSERT INTO airplane_types (name, manufacturer_id)
            VALUES ($1, $2)
            RETURNING id, name, manufacturer_id
            "#,
        )
        .bind(&input.name)
        .bind(input.manufacturer_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::DuplicateEntry("airplane type".to_string())
            } else {
                e.into()
            }
        })?;

        Ok(airplane_type)
    }
}
