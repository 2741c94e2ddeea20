//! Crew and crew position service

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{is_unique_violation, AppError, AppResult};

/// Crew service for managing positions and crew members
#[derive(Clone)]
pub struct CrewService {
    db: PgPool,
}

/// Crew position information
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct CrewPosition {
    pub id: Uuid,
    pub name: String,
}

/// A crew member
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Crew {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub position_id: Uuid,
}

/// Crew list row with the position name rendered
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct CrewListItem {
    pub id: Uuid,
    pub position: String,
    pub first_name: String,
    pub last_name: String,
}

/// Input for creating a crew position
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCrewPositionInput {
    pub name: String,
}

/// Input for creating a crew member
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCrewInput {
    pub first_name: String,
    pub last_name: String,
    pub position_id: Uuid,
}

impl CrewService {
    /// Create a new CrewService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all crew positions ordered by name
    pub async fn list_positions(&self) -> AppResult<Vec<CrewPosition>> {
        let positions = sqlx::query_as::<_, CrewPosition>(
            "SELECT id, name FROM crew_positions ORDER BY name ASC",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(positions)
    }

    /// Create a new crew position
    pub async fn create_position(&self, input: CreateCrewPositionInput) -> AppResult<CrewPosition> {
        if input.name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Position name cannot be empty".to_string(),
            });
        }

        let position = sqlx::query_as::<_, CrewPosition>(
            r#"
            INSERT INTO crew_positions (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(&input.name)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::DuplicateEntry("position name".to_string())
            } else {
                e.into()
            }
        })?;

        Ok(position)
    }

    /// Get all crew members ordered by position and name
    pub async fn list_crew(&self) -> AppResult<Vec<CrewListItem>> {
        let crew = sqlx::query_as::<_, CrewListItem>(
            r#"
            SELECT c.id, p.name AS position, c.first_name, c.last_name
            FROM crews c
            JOIN crew_positions p ON p.id = c.position_id
            ORDER BY p.name ASC, c.first_name ASC, c.last_name ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(crew)
    }

    /// Create a new crew member
    pub async fn create_crew(&self, input: CreateCrewInput) -> AppResult<Crew> {
        for (field, value) in [
            ("first_name", &input.first_name),
            ("last_name", &input.last_name),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation {
                    field: field.to_string(),
                    message: "Name cannot be empty".to_string(),
                });
            }
        }

        let position_exists =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM crew_positions WHERE id = $1")
                .bind(input.position_id)
                .fetch_one(&self.db)
                .await?;

        if position_exists == 0 {
            return Err(AppError::Validation {
                field: "position_id".to_string(),
                message: "Unknown crew position".to_string(),
            });
        }

        let crew = sqlx::query_as::<_, Crew>(
            r#"
            INSERT INTO crews (first_name, last_name, position_id)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, position_id
            "#,
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(input.position_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::DuplicateEntry("crew member".to_string())
            } else {
                e.into()
            }
        })?;

        Ok(crew)
    }
}
