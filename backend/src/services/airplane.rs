//! Airplane fleet service, including cabin layout and image uploads

use std::path::Path;

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::airplane_type::AirplaneType;

/// Airplane service for managing the fleet
#[derive(Clone)]
pub struct AirplaneService {
    db: PgPool,
}

/// Airplane information
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Airplane {
    pub id: Uuid,
    pub name: String,
    #[sqlx(rename = "seat_rows")]
    pub rows: i32,
    pub seats_in_row: i32,
    pub airplane_type_id: Uuid,
}

/// Airplane list row with type and manufacturer names rendered
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct AirplaneListItem {
    pub id: Uuid,
    pub name: String,
    #[sqlx(rename = "seat_rows")]
    pub rows: i32,
    pub seats_in_row: i32,
    pub airplane_type: String,
    pub airplane_manufacturer: Option<String>,
}

/// Airplane detail with its type nested
#[derive(Debug, Serialize, ToSchema)]
pub struct AirplaneDetail {
    pub id: Uuid,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub airplane_type: AirplaneType,
    pub airplane_manufacturer: Option<String>,
    pub image: Option<String>,
}

/// Airplane image reference returned after an upload
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct AirplaneImage {
    pub id: Uuid,
    pub image: Option<String>,
}

/// Input for creating an airplane
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAirplaneInput {
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub airplane_type_id: Uuid,
}

#[derive(Debug, sqlx::FromRow)]
struct AirplaneDetailRow {
    id: Uuid,
    name: String,
    seat_rows: i32,
    seats_in_row: i32,
    type_id: Uuid,
    type_name: String,
    manufacturer_id: Option<Uuid>,
    manufacturer_name: Option<String>,
    image_path: Option<String>,
}

impl AirplaneService {
    /// Create a new AirplaneService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all airplanes with type and manufacturer names
    pub async fn list_airplanes(&self) -> AppResult<Vec<AirplaneListItem>> {
        let airplanes = sqlx::query_as::<_, AirplaneListItem>(
            r#"
            SELECT a.id, a.name, a.seat_rows, a.seats_in_row,
                   t.name AS airplane_type,
                   m.name AS airplane_manufacturer
            FROM airplanes a
            JOIN airplane_types t ON t.id = a.airplane_type_id
            LEFT JOIN airplane_manufacturers m ON m.id = t.manufacturer_id
            ORDER BY a.name ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(airplanes)
    }

    /// Get an airplane by ID with its type nested
    pub async fn get_airplane(&self, airplane_id: Uuid) -> AppResult<AirplaneDetail> {
        let row = sqlx::query_as::<_, AirplaneDetailRow>(
            r#"
            SELECT a.id, a.name, a.seat_rows, a.seats_in_row,
                   t.id AS type_id, t.name AS type_name,
                   t.manufacturer_id,
                   m.name AS manufacturer_name,
                   a.image_path
            FROM airplanes a
            JOIN airplane_types t ON t.id = a.airplane_type_id
            LEFT JOIN airplane_manufacturers m ON m.id = t.manufacturer_id
            WHERE a.id = $1
            "#,
        )
        .bind(airplane_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Airplane".to_string()))?;

        Ok(AirplaneDetail {
            id: row.id,
            name: row.name,
            rows: row.seat_rows,
            seats_in_row: row.seats_in_row,
            airplane_type: AirplaneType {
                id: row.type_id,
                name: row.type_name,
                manufacturer_id: row.manufacturer_id,
            },
            airplane_manufacturer: row.manufacturer_name,
            image: row.image_path,
        })
    }

    /// Create a new airplane
    pub async fn create_airplane(&self, input: CreateAirplaneInput) -> AppResult<Airplane> {
        if input.name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Airplane name cannot be empty".to_string(),
            });
        }

        if input.rows <= 0 {
            return Err(AppError::Validation {
                field: "rows".to_string(),
                message: "Row count must be positive".to_string(),
            });
        }

        if input.seats_in_row <= 0 {
            return Err(AppError::Validation {
                field: "seats_in_row".to_string(),
                message: "Seats per row must be positive".to_string(),
            });
        }

        let type_exists =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM airplane_types WHERE id = $1")
                .bind(input.airplane_type_id)
                .fetch_one(&self.db)
                .await?;

        if type_exists == 0 {
            return Err(AppError::Validation {
                field: "airplane_type_id".to_string(),
                message: "Unknown airplane type".to_string(),
            });
        }

        let airplane = sqlx::query_as::<_, Airplane>(
            r#"
            INSERT INTO airplanes (name, seat_rows, seats_in_row, airplane_type_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, seat_rows, seats_in_row, airplane_type_id
            "#,
        )
        .bind(&input.name)
        .bind(input.rows)
        .bind(input.seats_in_row)
        .bind(input.airplane_type_id)
        .fetch_one(&self.db)
        .await?;

        Ok(airplane)
    }

    /// Store an uploaded image for an airplane.
    /// The file lands under `{media_root}/uploads/airplanes/` with a
    /// slugified, collision-free name; the relative path is persisted.
    pub async fn store_image(
        &self,
        airplane_id: Uuid,
        original_filename: &str,
        data: &[u8],
        media_root: &str,
    ) -> AppResult<AirplaneImage> {
        let name = sqlx::query_scalar::<_, String>("SELECT name FROM airplanes WHERE id = $1")
            .bind(airplane_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Airplane".to_string()))?;

        let filename = image_filename(&name, original_filename);
        let relative_path = format!("uploads/airplanes/{}", filename);

        let dir = Path::new(media_root).join("uploads/airplanes");
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::Internal(format!("Could not create media directory: {}", e)))?;
        tokio::fs::write(dir.join(&filename), data)
            .await
            .map_err(|e| AppError::Internal(format!("Could not store uploaded image: {}", e)))?;

        let image = sqlx::query_as::<_, AirplaneImage>(
            r#"
            UPDATE airplanes
            SET image_path = $1
            WHERE id = $2
            RETURNING id, image_path AS image
            "#,
        )
        .bind(&relative_path)
        .bind(airplane_id)
        .fetch_one(&self.db)
        .await?;

        Ok(image)
    }
}

/// Build a stored filename: slugified airplane name, a fresh UUID and the
/// original extension, e.g. "boeing-747-5e9c...-f1.png"
fn image_filename(airplane_name: &str, original_filename: &str) -> String {
    format!(
        "{}-{}{}",
        slugify(airplane_name),
        Uuid::new_v4(),
        file_extension(original_filename)
    )
}

/// Lowercase, keep alphanumerics, collapse everything else into single dashes
fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;

    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// The lowercased extension of a filename, dot included, or empty
fn file_extension(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_ascii_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_dashes() {
        assert_eq!(slugify("Boeing 747"), "boeing-747");
        assert_eq!(slugify("  Airbus  A320  "), "airbus-a320");
        assert_eq!(slugify("An-225 Mriya"), "an-225-mriya");
    }

    #[test]
    fn slugify_drops_leading_and_trailing_separators() {
        assert_eq!(slugify("---plane---"), "plane");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn file_extension_is_lowercased_with_dot() {
        assert_eq!(file_extension("photo.PNG"), ".png");
        assert_eq!(file_extension("a.b.jpeg"), ".jpeg");
        assert_eq!(file_extension("no_extension"), "");
    }

    #[test]
    fn image_filenames_do_not_collide() {
        let a = image_filename("Boeing 747", "photo.png");
        let b = image_filename("Boeing 747", "photo.png");
        assert_ne!(a, b);
        assert!(a.starts_with("boeing-747-"));
        assert!(a.ends_with(".png"));
    }
}
