/// Event resolution model and database operations
///
/// A resolution describes a competition: dates, venue and the fee
/// schedule for new versus returning skaters. Resolutions are looked up,
/// updated and deleted by `name_event`, which the schema deliberately
/// does NOT make unique — the league issues corrections as new documents
/// under the same event name and expects to see both in listings.
/// Natural-key operations therefore act on the oldest matching row.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE resolutions (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name_event TEXT NOT NULL,
///     date_start TEXT NOT NULL,
///     date_end TEXT NOT NULL,
///     place_event TEXT NOT NULL,
///     value_new_patinador BIGINT NOT NULL,
///     value_patinador BIGINT NOT NULL,
///     categories_date TEXT NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use super::DATE_FORMAT;

/// A competition resolution
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Resolution {
    /// Storage id
    pub id: Uuid,

    /// Event name, the natural key (not unique)
    pub name_event: String,

    /// Competition start, `dd/mm/yyyy`
    pub date_start: String,

    /// Competition end, `dd/mm/yyyy`
    pub date_end: String,

    /// Venue
    pub place_event: String,

    /// Fee for skaters registering as new
    pub value_new_patinador: i64,

    /// Fee for returning (affiliated) skaters
    pub value_patinador: i64,

    /// Date the category assignments take effect, `dd/mm/yyyy`
    pub categories_date: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload for a resolution
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateResolution {
    #[validate(length(min = 1, message = "El nombre del evento es obligatorio"))]
    pub name_event: String,

    #[validate(regex(
        path = *DATE_FORMAT,
        message = "No es un formato de fecha válido. Debe ser dd/mm/aaaa"
    ))]
    pub date_start: String,

    #[validate(regex(
        path = *DATE_FORMAT,
        message = "No es un formato de fecha válido. Debe ser dd/mm/aaaa"
    ))]
    pub date_end: String,

    #[validate(length(min = 1, message = "El lugar del evento es obligatorio"))]
    pub place_event: String,

    pub value_new_patinador: i64,

    pub value_patinador: i64,

    #[validate(regex(
        path = *DATE_FORMAT,
        message = "No es un formato de fecha válido. Debe ser dd/mm/aaaa"
    ))]
    pub categories_date: String,
}

/// Update payload for a resolution
///
/// Everything but the event name itself is mutable.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateResolution {
    #[validate(regex(
        path = *DATE_FORMAT,
        message = "No es un formato de fecha válido. Debe ser dd/mm/aaaa"
    ))]
    pub date_start: String,

    #[validate(regex(
        path = *DATE_FORMAT,
        message = "No es un formato de fecha válido. Debe ser dd/mm/aaaa"
    ))]
    pub date_end: String,

    #[validate(length(min = 1, message = "El lugar del evento es obligatorio"))]
    pub place_event: String,

    pub value_new_patinador: i64,

    pub value_patinador: i64,

    #[validate(regex(
        path = *DATE_FORMAT,
        message = "No es un formato de fecha válido. Debe ser dd/mm/aaaa"
    ))]
    pub categories_date: String,
}

impl Resolution {
    /// Creates a new resolution
    ///
    /// Duplicate event names are accepted; each call inserts a new row.
    pub async fn create(pool: &PgPool, data: CreateResolution) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Resolution>(
            r#"
            INSERT INTO resolutions (name_event, date_start, date_end, place_event,
                                     value_new_patinador, value_patinador, categories_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name_event, date_start, date_end, place_event,
                      value_new_patinador, value_patinador, categories_date,
                      created_at, updated_at
            "#,
        )
        .bind(data.name_event)
        .bind(data.date_start)
        .bind(data.date_end)
        .bind(data.place_event)
        .bind(data.value_new_patinador)
        .bind(data.value_patinador)
        .bind(data.categories_date)
        .fetch_one(pool)
        .await
    }

    /// Lists all resolutions, duplicates included
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Resolution>(
            r#"
            SELECT id, name_event, date_start, date_end, place_event,
                   value_new_patinador, value_patinador, categories_date,
                   created_at, updated_at
            FROM resolutions
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Finds the oldest resolution with the given event name
    pub async fn find_by_name(pool: &PgPool, name_event: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Resolution>(
            r#"
            SELECT id, name_event, date_start, date_end, place_event,
                   value_new_patinador, value_patinador, categories_date,
                   created_at, updated_at
            FROM resolutions
            WHERE name_event = $1
            ORDER BY created_at, id
            LIMIT 1
            "#,
        )
        .bind(name_event)
        .fetch_optional(pool)
        .await
    }

    /// Updates the oldest resolution with the given event name
    ///
    /// Returns the updated row, or `None` when no resolution carries that
    /// name.
    pub async fn update_by_name(
        pool: &PgPool,
        name_event: &str,
        data: UpdateResolution,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Resolution>(
            r#"
            UPDATE resolutions
            SET date_start = $2, date_end = $3, place_event = $4,
                value_new_patinador = $5, value_patinador = $6, categories_date = $7,
                updated_at = NOW()
            WHERE id = (
                SELECT id FROM resolutions WHERE name_event = $1
                ORDER BY created_at, id LIMIT 1
            )
            RETURNING id, name_event, date_start, date_end, place_event,
                      value_new_patinador, value_patinador, categories_date,
                      created_at, updated_at
            "#,
        )
        .bind(name_event)
        .bind(data.date_start)
        .bind(data.date_end)
        .bind(data.place_event)
        .bind(data.value_new_patinador)
        .bind(data.value_patinador)
        .bind(data.categories_date)
        .fetch_optional(pool)
        .await
    }

    /// Deletes the oldest resolution with the given event name
    ///
    /// Returns `true` when a row was removed.
    pub async fn delete_by_name(pool: &PgPool, name_event: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM resolutions
            WHERE id = (
                SELECT id FROM resolutions WHERE name_event = $1
                ORDER BY created_at, id LIMIT 1
            )
            "#,
        )
        .bind(name_event)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> serde_json::Value {
        serde_json::json!({
            "name_event": "Copa Santander",
            "date_start": "10/03/2025",
            "date_end": "12/03/2025",
            "place_event": "Bucaramanga",
            "value_new_patinador": 50000,
            "value_patinador": 30000,
            "categories_date": "01/01/2025"
        })
    }

    #[test]
    fn test_create_payload_validates() {
        let parsed: CreateResolution = serde_json::from_value(valid_payload()).unwrap();
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_create_payload_bad_date_fails_validation() {
        let mut payload = valid_payload();
        payload["categories_date"] = serde_json::json!("enero 2025");
        let parsed: CreateResolution = serde_json::from_value(payload).unwrap();
        let errors = parsed.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("categories_date"));
    }

    #[test]
    fn test_create_payload_missing_fee_is_rejected() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("value_patinador");
        assert!(serde_json::from_value::<CreateResolution>(payload).is_err());
    }

    #[test]
    fn test_update_payload_does_not_read_name_event() {
        let mut payload = valid_payload();
        payload["name_event"] = serde_json::json!("Otro evento");
        let parsed: UpdateResolution = serde_json::from_value(payload).unwrap();
        assert!(parsed.validate().is_ok());
    }
}
