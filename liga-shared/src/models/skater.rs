/// Skater ("patinador") model and database operations
///
/// Skaters are identified by `number_ID`, a league-assigned document
/// number. The column carries a UNIQUE constraint so the registration
/// upsert below is a single atomic statement — two concurrent
/// registrations of the same new skater converge on one row instead of
/// inserting duplicates.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE skaters (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     number_id BIGINT NOT NULL UNIQUE,
///     numero_competencia BIGINT,
///     first_name TEXT NOT NULL,
///     second_name TEXT,
///     first_surname TEXT NOT NULL,
///     second_surname TEXT,
///     birth_date TEXT NOT NULL,
///     branch skater_branch NOT NULL,
///     estado skater_estado NOT NULL,
///     categoria TEXT,
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

/// Competition branch of a skater
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "skater_branch")]
pub enum Branch {
    Femenino,
    Masculino,
}

/// Affiliation status of a skater
///
/// `Nuevo` on first registration; flips to `Afiliado` when the same
/// `number_ID` is registered again. Never set directly by clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "skater_estado")]
pub enum Estado {
    Afiliado,
    Nuevo,
}

/// A registered skater
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skater {
    /// Storage id
    pub id: Uuid,

    /// League-assigned document number (business key, unique)
    #[serde(rename = "number_ID")]
    pub number_id: i64,

    /// Competition bib number, when assigned
    pub numero_competencia: Option<i64>,

    pub first_name: String,
    pub second_name: Option<String>,
    pub first_surname: String,
    pub second_surname: Option<String>,

    /// Birth date as `dd/mm/yyyy` text, as the league's forms capture it
    pub birth_date: String,

    pub branch: Branch,
    pub estado: Estado,

    /// Age/skill category label, when assigned
    pub categoria: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registration payload for one skater
///
/// An `estado` supplied by the client is accepted but ignored: the
/// registration decides it (`Nuevo` on insert, `Afiliado` on re-register).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSkater {
    #[serde(rename = "number_ID")]
    pub number_id: i64,

    pub numero_competencia: Option<i64>,

    #[validate(length(min = 1, message = "El nombre es obligatorio"))]
    pub first_name: String,

    pub second_name: Option<String>,

    #[validate(length(min = 1, message = "El primer apellido es obligatorio"))]
    pub first_surname: String,

    pub second_surname: Option<String>,

    #[validate(regex(
        path = *DATE_FORMAT,
        message = "No es un formato de fecha válido. Debe ser dd/mm/aaaa"
    ))]
    pub birth_date: String,

    pub branch: Branch,

    pub estado: Option<Estado>,

    pub categoria: Option<String>,
}

/// Update payload for a skater
///
/// The mutable fields are a fixed allow-list: `estado`, `number_ID`,
/// `numero_competencia` and `categoria` cannot be changed through an
/// update, whatever the request body carries.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSkater {
    #[validate(length(min = 1, message = "El nombre es obligatorio"))]
    pub first_name: String,

    pub second_name: Option<String>,

    #[validate(length(min = 1, message = "El primer apellido es obligatorio"))]
    pub first_surname: String,

    pub second_surname: Option<String>,

    #[validate(regex(
        path = *DATE_FORMAT,
        message = "No es un formato de fecha válido. Debe ser dd/mm/aaaa"
    ))]
    pub birth_date: String,

    pub branch: Branch,
}

impl Skater {
    /// Registers one skater: insert as `Nuevo`, or mark the existing row
    /// with the same `number_ID` as `Afiliado`.
    ///
    /// The conflict arm touches only `estado` (and `updated_at`); the
    /// stored name, dates and branch stay as they were even when the
    /// incoming payload differs. One statement, so concurrent submissions
    /// of the same new `number_ID` cannot create duplicate rows.
    pub async fn register(pool: &PgPool, data: CreateSkater) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Skater>(
            r#"
            INSERT INTO skaters (number_id, numero_competencia, first_name, second_name,
                                 first_surname, second_surname, birth_date, branch, estado, categoria)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (number_id) DO UPDATE SET estado = $11, updated_at = NOW()
            RETURNING id, number_id, numero_competencia, first_name, second_name,
                      first_surname, second_surname, birth_date, branch, estado, categoria,
                      created_at, updated_at
            "#,
        )
        .bind(data.number_id)
        .bind(data.numero_competencia)
        .bind(data.first_name)
        .bind(data.second_name)
        .bind(data.first_surname)
        .bind(data.second_surname)
        .bind(data.birth_date)
        .bind(data.branch)
        .bind(Estado::Nuevo)
        .bind(data.categoria)
        .bind(Estado::Afiliado)
        .fetch_one(pool)
        .await
    }

    /// Lists all skaters in storage order
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Skater>(
            r#"
            SELECT id, number_id, numero_competencia, first_name, second_name,
                   first_surname, second_surname, birth_date, branch, estado, categoria,
                   created_at, updated_at
            FROM skaters
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Finds a skater by document number
    pub async fn find_by_number(pool: &PgPool, number_id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Skater>(
            r#"
            SELECT id, number_id, numero_competencia, first_name, second_name,
                   first_surname, second_surname, birth_date, branch, estado, categoria,
                   created_at, updated_at
            FROM skaters
            WHERE number_id = $1
            "#,
        )
        .bind(number_id)
        .fetch_optional(pool)
        .await
    }

    /// Updates the mutable fields of a skater found by document number
    ///
    /// Returns the updated row, or `None` when no skater carries that
    /// `number_ID`.
    pub async fn update_by_number(
        pool: &PgPool,
        number_id: i64,
        data: UpdateSkater,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Skater>(
            r#"
            UPDATE skaters
            SET first_name = $2, second_name = $3, first_surname = $4, second_surname = $5,
                birth_date = $6, branch = $7, updated_at = NOW()
            WHERE number_id = $1
            RETURNING id, number_id, numero_competencia, first_name, second_name,
                      first_surname, second_surname, birth_date, branch, estado, categoria,
                      created_at, updated_at
            "#,
        )
        .bind(number_id)
        .bind(data.first_name)
        .bind(data.second_name)
        .bind(data.first_surname)
        .bind(data.second_surname)
        .bind(data.birth_date)
        .bind(data.branch)
        .fetch_optional(pool)
        .await
    }

    /// Deletes a skater by document number
    ///
    /// Returns `true` when a row was removed.
    pub async fn delete_by_number(pool: &PgPool, number_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skaters WHERE number_id = $1")
            .bind(number_id)
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
            "number_ID": 1,
            "first_name": "Ana",
            "first_surname": "Diaz",
            "birth_date": "01/01/2000",
            "branch": "Femenino",
            "estado": "Nuevo"
        })
    }

    #[test]
    fn test_create_payload_deserializes_wire_names() {
        let payload: CreateSkater = serde_json::from_value(valid_payload()).unwrap();
        assert_eq!(payload.number_id, 1);
        assert_eq!(payload.branch, Branch::Femenino);
        assert_eq!(payload.estado, Some(Estado::Nuevo));
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_create_payload_missing_required_field_is_rejected() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("first_surname");
        assert!(serde_json::from_value::<CreateSkater>(payload).is_err());
    }

    #[test]
    fn test_create_payload_unknown_branch_is_rejected() {
        let mut payload = valid_payload();
        payload["branch"] = serde_json::json!("Mixto");
        assert!(serde_json::from_value::<CreateSkater>(payload).is_err());
    }

    #[test]
    fn test_create_payload_bad_birth_date_fails_validation() {
        let mut payload = valid_payload();
        payload["birth_date"] = serde_json::json!("2000-01-01");
        let parsed: CreateSkater = serde_json::from_value(payload).unwrap();
        let errors = parsed.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("birth_date"));
    }

    #[test]
    fn test_update_payload_has_no_estado_or_number_field() {
        // The allow-list is enforced by the shape of UpdateSkater itself:
        // estado and number_ID in a request body are simply not read.
        let body = serde_json::json!({
            "first_name": "Ana",
            "first_surname": "Diaz",
            "birth_date": "01/01/2000",
            "branch": "Femenino",
            "estado": "Afiliado",
            "number_ID": 99
        });
        let parsed: UpdateSkater = serde_json::from_value(body).unwrap();
        assert!(parsed.validate().is_ok());
        assert_eq!(parsed.first_name, "Ana");
    }

    #[test]
    fn test_estado_serializes_as_spanish_labels() {
        assert_eq!(serde_json::to_value(Estado::Nuevo).unwrap(), "Nuevo");
        assert_eq!(serde_json::to_value(Estado::Afiliado).unwrap(), "Afiliado");
        assert_eq!(serde_json::to_value(Branch::Masculino).unwrap(), "Masculino");
    }
}
