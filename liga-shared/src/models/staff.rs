/// Staff account model and database operations
///
/// One table backs both administrative roles: secretarios, who manage
/// resolutions, and entrenadores. Email is the primary identifier and is
/// unique; the display name is optional. Passwords are stored as Argon2id
/// hashes and the hash never leaves the process — `password_hash` is
/// skipped on serialization.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE staff_accounts (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     email TEXT NOT NULL UNIQUE,
///     name TEXT,
///     password_hash TEXT NOT NULL,
///     role staff_role NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Administrative role carried by an account and embedded in its tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "staff_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Secretario,
    Entrenador,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Secretario => "secretario",
            StaffRole::Entrenador => "entrenador",
        }
    }
}

/// A credentialed administrative account
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct StaffAccount {
    /// Storage id; tokens embed this as their subject
    pub id: Uuid,

    /// Login identifier, unique
    pub email: String,

    /// Optional display name; login also accepts it
    pub name: Option<String>,

    /// Argon2id PHC hash, never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub role: StaffRole,

    pub created_at: DateTime<Utc>,
}

/// Input for creating a staff account
#[derive(Debug, Clone)]
pub struct CreateStaffAccount {
    pub email: String,
    pub name: Option<String>,
    /// Already-hashed password (never the plaintext)
    pub password_hash: String,
    pub role: StaffRole,
}

impl StaffAccount {
    /// Creates a new staff account
    ///
    /// # Errors
    ///
    /// A duplicate email surfaces as a unique-constraint database error;
    /// the API layer maps it to a conflict response.
    pub async fn create(pool: &PgPool, data: CreateStaffAccount) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, StaffAccount>(
            r#"
            INSERT INTO staff_accounts (email, name, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, name, password_hash, role, created_at
            "#,
        )
        .bind(data.email)
        .bind(data.name)
        .bind(data.password_hash)
        .bind(data.role)
        .fetch_one(pool)
        .await
    }

    /// Finds an account by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, StaffAccount>(
            r#"
            SELECT id, email, name, password_hash, role, created_at
            FROM staff_accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// Finds an account by display name
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, StaffAccount>(
            r#"
            SELECT id, email, name, password_hash, role, created_at
            FROM staff_accounts
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await
    }
}
