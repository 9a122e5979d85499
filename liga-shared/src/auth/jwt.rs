/// JWT issuance and validation
///
/// Tokens are signed with HS256 and carry the account's storage id as the
/// subject plus a role claim. The expiry is configured at issuance (the
/// server reads it from the environment); validation checks signature,
/// expiry, not-before and issuer.
///
/// # Example
///
/// ```
/// use liga_shared::auth::jwt::{create_token, validate_token, Claims};
/// use liga_shared::models::staff::StaffRole;
/// use chrono::Duration;
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let claims = Claims::new(Uuid::new_v4(), StaffRole::Secretario, Duration::hours(24));
/// let token = create_token(&claims, "a-secret-of-at-least-32-bytes!!!")?;
///
/// let decoded = validate_token(&token, "a-secret-of-at-least-32-bytes!!!")?;
/// assert_eq!(decoded.sub, claims.sub);
/// assert_eq!(decoded.role, StaffRole::Secretario);
/// # Ok(())
/// # }
/// ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::staff::StaffRole;

/// Issuer claim stamped into every token
const ISSUER: &str = "liga-patinaje";

/// Error type for JWT operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("Failed to create token: {0}")]
    Create(String),

    #[error("Token has expired")]
    Expired,

    #[error("Failed to validate token: {0}")]
    Validation(String),
}

/// Claims carried by a staff token
///
/// `sub` is the staff account's storage id; `role` is fixed at issuance
/// and is what the role guard checks. The guard never goes back to the
/// database, so these claims are the whole authorization context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — staff account id
    pub sub: Uuid,

    /// Issuer
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration (Unix timestamp)
    pub exp: i64,

    /// Not before (Unix timestamp)
    pub nbf: i64,

    /// Administrative role claim
    pub role: StaffRole,
}

impl Claims {
    /// Creates claims for an account, expiring after `expires_in`
    pub fn new(staff_id: Uuid, role: StaffRole, expires_in: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: staff_id,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
            nbf: now.timestamp(),
            role,
        }
    }

    /// Whether the token is already past its expiry
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Signs claims into a token string
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key).map_err(|e| JwtError::Create(e.to_string()))
}

/// Validates a token and returns its claims
///
/// Checks signature, expiry, not-before and the issuer.
///
/// # Errors
///
/// `JwtError::Expired` for an out-of-date token; `JwtError::Validation`
/// for every other failure (bad signature, malformed token, wrong issuer).
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;
    validation.validate_nbf = true;

    let data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
        _ => JwtError::Validation(e.to_string()),
    })?;

    Ok(data.claims)
}
