/// Support types for the role-guard middleware
///
/// The guard itself lives in the API crate (it needs the application
/// state for the signing secret); this module provides the pieces that
/// are independent of it: pulling the bearer token out of a request and
/// the context attached to requests that pass the guard.
///
/// # Example
///
/// ```
/// use axum::Extension;
/// use liga_shared::auth::middleware::AuthContext;
///
/// async fn handler(Extension(auth): Extension<AuthContext>) -> String {
///     format!("cuenta {} con rol {}", auth.staff_id, auth.role.as_str())
/// }
/// ```

use axum::http::{header, HeaderMap};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::jwt::Claims;
use crate::models::staff::StaffRole;

/// Authentication context attached to guarded requests
///
/// Built from the token's claims alone; handlers can trust it without a
/// database lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthContext {
    /// Authenticated staff account id
    pub staff_id: Uuid,

    /// Role the token was issued with
    pub role: StaffRole,
}

impl AuthContext {
    /// Builds the context from validated claims
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            staff_id: claims.sub,
            role: claims.role,
        }
    }
}

/// Extracts a bearer token from a request
///
/// Looks at the `Authorization: Bearer <token>` header first and falls
/// back to a `token` query parameter, matching what the league's existing
/// clients send.
pub fn extract_token(headers: &HeaderMap, query: Option<&str>) -> Option<String> {
    if let Some(value) = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        if let Some(token) = value.strip_prefix("Bearer ") {
            return Some(token.to_string());
        }
    }

    query.and_then(token_from_query)
}

// Tokens are URL-safe base64, so no percent-decoding is needed here.
fn token_from_query(query: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == "token" && !value.is_empty()).then(|| value.to_string())
    })
}
