/// Role-guard middleware
///
/// Stateless per request: pull the bearer token from the Authorization
/// header (or the `token` query-parameter fallback), verify signature and
/// expiry against the shared secret, then compare the embedded role claim
/// with the role the route group requires. On success the decoded context
/// is attached to the request for downstream handlers.
///
/// The guard never touches the database — possession of an unexpired
/// token with the right role claim is the whole check, so rejection
/// happens before any storage access.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use liga_shared::{
    auth::{
        jwt,
        middleware::{extract_token, AuthContext},
    },
    models::staff::StaffRole,
};

use crate::{app::AppState, error::ApiError};

/// Requires a valid token whose role claim is `secretario`
///
/// # Errors
///
/// - 401 when no token is present
/// - 401 when the token is invalid or expired
/// - 403 when the token is valid but carries a different role
pub async fn require_secretario(
    state: State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    require_role(state, req, next, StaffRole::Secretario).await
}

async fn require_role(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
    required: StaffRole,
) -> Result<Response, ApiError> {
    let token = extract_token(req.headers(), req.uri().query()).ok_or_else(|| {
        ApiError::Unauthorized("Acceso denegado. No se proporcionó token.".to_string())
    })?;

    let claims = jwt::validate_token(&token, state.jwt_secret())
        .map_err(|_| ApiError::Unauthorized("Token inválido.".to_string()))?;

    if claims.role != required {
        return Err(ApiError::Forbidden(
            "Acceso denegado. Rol no autorizado.".to_string(),
        ));
    }

    req.extensions_mut().insert(AuthContext::from_claims(&claims));

    Ok(next.run(req).await)
}
