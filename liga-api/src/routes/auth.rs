/// Staff authentication endpoints
///
/// Two route groups share these handlers over one account table; the
/// group only decides which role a registration gets:
///
/// - `POST /auth/register`, `POST /auth/login` — secretarios
/// - `POST /entrenador/register`, `POST /entrenador/login` — entrenadores
///
/// Registration hashes the password and immediately issues a token, the
/// only credential this system produces. Login accepts email or display
/// name; unknown account and wrong password are deliberately merged into
/// one 401 so the response does not reveal which part failed.

use axum::{extract::State, http::StatusCode, Json};
use liga_shared::{
    auth::{jwt, password},
    models::staff::{CreateStaffAccount, StaffAccount, StaffRole},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};

/// Registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Por favor ingrese un correo válido"))]
    pub email: String,

    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    pub password: String,

    #[validate(length(max = 100, message = "El nombre debe tener máximo 100 caracteres"))]
    pub name: Option<String>,
}

/// Login request
///
/// Accepts `email` or `name` as the identifier.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    pub email: Option<String>,

    pub name: Option<String>,

    #[validate(length(min = 1, message = "La contraseña es obligatoria"))]
    pub password: String,
}

/// Token response for register and login
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Registers a secretario
pub async fn register_secretario(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    register_with_role(state, req, StaffRole::Secretario).await
}

/// Registers an entrenador
pub async fn register_entrenador(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    register_with_role(state, req, StaffRole::Entrenador).await
}

async fn register_with_role(
    state: AppState,
    req: RegisterRequest,
    role: StaffRole,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    req.validate()?;

    let password_hash = password::hash_password(&req.password)?;

    // A duplicate email surfaces as a unique-constraint error and maps to
    // the conflict response.
    let account = StaffAccount::create(
        &state.db,
        CreateStaffAccount {
            email: req.email,
            name: req.name,
            password_hash,
            role,
        },
    )
    .await?;

    let token = issue_token(&state, &account)?;

    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}

/// Login handler, shared by both route groups
///
/// The issued token carries the role stored on the account, not the
/// route group it came in through.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    req.validate()?;

    let account = match (&req.email, &req.name) {
        (Some(email), _) => StaffAccount::find_by_email(&state.db, email).await?,
        (None, Some(name)) => StaffAccount::find_by_name(&state.db, name).await?,
        (None, None) => {
            return Err(ApiError::BadRequest(
                "Por favor ingrese el correo o el nombre de usuario".to_string(),
            ))
        }
    };

    let account = account.ok_or_else(invalid_credentials)?;

    if !password::verify_password(&req.password, &account.password_hash)? {
        return Err(invalid_credentials());
    }

    let token = issue_token(&state, &account)?;

    Ok(Json(TokenResponse { token }))
}

fn issue_token(state: &AppState, account: &StaffAccount) -> Result<String, ApiError> {
    let claims = jwt::Claims::new(account.id, account.role, state.config.jwt.expiry());
    Ok(jwt::create_token(&claims, state.jwt_secret())?)
}

fn invalid_credentials() -> ApiError {
    // Unknown account and wrong password intentionally indistinguishable
    ApiError::Unauthorized("Nombre de usuario o contraseña incorrectos".to_string())
}
