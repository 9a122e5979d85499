/// Application state and router builder
///
/// # Router layout
///
/// ```text
/// /
/// ├── GET  /                        # Liveness text (public)
/// ├── GET  /health                  # Health JSON with database status
/// ├── /api/
/// │   ├── POST   /patinadores      # Batch registration (find-or-create)
/// │   ├── GET    /patinadores
/// │   └── GET/PUT/DELETE /patinadores/:number_id
/// ├── /auth/
/// │   ├── POST /register            # Secretario registration, returns JWT
/// │   └── POST /login
/// ├── /entrenador/
/// │   ├── POST /register            # Entrenador registration, returns JWT
/// │   └── POST /login
/// └── /resolucion/                  # Guarded: role=secretario
///     ├── POST   /resoluciones
///     ├── GET    /resoluciones
///     └── GET/PUT/DELETE /resoluciones/:name_event
/// ```
///
/// Request logging comes from tower-http's TraceLayer; the role guard is
/// applied only to the resolution group.

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::{config::Config, middleware::role_guard::require_secretario, routes};

/// Shared application state
///
/// Cloned per request; the pool and config are behind cheap handles. The
/// pool is the process-wide database connection created at startup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// JWT signing secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let skater_routes = Router::new()
        .route(
            "/patinadores",
            post(routes::skaters::register_batch).get(routes::skaters::list_skaters),
        )
        .route(
            "/patinadores/:number_id",
            get(routes::skaters::get_skater)
                .put(routes::skaters::update_skater)
                .delete(routes::skaters::delete_skater),
        );

    // Two mounts over the same account table; the group fixes the role
    // assigned at registration.
    let secretario_routes = Router::new()
        .route("/register", post(routes::auth::register_secretario))
        .route("/login", post(routes::auth::login));

    let entrenador_routes = Router::new()
        .route("/register", post(routes::auth::register_entrenador))
        .route("/login", post(routes::auth::login));

    let resolution_routes = Router::new()
        .route(
            "/resoluciones",
            post(routes::resolutions::create_resolution).get(routes::resolutions::list_resolutions),
        )
        .route(
            "/resoluciones/:name_event",
            get(routes::resolutions::get_resolution)
                .put(routes::resolutions::update_resolution)
                .delete(routes::resolutions::delete_resolution),
        )
        .layer(from_fn_with_state(state.clone(), require_secretario));

    Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_check))
        .nest("/api", skater_routes)
        .nest("/auth", secretario_routes)
        .nest("/entrenador", entrenador_routes)
        .nest("/resolucion", resolution_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
