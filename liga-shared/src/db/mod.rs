/// Database layer
///
/// One PostgreSQL pool is created at process start and handed by reference
/// to every request handler; there is no per-request connection logic and
/// no teardown beyond process exit.
///
/// # Modules
///
/// - `pool`: connection pool creation with a startup health check
/// - `migrations`: applies the SQL files under `migrations/` at startup

pub mod migrations;
pub mod pool;
