/// Middleware for the API server
///
/// - `role_guard`: bearer-token role check applied to the resolution
///   route group

pub mod role_guard;
