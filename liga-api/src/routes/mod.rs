/// API route handlers
///
/// One module per route group:
///
/// - `health`: liveness text and health JSON
/// - `skaters`: athlete registration and CRUD
/// - `auth`: staff registration/login for both role groups
/// - `resolutions`: event resolution CRUD (role-guarded)

pub mod auth;
pub mod health;
pub mod resolutions;
pub mod skaters;

use serde::{Deserialize, Serialize};

/// Plain confirmation body for delete endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
