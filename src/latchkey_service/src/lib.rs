pub mod auth_service;
pub mod helpers;
pub mod telemetry;

pub use auth_service::AuthService;
