//! Business logic services for the application layer.

pub mod log_service;
pub mod user_service;

pub use log_service::LogService;
pub use user_service::UserService;
