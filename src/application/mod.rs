//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls
//! and business rules. Services consume repository traits and provide a clean
//! API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User CRUD with audit logging
//! - [`services::log_service::LogService`] - Read-only audit log queries

pub mod services;
