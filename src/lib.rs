//! # User Management
//!
//! A small user administration web application with an audit trail, built with
//! Axum and Askama.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, the generic store trait and the fixture users
//! - **Application Layer** ([`application`]) - User and log services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory entity store
//! - **API Layer** ([`api`]) - JSON health check and request tracing middleware
//! - **Web Layer** ([`web`]) - Server-rendered user and log pages
//!
//! ## Features
//!
//! - Create, edit, delete and browse users, filtered by their active flag
//! - Every user mutation writes an audit entry in the same critical section
//! - Audit entries browsable globally and per user
//! - Structured logging and per-event counters
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: bind address and log format
//! export LISTEN="127.0.0.1:3000"
//! export LOG_FORMAT="json"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LogService, UserService};
    pub use crate::domain::entities::{Log, LogType, User};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
