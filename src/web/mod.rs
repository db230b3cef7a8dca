//! Server-rendered HTML pages for user administration.
//!
//! Uses Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`forms`] - Form and query payloads with validation
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration
//! - [`view_models`] - Display-ready rows for the templates

pub mod forms;
pub mod handlers;
pub mod routes;
pub mod view_models;
