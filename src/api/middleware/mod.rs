//! HTTP middleware for request processing.
//!
//! Provides observability middleware shared by every route.

pub mod tracing;
