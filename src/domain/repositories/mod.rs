//! Repository trait definitions for the domain layer.
//!
//! A single generic trait, [`EntityStore`], abstracts data access for every
//! entity kind. The concrete in-memory implementation lives in
//! `crate::infrastructure::persistence`, and mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Testing
//!
//! See `tests/store_scenarios.rs` for usage against the real store.

pub mod entity_store;

pub use entity_store::EntityStore;

#[cfg(test)]
pub use entity_store::MockEntityStore;
