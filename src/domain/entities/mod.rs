//! Core domain entities.
//!
//! Entities are plain data structures. Both kinds share the [`Entity`] trait so
//! a single generic store implementation can persist either of them.
//!
//! # Entity Types
//!
//! - [`User`] - A managed user record
//! - [`Log`] - An audit entry describing a user mutation

pub mod log;
pub mod user;

pub use log::{Log, LogType};
pub use user::User;

/// Common surface of every stored entity kind.
///
/// An id of `0` marks an entity that has not been persisted yet.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Name of the entity kind, used in error messages and log fields.
    const KIND: &'static str;

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);
}
