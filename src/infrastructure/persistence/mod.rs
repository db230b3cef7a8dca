//! Repository implementations.
//!
//! Concrete implementations of the domain repository trait. The only backend
//! is a memory-resident table per entity kind, reset on every restart.
//!
//! # Repositories
//!
//! - [`MemoryStore`] - Generic in-memory table for any [`crate::domain::entities::Entity`]
//! - [`DataStore`] - The user and log tables of the application

pub mod memory_store;

pub use memory_store::{DataStore, MemoryStore};
