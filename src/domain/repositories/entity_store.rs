//! Generic repository trait shared by every entity kind.

use crate::domain::entities::Entity;
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence contract for one entity kind.
///
/// The trait knows nothing about kind-specific rules; those live in the
/// application services. Implementations must apply every mutation before
/// returning, so callers can rely on the assigned id immediately.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-memory table
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/store_scenarios.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Returns every stored row in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing table is unavailable.
    async fn get_all(&self) -> Result<Vec<E>, AppError>;

    /// Finds a row by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(E))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing table is unavailable.
    async fn get_by_id(&self, id: i64) -> Result<Option<E>, AppError>;

    /// Persists a new row.
    ///
    /// An id of `0` is replaced by the next free identity; a non-zero id is
    /// kept as given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a caller-supplied id is already taken.
    async fn create(&self, entity: E) -> Result<E, AppError>;

    /// Replaces the row sharing the entity's id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row has that id.
    async fn update(&self, entity: E) -> Result<E, AppError>;

    /// Removes the row sharing the entity's id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row has that id.
    async fn delete(&self, entity: &E) -> Result<(), AppError>;

    /// Number of stored rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing table is unavailable.
    async fn count(&self) -> Result<usize, AppError>;
}
