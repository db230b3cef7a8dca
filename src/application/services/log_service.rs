//! Read-only access to the audit log.

use std::sync::Arc;

use crate::domain::entities::Log;
use crate::domain::repositories::EntityStore;
use crate::error::AppError;

/// Service for browsing audit entries.
///
/// Log rows are only ever written by [`super::UserService`].
pub struct LogService<L: EntityStore<Log>> {
    repository: Arc<L>,
}

impl<L: EntityStore<Log>> LogService<L> {
    /// Creates a new log service.
    pub fn new(repository: Arc<L>) -> Self {
        Self { repository }
    }

    /// Lists every log entry.
    ///
    /// # Errors
    ///
    /// Propagates store errors unchanged.
    pub async fn get_all(&self) -> Result<Vec<Log>, AppError> {
        self.repository.get_all().await
    }

    /// Lists the entries written for one user, deleted users included.
    ///
    /// # Errors
    ///
    /// Propagates store errors unchanged.
    pub async fn get_by_user_id(&self, user_id: i64) -> Result<Vec<Log>, AppError> {
        let logs = self.repository.get_all().await?;
        Ok(logs.into_iter().filter(|l| l.user_id == user_id).collect())
    }

    /// Finds a log entry by id; `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Propagates store errors unchanged.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Log>, AppError> {
        self.repository.get_by_id(id).await
    }

    /// Number of stored log entries.
    ///
    /// # Errors
    ///
    /// Propagates store errors unchanged.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}
