//! User management service with audit logging.

use std::future::Future;
use std::sync::Arc;

use serde_json::json;
use tokio::sync::Mutex;

use crate::domain::entities::{Log, LogType, User};
use crate::domain::repositories::EntityStore;
use crate::error::AppError;

/// Service for listing and mutating users.
///
/// Every successful mutation is followed by exactly one [`Log`] row describing
/// the user as it was at that moment. A failed mutation writes nothing.
///
/// Each mutate-then-log pair runs on its own task, so a dropped request (client
/// disconnect, timeout) cannot leave a user change without its log row.
pub struct UserService<U: EntityStore<User>, L: EntityStore<Log>> {
    users: Arc<U>,
    logs: Arc<L>,
    /// Held across mutate-then-log so audit order matches mutation order.
    write_lock: Arc<Mutex<()>>,
}

impl<U, L> UserService<U, L>
where
    U: EntityStore<User> + 'static,
    L: EntityStore<Log> + 'static,
{
    /// Creates a new user service.
    pub fn new(users: Arc<U>, logs: Arc<L>) -> Self {
        Self {
            users,
            logs,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Lists every user.
    ///
    /// # Errors
    ///
    /// Propagates store errors unchanged.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        self.users.get_all().await
    }

    /// Lists users whose active flag equals `is_active`.
    ///
    /// # Errors
    ///
    /// Propagates store errors unchanged.
    pub async fn filter_by_active(&self, is_active: bool) -> Result<Vec<User>, AppError> {
        let users = self.users.get_all().await?;
        Ok(users.into_iter().filter(|u| u.is_active == is_active).collect())
    }

    /// Finds a user by id; `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Propagates store errors unchanged.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        self.users.get_by_id(id).await
    }

    /// Number of stored users.
    ///
    /// # Errors
    ///
    /// Propagates store errors unchanged.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.users.count().await
    }

    /// Stores a new user and records a `Created` log for the assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if an explicit id is already taken.
    /// No log is written when the store rejects the user.
    pub async fn create(&self, user: User) -> Result<User, AppError> {
        let (users, logs, lock) = self.handles();

        run_to_completion(async move {
            let _guard = lock.lock().await;

            let created = users.create(user).await?;
            record(logs.as_ref(), LogType::Created, &created).await?;

            Ok(created)
        })
        .await
    }

    /// Overwrites an existing user and records an `Updated` log.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user no longer exists; no log is
    /// written in that case.
    pub async fn update(&self, user: User) -> Result<User, AppError> {
        let (users, logs, lock) = self.handles();

        run_to_completion(async move {
            let _guard = lock.lock().await;

            let updated = users.update(user).await?;
            record(logs.as_ref(), LogType::Updated, &updated).await?;

            Ok(updated)
        })
        .await
    }

    /// Hard-deletes a user and records a `Deleted` log with its last values.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user no longer exists; no log is
    /// written in that case.
    pub async fn delete(&self, user: User) -> Result<(), AppError> {
        let (users, logs, lock) = self.handles();

        run_to_completion(async move {
            let _guard = lock.lock().await;

            users.delete(&user).await?;
            record(logs.as_ref(), LogType::Deleted, &user).await?;

            Ok(())
        })
        .await
    }

    fn handles(&self) -> (Arc<U>, Arc<L>, Arc<Mutex<()>>) {
        (
            self.users.clone(),
            self.logs.clone(),
            self.write_lock.clone(),
        )
    }
}

/// Drives `task` on the runtime and waits for it.
///
/// The spawned task keeps running if the caller's future is dropped.
async fn run_to_completion<T, F>(task: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: Future<Output = Result<T, AppError>> + Send + 'static,
{
    tokio::spawn(task).await.map_err(|e| {
        AppError::internal(
            "User write task failed",
            json!({ "error": e.to_string() }),
        )
    })?
}

async fn record<L: EntityStore<Log>>(
    logs: &L,
    kind: LogType,
    user: &User,
) -> Result<Log, AppError> {
    let log = logs.create(Log::for_user(kind, user)).await?;

    tracing::info!(
        user_id = user.id,
        log_id = log.id,
        action = kind.verb(),
        "User audit entry written"
    );
    metrics::counter!("user_audit_events_total", "type" => kind.verb()).increment(1);

    Ok(log)
}
