//! In-memory implementation of the entity store.

use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Entity, Log, User};
use crate::domain::repositories::EntityStore;
use crate::error::AppError;

/// Rows of one entity kind plus the identity counter.
struct Table<E> {
    rows: BTreeMap<i64, E>,
    next_id: i64,
}

impl<E: Entity> Table<E> {
    fn empty() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Stores `entity` under its own id and keeps the counter ahead of it.
    ///
    /// The counter saturates at `i64::MAX`; [`Table::assign_id`] reports the
    /// exhausted identity space once that id is taken.
    fn insert(&mut self, entity: E) {
        let id = entity.id();
        self.next_id = self.next_id.max(id.saturating_add(1));
        self.rows.insert(id, entity);
    }

    fn assign_id(&self, entity: &mut E) -> Result<(), AppError> {
        if self.rows.contains_key(&self.next_id) {
            return Err(AppError::conflict(
                format!("No free {} id left", E::KIND),
                json!({ "kind": E::KIND, "next_id": self.next_id }),
            ));
        }
        entity.set_id(self.next_id);
        Ok(())
    }
}

/// A memory-resident table for one entity kind.
///
/// Every mutation, including id assignment, runs under the write half of a
/// [`RwLock`], so concurrent creates never share an id. Reads proceed in
/// parallel. Contents are lost when the process exits.
pub struct MemoryStore<E: Entity> {
    table: RwLock<Table<E>>,
}

impl<E: Entity> MemoryStore<E> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::empty()),
        }
    }

    /// Creates a table pre-filled with `rows`, keeping their ids.
    ///
    /// Rows with an id of `0` get the next free identity.
    pub fn seeded(rows: impl IntoIterator<Item = E>) -> Self {
        let mut table = Table::empty();
        for mut row in rows {
            if row.id() == 0 {
                row.set_id(table.next_id);
            }
            table.insert(row);
        }
        debug!(kind = E::KIND, rows = table.rows.len(), "Seeded memory store");

        Self {
            table: RwLock::new(table),
        }
    }
}

impl<E: Entity> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for MemoryStore<E> {
    async fn get_all(&self) -> Result<Vec<E>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<E>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, mut entity: E) -> Result<E, AppError> {
        let mut table = self.table.write().await;

        if entity.id() == 0 {
            table.assign_id(&mut entity)?;
        } else if table.rows.contains_key(&entity.id()) {
            return Err(AppError::conflict(
                format!("{} already exists", E::KIND),
                json!({ "kind": E::KIND, "id": entity.id() }),
            ));
        }

        table.insert(entity.clone());
        debug!(kind = E::KIND, id = entity.id(), "Row created");

        Ok(entity)
    }

    async fn update(&self, entity: E) -> Result<E, AppError> {
        let mut table = self.table.write().await;

        match table.rows.get_mut(&entity.id()) {
            Some(row) => {
                *row = entity.clone();
                debug!(kind = E::KIND, id = entity.id(), "Row updated");
                Ok(entity)
            }
            None => Err(AppError::not_found(
                format!("{} not found", E::KIND),
                json!({ "kind": E::KIND, "id": entity.id() }),
            )),
        }
    }

    async fn delete(&self, entity: &E) -> Result<(), AppError> {
        let mut table = self.table.write().await;

        if table.rows.remove(&entity.id()).is_none() {
            return Err(AppError::not_found(
                format!("{} not found", E::KIND),
                json!({ "kind": E::KIND, "id": entity.id() }),
            ));
        }
        debug!(kind = E::KIND, id = entity.id(), "Row deleted");

        Ok(())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.table.read().await.rows.len())
    }
}

/// Both tables of the application, created together at start-up.
#[derive(Clone)]
pub struct DataStore {
    pub users: Arc<MemoryStore<User>>,
    pub logs: Arc<MemoryStore<Log>>,
}

impl DataStore {
    /// Builds the store with `seed` loaded into the user table and an empty
    /// log table.
    pub fn initialize(seed: Vec<User>) -> Self {
        Self {
            users: Arc::new(MemoryStore::seeded(seed)),
            logs: Arc::new(MemoryStore::new()),
        }
    }
}
