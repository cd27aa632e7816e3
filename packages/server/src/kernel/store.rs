//! In-memory entity store.
//!
//! Every table lives behind a single `tokio::sync::RwLock`, so an action that
//! holds the write guard sees and mutates a consistent snapshot of all four
//! tables. Multi-step sequences (subscribe, delete cascade) run under one guard
//! and cannot interleave with other writers.
//!
//! Rows keep insertion order; `find_many` returns them in that order.

use std::fmt;

use thiserror::Error;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::common::EntityKind;
use crate::domains::member_types::models::MemberType;
use crate::domains::posts::models::Post;
use crate::domains::profiles::models::Profile;
use crate::domains::users::models::User;
use crate::kernel::filter::Filter;

/// A stored record with a unique key.
pub trait Entity: Clone + Send + Sync + 'static {
    type Key: Copy + Eq + fmt::Display + Send + Sync;

    const KIND: EntityKind;

    fn key(&self) -> Self::Key;
}

/// An entity whose key is allocated by the store on create.
pub trait Generated: Entity {
    /// The create payload (every field except the key).
    type Draft;

    fn generate_key() -> Self::Key;

    fn from_draft(key: Self::Key, draft: Self::Draft) -> Self;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{} with id {} not found", .kind.title(), .key)]
    NotFound { kind: EntityKind, key: String },
}

impl From<StoreError> for crate::common::DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { kind, key } => Self::NotFound { kind, id: key },
        }
    }
}

/// One collection of entities, scanned linearly.
pub struct Table<E> {
    rows: Vec<E>,
}

impl<E> Default for Table<E> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<E: Entity> Table<E> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.rows.iter()
    }

    pub fn find_all(&self) -> Vec<E> {
        self.rows.clone()
    }

    pub fn find_many(&self, filter: &impl Filter<E>) -> Vec<E> {
        self.rows
            .iter()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect()
    }

    pub fn find_one(&self, filter: &impl Filter<E>) -> Option<E> {
        self.rows.iter().find(|row| filter.matches(row)).cloned()
    }

    pub fn get(&self, key: E::Key) -> Option<&E> {
        self.rows.iter().find(|row| row.key() == key)
    }

    pub fn contains(&self, key: E::Key) -> bool {
        self.get(key).is_some()
    }

    /// Appends a fully formed entity. Used for seeding fixed catalogues.
    pub fn insert(&mut self, entity: E) -> E {
        self.rows.push(entity.clone());
        entity
    }

    pub fn create(&mut self, draft: E::Draft) -> E
    where
        E: Generated,
    {
        let entity = E::from_draft(E::generate_key(), draft);
        self.insert(entity)
    }

    /// Applies `patch` to the row with `key` and returns the updated row.
    pub fn change(&mut self, key: E::Key, patch: impl FnOnce(&mut E)) -> Result<E, StoreError> {
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.key() == key)
            .ok_or_else(|| not_found::<E>(key))?;
        patch(row);
        Ok(row.clone())
    }

    /// Applies `patch` to every row matching `filter`; returns how many changed.
    pub fn change_many(&mut self, filter: &impl Filter<E>, mut patch: impl FnMut(&mut E)) -> usize {
        let mut changed = 0;
        for row in self.rows.iter_mut().filter(|row| filter.matches(row)) {
            patch(row);
            changed += 1;
        }
        changed
    }

    pub fn delete(&mut self, key: E::Key) -> Result<E, StoreError> {
        let index = self
            .rows
            .iter()
            .position(|row| row.key() == key)
            .ok_or_else(|| not_found::<E>(key))?;
        Ok(self.rows.remove(index))
    }
}

fn not_found<E: Entity>(key: E::Key) -> StoreError {
    StoreError::NotFound {
        kind: E::KIND,
        key: key.to_string(),
    }
}

/// All tables, as seen through a store guard.
#[derive(Default)]
pub struct Tables {
    pub users: Table<User>,
    pub profiles: Table<Profile>,
    pub posts: Table<Post>,
    pub member_types: Table<MemberType>,
}

/// Process-wide entity store, shared through `Arc` in application state.
#[derive(Default)]
pub struct EntityStore {
    tables: RwLock<Tables>,
}

impl EntityStore {
    /// An empty store with no member types.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the member type catalogue.
    pub fn seeded() -> Self {
        let mut tables = Tables::default();
        for member_type in super::seed::default_member_types() {
            tables.member_types.insert(member_type);
        }
        Self {
            tables: RwLock::new(tables),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}
