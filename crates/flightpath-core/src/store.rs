//! In-memory entity store using DashMap.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::StoreError;
use crate::models::{Aircraft, Flight};

/// Anything stored by numeric identifier.
pub trait Entity: Clone {
    fn id(&self) -> u64;
}

impl Entity for Aircraft {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Entity for Flight {
    fn id(&self) -> u64 {
        self.number
    }
}

/// Thread-safe create/read/update/delete store keyed by entity id.
pub struct Store<T: Entity> {
    entities: DashMap<u64, T>,
    id_counter: AtomicU64,
}

impl<T: Entity> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Store<T> {
    pub fn new() -> Self {
        Self {
            entities: DashMap::new(),
            id_counter: AtomicU64::new(1),
        }
    }

    /// Next unused identifier, for callers that build entities before inserting.
    pub fn next_id(&self) -> u64 {
        loop {
            let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
            if !self.entities.contains_key(&id) {
                return id;
            }
        }
    }

    pub fn create(&self, entity: T) -> Result<u64, StoreError> {
        let id = entity.id();
        match self.entities.entry(id) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists(id)),
            Entry::Vacant(slot) => {
                slot.insert(entity);
                tracing::debug!(id, "Entity created");
                Ok(id)
            }
        }
    }

    pub fn get(&self, id: u64) -> Option<T> {
        self.entities.get(&id).map(|r| r.value().clone())
    }

    /// Replace an existing entity.
    pub fn update(&self, entity: T) -> Result<(), StoreError> {
        let id = entity.id();
        let mut existing = self.entities.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *existing = entity;
        Ok(())
    }

    /// Apply `f` to an existing entity in place.
    pub fn modify<F>(&self, id: u64, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut T),
    {
        let mut existing = self.entities.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        f(existing.value_mut());
        Ok(())
    }

    pub fn delete(&self, id: u64) -> Result<T, StoreError> {
        self.entities
            .remove(&id)
            .map(|(_, entity)| entity)
            .ok_or(StoreError::NotFound(id))
    }

    /// All entities ordered by id.
    pub fn list(&self) -> Vec<T> {
        let mut all: Vec<T> = self.entities.iter().map(|r| r.value().clone()).collect();
        all.sort_by_key(|entity| entity.id());
        all
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
