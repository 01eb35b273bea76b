//! HashMap-backed store for tests and local development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use mongodb::bson::oid::ObjectId;

use super::NoteStore;
use crate::error::StoreError;
use crate::note::NoteRecord;

/// In-memory `NoteStore`. Clone-friendly via Arc; assigns fresh ObjectIds
/// on insert the way the real store does.
#[derive(Clone, Default)]
pub struct MemoryStore {
    notes: Arc<RwLock<HashMap<ObjectId, NoteRecord>>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[tonic::async_trait]
impl NoteStore for MemoryStore {
    async fn insert(&self, note: &NoteRecord) -> Result<ObjectId, StoreError> {
        let mut notes = self
            .notes
            .write()
            .map_err(|_| StoreError::Query("lock poisoned".to_string()))?;
        let id = ObjectId::new();
        let mut stored = note.clone();
        stored.id = Some(id);
        notes.insert(id, stored);
        Ok(id)
    }

    async fn find(&self, id: ObjectId) -> Result<Option<NoteRecord>, StoreError> {
        let notes = self
            .notes
            .read()
            .map_err(|_| StoreError::Query("lock poisoned".to_string()))?;
        Ok(notes.get(&id).cloned())
    }

    async fn replace(&self, id: ObjectId, note: &NoteRecord) -> Result<u64, StoreError> {
        let mut notes = self
            .notes
            .write()
            .map_err(|_| StoreError::Query("lock poisoned".to_string()))?;
        if !notes.contains_key(&id) {
            // No upsert: a replace that matches nothing changes nothing.
            return Ok(0);
        }
        let mut stored = note.clone();
        stored.id = Some(id);
        notes.insert(id, stored);
        Ok(1)
    }

    async fn delete(&self, id: ObjectId) -> Result<u64, StoreError> {
        let mut notes = self
            .notes
            .write()
            .map_err(|_| StoreError::Query("lock poisoned".to_string()))?;
        Ok(if notes.remove(&id).is_some() { 1 } else { 0 })
    }
}
