//! Store adapter — one trait, two implementations.
//!
//! `NoteStore` is the seam between the request handler and the document
//! store. `MongoStore` is the production binding; `MemoryStore` backs tests
//! and local runs without a database.

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use mongodb::bson::oid::ObjectId;

use crate::error::StoreError;
use crate::note::NoteRecord;

/// Collection operations the handlers need.
///
/// Implementations hold whatever connection state they need; handlers treat
/// them as read-only after construction. Every method is a single store
/// interaction with no retry.
#[tonic::async_trait]
pub trait NoteStore: Send + Sync + 'static {
    /// Insert a new document and return the store-assigned id.
    async fn insert(&self, note: &NoteRecord) -> Result<ObjectId, StoreError>;

    /// Fetch the document with the given id, if any.
    async fn find(&self, id: ObjectId) -> Result<Option<NoteRecord>, StoreError>;

    /// Replace the whole document. Returns how many documents matched.
    async fn replace(&self, id: ObjectId, note: &NoteRecord) -> Result<u64, StoreError>;

    /// Delete the document. Returns how many documents were removed.
    async fn delete(&self, id: ObjectId) -> Result<u64, StoreError>;
}
