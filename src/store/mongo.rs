//! MongoDB-backed store — one client, one collection, opened at startup.

use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use tracing::info;

use super::NoteStore;
use crate::config::Config;
use crate::error::StoreError;
use crate::note::NoteRecord;

/// Production store. Clone is cheap (the driver client is shared), so the
/// binary can keep a handle around for the shutdown disconnect.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    collection: Collection<NoteRecord>,
}

impl MongoStore {
    /// Parse the connection string, apply the configured pool and timeout
    /// policy, and resolve the collection handle. Called once at startup;
    /// every request reuses the same handle.
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&config.mongo_uri)
            .await
            .map_err(|e| StoreError::Connect(e.to_string()))?;
        options.max_pool_size = Some(config.max_pool_size);
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);
        // Single attempt per request; failures surface to the caller as-is.
        options.retry_writes = Some(config.retry_writes);
        options.retry_reads = Some(config.retry_reads);

        let client =
            Client::with_options(options).map_err(|e| StoreError::Connect(e.to_string()))?;
        let collection = client
            .database(&config.database)
            .collection(&config.collection);

        info!(
            database = %config.database,
            collection = %config.collection,
            "connected to mongodb"
        );
        Ok(Self { client, collection })
    }

    /// Release the client. In-flight requests must be drained first.
    pub async fn disconnect(self) {
        self.client.shutdown().await;
    }
}

#[tonic::async_trait]
impl NoteStore for MongoStore {
    async fn insert(&self, note: &NoteRecord) -> Result<ObjectId, StoreError> {
        let result = self
            .collection
            .insert_one(note)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Query("inserted id is not an ObjectId".to_string()))
    }

    async fn find(&self, id: ObjectId) -> Result<Option<NoteRecord>, StoreError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| StoreError::Query(e.to_string()))
    }

    async fn replace(&self, id: ObjectId, note: &NoteRecord) -> Result<u64, StoreError> {
        let result = self
            .collection
            .replace_one(doc! { "_id": id }, note)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(result.matched_count)
    }

    async fn delete(&self, id: ObjectId) -> Result<u64, StoreError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(result.deleted_count)
    }
}
