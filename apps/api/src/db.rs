//! Storage gateway over the MongoDB driver.
//!
//! Handlers never touch the driver directly; everything goes through the two
//! primitives here (`insert_document` / `find_documents`) plus the existence
//! probe and the collection listing used by diagnostics. When the database
//! settings are missing or the client cannot be built, the gateway runs in
//! degraded mode: every operation returns `StorageError::Unavailable` instead
//! of taking the process down.

use futures::stream::TryStreamExt;
use mongodb::bson::{Bson, Document};
use mongodb::options::FindOptions;
use mongodb::{Client, Database};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: no database connection was established")]
    Unavailable,

    #[error("storage read failed: {0}")]
    Read(mongodb::error::Error),

    #[error("storage write failed: {0}")]
    Write(mongodb::error::Error),
}

/// Single ownership root for the document-store connection, built once at
/// process start and handed to every handler through `AppState`.
#[derive(Clone)]
pub struct Storage {
    db: Option<Database>,
}

impl Storage {
    /// Builds the gateway from config. Never fails: a missing setting or a
    /// bad connection string logs a warning and yields a degraded gateway.
    pub async fn connect(config: &Config) -> Self {
        let (url, name) = match (&config.database_url, &config.database_name) {
            (Some(url), Some(name)) => (url, name),
            _ => {
                warn!("DATABASE_URL or DATABASE_NAME not set; storage degraded");
                return Storage { db: None };
            }
        };

        match Client::with_uri_str(url).await {
            Ok(client) => {
                info!("MongoDB client initialized (database: {name})");
                Storage {
                    db: Some(client.database(name)),
                }
            }
            Err(e) => {
                warn!("MongoDB client failed to initialize: {e}; storage degraded");
                Storage { db: None }
            }
        }
    }

    /// A gateway with no backing database, as produced by a failed connect.
    #[cfg(test)]
    pub fn degraded() -> Self {
        Storage { db: None }
    }

    pub fn available(&self) -> bool {
        self.db.is_some()
    }

    fn database(&self) -> Result<&Database, StorageError> {
        self.db.as_ref().ok_or(StorageError::Unavailable)
    }

    /// Appends one document to the named collection and returns the generated
    /// identifier as an opaque string (hex for ObjectIds).
    pub async fn insert_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, StorageError> {
        let coll = self.database()?.collection::<Document>(collection);
        let result = coll
            .insert_one(document, None)
            .await
            .map_err(StorageError::Write)?;

        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        })
    }

    /// Exact-match query against one collection, capped at `limit` documents,
    /// in the store's natural order.
    pub async fn find_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StorageError> {
        let coll = self.database()?.collection::<Document>(collection);
        let options = FindOptions::builder().limit(limit).build();
        let cursor = coll
            .find(filter, options)
            .await
            .map_err(StorageError::Read)?;

        cursor.try_collect().await.map_err(StorageError::Read)
    }

    /// Returns the first document matching the filter, if any.
    pub async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StorageError> {
        let coll = self.database()?.collection::<Document>(collection);
        coll.find_one(filter, None).await.map_err(StorageError::Read)
    }

    /// Collection names, for the diagnostics endpoint.
    pub async fn collection_names(&self) -> Result<Vec<String>, StorageError> {
        self.database()?
            .list_collection_names(None)
            .await
            .map_err(StorageError::Read)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn degraded_insert_reports_unavailable() {
        let storage = Storage::degraded();
        let result = storage.insert_document("user", Document::new()).await;
        assert!(matches!(result, Err(StorageError::Unavailable)));
    }

    #[tokio::test]
    async fn degraded_find_reports_unavailable() {
        let storage = Storage::degraded();
        let result = storage
            .find_documents("announcement", Document::new(), 50)
            .await;
        assert!(matches!(result, Err(StorageError::Unavailable)));
    }

    #[tokio::test]
    async fn degraded_find_one_reports_unavailable() {
        let storage = Storage::degraded();
        let result = storage.find_one("user", Document::new()).await;
        assert!(matches!(result, Err(StorageError::Unavailable)));
    }

    #[tokio::test]
    async fn degraded_collection_names_reports_unavailable() {
        let storage = Storage::degraded();
        assert!(matches!(
            storage.collection_names().await,
            Err(StorageError::Unavailable)
        ));
        assert!(!storage.available());
    }
}
