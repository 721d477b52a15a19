use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection,
    bson::{Bson, Document, doc},
    options::ClientOptions,
};

use crate::config::Config;

pub type DynStore = Arc<dyn SongStore>;

/// The store primitives behind the handlers — one call per endpoint.
/// Kept as a trait so tests can swap in an in-memory store.
#[async_trait]
pub trait SongStore: Send + Sync {
    async fn count(&self) -> Result<u64>;
    async fn list(&self) -> Result<Vec<Document>>;
    async fn find_by_song_id(&self, id: i64) -> Result<Option<Document>>;
    /// Returns the store-generated `_id` of the new document.
    async fn insert(&self, song: Document) -> Result<Bson>;
    /// `$set` merge: fields in `fields` are applied, everything else on the
    /// document is left untouched.
    async fn update(&self, id: i64, fields: Document) -> Result<()>;
    async fn delete(&self, id: i64) -> Result<bool>;
    /// Drop the collection and bulk-insert the given songs.
    async fn reseed(&self, songs: Vec<Document>) -> Result<()>;
}

#[derive(Clone)]
pub struct Database {
    collection: Collection<Document>,
}

impl Database {
    /// Builds the client without touching the network; authentication
    /// failures surface on the first operation.
    pub async fn connect(config: &Config) -> Result<Self> {
        let options = ClientOptions::parse(config.connection_string()).await?;
        let client = Client::with_options(options)?;
        let collection = client.database("songs").collection::<Document>("songs");
        Ok(Database { collection })
    }
}

#[async_trait]
impl SongStore for Database {
    async fn count(&self) -> Result<u64> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn list(&self) -> Result<Vec<Document>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_song_id(&self, id: i64) -> Result<Option<Document>> {
        Ok(self.collection.find_one(doc! { "id": id }).await?)
    }

    async fn insert(&self, song: Document) -> Result<Bson> {
        let result = self.collection.insert_one(song).await?;
        Ok(result.inserted_id)
    }

    async fn update(&self, id: i64, fields: Document) -> Result<()> {
        self.collection
            .update_one(doc! { "id": id }, doc! { "$set": fields })
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn reseed(&self, songs: Vec<Document>) -> Result<()> {
        self.collection.drop().await?;
        if !songs.is_empty() {
            self.collection.insert_many(songs).await?;
        }
        Ok(())
    }
}
