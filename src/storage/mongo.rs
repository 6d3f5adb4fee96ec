use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, DateTime, Document};
use mongodb::{Client, Collection};

use super::traits::{ListingStore, UpdateOutcome};
use crate::error::Result;
use crate::listing::RoomQuery;
use crate::query;

/// Listing store backed by a MongoDB collection.
///
/// Owns the client; call [`MongoStore::close`] when done so pooled connections
/// are torn down before the process exits.
pub struct MongoStore {
    client: Client,
    collection: Collection<Document>,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        // The driver connects lazily; ping so a bad URI or credentials fail here.
        if let Err(e) = client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
        {
            shutdown(client).await;
            return Err(e.into());
        }
        log::debug!("connected, using {}.{}", database, collection);

        let collection = client.database(database).collection::<Document>(collection);
        Ok(Self { client, collection })
    }

    pub async fn close(self) {
        shutdown(self.client).await;
    }
}

async fn shutdown(client: Client) {
    client.shutdown().await;
    log::info!("🔌 Connection closed");
}

#[async_trait]
impl ListingStore for MongoStore {
    async fn database_names(&self) -> Result<Vec<String>> {
        Ok(self.client.list_database_names().await?)
    }

    async fn insert_listing(&self, listing: Document) -> Result<Bson> {
        let result = self.collection.insert_one(listing).await?;
        Ok(result.inserted_id)
    }

    async fn insert_listings(&self, listings: Vec<Document>) -> Result<Vec<Bson>> {
        let result = self.collection.insert_many(listings).await?;
        let mut ids: Vec<(usize, Bson)> = result.inserted_ids.into_iter().collect();
        ids.sort_by_key(|(index, _)| *index);
        Ok(ids.into_iter().map(|(_, id)| id).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Document>> {
        Ok(self.collection.find_one(query::by_name(name)).await?)
    }

    async fn find_by_rooms(&self, q: &RoomQuery) -> Result<Vec<Document>> {
        let mut find = self
            .collection
            .find(query::by_rooms(q))
            .sort(query::latest_review_first());
        if let Some(limit) = q.max_results {
            find = find.limit(limit);
        }
        let cursor = find.await?;
        Ok(cursor.try_collect().await?)
    }

    async fn update_by_name(
        &self,
        name: &str,
        fields: Document,
        upsert: bool,
    ) -> Result<UpdateOutcome> {
        let result = self
            .collection
            .update_one(query::by_name(name), query::set_fields(fields))
            .upsert(upsert)
            .await?;
        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
            upserted_id: result.upserted_id,
        })
    }

    async fn set_where_missing(&self, field: &str, value: Bson) -> Result<UpdateOutcome> {
        let result = self
            .collection
            .update_many(query::missing_field(field), query::set_field(field, value))
            .await?;
        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
            upserted_id: None,
        })
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64> {
        let result = self.collection.delete_one(query::by_name(name)).await?;
        Ok(result.deleted_count)
    }

    async fn delete_scraped_before(&self, cutoff: DateTime) -> Result<u64> {
        let result = self
            .collection
            .delete_many(query::scraped_before(cutoff))
            .await?;
        Ok(result.deleted_count)
    }
}
