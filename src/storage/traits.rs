use async_trait::async_trait;
use mongodb::bson::{Bson, DateTime, Document};

use crate::error::Result;
use crate::listing::RoomQuery;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
    /// Id of the document created by an upsert, if one was created.
    pub upserted_id: Option<Bson>,
}

/// One method per listing operation. Each call is a single round trip.
#[async_trait]
pub trait ListingStore: Send + Sync {
    async fn database_names(&self) -> Result<Vec<String>>;

    /// Returns the new document's id.
    async fn insert_listing(&self, listing: Document) -> Result<Bson>;

    /// Returns the new ids in input order.
    async fn insert_listings(&self, listings: Vec<Document>) -> Result<Vec<Bson>>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Document>>;

    async fn find_by_rooms(&self, query: &RoomQuery) -> Result<Vec<Document>>;

    async fn update_by_name(
        &self,
        name: &str,
        fields: Document,
        upsert: bool,
    ) -> Result<UpdateOutcome>;

    async fn set_where_missing(&self, field: &str, value: Bson) -> Result<UpdateOutcome>;

    /// Returns the number of deleted documents (0 or 1).
    async fn delete_by_name(&self, name: &str) -> Result<u64>;

    async fn delete_scraped_before(&self, cutoff: DateTime) -> Result<u64>;
}
