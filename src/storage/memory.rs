// In-process stand-in for a listings collection, used by unit tests.
use std::cmp::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, DateTime, Document};

use super::traits::{ListingStore, UpdateOutcome};
use crate::error::Result;
use crate::listing::RoomQuery;

pub struct MemoryStore {
    databases: Vec<String>,
    docs: Mutex<Vec<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_listings(Vec::new())
    }

    pub fn with_listings(listings: Vec<Document>) -> Self {
        Self {
            databases: vec!["admin".into(), "local".into(), "sample_airbnb".into()],
            docs: Mutex::new(listings.into_iter().map(with_id).collect()),
        }
    }

    pub fn snapshot(&self) -> Vec<Document> {
        self.docs.lock().unwrap().clone()
    }
}

fn with_id(mut doc: Document) -> Document {
    if !doc.contains_key("_id") {
        doc.insert("_id", ObjectId::new());
    }
    doc
}

fn number(value: Option<&Bson>) -> Option<f64> {
    match value? {
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        Bson::Double(v) => Some(*v),
        _ => None,
    }
}

fn has_name(doc: &Document, name: &str) -> bool {
    doc.get_str("name").map(|n| n == name).unwrap_or(false)
}

/// Missing dates sort lowest, as in the server's ordering.
fn review_date(doc: &Document) -> Option<DateTime> {
    doc.get_datetime("last_review").ok().copied()
}

/// Applies `$set` semantics; returns whether any value changed.
fn merge(doc: &mut Document, fields: &Document) -> bool {
    let mut changed = false;
    for (key, value) in fields {
        if doc.get(key) != Some(value) {
            doc.insert(key.clone(), value.clone());
            changed = true;
        }
    }
    changed
}

#[async_trait]
impl ListingStore for MemoryStore {
    async fn database_names(&self) -> Result<Vec<String>> {
        Ok(self.databases.clone())
    }

    async fn insert_listing(&self, listing: Document) -> Result<Bson> {
        let doc = with_id(listing);
        let id = doc.get("_id").cloned().unwrap_or(Bson::Null);
        self.docs.lock().unwrap().push(doc);
        Ok(id)
    }

    async fn insert_listings(&self, listings: Vec<Document>) -> Result<Vec<Bson>> {
        let mut ids = Vec::with_capacity(listings.len());
        for listing in listings {
            ids.push(self.insert_listing(listing).await?);
        }
        Ok(ids)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Document>> {
        let docs = self.docs.lock().unwrap();
        Ok(docs.iter().find(|d| has_name(d, name)).cloned())
    }

    async fn find_by_rooms(&self, query: &RoomQuery) -> Result<Vec<Document>> {
        let docs = self.docs.lock().unwrap();
        let mut found: Vec<Document> = docs
            .iter()
            .filter(|d| {
                let beds = number(d.get("bedrooms"));
                let baths = number(d.get("bathrooms"));
                matches!(beds, Some(b) if b >= f64::from(query.min_beds))
                    && matches!(baths, Some(b) if b >= query.min_baths)
            })
            .cloned()
            .collect();
        found.sort_by(|a, b| match (review_date(a), review_date(b)) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        if let Some(limit) = query.max_results {
            found.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        Ok(found)
    }

    async fn update_by_name(
        &self,
        name: &str,
        fields: Document,
        upsert: bool,
    ) -> Result<UpdateOutcome> {
        let mut docs = self.docs.lock().unwrap();
        if let Some(doc) = docs.iter_mut().find(|d| has_name(d, name)) {
            let modified = merge(doc, &fields);
            return Ok(UpdateOutcome {
                matched: 1,
                modified: u64::from(modified),
                upserted_id: None,
            });
        }
        if !upsert {
            return Ok(UpdateOutcome::default());
        }
        let mut doc = Document::new();
        doc.insert("name", name);
        merge(&mut doc, &fields);
        let doc = with_id(doc);
        let id = doc.get("_id").cloned();
        docs.push(doc);
        Ok(UpdateOutcome {
            matched: 0,
            modified: 0,
            upserted_id: id,
        })
    }

    async fn set_where_missing(&self, field: &str, value: Bson) -> Result<UpdateOutcome> {
        let mut docs = self.docs.lock().unwrap();
        let mut outcome = UpdateOutcome::default();
        for doc in docs.iter_mut().filter(|d| !d.contains_key(field)) {
            doc.insert(field, value.clone());
            outcome.matched += 1;
            outcome.modified += 1;
        }
        Ok(outcome)
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64> {
        let mut docs = self.docs.lock().unwrap();
        match docs.iter().position(|d| has_name(d, name)) {
            Some(index) => {
                docs.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_scraped_before(&self, cutoff: DateTime) -> Result<u64> {
        let mut docs = self.docs.lock().unwrap();
        let before = docs.len();
        docs.retain(|d| !matches!(d.get_datetime("last_scraped"), Ok(scraped) if *scraped < cutoff));
        Ok((before - docs.len()) as u64)
    }
}
