//! Filter, update and sort documents sent to the driver.

use mongodb::bson::{doc, Bson, DateTime, Document};

use crate::listing::RoomQuery;

pub fn by_name(name: &str) -> Document {
    doc! { "name": name }
}

pub fn by_rooms(query: &RoomQuery) -> Document {
    doc! {
        "bedrooms": { "$gte": i64::from(query.min_beds) },
        "bathrooms": { "$gte": query.min_baths },
    }
}

/// Most recently reviewed first.
pub fn latest_review_first() -> Document {
    doc! { "last_review": -1 }
}

pub fn scraped_before(cutoff: DateTime) -> Document {
    doc! { "last_scraped": { "$lt": cutoff } }
}

pub fn missing_field(field: &str) -> Document {
    doc! { field: { "$exists": false } }
}

/// Shallow merge: top-level fields are replaced, nested documents are not merged.
pub fn set_fields(fields: Document) -> Document {
    doc! { "$set": fields }
}

pub fn set_field(field: &str, value: Bson) -> Document {
    doc! { "$set": { field: value } }
}
