//! Listing documents and the inputs the operations take.
//!
//! Listings are schemaless: they travel as raw BSON documents. This module only
//! turns user input (JSON text, dates) into BSON and renders results back.

use chrono::{DateTime as ChronoDateTime, NaiveDate};
use mongodb::bson::{self, Bson, DateTime, Document};
use serde::Serialize;

use crate::error::{ListingsError, Result};

/// Bedroom/bathroom thresholds for `find_by_rooms`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoomQuery {
    pub min_beds: u32,
    pub min_baths: f64,
    /// `None` returns every match.
    pub max_results: Option<i64>,
}

#[derive(Serialize)]
struct NewListing<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    property_name: Option<&'a str>,
    summary: &'a str,
    bedrooms: i32,
    bathrooms: i32,
}

/// The listings used to populate an empty collection.
pub fn sample_listings() -> Result<Vec<Document>> {
    let samples = [
        NewListing {
            name: "Lovely loft",
            property_name: None,
            summary: "A charming loft in Paris",
            bedrooms: 1,
            bathrooms: 1,
        },
        NewListing {
            name: "Narayana",
            property_name: None,
            summary: "A charming loft in Paris",
            bedrooms: 2,
            bathrooms: 1,
        },
        NewListing {
            name: "Atrium",
            property_name: Some("Atrium Coorg"),
            summary: "With pool",
            bedrooms: 5,
            bathrooms: 3,
        },
    ];
    samples
        .iter()
        .map(|s| bson::to_document(s).map_err(|e| ListingsError::InvalidDocument(e.to_string())))
        .collect()
}

fn from_json_value(value: serde_json::Value) -> Result<Bson> {
    Bson::try_from(value).map_err(|e| ListingsError::InvalidDocument(e.to_string()))
}

/// Parse one listing (or a `$set` field map) from Extended JSON text.
pub fn parse_document(json: &str) -> Result<Document> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| ListingsError::InvalidDocument(e.to_string()))?;
    match from_json_value(value)? {
        Bson::Document(doc) => Ok(doc),
        other => Err(ListingsError::InvalidDocument(format!(
            "expected a JSON object, got {:?}",
            other.element_type()
        ))),
    }
}

/// Parse a non-empty JSON array of listings.
pub fn parse_documents(json: &str) -> Result<Vec<Document>> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| ListingsError::InvalidDocument(e.to_string()))?;
    let serde_json::Value::Array(items) = value else {
        return Err(ListingsError::InvalidDocument(
            "expected a JSON array of objects".into(),
        ));
    };
    if items.is_empty() {
        return Err(ListingsError::InvalidDocument("no listings given".into()));
    }
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match from_json_value(item)? {
            Bson::Document(doc) => Ok(doc),
            _ => Err(ListingsError::InvalidDocument(format!(
                "item {i} is not a JSON object"
            ))),
        })
        .collect()
}

/// `YYYY-MM-DD` is midnight UTC; anything else must be RFC 3339.
pub fn parse_date(input: &str) -> Result<DateTime> {
    let millis = if let Ok(day) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        day.and_hms_opt(0, 0, 0)
            .ok_or_else(|| ListingsError::InvalidDate(input.to_string()))?
            .and_utc()
            .timestamp_millis()
    } else {
        ChronoDateTime::parse_from_rfc3339(input)
            .map_err(|_| ListingsError::InvalidDate(input.to_string()))?
            .timestamp_millis()
    };
    Ok(DateTime::from_millis(millis))
}

/// Render an inserted/upserted id: bare hex for object ids, the value otherwise.
pub fn display_id(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn to_pretty_json(doc: &Document) -> String {
    let value = Bson::Document(doc.clone()).into_relaxed_extjson();
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

pub fn to_pretty_json_array(docs: &[Document]) -> String {
    let values: Vec<serde_json::Value> = docs
        .iter()
        .map(|d| Bson::Document(d.clone()).into_relaxed_extjson())
        .collect();
    serde_json::to_string_pretty(&values).unwrap_or_else(|_| format!("{values:?}"))
}
