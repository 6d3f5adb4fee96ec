use std::io::Write;

use anyhow::{Context, Result};
use mongodb::bson::{Bson, Document};

use crate::listing::{self, display_id, RoomQuery};
use crate::storage::{ListingStore, UpdateOutcome};

pub async fn list_databases(store: &dyn ListingStore, out: &mut dyn Write) -> Result<()> {
    let names = store
        .database_names()
        .await
        .context("listing databases")?;
    writeln!(out, "Databases:")?;
    for name in names {
        writeln!(out, " - {name}")?;
    }
    Ok(())
}

pub async fn create_listing(
    store: &dyn ListingStore,
    listing: Document,
    out: &mut dyn Write,
) -> Result<()> {
    let id = store
        .insert_listing(listing)
        .await
        .context("inserting listing")?;
    log::info!("✅ Listing created");
    writeln!(out, "New listing created with id {}", display_id(&id))?;
    Ok(())
}

pub async fn create_listings(
    store: &dyn ListingStore,
    listings: Vec<Document>,
    out: &mut dyn Write,
) -> Result<()> {
    let ids = store
        .insert_listings(listings)
        .await
        .context("inserting listings")?;
    log::info!("✅ {} listings created", ids.len());
    writeln!(out, "{} listing(s) created with ids:", ids.len())?;
    for id in &ids {
        writeln!(out, " - {}", display_id(id))?;
    }
    Ok(())
}

pub async fn seed(store: &dyn ListingStore, out: &mut dyn Write) -> Result<()> {
    let samples = listing::sample_listings().context("building sample listings")?;
    create_listings(store, samples, out).await
}

pub async fn find_one_by_name(
    store: &dyn ListingStore,
    name: &str,
    out: &mut dyn Write,
) -> Result<()> {
    match store
        .find_by_name(name)
        .await
        .with_context(|| format!("finding listing '{name}'"))?
    {
        Some(doc) => {
            writeln!(out, "Found listing '{name}':")?;
            writeln!(out, "{}", listing::to_pretty_json(&doc))?;
        }
        None => writeln!(out, "No listing found with name '{name}'")?,
    }
    Ok(())
}

pub async fn find_by_rooms(
    store: &dyn ListingStore,
    query: &RoomQuery,
    out: &mut dyn Write,
) -> Result<()> {
    log::debug!(
        "finding listings with >= {} bedrooms and >= {} bathrooms (limit {:?})",
        query.min_beds,
        query.min_baths,
        query.max_results
    );
    let docs = store
        .find_by_rooms(query)
        .await
        .context("finding listings by rooms")?;
    if docs.is_empty() {
        writeln!(out, "No listings matched")?;
    } else {
        writeln!(out, "Found {} listing(s):", docs.len())?;
        writeln!(out, "{}", listing::to_pretty_json_array(&docs))?;
    }
    Ok(())
}

fn write_update(outcome: &UpdateOutcome, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{} document(s) matched the query", outcome.matched)?;
    match &outcome.upserted_id {
        Some(id) => writeln!(out, "Upserted listing with id {}", display_id(id))?,
        None => writeln!(out, "{} document(s) updated", outcome.modified)?,
    }
    Ok(())
}

pub async fn update_by_name(
    store: &dyn ListingStore,
    name: &str,
    fields: Document,
    upsert: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let outcome = store
        .update_by_name(name, fields, upsert)
        .await
        .with_context(|| format!("updating listing '{name}'"))?;
    if outcome.matched == 0 && outcome.upserted_id.is_none() {
        log::warn!("no listing named '{}'", name);
    }
    write_update(&outcome, out)
}

pub async fn fill_missing(
    store: &dyn ListingStore,
    field: &str,
    value: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let outcome = store
        .set_where_missing(field, Bson::String(value.to_string()))
        .await
        .with_context(|| format!("filling missing '{field}'"))?;
    write_update(&outcome, out)
}

pub async fn delete_by_name(
    store: &dyn ListingStore,
    name: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let deleted = store
        .delete_by_name(name)
        .await
        .with_context(|| format!("deleting listing '{name}'"))?;
    writeln!(out, "{deleted} document(s) deleted")?;
    Ok(())
}

pub async fn delete_scraped_before(
    store: &dyn ListingStore,
    date: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let cutoff = listing::parse_date(date)?;
    let deleted = store
        .delete_scraped_before(cutoff)
        .await
        .with_context(|| format!("deleting listings scraped before {date}"))?;
    log::info!("🧹 Removed listings last scraped before {}", cutoff);
    writeln!(out, "{deleted} document(s) deleted")?;
    Ok(())
}
