use std::io::Write;

use crate::cli::Command;
use crate::listing::{self, RoomQuery};
use crate::storage::ListingStore;

pub mod listing_ops;

impl Command {
    /// Run exactly one listing operation and print its summary to `out`.
    pub async fn run(&self, store: &dyn ListingStore, out: &mut dyn Write) -> anyhow::Result<()> {
        match self {
            Command::Databases => listing_ops::list_databases(store, out).await,
            Command::Create { doc } => {
                let listing = listing::parse_document(doc)?;
                listing_ops::create_listing(store, listing, out).await
            }
            Command::CreateMany { docs } => {
                let listings = listing::parse_documents(docs)?;
                listing_ops::create_listings(store, listings, out).await
            }
            Command::Seed => listing_ops::seed(store, out).await,
            Command::FindOne { name } => listing_ops::find_one_by_name(store, name, out).await,
            Command::Find {
                min_beds,
                min_baths,
                max_results,
            } => {
                let query = RoomQuery {
                    min_beds: *min_beds,
                    min_baths: *min_baths,
                    max_results: *max_results,
                };
                listing_ops::find_by_rooms(store, &query, out).await
            }
            Command::Update { name, set } => {
                let fields = listing::parse_document(set)?;
                listing_ops::update_by_name(store, name, fields, false, out).await
            }
            Command::Upsert { name, set } => {
                let fields = listing::parse_document(set)?;
                listing_ops::update_by_name(store, name, fields, true, out).await
            }
            Command::FillMissing { field, value } => {
                listing_ops::fill_missing(store, field, value, out).await
            }
            Command::Delete { name } => listing_ops::delete_by_name(store, name, out).await,
            Command::DeleteScrapedBefore { date } => {
                listing_ops::delete_scraped_before(store, date, out).await
            }
        }
    }

    /// Name used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Command::Databases => "databases",
            Command::Create { .. } => "create",
            Command::CreateMany { .. } => "create-many",
            Command::Seed => "seed",
            Command::FindOne { .. } => "find-one",
            Command::Find { .. } => "find",
            Command::Update { .. } => "update",
            Command::Upsert { .. } => "upsert",
            Command::FillMissing { .. } => "fill-missing",
            Command::Delete { .. } => "delete",
            Command::DeleteScrapedBefore { .. } => "delete-scraped-before",
        }
    }
}
