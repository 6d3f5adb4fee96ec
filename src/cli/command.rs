use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(about = "List the databases on the cluster")]
    Databases,
    #[command(
        about = "Insert one listing",
        long_about = "Insert a single listing given as a JSON object. Extended JSON is accepted, e.g. {\"last_review\": {\"$date\": \"2019-02-15T00:00:00Z\"}}."
    )]
    Create {
        #[arg(long, value_name = "JSON", help = "Listing document")]
        doc: String,
    },
    #[command(about = "Insert several listings at once")]
    CreateMany {
        #[arg(long, value_name = "JSON", help = "JSON array of listing documents")]
        docs: String,
    },
    #[command(
        about = "Insert the sample listings",
        long_about = "Insert three sample listings (\"Lovely loft\", \"Narayana\" and \"Atrium\") to play with."
    )]
    Seed,
    #[command(about = "Find one listing by name")]
    FindOne {
        #[arg(long)]
        name: String,
    },
    #[command(
        about = "Find listings with enough bedrooms and bathrooms",
        long_about = "Find listings with at least MIN_BEDS bedrooms and MIN_BATHS bathrooms, most recently reviewed first."
    )]
    Find {
        #[arg(long, default_value_t = 0, value_name = "N")]
        min_beds: u32,
        #[arg(long, default_value_t = 0.0, value_name = "N")]
        min_baths: f64,
        #[arg(
            long,
            value_name = "N",
            value_parser = clap::value_parser!(i64).range(1..),
            help = "Return at most N listings (default: all)"
        )]
        max_results: Option<i64>,
    },
    #[command(about = "Set fields on the listing with the given name")]
    Update {
        #[arg(long)]
        name: String,
        #[arg(long, value_name = "JSON", help = "Fields to set (shallow merge)")]
        set: String,
    },
    #[command(about = "Set fields on the listing with the given name, creating it if absent")]
    Upsert {
        #[arg(long)]
        name: String,
        #[arg(long, value_name = "JSON", help = "Fields to set (shallow merge)")]
        set: String,
    },
    #[command(
        about = "Give every listing lacking FIELD the value VALUE",
        long_about = "Update all listings where FIELD does not exist, setting it to the string VALUE."
    )]
    FillMissing {
        #[arg(long, default_value = "property_name")]
        field: String,
        #[arg(long, default_value = "Unknown")]
        value: String,
    },
    #[command(about = "Delete one listing by name")]
    Delete {
        #[arg(long)]
        name: String,
    },
    #[command(
        about = "Delete listings scraped before a date",
        long_about = "Delete every listing whose last_scraped date is strictly before DATE (YYYY-MM-DD at midnight UTC, or RFC 3339)."
    )]
    DeleteScrapedBefore {
        #[arg(long, default_value = "2019-02-15", value_name = "DATE")]
        date: String,
    },
}
