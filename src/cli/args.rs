use clap::Parser;
use std::env;

use crate::cli::command::Command;
use crate::configuration::{
    DEFAULT_AUTH_DATABASE, DEFAULT_CLUSTER_HOST, DEFAULT_COLLECTION, DEFAULT_DATABASE,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Run one operation against the Airbnb sample listings collection",
    long_about = "Connects to a MongoDB cluster, runs a single insert, find, update, upsert or delete against the listings collection and prints a summary.\n\nEnvironment:\n  DB_USER       cluster user\n  DB_PASS       cluster password\n  MONGODB_URI   full connection string (overrides the cluster settings)\n",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[arg(
        long,
        env = "DB_USER",
        value_name = "USER",
        help = "Cluster user name"
    )]
    pub db_user: Option<String>,

    #[arg(
        long,
        env = "DB_PASS",
        value_name = "PASS",
        hide_env_values = true,
        help = "Cluster password"
    )]
    pub db_pass: Option<String>,

    #[arg(
        long,
        default_value_t = false,
        help = "Prompt for the cluster password instead of reading DB_PASS"
    )]
    pub ask_pass: bool,

    #[arg(
        long,
        env = "LISTINGS_CLUSTER_HOST",
        default_value = DEFAULT_CLUSTER_HOST,
        value_name = "HOST",
        help = "Atlas cluster host (SRV record)"
    )]
    pub cluster_host: String,

    #[arg(
        long,
        default_value = DEFAULT_AUTH_DATABASE,
        value_name = "NAME",
        help = "Default database in the connection string"
    )]
    pub auth_database: String,

    #[arg(
        long,
        env = "MONGODB_URI",
        value_name = "URI",
        hide_env_values = true,
        help = "Full connection string; overrides host and credentials"
    )]
    pub uri: Option<String>,

    #[arg(
        long,
        env = "LISTINGS_DATABASE",
        default_value = DEFAULT_DATABASE,
        value_name = "NAME",
        help = "Database holding the listings"
    )]
    pub database: String,

    #[arg(
        long,
        env = "LISTINGS_COLLECTION",
        default_value = DEFAULT_COLLECTION,
        value_name = "NAME",
        help = "Listings collection"
    )]
    pub collection: String,

    #[arg(
        long = "log-file",
        env = "LISTINGS_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub cmd: Command,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    match dotenvy::from_filename(&dotenv_path) {
        Ok(_) => log::debug!("loaded env from {}", dotenv_path),
        Err(e) => log::debug!("no env file at {}: {}", dotenv_path, e),
    }
    Cli::parse()
}
