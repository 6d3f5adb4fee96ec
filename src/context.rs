use std::path::PathBuf;

use crate::configuration::{Configuration, Target};
use crate::error::{ListingsError, Result};

pub struct Context {
    pub config: Configuration,
}

impl Context {
    /// `prompted_pass` wins over the `--db-pass`/`DB_PASS` value when present.
    pub fn from_cli(cli: &crate::cli::Cli, prompted_pass: Option<String>) -> Result<Self> {
        let target = match &cli.uri {
            Some(uri) => Target::Uri(uri.clone()),
            None => {
                let user = cli
                    .db_user
                    .clone()
                    .ok_or(ListingsError::MissingCredential("DB_USER"))?;
                let pass = prompted_pass
                    .or_else(|| cli.db_pass.clone())
                    .ok_or(ListingsError::MissingCredential("DB_PASS"))?;
                Target::Cluster {
                    host: cli.cluster_host.clone(),
                    auth_database: cli.auth_database.clone(),
                    user,
                    pass,
                }
            }
        };

        let cfg = Configuration {
            target,
            database: cli.database.clone(),
            collection: cli.collection.clone(),
            log_file: cli.log_file.as_ref().map(PathBuf::from),
        };
        Ok(Self { config: cfg })
    }
}
