use std::path::PathBuf;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use url::Url;

use crate::error::{ListingsError, Result};

pub const DEFAULT_CLUSTER_HOST: &str = "postman.dyh9i.mongodb.net";
pub const DEFAULT_AUTH_DATABASE: &str = "myFirstDatabase";
pub const DEFAULT_DATABASE: &str = "sample_airbnb";
pub const DEFAULT_COLLECTION: &str = "listingsAndReviews";

/// Where the client connects to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// A complete connection string, used as given.
    Uri(String),
    /// An Atlas cluster reached with user/password credentials.
    Cluster {
        host: String,
        auth_database: String,
        user: String,
        pass: String,
    },
}

#[derive(Clone, Debug)]
pub struct Configuration {
    pub target: Target,
    pub database: String,
    pub collection: String,
    pub log_file: Option<PathBuf>,
}

impl Configuration {
    /// Build the driver connection string. Credentials are percent-encoded into
    /// the userinfo part.
    pub fn connection_uri(&self) -> Result<String> {
        match &self.target {
            Target::Uri(uri) => Ok(uri.clone()),
            Target::Cluster {
                host,
                auth_database,
                user,
                pass,
            } => {
                let base = format!(
                    "mongodb+srv://{host}/{auth_database}?retryWrites=true&w=majority"
                );
                let mut url = Url::parse(&base)
                    .map_err(|e| ListingsError::InvalidConnection(format!("{base}: {e}")))?;
                // The setters leave `%` alone, so encode everything up front.
                let user = utf8_percent_encode(user, NON_ALPHANUMERIC).to_string();
                let pass = utf8_percent_encode(pass, NON_ALPHANUMERIC).to_string();
                url.set_username(&user).map_err(|_| {
                    ListingsError::InvalidConnection(format!("cannot set user on {host}"))
                })?;
                url.set_password(Some(&pass)).map_err(|_| {
                    ListingsError::InvalidConnection(format!("cannot set password on {host}"))
                })?;
                Ok(url.to_string())
            }
        }
    }

    /// Human readable target, safe to log.
    pub fn describe_target(&self) -> String {
        match &self.target {
            Target::Uri(_) => "custom connection string".to_string(),
            Target::Cluster { host, user, .. } => format!("{user}@{host}"),
        }
    }

    pub fn namespace(&self) -> String {
        format!("{}.{}", self.database, self.collection)
    }
}
