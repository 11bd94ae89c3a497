//! # Database connection module
//!
//! Owns the MongoDB client for the lifetime of the process and hands out the
//! `weatherData` database handle.
//!
//! ## Usage
//!
//! The `Connector` is built once at startup and placed in Rocket's managed
//! state, so request handlers receive it through the `&State<Connector>` guard.
//!
//! ```rust,ignore
//! use rocket::State;
//!
//! #[get("/")]
//! async fn handler(connector: &State<Connector>) -> &'static str {
//!     let _stations = connector.database().collection::<Document>("stations");
//!     "Hello"
//! }
//! ```

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::{error, info};

use crate::config::{APP_NAME, Config, DATABASE_NAME};
use crate::errors::ConnectError;

/// A connected client and the database selected from it.
///
/// Only [`Connector::initialize`] produces one, so holding a `Connector` means
/// the cluster answered at least once.
#[derive(Debug)]
pub struct Connector {
    client: Client,
    database: Database,
}

impl Connector {
    /// Connects to the cluster named by `config` and selects the database.
    ///
    /// The URI is handed to the driver as-is. Every failure is logged here and
    /// returned as [`ConnectError::ConnectionFailure`].
    pub async fn initialize(config: &Config) -> Result<Self, ConnectError> {
        match Self::connect(&config.mongo_uri).await {
            Ok(client) => {
                info!(database = DATABASE_NAME, "Connected to MongoDB Atlas");
                let database = client.database(DATABASE_NAME);
                Ok(Self { client, database })
            }
            Err(e) => {
                error!(error = %e, "Failed to connect to MongoDB Atlas");
                Err(e)
            }
        }
    }

    async fn connect(uri: &str) -> Result<Client, ConnectError> {
        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(client_options)?;

        // the driver connects lazily; ping forces server selection
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        Ok(client)
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Wraps a client that was never pinged. Handler tests only.
    #[cfg(test)]
    pub(crate) async fn unverified(uri: &str) -> Self {
        let client_options = ClientOptions::parse(uri).await.unwrap();
        let client = Client::with_options(client_options).unwrap();
        let database = client.database(DATABASE_NAME);
        Self { client, database }
    }
}
