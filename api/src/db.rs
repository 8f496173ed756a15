use std::time::Duration;

use hub_core::{anyhow::Result, clap, prelude::*};
pub use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Arguments for establishing a database connection
#[derive(Debug, clap::Args)]
pub struct DbArgs {
    #[arg(long, env, default_value_t = 25)]
    pub database_max_connections: u32,
    #[arg(long, env, default_value_t = 5)]
    pub database_min_connections: u32,
    /// Seconds to wait for a connection before giving up
    #[arg(long, env, default_value_t = 10)]
    pub database_connect_timeout: u64,
    /// Seconds a pooled connection may sit idle before it is closed
    #[arg(long, env, default_value_t = 300)]
    pub database_idle_timeout: u64,
    #[arg(long, env)]
    pub database_url: String,
}

#[derive(Clone, Debug)]
pub struct Connection(DatabaseConnection);

impl Connection {
    /// Res
    ///
    /// # Errors
    /// This function fails if the database url is invalid or the pool cannot reach the database
    pub async fn new(args: DbArgs) -> Result<Self> {
        let DbArgs {
            database_max_connections,
            database_min_connections,
            database_connect_timeout,
            database_idle_timeout,
            database_url,
        } = args;

        let options = ConnectOptions::new(database_url)
            .max_connections(database_max_connections)
            .min_connections(database_min_connections)
            .connect_timeout(Duration::from_secs(database_connect_timeout))
            .idle_timeout(Duration::from_secs(database_idle_timeout))
            .sqlx_logging(true)
            .to_owned();

        let db = Database::connect(options)
            .await
            .context("failed to get database connection")?;

        Ok(Self(db))
    }

    /// Wraps an already established connection, e.g. one opened against a scratch database.
    #[must_use]
    pub fn from_database(db: DatabaseConnection) -> Self {
        Self(db)
    }

    #[must_use]
    pub fn get(&self) -> &DatabaseConnection {
        &self.0
    }
}
