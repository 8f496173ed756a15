#![deny(clippy::disallowed_methods, clippy::suspicious, clippy::style)]
#![warn(clippy::pedantic, clippy::cargo)]
#![allow(clippy::module_name_repetitions)]

pub mod accounts;
pub mod dataloaders;
pub mod db;
#[allow(clippy::pedantic)]
pub mod entities;
pub mod error;
pub mod handlers;
pub mod listing;
pub mod mutations;
pub mod objects;
pub mod queries;

use async_graphql::{
    dataloader::DataLoader,
    extensions::{ApolloTracing, Logger},
    EmptySubscription, Schema,
};
use dataloaders::{UserLoader, UserWalletsLoader};
use db::Connection;
use handlers::{graphql_handler, health, playground};
use hub_core::{clap, tokio};
use mutations::Mutation;
use poem::{
    get,
    middleware::{AddData, Cors},
    post, Endpoint, EndpointExt, Route,
};
use queries::Query;

pub type AppSchema = Schema<Query, Mutation, EmptySubscription>;

#[derive(Debug, clap::Args)]
#[command(version, author, about)]
pub struct Args {
    #[arg(short, long, env, default_value_t = 3008)]
    pub port: u16,

    /// Apply pending migrations before serving requests
    #[arg(long, env, default_value_t = false)]
    pub migrate: bool,

    /// Origins allowed to call the API from a browser. Every origin is allowed when none are given
    #[arg(long, env, value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    #[command(flatten)]
    pub db: db::DbArgs,
}

#[derive(Clone)]
pub struct AppState {
    pub schema: AppSchema,
    pub connection: Connection,
}

impl AppState {
    #[must_use]
    pub fn new(schema: AppSchema, connection: Connection) -> Self {
        Self { schema, connection }
    }
}

/// Per-request resolver context: the store handle plus relation loaders scoped to the request.
pub struct AppContext {
    pub db: Connection,
    pub user_loader: DataLoader<UserLoader>,
    pub user_wallets_loader: DataLoader<UserWalletsLoader>,
}

impl AppContext {
    #[must_use]
    pub fn new(db: Connection) -> Self {
        let user_loader = DataLoader::new(UserLoader::new(db.clone()), tokio::spawn);
        let user_wallets_loader = DataLoader::new(UserWalletsLoader::new(db.clone()), tokio::spawn);

        Self {
            db,
            user_loader,
            user_wallets_loader,
        }
    }
}

/// Builds the GraphQL Schema. The database is attached per request through [`AppContext`].
#[must_use]
pub fn build_schema() -> AppSchema {
    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .extension(ApolloTracing)
        .extension(Logger)
        .finish()
}

/// The service's HTTP routes, wrapped in CORS handling for browser clients.
///
/// An empty `cors_origins` allows every origin.
#[must_use]
pub fn app(state: AppState, cors_origins: &[String]) -> impl Endpoint {
    let cors = cors_origins
        .iter()
        .fold(Cors::new(), |cors, origin| cors.allow_origin(origin.as_str()));

    Route::new()
        .at("/graphql", post(graphql_handler).with(AddData::new(state)))
        .at("/playground", get(playground))
        .at("/health", get(health))
        .with(cors)
}
