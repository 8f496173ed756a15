#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use migration::{Migrator, MigratorTrait};
use nft_marketplace_api::{
    build_schema, db::Connection, entities::nfts, AppContext,
};
use sea_orm::{
    prelude::*, ConnectOptions, Database, DatabaseConnection, DbErr, Set,
};

/// Create an in-memory SQLite database for testing
///
/// The pool is capped at one connection so every query sees the same in-memory database.
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let options = ConnectOptions::new("sqlite::memory:".to_string())
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false)
        .to_owned();

    let db = Database::connect(options).await?;

    // Run migrations
    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Executes a GraphQL document against `db` and returns the response.
pub async fn execute(
    db: &DatabaseConnection,
    query: &str,
    variables: serde_json::Value,
) -> async_graphql::Response {
    let context = AppContext::new(Connection::from_database(db.clone()));
    let request = async_graphql::Request::new(query)
        .variables(async_graphql::Variables::from_json(variables))
        .data(context);

    build_schema().execute(request).await
}

/// Executes a GraphQL document that is expected to succeed and returns its data as JSON.
pub async fn execute_ok(
    db: &DatabaseConnection,
    query: &str,
    variables: serde_json::Value,
) -> serde_json::Value {
    let response = execute(db, query, variables).await;

    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );

    response.data.into_json().unwrap()
}

/// The `extensions.code` of the first error in `response`.
pub fn error_code(response: &async_graphql::Response) -> Option<String> {
    let error = response.errors.first()?;
    let code = error.extensions.as_ref()?.get("code")?;

    match code {
        async_graphql::Value::String(code) => Some(code.clone()),
        _ => None,
    }
}

/// Fixed reference point for seeded timestamps.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 10, 1, 12, 0, 0).unwrap()
}

/// Describes an NFT to seed. `minutes` offsets `updated_at` from [`epoch`].
#[derive(Default)]
pub struct NftSeed<'a> {
    pub name: &'a str,
    pub team: Option<&'a str>,
    pub network: Option<&'a str>,
    pub artist: Option<&'a str>,
    pub is_auction: bool,
    pub is_market_place: bool,
    pub minutes: i64,
}

pub async fn seed_nft(db: &DatabaseConnection, seed: NftSeed<'_>) -> nfts::Model {
    let updated_at = epoch() + Duration::minutes(seed.minutes);

    nfts::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(Some(seed.name.to_string())),
        token_id: Set(Some(seed.minutes.to_string())),
        url: Set(None),
        image_url: Set(None),
        chain_id: Set(Some(137)),
        network: Set(seed.network.map(ToString::to_string)),
        lazy_mint: Set(None),
        lazy_mint_data: Set(None),
        nft_status: Set(Some("listed".to_string())),
        collection_address: Set(Some("0xc0ffee".to_string())),
        creator_address: Set(Some("0xcreator".to_string())),
        owner_address: Set(Some("0xowner".to_string())),
        collections: Set(None),
        teams: Set(seed.team.map(ToString::to_string)),
        athlete: Set(None),
        musician: Set(None),
        artist: Set(seed.artist.map(ToString::to_string)),
        is_market_place: Set(seed.is_market_place),
        is_auction: Set(seed.is_auction),
        is_approved: Set(false),
        price: Set(Some(1.5)),
        supply: Set(Some(1)),
        minted_nft: Set(Some(0)),
        available_supply: Set(Some(1)),
        created_at: Set(epoch().into()),
        updated_at: Set(updated_at.into()),
    }
    .insert(db)
    .await
    .unwrap()
}
