#![allow(clippy::unused_async)]

mod activity;
mod collection;
mod nft;
mod user;
mod wallet;

// // Add your other ones here to create a unified Query object
#[derive(async_graphql::MergedObject, Default)]
pub struct Query(
    nft::Query,
    user::Query,
    wallet::Query,
    collection::Query,
    activity::Query,
);
