#![allow(clippy::unused_async)]

mod activity;
mod collection;
mod nft;
mod user;

use async_graphql::MaybeUndefined;
use sea_orm::{ActiveValue, Set, Value};

// // Add your other ones here to create a unified Mutation object
#[derive(async_graphql::MergedObject, Default)]
pub struct Mutation(
    nft::Mutation,
    user::Mutation,
    collection::Mutation,
    activity::Mutation,
);

/// Overwrites `field` only when a replacement was supplied.
fn patch<V: Into<Value>>(field: &mut ActiveValue<V>, value: Option<V>) {
    if let Some(value) = value {
        *field = Set(value);
    }
}

/// Applies a nullable field: an omitted value keeps the stored one and an explicit `null` clears it.
fn patch_nullable<V>(field: &mut ActiveValue<Option<V>>, value: MaybeUndefined<V>)
where
    Option<V>: Into<Value>,
{
    match value {
        MaybeUndefined::Undefined => {},
        MaybeUndefined::Null => *field = Set(None),
        MaybeUndefined::Value(value) => *field = Set(Some(value)),
    }
}
