use async_graphql::{InputObject, MaybeUndefined};
use sea_orm::prelude::Uuid;

#[derive(InputObject, Clone, Debug, Default)]
pub struct CreateCollectionInput {
    pub name: String,
    pub symbol: Option<String>,
    pub description: Option<String>,
    pub collection_address: Option<String>,
    pub creator_address: Option<String>,
    pub network: Option<String>,
    pub chain_id: Option<i32>,
    pub image_url: Option<String>,
    pub banner_url: Option<String>,
    pub category: Option<String>,
}

/// Collection fields to change. Omitted fields keep their current value and `null` clears a field.
#[derive(InputObject, Clone, Debug)]
pub struct UpdateCollectionInput {
    pub id: Uuid,
    pub name: Option<String>,
    pub symbol: MaybeUndefined<String>,
    pub description: MaybeUndefined<String>,
    pub image_url: MaybeUndefined<String>,
    pub banner_url: MaybeUndefined<String>,
    pub category: MaybeUndefined<String>,
}
