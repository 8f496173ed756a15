use async_graphql::SimpleObject;
use sea_orm::entity::prelude::*;

/// A named grouping of NFTs minted under one contract.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, SimpleObject)]
#[sea_orm(table_name = "collections")]
#[graphql(name = "Collection")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub symbol: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub collection_address: Option<String>,
    pub creator_address: Option<String>,
    pub network: Option<String>,
    pub chain_id: Option<i32>,
    pub image_url: Option<String>,
    pub banner_url: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
