use async_graphql::{Enum, SimpleObject};
use sea_orm::entity::prelude::*;

/// The kind of event recorded against an NFT.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum ActivityEvent {
    #[graphql(name = "MINTED")]
    #[sea_orm(string_value = "minted")]
    Minted,
    #[graphql(name = "LISTED")]
    #[sea_orm(string_value = "listed")]
    Listed,
    #[graphql(name = "DELISTED")]
    #[sea_orm(string_value = "delisted")]
    Delisted,
    #[graphql(name = "SALE")]
    #[sea_orm(string_value = "sale")]
    Sale,
    #[graphql(name = "TRANSFER")]
    #[sea_orm(string_value = "transfer")]
    Transfer,
    #[graphql(name = "BID")]
    #[sea_orm(string_value = "bid")]
    Bid,
}

/// An entry in the append-only NFT activity log.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, SimpleObject)]
#[sea_orm(table_name = "nft_activities")]
#[graphql(name = "NftActivity")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nft_id: Option<Uuid>,
    pub token_id: Option<String>,
    pub collection_address: Option<String>,
    pub network: Option<String>,
    pub event: ActivityEvent,
    pub from_address: Option<String>,
    pub to_address: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub price: Option<f64>,
    pub tx_hash: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
