use async_graphql::SimpleObject;
use sea_orm::entity::prelude::*;

/// A token listed on the marketplace.
/// # Description
/// An NFT is identified on chain by its token id, collection address and network. Lazy minted NFTs carry their
/// deferred mint payload in `lazyMintData` until the token is minted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, SimpleObject)]
#[sea_orm(table_name = "nfts")]
#[graphql(name = "Nft")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: Option<String>,
    pub token_id: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub chain_id: Option<i32>,
    pub network: Option<String>,
    pub lazy_mint: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub lazy_mint_data: Option<String>,
    pub nft_status: Option<String>,
    pub collection_address: Option<String>,
    pub creator_address: Option<String>,
    pub owner_address: Option<String>,
    pub collections: Option<String>,
    pub teams: Option<String>,
    pub athlete: Option<String>,
    pub musician: Option<String>,
    pub artist: Option<String>,
    pub is_market_place: bool,
    pub is_auction: bool,
    pub is_approved: bool,
    #[sea_orm(column_type = "Double", nullable)]
    pub price: Option<f64>,
    pub supply: Option<i32>,
    pub minted_nft: Option<i32>,
    pub available_supply: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
