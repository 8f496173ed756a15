use async_graphql::{InputObject, MaybeUndefined};
use sea_orm::prelude::Uuid;

#[derive(InputObject, Clone, Debug, Default)]
pub struct CreateNftInput {
    pub name: Option<String>,
    pub token_id: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub chain_id: Option<i32>,
    pub network: Option<String>,
    pub nft_status: Option<String>,
    pub lazy_mint: Option<String>,
    pub lazy_mint_data: Option<String>,
    pub is_auction: Option<bool>,
    pub collection_address: Option<String>,
    pub creator_address: Option<String>,
    pub owner_address: Option<String>,
    pub collections: Option<String>,
    pub teams: Option<String>,
    pub athlete: Option<String>,
    pub musician: Option<String>,
    pub artist: Option<String>,
    pub supply: Option<i32>,
    pub available_supply: Option<i32>,
    pub minted_nft: Option<i32>,
    pub price: Option<f64>,
    pub is_market_place: Option<bool>,
}

/// Lists (or delists) the NFT identified by its token id and collection address.
#[derive(InputObject, Clone, Debug)]
pub struct PutOnSaleInput {
    pub collection_address: String,
    pub token_id: String,
    pub is_market_place: Option<bool>,
    pub nft_status: MaybeUndefined<String>,
    pub price: MaybeUndefined<f64>,
    pub owner_address: MaybeUndefined<String>,
}

/// Records the outcome of minting a lazy minted NFT.
#[derive(InputObject, Clone, Debug)]
pub struct LazyMintUpdateInput {
    pub id: Uuid,
    pub token_id: MaybeUndefined<String>,
    pub is_market_place: Option<bool>,
    pub nft_status: MaybeUndefined<String>,
    pub price: MaybeUndefined<f64>,
    pub owner_address: MaybeUndefined<String>,
    pub lazy_mint_data: MaybeUndefined<String>,
    pub lazy_mint: MaybeUndefined<String>,
}

#[derive(InputObject, Clone, Debug)]
pub struct MintedNftUpdateInput {
    pub nft_id: Uuid,
    pub minted_nft: MaybeUndefined<i32>,
    pub available_supply: MaybeUndefined<i32>,
}

#[derive(InputObject, Clone, Debug)]
pub struct UpdateNftApproveInput {
    pub id: Uuid,
    pub is_approved: bool,
}
