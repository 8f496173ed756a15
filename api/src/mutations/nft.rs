use async_graphql::{Context, Object, Result, ResultExt};
use chrono::Utc;
use hub_core::prelude::*;
use sea_orm::{prelude::*, Set};

use super::{patch, patch_nullable};
use crate::{
    entities::{nfts, prelude::Nfts},
    error::ApiError,
    objects::{
        CreateNftInput, LazyMintUpdateInput, MintedNftUpdateInput, PutOnSaleInput,
        UpdateNftApproveInput,
    },
    AppContext,
};

#[derive(Default)]
pub struct Mutation;

#[Object(name = "NftMutation")]
impl Mutation {
    /// Res
    ///
    /// # Errors
    /// This function fails if the NFT cannot be inserted
    pub async fn create_nft(&self, ctx: &Context<'_>, input: CreateNftInput) -> Result<nfts::Model> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        let CreateNftInput {
            name,
            token_id,
            url,
            image_url,
            chain_id,
            network,
            nft_status,
            lazy_mint,
            lazy_mint_data,
            is_auction,
            collection_address,
            creator_address,
            owner_address,
            collections,
            teams,
            athlete,
            musician,
            artist,
            supply,
            available_supply,
            minted_nft,
            price,
            is_market_place,
        } = input;

        let now: DateTimeWithTimeZone = Utc::now().into();

        let nft = nfts::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            token_id: Set(token_id),
            url: Set(url),
            image_url: Set(image_url),
            chain_id: Set(chain_id),
            network: Set(network),
            lazy_mint: Set(lazy_mint),
            lazy_mint_data: Set(lazy_mint_data),
            nft_status: Set(nft_status),
            collection_address: Set(collection_address),
            creator_address: Set(creator_address),
            owner_address: Set(owner_address),
            collections: Set(collections),
            teams: Set(teams),
            athlete: Set(athlete),
            musician: Set(musician),
            artist: Set(artist),
            is_market_place: Set(is_market_place.unwrap_or_default()),
            is_auction: Set(is_auction.unwrap_or_default()),
            is_approved: Set(false),
            price: Set(price),
            supply: Set(supply),
            minted_nft: Set(minted_nft),
            available_supply: Set(available_supply),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db.get())
        .await
        .map_err(ApiError::from)
        .extend()?;

        debug!(nft_id = %nft.id, "nft created");

        Ok(nft)
    }

    /// Changes the sale state of the NFT identified by its token id and collection address.
    ///
    /// # Errors
    /// This function fails if no NFT matches or the update fails
    pub async fn put_on_sale(&self, ctx: &Context<'_>, input: PutOnSaleInput) -> Result<nfts::Model> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        let PutOnSaleInput {
            collection_address,
            token_id,
            is_market_place,
            nft_status,
            price,
            owner_address,
        } = input;

        let nft = Nfts::find()
            .filter(nfts::Column::TokenId.eq(token_id))
            .filter(nfts::Column::CollectionAddress.eq(collection_address))
            .one(db.get())
            .await
            .map_err(ApiError::from)
            .extend()?
            .ok_or(ApiError::NotFound("nft"))
            .extend()?;

        let mut nft: nfts::ActiveModel = nft.into();
        patch(&mut nft.is_market_place, is_market_place);
        patch_nullable(&mut nft.price, price);
        patch_nullable(&mut nft.nft_status, nft_status);
        patch_nullable(&mut nft.owner_address, owner_address);

        touch_and_update(db.get(), nft).await.extend()
    }

    /// Res
    ///
    /// # Errors
    /// This function fails if the NFT does not exist or the update fails
    pub async fn lazy_mint_update(
        &self,
        ctx: &Context<'_>,
        input: LazyMintUpdateInput,
    ) -> Result<nfts::Model> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        let LazyMintUpdateInput {
            id,
            token_id,
            is_market_place,
            nft_status,
            price,
            owner_address,
            lazy_mint_data,
            lazy_mint,
        } = input;

        let mut nft: nfts::ActiveModel = find_nft(db.get(), id).await.extend()?.into();
        patch_nullable(&mut nft.token_id, token_id);
        patch(&mut nft.is_market_place, is_market_place);
        patch_nullable(&mut nft.nft_status, nft_status);
        patch_nullable(&mut nft.price, price);
        patch_nullable(&mut nft.owner_address, owner_address);
        patch_nullable(&mut nft.lazy_mint_data, lazy_mint_data);
        patch_nullable(&mut nft.lazy_mint, lazy_mint);

        touch_and_update(db.get(), nft).await.extend()
    }

    /// Res
    ///
    /// # Errors
    /// This function fails if the NFT does not exist or the update fails
    pub async fn minted_nft_update(
        &self,
        ctx: &Context<'_>,
        input: MintedNftUpdateInput,
    ) -> Result<nfts::Model> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        let MintedNftUpdateInput {
            nft_id,
            minted_nft,
            available_supply,
        } = input;

        let mut nft: nfts::ActiveModel = find_nft(db.get(), nft_id).await.extend()?.into();
        patch_nullable(&mut nft.minted_nft, minted_nft);
        patch_nullable(&mut nft.available_supply, available_supply);

        touch_and_update(db.get(), nft).await.extend()
    }

    /// Removes the NFT and returns it as it was before deletion.
    ///
    /// # Errors
    /// This function fails if the NFT does not exist or the delete fails
    pub async fn delete_nft(&self, ctx: &Context<'_>, id: Uuid) -> Result<nfts::Model> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        let nft = find_nft(db.get(), id).await.extend()?;

        Nfts::delete_by_id(nft.id)
            .exec(db.get())
            .await
            .map_err(ApiError::from)
            .extend()?;

        debug!(nft_id = %nft.id, "nft deleted");

        Ok(nft)
    }

    /// Res
    ///
    /// # Errors
    /// This function fails if the NFT does not exist or the update fails
    pub async fn update_nft_approve(
        &self,
        ctx: &Context<'_>,
        input: UpdateNftApproveInput,
    ) -> Result<nfts::Model> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        let UpdateNftApproveInput { id, is_approved } = input;

        let mut nft: nfts::ActiveModel = find_nft(db.get(), id).await.extend()?.into();
        nft.is_approved = Set(is_approved);

        touch_and_update(db.get(), nft).await.extend()
    }
}

async fn find_nft(db: &DatabaseConnection, id: Uuid) -> Result<nfts::Model, ApiError> {
    Nfts::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("nft"))
}

async fn touch_and_update(
    db: &DatabaseConnection,
    mut nft: nfts::ActiveModel,
) -> Result<nfts::Model, ApiError> {
    nft.updated_at = Set(Utc::now().into());

    Ok(nft.update(db).await?)
}
