use async_graphql::{Context, Object, Result, ResultExt};
use sea_orm::{prelude::*, QueryOrder};

use crate::{
    entities::{nfts, prelude::Nfts},
    error::ApiError,
    listing::{self, NftFilter},
    AppContext,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Query;

#[Object(name = "NftQuery")]
impl Query {
    /// Every NFT, oldest first.
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn nfts(&self, ctx: &Context<'_>) -> Result<Vec<nfts::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        Nfts::find()
            .order_by_asc(nfts::Column::CreatedAt)
            .all(db.get())
            .await
            .map_err(ApiError::from)
            .extend()
    }

    /// One page of the marketplace listing narrowed by the supplied filters.
    ///
    /// Empty filters are ignored. Pages hold at most 8 NFTs and start at 0.
    ///
    /// # Errors
    /// This function fails if the store query fails
    #[allow(clippy::too_many_arguments)]
    async fn filter_nfts(
        &self,
        ctx: &Context<'_>,
        collections: Option<String>,
        team: Option<String>,
        athlete: Option<String>,
        musician: Option<String>,
        artist: Option<String>,
        network: Option<String>,
        nft_status: Option<String>,
        #[graphql(default)] page: u64,
    ) -> Result<Vec<nfts::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        let filter = NftFilter {
            collections,
            team,
            athlete,
            musician,
            artist,
            network,
            nft_status,
        };

        listing::filter_nfts(db.get(), &filter, page).await.extend()
    }

    /// Res
    ///
    /// # Errors
    /// This function fails if the store query fails
    #[graphql(name = "getNFTbyObjectId")]
    async fn get_nft_by_object_id(
        &self,
        ctx: &Context<'_>,
        nft_id: Uuid,
    ) -> Result<Vec<nfts::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        Nfts::find_by_id(nft_id)
            .all(db.get())
            .await
            .map_err(ApiError::from)
            .extend()
    }

    /// Res
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn auction_nfts(&self, ctx: &Context<'_>) -> Result<Vec<nfts::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        Nfts::find()
            .filter(nfts::Column::IsAuction.eq(true))
            .all(db.get())
            .await
            .map_err(ApiError::from)
            .extend()
    }

    /// Auction NFTs currently on the marketplace, most recently updated first.
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn auction_filter_nft(&self, ctx: &Context<'_>) -> Result<Vec<nfts::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        listing::auction_listing(db.get()).await.extend()
    }

    /// NFTs created by the given address.
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn get_nfts_of_user(
        &self,
        ctx: &Context<'_>,
        creator_address: String,
    ) -> Result<Vec<nfts::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        Nfts::find()
            .filter(nfts::Column::CreatorAddress.eq(creator_address))
            .all(db.get())
            .await
            .map_err(ApiError::from)
            .extend()
    }

    /// NFTs currently owned by the given address.
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn get_nfts_of_owner(
        &self,
        ctx: &Context<'_>,
        owner_address: String,
    ) -> Result<Vec<nfts::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        Nfts::find()
            .filter(nfts::Column::OwnerAddress.eq(owner_address))
            .all(db.get())
            .await
            .map_err(ApiError::from)
            .extend()
    }

    /// Res
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn get_single_nft(
        &self,
        ctx: &Context<'_>,
        token_id: String,
        collection_address: String,
        network: String,
    ) -> Result<Vec<nfts::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        Nfts::find()
            .filter(nfts::Column::TokenId.eq(token_id))
            .filter(nfts::Column::CollectionAddress.eq(collection_address))
            .filter(nfts::Column::Network.eq(network))
            .all(db.get())
            .await
            .map_err(ApiError::from)
            .extend()
    }

    /// NFTs whose name contains `key`, ignoring case.
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn search_nfts(&self, ctx: &Context<'_>, key: String) -> Result<Vec<nfts::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        listing::search_nfts(db.get(), &key).await.extend()
    }

    /// Res
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn get_single_nft_by_id(&self, ctx: &Context<'_>, id: Uuid) -> Result<Vec<nfts::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        Nfts::find_by_id(id)
            .all(db.get())
            .await
            .map_err(ApiError::from)
            .extend()
    }
}
