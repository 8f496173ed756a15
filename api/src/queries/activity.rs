use async_graphql::{Context, Object, Result, ResultExt};
use sea_orm::{prelude::*, Condition, QueryOrder};

use crate::{
    entities::{nft_activities, prelude::NftActivities},
    error::ApiError,
    AppContext,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Query;

#[Object(name = "NftActivityQuery")]
impl Query {
    /// The whole activity log, newest first.
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn nft_activities(&self, ctx: &Context<'_>) -> Result<Vec<nft_activities::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        NftActivities::find()
            .order_by_desc(nft_activities::Column::CreatedAt)
            .all(db.get())
            .await
            .map_err(ApiError::from)
            .extend()
    }

    /// Activity recorded against one NFT, newest first.
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn nft_activities_of_nft(
        &self,
        ctx: &Context<'_>,
        nft_id: Uuid,
    ) -> Result<Vec<nft_activities::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        NftActivities::find()
            .filter(nft_activities::Column::NftId.eq(nft_id))
            .order_by_desc(nft_activities::Column::CreatedAt)
            .all(db.get())
            .await
            .map_err(ApiError::from)
            .extend()
    }

    /// Activity where `address` sent or received the NFT, newest first.
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn nft_activities_of_address(
        &self,
        ctx: &Context<'_>,
        address: String,
    ) -> Result<Vec<nft_activities::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        NftActivities::find()
            .filter(
                Condition::any()
                    .add(nft_activities::Column::FromAddress.eq(address.as_str()))
                    .add(nft_activities::Column::ToAddress.eq(address.as_str())),
            )
            .order_by_desc(nft_activities::Column::CreatedAt)
            .all(db.get())
            .await
            .map_err(ApiError::from)
            .extend()
    }
}
