use async_graphql::{Context, Object, Result, ResultExt};
use sea_orm::{prelude::*, QueryOrder};

use crate::{
    entities::{collections, prelude::Collections},
    error::ApiError,
    AppContext,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Query;

#[Object(name = "CollectionQuery")]
impl Query {
    /// Res
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn collections(&self, ctx: &Context<'_>) -> Result<Vec<collections::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        Collections::find()
            .order_by_asc(collections::Column::CreatedAt)
            .all(db.get())
            .await
            .map_err(ApiError::from)
            .extend()
    }

    /// Res
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn collection(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<collections::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        Collections::find_by_id(id)
            .one(db.get())
            .await
            .map_err(ApiError::from)
            .extend()
    }

    /// Collections created by the given address.
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn get_collections_of_user(
        &self,
        ctx: &Context<'_>,
        creator_address: String,
    ) -> Result<Vec<collections::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        Collections::find()
            .filter(collections::Column::CreatorAddress.eq(creator_address))
            .order_by_asc(collections::Column::CreatedAt)
            .all(db.get())
            .await
            .map_err(ApiError::from)
            .extend()
    }

    /// The collection deployed at `collection_address`, optionally narrowed to one network.
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn get_collection_by_address(
        &self,
        ctx: &Context<'_>,
        collection_address: String,
        network: Option<String>,
    ) -> Result<Option<collections::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        let mut query = Collections::find()
            .filter(collections::Column::CollectionAddress.eq(collection_address));

        if let Some(network) = network {
            query = query.filter(collections::Column::Network.eq(network));
        }

        query.one(db.get()).await.map_err(ApiError::from).extend()
    }
}
