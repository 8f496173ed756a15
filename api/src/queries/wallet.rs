use async_graphql::{Context, Object, Result, ResultExt};
use sea_orm::{prelude::*, QueryOrder};

use crate::{
    accounts,
    entities::{prelude::Wallets, wallets},
    error::ApiError,
    AppContext,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Query;

#[Object(name = "WalletQuery")]
impl Query {
    /// Res
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn wallets(&self, ctx: &Context<'_>) -> Result<Vec<wallets::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        Wallets::find()
            .order_by_asc(wallets::Column::CreatedAt)
            .all(db.get())
            .await
            .map_err(ApiError::from)
            .extend()
    }

    /// Res
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn wallet(&self, ctx: &Context<'_>, address: String) -> Result<Option<wallets::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        accounts::find_wallet(db.get(), &address).await.extend()
    }
}
