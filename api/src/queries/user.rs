use async_graphql::{Context, Object, Result, ResultExt};
use sea_orm::{prelude::*, QueryOrder};

use crate::{
    accounts,
    entities::{prelude::Users, users, wallets},
    error::ApiError,
    AppContext,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Query;

#[Object(name = "UserQuery")]
impl Query {
    /// Every user along with their wallets.
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<users::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        Users::find()
            .order_by_asc(users::Column::CreatedAt)
            .all(db.get())
            .await
            .map_err(ApiError::from)
            .extend()
    }

    /// The wallet with the given address. Select `user` on the result to reach the owning account.
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn user(
        &self,
        ctx: &Context<'_>,
        wallet_address: String,
    ) -> Result<Option<wallets::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        accounts::find_wallet(db.get(), &wallet_address)
            .await
            .extend()
    }

    /// Res
    ///
    /// # Errors
    /// This function fails if the store query fails
    async fn sign_in(
        &self,
        ctx: &Context<'_>,
        wallet_address: String,
    ) -> Result<Option<wallets::Model>> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        accounts::find_wallet(db.get(), &wallet_address)
            .await
            .extend()
    }
}
