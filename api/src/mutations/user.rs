use async_graphql::{Context, Object, Result, ResultExt};
use chrono::Utc;
use sea_orm::{prelude::*, Set};

use super::{patch, patch_nullable};
use crate::{
    accounts,
    entities::{prelude::Users, users, wallets},
    error::ApiError,
    objects::{LinkWalletInput, SignUpInput, UpdateUserBadgeInput, UpdateUserInput},
    AppContext,
};

#[derive(Default)]
pub struct Mutation;

#[Object(name = "UserMutation")]
impl Mutation {
    /// Creates a user and its primary wallet.
    ///
    /// # Errors
    /// This function fails if the wallet address is already linked to a user or the store writes fail
    pub async fn sign_up(&self, ctx: &Context<'_>, input: SignUpInput) -> Result<users::Model> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        accounts::sign_up(db.get(), input).await.extend()
    }

    /// Links an additional wallet to an existing user.
    ///
    /// # Errors
    /// This function fails if the user does not exist, the wallet address is already linked or the store writes fail
    pub async fn link_wallet(
        &self,
        ctx: &Context<'_>,
        input: LinkWalletInput,
    ) -> Result<wallets::Model> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        accounts::link_wallet(db.get(), input).await.extend()
    }

    /// Res
    ///
    /// # Errors
    /// This function fails if the user does not exist or the update fails
    pub async fn update_user(&self, ctx: &Context<'_>, input: UpdateUserInput) -> Result<users::Model> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        let UpdateUserInput {
            user_id,
            display_name,
            username,
            avatar_url,
            about_details,
            bg_image,
            twitter_url,
            facebook_url,
            instagram_url,
            is_verify,
        } = input;

        let mut user: users::ActiveModel = find_user(db.get(), user_id).await.extend()?.into();
        patch_nullable(&mut user.display_name, display_name);
        patch_nullable(&mut user.username, username);
        patch_nullable(&mut user.avatar_url, avatar_url);
        patch_nullable(&mut user.about_details, about_details);
        patch_nullable(&mut user.bg_image, bg_image);
        patch_nullable(&mut user.twitter_url, twitter_url);
        patch_nullable(&mut user.facebook_url, facebook_url);
        patch_nullable(&mut user.instagram_url, instagram_url);
        patch(&mut user.is_verify, is_verify);

        touch_and_update(db.get(), user).await.extend()
    }

    /// Res
    ///
    /// # Errors
    /// This function fails if the user does not exist or the update fails
    pub async fn update_user_badge(
        &self,
        ctx: &Context<'_>,
        input: UpdateUserBadgeInput,
    ) -> Result<users::Model> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        let UpdateUserBadgeInput {
            user_id,
            is_verify,
            user_badge,
        } = input;

        let mut user: users::ActiveModel = find_user(db.get(), user_id).await.extend()?.into();
        patch(&mut user.is_verify, is_verify);
        patch_nullable(&mut user.user_badge, user_badge);

        touch_and_update(db.get(), user).await.extend()
    }
}

async fn find_user(db: &DatabaseConnection, id: Uuid) -> Result<users::Model, ApiError> {
    Users::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("user"))
}

async fn touch_and_update(
    db: &DatabaseConnection,
    mut user: users::ActiveModel,
) -> Result<users::Model, ApiError> {
    user.updated_at = Set(Utc::now().into());

    Ok(user.update(db).await?)
}
