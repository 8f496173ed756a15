use async_graphql::{ComplexObject, Context, Result, SimpleObject};
use sea_orm::entity::prelude::*;

use super::wallets;
use crate::AppContext;

/// A marketplace account.
/// # Description
/// A user is identified by the wallets linked to it. The first wallet linked during sign up is the primary wallet.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, SimpleObject)]
#[sea_orm(table_name = "users")]
#[graphql(name = "User", complex)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub display_name: Option<String>,
    pub username: Option<String>,
    #[graphql(name = "avatar_url")]
    pub avatar_url: Option<String>,
    #[graphql(name = "about_details")]
    #[sea_orm(column_type = "Text", nullable)]
    pub about_details: Option<String>,
    #[graphql(name = "bg_image")]
    pub bg_image: Option<String>,
    pub twitter_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    /// Set by marketplace administrators once the account has been verified.
    pub is_verify: bool,
    pub user_badge: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[ComplexObject]
impl Model {
    /// The wallets linked to the user.
    async fn wallets(&self, ctx: &Context<'_>) -> Result<Vec<wallets::Model>> {
        let AppContext {
            user_wallets_loader,
            ..
        } = ctx.data::<AppContext>()?;

        Ok(user_wallets_loader
            .load_one(self.id)
            .await?
            .unwrap_or_default())
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::wallets::Entity")]
    Wallets,
}

impl Related<super::wallets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wallets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
