use async_graphql::{ComplexObject, Context, Result, SimpleObject};
use sea_orm::entity::prelude::*;

use super::users;
use crate::AppContext;

/// A blockchain wallet linked to a marketplace user.
/// # Description
/// A wallet address belongs to exactly one user. Each user has a single primary wallet, the one it signed up with.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, SimpleObject)]
#[sea_orm(table_name = "wallets")]
#[graphql(name = "Wallet", complex)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// The wallet address.
    #[sea_orm(unique)]
    pub address: String,
    pub is_primary: bool,
    #[graphql(skip)]
    pub user_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[ComplexObject]
impl Model {
    /// The user the wallet is linked to.
    async fn user(&self, ctx: &Context<'_>) -> Result<Option<users::Model>> {
        let AppContext { user_loader, .. } = ctx.data::<AppContext>()?;

        user_loader.load_one(self.user_id).await
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "NoAction"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
