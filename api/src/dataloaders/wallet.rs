use std::collections::HashMap;

use async_graphql::{dataloader::Loader as DataLoader, FieldError, Result};
use poem::async_trait;
use sea_orm::{prelude::*, QueryOrder};

use crate::{db::Connection, entities::wallets};

/// Loads the wallets linked to each user, primary wallet first.
#[derive(Debug, Clone)]
pub struct UserWalletsLoader {
    pub db: Connection,
}

impl UserWalletsLoader {
    #[must_use]
    pub fn new(db: Connection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DataLoader<Uuid> for UserWalletsLoader {
    type Error = FieldError;
    type Value = Vec<wallets::Model>;

    async fn load(&self, keys: &[Uuid]) -> Result<HashMap<Uuid, Self::Value>, Self::Error> {
        let wallets = wallets::Entity::find()
            .filter(wallets::Column::UserId.is_in(keys.iter().map(ToOwned::to_owned)))
            .order_by_desc(wallets::Column::IsPrimary)
            .order_by_asc(wallets::Column::CreatedAt)
            .all(self.db.get())
            .await?;

        Ok(wallets.into_iter().fold(HashMap::new(), |mut acc, wallet| {
            acc.entry(wallet.user_id)
                .or_insert_with(Vec::new)
                .push(wallet);
            acc
        }))
    }
}
