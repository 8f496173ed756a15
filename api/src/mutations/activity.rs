use async_graphql::{Context, Object, Result, ResultExt};
use chrono::Utc;
use sea_orm::{prelude::*, Set};

use crate::{
    entities::{nft_activities, prelude::NftActivities},
    error::ApiError,
    objects::CreateNftActivityInput,
    AppContext,
};

#[derive(Default)]
pub struct Mutation;

#[Object(name = "NftActivityMutation")]
impl Mutation {
    /// Appends an entry to the activity log.
    ///
    /// # Errors
    /// This function fails if the entry cannot be inserted
    pub async fn create_nft_activity(
        &self,
        ctx: &Context<'_>,
        input: CreateNftActivityInput,
    ) -> Result<nft_activities::Model> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        let CreateNftActivityInput {
            nft_id,
            token_id,
            collection_address,
            network,
            event,
            from_address,
            to_address,
            price,
            tx_hash,
        } = input;

        nft_activities::ActiveModel {
            id: Set(Uuid::new_v4()),
            nft_id: Set(nft_id),
            token_id: Set(token_id),
            collection_address: Set(collection_address),
            network: Set(network),
            event: Set(event),
            from_address: Set(from_address),
            to_address: Set(to_address),
            price: Set(price),
            tx_hash: Set(tx_hash),
            created_at: Set(Utc::now().into()),
        }
        .insert(db.get())
        .await
        .map_err(ApiError::from)
        .extend()
    }

    /// Res
    ///
    /// # Errors
    /// This function fails if the entry does not exist or the delete fails
    pub async fn delete_nft_activity(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
    ) -> Result<nft_activities::Model> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        let activity = NftActivities::find_by_id(id)
            .one(db.get())
            .await
            .map_err(ApiError::from)
            .extend()?
            .ok_or(ApiError::NotFound("nft activity"))
            .extend()?;

        NftActivities::delete_by_id(activity.id)
            .exec(db.get())
            .await
            .map_err(ApiError::from)
            .extend()?;

        Ok(activity)
    }
}
