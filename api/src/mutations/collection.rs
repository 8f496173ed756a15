use async_graphql::{Context, Object, Result, ResultExt};
use chrono::Utc;
use sea_orm::{prelude::*, Set};

use super::{patch, patch_nullable};
use crate::{
    entities::{collections, prelude::Collections},
    error::ApiError,
    objects::{CreateCollectionInput, UpdateCollectionInput},
    AppContext,
};

#[derive(Default)]
pub struct Mutation;

#[Object(name = "CollectionMutation")]
impl Mutation {
    /// Res
    ///
    /// # Errors
    /// This function fails if the collection cannot be inserted
    pub async fn create_collection(
        &self,
        ctx: &Context<'_>,
        input: CreateCollectionInput,
    ) -> Result<collections::Model> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        let CreateCollectionInput {
            name,
            symbol,
            description,
            collection_address,
            creator_address,
            network,
            chain_id,
            image_url,
            banner_url,
            category,
        } = input;

        let now: DateTimeWithTimeZone = Utc::now().into();

        collections::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            symbol: Set(symbol),
            description: Set(description),
            collection_address: Set(collection_address),
            creator_address: Set(creator_address),
            network: Set(network),
            chain_id: Set(chain_id),
            image_url: Set(image_url),
            banner_url: Set(banner_url),
            category: Set(category),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db.get())
        .await
        .map_err(ApiError::from)
        .extend()
    }

    /// Changes the supplied collection fields and leaves the rest untouched.
    ///
    /// # Errors
    /// This function fails if the collection does not exist or the update fails
    pub async fn update_collection(
        &self,
        ctx: &Context<'_>,
        input: UpdateCollectionInput,
    ) -> Result<collections::Model> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        let UpdateCollectionInput {
            id,
            name,
            symbol,
            description,
            image_url,
            banner_url,
            category,
        } = input;

        let mut collection: collections::ActiveModel =
            find_collection(db.get(), id).await.extend()?.into();
        patch(&mut collection.name, name);
        patch_nullable(&mut collection.symbol, symbol);
        patch_nullable(&mut collection.description, description);
        patch_nullable(&mut collection.image_url, image_url);
        patch_nullable(&mut collection.banner_url, banner_url);
        patch_nullable(&mut collection.category, category);
        collection.updated_at = Set(Utc::now().into());

        collection
            .update(db.get())
            .await
            .map_err(ApiError::from)
            .extend()
    }

    /// Res
    ///
    /// # Errors
    /// This function fails if the collection does not exist or the delete fails
    pub async fn delete_collection(&self, ctx: &Context<'_>, id: Uuid) -> Result<collections::Model> {
        let AppContext { db, .. } = ctx.data::<AppContext>()?;

        let collection = find_collection(db.get(), id).await.extend()?;

        Collections::delete_by_id(collection.id)
            .exec(db.get())
            .await
            .map_err(ApiError::from)
            .extend()?;

        Ok(collection)
    }
}

async fn find_collection(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<collections::Model, ApiError> {
    Collections::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("collection"))
}
