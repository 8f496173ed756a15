//! Sign up and wallet linking.
//!
//! A wallet address is linked to at most one user. Both operations check the address and write the new
//! records inside a single transaction. Any failure rolls the transaction back, so no orphaned user or
//! wallet is left behind.

use chrono::Utc;
use hub_core::prelude::*;
use sea_orm::{prelude::*, DatabaseTransaction, Set, TransactionTrait};

use crate::{
    entities::{
        prelude::{Users, Wallets},
        users, wallets,
    },
    error::ApiError,
    objects::{LinkWalletInput, SignUpInput},
};

const WALLET_EXISTS: &str = "wallet already exists";

/// Creates a user together with its primary wallet.
///
/// # Errors
/// This function fails if:
/// * the wallet address is already linked to a user
/// * any store call fails, in which case nothing is persisted
pub async fn sign_up(db: &DatabaseConnection, input: SignUpInput) -> Result<users::Model, ApiError> {
    let txn = db.begin().await?;

    match create_account(&txn, input).await {
        Ok((user, wallet)) => {
            txn.commit().await?;

            info!(user_id = %user.id, wallet_id = %wallet.id, "user signed up");

            Ok(user)
        },
        Err(e) => {
            txn.rollback().await?;

            Err(e)
        },
    }
}

/// Links an additional, non-primary wallet to an existing user.
///
/// The user is looked up before the address is checked, so an unknown user is reported even when the
/// address is also taken.
///
/// # Errors
/// This function fails if:
/// * the user does not exist
/// * the wallet address is already linked to a user
/// * any store call fails, in which case nothing is persisted
pub async fn link_wallet(
    db: &DatabaseConnection,
    input: LinkWalletInput,
) -> Result<wallets::Model, ApiError> {
    let txn = db.begin().await?;

    match add_wallet(&txn, input).await {
        Ok(wallet) => {
            txn.commit().await?;

            info!(user_id = %wallet.user_id, wallet_id = %wallet.id, "wallet linked");

            Ok(wallet)
        },
        Err(e) => {
            txn.rollback().await?;

            Err(e)
        },
    }
}

async fn create_account(
    txn: &DatabaseTransaction,
    input: SignUpInput,
) -> Result<(users::Model, wallets::Model), ApiError> {
    let SignUpInput {
        display_name,
        username,
        avatar_url,
        about_details,
        bg_image,
        twitter_url,
        facebook_url,
        instagram_url,
        wallet_address,
    } = input;

    if wallet_exists(txn, &wallet_address).await? {
        return Err(ApiError::Conflict(WALLET_EXISTS.to_string()));
    }

    let now: DateTimeWithTimeZone = Utc::now().into();

    let user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        display_name: Set(display_name),
        username: Set(username),
        avatar_url: Set(avatar_url),
        about_details: Set(about_details),
        bg_image: Set(bg_image),
        twitter_url: Set(twitter_url),
        facebook_url: Set(facebook_url),
        instagram_url: Set(instagram_url),
        is_verify: Set(false),
        user_badge: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(txn)
    .await?;

    let wallet = insert_wallet(txn, &user, wallet_address, true, now).await?;

    Ok((user, wallet))
}

async fn add_wallet(
    txn: &DatabaseTransaction,
    input: LinkWalletInput,
) -> Result<wallets::Model, ApiError> {
    let LinkWalletInput {
        user_id,
        wallet_address,
    } = input;

    let user = Users::find_by_id(user_id)
        .one(txn)
        .await?
        .ok_or(ApiError::NotFound("user"))?;

    if wallet_exists(txn, &wallet_address).await? {
        return Err(ApiError::Conflict(WALLET_EXISTS.to_string()));
    }

    let now: DateTimeWithTimeZone = Utc::now().into();

    let wallet = insert_wallet(txn, &user, wallet_address, false, now).await?;

    let mut user: users::ActiveModel = user.into();
    user.updated_at = Set(now);
    user.update(txn).await?;

    Ok(wallet)
}

/// A concurrent writer may claim the address between the existence check and the insert. The unique
/// index on `wallets.address` rejects the second insert, which is reported as a conflict.
async fn insert_wallet(
    txn: &DatabaseTransaction,
    user: &users::Model,
    address: String,
    is_primary: bool,
    created_at: DateTimeWithTimeZone,
) -> Result<wallets::Model, ApiError> {
    wallets::ActiveModel {
        id: Set(Uuid::new_v4()),
        address: Set(address),
        is_primary: Set(is_primary),
        user_id: Set(user.id),
        created_at: Set(created_at),
    }
    .insert(txn)
    .await
    .map_err(|e| ApiError::from_unique_violation(e, WALLET_EXISTS))
}

/// The wallet with the given address, if any user has linked it.
///
/// # Errors
/// This function fails if the store query fails
pub async fn find_wallet<C: ConnectionTrait>(
    conn: &C,
    address: &str,
) -> Result<Option<wallets::Model>, ApiError> {
    let wallet = Wallets::find()
        .filter(wallets::Column::Address.eq(address))
        .one(conn)
        .await?;

    Ok(wallet)
}

async fn wallet_exists<C: ConnectionTrait>(conn: &C, address: &str) -> Result<bool, ApiError> {
    Ok(find_wallet(conn, address).await?.is_some())
}
