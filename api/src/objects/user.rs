use async_graphql::{InputObject, MaybeUndefined};
use sea_orm::prelude::Uuid;

/// Profile details and the wallet a new user signs up with.
#[derive(InputObject, Clone, Debug, Default)]
pub struct SignUpInput {
    pub display_name: Option<String>,
    pub username: Option<String>,
    #[graphql(name = "avatar_url")]
    pub avatar_url: Option<String>,
    #[graphql(name = "about_details")]
    pub about_details: Option<String>,
    #[graphql(name = "bg_image")]
    pub bg_image: Option<String>,
    pub twitter_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    /// Becomes the user's primary wallet. Must not be linked to any user yet.
    pub wallet_address: String,
}

#[derive(InputObject, Clone, Debug)]
pub struct LinkWalletInput {
    pub user_id: Uuid,
    pub wallet_address: String,
}

/// Profile fields to change. Omitted fields keep their current value and `null` clears a field.
#[derive(InputObject, Clone, Debug)]
pub struct UpdateUserInput {
    pub user_id: Uuid,
    pub display_name: MaybeUndefined<String>,
    pub username: MaybeUndefined<String>,
    #[graphql(name = "avatar_url")]
    pub avatar_url: MaybeUndefined<String>,
    #[graphql(name = "about_details")]
    pub about_details: MaybeUndefined<String>,
    #[graphql(name = "bg_image")]
    pub bg_image: MaybeUndefined<String>,
    pub twitter_url: MaybeUndefined<String>,
    pub facebook_url: MaybeUndefined<String>,
    pub instagram_url: MaybeUndefined<String>,
    pub is_verify: Option<bool>,
}

#[derive(InputObject, Clone, Debug)]
pub struct UpdateUserBadgeInput {
    pub user_id: Uuid,
    pub is_verify: Option<bool>,
    pub user_badge: MaybeUndefined<String>,
}
