pub use super::{
    collections::Entity as Collections, nft_activities::Entity as NftActivities,
    nfts::Entity as Nfts, users::Entity as Users, wallets::Entity as Wallets,
};
