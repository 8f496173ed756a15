#![allow(clippy::wildcard_imports)]

pub mod prelude;

pub mod collections;
pub mod nft_activities;
pub mod nfts;
pub mod users;
pub mod wallets;
