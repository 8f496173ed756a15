use async_graphql::InputObject;
use sea_orm::prelude::Uuid;

use crate::entities::nft_activities::ActivityEvent;

#[derive(InputObject, Clone, Debug)]
pub struct CreateNftActivityInput {
    pub nft_id: Option<Uuid>,
    pub token_id: Option<String>,
    pub collection_address: Option<String>,
    pub network: Option<String>,
    pub event: ActivityEvent,
    pub from_address: Option<String>,
    pub to_address: Option<String>,
    pub price: Option<f64>,
    pub tx_hash: Option<String>,
}
