use sea_orm_migration::prelude::*;

use crate::{
    m20231002_102044_create_wallets_table::Wallets, m20231002_103311_create_nfts_table::Nfts,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                IndexCreateStatement::new()
                    .name("wallets_address_idx")
                    .table(Wallets::Table)
                    .col(Wallets::Address)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                IndexCreateStatement::new()
                    .name("nfts_updated_at_idx")
                    .table(Nfts::Table)
                    .col(Nfts::UpdatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                IndexCreateStatement::new()
                    .name("nfts_token_id_collection_address_idx")
                    .table(Nfts::Table)
                    .col(Nfts::TokenId)
                    .col(Nfts::CollectionAddress)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                IndexCreateStatement::new()
                    .name("nfts_owner_address_idx")
                    .table(Nfts::Table)
                    .col(Nfts::OwnerAddress)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                IndexCreateStatement::new()
                    .name("nfts_creator_address_idx")
                    .table(Nfts::Table)
                    .col(Nfts::CreatorAddress)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("nfts_creator_address_idx")
                    .table(Nfts::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("nfts_owner_address_idx")
                    .table(Nfts::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("nfts_token_id_collection_address_idx")
                    .table(Nfts::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("nfts_updated_at_idx")
                    .table(Nfts::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("wallets_address_idx")
                    .table(Wallets::Table)
                    .to_owned(),
            )
            .await
    }
}
