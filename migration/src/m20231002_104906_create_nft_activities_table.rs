use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NftActivities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NftActivities::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(NftActivities::NftId).uuid())
                    .col(ColumnDef::new(NftActivities::TokenId).string())
                    .col(ColumnDef::new(NftActivities::CollectionAddress).string())
                    .col(ColumnDef::new(NftActivities::Network).string())
                    .col(ColumnDef::new(NftActivities::Event).string().not_null())
                    .col(ColumnDef::new(NftActivities::FromAddress).string())
                    .col(ColumnDef::new(NftActivities::ToAddress).string())
                    .col(ColumnDef::new(NftActivities::Price).double())
                    .col(ColumnDef::new(NftActivities::TxHash).string())
                    .col(
                        ColumnDef::new(NftActivities::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .extra("default current_timestamp".to_string()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                IndexCreateStatement::new()
                    .name("nft_activities_nft_id_idx")
                    .table(NftActivities::Table)
                    .col(NftActivities::NftId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NftActivities::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum NftActivities {
    Table,
    Id,
    NftId,
    TokenId,
    CollectionAddress,
    Network,
    Event,
    FromAddress,
    ToAddress,
    Price,
    TxHash,
    CreatedAt,
}
