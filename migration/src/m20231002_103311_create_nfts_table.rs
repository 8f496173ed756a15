use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Nfts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Nfts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Nfts::Name).string())
                    .col(ColumnDef::new(Nfts::TokenId).string())
                    .col(ColumnDef::new(Nfts::Url).string())
                    .col(ColumnDef::new(Nfts::ImageUrl).string())
                    .col(ColumnDef::new(Nfts::ChainId).integer())
                    .col(ColumnDef::new(Nfts::Network).string())
                    .col(ColumnDef::new(Nfts::LazyMint).string())
                    .col(ColumnDef::new(Nfts::LazyMintData).text())
                    .col(ColumnDef::new(Nfts::NftStatus).string())
                    .col(ColumnDef::new(Nfts::CollectionAddress).string())
                    .col(ColumnDef::new(Nfts::CreatorAddress).string())
                    .col(ColumnDef::new(Nfts::OwnerAddress).string())
                    .col(ColumnDef::new(Nfts::Collections).string())
                    .col(ColumnDef::new(Nfts::Teams).string())
                    .col(ColumnDef::new(Nfts::Athlete).string())
                    .col(ColumnDef::new(Nfts::Musician).string())
                    .col(ColumnDef::new(Nfts::Artist).string())
                    .col(
                        ColumnDef::new(Nfts::IsMarketPlace)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Nfts::IsAuction)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Nfts::IsApproved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Nfts::Price).double())
                    .col(ColumnDef::new(Nfts::Supply).integer())
                    .col(ColumnDef::new(Nfts::MintedNft).integer())
                    .col(ColumnDef::new(Nfts::AvailableSupply).integer())
                    .col(
                        ColumnDef::new(Nfts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .extra("default current_timestamp".to_string()),
                    )
                    .col(
                        ColumnDef::new(Nfts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .extra("default current_timestamp".to_string()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Nfts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Nfts {
    Table,
    Id,
    Name,
    TokenId,
    Url,
    ImageUrl,
    ChainId,
    Network,
    LazyMint,
    LazyMintData,
    NftStatus,
    CollectionAddress,
    CreatorAddress,
    OwnerAddress,
    Collections,
    Teams,
    Athlete,
    Musician,
    Artist,
    IsMarketPlace,
    IsAuction,
    IsApproved,
    Price,
    Supply,
    MintedNft,
    AvailableSupply,
    CreatedAt,
    UpdatedAt,
}
