use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Collections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Collections::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Collections::Name).string().not_null())
                    .col(ColumnDef::new(Collections::Symbol).string())
                    .col(ColumnDef::new(Collections::Description).text())
                    .col(ColumnDef::new(Collections::CollectionAddress).string())
                    .col(ColumnDef::new(Collections::CreatorAddress).string())
                    .col(ColumnDef::new(Collections::Network).string())
                    .col(ColumnDef::new(Collections::ChainId).integer())
                    .col(ColumnDef::new(Collections::ImageUrl).string())
                    .col(ColumnDef::new(Collections::BannerUrl).string())
                    .col(ColumnDef::new(Collections::Category).string())
                    .col(
                        ColumnDef::new(Collections::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .extra("default current_timestamp".to_string()),
                    )
                    .col(
                        ColumnDef::new(Collections::UpdatedAt)
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
                    .name("collections_creator_address_idx")
                    .table(Collections::Table)
                    .col(Collections::CreatorAddress)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Collections::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Collections {
    Table,
    Id,
    Name,
    Symbol,
    Description,
    CollectionAddress,
    CreatorAddress,
    Network,
    ChainId,
    ImageUrl,
    BannerUrl,
    Category,
    CreatedAt,
    UpdatedAt,
}
