use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::DisplayName).string())
                    .col(ColumnDef::new(Users::Username).string())
                    .col(ColumnDef::new(Users::AvatarUrl).string())
                    .col(ColumnDef::new(Users::AboutDetails).text())
                    .col(ColumnDef::new(Users::BgImage).string())
                    .col(ColumnDef::new(Users::TwitterUrl).string())
                    .col(ColumnDef::new(Users::FacebookUrl).string())
                    .col(ColumnDef::new(Users::InstagramUrl).string())
                    .col(
                        ColumnDef::new(Users::IsVerify)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Users::UserBadge).string())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .extra("default current_timestamp".to_string()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
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
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Users {
    Table,
    Id,
    DisplayName,
    Username,
    AvatarUrl,
    AboutDetails,
    BgImage,
    TwitterUrl,
    FacebookUrl,
    InstagramUrl,
    IsVerify,
    UserBadge,
    CreatedAt,
    UpdatedAt,
}
