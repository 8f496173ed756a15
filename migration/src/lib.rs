pub use sea_orm_migration::prelude::*;

mod m20231002_101512_create_users_table;
mod m20231002_102044_create_wallets_table;
mod m20231002_103311_create_nfts_table;
mod m20231002_104127_create_collections_table;
mod m20231002_104906_create_nft_activities_table;
mod m20231009_141233_add_indexes_for_nfts_and_wallets;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20231002_101512_create_users_table::Migration),
            Box::new(m20231002_102044_create_wallets_table::Migration),
            Box::new(m20231002_103311_create_nfts_table::Migration),
            Box::new(m20231002_104127_create_collections_table::Migration),
            Box::new(m20231002_104906_create_nft_activities_table::Migration),
            Box::new(m20231009_141233_add_indexes_for_nfts_and_wallets::Migration),
        ]
    }
}
