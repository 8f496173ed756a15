//!

use hub_core::{anyhow::Context as AnyhowContext, prelude::*};
use migration::{Migrator, MigratorTrait};
use nft_marketplace_api::{app, build_schema, db::Connection, AppState, Args};
use poem::{listener::TcpListener, Server};

pub fn main() {
    let opts = hub_core::StartConfig {
        service_name: "nft-marketplace-api",
    };

    hub_core::run(opts, |common, args| {
        let Args {
            port,
            migrate,
            cors_origins,
            db,
        } = args;

        common.rt.block_on(async move {
            let connection = Connection::new(db)
                .await
                .context("failed to get database connection")?;

            if migrate {
                Migrator::up(connection.get(), None)
                    .await
                    .context("failed to apply migrations")?;

                info!("migrations applied");
            }

            let schema = build_schema();
            let state = AppState::new(schema, connection);

            info!(port, "serving graphql");

            Server::new(TcpListener::bind(format!("0.0.0.0:{port}")))
                .run(app(state, &cors_origins))
                .await
                .context("failed to build graphql server")
        })
    });
}
