//! # Bridge Relayer
//!
//! HTTP service exposing the IBT bridge primitives between an EVM chain and
//! Sui.
//!
//! ## Environment
//!
//! Server: `HOST`, `PORT`. Bridge: `ETH_RPC`, `ETH_IBT_ADDRESS`,
//! `ETH_BRIDGE_ADDRESS`, `ETH_USER_PK`, `ETH_OWNER_PK`, `SUI_PACKAGE_ID`,
//! `SUI_ENV` and the tunables documented on `BridgeConfig`. Logging:
//! `LOG_MODE`, `LOG_LEVEL`, `LOG_FILE_PATH`. A `.env` file is loaded first
//! when present.
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use color_eyre::Result;
use dotenvy::dotenv;
use log::info;

use bridge_relayer::{
    api::routes::configure_routes,
    config::{BridgeConfig, ServerConfig},
    constants::DEFAULT_CLIENT_DISCONNECT_TIMEOUT_SECONDS,
    logging::setup_logging,
    models::AppState,
    services::{BridgeOrchestrator, CommandExecutor},
};

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok();
    color_eyre::install()?;
    setup_logging()?;

    let server_config = ServerConfig::from_env();
    let bridge_config = Arc::new(BridgeConfig::from_env()?);
    info!("Bridge configuration: {:?}", bridge_config);

    let executor = Arc::new(CommandExecutor::new(bridge_config.command_timeout));
    let app_state = AppState::new(BridgeOrchestrator::new(bridge_config, executor));

    info!(
        "Starting server on {}:{}",
        server_config.host, server_config.port
    );
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::ThinData(app_state.clone()))
            .configure(configure_routes)
    })
    .client_disconnect_timeout(std::time::Duration::from_secs(
        DEFAULT_CLIENT_DISCONNECT_TIMEOUT_SECONDS,
    ))
    .bind((server_config.host.as_str(), server_config.port))?
    .shutdown_timeout(5)
    .run()
    .await?;

    Ok(())
}
