//! This module defines the HTTP routes for EVM-side operations.
//! Every handler takes a JSON body and delegates to the eth controller.
use actix_web::{post, web, Responder};

use crate::{
    api::controllers::eth,
    models::{AppState, BridgeToSuiRequest, EthBalanceRequest, MintFromSuiRequest},
};

/// IBT balance of an address.
#[post("/eth/balance")]
async fn balance(
    request: web::Json<EthBalanceRequest>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    eth::balance(request.into_inner(), data).await
}

/// Burns on the EVM side so the relayer can mint on Sui.
#[post("/eth/bridge-to-sui")]
async fn bridge_to_sui(
    request: web::Json<BridgeToSuiRequest>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    eth::bridge_to_sui(request.into_inner(), data).await
}

/// Mints on the EVM side for a Sui lock digest.
#[post("/eth/mint-from-sui")]
async fn mint_from_sui(
    request: web::Json<MintFromSuiRequest>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    eth::mint_from_sui(request.into_inner(), data).await
}

/// Initializes the routes for the eth module.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(balance);
    cfg.service(bridge_to_sui);
    cfg.service(mint_from_sui);
}
