//! This module defines the HTTP routes for Sui-side operations: the four
//! Move calls of the IBT module and read-only coin queries.
use actix_web::{get, post, web, HttpResponse, Responder};

use crate::{
    api::controllers::sui,
    models::{
        ApiError, AppState, InitBridgeRequest, OwnerQuery, SuiLockRequest, SuiMintRequest,
        SuiReleaseRequest,
    },
};

/// An empty body means "no relayer given"; any other body must be valid JSON.
#[post("/sui/init-bridge")]
async fn init_bridge(
    body: web::Bytes,
    data: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        InitBridgeRequest::default()
    } else {
        serde_json::from_slice::<InitBridgeRequest>(&body)
            .map_err(|e| ApiError::BadRequest(format!("Json deserialize error: {e}")))?
    };
    sui::init_bridge(request, data).await
}

#[post("/sui/mint")]
async fn mint(
    request: web::Json<SuiMintRequest>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    sui::mint(request.into_inner(), data).await
}

#[post("/sui/lock")]
async fn lock(
    request: web::Json<SuiLockRequest>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    sui::lock(request.into_inner(), data).await
}

#[post("/sui/release")]
async fn release(
    request: web::Json<SuiReleaseRequest>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    sui::release(request.into_inner(), data).await
}

/// Highest-version IBT coin of `owner` (default: active identity).
#[get("/sui/latest-ibt-coin")]
async fn latest_ibt_coin(
    query: web::Query<OwnerQuery>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    sui::latest_coin(query.into_inner(), data).await
}

/// Sum of all IBT coin balances of `owner` (default: active identity).
#[get("/sui/ibt-balance")]
async fn ibt_balance(
    query: web::Query<OwnerQuery>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    sui::coin_balance(query.into_inner(), data).await
}

/// Initializes the routes for the sui module.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(init_bridge);
    cfg.service(mint);
    cfg.service(lock);
    cfg.service(release);
    cfg.service(latest_ibt_coin);
    cfg.service(ibt_balance);
}
