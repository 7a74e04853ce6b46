use actix_web::{web, HttpResponse};

use crate::models::{
    ApiError, ApiResponse, AppState, InitBridgeRequest, OwnerQuery, SuiLockRequest,
    SuiMintRequest, SuiReleaseRequest,
};

pub async fn init_bridge(
    request: InitBridgeRequest,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let initialized = state.bridge.init_bridge(request).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(initialized)))
}

pub async fn mint(
    request: SuiMintRequest,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let sent = state.bridge.mint(request).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(sent)))
}

pub async fn lock(
    request: SuiLockRequest,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let sent = state.bridge.lock(request).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(sent)))
}

pub async fn release(
    request: SuiReleaseRequest,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let sent = state.bridge.release(request).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(sent)))
}

/// Always `200`; a missing coin is `{"ok": true, "found": false}`.
pub async fn latest_coin(
    query: OwnerQuery,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let latest = state.bridge.latest_coin(query.owner).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(latest)))
}

pub async fn coin_balance(
    query: OwnerQuery,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let balance = state.bridge.coin_balance(query.owner).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(balance)))
}
