use actix_web::{web, HttpResponse};

use crate::models::{
    ApiError, ApiResponse, AppState, BridgeToSuiRequest, EthBalanceRequest, MintFromSuiRequest,
};

pub async fn balance(
    request: EthBalanceRequest,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let balance = state.bridge.eth_balance(request).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(balance)))
}

/// Approve and `bridgeToSui`. A failure of the second call is reported with
/// the approval in `completedSteps`.
pub async fn bridge_to_sui(
    request: BridgeToSuiRequest,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let sent = state.bridge.burn_and_notify(request).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(sent)))
}

pub async fn mint_from_sui(
    request: MintFromSuiRequest,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let minted = state.bridge.mint_from_proof(request).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(minted)))
}
