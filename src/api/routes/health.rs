//! This module provides the health check endpoint.
//!
//! `/health` reports which chain endpoints and contracts the relayer is
//! configured for. It makes no external calls.
use actix_web::{get, web, HttpResponse};

use crate::models::{ApiResponse, AppState};

#[get("/health")]
async fn health(data: web::ThinData<AppState>) -> Result<HttpResponse, actix_web::Error> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(data.bridge.health())))
}

/// Initializes the health check service.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::routes::test_support::{configured, state, BRIDGE},
        services::MockCommandExecutorTrait,
    };
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_endpoint() {
        // Arrange
        let mut executor = MockCommandExecutorTrait::new();
        executor.expect_execute().never();
        let app = test::init_service(
            App::new()
                .app_data(web::ThinData(state(configured(), executor)))
                .configure(init),
        )
        .await;

        // Act
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert!(resp.status().is_success());
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["ok"], true);
        assert_eq!(body["ethBridge"], BRIDGE);
        assert_eq!(body["suiEnv"], "localnet");
        assert!(body["repo"].is_string());
    }
}
