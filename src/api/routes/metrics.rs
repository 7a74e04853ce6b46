//! This module provides the Prometheus scrape endpoint.
//!
//! # Endpoints
//!
//! - `/metrics`: All registered metrics in the Prometheus text format.

use actix_web::{get, web, HttpResponse, Responder};
use log::error;

use crate::metrics::gather_metrics;

#[get("/metrics")]
async fn scrape_metrics() -> impl Responder {
    match gather_metrics() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(body),
        Err(e) => {
            error!("Failed to encode metrics: {e}");
            HttpResponse::InternalServerError().body("failed to encode metrics")
        }
    }
}

/// Initializes the routes for the metrics module.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(scrape_metrics);
}
