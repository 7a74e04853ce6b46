//! # API Routes Module
//!
//! Configures HTTP routes for the bridge relayer.
//!
//! ## Routes
//!
//! * `/health` - Configuration summary
//! * `/eth/*` - EVM-side operations
//! * `/sui/*` - Sui-side operations and coin queries
//! * `/metrics` - Prometheus exposition

pub mod eth;
pub mod health;
pub mod metrics;
pub mod sui;

use actix_web::{
    error::{JsonPayloadError, QueryPayloadError},
    web, HttpRequest,
};

use crate::models::ApiError;

/// Malformed JSON bodies and query strings get the same envelope as every
/// other failure.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(err.to_string()).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(err.to_string()).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .configure(health::init)
        .configure(eth::init)
        .configure(sui::init)
        .configure(metrics::init);
}
