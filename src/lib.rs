//! Manually-operated relayer moving IBT between an EVM chain and Sui.
//!
//! The relayer does not run chain logic itself. It drives each chain's CLI
//! (`cast` for the EVM side, `sui client` for Sui), reads identifiers out of
//! their output and exposes the bridge primitives over HTTP.
//!
//! ## Modules
//!
//! * `api` - HTTP routes and controllers
//! * `config` - Server and bridge configuration, read once from the environment
//! * `constants` - Defaults, function signatures and step labels
//! * `logging` - `simplelog` setup
//! * `metrics` - Prometheus registry
//! * `models` - Amounts, chain objects, requests, responses and errors
//! * `services` - Command execution, CLI clients and the bridge orchestrator
//! * `utils` - Amount conversion, address encoding and serde helpers

pub mod api;
pub mod config;
pub mod constants;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod utils;
