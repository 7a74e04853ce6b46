//! # API Module
//!
//! HTTP surface of the bridge relayer.
//!
//! ## Structure
//!
//! * `controllers` - Request handling, delegating to the bridge orchestrator
//! * `routes` - API endpoint definitions and routing

pub mod controllers;

pub mod routes;
