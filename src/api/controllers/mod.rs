//! # API Controllers Module
//!
//! Turns orchestrator results into response envelopes.
//!
//! ## Controllers
//!
//! * `eth` - EVM-side balance, burn and mint endpoints
//! * `sui` - Sui-side Move calls and coin queries

pub mod eth;
pub mod sui;
