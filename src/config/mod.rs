//! Configuration for the bridge relayer.
//!
//! Everything is read from the process environment once, in `main`, and then
//! passed around as immutable values.

mod server_config;
pub use server_config::*;

mod bridge_config;
pub use bridge_config::*;
