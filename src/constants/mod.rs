//! Constants used throughout the bridge relayer.

mod bridge;
pub use bridge::*;

mod logging;
pub use logging::*;

mod server;
pub use server::*;
