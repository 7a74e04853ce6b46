//! # Services Module
//!
//! External command execution, chain CLI clients and the bridge operations
//! built on top of them.

mod command;
pub use command::*;

mod output;
pub use output::*;

mod objects;
pub use objects::*;

mod clients;
pub use clients::*;

mod bridge;
pub use bridge::*;
