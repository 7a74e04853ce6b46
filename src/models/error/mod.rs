mod api;
pub use api::*;

mod bridge;
pub use bridge::*;

mod command;
pub use command::*;

mod parse;
pub use parse::*;
