mod amount;
pub use amount::*;

mod api_response;
pub use api_response::*;

mod app_state;
pub use app_state::*;

mod bridge;
pub use bridge::*;

mod chain_object;
pub use chain_object::*;

mod command;
pub use command::*;

mod error;
pub use error::*;

mod receipt;
pub use receipt::*;

mod step;
pub use step::*;

mod transfer;
pub use transfer::*;
