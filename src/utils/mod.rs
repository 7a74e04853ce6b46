mod serde;
pub use serde::*;

mod amount;
pub use amount::*;

mod recipient;
pub use recipient::*;
