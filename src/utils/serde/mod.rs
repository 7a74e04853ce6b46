mod chain_number;
pub use chain_number::*;
