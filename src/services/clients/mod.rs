//! Typed wrappers over the two chain CLIs.
//!
//! Each client knows the subcommand shapes of its tool and turns raw output
//! into model types. Required values are validated by the caller; the
//! clients only build argument lists.

mod cast;
pub use cast::*;

mod sui;
pub use sui::*;
