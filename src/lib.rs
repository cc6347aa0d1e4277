//! Brickfall (workspace facade crate).
//!
//! This package keeps the `brickfall::{core,term,input,types}` public API
//! stable while the implementation lives in dedicated crates under `crates/`.

pub use brickfall_core as core;
pub use brickfall_input as input;
pub use brickfall_term as term;
pub use brickfall_types as types;
