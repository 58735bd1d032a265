//! retris (workspace facade crate).
//!
//! Re-exports the member crates under stable module names so the binary,
//! tests, and benches can use `retris::{core, input, term, types}`.

pub use retris_core as core;
pub use retris_input as input;
pub use retris_term as term;
pub use retris_types as types;
