//! Sheep Crush (workspace facade crate).
//!
//! Re-exports the workspace crates as `sheep_crush::{core,input,term,types}` so
//! front ends and integration tests depend on a single package.

pub use sheep_crush_core as core;
pub use sheep_crush_input as input;
pub use sheep_crush_term as term;
pub use sheep_crush_types as types;
