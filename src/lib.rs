//! BSD Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name, `tetris_bsd::{core,input,term,types}`,
//! and holds the session score table used by the binary.

pub mod scores;

pub use tetris_bsd_core as core;
pub use tetris_bsd_input as input;
pub use tetris_bsd_term as term;
pub use tetris_bsd_types as types;
