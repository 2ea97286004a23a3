//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where the crate keeps its files on the host and expands
//! user-supplied paths.

pub mod paths;

pub use paths::{default_trace_file, expand_tilde, get_data_dir};
