//! Store contracts and the in-memory store.
//!
//! The list never owns bucket data. It reads snapshots through
//! [`BucketSource`] and sends mutations through [`BucketService`]; any store
//! that implements both can back it.
//!
//! # Modules
//!
//! - `backend`: The two store traits
//! - `memory`: An in-memory store used by the terminal host and in tests

pub mod backend;
pub mod memory;

pub use backend::{BucketService, BucketSource};
pub use memory::MemoryStore;
