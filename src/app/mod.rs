//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the host (main.rs) and the domain/store layers.
//! It owns the list's interaction state and the pipeline that turns store
//! records into visible rows.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Store
//!                            ↑                                       ↓
//!                            └──────────── StoreUpdated ─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Store commands emitted by the event handler
//! - [`boundary`]: Error and panic boundary for host callbacks
//! - [`controller`]: Async driver connecting state to a store
//! - [`filter`]: Case-insensitive substring filtering over field paths
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Modal and sort state machines
//! - [`projector`]: Records to display records
//! - [`sort`]: Column sort strategies
//! - [`state`]: List state container and view model computation

pub mod actions;
pub mod boundary;
pub mod controller;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod projector;
pub mod sort;
pub mod state;

pub use actions::Action;
pub use boundary::{ErrorBoundary, ErrorReporter, TracingReporter};
pub use controller::ListController;
pub use handler::{handle_event, Event};
pub use modes::{ModalState, SortDirection, SortType};
pub use projector::DisplayBucket;
pub use sort::SortKey;
pub use state::ListState;
