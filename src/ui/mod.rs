//! User interface rendering layer with component-based architecture.
//!
//! This module turns list state into ANSI-styled terminal frames through
//! composable rendering components, with theme support and search match
//! highlighting.
//!
//! # Architecture
//!
//! ```text
//! ListState → compute_viewmodel → UIViewModel → render_to_string → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, padding)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{
    BucketRow, ColumnInfo, EmptyStateKind, FooterInfo, HeaderInfo, LabelPill, ModalInfo,
    SearchBarInfo, UIViewModel,
};
