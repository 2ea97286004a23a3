//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `ListState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! # Example
//!
//! ```rust
//! use bucket_list::app::ListState;
//! use bucket_list::domain::StoreSnapshot;
//! use bucket_list::ui::{helpers::strip_ansi, render_to_string, Theme};
//!
//! let state = ListState::new(StoreSnapshot::default(), Theme::default());
//! let frame = strip_ansi(&render_to_string(&state, 24, 100));
//! assert!(frame.contains("why not create one?"));
//! ```

use crate::app::ListState;
use crate::ui::components;
use std::io::Write;

/// Clears the screen and moves the cursor home.
const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Builds one frame for a `rows` x `cols` terminal.
#[must_use]
pub fn render_to_string(state: &ListState, rows: usize, cols: usize) -> String {
    let _span = tracing::debug_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    let mut out = String::from(CLEAR_SCREEN);
    components::render_frame(&mut out, &viewmodel, &state.theme, rows, cols);
    out
}

/// Renders a frame to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn render(state: &ListState, rows: usize, cols: usize) -> crate::domain::Result<()> {
    let frame = render_to_string(state, rows, cols);
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
