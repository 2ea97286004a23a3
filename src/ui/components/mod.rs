//! Composable UI component renderers.
//!
//! Each component writes one part of the frame into a shared `String` and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with organization and count
//! - [`footer`]: Command hints
//! - [`search`]: Filter input box
//! - [`table`]: Bucket rows with sort indicator and label pills
//! - [`empty`]: The two empty-state messages
//! - [`modal`]: Create-bucket overlay
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Table Headers]
//! [Table Rows | Empty State]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```
//!
//! The modal, when visible, is drawn over the table last.

mod empty;
mod footer;
mod header;
mod modal;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use modal::render_modal;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row`, returning the next free row.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders a complete frame for the view model.
pub fn render_frame(out: &mut String, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = render_search_bar(out, current_row, &vm.search_bar, theme, cols);
    current_row = render_table_headers(out, current_row, &vm.columns, theme);

    if let Some(empty) = vm.empty_state {
        render_empty_state(out, current_row, empty, theme, cols);
    } else {
        render_table_rows(out, current_row, &vm.rows, &vm.columns, theme, cols);
    }

    let footer_row = rows.max(current_row + 2);
    render_border(out, footer_row - 1, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);

    if let Some(modal) = &vm.modal {
        render_modal(out, modal, theme, rows, cols);
    }
}
