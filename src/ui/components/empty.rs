//! Empty state component renderer.
//!
//! Shown in the table area when no rows are visible. The search bar stays
//! above it so a failed query can be edited.

use crate::ui::helpers::{position_cursor, push_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyStateKind;

/// Renders the empty-state message starting two rows below `row`.
pub fn render_empty_state(out: &mut String, row: usize, empty: EmptyStateKind, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row + 2;

    position_cursor(out, current_row, 1);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    push_centered(out, empty.message(), cols);
    out.push_str(Theme::reset());
    current_row += 1;

    if let Some(subtitle) = empty.subtitle() {
        position_cursor(out, current_row, 1);
        out.push_str(Theme::dim());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        push_centered(out, subtitle, cols);
        out.push_str(Theme::reset());
        current_row += 1;
    }

    current_row
}
