//! Create-bucket modal renderer.
//!
//! Drawn last, over the table, as a centered box. While a create is pending
//! the box shows a progress line instead of the form hint.

use crate::ui::helpers::{pad, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalInfo;

const MODAL_WIDTH: usize = 52;
const MODAL_HEIGHT: usize = 7;

/// Renders the modal centered in a `rows` x `cols` screen.
pub fn render_modal(out: &mut String, modal: &ModalInfo, theme: &Theme, rows: usize, cols: usize) {
    let box_width = MODAL_WIDTH.min(cols);
    let inner_width = box_width.saturating_sub(2);
    let left = cols.saturating_sub(box_width) / 2 + 1;
    let top = rows.saturating_sub(MODAL_HEIGHT) / 2 + 1;
    let border = Theme::fg(&theme.colors.modal_border);

    let status = if modal.submitting {
        "Creating bucket...".to_string()
    } else {
        "create <name> [seconds] | close".to_string()
    };
    let lines = [
        (String::new(), &theme.colors.text_normal),
        (format!("Organization: {}", modal.organization), &theme.colors.text_normal),
        (String::new(), &theme.colors.text_normal),
        (status, &theme.colors.text_dim),
        (String::new(), &theme.colors.text_normal),
    ];

    position_cursor(out, top, left);
    out.push_str(&border);
    let title = format!(" {} ", modal.title);
    let title_len = width(&title).min(inner_width);
    out.push('┌');
    out.push_str(&Theme::fg(&theme.colors.modal_title_fg));
    out.push_str(Theme::bold());
    out.extend(title.chars().take(title_len));
    out.push_str(Theme::reset());
    out.push_str(&border);
    out.push_str(&"─".repeat(inner_width - title_len));
    out.push('┐');

    for (offset, (text, color)) in lines.iter().enumerate() {
        let text: String = text.chars().take(inner_width.saturating_sub(2)).collect();
        position_cursor(out, top + 1 + offset, left);
        out.push_str(&border);
        out.push('│');
        out.push_str(&Theme::fg(color));
        out.push(' ');
        out.push_str(&text);
        pad(out, inner_width.saturating_sub(width(&text) + 1));
        out.push_str(&border);
        out.push('│');
    }

    position_cursor(out, top + 1 + lines.len(), left);
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());
}
