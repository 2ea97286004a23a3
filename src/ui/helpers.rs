//! Shared rendering utilities and helpers.
//!
//! Components write into a `String` buffer rather than stdout so a frame can
//! be built, inspected in tests, and flushed in one write.
//!
//! Widths are measured in characters, not bytes, so multi-byte names pad and
//! highlight correctly.
//!
//! # Example
//!
//! ```rust
//! use bucket_list::ui::helpers::push_highlighted;
//! use bucket_list::ui::Theme;
//!
//! let theme = Theme::default();
//! let mut out = String::new();
//! push_highlighted(&mut out, "telemetry", &[(2, 5)], &theme, &theme.colors.text_normal);
//! assert!(out.contains("lem"));
//! ```

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed row and column.
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Number of characters in `text`.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Pushes `count` spaces.
pub fn pad(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}

/// Pushes `text` centered in `cols`, padding both sides.
///
/// Text wider than `cols` is cut to fit.
pub fn push_centered(out: &mut String, text: &str, cols: usize) {
    let text: String = text.chars().take(cols).collect();
    let len = width(&text);
    let left = cols.saturating_sub(len) / 2;
    pad(out, left);
    out.push_str(&text);
    pad(out, cols.saturating_sub(left + len));
}

/// Pushes text with character ranges highlighted.
///
/// Ranges are `(start, end)` character indices with exclusive end, sorted and
/// non-overlapping. After each highlight the `restore_fg` color is re-applied.
pub fn push_highlighted(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    restore_fg: &str,
) {
    if ranges.is_empty() {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(restore_fg));

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}

/// Removes ANSI escape sequences, leaving the visible text.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // CSI sequences end with an ASCII letter.
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
