//! Table component renderer.
//!
//! Renders the bucket list as NAME, RETENTION and ID columns followed by
//! label pills. The sorted column carries a direction arrow and search
//! matches in the name are highlighted.

use crate::app::sort::SortKey;
use crate::app::state::{ID_COLUMN_WIDTH, NAME_COLUMN_WIDTH, RETENTION_COLUMN_WIDTH};
use crate::ui::helpers::{self, pad, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BucketRow, ColumnInfo};

const fn column_width(key: SortKey) -> usize {
    match key {
        SortKey::Name => NAME_COLUMN_WIDTH,
        SortKey::RuleString => RETENTION_COLUMN_WIDTH,
        SortKey::Id | SortKey::Organization => ID_COLUMN_WIDTH,
    }
}

/// Renders the column headers at `row`, returning the next free row.
///
/// ```text
/// NAME ▲                            RETENTION                 ID                LABELS
/// ```
pub fn render_table_headers(out: &mut String, row: usize, columns: &[ColumnInfo], theme: &Theme) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());

    for column in columns {
        out.push_str(&Theme::fg(&theme.colors.header_fg));
        out.push_str(column.title);
        let mut used = width(column.title);

        if let Some(direction) = column.sorted {
            out.push_str(&Theme::fg(&theme.colors.sort_indicator_fg));
            out.push(' ');
            out.push_str(direction.indicator());
            used += 2;
        }
        pad(out, column_width(column.key).saturating_sub(used));
    }

    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str("LABELS");
    out.push_str(Theme::reset());
    row + 1
}

/// Renders every row starting at `row`, returning the next free row.
pub fn render_table_rows(
    out: &mut String,
    row: usize,
    rows: &[BucketRow],
    columns: &[ColumnInfo],
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for bucket in rows {
        current_row = render_table_row(out, current_row, bucket, columns, theme, cols);
    }
    current_row
}

fn render_table_row(
    out: &mut String,
    row: usize,
    bucket: &BucketRow,
    columns: &[ColumnInfo],
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(out, row, 1);
    let mut used = 0;

    for column in columns {
        let (text, color) = match column.key {
            SortKey::Name => (bucket.name.as_str(), &theme.colors.text_normal),
            SortKey::RuleString => (bucket.retention.as_str(), &theme.colors.text_dim),
            SortKey::Id | SortKey::Organization => (bucket.id.as_str(), &theme.colors.text_dim),
        };
        let col_width = column_width(column.key);
        let text: String = text.chars().take(col_width.saturating_sub(1)).collect();

        out.push_str(&Theme::fg(color));
        if column.key == SortKey::Name {
            helpers::push_highlighted(out, &text, &bucket.highlight_ranges, theme, color);
        } else {
            out.push_str(&text);
        }
        pad(out, col_width.saturating_sub(width(&text)));
        used += col_width;
    }

    for label in &bucket.labels {
        let pill = format!(" {} ", label.name);
        if used + width(&pill) > cols {
            break;
        }
        out.push_str(&Theme::fg(&theme.colors.label_fg));
        out.push_str(&Theme::bg(label.color.as_deref().unwrap_or(&theme.colors.label_bg)));
        out.push_str(&pill);
        out.push_str(Theme::reset());
        out.push(' ');
        used += width(&pill) + 1;
    }

    pad(out, cols.saturating_sub(used));
    out.push_str(Theme::reset());
    row + 1
}
