//! List state management and view model computation.
//!
//! This module defines [`ListState`], the single owner of the list's
//! interaction state (search term, sort, modal) together with the latest
//! [`StoreSnapshot`] handed in by the host. It composes the pipeline that turns
//! raw records into visible rows:
//!
//! ```text
//! snapshot.buckets → project → filter(search_term) → sort(key, direction, type)
//! ```
//!
//! The pipeline is re-run on every call; nothing derived is cached, so the
//! rows always reflect the snapshot and state as they are now.
//!
//! # Example
//!
//! ```rust
//! use bucket_list::app::ListState;
//! use bucket_list::domain::{Bucket, Organization, StoreSnapshot};
//! use bucket_list::ui::Theme;
//!
//! let snapshot = StoreSnapshot {
//!     organization: Organization::new("o1", "acme"),
//!     buckets: vec![Bucket::new("1", "b", "o1"), Bucket::new("2", "a", "o1")],
//!     version: 1,
//! };
//! let mut state = ListState::new(snapshot, Theme::default());
//! state.search_term = "a".to_string();
//! let names: Vec<String> = state.visible_buckets().into_iter().map(|b| b.name.clone()).collect();
//! assert_eq!(names, vec!["a"]);
//! ```

use super::filter::{self, bucket_search_fields, FieldPath};
use super::modes::{ModalState, SortDirection, SortType};
use super::projector::{self, DisplayBucket};
use super::sort::{self, SortKey};
use crate::domain::StoreSnapshot;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BucketRow, ColumnInfo, EmptyStateKind, FooterInfo, HeaderInfo, LabelPill, ModalInfo,
    SearchBarInfo, UIViewModel,
};

/// Width of the name column, including the trailing gap.
pub const NAME_COLUMN_WIDTH: usize = 34;

/// Width of the retention column, including the trailing gap.
pub const RETENTION_COLUMN_WIDTH: usize = 26;

/// Width of the id column, including the trailing gap.
pub const ID_COLUMN_WIDTH: usize = 18;

/// Rows used by chrome: blank, header, border, search box (3), column
/// headers, border, footer.
const CHROME_ROWS: usize = 9;

/// Columns shown in the table, in order.
const TABLE_COLUMNS: [SortKey; 3] = [SortKey::Name, SortKey::RuleString, SortKey::Id];

/// Owner of the list's interaction state and current store snapshot.
#[derive(Debug, Clone)]
pub struct ListState {
    /// Latest snapshot from the store. Replaced, never edited.
    pub snapshot: StoreSnapshot,

    /// Current search term. Empty means "show everything".
    pub search_term: String,

    /// Column the rows are sorted by.
    pub sort_key: SortKey,

    /// Direction applied on top of the comparator.
    pub sort_direction: SortDirection,

    /// Comparison strategy. Reset to `String` on every column click.
    pub sort_type: SortType,

    /// Create-bucket modal state.
    pub modal: ModalState,

    /// Color scheme for rendering.
    pub theme: Theme,

    search_fields: Vec<FieldPath>,
}

impl ListState {
    /// Creates list state with default interaction state: empty search,
    /// ascending string sort by name, modal closed.
    #[must_use]
    pub fn new(snapshot: StoreSnapshot, theme: Theme) -> Self {
        Self {
            snapshot,
            search_term: String::new(),
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            sort_type: SortType::default(),
            modal: ModalState::default(),
            theme,
            search_fields: bucket_search_fields(),
        }
    }

    /// Applies a column-header click. The sort type always resets to string.
    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.sort_key = key;
        self.sort_direction = direction;
        self.sort_type = SortType::String;
    }

    /// Every bucket in the snapshot, projected for display, in store order.
    #[must_use]
    pub fn display_buckets(&self) -> Vec<DisplayBucket> {
        projector::project(&self.snapshot.buckets)
    }

    /// The rows to show: projected, filtered by the search term, then sorted.
    #[must_use]
    pub fn visible_buckets(&self) -> Vec<DisplayBucket> {
        let _span = tracing::debug_span!("visible_buckets",
            total = self.snapshot.buckets.len(),
            term_len = self.search_term.len(),
            sort_key = ?self.sort_key
        )
        .entered();

        let projected = self.display_buckets();
        let mut rows = filter::filter(&self.search_term, &self.search_fields, &projected);
        sort::sort_buckets(&mut rows, self.sort_key, self.sort_direction, self.sort_type);
        rows
    }

    /// Selects the empty-state message from the search term alone.
    #[must_use]
    pub fn empty_state_view(&self) -> EmptyStateKind {
        if self.search_term.is_empty() {
            EmptyStateKind::NoBuckets
        } else {
            EmptyStateKind::NoMatches
        }
    }

    /// Computes a renderable view model for a terminal of the given size.
    ///
    /// Rows beyond the space left after chrome are cut off; the footer reports
    /// how many are hidden.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let visible = self.visible_buckets();
        let available_rows = rows.saturating_sub(CHROME_ROWS);
        let name_width = NAME_COLUMN_WIDTH.min(cols).saturating_sub(2);

        let display_rows: Vec<BucketRow> = visible
            .iter()
            .take(available_rows)
            .map(|bucket| self.compute_row(bucket, name_width))
            .collect();

        let empty_state = if visible.is_empty() {
            Some(self.empty_state_view())
        } else {
            None
        };

        UIViewModel {
            footer: self.compute_footer(visible.len(), display_rows.len()),
            rows: display_rows,
            matching_count: visible.len(),
            header: self.compute_header(),
            search_bar: SearchBarInfo {
                query: self.search_term.clone(),
                placeholder: "Filter buckets...",
            },
            columns: self.compute_columns(),
            empty_state,
            modal: self.compute_modal(),
        }
    }

    fn compute_row(&self, bucket: &DisplayBucket, name_width: usize) -> BucketRow {
        let name = truncate(&bucket.name, name_width);
        let name_len = name.chars().count();

        let highlight_ranges = if self.search_term.is_empty() {
            vec![]
        } else {
            filter::match_range(&name, &self.search_term)
                .map(|(start, end)| (start, end.min(name_len)))
                .filter(|(start, end)| start < end)
                .into_iter()
                .collect()
        };

        BucketRow {
            id: bucket.id.clone(),
            name,
            retention: bucket.rule_string.clone(),
            labels: bucket
                .labels
                .iter()
                .map(|l| LabelPill {
                    name: l.name.clone(),
                    color: l.color.clone(),
                })
                .collect(),
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let org = &self.snapshot.organization.name;
        let count = self.snapshot.buckets.len();
        let title = if org.is_empty() {
            format!(" Buckets ({count}) ")
        } else {
            format!(" Buckets · {org} ({count}) ")
        };
        HeaderInfo { title }
    }

    fn compute_columns(&self) -> Vec<ColumnInfo> {
        TABLE_COLUMNS
            .iter()
            .map(|&key| ColumnInfo {
                key,
                title: key.title(),
                sorted: (key == self.sort_key).then_some(self.sort_direction),
            })
            .collect()
    }

    fn compute_footer(&self, matching: usize, shown: usize) -> FooterInfo {
        let keybindings = match self.modal {
            ModalState::Open => {
                "create <name> [seconds]: create  close: cancel".to_string()
            }
            ModalState::Submitting => "creating bucket...  close: hide".to_string(),
            ModalState::Closed | ModalState::Pending if shown < matching => format!(
                "/text: filter  sort <col> <asc|desc>  new  rename <id> <name>  delete <id>  q: quit  ({} more)",
                matching - shown
            ),
            ModalState::Closed | ModalState::Pending => {
                "/text: filter  sort <col> <asc|desc>  new  rename <id> <name>  delete <id>  q: quit"
                    .to_string()
            }
        };
        FooterInfo { keybindings }
    }

    fn compute_modal(&self) -> Option<ModalInfo> {
        self.modal.is_visible().then(|| ModalInfo {
            title: "Create Bucket",
            organization: self.snapshot.organization.name.clone(),
            submitting: self.modal == ModalState::Submitting,
        })
    }
}

/// Truncates to `max` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}
