//! View model types representing renderable UI state.
//!
//! View models are computed from [`ListState`](crate::app::ListState) on every
//! render and contain display-ready data only: truncated strings, highlight
//! ranges, the active sort indicator and the modal/empty-state selection.
//!
//! # Example
//!
//! ```rust
//! use bucket_list::app::ListState;
//! use bucket_list::domain::StoreSnapshot;
//! use bucket_list::ui::{EmptyStateKind, Theme};
//!
//! let state = ListState::new(StoreSnapshot::default(), Theme::default());
//! let vm = state.compute_viewmodel(24, 80);
//! assert!(vm.rows.is_empty());
//! assert_eq!(vm.empty_state, Some(EmptyStateKind::NoBuckets));
//! ```

use crate::app::sort::SortKey;
use crate::app::SortDirection;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Rows that fit on screen, already filtered and sorted.
    pub rows: Vec<BucketRow>,

    /// Number of rows matching the current search, before windowing.
    pub matching_count: usize,

    /// Header information (title, counts).
    pub header: HeaderInfo,

    /// Footer information (command hints).
    pub footer: FooterInfo,

    /// Search input contents.
    pub search_bar: SearchBarInfo,

    /// Column headers with the active sort indicator.
    pub columns: Vec<ColumnInfo>,

    /// Which empty-state message to show, when no rows match.
    pub empty_state: Option<EmptyStateKind>,

    /// The create-bucket modal, when visible.
    pub modal: Option<ModalInfo>,
}

/// Display information for a single bucket row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketRow {
    pub id: String,

    /// Display name, truncated to the name column.
    pub name: String,

    /// Human-readable retention, e.g. `"forever"` or `"7 days"`.
    pub retention: String,

    /// Labels in record order.
    pub labels: Vec<LabelPill>,

    /// Character ranges of `name` matching the search term.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// A label drawn after the row's columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPill {
    pub name: String,

    /// The label's own hex color; the theme's label background when unset.
    pub color: Option<String>,
}

/// A table column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub key: SortKey,
    pub title: &'static str,

    /// Set on the column the table is currently sorted by.
    pub sorted: Option<SortDirection>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    pub placeholder: &'static str,
}

/// Create-bucket modal display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalInfo {
    pub title: &'static str,

    /// Name of the organization the new bucket will belong to.
    pub organization: String,

    /// Whether a create is awaiting the store.
    pub submitting: bool,
}

/// The two empty-state variants.
///
/// Selection depends only on whether a search term is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyStateKind {
    /// No search term: there are no buckets at all, invite the user to create one.
    NoBuckets,

    /// A search term is active and nothing matches it.
    NoMatches,
}

impl EmptyStateKind {
    /// Primary message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoBuckets => "Looks like there aren't any Buckets, why not create one?",
            Self::NoMatches => "No Buckets match your query",
        }
    }

    /// Secondary text, if any.
    #[must_use]
    pub const fn subtitle(self) -> Option<&'static str> {
        match self {
            Self::NoBuckets => Some("Type 'new' to create a bucket"),
            Self::NoMatches => None,
        }
    }

    /// Whether the empty state offers the create action.
    #[must_use]
    pub const fn offers_create(self) -> bool {
        matches!(self, Self::NoBuckets)
    }
}
