//! Modal and sort mode state types.
//!
//! This module defines the small state machines that control the list's
//! interaction modes: the create-bucket modal and the sort direction/strategy
//! applied to the visible rows.
//!
//! # Modal State Machine
//!
//! ```text
//!            open                 begin_submit
//! Closed ─────────────▶ Open ─────────────────▶ Submitting ◀──┐
//!   ▲  ▲                 ▲ │                     │   │        │ open
//!   │  │      close      │ │                     │   │ close  │
//!   │  └─────────────────┼─┘       submit_failed │   ▼        │
//!   │                    └───────────────────────┘  Pending ──┘
//!   │            submit_succeeded / submit_failed      │
//!   └──────────────────────────────────────────────────┘
//! ```
//!
//! `Submitting` and `Pending` both mean a create is in flight; they differ only
//! in whether the form is shown. Closing the form hides it without forgetting
//! the pending create, so a second create is rejected until the first resolves.
//! A create can only be submitted from the open form.

use crate::domain::{BucketsError, Result};

/// State of the create-bucket modal and of the create it submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    /// The modal is hidden.
    #[default]
    Closed,

    /// The modal is visible and accepting input.
    Open,

    /// The modal is visible and a create is awaiting the store.
    Submitting,

    /// The modal was closed while a create is still awaiting the store.
    Pending,
}

impl ModalState {
    /// Whether the modal should be drawn.
    ///
    /// `Submitting` is still visible, so hosts that only know `Closed | Open`
    /// see it as open and `Pending` as closed.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Open | Self::Submitting)
    }

    /// Whether a create is awaiting the store.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Submitting | Self::Pending)
    }

    /// Opens the modal. Re-opening is a no-op and a pending create is shown again.
    #[must_use]
    pub const fn open(self) -> Self {
        match self {
            Self::Submitting | Self::Pending => Self::Submitting,
            Self::Closed | Self::Open => Self::Open,
        }
    }

    /// Hides the modal, keeping track of a pending create.
    #[must_use]
    pub const fn close(self) -> Self {
        match self {
            Self::Submitting | Self::Pending => Self::Pending,
            Self::Closed | Self::Open => Self::Closed,
        }
    }

    /// Marks a create as in flight.
    ///
    /// # Errors
    ///
    /// Returns [`BucketsError::CreateInFlight`] if a create is already pending,
    /// and [`BucketsError::ModalClosed`] if the form is not open.
    pub fn begin_submit(self) -> Result<Self> {
        match self {
            Self::Submitting | Self::Pending => Err(BucketsError::CreateInFlight),
            Self::Closed => Err(BucketsError::ModalClosed),
            Self::Open => Ok(Self::Submitting),
        }
    }

    /// The pending create resolved successfully; the modal closes.
    #[must_use]
    pub const fn submit_succeeded(self) -> Self {
        Self::Closed
    }

    /// The pending create failed; a visible modal stays up for another attempt.
    ///
    /// If the user closed the modal while the create was pending it stays closed.
    #[must_use]
    pub const fn submit_failed(self) -> Self {
        match self {
            Self::Submitting => Self::Open,
            Self::Pending => Self::Closed,
            other => other,
        }
    }
}

/// Direction applied on top of the sort comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction, used when a column header is clicked twice.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Parses `asc`/`ascending` or `desc`/`descending`, ignoring case.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Ascending),
            "desc" | "descending" => Some(Self::Descending),
            _ => None,
        }
    }

    /// Arrow shown next to the sorted column header.
    #[must_use]
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Comparison strategy applied to the sort key's values.
///
/// Only string comparison exists today; the tag is kept separate from the key
/// so numeric or date strategies can be added per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortType {
    #[default]
    String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_starts_closed() {
        assert_eq!(ModalState::default(), ModalState::Closed);
        assert!(!ModalState::default().is_visible());
    }

    #[test]
    fn open_and_close_transitions() {
        assert_eq!(ModalState::Closed.open(), ModalState::Open);
        assert_eq!(ModalState::Open.open(), ModalState::Open);
        assert_eq!(ModalState::Open.close(), ModalState::Closed);
        assert_eq!(ModalState::Closed.close(), ModalState::Closed);
        assert_eq!(ModalState::Submitting.open(), ModalState::Submitting);
    }

    #[test]
    fn closing_while_submitting_keeps_create_pending() {
        let hidden = ModalState::Submitting.close();
        assert_eq!(hidden, ModalState::Pending);
        assert!(!hidden.is_visible());
        assert!(hidden.is_pending());
        assert!(matches!(hidden.begin_submit(), Err(BucketsError::CreateInFlight)));

        let reopened = hidden.open();
        assert_eq!(reopened, ModalState::Submitting);
        assert!(matches!(reopened.begin_submit(), Err(BucketsError::CreateInFlight)));
    }

    #[test]
    fn submit_guard_rejects_second_submit() {
        let pending = ModalState::Open.begin_submit().unwrap();
        assert_eq!(pending, ModalState::Submitting);
        assert!(pending.is_visible());
        assert!(matches!(pending.begin_submit(), Err(BucketsError::CreateInFlight)));
    }

    #[test]
    fn submit_requires_open_form() {
        assert!(matches!(ModalState::Closed.begin_submit(), Err(BucketsError::ModalClosed)));
    }

    #[test]
    fn submit_outcomes() {
        assert_eq!(ModalState::Submitting.submit_succeeded(), ModalState::Closed);
        assert_eq!(ModalState::Pending.submit_succeeded(), ModalState::Closed);
        assert_eq!(ModalState::Submitting.submit_failed(), ModalState::Open);
        assert_eq!(ModalState::Pending.submit_failed(), ModalState::Closed);
        assert_eq!(ModalState::Closed.submit_failed(), ModalState::Closed);
    }

    #[test]
    fn direction_tokens() {
        assert_eq!(SortDirection::from_token("DESC"), Some(SortDirection::Descending));
        assert_eq!(SortDirection::from_token("ascending"), Some(SortDirection::Ascending));
        assert_eq!(SortDirection::from_token("up"), None);
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
    }
}
