//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user interactions
//! and store notifications, translating them into state changes and action
//! sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the host (user input) or the store (snapshots)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur on [`ListState`]
//! 4. Actions are collected and returned for the caller to execute
//!
//! # Event Types
//!
//! - **Search**: `SearchChanged`, `SearchCommitted`, `LabelClicked`
//! - **Sort**: `ColumnClicked`
//! - **Modal**: `OpenCreate`, `CloseCreate`, `SubmitCreate`, `CreateSucceeded`, `CreateFailed`
//! - **Mutations**: `UpdateBucket`, `DeleteBucket`
//! - **Store**: `StoreUpdated`
//!
//! # Example
//!
//! ```rust
//! use bucket_list::app::{handle_event, Event, ListState};
//! use bucket_list::domain::StoreSnapshot;
//! use bucket_list::ui::Theme;
//!
//! let mut state = ListState::new(StoreSnapshot::default(), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::SearchChanged("tel".into()))?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), bucket_list::BucketsError>(())
//! ```

use super::actions::Action;
use super::projector::DisplayBucket;
use super::sort::SortKey;
use super::state::ListState;
use super::SortDirection;
use crate::domain::{BucketDraft, Result, StoreSnapshot};

/// Events triggered by user interaction or store changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search input changed while typing.
    SearchChanged(String),

    /// The search input lost focus with this value.
    SearchCommitted(String),

    /// A label pill was clicked; its name becomes the search term.
    LabelClicked(String),

    /// A column header was clicked.
    ColumnClicked {
        key: SortKey,
        direction: SortDirection,
    },

    /// Shows the create-bucket modal.
    OpenCreate,

    /// Hides the create-bucket modal.
    CloseCreate,

    /// The create form was submitted.
    SubmitCreate(BucketDraft),

    /// The store accepted the pending create.
    CreateSucceeded,

    /// The store rejected the pending create.
    CreateFailed {
        message: String,
    },

    /// A row was edited.
    UpdateBucket(DisplayBucket),

    /// A row's delete was confirmed.
    DeleteBucket(DisplayBucket),

    /// The store published a new snapshot.
    StoreUpdated(StoreSnapshot),
}

/// Processes an event, mutates list state, and returns actions to execute.
///
/// The returned flag asks the host to re-render.
///
/// # Errors
///
/// Returns [`BucketsError::CreateInFlight`](crate::BucketsError::CreateInFlight)
/// when a create is submitted while another is pending, and
/// [`BucketsError::ModalClosed`](crate::BucketsError::ModalClosed) when one is
/// submitted without the form open. State is left unchanged in both cases.
///
/// # Example
///
/// ```rust
/// use bucket_list::app::{handle_event, Action, Event, ListState};
/// use bucket_list::domain::{BucketDraft, StoreSnapshot};
/// use bucket_list::ui::Theme;
///
/// let mut state = ListState::new(StoreSnapshot::default(), Theme::default());
/// let draft = BucketDraft::new("telemetry", "org1");
/// handle_event(&mut state, &Event::OpenCreate)?;
/// let (_, actions) = handle_event(&mut state, &Event::SubmitCreate(draft.clone()))?;
/// assert_eq!(actions, vec![Action::CreateBucket(draft)]);
/// # Ok::<(), bucket_list::BucketsError>(())
/// ```
pub fn handle_event(state: &mut ListState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::SearchChanged(term) | Event::SearchCommitted(term) => {
            let changed = state.search_term != *term;
            state.search_term.clone_from(term);
            Ok((changed, vec![]))
        }
        Event::LabelClicked(name) => {
            tracing::debug!(label = %name, "filtering by label");
            state.search_term.clone_from(name);
            Ok((true, vec![]))
        }
        Event::ColumnClicked { key, direction } => {
            state.set_sort(*key, *direction);
            Ok((true, vec![]))
        }
        Event::OpenCreate => {
            state.modal = state.modal.open();
            Ok((true, vec![]))
        }
        Event::CloseCreate => {
            state.modal = state.modal.close();
            Ok((true, vec![]))
        }
        Event::SubmitCreate(draft) => {
            state.modal = state.modal.begin_submit()?;
            tracing::info!(bucket_name = %draft.name, "submitting create");
            Ok((true, vec![Action::CreateBucket(draft.clone())]))
        }
        Event::CreateSucceeded => {
            state.modal = state.modal.submit_succeeded();
            Ok((true, vec![]))
        }
        Event::CreateFailed { message } => {
            tracing::warn!(error = %message, "create failed");
            state.modal = state.modal.submit_failed();
            Ok((true, vec![]))
        }
        Event::UpdateBucket(row) => {
            tracing::debug!(bucket_id = %row.id, "updating bucket");
            Ok((false, vec![Action::UpdateBucket(row.clone().into_bucket())]))
        }
        Event::DeleteBucket(row) => {
            tracing::debug!(bucket_id = %row.id, "deleting bucket");
            Ok((
                false,
                vec![Action::DeleteBucket {
                    id: row.id.clone(),
                    name: row.name.clone(),
                }],
            ))
        }
        Event::StoreUpdated(snapshot) => {
            // Version 0 is an unversioned snapshot and always replaces.
            if snapshot.version == state.snapshot.version && state.snapshot.version != 0 {
                tracing::debug!(version = snapshot.version, "snapshot unchanged");
                return Ok((false, vec![]));
            }
            tracing::debug!(
                from = state.snapshot.version,
                to = snapshot.version,
                buckets = snapshot.buckets.len(),
                "snapshot replaced"
            );
            state.snapshot = snapshot.clone();
            Ok((true, vec![]))
        }
    }
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::SearchChanged(_) => "search_changed",
        Event::SearchCommitted(_) => "search_committed",
        Event::LabelClicked(_) => "label_clicked",
        Event::ColumnClicked { .. } => "column_clicked",
        Event::OpenCreate => "open_create",
        Event::CloseCreate => "close_create",
        Event::SubmitCreate(_) => "submit_create",
        Event::CreateSucceeded => "create_succeeded",
        Event::CreateFailed { .. } => "create_failed",
        Event::UpdateBucket(_) => "update_bucket",
        Event::DeleteBucket(_) => "delete_bucket",
        Event::StoreUpdated(_) => "store_updated",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::projector::project;
    use crate::app::{ModalState, SortType};
    use crate::domain::{Bucket, BucketsError, Label, Organization, RetentionRule};
    use crate::ui::viewmodel::EmptyStateKind;
    use crate::ui::Theme;

    fn snapshot(version: u64, buckets: Vec<Bucket>) -> StoreSnapshot {
        StoreSnapshot {
            organization: Organization::new("o1", "acme"),
            buckets,
            version,
        }
    }

    fn state_with(buckets: Vec<Bucket>) -> ListState {
        ListState::new(snapshot(1, buckets), Theme::default())
    }

    #[test]
    fn search_change_and_blur_both_set_term() {
        let mut state = state_with(vec![Bucket::new("1", "a", "o1"), Bucket::new("2", "b", "o1")]);

        handle_event(&mut state, &Event::SearchChanged("b".into())).unwrap();
        assert_eq!(state.visible_buckets().len(), 1);

        let (render, _) = handle_event(&mut state, &Event::SearchCommitted("b".into())).unwrap();
        assert!(!render);

        handle_event(&mut state, &Event::SearchCommitted(String::new())).unwrap();
        assert_eq!(state.visible_buckets().len(), 2);
    }

    #[test]
    fn label_click_filters_by_label() {
        let mut state = state_with(vec![
            Bucket::new("1", "a", "o1").with_label(Label::new("l1", "prod")),
            Bucket::new("2", "b", "o1"),
        ]);
        handle_event(&mut state, &Event::LabelClicked("prod".into())).unwrap();
        assert_eq!(state.search_term, "prod");
        let ids: Vec<String> = state.visible_buckets().iter().map(|b| b.id.clone()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn column_click_sorts_descending() {
        let mut state = state_with(vec![Bucket::new("1", "a", "o1"), Bucket::new("2", "b", "o1")]);
        handle_event(
            &mut state,
            &Event::ColumnClicked {
                key: SortKey::Name,
                direction: SortDirection::Descending,
            },
        )
        .unwrap();
        assert_eq!(state.sort_type, SortType::String);
        let names: Vec<String> = state.visible_buckets().iter().map(|b| b.name.clone()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn modal_open_is_idempotent_and_close_hides() {
        let mut state = state_with(vec![]);
        handle_event(&mut state, &Event::OpenCreate).unwrap();
        handle_event(&mut state, &Event::OpenCreate).unwrap();
        assert_eq!(state.modal, ModalState::Open);
        handle_event(&mut state, &Event::CloseCreate).unwrap();
        assert_eq!(state.modal, ModalState::Closed);
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut state = state_with(vec![]);
        let draft = BucketDraft::new("x", "o1");
        handle_event(&mut state, &Event::OpenCreate).unwrap();
        handle_event(&mut state, &Event::SubmitCreate(draft.clone())).unwrap();
        assert_eq!(state.modal, ModalState::Submitting);

        let second = handle_event(&mut state, &Event::SubmitCreate(draft));
        assert!(matches!(second, Err(BucketsError::CreateInFlight)));
        assert_eq!(state.modal, ModalState::Submitting);
    }

    #[test]
    fn reopening_during_pending_create_rejects_second_submit() {
        let mut state = state_with(vec![]);
        let draft = BucketDraft::new("x", "o1");
        handle_event(&mut state, &Event::OpenCreate).unwrap();
        handle_event(&mut state, &Event::SubmitCreate(draft.clone())).unwrap();
        handle_event(&mut state, &Event::CloseCreate).unwrap();
        assert!(!state.modal.is_visible());
        handle_event(&mut state, &Event::OpenCreate).unwrap();
        assert_eq!(state.modal, ModalState::Submitting);

        let second = handle_event(&mut state, &Event::SubmitCreate(draft));
        assert!(matches!(second, Err(BucketsError::CreateInFlight)));

        handle_event(&mut state, &Event::CreateSucceeded).unwrap();
        assert_eq!(state.modal, ModalState::Closed);
    }

    #[test]
    fn submit_without_open_form_is_rejected() {
        let mut state = state_with(vec![]);
        let result = handle_event(&mut state, &Event::SubmitCreate(BucketDraft::new("x", "o1")));
        assert!(matches!(result, Err(BucketsError::ModalClosed)));
        assert_eq!(state.modal, ModalState::Closed);
    }

    #[test]
    fn failed_create_keeps_modal_visible() {
        let mut state = state_with(vec![]);
        handle_event(&mut state, &Event::OpenCreate).unwrap();
        handle_event(&mut state, &Event::SubmitCreate(BucketDraft::new("x", "o1"))).unwrap();
        handle_event(&mut state, &Event::CreateFailed { message: "boom".into() }).unwrap();
        assert_eq!(state.modal, ModalState::Open);

        handle_event(&mut state, &Event::SubmitCreate(BucketDraft::new("x", "o1"))).unwrap();
        handle_event(&mut state, &Event::CreateSucceeded).unwrap();
        assert_eq!(state.modal, ModalState::Closed);
    }

    #[test]
    fn update_strips_rule_string() {
        let bucket = Bucket::new("1", "a", "o1").with_rule(RetentionRule::expire(60));
        let mut state = state_with(vec![bucket.clone()]);
        let display = project(&[bucket.clone()]).remove(0);
        assert_eq!(display.rule_string, "1 minute");

        let (render, actions) = handle_event(&mut state, &Event::UpdateBucket(display)).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::UpdateBucket(bucket)]);
    }

    #[test]
    fn delete_forwards_id_and_name() {
        let bucket = Bucket::new("42", "metrics", "o1");
        let mut state = state_with(vec![bucket.clone()]);
        let display = project(&[bucket]).remove(0);
        let (_, actions) = handle_event(&mut state, &Event::DeleteBucket(display)).unwrap();
        assert_eq!(
            actions,
            vec![Action::DeleteBucket {
                id: "42".into(),
                name: "metrics".into()
            }]
        );
    }

    #[test]
    fn store_update_replaces_snapshot_only_when_version_moves() {
        let mut state = state_with(vec![]);
        let (render, _) =
            handle_event(&mut state, &Event::StoreUpdated(snapshot(1, vec![Bucket::new("1", "a", "o1")]))).unwrap();
        assert!(!render);
        assert!(state.snapshot.buckets.is_empty());

        let (render, _) =
            handle_event(&mut state, &Event::StoreUpdated(snapshot(2, vec![Bucket::new("1", "a", "o1")]))).unwrap();
        assert!(render);
        assert_eq!(state.visible_buckets().len(), 1);
    }

    #[test]
    fn empty_state_after_search_without_buckets() {
        let mut state = state_with(vec![]);
        handle_event(&mut state, &Event::SearchChanged("xyz".into())).unwrap();
        assert_eq!(state.empty_state_view(), EmptyStateKind::NoMatches);
    }
}
