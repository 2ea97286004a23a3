//! Async driver tying the list state to a store.
//!
//! [`ListController`] owns a [`ListState`] and a [`BucketService`]. Each call
//! feeds an [`Event`] through [`handle_event`] and executes the resulting
//! actions: updates and deletes go straight to the service, a create is
//! awaited and its outcome fed back as `CreateSucceeded` or `CreateFailed`.
//!
//! ```text
//! submit_create(draft)
//!   ├─ SubmitCreate ──▶ modal: Submitting, Action::CreateBucket
//!   ├─ service.create(draft).await
//!   ├─ Ok  ──▶ CreateSucceeded ──▶ modal: Closed
//!   └─ Err ──▶ CreateFailed    ──▶ modal: Open, error returned to caller
//! ```

use super::actions::Action;
use super::handler::{handle_event, Event};
use super::projector::DisplayBucket;
use super::sort::SortKey;
use super::state::ListState;
use super::SortDirection;
use crate::domain::{BucketDraft, Result};
use crate::store::{BucketService, BucketSource};
use tracing::Instrument;

/// Owns list state and forwards its actions to a store.
#[derive(Debug)]
pub struct ListController<S> {
    state: ListState,
    service: S,
}

impl<S: BucketService> ListController<S> {
    #[must_use]
    pub const fn new(state: ListState, service: S) -> Self {
        Self { state, service }
    }

    #[must_use]
    pub const fn state(&self) -> &ListState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }

    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Processes an event, running every action it produces.
    ///
    /// Returns whether the host should re-render.
    ///
    /// # Errors
    ///
    /// Returns the handler's error, or the store's rejection of a create. A
    /// rejected create has already moved the modal back to `Open`.
    pub async fn dispatch(&mut self, event: Event) -> Result<bool> {
        let (mut render, pending) = self.apply(&event)?;

        let Some(draft) = pending else {
            return Ok(render);
        };

        let outcome = self.service.create(draft).await;
        let follow_up = match &outcome {
            Ok(()) => Event::CreateSucceeded,
            Err(e) => Event::CreateFailed {
                message: e.to_string(),
            },
        };
        let (rendered, _) = self.apply(&follow_up)?;
        render |= rendered;

        outcome.map(|()| render)
    }

    /// Runs the handler and executes the fire-and-forget actions, returning
    /// the draft of a create that still needs awaiting.
    fn apply(&mut self, event: &Event) -> Result<(bool, Option<BucketDraft>)> {
        let (render, actions) = handle_event(&mut self.state, event)?;

        let mut pending = None;
        for action in actions {
            match action {
                Action::CreateBucket(draft) => pending = Some(draft),
                Action::UpdateBucket(bucket) => self.service.update(bucket),
                Action::DeleteBucket { id, name } => self.service.delete(&id, &name),
            }
        }
        Ok((render, pending))
    }

    fn apply_sync(&mut self, event: &Event) -> bool {
        match self.apply(event) {
            Ok((render, _)) => render,
            Err(e) => {
                tracing::warn!(error = %e, "event rejected");
                false
            }
        }
    }

    /// Live search input.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        self.apply_sync(&Event::SearchChanged(term.into()))
    }

    /// Search input lost focus.
    pub fn commit_search_term(&mut self, term: impl Into<String>) -> bool {
        self.apply_sync(&Event::SearchCommitted(term.into()))
    }

    pub fn filter_by_label(&mut self, name: impl Into<String>) -> bool {
        self.apply_sync(&Event::LabelClicked(name.into()))
    }

    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) -> bool {
        self.apply_sync(&Event::ColumnClicked { key, direction })
    }

    pub fn request_create(&mut self) -> bool {
        self.apply_sync(&Event::OpenCreate)
    }

    pub fn request_close(&mut self) -> bool {
        self.apply_sync(&Event::CloseCreate)
    }

    /// Sends an edited row to the store without its retention string.
    pub fn submit_update(&mut self, bucket: DisplayBucket) -> bool {
        self.apply_sync(&Event::UpdateBucket(bucket))
    }

    pub fn submit_delete(&mut self, bucket: DisplayBucket) -> bool {
        self.apply_sync(&Event::DeleteBucket(bucket))
    }

    /// Creates a bucket and closes the modal once the store accepts it.
    ///
    /// # Errors
    ///
    /// Returns [`BucketsError::CreateInFlight`](crate::BucketsError::CreateInFlight)
    /// if a create is already pending,
    /// [`BucketsError::ModalClosed`](crate::BucketsError::ModalClosed) if the
    /// form is not open, or the store's rejection unchanged.
    pub async fn submit_create(&mut self, draft: BucketDraft) -> Result<()> {
        let span = tracing::debug_span!("submit_create", bucket_name = %draft.name);
        self.dispatch(Event::SubmitCreate(draft))
            .instrument(span)
            .await
            .map(|_| ())
    }

    /// Pulls a new snapshot if the source's version moved.
    pub fn refresh(&mut self, source: &impl BucketSource) -> bool {
        if source.version() == self.state.snapshot.version && self.state.snapshot.version != 0 {
            return false;
        }
        self.apply_sync(&Event::StoreUpdated(source.snapshot()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::projector::project;
    use crate::app::ModalState;
    use crate::domain::{Bucket, BucketsError, Label, Organization, StoreSnapshot};
    use crate::store::MemoryStore;
    use crate::ui::viewmodel::EmptyStateKind;
    use crate::ui::Theme;
    use futures::executor::block_on;
    use futures_util::future::BoxFuture;
    use std::cell::RefCell;
    use std::sync::Arc;

    #[derive(Default)]
    struct RecordingService {
        fail_create: bool,
        updates: RefCell<Vec<Bucket>>,
        deletes: RefCell<Vec<(String, String)>>,
    }

    impl BucketService for RecordingService {
        fn create(&self, draft: BucketDraft) -> BoxFuture<'_, Result<()>> {
            let fail = self.fail_create;
            Box::pin(async move {
                if fail {
                    Err(BucketsError::Storage(format!("rejected {}", draft.name)))
                } else {
                    Ok(())
                }
            })
        }

        fn update(&self, bucket: Bucket) {
            self.updates.borrow_mut().push(bucket);
        }

        fn delete(&self, id: &str, name: &str) {
            self.deletes.borrow_mut().push((id.to_string(), name.to_string()));
        }
    }

    fn controller_with<S: BucketService>(service: S) -> ListController<S> {
        let snapshot = StoreSnapshot {
            organization: Organization::new("o1", "acme"),
            buckets: vec![],
            version: 0,
        };
        ListController::new(ListState::new(snapshot, Theme::default()), service)
    }

    #[test]
    fn successful_create_closes_modal() {
        let mut controller = controller_with(RecordingService::default());
        controller.request_create();
        assert_eq!(controller.state().modal, ModalState::Open);

        block_on(controller.submit_create(BucketDraft::new("x", "o1"))).unwrap();
        assert_eq!(controller.state().modal, ModalState::Closed);
    }

    #[test]
    fn failed_create_propagates_and_keeps_modal_open() {
        let mut controller = controller_with(RecordingService {
            fail_create: true,
            ..RecordingService::default()
        });
        controller.request_create();

        let result = block_on(controller.submit_create(BucketDraft::new("x", "o1")));
        assert!(matches!(result, Err(BucketsError::Storage(m)) if m == "rejected x"));
        assert_eq!(controller.state().modal, ModalState::Open);
    }

    #[test]
    fn submit_while_pending_is_rejected() {
        let mut controller = controller_with(RecordingService::default());
        controller.state_mut().modal = ModalState::Submitting;

        let result = block_on(controller.submit_create(BucketDraft::new("x", "o1")));
        assert!(matches!(result, Err(BucketsError::CreateInFlight)));
        assert_eq!(controller.state().modal, ModalState::Submitting);
    }

    #[test]
    fn update_and_delete_reach_the_service() {
        let mut controller = controller_with(RecordingService::default());
        let bucket = Bucket::new("b1", "metrics", "o1");
        let display = project(&[bucket.clone()]).remove(0);

        controller.submit_update(display.clone());
        controller.submit_delete(display);

        assert_eq!(*controller.service().updates.borrow(), vec![bucket]);
        assert_eq!(
            *controller.service().deletes.borrow(),
            vec![("b1".to_string(), "metrics".to_string())]
        );
    }

    #[test]
    fn memory_store_round_trip_through_refresh() {
        let store = Arc::new(MemoryStore::new(Organization::new("o1", "acme")));
        let mut controller = controller_with(Arc::clone(&store));

        controller.refresh(&store);
        assert_eq!(controller.state().empty_state_view(), EmptyStateKind::NoBuckets);

        controller.request_create();
        block_on(controller.submit_create(BucketDraft::new("telemetry", "o1").expiring_after(86_400)))
            .unwrap();
        assert!(controller.refresh(&store));
        assert!(!controller.refresh(&store));

        let rows = controller.state().visible_buckets();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rule_string, "1 day");

        controller.request_create();
        let duplicate =
            block_on(controller.submit_create(BucketDraft::new("telemetry", "o1")));
        assert!(matches!(duplicate, Err(BucketsError::InvalidBucket(_))));
        assert!(controller.state().modal.is_visible());
    }

    #[test]
    fn label_filter_and_sort_helpers() {
        let store = Arc::new(MemoryStore::from_snapshot(StoreSnapshot {
            organization: Organization::new("o1", "acme"),
            buckets: vec![
                Bucket::new("1", "a", "o1").with_label(Label::new("l", "prod")),
                Bucket::new("2", "b", "o1").with_label(Label::new("l", "prod")),
                Bucket::new("3", "c", "o1"),
            ],
            version: 1,
        }));
        let mut controller = controller_with(Arc::clone(&store));
        controller.refresh(&store);

        controller.filter_by_label("prod");
        controller.set_sort(SortKey::Name, SortDirection::Descending);
        let names: Vec<String> = controller.state().visible_buckets().iter().map(|b| b.name.clone()).collect();
        assert_eq!(names, vec!["b", "a"]);

        controller.commit_search_term("");
        assert_eq!(controller.state().visible_buckets().len(), 3);
    }
}
