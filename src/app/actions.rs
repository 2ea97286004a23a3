//! Actions representing side effects to be executed against the store.
//!
//! The event handler never talks to the store itself. It returns a
//! `Vec<Action>` after processing each event and the caller (usually
//! [`ListController`](crate::app::ListController)) forwards each action to its
//! [`BucketService`](crate::store::BucketService).
//!
//! # Example
//!
//! ```rust
//! use bucket_list::app::Action;
//! use bucket_list::domain::BucketDraft;
//!
//! let action = Action::CreateBucket(BucketDraft::new("telemetry", "org1"));
//! assert!(matches!(action, Action::CreateBucket(ref draft) if draft.name == "telemetry"));
//! ```

use crate::domain::{Bucket, BucketDraft};

/// Commands for the store collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Creates a bucket from the modal's draft.
    ///
    /// The caller awaits the result and reports it back with
    /// `Event::CreateSucceeded` or `Event::CreateFailed`.
    CreateBucket(BucketDraft),

    /// Replaces a bucket. The display-only retention string has already been
    /// stripped.
    UpdateBucket(Bucket),

    /// Deletes a bucket. The name travels with the id so the store can word
    /// its confirmation.
    DeleteBucket {
        id: String,
        name: String,
    },
}
