//! Store abstraction.
//!
//! This module defines the two seams between the list and whatever holds the
//! buckets. [`BucketSource`] is read side: the host polls `version()` and
//! hands a fresh [`StoreSnapshot`] to the list when it moves.
//! [`BucketService`] is write side: creates are awaited so the modal can react
//! to the outcome, updates and deletes are fire-and-forget and the store
//! reports their failures on its own channel.

use crate::domain::{Bucket, BucketDraft, Result, StoreSnapshot};
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Read access to the current bucket collection.
///
/// # Examples
///
/// ```
/// use bucket_list::domain::{BucketDraft, Organization};
/// use bucket_list::store::{BucketSource, MemoryStore};
///
/// let store = MemoryStore::new(Organization::new("o1", "acme"));
/// let before = store.version();
/// store.insert(BucketDraft::new("telemetry", "o1"))?;
/// assert!(store.version() > before);
/// assert_eq!(store.snapshot().buckets.len(), 1);
/// # Ok::<(), bucket_list::BucketsError>(())
/// ```
pub trait BucketSource {
    /// A copy of the collection as it is now.
    fn snapshot(&self) -> StoreSnapshot;

    /// Increases every time the collection changes.
    fn version(&self) -> u64;
}

/// Mutations requested by the list.
pub trait BucketService {
    /// Creates a bucket from a draft.
    ///
    /// # Errors
    ///
    /// The future resolves to the store's rejection, which the caller
    /// propagates unchanged.
    fn create(&self, draft: BucketDraft) -> BoxFuture<'_, Result<()>>;

    /// Replaces a bucket. Failures are the store's to report.
    fn update(&self, bucket: Bucket);

    /// Deletes a bucket. Failures are the store's to report.
    fn delete(&self, id: &str, name: &str);
}

impl<T: BucketSource + ?Sized> BucketSource for Arc<T> {
    fn snapshot(&self) -> StoreSnapshot {
        (**self).snapshot()
    }

    fn version(&self) -> u64 {
        (**self).version()
    }
}

impl<T: BucketService + ?Sized> BucketService for Arc<T> {
    fn create(&self, draft: BucketDraft) -> BoxFuture<'_, Result<()>> {
        (**self).create(draft)
    }

    fn update(&self, bucket: Bucket) {
        (**self).update(bucket);
    }

    fn delete(&self, id: &str, name: &str) {
        (**self).delete(id, name);
    }
}
