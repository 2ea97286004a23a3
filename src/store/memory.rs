//! In-memory bucket store.
//!
//! [`MemoryStore`] keeps one organization's buckets behind a mutex, assigns
//! ids to created buckets and bumps a version counter on every successful
//! change. It can be seeded from a JSON snapshot file:
//!
//! ```json
//! {
//!   "organization": { "id": "o1", "name": "acme" },
//!   "buckets": [
//!     {
//!       "id": "0000000000000001",
//!       "name": "telemetry",
//!       "orgID": "o1",
//!       "retentionRules": [{ "type": "expire", "everySeconds": 3600 }],
//!       "labels": [{ "id": "l1", "name": "prod" }]
//!     }
//!   ]
//! }
//! ```

use crate::domain::{Bucket, BucketDraft, BucketsError, Organization, Result, StoreSnapshot};
use crate::store::backend::{BucketService, BucketSource};
use futures_util::future::BoxFuture;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Inner {
    organization: Organization,
    buckets: Vec<Bucket>,
    version: u64,
    next_id: u64,
}

impl Inner {
    fn bump(&mut self) {
        self.version = self.version.saturating_add(1);
    }

    fn allocate_id(&mut self) -> String {
        loop {
            self.next_id = self.next_id.saturating_add(1);
            let id = format!("{:016x}", self.next_id);
            if !self.buckets.iter().any(|b| b.id == id) {
                return id;
            }
        }
    }

    fn name_taken(&self, name: &str, except_id: Option<&str>) -> bool {
        self.buckets
            .iter()
            .any(|b| b.name == name && Some(b.id.as_str()) != except_id)
    }
}

/// Mutex-guarded in-memory store for a single organization.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Creates an empty store at version 0.
    #[must_use]
    pub fn new(organization: Organization) -> Self {
        Self {
            inner: Mutex::new(Inner {
                organization,
                ..Inner::default()
            }),
        }
    }

    /// Creates a store holding the snapshot's buckets.
    #[must_use]
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            inner: Mutex::new(Inner {
                organization: snapshot.organization,
                buckets: snapshot.buckets,
                version: snapshot.version,
                next_id: 0,
            }),
        }
    }

    /// Loads a store from a JSON snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid snapshot.
    pub fn load(path: &Path) -> Result<Self> {
        let _span = tracing::debug_span!("memory_store_load", path = %path.display()).entered();

        let contents = std::fs::read_to_string(path)?;
        let snapshot: StoreSnapshot = serde_json::from_str(&contents)
            .map_err(|e| BucketsError::Storage(format!("failed to parse snapshot: {e}")))?;

        tracing::debug!(
            organization = %snapshot.organization.name,
            buckets = snapshot.buckets.len(),
            "snapshot loaded"
        );
        Ok(Self::from_snapshot(snapshot))
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validates and stores a draft, returning the stored bucket.
    ///
    /// # Errors
    ///
    /// Returns [`BucketsError::InvalidBucket`] for blank names and for names
    /// already used in the organization.
    pub fn insert(&self, draft: BucketDraft) -> Result<Bucket> {
        let _span = tracing::debug_span!("memory_store_insert", name = %draft.name).entered();

        let name = draft.name.trim();
        if name.is_empty() {
            return Err(BucketsError::InvalidBucket("bucket name must not be blank".to_string()));
        }

        let mut inner = self.lock();
        if inner.name_taken(name, None) {
            return Err(BucketsError::InvalidBucket(format!("a bucket named '{name}' already exists")));
        }

        let organization_id = if draft.organization_id.is_empty() {
            inner.organization.id.clone()
        } else {
            draft.organization_id
        };

        let mut bucket = Bucket::new(inner.allocate_id(), name, organization_id);
        bucket.organization = Some(inner.organization.name.clone());
        bucket.retention_rules = draft.retention_rules;

        inner.buckets.push(bucket.clone());
        inner.bump();

        tracing::info!(bucket_id = %bucket.id, version = inner.version, "bucket created");
        Ok(bucket)
    }

    /// Replaces the bucket with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`BucketsError::NotFound`] for unknown ids and
    /// [`BucketsError::InvalidBucket`] for blank or duplicate names.
    pub fn replace(&self, bucket: Bucket) -> Result<()> {
        let _span = tracing::debug_span!("memory_store_replace", bucket_id = %bucket.id).entered();

        if bucket.name.trim().is_empty() {
            return Err(BucketsError::InvalidBucket("bucket name must not be blank".to_string()));
        }

        let mut inner = self.lock();
        if inner.name_taken(&bucket.name, Some(&bucket.id)) {
            return Err(BucketsError::InvalidBucket(format!(
                "a bucket named '{}' already exists",
                bucket.name
            )));
        }

        let slot = inner
            .buckets
            .iter_mut()
            .find(|b| b.id == bucket.id)
            .ok_or_else(|| BucketsError::NotFound(bucket.id.clone()))?;
        *slot = bucket;
        inner.bump();

        tracing::debug!(version = inner.version, "bucket replaced");
        Ok(())
    }

    /// Removes a bucket, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`BucketsError::NotFound`] for unknown ids.
    pub fn remove(&self, id: &str) -> Result<Bucket> {
        let _span = tracing::debug_span!("memory_store_remove", bucket_id = %id).entered();

        let mut inner = self.lock();
        let position = inner
            .buckets
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| BucketsError::NotFound(id.to_string()))?;
        let removed = inner.buckets.remove(position);
        inner.bump();

        tracing::debug!(version = inner.version, "bucket removed");
        Ok(removed)
    }

    /// Looks a bucket up by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Bucket> {
        self.lock().buckets.iter().find(|b| b.id == id).cloned()
    }
}

impl BucketSource for MemoryStore {
    fn snapshot(&self) -> StoreSnapshot {
        let inner = self.lock();
        StoreSnapshot {
            organization: inner.organization.clone(),
            buckets: inner.buckets.clone(),
            version: inner.version,
        }
    }

    fn version(&self) -> u64 {
        self.lock().version
    }
}

impl BucketService for MemoryStore {
    fn create(&self, draft: BucketDraft) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move { self.insert(draft).map(|_| ()) })
    }

    fn update(&self, bucket: Bucket) {
        if let Err(e) = self.replace(bucket) {
            tracing::error!(error = %e, "bucket update failed");
        }
    }

    fn delete(&self, id: &str, name: &str) {
        match self.remove(id) {
            Ok(_) => tracing::info!(bucket_id = %id, bucket_name = %name, "bucket deleted"),
            Err(e) => tracing::error!(error = %e, bucket_name = %name, "bucket delete failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::io::Write;

    fn store() -> MemoryStore {
        MemoryStore::new(Organization::new("o1", "acme"))
    }

    #[test]
    fn create_assigns_ids_and_bumps_version() {
        let store = store();
        block_on(store.create(BucketDraft::new("a", "o1").expiring_after(60))).unwrap();
        block_on(store.create(BucketDraft::new("b", ""))).unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.version, 2);
        assert_eq!(snapshot.buckets[0].id, "0000000000000001");
        assert_eq!(snapshot.buckets[0].retention_rules.len(), 1);
        assert_eq!(snapshot.buckets[1].organization_id, "o1");
        assert_eq!(snapshot.buckets[1].organization.as_deref(), Some("acme"));
    }

    #[test]
    fn create_rejects_blank_and_duplicate_names() {
        let store = store();
        store.insert(BucketDraft::new("a", "o1")).unwrap();

        let blank = block_on(store.create(BucketDraft::new("  ", "o1")));
        assert!(matches!(blank, Err(BucketsError::InvalidBucket(_))));
        let duplicate = block_on(store.create(BucketDraft::new("a", "o1")));
        assert!(matches!(duplicate, Err(BucketsError::InvalidBucket(_))));
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn allocated_ids_skip_seeded_ids() {
        let store = MemoryStore::from_snapshot(StoreSnapshot {
            organization: Organization::new("o1", "acme"),
            buckets: vec![Bucket::new("0000000000000001", "seeded", "o1")],
            version: 5,
        });
        let created = store.insert(BucketDraft::new("new", "o1")).unwrap();
        assert_eq!(created.id, "0000000000000002");
        assert_eq!(store.version(), 6);
    }

    #[test]
    fn update_and_delete_change_the_collection() {
        let store = store();
        let mut bucket = store.insert(BucketDraft::new("a", "o1")).unwrap();

        bucket.name = "renamed".to_string();
        store.update(bucket.clone());
        assert_eq!(store.get(&bucket.id).unwrap().name, "renamed");

        store.delete(&bucket.id, &bucket.name);
        assert!(store.get(&bucket.id).is_none());
        assert_eq!(store.version(), 3);
    }

    #[test]
    fn failed_mutations_leave_version_alone() {
        let store = store();
        store.update(Bucket::new("missing", "x", "o1"));
        store.delete("missing", "x");
        assert_eq!(store.version(), 0);
        assert!(matches!(store.remove("missing"), Err(BucketsError::NotFound(_))));
    }

    #[test]
    fn loads_snapshot_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "organization": {{ "id": "o1", "name": "acme" }},
                "buckets": [{{
                    "id": "b1",
                    "name": "telemetry",
                    "orgID": "o1",
                    "retentionRules": [{{ "type": "expire", "everySeconds": 3600 }}]
                }}]
            }}"#
        )
        .unwrap();

        let store = MemoryStore::load(file.path()).unwrap();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.organization.name, "acme");
        assert_eq!(snapshot.buckets[0].retention_rules[0].every_seconds(), Some(3600));
    }

    #[test]
    fn rejects_malformed_snapshot_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(MemoryStore::load(file.path()), Err(BucketsError::Storage(_))));
    }
}
