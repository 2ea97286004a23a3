//! Domain layer for the bucket list.
//!
//! Core record types and pure helpers, independent of rendering and of the
//! store that owns the data.
//!
//! # Organization
//!
//! - [`bucket`]: Bucket, retention rule, label and snapshot records
//! - [`error`]: Error types and result aliases
//! - [`retention`]: Human-readable retention durations
//!
//! # Examples
//!
//! ```
//! use bucket_list::domain::{format_duration, Bucket, RetentionRule};
//!
//! let bucket = Bucket::new("b1", "telemetry", "org1").with_rule(RetentionRule::expire(7200));
//! let ttl = bucket.retention_rules[0].every_seconds().map(format_duration);
//! assert_eq!(ttl.as_deref(), Some("2 hours"));
//! ```

pub mod bucket;
pub mod error;
pub mod retention;

pub use bucket::{Bucket, BucketDraft, Label, Organization, RetentionRule, StoreSnapshot};
pub use error::{BucketsError, Result};
pub use retention::{format_duration, FOREVER};
