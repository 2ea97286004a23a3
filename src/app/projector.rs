//! Projection of store records into display records.
//!
//! [`project`] attaches the precomputed retention string to every bucket so the
//! filter can search it and the table can show it. The projection is rebuilt on
//! every pass from the current snapshot and never cached.

use crate::domain::{format_duration, Bucket, RetentionRule, FOREVER};
use serde::Serialize;
use std::ops::Deref;

/// A bucket enriched with its human-readable retention string.
///
/// Serializes as the bucket's own fields plus `ruleString`, which is what the
/// filter's field paths address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayBucket {
    #[serde(flatten)]
    pub bucket: Bucket,
    pub rule_string: String,
}

impl DisplayBucket {
    /// Drops the derived retention string, returning the underlying record.
    #[must_use]
    pub fn into_bucket(self) -> Bucket {
        self.bucket
    }
}

impl Deref for DisplayBucket {
    type Target = Bucket;

    fn deref(&self) -> &Bucket {
        &self.bucket
    }
}

/// Returns the retention string for a single bucket.
///
/// The first `Expire` rule wins. Buckets carrying several `Expire` rules are
/// displayed by the first one and logged, since the store is expected to hold
/// at most one.
#[must_use]
pub fn rule_string(bucket: &Bucket) -> String {
    let mut expiring = bucket
        .retention_rules
        .iter()
        .filter_map(RetentionRule::every_seconds);

    let Some(every_seconds) = expiring.next() else {
        return FOREVER.to_string();
    };

    let extra = expiring.count();
    if extra > 0 {
        tracing::warn!(
            bucket_id = %bucket.id,
            bucket_name = %bucket.name,
            ignored_rules = extra,
            "bucket has more than one expire rule, displaying the first"
        );
    }

    format_duration(every_seconds)
}

/// Projects store records into display records, preserving order.
///
/// # Examples
///
/// ```
/// use bucket_list::app::projector::project;
/// use bucket_list::domain::{Bucket, RetentionRule};
///
/// let buckets = vec![
///     Bucket::new("1", "a", "org"),
///     Bucket::new("2", "b", "org").with_rule(RetentionRule::expire(3600)),
/// ];
/// let rules: Vec<String> = project(&buckets).into_iter().map(|b| b.rule_string).collect();
/// assert_eq!(rules, vec!["forever", "1 hour"]);
/// ```
#[must_use]
pub fn project(buckets: &[Bucket]) -> Vec<DisplayBucket> {
    let _span = tracing::debug_span!("project_buckets", count = buckets.len()).entered();

    buckets
        .iter()
        .map(|bucket| DisplayBucket {
            rule_string: rule_string(bucket),
            bucket: bucket.clone(),
        })
        .collect()
}
