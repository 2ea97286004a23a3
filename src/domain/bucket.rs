//! Bucket domain model.
//!
//! This module defines the records handed to the list layer by the bucket store:
//! [`Bucket`] with its [`RetentionRule`]s and [`Label`]s, the owning
//! [`Organization`], the [`BucketDraft`] produced by the create form, and the
//! [`StoreSnapshot`] that bundles them for one render pass.
//!
//! Records serialize with the field names the bucket API uses (`orgID`,
//! `retentionRules`, `everySeconds`), so snapshot files can be loaded as-is.

use serde::{Deserialize, Serialize};

/// A retention policy attached to a bucket.
///
/// Only `Expire` carries meaning for display; every other rule kind is kept as
/// [`RetentionRule::Other`] so unknown kinds still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RetentionRule {
    /// Data older than `every_seconds` is discarded.
    #[serde(rename_all = "camelCase")]
    Expire {
        /// Time-to-live in seconds.
        every_seconds: u64,
    },

    /// Any rule kind the list does not interpret.
    #[serde(other)]
    Other,
}

impl RetentionRule {
    /// Creates an `Expire` rule with the given time-to-live.
    #[must_use]
    pub const fn expire(every_seconds: u64) -> Self {
        Self::Expire { every_seconds }
    }

    /// Returns the time-to-live if this is an `Expire` rule.
    #[must_use]
    pub const fn every_seconds(&self) -> Option<u64> {
        match self {
            Self::Expire { every_seconds } => Some(*every_seconds),
            Self::Other => None,
        }
    }
}

/// A label attached to a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub name: String,
    /// Optional hex color used for the label pill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Label {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// The organization that owns the bucket collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
}

impl Organization {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A named, retention-governed storage container.
///
/// Buckets are owned by the store. The list layer never mutates one; edits are
/// forwarded to the store, which replaces its copy on success.
///
/// # Fields
///
/// - `id`: Store-assigned identifier
/// - `name`: Display name, unique within the organization
/// - `organization_id`: Owning organization
/// - `organization`: Owning organization's name, when the store provides it
/// - `retention_rules`: Zero or more rules; the first `Expire` rule is displayed
/// - `labels`: Labels attached to the bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub id: String,
    pub name: String,
    #[serde(rename = "orgID")]
    pub organization_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default)]
    pub retention_rules: Vec<RetentionRule>,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl Bucket {
    /// Creates a bucket with no rules and no labels.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucket_list::domain::{Bucket, RetentionRule};
    ///
    /// let bucket = Bucket::new("b1", "telemetry", "org1")
    ///     .with_rule(RetentionRule::expire(3600));
    /// assert_eq!(bucket.retention_rules.len(), 1);
    /// assert!(bucket.labels.is_empty());
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        organization_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            organization_id: organization_id.into(),
            organization: None,
            retention_rules: Vec::new(),
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rule(mut self, rule: RetentionRule) -> Self {
        self.retention_rules.push(rule);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }
}

/// The payload of the create-bucket form.
///
/// The store assigns the id when the draft is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketDraft {
    pub name: String,
    #[serde(rename = "orgID")]
    pub organization_id: String,
    #[serde(default)]
    pub retention_rules: Vec<RetentionRule>,
}

impl BucketDraft {
    /// Creates a draft that retains data forever.
    #[must_use]
    pub fn new(name: impl Into<String>, organization_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            organization_id: organization_id.into(),
            retention_rules: Vec::new(),
        }
    }

    /// Adds an `Expire` rule to the draft.
    #[must_use]
    pub fn expiring_after(mut self, every_seconds: u64) -> Self {
        self.retention_rules.push(RetentionRule::expire(every_seconds));
        self
    }
}

/// A read-only view of the store handed to the list on every change.
///
/// `version` increases every time the store applies a change, letting hosts
/// poll cheaply and letting the list skip renders for unchanged snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub organization: Organization,
    #[serde(default)]
    pub buckets: Vec<Bucket>,
    #[serde(default)]
    pub version: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_deserializes_api_field_names() {
        let json = r#"{
            "id": "b1",
            "name": "telemetry",
            "orgID": "o1",
            "retentionRules": [{"type": "expire", "everySeconds": 3600}],
            "labels": [{"id": "l1", "name": "prod"}]
        }"#;

        let bucket: Bucket = serde_json::from_str(json).unwrap();
        assert_eq!(bucket.organization_id, "o1");
        assert_eq!(bucket.retention_rules, vec![RetentionRule::expire(3600)]);
        assert_eq!(bucket.labels[0].name, "prod");
        assert!(bucket.organization.is_none());
    }

    #[test]
    fn unknown_rule_kinds_deserialize_as_other() {
        let json = r#"[{"type": "shardGroup"}, {"type": "expire", "everySeconds": 60}]"#;
        let rules: Vec<RetentionRule> = serde_json::from_str(json).unwrap();
        assert_eq!(rules, vec![RetentionRule::Other, RetentionRule::expire(60)]);
        assert_eq!(rules[0].every_seconds(), None);
        assert_eq!(rules[1].every_seconds(), Some(60));
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let bucket: Bucket =
            serde_json::from_str(r#"{"id": "b1", "name": "x", "orgID": "o1"}"#).unwrap();
        assert!(bucket.retention_rules.is_empty());
        assert!(bucket.labels.is_empty());
    }

    #[test]
    fn draft_builder_adds_expire_rule() {
        let draft = BucketDraft::new("metrics", "o1").expiring_after(86_400);
        assert_eq!(draft.retention_rules, vec![RetentionRule::expire(86_400)]);
    }
}
