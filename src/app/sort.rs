//! Column sorting for the visible bucket rows.
//!
//! A sort is the combination of a [`SortKey`] (which column), a
//! [`SortType`] (how values compare) and a [`SortDirection`]. The type tag
//! selects a comparator from [`SortType::comparator`]; the direction flips
//! the comparator's arguments rather than the output, so rows that compare
//! equal keep their filtered order in both directions.

use super::modes::{SortDirection, SortType};
use super::projector::DisplayBucket;
use std::borrow::Cow;
use std::cmp::Ordering;

/// Comparator selected by a [`SortType`].
pub type Comparator = fn(&DisplayBucket, &DisplayBucket, SortKey) -> Ordering;

/// Sortable columns of the bucket table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    RuleString,
    Id,
    Organization,
}

impl SortKey {
    /// Every sortable column, in table order.
    pub const ALL: [Self; 4] = [Self::Name, Self::RuleString, Self::Id, Self::Organization];

    /// The value this column holds for a row, as a string.
    #[must_use]
    pub fn value(self, bucket: &DisplayBucket) -> Cow<'_, str> {
        match self {
            Self::Name => Cow::Borrowed(bucket.name.as_str()),
            Self::RuleString => Cow::Borrowed(bucket.rule_string.as_str()),
            Self::Id => Cow::Borrowed(bucket.id.as_str()),
            Self::Organization => Cow::Borrowed(
                bucket
                    .organization
                    .as_deref()
                    .unwrap_or(bucket.organization_id.as_str()),
            ),
        }
    }

    /// The comparison strategy this column's values need.
    #[must_use]
    pub const fn natural_sort_type(self) -> SortType {
        match self {
            Self::Name | Self::RuleString | Self::Id | Self::Organization => SortType::String,
        }
    }

    /// Column header text.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::RuleString => "RETENTION",
            Self::Id => "ID",
            Self::Organization => "ORGANIZATION",
        }
    }

    /// Parses a column name such as `name`, `retention`, `id` or `org`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "retention" | "rule" | "rulestring" => Some(Self::RuleString),
            "id" => Some(Self::Id),
            "org" | "organization" => Some(Self::Organization),
            _ => None,
        }
    }
}

impl SortType {
    /// The comparator implementing this strategy.
    #[must_use]
    pub fn comparator(self) -> Comparator {
        match self {
            Self::String => compare_as_strings,
        }
    }
}

/// Case-sensitive, locale-naive lexicographic comparison of the key's values.
fn compare_as_strings(a: &DisplayBucket, b: &DisplayBucket, key: SortKey) -> Ordering {
    key.value(a).cmp(&key.value(b))
}

/// Compares two rows under a key and strategy, ascending.
#[must_use]
pub fn compare(a: &DisplayBucket, b: &DisplayBucket, key: SortKey, sort_type: SortType) -> Ordering {
    (sort_type.comparator())(a, b, key)
}

/// Sorts rows in place. The sort is stable in both directions.
///
/// # Examples
///
/// ```
/// use bucket_list::app::projector::project;
/// use bucket_list::app::sort::{sort_buckets, SortKey};
/// use bucket_list::app::{SortDirection, SortType};
/// use bucket_list::domain::Bucket;
///
/// let mut rows = project(&[Bucket::new("1", "b", "o"), Bucket::new("2", "a", "o")]);
/// sort_buckets(&mut rows, SortKey::Name, SortDirection::Descending, SortType::String);
/// let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
/// assert_eq!(names, vec!["b", "a"]);
/// ```
pub fn sort_buckets(
    rows: &mut [DisplayBucket],
    key: SortKey,
    direction: SortDirection,
    sort_type: SortType,
) {
    let _span = tracing::debug_span!("sort_buckets",
        rows = rows.len(),
        key = ?key,
        direction = ?direction
    )
    .entered();

    if key.natural_sort_type() != sort_type {
        tracing::warn!(
            key = ?key,
            sort_type = ?sort_type,
            expected = ?key.natural_sort_type(),
            "column sorted with a strategy that does not match its values"
        );
    }

    let comparator = sort_type.comparator();
    rows.sort_by(|a, b| match direction {
        SortDirection::Ascending => comparator(a, b, key),
        SortDirection::Descending => comparator(b, a, key),
    });
}
