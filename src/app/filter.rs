//! Case-insensitive substring filtering over record fields.
//!
//! [`filter`] keeps the records whose fields contain the search term. Fields are
//! addressed by [`FieldPath`]s resolved against each record's serialized form,
//! so any `Serialize` record can be filtered without a bespoke accessor:
//!
//! ```text
//! name            → record.name
//! ruleString      → record.ruleString
//! labels[].name   → every element of record.labels, then its name
//! ```
//!
//! Strings are matched as-is, numbers and booleans are matched through their
//! string form, and nulls, objects and missing fields never match.

use crate::domain::{BucketsError, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Marker suffix meaning "every element of this array field".
const EACH_SUFFIX: &str = "[]";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Field(String),
    Each(String),
}

/// A parsed searchable field path such as `labels[].name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// A path addressing one top-level field.
    #[must_use]
    pub fn single(field: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Field(field.into())],
        }
    }

    /// A path addressing `child` on every element of the array field `array`.
    #[must_use]
    pub fn nested_array(array: impl Into<String>, child: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Each(array.into()), Segment::Field(child.into())],
        }
    }

    /// Parses a dotted path, where a `[]` suffix marks an array field.
    ///
    /// # Errors
    ///
    /// Returns [`BucketsError::InvalidFieldPath`] for empty paths, empty
    /// segments, or brackets anywhere but a trailing `[]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucket_list::app::filter::FieldPath;
    ///
    /// let path = FieldPath::parse("labels[].name")?;
    /// assert_eq!(path, FieldPath::nested_array("labels", "name"));
    /// assert!(FieldPath::parse("labels[0].name").is_err());
    /// # Ok::<(), bucket_list::BucketsError>(())
    /// ```
    pub fn parse(path: &str) -> Result<Self> {
        let invalid = || BucketsError::InvalidFieldPath(path.to_string());

        if path.is_empty() {
            return Err(invalid());
        }

        let segments = path
            .split('.')
            .map(|raw| {
                let (name, each) = raw
                    .strip_suffix(EACH_SUFFIX)
                    .map_or((raw, false), |name| (name, true));

                if name.is_empty() || name.contains(['[', ']']) {
                    return Err(invalid());
                }

                Ok(if each {
                    Segment::Each(name.to_string())
                } else {
                    Segment::Field(name.to_string())
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { segments })
    }

    /// Resolves the path against a serialized record, returning every
    /// matchable value it addresses.
    #[must_use]
    pub fn values(&self, record: &Value) -> Vec<String> {
        let mut out = Vec::new();
        collect(record, &self.segments, &mut out);
        out
    }
}

impl FromStr for FieldPath {
    type Err = BucketsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match segment {
                Segment::Field(name) => f.write_str(name)?,
                Segment::Each(name) => write!(f, "{name}{EACH_SUFFIX}")?,
            }
        }
        Ok(())
    }
}

fn collect(value: &Value, segments: &[Segment], out: &mut Vec<String>) {
    let Some((first, rest)) = segments.split_first() else {
        match value {
            Value::String(s) => out.push(s.clone()),
            Value::Number(n) => out.push(n.to_string()),
            Value::Bool(b) => out.push(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => {}
        }
        return;
    };

    match first {
        Segment::Field(name) => {
            if let Some(child) = value.get(name) {
                collect(child, rest, out);
            }
        }
        Segment::Each(name) => {
            if let Some(Value::Array(items)) = value.get(name) {
                for item in items {
                    collect(item, rest, out);
                }
            }
        }
    }
}

/// The fields the bucket list searches: name, retention string, label names.
#[must_use]
pub fn bucket_search_fields() -> Vec<FieldPath> {
    vec![
        FieldPath::single("name"),
        FieldPath::single("ruleString"),
        FieldPath::nested_array("labels", "name"),
    ]
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Returns the character range of the first case-insensitive occurrence of
/// `needle` in `haystack`.
///
/// Ranges are `(start, end)` character indices with exclusive end. An empty
/// needle matches at `(0, 0)`.
///
/// # Examples
///
/// ```
/// use bucket_list::app::filter::match_range;
///
/// assert_eq!(match_range("Telemetry", "LEM"), Some((2, 5)));
/// assert_eq!(match_range("Telemetry", "xyz"), None);
/// ```
#[must_use]
pub fn match_range(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return Some((0, 0));
    }

    let hay: Vec<char> = haystack.chars().collect();
    if needle.len() > hay.len() {
        return None;
    }

    (0..=hay.len() - needle.len())
        .find(|&start| {
            hay[start..start + needle.len()]
                .iter()
                .zip(&needle)
                .all(|(&a, &b)| chars_eq_ignore_case(a, b))
        })
        .map(|start| (start, start + needle.len()))
}

/// Case-insensitive substring test over the lowercased strings.
///
/// Lowercasing can change a string's length (`İ` becomes `i̇`), so this may
/// match where [`match_range`] finds no character-aligned range.
///
/// ```
/// use bucket_list::app::filter::contains_ignore_case;
///
/// assert!(contains_ignore_case("İstanbul", "i"));
/// assert!(contains_ignore_case("Telemetry", "LEM"));
/// ```
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Keeps the records where any value addressed by `fields` contains `term`.
///
/// An empty term keeps every record. Order is preserved.
///
/// # Examples
///
/// ```
/// use bucket_list::app::filter::{filter, FieldPath};
/// use serde::Serialize;
///
/// #[derive(Clone, Serialize)]
/// struct Row { name: String }
///
/// let rows = vec![Row { name: "Alpha".into() }, Row { name: "beta".into() }];
/// let kept = filter("ALP", &[FieldPath::single("name")], &rows);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].name, "Alpha");
/// ```
#[must_use]
pub fn filter<T>(term: &str, fields: &[FieldPath], records: &[T]) -> Vec<T>
where
    T: Serialize + Clone,
{
    let _span = tracing::debug_span!(
        "filter_records",
        total = records.len(),
        term_len = term.len(),
        fields = fields.len()
    )
    .entered();

    if term.is_empty() {
        return records.to_vec();
    }

    let kept: Vec<T> = records
        .iter()
        .filter(|record| {
            let value = match serde_json::to_value(record) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(error = %e, "record could not be serialized for filtering");
                    return false;
                }
            };

            fields.iter().any(|path| {
                path.values(&value)
                    .iter()
                    .any(|candidate| contains_ignore_case(candidate, term))
            })
        })
        .cloned()
        .collect();

    tracing::debug!(kept = kept.len(), "filter applied");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::projector::project;
    use crate::domain::{Bucket, Label, RetentionRule};
    use proptest::prelude::*;
    use serde_json::json;

    fn sample() -> Vec<Bucket> {
        vec![
            Bucket::new("1", "a", "o"),
            Bucket::new("2", "b", "o").with_rule(RetentionRule::expire(3600)),
            Bucket::new("3", "system", "o").with_label(Label::new("l1", "Production")),
        ]
    }

    fn names<T: std::ops::Deref<Target = Bucket>>(records: &[T]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn parses_and_displays_paths() {
        for raw in ["name", "ruleString", "labels[].name", "a.b[].c"] {
            let path = FieldPath::parse(raw).unwrap();
            assert_eq!(path.to_string(), raw);
        }
        assert_eq!(bucket_search_fields()[2], "labels[].name".parse().unwrap());
    }

    #[test]
    fn rejects_malformed_paths() {
        for raw in ["", ".", "labels[", "labels[0]", "a..b", "[]"] {
            assert!(
                matches!(FieldPath::parse(raw), Err(BucketsError::InvalidFieldPath(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn resolves_nested_array_values_and_coerces_scalars() {
        let record = json!({
            "labels": [{"name": "x"}, {"name": 7}, {"name": null}, {"other": "y"}],
            "flag": true
        });
        let labels = FieldPath::nested_array("labels", "name").values(&record);
        assert_eq!(labels, vec!["x", "7"]);
        assert_eq!(FieldPath::single("flag").values(&record), vec!["true"]);
        assert!(FieldPath::single("missing").values(&record).is_empty());
    }

    #[test]
    fn empty_term_keeps_everything() {
        let projected = project(&sample());
        assert_eq!(filter("", &bucket_search_fields(), &projected), projected);
    }

    #[test]
    fn matches_name_rule_string_and_label_names() {
        let projected = project(&sample());
        let fields = bucket_search_fields();

        assert_eq!(names(&filter("b", &fields, &projected)), vec!["b"]);
        assert_eq!(names(&filter("HOUR", &fields, &projected)), vec!["b"]);
        assert_eq!(names(&filter("forever", &fields, &projected)), vec!["a", "system"]);
        assert_eq!(names(&filter("product", &fields, &projected)), vec!["system"]);
        assert!(filter("xyz", &fields, &projected).is_empty());
    }

    #[test]
    fn filter_lowercases_whole_strings() {
        let buckets = vec![Bucket::new("1", "İstanbul", "o1"), Bucket::new("2", "oslo", "o1")];
        let kept = filter("i", &bucket_search_fields(), &project(&buckets));
        assert_eq!(names(&kept), vec!["İstanbul"]);
        assert!(contains_ignore_case("İstanbul", "i"));
        assert!(!contains_ignore_case("oslo", "i"));
    }

    #[test]
    fn match_range_uses_character_indices() {
        assert_eq!(match_range("Größe", "SSE"), None);
        assert_eq!(match_range("Größe", "ÖSS"), None);
        assert_eq!(match_range("Größe", "öß"), Some((2, 4)));
        assert_eq!(match_range("abc", ""), Some((0, 0)));
        assert_eq!(match_range("ab", "abc"), None);
    }

    fn bucket_names() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec("[a-cA-C]{0,6}", 0..12)
    }

    proptest! {
        #[test]
        fn prop_filter_is_idempotent(names in bucket_names(), term in "[a-cA-C]{0,3}") {
            let buckets: Vec<Bucket> = names
                .iter()
                .enumerate()
                .map(|(i, n)| Bucket::new(i.to_string(), n.clone(), "o"))
                .collect();
            let fields = bucket_search_fields();
            let once = filter(&term, &fields, &project(&buckets));
            let twice = filter(&term, &fields, &once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_filter_is_monotonic(
            names in bucket_names(),
            prefix in "[a-c]{0,2}",
            suffix in "[a-c]{0,2}",
        ) {
            let buckets: Vec<Bucket> = names
                .iter()
                .enumerate()
                .map(|(i, n)| Bucket::new(i.to_string(), n.clone(), "o"))
                .collect();
            let fields = bucket_search_fields();
            let projected = project(&buckets);
            let longer = format!("{prefix}{suffix}");
            let narrow = filter(&longer, &fields, &projected);
            let wide = filter(&prefix, &fields, &projected);
            for record in &narrow {
                prop_assert!(wide.contains(record));
            }
        }
    }
}
