//! bucket-list: an interactive, searchable, sortable list of storage buckets.
//!
//! The crate implements the interaction state machine behind a bucket
//! management screen:
//! - Live case-insensitive search over names, retention and label names
//! - Column sorting with a pluggable comparison strategy
//! - A create-bucket modal guarded against double submission
//! - Update and delete forwarding to an external store
//! - ANSI terminal rendering with themes

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Host (main.rs)                            │  ← Composition root
//! │  - ErrorBoundary around every command               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Projection, filter, sort                         │
//! │  - Event handling and actions                       │
//! │  - Async controller                                 │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────┐                     ┌───────────────┐
//! │ UI Layer      │                     │ Store Layer   │
//! │ (ui/)         │                     │ (store/)      │
//! │ - View models │                     │ - Source and  │
//! │ - Components  │                     │   service API │
//! │ - Theming     │                     │ - Memory store│
//! └───────────────┘                     └───────────────┘
//!         │                                      │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Records, retention formatting, errors (domain/)  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a rotating file         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use bucket_list::app::ListController;
//! use bucket_list::domain::{BucketDraft, Organization};
//! use bucket_list::store::{BucketSource, MemoryStore};
//! use bucket_list::{initialize, Config};
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new(Organization::new("o1", "acme")));
//! let state = initialize(&Config::default(), store.snapshot());
//! let mut controller = ListController::new(state, Arc::clone(&store));
//!
//! controller.request_create();
//! futures::executor::block_on(controller.submit_create(BucketDraft::new("telemetry", "o1")))?;
//! controller.refresh(&*store);
//! assert_eq!(controller.state().visible_buckets().len(), 1);
//! # Ok::<(), bucket_list::BucketsError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod store;
pub mod ui;

pub use app::{handle_event, Action, Event, ListController, ListState};
pub use domain::{BucketsError, Result, StoreSnapshot};
pub use ui::Theme;

use std::collections::BTreeMap;

const DEFAULT_PAGE_ROWS: usize = 24;

/// Host configuration, parsed from `key=value` options.
///
/// | key           | field          |
/// |---------------|----------------|
/// | `theme`       | `theme_name`   |
/// | `theme_file`  | `theme_file`   |
/// | `trace_level` | `trace_level`  |
/// | `trace_file`  | `trace_file`   |
/// | `rows`        | `page_rows`    |
/// | `snapshot`    | `snapshot_file`|
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for spans. Default: `"info"`
    pub trace_level: Option<String>,

    /// Trace output path. Default: `<data dir>/bucket-list-otlp.json`
    pub trace_file: Option<String>,

    /// Terminal height used for rendering. Default: 24
    pub page_rows: usize,

    /// JSON snapshot used to seed the store.
    pub snapshot_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            trace_file: None,
            page_rows: DEFAULT_PAGE_ROWS,
            snapshot_file: None,
        }
    }
}

impl Config {
    /// Builds configuration from an option map, falling back to defaults for
    /// missing or unparsable values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bucket_list::Config;
    /// use std::collections::BTreeMap;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    /// map.insert("rows".to_string(), "40".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.page_rows, 40);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let page_rows = map
            .get("rows")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|rows| *rows > 0)
            .unwrap_or(DEFAULT_PAGE_ROWS);

        let non_empty = |key: &str| map.get(key).filter(|v| !v.is_empty()).cloned();

        Self {
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
            trace_file: non_empty("trace_file"),
            page_rows,
            snapshot_file: non_empty("snapshot"),
        }
    }

    /// Parses command-line style `key=value` arguments.
    ///
    /// # Errors
    ///
    /// Returns [`BucketsError::Config`] for arguments without `=` or with an
    /// empty key.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for arg in args {
            let arg = arg.as_ref();
            match arg.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => {
                    map.insert(key.trim().to_string(), value.trim().to_string());
                }
                _ => return Err(BucketsError::Config(format!("expected key=value, got '{arg}'"))),
            }
        }
        Ok(Self::from_map(&map))
    }

    /// Resolves the configured theme, falling back to the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Creates list state for the first snapshot with the configured theme.
#[must_use]
pub fn initialize(config: &Config, snapshot: StoreSnapshot) -> ListState {
    tracing::debug!(
        buckets = snapshot.buckets.len(),
        version = snapshot.version,
        "initializing bucket list"
    );
    ListState::new(snapshot, config.theme())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_for_missing_and_invalid_values() {
        let mut map = BTreeMap::new();
        map.insert("rows".to_string(), "zero".to_string());
        map.insert("theme".to_string(), String::new());
        let config = Config::from_map(&map);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parses_key_value_arguments() {
        let config = Config::from_args(["trace_level=debug", "snapshot = buckets.json", "rows=30"]).unwrap();
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.snapshot_file.as_deref(), Some("buckets.json"));
        assert_eq!(config.page_rows, 30);

        assert!(matches!(Config::from_args(["oops"]), Err(BucketsError::Config(_))));
        assert!(matches!(Config::from_args(["=x"]), Err(BucketsError::Config(_))));
    }

    #[test]
    fn theme_resolution_prefers_file_then_name() {
        let latte = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(latte.theme().name, "catppuccin-latte");

        let unknown = Config {
            theme_name: Some("nope".to_string()),
            ..Config::default()
        };
        assert_eq!(unknown.theme().name, "catppuccin-mocha");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = Theme::default();
        custom.name = "from-file".to_string();
        write!(file, "{}", toml::to_string(&custom).unwrap()).unwrap();
        let from_file = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(file.path().display().to_string()),
            ..Config::default()
        };
        assert_eq!(from_file.theme().name, "from-file");
    }

    #[test]
    fn initialize_uses_snapshot() {
        let state = initialize(&Config::default(), StoreSnapshot::default());
        assert!(state.visible_buckets().is_empty());
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }
}
