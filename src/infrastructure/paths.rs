//! Path utilities.
//!
//! The data directory follows the platform convention reported by `dirs`
//! (`~/.local/share/bucket-list` on Linux). When the platform has none, a
//! `.bucket-list` directory under the working directory is used.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "bucket-list";
const TRACE_FILE: &str = "bucket-list-otlp.json";

/// Returns the directory for trace output and other local data.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(dirs::data_dir())
}

fn data_dir_from(platform_dir: Option<PathBuf>) -> PathBuf {
    platform_dir.map_or_else(|| PathBuf::from(".").join(format!(".{APP_DIR}")), |dir| dir.join(APP_DIR))
}

/// Default location of the OTLP trace file.
#[must_use]
pub fn default_trace_file() -> PathBuf {
    get_data_dir().join(TRACE_FILE)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```
/// use bucket_list::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, dirs::home_dir().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&Path>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (_, Some(home)) if path.starts_with("~/") => home.join(&path[2..]),
        _ => PathBuf::from(path),
    }
}
