//! Terminal host and composition root.
//!
//! Reads one command per line from stdin, runs it against a
//! [`ListController`] backed by a [`MemoryStore`], and redraws the list after
//! every command. Every command runs inside the [`ErrorBoundary`], so a
//! failing or panicking command is reported under the frame and the session
//! continues.
//!
//! # Usage
//!
//! ```text
//! bucket-list [snapshot=buckets.json] [theme=catppuccin-latte] [rows=30]
//!             [theme_file=~/my-theme.toml] [trace_level=debug] [trace_file=/tmp/t.json]
//! ```
//!
//! # Commands
//!
//! - `/text`: Filter by text (`/` alone clears the filter)
//! - `label <name>`: Filter by a label name
//! - `sort <name|retention|id|org> [asc|desc]`: Sort by a column; repeating a
//!   column without a direction toggles it
//! - `new`: Open the create-bucket form
//! - `create <name> [seconds]`: Submit the open form; omit seconds to retain forever
//! - `close`: Close the form
//! - `rename <id> <name>`: Rename a bucket
//! - `delete <id>`: Delete a bucket
//! - `q` / `quit`: Exit

#![allow(clippy::multiple_crate_versions)]

use bucket_list::app::{DisplayBucket, ErrorBoundary, ListController, SortDirection, SortKey};
use bucket_list::domain::{BucketDraft, BucketsError, Organization, Result};
use bucket_list::infrastructure::expand_tilde;
use bucket_list::store::{BucketSource, MemoryStore};
use bucket_list::{observability, ui, Config};
use futures::executor::block_on;
use std::cell::RefCell;
use std::io::BufRead;
use std::process::ExitCode;
use std::sync::Arc;

const DEFAULT_COLS: usize = 100;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Search(String),
    Label(String),
    Sort(SortKey, Option<SortDirection>),
    New,
    Create { name: String, every_seconds: Option<u64> },
    Close,
    Rename { id: String, name: String },
    Delete(String),
    Quit,
    Nothing,
}

impl Command {
    fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        if let Some(term) = line.strip_prefix('/') {
            return Ok(Self::Search(term.to_string()));
        }

        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let usage = |text: &str| BucketsError::Config(format!("usage: {text}"));

        match verb {
            "" => Ok(Self::Nothing),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            "new" => Ok(Self::New),
            "close" => Ok(Self::Close),
            "label" if !rest.is_empty() => Ok(Self::Label(rest.to_string())),
            "label" => Err(usage("label <name>")),
            "delete" if !rest.is_empty() => Ok(Self::Delete(rest.to_string())),
            "delete" => Err(usage("delete <id>")),
            "sort" => {
                let mut parts = rest.split_whitespace();
                let key = parts
                    .next()
                    .and_then(SortKey::from_token)
                    .ok_or_else(|| usage("sort <name|retention|id|org> [asc|desc]"))?;
                let direction = match parts.next() {
                    Some(token) => Some(
                        SortDirection::from_token(token)
                            .ok_or_else(|| usage("sort <name|retention|id|org> [asc|desc]"))?,
                    ),
                    None => None,
                };
                Ok(Self::Sort(key, direction))
            }
            "create" => {
                let mut parts: Vec<&str> = rest.split_whitespace().collect();
                let every_seconds = match parts.last().map(|p| p.parse::<u64>()) {
                    Some(Ok(seconds)) if parts.len() > 1 => {
                        parts.pop();
                        Some(seconds)
                    }
                    _ => None,
                };
                if parts.is_empty() {
                    return Err(usage("create <name> [seconds]"));
                }
                Ok(Self::Create {
                    name: parts.join(" "),
                    every_seconds,
                })
            }
            "rename" => {
                let (id, name) = rest
                    .split_once(char::is_whitespace)
                    .map(|(id, name)| (id, name.trim()))
                    .filter(|(_, name)| !name.is_empty())
                    .ok_or_else(|| usage("rename <id> <name>"))?;
                Ok(Self::Rename {
                    id: id.to_string(),
                    name: name.to_string(),
                })
            }
            other => Err(BucketsError::Config(format!("unknown command '{other}'"))),
        }
    }
}

fn find_row(controller: &ListController<Arc<MemoryStore>>, id: &str) -> Result<DisplayBucket> {
    controller
        .state()
        .display_buckets()
        .into_iter()
        .find(|b| b.id == id)
        .ok_or_else(|| BucketsError::NotFound(id.to_string()))
}

fn run(controller: &mut ListController<Arc<MemoryStore>>, command: Command) -> Result<()> {
    let _span = tracing::debug_span!("command", command = ?command).entered();

    match command {
        Command::Search(term) => {
            controller.set_search_term(term.clone());
            controller.commit_search_term(term);
        }
        Command::Label(name) => {
            controller.filter_by_label(name);
        }
        Command::Sort(key, direction) => {
            let state = controller.state();
            let direction = direction.unwrap_or(if state.sort_key == key {
                state.sort_direction.toggled()
            } else {
                SortDirection::Ascending
            });
            controller.set_sort(key, direction);
        }
        Command::New => {
            controller.request_create();
        }
        Command::Close => {
            controller.request_close();
        }
        Command::Create { name, every_seconds } => {
            let organization_id = controller.state().snapshot.organization.id.clone();
            let draft = BucketDraft::new(name, organization_id);
            let draft = match every_seconds {
                Some(seconds) => draft.expiring_after(seconds),
                None => draft,
            };
            block_on(controller.submit_create(draft))?;
        }
        Command::Rename { id, name } => {
            let mut row = find_row(controller, &id)?;
            row.bucket.name = name;
            controller.submit_update(row);
        }
        Command::Delete(id) => {
            let row = find_row(controller, &id)?;
            controller.submit_delete(row);
        }
        Command::Quit | Command::Nothing => {}
    }
    Ok(())
}

fn open_store(config: &Config) -> Result<MemoryStore> {
    config.snapshot_file.as_deref().map_or_else(
        || Ok(MemoryStore::new(Organization::new("local", "local"))),
        |path| MemoryStore::load(&expand_tilde(path)),
    )
}

fn terminal_cols() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse().ok())
        .filter(|c: &usize| *c > 0)
        .unwrap_or(DEFAULT_COLS)
}

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("bucket-list: {e}");
            return ExitCode::FAILURE;
        }
    };

    observability::init_tracing(&config);

    let store = match open_store(&config) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            eprintln!("bucket-list: {e}");
            return ExitCode::FAILURE;
        }
    };

    let last_error: RefCell<Option<String>> = RefCell::new(None);
    let boundary = ErrorBoundary::new(|e: &BucketsError| {
        tracing::warn!(error = %e, "command failed");
        *last_error.borrow_mut() = Some(e.to_string());
    });

    let state = bucket_list::initialize(&config, store.snapshot());
    let mut controller = ListController::new(state, Arc::clone(&store));
    let (rows, cols) = (config.page_rows, terminal_cols());

    let draw = |controller: &ListController<Arc<MemoryStore>>| {
        boundary.guard(|| ui::render(controller.state(), rows, cols));
        if let Some(message) = last_error.borrow_mut().take() {
            eprintln!("error: {message}");
        }
    };

    draw(&controller);

    for line in std::io::stdin().lock().lines() {
        let Ok(line) = line else { break };

        let Some(command) = boundary.guard(|| Command::parse(&line)) else {
            draw(&controller);
            continue;
        };
        if command == Command::Quit {
            break;
        }

        boundary.guard(|| run(&mut controller, command));
        controller.refresh(&*store);
        draw(&controller);
    }

    tracing::debug!("bucket-list exiting");
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use bucket_list::domain::{Bucket, StoreSnapshot};
    use bucket_list::ui::Theme;
    use bucket_list::ListState;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("/tele").unwrap(), Command::Search("tele".into()));
        assert_eq!(Command::parse("/").unwrap(), Command::Search(String::new()));
        assert_eq!(Command::parse("  ").unwrap(), Command::Nothing);
        assert_eq!(
            Command::parse("sort retention desc").unwrap(),
            Command::Sort(SortKey::RuleString, Some(SortDirection::Descending))
        );
        assert_eq!(Command::parse("sort id").unwrap(), Command::Sort(SortKey::Id, None));
        assert_eq!(
            Command::parse("create my bucket 3600").unwrap(),
            Command::Create {
                name: "my bucket".into(),
                every_seconds: Some(3600)
            }
        );
        assert_eq!(
            Command::parse("create 2024").unwrap(),
            Command::Create {
                name: "2024".into(),
                every_seconds: None
            }
        );
        assert_eq!(
            Command::parse("rename b1 new name").unwrap(),
            Command::Rename {
                id: "b1".into(),
                name: "new name".into()
            }
        );
    }

    #[test]
    fn rejects_malformed_commands() {
        for line in ["sort", "sort size", "sort name up", "create", "rename b1", "delete", "label", "frobnicate"] {
            assert!(
                matches!(Command::parse(line), Err(BucketsError::Config(_))),
                "{line} should be rejected"
            );
        }
    }

    fn controller() -> (Arc<MemoryStore>, ListController<Arc<MemoryStore>>) {
        let store = Arc::new(MemoryStore::from_snapshot(StoreSnapshot {
            organization: Organization::new("o1", "acme"),
            buckets: vec![Bucket::new("b1", "alpha", "o1"), Bucket::new("b2", "beta", "o1")],
            version: 1,
        }));
        let state = ListState::new(store.snapshot(), Theme::default());
        (Arc::clone(&store), ListController::new(state, store))
    }

    #[test]
    fn commands_drive_the_store() {
        let (store, mut controller) = controller();

        run(&mut controller, Command::parse("rename b1 gamma").unwrap()).unwrap();
        run(&mut controller, Command::parse("delete b2").unwrap()).unwrap();
        run(&mut controller, Command::parse("new").unwrap()).unwrap();
        run(&mut controller, Command::parse("create delta 60").unwrap()).unwrap();
        controller.refresh(&*store);

        let names: Vec<String> = controller.state().visible_buckets().iter().map(|b| b.name.clone()).collect();
        assert_eq!(names, vec!["delta", "gamma"]);
        assert!(!controller.state().modal.is_visible());
    }

    #[test]
    fn create_requires_the_form() {
        let (store, mut controller) = controller();
        assert!(matches!(
            run(&mut controller, Command::parse("create delta").unwrap()),
            Err(BucketsError::ModalClosed)
        ));
        assert_eq!(store.snapshot().buckets.len(), 2);
    }

    #[test]
    fn repeated_sort_toggles_direction() {
        let (_, mut controller) = controller();
        run(&mut controller, Command::Sort(SortKey::Name, None)).unwrap();
        assert_eq!(controller.state().sort_direction, SortDirection::Descending);
        run(&mut controller, Command::Sort(SortKey::Id, None)).unwrap();
        assert_eq!(controller.state().sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn unknown_ids_are_reported() {
        let (_, mut controller) = controller();
        assert!(matches!(
            run(&mut controller, Command::Delete("missing".into())),
            Err(BucketsError::NotFound(_))
        ));
    }
}
