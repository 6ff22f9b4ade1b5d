//! Todo repository contract and JSON-file implementation.
//!
//! # Responsibility
//! - Provide stable per-item operations over one whole-file collection.
//! - Keep file I/O and JSON codec details inside the persistence boundary.
//!
//! # Invariants
//! - Every mutation is a full load, mutate, save cycle; the file is the
//!   whole state.
//! - Ids are assigned as `max present id + 1` (1 when empty), so removing
//!   the highest-id item lowers the next assigned id.
//! - A corrupt or missing store file degrades to an empty collection on
//!   load; it never blocks an operation.

use crate::model::todo::Todo;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

/// Store filename used when the caller does not configure one.
pub const DEFAULT_STORE_FILE: &str = "todos.json";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for todo store operations.
///
/// Carries only transport failures: `save_all` surfaces I/O and serialize
/// errors untouched, while read-side corruption is downgraded to an empty
/// collection and never reaches callers as an error.
#[derive(Debug)]
pub enum RepoError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "store file I/O failed: {err}"),
            Self::Json(err) => write!(f, "store serialization failed: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RepoError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Repository interface for todo collection operations.
pub trait TodoRepository {
    fn load_all(&self) -> RepoResult<Vec<Todo>>;
    fn save_all(&self, todos: &[Todo]) -> RepoResult<()>;
    fn add(&self, title: &str) -> RepoResult<Todo>;
    fn get(&self, id: u64) -> RepoResult<Option<Todo>>;
    fn complete(&self, id: u64) -> RepoResult<bool>;
    fn remove(&self, id: u64) -> RepoResult<bool>;
}

/// JSON-file-backed todo repository.
///
/// The backing file holds one JSON array of records, insertion-ordered.
/// Every operation re-reads it, so each call is independently consistent
/// with what is on disk at call time (absent concurrent writers — this
/// store assumes single-process, single-caller-at-a-time usage).
pub struct JsonTodoRepository {
    path: PathBuf,
}

impl JsonTodoRepository {
    /// Opens a repository at `path`, creating an empty store file when none
    /// exists. Creating that file is the only side effect of construction.
    ///
    /// # Errors
    /// - Returns `RepoError::Io` when the missing file cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> RepoResult<Self> {
        let path = path.into();
        if !path.exists() {
            fs::write(&path, "[]")?;
            debug!(
                "event=store_create module=repo status=ok path={}",
                path.display()
            );
        }
        Ok(Self { path })
    }

    /// Opens a repository at [`DEFAULT_STORE_FILE`] in the working directory.
    pub fn open_default() -> RepoResult<Self> {
        Self::open(DEFAULT_STORE_FILE)
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn next_id(todos: &[Todo]) -> u64 {
        todos.iter().map(|todo| todo.id).max().unwrap_or(0) + 1
    }
}

impl TodoRepository for JsonTodoRepository {
    /// Reads the whole collection, preserving file order.
    ///
    /// A file that is missing (deleted since `open`) or holds content that
    /// does not parse as an array of records yields an empty collection
    /// instead of an error. This trades correctness for availability:
    /// unreadable data is silently discarded on the next save.
    fn load_all(&self) -> RepoResult<Vec<Todo>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    "event=store_load module=repo status=degraded reason=read_failed path={} error={err}",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
        };

        match serde_json::from_str(&raw) {
            Ok(todos) => Ok(todos),
            Err(err) => {
                warn!(
                    "event=store_load module=repo status=degraded reason=parse_failed path={} error={err}",
                    self.path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    /// Serializes `todos` in the given order and overwrites the whole file.
    ///
    /// Not atomic: a failure mid-write can leave a truncated file, which the
    /// next `load_all` will then treat as empty.
    fn save_all(&self, todos: &[Todo]) -> RepoResult<()> {
        let raw = serde_json::to_string_pretty(todos)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn add(&self, title: &str) -> RepoResult<Todo> {
        let mut todos = self.load_all()?;
        let todo = Todo::create(Self::next_id(&todos), title);
        todos.push(todo.clone());
        self.save_all(&todos)?;
        debug!("event=todo_add module=repo status=ok id={}", todo.id);
        Ok(todo)
    }

    fn get(&self, id: u64) -> RepoResult<Option<Todo>> {
        let todos = self.load_all()?;
        Ok(todos.into_iter().find(|todo| todo.id == id))
    }

    fn complete(&self, id: u64) -> RepoResult<bool> {
        let mut todos = self.load_all()?;
        match todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.complete();
                self.save_all(&todos)?;
                debug!("event=todo_complete module=repo status=ok id={id}");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove(&self, id: u64) -> RepoResult<bool> {
        let todos = self.load_all()?;
        let original_len = todos.len();
        let remaining: Vec<Todo> = todos.into_iter().filter(|todo| todo.id != id).collect();

        if remaining.len() < original_len {
            self.save_all(&remaining)?;
            debug!("event=todo_remove module=repo status=ok id={id}");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
