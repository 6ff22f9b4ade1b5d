//! Todo domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted by the store.
//! - Provide lifecycle helpers for creation and completion.
//!
//! # Invariants
//! - `id` is a positive integer, unique within one store file.
//! - `done` transitions only from `false` to `true`.
//! - `created_at` is set once at creation and never rewritten.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Timestamp layout for `created_at`: ISO-8601-like local time with no
/// timezone suffix, matching pre-existing store files.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One todo entry.
///
/// The serde derive doubles as the storage record: the persisted JSON object
/// carries exactly these four keys, and deserialization fails when a required
/// field is missing or mistyped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-assigned identifier, monotonically increasing per file.
    pub id: u64,
    /// Free-form description. Accepted as-is, empty strings included.
    pub title: String,
    /// Completion flag.
    pub done: bool,
    /// Local creation timestamp, immutable after creation.
    pub created_at: String,
}

impl Todo {
    /// Creates a new todo with the current local timestamp.
    ///
    /// # Invariants
    /// - `done` starts as `false`.
    /// - `created_at` is stamped here exactly once.
    pub fn create(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
            created_at: Local::now().format(CREATED_AT_FORMAT).to_string(),
        }
    }

    /// Marks this todo as completed.
    pub fn complete(&mut self) {
        self.done = true;
    }

    /// Returns whether this todo is still waiting to be done.
    pub fn is_pending(&self) -> bool {
        !self.done
    }
}

#[cfg(test)]
mod tests {
    use super::{Todo, CREATED_AT_FORMAT};
    use chrono::NaiveDateTime;

    #[test]
    fn create_defaults_to_not_done_with_timestamp() {
        let todo = Todo::create(1, "write tests");
        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "write tests");
        assert!(!todo.done);
        assert!(!todo.created_at.is_empty());
        NaiveDateTime::parse_from_str(&todo.created_at, CREATED_AT_FORMAT)
            .expect("created_at should parse back as a timestamp");
    }

    #[test]
    fn create_accepts_empty_title() {
        let todo = Todo::create(7, "");
        assert_eq!(todo.title, "");
    }

    #[test]
    fn complete_flips_done_once() {
        let mut todo = Todo::create(2, "flip me");
        assert!(todo.is_pending());
        todo.complete();
        assert!(todo.done);
        assert!(!todo.is_pending());
    }

    #[test]
    fn record_roundtrips_through_json() {
        let todo = Todo::create(3, "roundtrip");
        let raw = serde_json::to_string(&todo).expect("serialize should succeed");
        let back: Todo = serde_json::from_str(&raw).expect("deserialize should succeed");
        assert_eq!(back, todo);
    }

    #[test]
    fn record_with_missing_field_fails_to_deserialize() {
        let raw = r#"{"id": 1, "title": "no created_at", "done": false}"#;
        assert!(serde_json::from_str::<Todo>(raw).is_err());
    }

    #[test]
    fn record_with_mistyped_field_fails_to_deserialize() {
        let raw = r#"{"id": "one", "title": "bad id", "done": false, "created_at": "t"}"#;
        assert!(serde_json::from_str::<Todo>(raw).is_err());
    }
}
