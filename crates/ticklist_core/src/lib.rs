//! Core domain logic for ticklist.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::Todo;
pub use repo::todo_repo::{
    JsonTodoRepository, RepoError, RepoResult, TodoRepository, DEFAULT_STORE_FILE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
