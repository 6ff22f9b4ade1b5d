//! Repository layer contracts and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate file-format and I/O details from CLI/display orchestration.
//!
//! # Invariants
//! - The store file is re-read on every operation; there is no cache.
//! - An unreadable store file is treated as an empty collection.
//! - Not-found is a semantic result (`Option`/`bool`), never an error.

pub mod todo_repo;
