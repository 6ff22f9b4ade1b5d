//! Domain model for todo entries.
//!
//! # Responsibility
//! - Define the canonical data structure used by core business logic.
//! - Keep the persisted record shape fixed at exactly four named fields.
//!
//! # Invariants
//! - `id` values are assigned by the store and never reused.
//! - `created_at` is stamped once at creation and never mutated.

pub mod todo;
