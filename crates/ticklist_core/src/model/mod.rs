//! Domain model for todo records.
//!
//! # Responsibility
//! - Define the canonical todo record shared by storage and projections.
//! - Keep entity mutation behind explicit operations so change notification
//!   can fire at the aggregate level.
//!
//! # Invariants
//! - Every stored todo is identified by a stable `TodoId`.
//! - `created` is stamped once on the draft and never recomputed.

pub mod todo;
