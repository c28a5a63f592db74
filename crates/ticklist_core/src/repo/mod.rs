//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the persistence-adapter contract for todo records.
//! - Isolate SQLite query details from the aggregate and controller.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod todo_repo;
