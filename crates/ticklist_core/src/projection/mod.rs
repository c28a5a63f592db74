//! Derived view state: display filter and footer counts.
//!
//! # Responsibility
//! - Compute pure projections of aggregate state for the view layer.
//!
//! # Invariants
//! - Projections never mutate domain data; they are recomputed from the
//!   current in-memory state on every aggregate notification.

pub mod counts;
pub mod filter;
