//! Sticky-Set Store Module
//!
//! Implements the single-collection document store backing the persistence API.
//!
//! ## Core Concepts
//! - **Documents**: Each `StickySet` is one document holding an ordered sequence of
//!   opaque note values plus creation and last-access timestamps.
//! - **Atomicity**: Every operation is a single per-document write; the map's
//!   per-entry locking is the only consistency mechanism, and no operation spans
//!   two documents.
//! - **Touch on access**: Successful reads and writes both advance `last_accessed`.
//!   The write-on-read side of this is a documented contract, not an accident.
//! - **Handle**: `StoreHandle` owns the lazily-initialized store and hands out a
//!   shared reference with idempotent acquire semantics.

pub mod handle;
pub mod memory;
pub mod types;

#[cfg(test)]
mod tests;
