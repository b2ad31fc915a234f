//! Anonymous Stickies Service Library
//!
//! This library crate defines the components of the sticky-note persistence
//! service. It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`store`**: The single-collection document store. Holds `StickySet`
//!   documents with per-document atomic writes and the touch-on-access
//!   timestamp policy, behind a lazily-initialized shared handle.
//! - **`api`**: The stateless HTTP surface. Maps create, fetch, replace,
//!   delete, and health onto the store, with a four-kind error taxonomy and
//!   static asset serving for the board shell.
//! - **`board`**: The client-side view-model. Tracks the ordered note
//!   sequence and auto-saves edits through a debounced, busy-guarded HTTP
//!   client.

pub mod api;
pub mod board;
pub mod store;
