//! Sticky Board Module
//!
//! The client-side view-model for an ordered sequence of notes, mediating
//! between edit events and the persistence API.
//!
//! ## Core Mechanisms
//! - **Debounced auto-save**: every mutation routes through one change
//!   observer that arms a 1-second trailing-edge timer; arming cancels any
//!   pending timer, so only the quiet period after the last edit saves.
//! - **Busy flag**: a single advisory guard against overlapping network
//!   operations. A fired save that finds the flag raised is dropped, not
//!   queued; the next mutation's debounce retries.
//! - **Identifier-only feedback**: after a save, only the identifier (on
//!   create) flows back into the view-model. Note content from the server
//!   never overwrites what the user typed during the round-trip.
//!
//! ## Submodules
//! - **`model`**: the `Board` view-model and its save scheduling.
//! - **`remote`**: typed HTTP client over the persistence API.
//! - **`types`**: the client-side note shape, palette, and save status.

pub mod model;
pub mod remote;
pub mod types;
