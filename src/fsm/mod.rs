//! The reformatting state machine.
//!
//! This module contains the core engine organized into submodules:
//! - [`classify`]: Byte-class predicates mapping input bytes to events
//! - [`state`]: The [`State`] and [`Event`] alphabets and the transition table
//! - [`cursor`]: One-byte input cursor with explicit end-of-input reporting
//! - [`runner`]: The engine loop and the per-state actions
//!
//! Data flow is strictly one byte in, zero-or-more bytes out, per step.
//! The runner owns the cursor, the output sink, and the indentation depth
//! for the lifetime of a run; nothing is shared or persisted across runs.

pub mod classify;
pub mod cursor;
pub mod runner;
pub mod state;

pub use classify::classify;
pub use cursor::{Cursor, Fetch};
pub use runner::Runner;
pub use state::{Event, State};
