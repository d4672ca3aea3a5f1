//! Memory Matrix: a terminal memory-matching game.
//!
//! The crate splits into a pure core (deck generation, round state machine,
//! snapshots), a best-time store, and a terminal presentation layer that
//! renders snapshots and forwards intents. The binary in `main.rs` wires
//! them together in a single-threaded event loop.

pub mod core;
pub mod error;
pub mod input;
pub mod store;
pub mod term;
pub mod types;
