//! Board model and encodings.
//!
//! Everything here is deterministic: the same board and shot always produce
//! the same encodings and the same outcome.

pub mod board;
pub mod hash;

// Re-export core types
pub use board::{Board, BoardValue, Orientation, Outcome, ShipClass, ShipPlacement, Shot};
pub use hash::{encode_field_element, Digest32};
