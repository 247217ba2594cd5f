//! # Battleship Witness Generator
//!
//! Board commitments and shot-proof witness documents for a zero-knowledge
//! battleship circuit.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   BATTLESHIP WITNESS                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/            - Board model and encodings                │
//! │  ├── board.rs     - Ships, shots, hit/miss outcome           │
//! │  └── hash.rs      - Digest, field element encoding, hex      │
//! │                                                              │
//! │  proof/           - Circuit input generation                 │
//! │  ├── primitive.rs - Compression primitive capability         │
//! │  ├── commitment.rs- Board commitment engine                  │
//! │  ├── witness.rs   - Prover / verifier witness assembly       │
//! │  └── document.rs  - Canonical TOML documents                 │
//! │                                                              │
//! │  output.rs        - All-or-nothing document writer           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pipeline
//!
//! commit(board) → outcome(board, shot) → assemble → render → write.
//! Every step is a pure function of its inputs except the final write.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod proof;

// Re-export commonly used types
pub use config::{GeneratorConfig, PrimitiveConfig};
pub use crate::core::board::{Board, BoardValue, Orientation, Outcome, ShipClass, ShipPlacement, Shot};
pub use crate::core::hash::Digest32;
pub use error::WitnessError;
pub use output::{OutputError, WitnessWriter, WrittenPaths};
pub use proof::{
    CommitmentEngine, CompressionPrimitive, ProverWitness, Sha256Compressor, VerifierWitness,
    WitnessAssembler, WitnessDocuments,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Grid side length (coordinates `0..GRID_SIZE`).
pub const GRID_SIZE: u64 = 10;

/// Ships per fleet.
pub const NUM_SHIPS: usize = 5;

/// Values per committed board (`x`, `y`, orientation per ship).
pub const BOARD_LEN: usize = NUM_SHIPS * crate::core::board::VALUES_PER_SHIP;

/// Reference fleet: every ship horizontal at `x = 0`, rows 5 through 9.
pub const REFERENCE_SHIPS: [BoardValue; BOARD_LEN] = [
    0, 5, 0, // carrier     50..=54
    0, 6, 0, // battleship  60..=63
    0, 7, 0, // cruiser     70..=72
    0, 8, 0, // submarine   80..=82
    0, 9, 0, // destroyer   90..=91
];

/// Reference shot, on the battleship.
pub const REFERENCE_SHOT: [u64; 2] = [1, 6];

/// Board built from [`REFERENCE_SHIPS`].
pub fn reference_board() -> Board {
    Board::new(REFERENCE_SHIPS.to_vec())
}
