//! Shot Proof Inputs
//!
//! Turns a secret board and a shot into circuit-ready input documents:
//! - Board commitment over ordered field elements
//! - Prover witness (board included) and verifier witness (board omitted)
//! - Canonical TOML rendering of both
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SHOT PROOF INPUTS                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  primitive.rs    - Injected compression capability          │
//! │  commitment.rs   - commit(board) -> digest                  │
//! │  witness.rs      - build_witnesses / assemble               │
//! │  document.rs     - Prover.toml / Verifier.toml text         │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod commitment;
pub mod document;
pub mod primitive;
pub mod witness;

// Re-export key types
pub use commitment::CommitmentEngine;
pub use document::WitnessDocuments;
pub use primitive::{CompressionPrimitive, Sha256Compressor};
pub use witness::{ProverWitness, PublicInput, VerifierWitness, WitnessAssembler};
