//! Board Commitment
//!
//! Binds a player to their secret board before any shot is answered.
//! The commitment is a single digest over the ordered board values; the
//! board itself is revealed only to the prover's circuit input.
//!
//! Commitments are unsalted: the same board always commits to the same digest.

use tracing::debug;

use crate::core::board::Board;
use crate::core::hash::{encode_field_element, Digest32};
use crate::error::WitnessError;
use crate::proof::primitive::CompressionPrimitive;

/// Computes board commitments with an injected compression primitive.
///
/// The primitive is initialized once by the caller and reused for every call.
#[derive(Clone, Debug)]
pub struct CommitmentEngine<P> {
    primitive: P,
}

impl<P: CompressionPrimitive> CommitmentEngine<P> {
    /// Create an engine around an initialized primitive.
    pub fn new(primitive: P) -> Self {
        Self { primitive }
    }

    /// The underlying primitive.
    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Commit to a board.
    ///
    /// Length and element width are checked for every value before the
    /// primitive is called.
    pub fn commit(&self, board: &Board) -> Result<Digest32, WitnessError> {
        board.check_len()?;

        let width = self.primitive.element_width();
        let encoded = board
            .values()
            .iter()
            .map(|&value| encode_field_element(value, width))
            .collect::<Result<Vec<_>, _>>()?;

        let digest = self.primitive.compress(&encoded)?;
        debug!(values = board.len(), width, commitment = %digest, "board committed");
        Ok(digest)
    }

    /// Check that `board` opens `commitment`.
    pub fn verify(&self, board: &Board, commitment: &Digest32) -> Result<bool, WitnessError> {
        Ok(self.commit(board)? == *commitment)
    }
}

// =============================================================================
// TESTS
// =============================================================================
