//! Shot Witnesses
//!
//! Builds the two circuit inputs for answering one shot:
//!
//! ```text
//! ProverWitness    hash  hit  shot  ships     (kept by the board owner)
//! VerifierWitness  setpub  hash  hit  shot    (no board data)
//! ```
//!
//! The verifier record is always derived from the prover record, so every
//! shared field is identical by construction.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::board::{Board, Outcome, Shot};
use crate::core::hash::Digest32;
use crate::error::WitnessError;
use crate::proof::commitment::CommitmentEngine;
use crate::proof::primitive::CompressionPrimitive;

/// Declared public circuit input value.
pub type PublicInput = u64;

/// Full witness for the board owner. Contains the secret board.
///
/// Field order is the document key order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProverWitness {
    #[serde(rename = "hash")]
    commitment: Digest32,
    #[serde(rename = "hit")]
    outcome: Outcome,
    shot: Shot,
    #[serde(rename = "ships")]
    board: Board,
}

impl ProverWitness {
    /// Board commitment.
    pub fn commitment(&self) -> &Digest32 {
        &self.commitment
    }

    /// Hit/miss flag.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Queried coordinate.
    pub fn shot(&self) -> Shot {
        self.shot
    }

    /// Secret board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Project onto the verifier record, dropping the board.
    pub fn verifier_view(&self, public_inputs: Vec<PublicInput>) -> VerifierWitness {
        VerifierWitness {
            public_inputs,
            commitment: self.commitment,
            outcome: self.outcome,
            shot: self.shot,
        }
    }
}

/// Witness for the party checking the shot claim. Never carries the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerifierWitness {
    #[serde(rename = "setpub")]
    public_inputs: Vec<PublicInput>,
    #[serde(rename = "hash")]
    commitment: Digest32,
    #[serde(rename = "hit")]
    outcome: Outcome,
    shot: Shot,
}

impl VerifierWitness {
    /// Declared public inputs.
    pub fn public_inputs(&self) -> &[PublicInput] {
        &self.public_inputs
    }

    /// Board commitment.
    pub fn commitment(&self) -> &Digest32 {
        &self.commitment
    }

    /// Hit/miss flag.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Queried coordinate.
    pub fn shot(&self) -> Shot {
        self.shot
    }
}

/// Assembles prover and verifier witnesses for one (board, shot) pair.
#[derive(Debug)]
pub struct WitnessAssembler<'a, P> {
    engine: &'a CommitmentEngine<P>,
    check_consistency: bool,
    public_inputs: Vec<PublicInput>,
}

impl<'a, P: CompressionPrimitive> WitnessAssembler<'a, P> {
    /// Create an assembler with consistency checks on and no public inputs.
    pub fn new(engine: &'a CommitmentEngine<P>) -> Self {
        Self {
            engine,
            check_consistency: true,
            public_inputs: Vec::new(),
        }
    }

    /// Enable or disable recomputing the commitment and outcome.
    pub fn with_consistency_checks(mut self, enabled: bool) -> Self {
        self.check_consistency = enabled;
        self
    }

    /// Set the public inputs declared in the verifier record.
    pub fn with_public_inputs(mut self, public_inputs: Vec<PublicInput>) -> Self {
        self.public_inputs = public_inputs;
        self
    }

    /// Build both witnesses from a precomputed commitment and outcome.
    ///
    /// With consistency checks on, a commitment or outcome that disagrees with
    /// the board fails with `CommitmentMismatch` / `OutcomeMismatch`.
    pub fn build_witnesses(
        &self,
        board: &Board,
        shot: Shot,
        commitment: Digest32,
        outcome: Outcome,
    ) -> Result<(ProverWitness, VerifierWitness), WitnessError> {
        board.check_len()?;
        shot.check_bounds()?;

        if self.check_consistency {
            let computed = self.engine.commit(board)?;
            if computed != commitment {
                return Err(WitnessError::CommitmentMismatch {
                    supplied: commitment,
                    computed,
                });
            }

            let actual = Outcome::compute(board, shot)?;
            if actual != outcome {
                return Err(WitnessError::OutcomeMismatch {
                    supplied: outcome,
                    actual,
                });
            }
        }

        let prover = ProverWitness {
            commitment,
            outcome,
            shot,
            board: board.clone(),
        };
        let verifier = prover.verifier_view(self.public_inputs.clone());

        debug!(
            commitment = %commitment,
            hit = u8::from(outcome),
            x = shot.x,
            y = shot.y,
            checked = self.check_consistency,
            "witnesses assembled"
        );

        Ok((prover, verifier))
    }

    /// Commit to the board, compute the outcome and build both witnesses.
    pub fn assemble(
        &self,
        board: &Board,
        shot: Shot,
    ) -> Result<(ProverWitness, VerifierWitness), WitnessError> {
        let commitment = self.engine.commit(board)?;
        let outcome = Outcome::compute(board, shot)?;
        self.build_witnesses(board, shot, commitment, outcome)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PrimitiveConfig;
    use crate::proof::primitive::Sha256Compressor;
    use crate::reference_board;

    fn engine() -> CommitmentEngine<Sha256Compressor> {
        CommitmentEngine::new(Sha256Compressor::initialize(&PrimitiveConfig::default()).unwrap())
    }

    #[test]
    fn test_reference_scenario() {
        let engine = engine();
        let board = reference_board();
        let shot = Shot::new(1, 6);
        let commitment = engine.commit(&board).unwrap();

        let (prover, verifier) = WitnessAssembler::new(&engine)
            .build_witnesses(&board, shot, commitment, Outcome::Hit)
            .unwrap();

        assert_eq!(prover.outcome(), Outcome::Hit);
        assert_eq!(prover.shot(), Shot::new(1, 6));
        assert_eq!(prover.board(), &board);
        assert_eq!(prover.commitment(), &commitment);

        assert_eq!(verifier.commitment(), prover.commitment());
        assert_eq!(verifier.outcome(), prover.outcome());
        assert_eq!(verifier.shot(), prover.shot());
        assert!(verifier.public_inputs().is_empty());
    }

    #[test]
    fn test_assemble_matches_build() {
        let engine = engine();
        let board = reference_board();
        let assembler = WitnessAssembler::new(&engine);

        let assembled = assembler.assemble(&board, Shot::new(1, 6)).unwrap();
        let built = assembler
            .build_witnesses(&board, Shot::new(1, 6), engine.commit(&board).unwrap(), Outcome::Hit)
            .unwrap();

        assert_eq!(assembled, built);
    }

    #[test]
    fn test_miss_scenario() {
        let engine = engine();
        let (prover, verifier) = WitnessAssembler::new(&engine)
            .assemble(&reference_board(), Shot::new(9, 9))
            .unwrap();

        assert_eq!(prover.outcome(), Outcome::Miss);
        assert_eq!(verifier.outcome(), Outcome::Miss);
    }

    #[test]
    fn test_outcome_mismatch_rejected() {
        let engine = engine();
        let board = reference_board();
        let commitment = engine.commit(&board).unwrap();

        let result = WitnessAssembler::new(&engine).build_witnesses(
            &board,
            Shot::new(1, 6),
            commitment,
            Outcome::Miss,
        );

        assert_eq!(
            result,
            Err(WitnessError::OutcomeMismatch {
                supplied: Outcome::Miss,
                actual: Outcome::Hit,
            })
        );
    }

    #[test]
    fn test_commitment_mismatch_rejected() {
        let engine = engine();
        let result = WitnessAssembler::new(&engine).build_witnesses(
            &reference_board(),
            Shot::new(1, 6),
            Digest32::new([0; 32]),
            Outcome::Hit,
        );

        assert!(matches!(result, Err(WitnessError::CommitmentMismatch { .. })));
    }

    #[test]
    fn test_unchecked_assembly_trusts_caller() {
        let engine = engine();
        let result = WitnessAssembler::new(&engine)
            .with_consistency_checks(false)
            .build_witnesses(&reference_board(), Shot::new(1, 6), Digest32::new([0; 32]), Outcome::Miss);

        let (prover, _) = result.unwrap();
        assert_eq!(prover.outcome(), Outcome::Miss);
    }

    #[test]
    fn test_unchecked_assembly_still_checks_shape() {
        let engine = engine();
        let assembler = WitnessAssembler::new(&engine).with_consistency_checks(false);

        let short = Board::new(vec![0; 14]);
        assert!(matches!(
            assembler.build_witnesses(&short, Shot::new(1, 6), Digest32::new([0; 32]), Outcome::Hit),
            Err(WitnessError::InvalidInput(_))
        ));
        assert!(matches!(
            assembler.build_witnesses(&reference_board(), Shot::new(0, 10), Digest32::new([0; 32]), Outcome::Hit),
            Err(WitnessError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_declared_public_inputs() {
        let engine = engine();
        let (_, verifier) = WitnessAssembler::new(&engine)
            .with_public_inputs(vec![1, 6])
            .assemble(&reference_board(), Shot::new(1, 6))
            .unwrap();

        assert_eq!(verifier.public_inputs(), &[1, 6]);
    }

    #[test]
    fn test_verifier_view_is_projection() {
        let engine = engine();
        let (prover, verifier) = WitnessAssembler::new(&engine)
            .assemble(&reference_board(), Shot::new(3, 8))
            .unwrap();

        assert_eq!(prover.verifier_view(Vec::new()), verifier);
    }
}
