//! Witness Documents
//!
//! Canonical TOML rendering of the witness records consumed by the proof
//! system. Keys are emitted in record field order; the hash is a `0x` hex
//! string, the hit flag an integer and sequences inline integer arrays.
//! Parsing a rendered document and rendering it again reproduces the same
//! bytes.

use crate::error::WitnessError;
use crate::proof::witness::{ProverWitness, VerifierWitness};

/// Both rendered documents for one shot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WitnessDocuments {
    /// Prover document text.
    pub prover: String,
    /// Verifier document text.
    pub verifier: String,
}

impl WitnessDocuments {
    /// Render both witnesses. Fails without producing either document if
    /// any field cannot be rendered.
    pub fn render(prover: &ProverWitness, verifier: &VerifierWitness) -> Result<Self, WitnessError> {
        Ok(Self {
            prover: prover.to_toml()?,
            verifier: verifier.to_toml()?,
        })
    }
}

impl ProverWitness {
    /// Render as a prover document.
    pub fn to_toml(&self) -> Result<String, WitnessError> {
        Ok(toml::to_string(self)?)
    }

    /// Parse a prover document.
    pub fn from_toml(text: &str) -> Result<Self, WitnessError> {
        Ok(toml::from_str(text)?)
    }
}

impl VerifierWitness {
    /// Render as a verifier document.
    pub fn to_toml(&self) -> Result<String, WitnessError> {
        Ok(toml::to_string(self)?)
    }

    /// Parse a verifier document. Documents carrying board data are rejected.
    pub fn from_toml(text: &str) -> Result<Self, WitnessError> {
        Ok(toml::from_str(text)?)
    }
}

// =============================================================================
// TESTS
// =============================================================================
