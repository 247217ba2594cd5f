//! Generator Configuration
//!
//! Defaults reproduce the reference run: SHA-256 backend with 32-byte field
//! elements, consistency checks on, and `Prover.toml` / `Verifier.toml`
//! written to the working directory. Every field can be overridden from the
//! environment.

use std::path::PathBuf;

/// Default domain separator for board commitments.
pub const DEFAULT_HASH_DOMAIN: &str = "BATTLESHIP_BOARD_COMMIT_V1";

/// Default bytes per encoded board value.
pub const DEFAULT_ELEMENT_WIDTH: usize = 32;

/// Commitment backend configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimitiveConfig {
    /// Domain separator prepended to every commitment preimage.
    pub domain: String,
    /// Bytes per encoded field element.
    pub element_width: usize,
}

impl Default for PrimitiveConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_HASH_DOMAIN.to_string(),
            element_width: DEFAULT_ELEMENT_WIDTH,
        }
    }
}

impl PrimitiveConfig {
    /// Create config from environment variables.
    ///
    /// An unparseable `WITNESS_ELEMENT_WIDTH` falls back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            domain: std::env::var("WITNESS_HASH_DOMAIN").unwrap_or(defaults.domain),
            element_width: std::env::var("WITNESS_ELEMENT_WIDTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.element_width),
        }
    }
}

/// Witness generator configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory both documents are written into.
    pub output_dir: PathBuf,
    /// File name of the prover document.
    pub prover_file: String,
    /// File name of the verifier document.
    pub verifier_file: String,
    /// Recompute commitment and outcome before assembling.
    pub check_consistency: bool,
    /// Commitment backend settings.
    pub primitive: PrimitiveConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            prover_file: "Prover.toml".to_string(),
            verifier_file: "Verifier.toml".to_string(),
            check_consistency: true,
            primitive: PrimitiveConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            output_dir: std::env::var("WITNESS_OUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            prover_file: std::env::var("WITNESS_PROVER_FILE").unwrap_or(defaults.prover_file),
            verifier_file: std::env::var("WITNESS_VERIFIER_FILE")
                .unwrap_or(defaults.verifier_file),
            check_consistency: std::env::var("WITNESS_CHECK_CONSISTENCY")
                .map(|v| !(v == "false" || v == "0"))
                .unwrap_or(defaults.check_consistency),
            primitive: PrimitiveConfig::from_env(),
        }
    }

    /// Full path of the prover document.
    pub fn prover_path(&self) -> PathBuf {
        self.output_dir.join(&self.prover_file)
    }

    /// Full path of the verifier document.
    pub fn verifier_path(&self) -> PathBuf {
        self.output_dir.join(&self.verifier_file)
    }
}
