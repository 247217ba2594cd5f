//! Witness Output
//!
//! Writes the prover and verifier documents as a pair. Both documents are
//! rendered before any file is touched, staged as temporary siblings, then
//! renamed into place. A failure removes whatever was staged, and the
//! prover document too if the verifier document could not be placed.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::config::GeneratorConfig;
use crate::error::WitnessError;
use crate::proof::document::WitnessDocuments;
use crate::proof::witness::{ProverWitness, VerifierWitness};

/// Output errors.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// Witness could not be rendered.
    #[error("witness error: {0}")]
    Witness(#[from] WitnessError),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Paths of a written witness pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenPaths {
    /// Prover document.
    pub prover: PathBuf,
    /// Verifier document.
    pub verifier: PathBuf,
}

/// Writes witness document pairs into a directory.
#[derive(Clone, Debug)]
pub struct WitnessWriter {
    prover_path: PathBuf,
    verifier_path: PathBuf,
}

impl WitnessWriter {
    /// Create a writer for explicit document paths.
    pub fn new(prover_path: impl Into<PathBuf>, verifier_path: impl Into<PathBuf>) -> Self {
        Self {
            prover_path: prover_path.into(),
            verifier_path: verifier_path.into(),
        }
    }

    /// Create a writer from generator configuration.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.prover_path(), config.verifier_path())
    }

    /// Render and write both witnesses.
    pub fn write(
        &self,
        prover: &ProverWitness,
        verifier: &VerifierWitness,
    ) -> Result<WrittenPaths, OutputError> {
        let documents = WitnessDocuments::render(prover, verifier)?;
        self.write_documents(&documents)
    }

    /// Write both rendered documents, or neither.
    #[instrument(skip(self, documents), fields(prover = %self.prover_path.display(), verifier = %self.verifier_path.display()))]
    pub fn write_documents(&self, documents: &WitnessDocuments) -> Result<WrittenPaths, OutputError> {
        let prover_tmp = staging_path(&self.prover_path);
        let verifier_tmp = staging_path(&self.verifier_path);

        let staged = stage(&prover_tmp, &documents.prover)
            .and_then(|_| stage(&verifier_tmp, &documents.verifier))
            .and_then(|_| fs::rename(&prover_tmp, &self.prover_path));

        if let Err(err) = staged {
            warn!(error = %err, "witness write failed, discarding staged files");
            discard(&prover_tmp);
            discard(&verifier_tmp);
            return Err(err.into());
        }

        if let Err(err) = fs::rename(&verifier_tmp, &self.verifier_path) {
            warn!(error = %err, "verifier document not written, removing prover document");
            discard(&verifier_tmp);
            discard(&self.prover_path);
            return Err(err.into());
        }

        debug!("witness documents written");
        Ok(WrittenPaths {
            prover: self.prover_path.clone(),
            verifier: self.verifier_path.clone(),
        })
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn stage(path: &Path, text: &str) -> std::io::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.sync_all()
}

fn discard(path: &Path) {
    if path.exists() {
        let _ = fs::remove_file(path);
    }
}

// =============================================================================
// TESTS
// =============================================================================
