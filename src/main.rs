//! Battleship Witness Generator
//!
//! Commits to a board, answers one shot and writes the prover and verifier
//! documents for the shot circuit. Board and shot default to the reference
//! scenario and can be overridden with `WITNESS_SHIPS` and `WITNESS_SHOT`.

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use battleship_witness::{
    reference_board, Board, BoardValue, CommitmentEngine, GeneratorConfig, Sha256Compressor, Shot,
    WitnessAssembler, WitnessWriter, REFERENCE_SHOT, VERSION,
};

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Battleship Witness v{}", VERSION);

    let config = GeneratorConfig::from_env();
    let board = match std::env::var("WITNESS_SHIPS") {
        Ok(raw) => Board::new(parse_values(&raw).context("WITNESS_SHIPS")?),
        Err(_) => reference_board(),
    };
    let shot = match std::env::var("WITNESS_SHOT") {
        Ok(raw) => Shot::from_coords(&parse_values(&raw).context("WITNESS_SHOT")?)?,
        Err(_) => Shot::from(REFERENCE_SHOT),
    };

    // One-time backend setup, reused for every commitment below
    let primitive = Sha256Compressor::initialize(&config.primitive)?;
    let engine = CommitmentEngine::new(primitive);

    let (prover, verifier) = WitnessAssembler::new(&engine)
        .with_consistency_checks(config.check_consistency)
        .assemble(&board, shot)?;

    info!("Commitment: {}", prover.commitment());
    info!("Shot ({}, {}): {:?}", shot.x, shot.y, prover.outcome());

    let paths = WitnessWriter::from_config(&config).write(&prover, &verifier)?;

    info!("Prover witness written to {}", paths.prover.display());
    info!("Verifier witness written to {}", paths.verifier.display());

    Ok(())
}

/// Parse a comma-separated list of board values.
fn parse_values(raw: &str) -> Result<Vec<BoardValue>> {
    let values = raw
        .split(',')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<BoardValue>().with_context(|| format!("invalid value {:?}", part)))
        .collect::<Result<Vec<_>>>()?;

    if values.is_empty() {
        bail!("no values given");
    }
    Ok(values)
}
