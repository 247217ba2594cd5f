//! Commitment Primitive
//!
//! The hash backend is consumed as a capability: a value implementing
//! [`CompressionPrimitive`] is constructed once (the expensive setup step) and
//! then passed into the [`CommitmentEngine`](super::commitment::CommitmentEngine),
//! which reuses it for every commitment.

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::config::PrimitiveConfig;
use crate::core::hash::Digest32;
use crate::error::WitnessError;

/// Smallest element width that can carry a full `u64` board value.
pub const MIN_ELEMENT_WIDTH: usize = 8;

/// Largest element width (one field element of the 256-bit digest space).
pub const MAX_ELEMENT_WIDTH: usize = 32;

/// Multi-input compression function over fixed-width field elements.
pub trait CompressionPrimitive {
    /// Bytes per encoded field element.
    fn element_width(&self) -> usize;

    /// Compress all encoded elements in one call.
    ///
    /// Input order is part of the preimage.
    fn compress(&self, inputs: &[Vec<u8>]) -> Result<Digest32, WitnessError>;
}

impl<P: CompressionPrimitive + ?Sized> CompressionPrimitive for &P {
    fn element_width(&self) -> usize {
        (**self).element_width()
    }

    fn compress(&self, inputs: &[Vec<u8>]) -> Result<Digest32, WitnessError> {
        (**self).compress(inputs)
    }
}

/// Domain-separated SHA-256 compression backend.
///
/// Preimage layout: `domain || count (u32 BE) || e_0 || ... || e_{n-1}`.
#[derive(Clone, Debug)]
pub struct Sha256Compressor {
    domain: Vec<u8>,
    element_width: usize,
}

impl Sha256Compressor {
    /// Initialize the backend from configuration.
    ///
    /// Fails with `PrimitiveUnavailable` on an empty domain separator or an
    /// element width outside `MIN_ELEMENT_WIDTH..=MAX_ELEMENT_WIDTH`.
    pub fn initialize(config: &PrimitiveConfig) -> Result<Self, WitnessError> {
        if config.domain.is_empty() {
            return Err(WitnessError::PrimitiveUnavailable(
                "empty domain separator".into(),
            ));
        }
        if !(MIN_ELEMENT_WIDTH..=MAX_ELEMENT_WIDTH).contains(&config.element_width) {
            return Err(WitnessError::PrimitiveUnavailable(format!(
                "element width {} outside {}..={} bytes",
                config.element_width, MIN_ELEMENT_WIDTH, MAX_ELEMENT_WIDTH
            )));
        }

        debug!(
            domain = %config.domain,
            element_width = config.element_width,
            "sha256 compressor initialized"
        );

        Ok(Self {
            domain: config.domain.as_bytes().to_vec(),
            element_width: config.element_width,
        })
    }
}

impl CompressionPrimitive for Sha256Compressor {
    fn element_width(&self) -> usize {
        self.element_width
    }

    fn compress(&self, inputs: &[Vec<u8>]) -> Result<Digest32, WitnessError> {
        let count = u32::try_from(inputs.len())
            .map_err(|_| WitnessError::invalid("too many inputs to compress"))?;

        let mut hasher = Sha256::new();
        hasher.update(&self.domain);
        hasher.update(count.to_be_bytes());

        for (i, input) in inputs.iter().enumerate() {
            if input.len() != self.element_width {
                return Err(WitnessError::invalid(format!(
                    "input {} is {} bytes, expected {}",
                    i,
                    input.len(),
                    self.element_width
                )));
            }
            hasher.update(input);
        }

        Ok(Digest32::new(hasher.finalize().into()))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn compressor() -> Sha256Compressor {
        Sha256Compressor::initialize(&PrimitiveConfig::default()).unwrap()
    }

    #[test]
    fn test_initialize_defaults() {
        assert_eq!(compressor().element_width(), 32);
    }

    #[test]
    fn test_empty_domain_unavailable() {
        let config = PrimitiveConfig {
            domain: String::new(),
            ..Default::default()
        };
        let result = Sha256Compressor::initialize(&config);
        assert!(matches!(result, Err(WitnessError::PrimitiveUnavailable(_))));
    }

    #[test]
    fn test_bad_width_unavailable() {
        for width in [0, 4, 7, 33, 64] {
            let config = PrimitiveConfig {
                element_width: width,
                ..Default::default()
            };
            let result = Sha256Compressor::initialize(&config);
            assert!(matches!(result, Err(WitnessError::PrimitiveUnavailable(_))));
        }
    }

    #[test]
    fn test_compress_rejects_wrong_width() {
        let c = compressor();
        let result = c.compress(&[vec![0u8; 31]]);
        assert!(matches!(result, Err(WitnessError::InvalidInput(_))));
    }

    #[test]
    fn test_domain_separation() {
        let a = compressor();
        let b = Sha256Compressor::initialize(&PrimitiveConfig {
            domain: "OTHER_DOMAIN".into(),
            ..Default::default()
        })
        .unwrap();

        let inputs = vec![vec![0u8; 32], vec![1u8; 32]];
        assert_ne!(a.compress(&inputs).unwrap(), b.compress(&inputs).unwrap());
    }

    #[test]
    fn test_single_call_order_matters() {
        let c = compressor();
        let ab = c.compress(&[vec![1u8; 32], vec![2u8; 32]]).unwrap();
        let ba = c.compress(&[vec![2u8; 32], vec![1u8; 32]]).unwrap();
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_count_is_bound() {
        let c = compressor();
        let one = c.compress(&[vec![0u8; 32]]).unwrap();
        let two = c.compress(&[vec![0u8; 32], vec![0u8; 32]]).unwrap();
        assert_ne!(one, two);
    }
}
