//! Digest and Field Element Encoding
//!
//! Provides the fixed-size digest type used for board commitments and the
//! byte encodings fed into the commitment primitive:
//! - Fixed-width big-endian field elements (zero-padded)
//! - `0x`-prefixed lower-case hex rendering for witness documents

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WitnessError;

/// Digest length in bytes (256 bits).
pub const DIGEST_LEN: usize = 32;

/// Prefix used when rendering digests as hex.
pub const HEX_PREFIX: &str = "0x";

/// Fixed-size digest produced by the commitment primitive.
///
/// Renders as a `0x`-prefixed 64-digit lower-case hex string, both through
/// `Display` and through serde.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Digest32(pub [u8; DIGEST_LEN]);

impl Digest32 {
    /// Wrap raw digest bytes.
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Render as `0x`-prefixed lower-case hex.
    pub fn to_hex(&self) -> String {
        format!("{}{}", HEX_PREFIX, hex::encode(self.0))
    }

    /// Parse a `0x`-prefixed hex string of exactly 32 bytes.
    pub fn from_hex(s: &str) -> Result<Self, WitnessError> {
        let digits = s.strip_prefix(HEX_PREFIX).ok_or_else(|| {
            WitnessError::Serialization(format!("digest {:?} is missing the 0x prefix", s))
        })?;
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| WitnessError::Serialization(format!("digest {:?}: {}", s, e)))?;
        Ok(Self(bytes))
    }
}

impl From<[u8; DIGEST_LEN]> for Digest32 {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest32> for String {
    fn from(digest: Digest32) -> Self {
        digest.to_hex()
    }
}

impl TryFrom<String> for Digest32 {
    type Error = WitnessError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl FromStr for Digest32 {
    type Err = WitnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Digest32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest32({})", self.to_hex())
    }
}

/// Encode a value as a big-endian field element of `width` bytes.
///
/// The value is zero-padded on the left. Fails with `InvalidInput` when the
/// value needs more than `width` bytes.
pub fn encode_field_element(value: u64, width: usize) -> Result<Vec<u8>, WitnessError> {
    let be = value.to_be_bytes();
    let significant = be.iter().position(|&b| b != 0).unwrap_or(be.len());
    let needed = be.len() - significant;

    if needed > width {
        return Err(WitnessError::invalid(format!(
            "value {} does not fit in a {}-byte field element",
            value, width
        )));
    }

    let mut out = vec![0u8; width];
    out[width - needed..].copy_from_slice(&be[significant..]);
    Ok(out)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_zero_padded_big_endian() {
        let encoded = encode_field_element(0x0102, 32).unwrap();
        assert_eq!(encoded.len(), 32);
        assert!(encoded[..30].iter().all(|&b| b == 0));
        assert_eq!(&encoded[30..], &[0x01, 0x02]);
    }

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode_field_element(0, 4).unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_exact_width() {
        assert_eq!(encode_field_element(u64::MAX, 8).unwrap(), vec![0xFF; 8]);
    }

    #[test]
    fn test_encode_overflow_rejected() {
        let result = encode_field_element(256, 1);
        assert!(matches!(result, Err(WitnessError::InvalidInput(_))));
    }

    #[test]
    fn test_digest_hex_format() {
        let digest = Digest32::new([0xAB; 32]);
        let hex = digest.to_hex();
        assert!(hex.starts_with("0x"));
        assert_eq!(hex.len(), 2 + 64);
        assert_eq!(&hex[2..4], "ab");
        assert_eq!(Digest32::from_hex(&hex).unwrap(), digest);
    }

    #[test]
    fn test_digest_rejects_missing_prefix() {
        let hex = "ab".repeat(32);
        assert!(matches!(Digest32::from_hex(&hex), Err(WitnessError::Serialization(_))));
    }

    #[test]
    fn test_digest_rejects_wrong_length() {
        assert!(Digest32::from_hex("0xabcd").is_err());
        assert!(Digest32::from_hex(&format!("0x{}", "00".repeat(33))).is_err());
    }
}
