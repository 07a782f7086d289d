//! Family seeds: 16 bytes of entropy tagged with their key algorithm.

use crate::error::CodecError;
use crate::versioned::{VersionCandidate, decode_versioned, encode_versioned};
use std::fmt;
use std::str::FromStr;

/// Seed entropy length (bytes).
pub const ENTROPY_LENGTH: usize = 16;

/// Key algorithm a seed derives keys for.
///
/// Version bytes:
/// - `0x21` = secp256k1 (`s…`)
/// - `0x01 0xE1 0x4B` = ed25519 (`sEd…`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeedType {
    /// secp256k1 seed.
    Secp256k1,
    /// Ed25519 seed.
    Ed25519,
}

impl SeedType {
    /// Every seed type, in decode order.
    pub const ALL: [SeedType; 2] = [SeedType::Ed25519, SeedType::Secp256k1];

    /// Version bytes to prefix the entropy with.
    #[must_use]
    pub fn version(self) -> &'static [u8] {
        match self {
            SeedType::Secp256k1 => &[0x21],
            SeedType::Ed25519 => &[0x01, 0xE1, 0x4B],
        }
    }

    /// Name used in text form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SeedType::Secp256k1 => "secp256k1",
            SeedType::Ed25519 => "ed25519",
        }
    }

    fn candidate(self) -> VersionCandidate<SeedType> {
        VersionCandidate {
            version: self.version(),
            expected_length: ENTROPY_LENGTH,
            kind: self,
        }
    }
}

impl fmt::Display for SeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses `secp256k1` or `ed25519`.
impl FromStr for SeedType {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeedType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CodecError::UnrecognizedSeedType(s.to_string()))
    }
}

/// A decoded seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seed {
    /// Raw entropy
    pub entropy: [u8; ENTROPY_LENGTH],
    /// Which algorithm the seed is for
    pub seed_type: SeedType,
}

impl Seed {
    /// The raw entropy bytes
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.entropy
    }
}

/// Encode 16 bytes of entropy as a seed of the given type.
///
/// # Errors
/// Returns [`CodecError::InvalidEntropyLength`] unless `entropy` is exactly
/// 16 bytes.
pub fn encode_seed(entropy: &[u8], seed_type: SeedType) -> Result<String, CodecError> {
    if entropy.len() != ENTROPY_LENGTH {
        return Err(CodecError::InvalidEntropyLength(entropy.len()));
    }
    encode_versioned(entropy, seed_type.version(), ENTROPY_LENGTH)
}

/// Encode a secp256k1 seed.
///
/// # Errors
/// See [`encode_seed`].
pub fn encode_secp256k1_seed(entropy: &[u8]) -> Result<String, CodecError> {
    encode_seed(entropy, SeedType::Secp256k1)
}

/// Encode an Ed25519 seed.
///
/// # Errors
/// See [`encode_seed`].
pub fn encode_ed25519_seed(entropy: &[u8]) -> Result<String, CodecError> {
    encode_seed(entropy, SeedType::Ed25519)
}

/// Decode a seed of either type.
///
/// # Errors
/// Returns [`CodecError::UnrecognizedVersion`] if the text is a valid
/// Base58Check string but not a seed, or any checksum-layer error.
pub fn decode_seed(text: &str) -> Result<Seed, CodecError> {
    let candidates = SeedType::ALL.map(SeedType::candidate);
    let (seed_type, bytes) = decode_versioned(text, &candidates)?;
    let entropy = <[u8; ENTROPY_LENGTH]>::try_from(bytes.as_slice())
        .map_err(|_| CodecError::InvalidEntropyLength(bytes.len()))?;
    Ok(Seed { entropy, seed_type })
}
