//! Error kinds shared by every layer of the codec.

use thiserror::Error;

/// Errors that can occur while encoding or decoding.
///
/// Every fallible function in this crate returns exactly one of these. Only
/// the `is_valid_*` predicates swallow them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A symbol outside the 58-character alphabet
    #[error("invalid character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },

    /// Any other failure reported by the base58 backend
    #[error("base58 error: {0}")]
    Base58(bs58::decode::Error),

    /// Decoded data is too short to hold a payload byte plus checksum
    #[error("invalid_input_size: decoded data must have length >= 5, got {0}")]
    InvalidInputSize(usize),

    /// Trailing four bytes don't match the double-SHA-256 of the payload
    #[error("checksum_invalid")]
    ChecksumInvalid,

    /// No registered version prefix and length matched the decoded bytes
    #[error("version_invalid: version bytes do not match any of the provided version bytes")]
    UnrecognizedVersion,

    /// Payload handed to an encoder has the wrong fixed length
    #[error("invalid payload length: expected {expected}, got {got}")]
    InvalidPayloadLength { expected: usize, got: usize },

    /// Seed entropy must be exactly 16 bytes
    #[error("entropy must have length 16, got {0}")]
    InvalidEntropyLength(usize),

    /// Seed type name isn't `secp256k1` or `ed25519`
    #[error("unrecognized seed type: {0}")]
    UnrecognizedSeedType(String),

    /// X-address prefix matches neither network
    #[error("Invalid X-address: bad prefix 0x{}", hex::encode(.0))]
    BadPrefix([u8; 2]),

    /// Tag doesn't fit in 32 bits
    #[error("Invalid tag: {0} exceeds the 32-bit range")]
    InvalidTag(u64),

    /// Flag byte ≥ 2, or tag/reserved bytes inconsistent with the flag
    #[error("Unsupported X-address (flag {flag})")]
    UnsupportedXAddress { flag: u8 },
}

impl CodecError {
    /// Map a `bs58` decode failure onto the crate's error kinds.
    pub(crate) fn from_base58(text: &str, err: bs58::decode::Error) -> Self {
        match err {
            bs58::decode::Error::InvalidCharacter { character, index } => {
                CodecError::InvalidCharacter { character, index }
            }
            bs58::decode::Error::NonAsciiCharacter { index } => CodecError::InvalidCharacter {
                character: text
                    .get(index..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER),
                index,
            },
            other => CodecError::Base58(other),
        }
    }
}
