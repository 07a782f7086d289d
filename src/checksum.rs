//! Base58Check: payload followed by a truncated double SHA-256.

use crate::alphabet::Alphabet;
use crate::error::CodecError;
use sha2::{Digest as ShaDigest, Sha256};

/// Number of checksum bytes appended to every payload.
pub const CHECKSUM_LENGTH: usize = 4;

/// Smallest decodable input: one payload byte plus the checksum.
pub const MIN_CHECKED_LENGTH: usize = 1 + CHECKSUM_LENGTH;

/// The hash function behind the checksum: SHA-256 applied twice.
pub struct Hasher;

impl Hasher {
    /// SHA-256 digest length (bytes).
    pub const DIGEST_LENGTH: usize = 32;

    /// Compute SHA-256(SHA-256(data)).
    #[must_use]
    pub fn double_digest(data: &[u8]) -> [u8; Self::DIGEST_LENGTH] {
        Sha256::digest(Sha256::digest(data)).into()
    }

    /// First four bytes of the double digest.
    #[must_use]
    pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
        let digest = Self::double_digest(data);
        let mut out = [0u8; CHECKSUM_LENGTH];
        out.copy_from_slice(&digest[..CHECKSUM_LENGTH]);
        out
    }
}

/// Append the checksum to `bytes` and base58-encode the result.
#[must_use]
pub fn encode_checked(bytes: &[u8]) -> String {
    let mut buf = Vec::with_capacity(bytes.len() + CHECKSUM_LENGTH);
    buf.extend_from_slice(bytes);
    buf.extend_from_slice(&Hasher::checksum(bytes));
    Alphabet::XRPL.encode(&buf)
}

/// Decode a base58 string, verify and strip its checksum.
///
/// # Errors
/// - [`CodecError::InvalidCharacter`] for symbols outside the alphabet
/// - [`CodecError::InvalidInputSize`] if fewer than five bytes decode
/// - [`CodecError::ChecksumInvalid`] if the trailing four bytes don't match
pub fn decode_checked(text: &str) -> Result<Vec<u8>, CodecError> {
    let mut decoded = Alphabet::XRPL.decode(text)?;
    log::trace!("decoded {} bytes from {} symbols", decoded.len(), text.len());

    if decoded.len() < MIN_CHECKED_LENGTH {
        return Err(CodecError::InvalidInputSize(decoded.len()));
    }

    let split = decoded.len() - CHECKSUM_LENGTH;
    if decoded[split..] != Hasher::checksum(&decoded[..split]) {
        log::debug!("checksum mismatch for {text}");
        return Err(CodecError::ChecksumInvalid);
    }

    decoded.truncate(split);
    Ok(decoded)
}
