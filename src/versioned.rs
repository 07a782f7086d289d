//! Version-prefixed, fixed-length payloads on top of Base58Check.

use crate::checksum::{decode_checked, encode_checked};
use crate::error::CodecError;

/// One accepted `(version bytes, payload length)` pair and the value it decodes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VersionCandidate<T> {
    /// Bytes that must prefix the decoded data
    pub version: &'static [u8],
    /// Payload length that must follow the version bytes
    pub expected_length: usize,
    /// Returned to the caller when this candidate matches
    pub kind: T,
}

impl<T: Copy> VersionCandidate<T> {
    fn matches(&self, data: &[u8]) -> Option<T> {
        let payload = data.strip_prefix(self.version)?;
        (payload.len() == self.expected_length).then_some(self.kind)
    }
}

/// Prefix `payload` with `version` and Base58Check-encode it.
///
/// # Errors
/// Returns [`CodecError::InvalidPayloadLength`] if `payload` isn't
/// `expected_length` bytes long.
pub fn encode_versioned(
    payload: &[u8],
    version: &[u8],
    expected_length: usize,
) -> Result<String, CodecError> {
    if payload.len() != expected_length {
        return Err(CodecError::InvalidPayloadLength {
            expected: expected_length,
            got: payload.len(),
        });
    }

    let mut buf = Vec::with_capacity(version.len() + payload.len());
    buf.extend_from_slice(version);
    buf.extend_from_slice(payload);
    Ok(encode_checked(&buf))
}

/// Decode `text` and match it against `candidates` in order.
///
/// A candidate matches when its version bytes prefix the decoded data and
/// exactly `expected_length` bytes follow. The first match wins.
///
/// # Errors
/// Propagates [`decode_checked`] failures, and returns
/// [`CodecError::UnrecognizedVersion`] when no candidate matches.
pub fn decode_versioned<T: Copy>(
    text: &str,
    candidates: &[VersionCandidate<T>],
) -> Result<(T, Vec<u8>), CodecError> {
    let mut decoded = decode_checked(text)?;

    for candidate in candidates {
        if let Some(kind) = candidate.matches(&decoded) {
            decoded.drain(..candidate.version.len());
            return Ok((kind, decoded));
        }
    }

    log::debug!(
        "no version candidate matches {} decoded bytes (prefix {})",
        decoded.len(),
        hex::encode(&decoded[..decoded.len().min(3)])
    );
    Err(CodecError::UnrecognizedVersion)
}
