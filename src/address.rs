//! Classic addresses (`r…`), node public keys (`n…`) and the legacy
//! tagged-address format.

use crate::error::CodecError;
use crate::versioned::{VersionCandidate, decode_versioned, encode_versioned};

/// Account ID length (bytes).
pub const ACCOUNT_ID_LENGTH: usize = 20;

/// Compressed node public key length (bytes).
pub const NODE_PUBLIC_LENGTH: usize = 33;

/// Account ID + flag + 4-byte tag + 4 reserved bytes.
pub const TAGGED_ADDRESS_LENGTH: usize = ACCOUNT_ID_LENGTH + 1 + 4 + 4;

const ACCOUNT_ID_VERSION: &[u8] = &[0x00];
const NODE_PUBLIC_VERSION: &[u8] = &[0x1C];
const TAGGED_ADDRESS_VERSION: &[u8] = &[0x00];

const ACCOUNT_ID: [VersionCandidate<()>; 1] = [VersionCandidate {
    version: ACCOUNT_ID_VERSION,
    expected_length: ACCOUNT_ID_LENGTH,
    kind: (),
}];

const NODE_PUBLIC: [VersionCandidate<()>; 1] = [VersionCandidate {
    version: NODE_PUBLIC_VERSION,
    expected_length: NODE_PUBLIC_LENGTH,
    kind: (),
}];

const TAGGED_ADDRESS: [VersionCandidate<()>; 1] = [VersionCandidate {
    version: TAGGED_ADDRESS_VERSION,
    expected_length: TAGGED_ADDRESS_LENGTH,
    kind: (),
}];

fn into_array<const N: usize>(bytes: Vec<u8>) -> Result<[u8; N], CodecError> {
    let got = bytes.len();
    bytes
        .try_into()
        .map_err(|_| CodecError::InvalidPayloadLength { expected: N, got })
}

/// Encode a 20-byte account ID as a classic address.
///
/// # Errors
/// Returns [`CodecError::InvalidPayloadLength`] unless `account_id` is 20 bytes.
pub fn encode_account_id(account_id: &[u8]) -> Result<String, CodecError> {
    encode_versioned(account_id, ACCOUNT_ID_VERSION, ACCOUNT_ID_LENGTH)
}

/// Decode a classic address to its 20-byte account ID.
///
/// # Errors
/// Returns [`CodecError::UnrecognizedVersion`] if the text isn't a classic
/// address, or any checksum-layer error.
pub fn decode_account_id(text: &str) -> Result<[u8; ACCOUNT_ID_LENGTH], CodecError> {
    let ((), bytes) = decode_versioned(text, &ACCOUNT_ID)?;
    into_array(bytes)
}

/// Encode a 33-byte compressed node public key.
///
/// # Errors
/// Returns [`CodecError::InvalidPayloadLength`] unless `key` is 33 bytes.
pub fn encode_node_public(key: &[u8]) -> Result<String, CodecError> {
    encode_versioned(key, NODE_PUBLIC_VERSION, NODE_PUBLIC_LENGTH)
}

/// Decode a node public key.
///
/// # Errors
/// Returns [`CodecError::UnrecognizedVersion`] if the text isn't a node
/// public key, or any checksum-layer error.
pub fn decode_node_public(text: &str) -> Result<[u8; NODE_PUBLIC_LENGTH], CodecError> {
    let ((), bytes) = decode_versioned(text, &NODE_PUBLIC)?;
    into_array(bytes)
}

/// Whether `text` is a well-formed classic address.
#[must_use]
pub fn is_valid_address(text: &str) -> bool {
    decode_account_id(text).is_ok()
}

/// Encode a 29-byte legacy tagged address (account ID, flag, tag, reserved).
///
/// # Errors
/// Returns [`CodecError::InvalidPayloadLength`] unless `bytes` is 29 bytes.
pub fn encode_tagged_address(bytes: &[u8]) -> Result<String, CodecError> {
    encode_versioned(bytes, TAGGED_ADDRESS_VERSION, TAGGED_ADDRESS_LENGTH)
}

/// Decode a legacy tagged address to its 29 raw bytes.
///
/// # Errors
/// Returns [`CodecError::UnrecognizedVersion`] for anything that isn't a
/// 29-byte payload under version `0x00`, including plain classic addresses.
pub fn decode_tagged_address(text: &str) -> Result<Vec<u8>, CodecError> {
    let ((), bytes) = decode_versioned(text, &TAGGED_ADDRESS)?;
    Ok(bytes)
}

/// Whether `text` is a well-formed legacy tagged address.
#[must_use]
pub fn is_valid_tagged_address(text: &str) -> bool {
    decode_tagged_address(text).is_ok()
}
