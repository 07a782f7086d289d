//! X-addresses: account ID, optional destination tag and network in one
//! checksummed string.
//!
//! Layout before the checksum (31 bytes):
//!
//! | bytes    | field                                  |
//! |----------|----------------------------------------|
//! | `0..2`   | network prefix                         |
//! | `2..22`  | account ID                             |
//! | `22`     | flag: `0` no tag, `1` 32-bit tag       |
//! | `23..27` | tag, little-endian (zero when absent)  |
//! | `27..31` | reserved for 64-bit tags, must be zero |

use crate::address::{ACCOUNT_ID_LENGTH, decode_account_id, encode_account_id};
use crate::checksum::{decode_checked, encode_checked};
use crate::error::CodecError;
use hex::encode as hex_encode;
use std::fmt;

/// Network prefix + account ID + flag + tag + reserved.
pub const X_ADDRESS_LENGTH: usize = 2 + ACCOUNT_ID_LENGTH + 1 + 4 + 4;

const FLAG_OFFSET: usize = 2 + ACCOUNT_ID_LENGTH;
const TAG_OFFSET: usize = FLAG_OFFSET + 1;
const RESERVED_OFFSET: usize = TAG_OFFSET + 4;

/// Which network an X-address belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    /// Mainnet addresses use `X…`
    Mainnet,
    /// Testnet addresses use `T…`
    Testnet,
}

impl Network {
    /// The two-byte prefix for this network.
    #[must_use]
    pub fn prefix(self) -> [u8; 2] {
        match self {
            Network::Mainnet => [0x05, 0x44],
            Network::Testnet => [0x04, 0x93],
        }
    }

    /// Reverse lookup from prefix bytes to network.
    #[must_use]
    pub fn from_prefix(prefix: [u8; 2]) -> Option<Network> {
        match prefix {
            [0x05, 0x44] => Some(Network::Mainnet),
            [0x04, 0x93] => Some(Network::Testnet),
            _ => None,
        }
    }
}

/// The decoded components of an X-address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XAddress {
    /// Raw account ID
    pub account_id: [u8; ACCOUNT_ID_LENGTH],
    /// The same account as a classic `r…` address
    pub classic_address: String,
    /// Destination tag, if any
    pub tag: Option<u32>,
    /// Which network (from the prefix)
    pub network: Network,
}

impl XAddress {
    /// The hex representation of the account ID
    #[must_use]
    pub fn account_id_hex(&self) -> String {
        hex_encode(self.account_id)
    }
}

impl fmt::Display for XAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = pack(&self.account_id, self.tag, self.network);
        write!(f, "{}", encode_checked(&body))
    }
}

fn pack(
    account_id: &[u8; ACCOUNT_ID_LENGTH],
    tag: Option<u32>,
    network: Network,
) -> [u8; X_ADDRESS_LENGTH] {
    let mut body = [0u8; X_ADDRESS_LENGTH];
    body[..2].copy_from_slice(&network.prefix());
    body[2..FLAG_OFFSET].copy_from_slice(account_id);
    body[FLAG_OFFSET] = u8::from(tag.is_some());
    body[TAG_OFFSET..RESERVED_OFFSET].copy_from_slice(&tag.unwrap_or(0).to_le_bytes());
    body
}

/// Encode a classic address and optional tag as an X-address.
///
/// # Errors
/// - Any error from decoding `classic_address`, unchanged
/// - [`CodecError::InvalidTag`] if `tag` doesn't fit in 32 bits
pub fn encode_x_address(
    classic_address: &str,
    tag: Option<u64>,
    network: Network,
) -> Result<String, CodecError> {
    let account_id = decode_account_id(classic_address)?;
    let tag = tag
        .map(|t| u32::try_from(t).map_err(|_| CodecError::InvalidTag(t)))
        .transpose()?;

    Ok(encode_checked(&pack(&account_id, tag, network)))
}

/// Decode an X-address back into its parts.
///
/// # Errors
/// - [`CodecError::InvalidInputSize`] / [`CodecError::ChecksumInvalid`] from the checksum layer
/// - [`CodecError::BadPrefix`] if the prefix matches neither network
/// - [`CodecError::UnsupportedXAddress`] for a 64-bit tag flag, a body of the
///   wrong length, or non-zero bytes where the flag says there should be none
pub fn decode_x_address(text: &str) -> Result<XAddress, CodecError> {
    let decoded = decode_checked(text)?;

    let network = match decoded.first_chunk::<2>() {
        Some(&prefix) => {
            Network::from_prefix(prefix).ok_or(CodecError::BadPrefix(prefix))?
        }
        None => return Err(CodecError::InvalidInputSize(decoded.len())),
    };

    let body: &[u8; X_ADDRESS_LENGTH] = decoded.as_slice().try_into().map_err(|_| {
        log::debug!("X-address body is {} bytes, expected {X_ADDRESS_LENGTH}", decoded.len());
        CodecError::UnsupportedXAddress {
            flag: decoded.get(FLAG_OFFSET).copied().unwrap_or(0),
        }
    })?;

    let mut account_id = [0u8; ACCOUNT_ID_LENGTH];
    account_id.copy_from_slice(&body[2..FLAG_OFFSET]);
    let classic_address = encode_account_id(&account_id)?;

    let flag = body[FLAG_OFFSET];
    let tag_bytes = [
        body[TAG_OFFSET],
        body[TAG_OFFSET + 1],
        body[TAG_OFFSET + 2],
        body[TAG_OFFSET + 3],
    ];
    let reserved_clear = body[RESERVED_OFFSET..].iter().all(|&b| b == 0);

    let tag = match flag {
        0 if tag_bytes == [0; 4] && reserved_clear => None,
        1 if reserved_clear => Some(u32::from_le_bytes(tag_bytes)),
        _ => {
            log::debug!("unsupported X-address flag {flag} in {text}");
            return Err(CodecError::UnsupportedXAddress { flag });
        }
    };

    Ok(XAddress {
        account_id,
        classic_address,
        tag,
        network,
    })
}

/// Whether `text` is a well-formed X-address.
#[must_use]
pub fn is_valid_x_address(text: &str) -> bool {
    decode_x_address(text).is_ok()
}

/// Convenience wrapper over [`encode_x_address`] for an in-range tag.
///
/// # Errors
/// Any error from decoding `classic_address`.
pub fn classic_address_to_x_address(
    classic_address: &str,
    tag: Option<u32>,
    network: Network,
) -> Result<String, CodecError> {
    encode_x_address(classic_address, tag.map(u64::from), network)
}

/// Split an X-address into classic address, tag and network.
///
/// # Errors
/// See [`decode_x_address`].
pub fn x_address_to_classic_address(
    text: &str,
) -> Result<(String, Option<u32>, Network), CodecError> {
    let XAddress {
        classic_address,
        tag,
        network,
        ..
    } = decode_x_address(text)?;
    Ok((classic_address, tag, network))
}
