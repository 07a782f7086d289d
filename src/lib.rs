//! A Base58Check encoder/decoder for XRP Ledger identifiers.
//!
//! This crate supports:
//! - Base58 over the XRPL alphabet (`rpshnaf39w…`).
//! - A four-byte double SHA-256 checksum on every encoded value.
//! - Versioned payloads: classic addresses, node public keys and seeds.
//! - X-addresses carrying an optional 32-bit destination tag and the network.
//!
//! ```
//! use xrpl_address_codec::{Network, decode_x_address, encode_x_address};
//!
//! let x = encode_x_address("rGWrZyQqhTp9Xu7G5Pkayo7bXjH4k4QYpf", Some(276), Network::Mainnet).unwrap();
//! assert_eq!(x, "XVLhHMPHU98es4dbozjVtdWzVrDjtVoKj3MnFGMXEFMnvJV");
//! assert_eq!(decode_x_address(&x).unwrap().tag, Some(276));
//! ```

pub mod address;
pub mod alphabet;
pub mod checksum;
pub mod error;
pub mod seed;
pub mod versioned;
pub mod x_address;

pub use address::{
    ACCOUNT_ID_LENGTH, NODE_PUBLIC_LENGTH, decode_account_id, decode_node_public,
    decode_tagged_address, encode_account_id, encode_node_public, encode_tagged_address,
    is_valid_address, is_valid_tagged_address,
};
pub use alphabet::{Alphabet, XRPL_ALPHABET};
pub use checksum::{Hasher, decode_checked, encode_checked};
pub use error::CodecError;
pub use seed::{
    ENTROPY_LENGTH, Seed, SeedType, decode_seed, encode_ed25519_seed, encode_secp256k1_seed,
    encode_seed,
};
pub use versioned::{VersionCandidate, decode_versioned, encode_versioned};
pub use x_address::{
    Network, XAddress, classic_address_to_x_address, decode_x_address, encode_x_address,
    is_valid_x_address, x_address_to_classic_address,
};
