//! Base58 conversion over the XRP Ledger alphabet.
//!
//! Bytes are read as one big-endian unsigned integer and re-expressed in
//! base 58. Every leading zero byte becomes exactly one leading `r`, so inputs
//! with equal numeric value but different lengths stay distinct.

use crate::error::CodecError;

/// The 58 symbols, in digit order. `r` is the zero digit.
pub const XRPL_ALPHABET: &[u8; 58] = b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

/// A fixed 58-symbol alphabet.
#[derive(Clone, Copy, Debug)]
pub struct Alphabet {
    table: &'static bs58::Alphabet,
}

impl Alphabet {
    /// The alphabet used by every XRP Ledger identifier.
    pub const XRPL: Alphabet = Alphabet {
        table: bs58::Alphabet::RIPPLE,
    };

    /// Encode any byte sequence, including the empty one.
    #[must_use]
    pub fn encode(self, bytes: &[u8]) -> String {
        bs58::encode(bytes).with_alphabet(self.table).into_string()
    }

    /// Decode a base58 string back into bytes.
    ///
    /// # Errors
    /// Returns [`CodecError::InvalidCharacter`] if `text` holds a symbol
    /// outside the alphabet.
    pub fn decode(self, text: &str) -> Result<Vec<u8>, CodecError> {
        bs58::decode(text)
            .with_alphabet(self.table)
            .into_vec()
            .map_err(|err| {
                log::debug!("rejecting base58 input: {err}");
                CodecError::from_base58(text, err)
            })
    }
}
