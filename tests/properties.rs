//! Property-based tests for the codec stack
//!
//! These check round-trips and tamper detection over random inputs.

use proptest::prelude::*;
use xrpl_address_codec::{
    Alphabet, CodecError, Network, SeedType, XRPL_ALPHABET, decode_account_id, decode_checked,
    decode_node_public, decode_seed, decode_x_address, encode_account_id, encode_checked,
    encode_node_public, encode_seed, encode_x_address, is_valid_x_address,
};

fn seed_type() -> impl Strategy<Value = SeedType> {
    prop_oneof![Just(SeedType::Secp256k1), Just(SeedType::Ed25519)]
}

fn network() -> impl Strategy<Value = Network> {
    prop_oneof![Just(Network::Mainnet), Just(Network::Testnet)]
}

proptest! {
    /// Any byte string survives base58, leading zeros included
    #[test]
    fn prop_alphabet_roundtrip(
        zeros in 0usize..8,
        tail in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        let mut bytes = vec![0u8; zeros];
        bytes.extend(tail);

        let encoded = Alphabet::XRPL.encode(&bytes);
        prop_assert_eq!(Alphabet::XRPL.decode(&encoded).unwrap(), bytes);
    }

    /// Leading zero bytes map one-to-one onto leading `r`s
    #[test]
    fn prop_leading_zero_count(zeros in 0usize..8, first in 1u8..=255, rest in prop::collection::vec(any::<u8>(), 0..16)) {
        let mut bytes = vec![0u8; zeros];
        bytes.push(first);
        bytes.extend(rest);

        let encoded = Alphabet::XRPL.encode(&bytes);
        prop_assert_eq!(encoded.chars().take_while(|&c| c == 'r').count(), zeros);
    }

    /// Checksummed payloads round-trip
    #[test]
    fn prop_checked_roundtrip(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
        prop_assert_eq!(decode_checked(&encode_checked(&bytes)).unwrap(), bytes);
    }

    /// Swapping any one symbol breaks the checksum
    #[test]
    fn prop_checked_detects_substitution(
        bytes in prop::collection::vec(any::<u8>(), 1..40),
        position in any::<prop::sample::Index>(),
        replacement in 0usize..58,
    ) {
        let encoded = encode_checked(&bytes);
        let index = position.index(encoded.len());
        let before = encoded.as_bytes()[index];
        let symbol = XRPL_ALPHABET[replacement];
        prop_assume!(symbol != before);

        let mut tampered = encoded.into_bytes();
        tampered[index] = symbol;
        let tampered = String::from_utf8(tampered).unwrap();

        let result = decode_checked(&tampered);
        prop_assert!(
            matches!(result, Err(CodecError::ChecksumInvalid | CodecError::InvalidInputSize(_))),
            "tampered input decoded: {:?}",
            result
        );
    }

    /// Account IDs round-trip and start with `r`
    #[test]
    fn prop_account_id_roundtrip(account in any::<[u8; 20]>()) {
        let encoded = encode_account_id(&account).unwrap();
        prop_assert!(encoded.starts_with('r'));
        prop_assert_eq!(decode_account_id(&encoded).unwrap(), account);
    }

    /// Node public keys round-trip
    #[test]
    fn prop_node_public_roundtrip(key in prop::collection::vec(any::<u8>(), 33)) {
        let encoded = encode_node_public(&key).unwrap();
        prop_assert_eq!(decode_node_public(&encoded).unwrap().to_vec(), key);
    }

    /// Seeds of both types round-trip and keep their type
    #[test]
    fn prop_seed_roundtrip(entropy in any::<[u8; 16]>(), seed_type in seed_type()) {
        let encoded = encode_seed(&entropy, seed_type).unwrap();
        let decoded = decode_seed(&encoded).unwrap();
        prop_assert_eq!(decoded.entropy, entropy);
        prop_assert_eq!(decoded.seed_type, seed_type);
    }

    /// Encoders only accept their fixed length
    #[test]
    fn prop_wrong_lengths_rejected(len in 0usize..64) {
        prop_assume!(len != 16 && len != 20 && len != 33);
        let payload = vec![0xAB; len];
        prop_assert_eq!(
            encode_seed(&payload, SeedType::Ed25519),
            Err(CodecError::InvalidEntropyLength(len))
        );
        prop_assert!(encode_account_id(&payload).is_err());
        prop_assert!(encode_node_public(&payload).is_err());
    }

    /// Every 32-bit tag on either network round-trips
    #[test]
    fn prop_x_address_roundtrip(
        account in any::<[u8; 20]>(),
        tag in prop::option::of(any::<u32>()),
        network in network(),
    ) {
        let classic = encode_account_id(&account).unwrap();
        let x_address = encode_x_address(&classic, tag.map(u64::from), network).unwrap();

        let decoded = decode_x_address(&x_address).unwrap();
        prop_assert_eq!(decoded.account_id, account);
        prop_assert_eq!(decoded.classic_address, classic);
        prop_assert_eq!(decoded.tag, tag);
        prop_assert_eq!(decoded.network, network);
        prop_assert!(is_valid_x_address(&x_address));
    }

    /// Tags above u32::MAX are never truncated
    #[test]
    fn prop_x_address_rejects_wide_tags(tag in (u64::from(u32::MAX) + 1)..=u64::MAX) {
        prop_assert_eq!(
            encode_x_address("rGWrZyQqhTp9Xu7G5Pkayo7bXjH4k4QYpf", Some(tag), Network::Mainnet),
            Err(CodecError::InvalidTag(tag))
        );
    }
}

/// Boundary tags give distinct addresses that decode to themselves
#[test]
fn boundary_tags_are_distinct() {
    let account = "rGWrZyQqhTp9Xu7G5Pkayo7bXjH4k4QYpf";
    let tags = [None, Some(0), Some(1), Some(4_294_967_294), Some(4_294_967_295)];

    let encoded: Vec<String> = tags
        .iter()
        .map(|&tag| encode_x_address(account, tag, Network::Mainnet).unwrap())
        .collect();

    for (i, a) in encoded.iter().enumerate() {
        for b in &encoded[i + 1..] {
            assert_ne!(a, b);
        }
        let decoded = decode_x_address(a).unwrap();
        assert_eq!(decoded.classic_address, account);
        assert_eq!(decoded.tag.map(u64::from), tags[i]);
    }
}
