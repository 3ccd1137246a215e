//! Golden test vectors for cross-implementation verification.
//!
//! Every implementation of the format must produce identical wire bytes for
//! the digest vectors and reject the malformed buffers with the same error.

use multihash::{
    cast, decode, encode, sum, HashFunction, Hasher, HasherConfig, Multihash, MultihashError,
};
use multihash_testkit::{all_vectors, rejection_vectors};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_digest_vectors() {
    init_tracing();

    for v in all_vectors() {
        let mh = sum(v.input, v.code, v.length).unwrap();
        assert_eq!(mh.to_hex(), v.expected_hex, "hex mismatch for {}", v.name);

        // The hex form parses back to the same value.
        let parsed = Multihash::from_hex(v.expected_hex).unwrap();
        assert_eq!(parsed, mh, "parse mismatch for {}", v.name);

        // So does base58.
        let b58 = Multihash::from_base58(&mh.to_base58()).unwrap();
        assert_eq!(b58, mh, "base58 mismatch for {}", v.name);
    }
}

#[test]
fn test_digest_vectors_through_hasher() {
    init_tracing();

    for v in all_vectors() {
        let config = HasherConfig {
            code: v.code,
            length: v.length,
        };
        let hasher = Hasher::new(config).unwrap();
        assert_eq!(hasher.sum(v.input).unwrap().to_hex(), v.expected_hex, "{}", v.name);
    }
}

#[test]
fn test_rejection_vectors() {
    for v in rejection_vectors() {
        let buf = hex::decode(v.hex).unwrap();
        assert_eq!(cast(&buf), Err(v.error.clone()), "cast of {}", v.name);
        assert_eq!(Multihash::from_hex(v.hex), Err(v.error), "from_hex of {}", v.name);
    }
}

#[test]
fn test_example_decode() {
    let digest = hex::decode("0beec7b5ea3f0fdbc95d0dd47f3c5bc275da8a33").unwrap();
    let mh = multihash::encode_name(&digest, "sha1").unwrap();
    let decoded = decode(mh.as_bytes()).unwrap();

    assert_eq!(decoded.code, 0x11);
    assert_eq!(decoded.name, Some("sha1"));
    assert_eq!(decoded.length, 20);
    assert_eq!(hex::encode(decoded.digest), "0beec7b5ea3f0fdbc95d0dd47f3c5bc275da8a33");
}

#[test]
fn test_valid_code_table() {
    let registered = [0x11u8, 0x12, 0x13, 0x14, 0x40, 0x41];
    for code in 0..=u8::MAX {
        let expected = code < 0x10 || registered.contains(&code);
        assert_eq!(multihash::is_valid_code(code), expected, "code {code:#04x}");
    }
}

#[test]
fn test_registry_names() {
    for function in multihash::registered() {
        assert_eq!(multihash::code_for_name(function.name()), Some(function.code()));
        assert_eq!(HashFunction::from_code(function.code()), Some(function));
    }
}

#[test]
fn test_unknown_code_never_encodes() {
    assert_eq!(encode(&[1], 0x20), Err(MultihashError::UnknownCode(0x20)));
}
