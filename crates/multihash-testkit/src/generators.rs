//! Proptest generators for property-based testing.

use proptest::prelude::*;

use multihash_core::{encode, registered, HashFunction, Multihash, MAX_DIGEST_LEN};

/// Generate a code from the application range.
pub fn app_code() -> impl Strategy<Value = u8> {
    0u8..0x10
}

/// Generate a registered hash function.
pub fn hash_function() -> impl Strategy<Value = HashFunction> {
    let all: Vec<_> = registered().collect();
    prop::sample::select(all)
}

/// Generate a function the digest engine can compute.
pub fn implemented_function() -> impl Strategy<Value = HashFunction> {
    let implemented: Vec<_> = registered().filter(|f| f.is_implemented()).collect();
    prop::sample::select(implemented)
}

/// Generate any code that passes the registry check.
pub fn valid_code() -> impl Strategy<Value = u8> {
    prop_oneof![app_code(), hash_function().prop_map(HashFunction::code)]
}

/// Generate a code that fails the registry check.
pub fn invalid_code() -> impl Strategy<Value = u8> {
    any::<u8>().prop_filter("code must be unregistered", |c| {
        !multihash_core::is_valid_code(*c)
    })
}

/// Generate a digest of representable length.
pub fn digest() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..=MAX_DIGEST_LEN)
}

/// Generate a valid multihash.
pub fn multihash() -> impl Strategy<Value = Multihash> {
    (valid_code(), digest()).prop_map(|(code, digest)| {
        encode(&digest, code).expect("generated code and digest are valid")
    })
}

/// Generate a short sequence of valid multihashes.
pub fn multihashes(max_len: usize) -> impl Strategy<Value = Vec<Multihash>> {
    prop::collection::vec(multihash(), 0..=max_len)
}

/// Parameters for a digest computation.
#[derive(Debug, Clone)]
pub struct SumParams {
    pub input: Vec<u8>,
    pub function: HashFunction,
    pub length: Option<usize>,
}

impl Arbitrary for SumParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            prop::collection::vec(any::<u8>(), 0..=1024),
            implemented_function(),
        )
            .prop_flat_map(|(input, function)| {
                let length = prop::option::of(1..=function.default_length());
                (Just(input), Just(function), length)
            })
            .prop_map(|(input, function, length)| SumParams {
                input,
                function,
                length,
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multihash_core::{cast, decode, is_valid_code, sum, MultihashError};

    proptest! {
        #[test]
        fn test_generated_multihash_is_castable(mh in multihash()) {
            prop_assert_eq!(cast(mh.as_bytes()).unwrap(), mh);
        }

        #[test]
        fn test_invalid_code_rejected(code in invalid_code(), digest in digest()) {
            prop_assert!(!is_valid_code(code));
            prop_assert_eq!(encode(&digest, code), Err(MultihashError::UnknownCode(code)));
        }

        #[test]
        fn test_sum_respects_length(params: SumParams) {
            let mh = sum(&params.input, params.function.code(), params.length).unwrap();
            let expected = params.length.unwrap_or(params.function.default_length());
            let decoded = decode(mh.as_bytes()).unwrap();
            prop_assert_eq!(decoded.length, expected);
            prop_assert_eq!(decoded.name, Some(params.function.name()));
        }
    }
}
