//! The hash function registry.
//!
//! Maps single-byte function codes to names and default digest lengths.
//! The tables are `const` data: there is no way to register a function at
//! runtime.
//!
//! Codes `0x00..0x10` form the application range. They are always valid,
//! even though they have no name or default length.

use std::fmt;

/// SHA-1.
pub const SHA1: u8 = 0x11;
/// SHA2-256.
pub const SHA2_256: u8 = 0x12;
/// SHA2-512.
pub const SHA2_512: u8 = 0x13;
/// SHA3.
pub const SHA3: u8 = 0x14;
/// BLAKE2b.
pub const BLAKE2B: u8 = 0x40;
/// BLAKE2s.
pub const BLAKE2S: u8 = 0x41;

/// First code past the application-defined range.
pub const APP_RANGE_END: u8 = 0x10;

/// A registered hash function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum HashFunction {
    Sha1 = SHA1,
    Sha2_256 = SHA2_256,
    Sha2_512 = SHA2_512,
    Sha3 = SHA3,
    Blake2b = BLAKE2B,
    Blake2s = BLAKE2S,
}

/// Every registered function, in code order.
const ALL: &[HashFunction] = &[
    HashFunction::Sha1,
    HashFunction::Sha2_256,
    HashFunction::Sha2_512,
    HashFunction::Sha3,
    HashFunction::Blake2b,
    HashFunction::Blake2s,
];

impl HashFunction {
    /// The wire code for this function.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a function by code.
    pub fn from_code(code: u8) -> Option<Self> {
        ALL.iter().copied().find(|f| f.code() == code)
    }

    /// Look up a function by its registry name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL.iter().copied().find(|f| f.name() == name)
    }

    /// The registry name, e.g. `"sha2-256"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha2_256 => "sha2-256",
            Self::Sha2_512 => "sha2-512",
            Self::Sha3 => "sha3",
            Self::Blake2b => "blake2b",
            Self::Blake2s => "blake2s",
        }
    }

    /// The default digest length in bytes.
    pub const fn default_length(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha2_256 | Self::Blake2s => 32,
            Self::Sha2_512 | Self::Sha3 | Self::Blake2b => 64,
        }
    }

    /// Whether the digest engine can compute this function.
    pub const fn is_implemented(self) -> bool {
        matches!(self, Self::Sha1 | Self::Sha2_256 | Self::Sha2_512)
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<HashFunction> for u8 {
    fn from(function: HashFunction) -> Self {
        function.code()
    }
}

impl TryFrom<u8> for HashFunction {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(code)
    }
}

/// Iterate over every registered function.
pub fn registered() -> impl Iterator<Item = HashFunction> {
    ALL.iter().copied()
}

/// Whether `code` lies in the application-defined range.
pub const fn is_app_code(code: u8) -> bool {
    code < APP_RANGE_END
}

/// Whether `code` may appear in a multihash.
///
/// True for the application range and for every registered function.
pub fn is_valid_code(code: u8) -> bool {
    is_app_code(code) || HashFunction::from_code(code).is_some()
}

/// The registry name for `code`, if registered.
pub fn name_for(code: u8) -> Option<&'static str> {
    HashFunction::from_code(code).map(HashFunction::name)
}

/// The code registered under `name`.
pub fn code_for_name(name: &str) -> Option<u8> {
    HashFunction::from_name(name).map(HashFunction::code)
}

/// The default digest length for `code`, if registered.
pub fn default_length(code: u8) -> Option<usize> {
    HashFunction::from_code(code).map(HashFunction::default_length)
}
