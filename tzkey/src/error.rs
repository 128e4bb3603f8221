//! Error types for wallet key operations.
//!
//! Parsing and derivation functions return these typed errors. Functions that
//! hand bytes to a curve primitive (key construction, signing, verification)
//! report failure as `None` / `false` instead, see [`crate::KeyPair`].

use thiserror::Error;

/// Errors returned by the parsing, encoding and derivation layers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Derivation path is malformed or does not start with `44'/1729'`.
    #[error("invalid derivation path")]
    InvalidDerivationPath,

    /// A derivation path level is `>= 2^31` before hardening.
    #[error("derivation path level is too large")]
    DerivationPathTooLarge,

    /// HD root derivation requires a 64-byte seed.
    #[error("invalid seed size {0}, expected 64 bytes")]
    InvalidSeedSize(usize),

    /// HMAC-SHA512 produced fewer than 64 bytes.
    #[error("invalid HMAC output")]
    InvalidHmac,

    /// Unknown mnemonic word, failed checksum or ambiguous checksum shift.
    #[error("invalid mnemonic")]
    InvalidMnemonic,

    /// Mnemonic word count is not 12, 15, 18, 21 or 24.
    #[error("invalid word count {0}, must be 12, 15, 18, 21, or 24")]
    InvalidWordCount(usize),

    /// The word to shift is not in the wordlist.
    #[error("word cannot be checksum-shifted")]
    InvalidWordToShift,

    /// Entropy must be 16, 20, 24, 28 or 32 bytes.
    #[error("invalid entropy length {0}")]
    InvalidEntropyLength(usize),

    /// PBKDF2 seed derivation failed.
    #[error("seed derivation failed")]
    SeedDerivationFailed,

    /// Base58Check checksum mismatch.
    #[error("invalid Base58Check checksum")]
    InvalidChecksum,

    /// String contains characters outside the Base58 alphabet.
    #[error("invalid Base58 alphabet")]
    InvalidAlphabet,

    /// Decoded payload does not start with the expected prefix.
    #[error("unexpected Base58Check prefix")]
    InvalidPrefix,

    /// Input has the wrong length.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// Odd-length, empty or non-hex input.
    #[error("invalid hex string")]
    InvalidHex,

    /// The OS entropy source failed.
    #[error("random generation failed: {0}")]
    Random(String),
}

/// A convenient Result type alias.
pub type Result<T> = core::result::Result<T, Error>;

impl From<hex::FromHexError> for Error {
    fn from(_: hex::FromHexError) -> Self {
        Self::InvalidHex
    }
}

impl From<bs58::decode::Error> for Error {
    fn from(_: bs58::decode::Error) -> Self {
        Self::InvalidAlphabet
    }
}

impl From<bip39::Error> for Error {
    fn from(err: bip39::Error) -> Self {
        match err {
            bip39::Error::BadWordCount(n) => Self::InvalidWordCount(n),
            bip39::Error::BadEntropyBitCount(bits) => Self::InvalidEntropyLength(bits / 8),
            _ => Self::InvalidMnemonic,
        }
    }
}
