//! Base58Check byte prefixes.
//!
//! Each prefix makes the encoded string start with a recognisable tag
//! (`tz1`, `edpk`, `spsig`, ...). The tables are fixed by the protocol and
//! must be reproduced byte for byte.

/// Watermarks prepended to payloads before hashing for signature.
pub struct Watermark;

impl Watermark {
    /// Generic operation watermark.
    pub const OPERATION: &'static [u8] = &[0x03];
}

/// Ed25519 key and signature prefixes.
pub struct Ed25519;

impl Ed25519 {
    /// `edpk`, 32-byte public key.
    pub const PUBLIC: &'static [u8] = &[13, 15, 37, 217];
    /// `edsk`, 64-byte secret key (seed followed by public key).
    pub const SECRET: &'static [u8] = &[43, 246, 78, 7];
    /// `edsk`, 32-byte seed.
    pub const SEED: &'static [u8] = &[13, 15, 58, 7];
    /// `edsig`, 64-byte signature.
    pub const SIGNATURE: &'static [u8] = &[9, 245, 205, 134, 18];
    /// `edesk`, encrypted seed.
    pub const ENCRYPTED: &'static [u8] = &[7, 90, 60, 179, 41];
}

/// Secp256k1 key and signature prefixes.
pub struct Secp256k1;

impl Secp256k1 {
    /// `sppk`, 33-byte compressed public key.
    pub const PUBLIC: &'static [u8] = &[3, 254, 226, 86];
    /// `spsk`, 32-byte secret scalar.
    pub const SECRET: &'static [u8] = &[17, 162, 224, 201];
    /// `spsig`, 64-byte compact signature.
    pub const SIGNATURE: &'static [u8] = &[13, 115, 101, 19, 63];
    /// `spesk`, encrypted secret scalar.
    pub const ENCRYPTED: &'static [u8] = &[9, 237, 241, 174, 150];
}

/// Address (public key hash) prefixes.
pub struct Address;

impl Address {
    /// `tz1`, Ed25519 public key hash.
    pub const TZ1: &'static [u8] = &[6, 161, 159];
    /// `tz2`, secp256k1 public key hash.
    pub const TZ2: &'static [u8] = &[6, 161, 161];
}
