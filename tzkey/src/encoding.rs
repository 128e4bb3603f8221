//! Hex and Base58Check encoding for keys, signatures and addresses.

use crate::curve::EllipticalCurve;
use crate::error::{Error, Result};
use crate::hash::double_sha256;

const CHECKSUM_LEN: usize = 4;

/// Encode bytes as a lower-case hex string.
#[inline]
pub fn hex_encode(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decode a hex string.
///
/// Input must be of even length. An empty string decodes to no bytes.
pub fn hex_decode(s: &str) -> Result<Vec<u8>> {
    if s.len() % 2 != 0 {
        return Err(Error::InvalidHex);
    }
    Ok(hex::decode(s)?)
}

/// Encode bytes to Base58Check.
///
/// The first 4 bytes of `sha256(sha256(payload))` are appended before
/// Base58 encoding. An empty payload is valid.
pub fn base58check_encode(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);

    let checksum = double_sha256(payload);
    data.extend_from_slice(&checksum[..CHECKSUM_LEN]);

    bs58::encode(data).into_string()
}

/// Decode a Base58Check string, returning the payload without checksum.
pub fn base58check_decode(encoded: &str) -> Result<Vec<u8>> {
    let mut data = bs58::decode(encoded).into_vec()?;

    if data.len() < CHECKSUM_LEN {
        return Err(Error::InvalidLength {
            expected: CHECKSUM_LEN,
            actual: data.len(),
        });
    }

    let payload_len = data.len() - CHECKSUM_LEN;
    let computed = double_sha256(&data[..payload_len]);
    if data[payload_len..] != computed[..CHECKSUM_LEN] {
        return Err(Error::InvalidChecksum);
    }

    data.truncate(payload_len);
    Ok(data)
}

/// Encode `prefix || message` to Base58Check.
pub fn base58check_encode_with_prefix(message: &[u8], prefix: &[u8]) -> String {
    let mut data = Vec::with_capacity(prefix.len() + message.len());
    data.extend_from_slice(prefix);
    data.extend_from_slice(message);
    base58check_encode(&data)
}

/// Decode a Base58Check string and strip the expected prefix.
///
/// Fails with [`Error::InvalidPrefix`] unless the decoded payload starts with
/// exactly `prefix`.
pub fn base58check_decode_with_prefix(encoded: &str, prefix: &[u8]) -> Result<Vec<u8>> {
    let data = base58check_decode(encoded)?;
    match data.strip_prefix(prefix) {
        Some(message) => Ok(message.to_vec()),
        None => Err(Error::InvalidPrefix),
    }
}

/// Encode a signature with the signature prefix of `curve` (`edsig` / `spsig`).
pub fn encode_signature(signature: &[u8], curve: EllipticalCurve) -> String {
    base58check_encode_with_prefix(signature, curve.signature_prefix())
}
