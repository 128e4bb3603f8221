//! Public keys, address hashes and signature verification.

use core::fmt;

use ed25519_dalek::VerifyingKey as Ed25519VerifyingKey;
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::VerifyingKey as Secp256k1VerifyingKey;

use crate::curve::EllipticalCurve;
use crate::encoding::{base58check_decode_with_prefix, base58check_encode_with_prefix};
use crate::hash::{blake2b_160, watermarked_operation_hash};

const SIGNATURE_LEN: usize = 64;

/// A public key and its signing curve.
///
/// Ed25519 keys are 32 bytes, secp256k1 keys are 33-byte compressed points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    bytes: Vec<u8>,
    curve: EllipticalCurve,
}

impl PublicKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: Vec<u8>, curve: EllipticalCurve) -> Self {
        Self { bytes, curve }
    }

    /// Decode an `edpk` / `sppk` string, inferring the curve from its prefix.
    pub fn from_base58(encoded: &str) -> Option<Self> {
        let curve = EllipticalCurve::from_base58_key(encoded)?;
        let bytes = base58check_decode_with_prefix(encoded, curve.public_key_prefix()).ok()?;
        Some(Self::new(bytes, curve))
    }

    /// Raw key bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Signing curve.
    #[inline]
    pub const fn curve(&self) -> EllipticalCurve {
        self.curve
    }

    /// Base58Check representation (`edpk...` / `sppk...`).
    pub fn to_base58(&self) -> String {
        base58check_encode_with_prefix(&self.bytes, self.curve.public_key_prefix())
    }

    /// The address: `blake2b_160(key)` under the `tz1` / `tz2` prefix.
    pub fn public_key_hash(&self) -> String {
        address_from_key_bytes(&self.bytes, self.curve)
    }

    /// Address of an `edpk` / `sppk` string without building a key.
    pub fn public_key_hash_from_base58(encoded: &str) -> Option<String> {
        Self::from_base58(encoded).map(|key| key.public_key_hash())
    }

    /// Verify `signature` over `message`.
    ///
    /// Only the first 64 bytes of `signature` are used. Short signatures and
    /// malformed keys yield `false`. Secp256k1 verifies a 32-byte digest, so
    /// an empty message is rejected there; Ed25519 accepts any message.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        if signature.len() < SIGNATURE_LEN {
            return false;
        }
        let signature = &signature[..SIGNATURE_LEN];

        match self.curve {
            EllipticalCurve::Ed25519 => {
                let Ok(key_bytes) = <&[u8; 32]>::try_from(self.bytes.as_slice()) else {
                    return false;
                };
                let Ok(key) = Ed25519VerifyingKey::from_bytes(key_bytes) else {
                    return false;
                };
                let Ok(signature) = ed25519_dalek::Signature::from_slice(signature) else {
                    return false;
                };
                key.verify_strict(message, &signature).is_ok()
            }
            EllipticalCurve::Secp256k1 => {
                if message.len() != 32 {
                    return false;
                }
                let Ok(key) = Secp256k1VerifyingKey::from_sec1_bytes(&self.bytes) else {
                    return false;
                };
                let Ok(signature) = k256::ecdsa::Signature::from_slice(signature) else {
                    return false;
                };
                key.verify_prehash(message, &signature).is_ok()
            }
        }
    }

    /// Verify a signature over forged operation bytes (watermark applied).
    pub fn verify_operation(&self, bytes: &[u8], signature: &[u8]) -> bool {
        self.verify(&watermarked_operation_hash(bytes), signature)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

pub(crate) fn address_from_key_bytes(bytes: &[u8], curve: EllipticalCurve) -> String {
    base58check_encode_with_prefix(&blake2b_160(bytes), curve.address_prefix())
}

/// Expand a 33-byte compressed secp256k1 key to its 65-byte uncompressed form.
pub fn secp256k1_public_key_uncompressed(compressed: &[u8]) -> Option<[u8; 65]> {
    if compressed.len() != 33 {
        return None;
    }
    let key = Secp256k1VerifyingKey::from_sec1_bytes(compressed).ok()?;
    let point = key.to_encoded_point(false);
    point.as_bytes().try_into().ok()
}
