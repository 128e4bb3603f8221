//! Private keys for both signing curves.

use core::fmt;

use crypto_secretbox::aead::{self, Aead, KeyInit};
use crypto_secretbox::XSalsa20Poly1305;
use ed25519_dalek::{Signer, SigningKey};
use hmac::Hmac;
use sha2::Sha512;
use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::Zeroizing;

use crate::curve::EllipticalCurve;
use crate::encoding::{
    base58check_decode_with_prefix, base58check_encode_with_prefix, encode_signature, hex_decode,
};
use crate::hash::watermarked_operation_hash;
use crate::prefix;

/// PBKDF2 rounds for deriving the secret-box key of an encrypted secret key.
const ENCRYPTION_ROUNDS: u32 = 32_768;

/// Salt length at the front of an encrypted secret key payload.
const SALT_LEN: usize = 8;

/// Length of an `edsk` string holding a 32-byte seed rather than a full secret.
const ED25519_SEED_KEY_LEN: usize = 54;

/// A private key and its signing curve.
///
/// Ed25519 keys hold 64 bytes (32-byte seed followed by the public key).
/// Secp256k1 keys hold the 32-byte scalar; a 64-byte buffer whose first 32
/// bytes are the scalar is also accepted.
#[derive(Clone)]
pub struct PrivateKey {
    bytes: Zeroizing<Vec<u8>>,
    curve: EllipticalCurve,
}

impl PrivateKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: Vec<u8>, curve: EllipticalCurve) -> Self {
        Self {
            bytes: Zeroizing::new(bytes),
            curve,
        }
    }

    /// Decode an `edsk` / `spsk` Base58Check string.
    ///
    /// A 54-character `edsk` carries only the seed; the full 64-byte secret is
    /// rebuilt from it.
    pub fn from_base58(encoded: &str, curve: EllipticalCurve) -> Option<Self> {
        match curve {
            EllipticalCurve::Ed25519 => {
                let prefix = if encoded.len() == ED25519_SEED_KEY_LEN {
                    prefix::Ed25519::SEED
                } else {
                    prefix::Ed25519::SECRET
                };
                let decoded = Zeroizing::new(base58check_decode_with_prefix(encoded, prefix).ok()?);
                let seed: &[u8; 32] = decoded.get(..32)?.try_into().ok()?;
                Some(Self::ed25519_from_seed(seed))
            }
            EllipticalCurve::Secp256k1 => {
                let decoded = base58check_decode_with_prefix(encoded, prefix::Secp256k1::SECRET).ok()?;
                Some(Self::new(decoded, EllipticalCurve::Secp256k1))
            }
        }
    }

    /// Build the 64-byte Ed25519 secret (`seed || public key`) from a seed.
    pub fn ed25519_from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        let keypair = Zeroizing::new(signing_key.to_keypair_bytes());
        Self::new(keypair.to_vec(), EllipticalCurve::Ed25519)
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

    /// The 32-byte secret: the Ed25519 seed or the secp256k1 scalar.
    ///
    /// Returns `None` unless the key holds 32 or 64 bytes.
    pub fn scalar(&self) -> Option<&[u8]> {
        match self.bytes.len() {
            32 | 64 => Some(&self.bytes[..32]),
            _ => None,
        }
    }

    /// Base58Check representation (`edsk...` / `spsk...`).
    pub fn to_base58(&self) -> String {
        match self.curve {
            EllipticalCurve::Ed25519 => {
                base58check_encode_with_prefix(&self.bytes, prefix::Ed25519::SECRET)
            }
            EllipticalCurve::Secp256k1 => {
                let scalar = self.scalar().unwrap_or(&self.bytes);
                base58check_encode_with_prefix(scalar, prefix::Secp256k1::SECRET)
            }
        }
    }

    /// Sign `message`.
    ///
    /// Ed25519 signs the message as is. Secp256k1 signs a 32-byte digest
    /// (RFC 6979 nonce, low-S, compact `r || s`); other lengths yield `None`.
    pub fn sign(&self, message: &[u8]) -> Option<Vec<u8>> {
        let scalar = self.scalar()?;

        match self.curve {
            EllipticalCurve::Ed25519 => {
                let seed: &[u8; 32] = scalar.try_into().ok()?;
                let signing_key = SigningKey::from_bytes(seed);
                Some(signing_key.sign(message).to_bytes().to_vec())
            }
            EllipticalCurve::Secp256k1 => {
                if message.len() != 32 {
                    debug!(len = message.len(), "secp256k1 signing requires a 32-byte digest");
                    return None;
                }
                let signing_key = k256::ecdsa::SigningKey::from_slice(scalar).ok()?;
                let (signature, _) = signing_key.sign_prehash_recoverable(message).ok()?;
                Some(signature.to_bytes().to_vec())
            }
        }
    }

    /// Decode `hex` and sign the bytes.
    pub fn sign_hex(&self, hex: &str) -> Option<Vec<u8>> {
        let bytes = hex_decode(hex).ok()?;
        self.sign(&bytes)
    }

    /// Sign forged operation bytes: `blake2b_256(0x03 || bytes)`.
    pub fn sign_operation(&self, bytes: &[u8]) -> Option<Vec<u8>> {
        self.sign(&watermarked_operation_hash(bytes))
    }

    /// Sign forged operation bytes and return the `edsig` / `spsig` string.
    pub fn sign_operation_base58(&self, bytes: &[u8]) -> Option<String> {
        let signature = self.sign_operation(bytes)?;
        Some(encode_signature(&signature, self.curve))
    }

    /// Encrypt the secret under `passphrase` as an `edesk...` / `spesk...` string.
    #[cfg(feature = "rand")]
    pub fn encrypt(&self, passphrase: &str) -> Option<String> {
        let mut salt = [0u8; SALT_LEN];
        if let Err(error) = getrandom::fill(&mut salt) {
            debug!(%error, "entropy source failed");
            return None;
        }
        self.encrypt_with_salt(passphrase, &salt)
    }

    /// Encrypt with a caller-supplied salt.
    pub fn encrypt_with_salt(&self, passphrase: &str, salt: &[u8; SALT_LEN]) -> Option<String> {
        let cipher = secretbox(passphrase, salt)?;
        let ciphertext = cipher.encrypt(&zero_nonce(), self.scalar()?).ok()?;

        let mut payload = Vec::with_capacity(SALT_LEN + ciphertext.len());
        payload.extend_from_slice(salt);
        payload.extend_from_slice(&ciphertext);
        Some(base58check_encode_with_prefix(&payload, self.curve.encrypted_prefix()))
    }
}

/// Open an `edesk` / `spesk` string, returning the raw 32-byte secret.
///
/// Wrong passphrases, corrupted payloads and wrong prefixes all yield `None`.
pub fn decrypt_secret(
    encrypted: &str,
    curve: EllipticalCurve,
    passphrase: &str,
) -> Option<Zeroizing<Vec<u8>>> {
    let payload = match base58check_decode_with_prefix(encrypted, curve.encrypted_prefix()) {
        Ok(payload) => payload,
        Err(error) => {
            debug!(%error, %curve, "encrypted secret key did not decode");
            return None;
        }
    };

    if payload.len() <= SALT_LEN {
        debug!(len = payload.len(), "encrypted secret key too short");
        return None;
    }
    let (salt, ciphertext) = payload.split_at(SALT_LEN);

    let cipher = secretbox(passphrase, salt)?;
    match cipher.decrypt(&zero_nonce(), ciphertext) {
        Ok(secret) => Some(Zeroizing::new(secret)),
        Err(_) => {
            debug!(%curve, "secret box did not open");
            None
        }
    }
}

/// True if `secret_key` starts with `edes` or `spes`.
pub fn is_secret_key_encrypted(secret_key: &str) -> bool {
    matches!(secret_key.get(..4), Some("edes" | "spes"))
}

fn secretbox(passphrase: &str, salt: &[u8]) -> Option<XSalsa20Poly1305> {
    let mut key = Zeroizing::new([0u8; 32]);
    pbkdf2::pbkdf2::<Hmac<Sha512>>(passphrase.as_bytes(), salt, ENCRYPTION_ROUNDS, &mut key[..])
        .ok()?;
    XSalsa20Poly1305::new_from_slice(&key[..]).ok()
}

fn zero_nonce() -> aead::Nonce<XSalsa20Poly1305> {
    aead::Nonce::<XSalsa20Poly1305>::default()
}

impl ConstantTimeEq for PrivateKey {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.bytes.as_slice().ct_eq(other.bytes.as_slice())
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && bool::from(self.ct_eq(other))
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey({}, [REDACTED])", self.curve)
    }
}
