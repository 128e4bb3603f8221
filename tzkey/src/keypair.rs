//! Key pair construction: regular, HD, and from (encrypted) secret keys.
//!
//! Constructors that depend on a curve primitive return `Option`; the cause of
//! a `None` is logged through `tracing` and never includes secret material.

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::curve::EllipticalCurve;
use crate::encoding::hex_decode;
use crate::hd::seed_to_node;
use crate::mnemonic::Mnemonic;
use crate::private_key::{decrypt_secret, PrivateKey};
use crate::public_key::PublicKey;

/// Hex characters of seed used for regular key pairs.
const REGULAR_SEED_HEX_LEN: usize = 64;

/// A private key with its matching public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    /// Private half.
    pub private_key: PrivateKey,
    /// Public half.
    pub public_key: PublicKey,
}

impl KeyPair {
    /// Build a regular (non-HD) key pair from the first 32 bytes of `seed`.
    ///
    /// Ed25519 uses them as the key seed, secp256k1 as the raw scalar.
    pub fn regular(seed: &[u8], curve: EllipticalCurve) -> Option<Self> {
        let Some(seed) = seed.get(..32).and_then(|s| <&[u8; 32]>::try_from(s).ok()) else {
            debug!(len = seed.len(), "regular key pair needs at least 32 seed bytes");
            return None;
        };

        match curve {
            EllipticalCurve::Ed25519 => Some(Self::ed25519_from_seed(seed)),
            EllipticalCurve::Secp256k1 => Self::secp256k1_from_scalar(seed),
        }
    }

    /// Build a regular key pair from a hex seed, truncated to 64 hex characters.
    pub fn regular_from_seed_hex(seed_hex: &str, curve: EllipticalCurve) -> Option<Self> {
        let truncated = seed_hex.get(..REGULAR_SEED_HEX_LEN).unwrap_or(seed_hex);
        let seed = match hex_decode(truncated) {
            Ok(seed) => Zeroizing::new(seed),
            Err(error) => {
                debug!(%error, "seed is not valid hex");
                return None;
            }
        };
        Self::regular(&seed, curve)
    }

    /// Build a regular key pair from a mnemonic and passphrase.
    pub fn regular_from_mnemonic(
        mnemonic: &Mnemonic,
        passphrase: &str,
        curve: EllipticalCurve,
    ) -> Option<Self> {
        match mnemonic.seed(passphrase) {
            Ok(seed) => Self::regular(&seed[..], curve),
            Err(error) => {
                warn!(%error, "regular key pair: seed derivation failed");
                None
            }
        }
    }

    /// Build an HD key pair (always Ed25519) from a 64-byte seed.
    pub fn hd(seed: &[u8], path: &str) -> Option<Self> {
        match seed_to_node(seed, path) {
            Ok(node) => Some(Self::ed25519_from_seed(&node.private_key)),
            Err(error) => {
                warn!(%error, path, "hd key pair derivation failed");
                None
            }
        }
    }

    /// Build an HD key pair from a mnemonic, passphrase and derivation path.
    pub fn hd_from_mnemonic(mnemonic: &Mnemonic, passphrase: &str, path: &str) -> Option<Self> {
        match mnemonic.seed(passphrase) {
            Ok(seed) => Self::hd(&seed[..], path),
            Err(error) => {
                warn!(%error, "hd key pair: seed derivation failed");
                None
            }
        }
    }

    /// Build a key pair from a Base58Check secret key.
    ///
    /// `edsk` and `spsk` are used directly. `edes` and `spes` are encrypted
    /// and need `passphrase`. Anything else yields `None`.
    pub fn from_secret_key(secret_key: &str, passphrase: Option<&str>) -> Option<Self> {
        match secret_key.get(..4)? {
            "edsk" => {
                let private_key = PrivateKey::from_base58(secret_key, EllipticalCurve::Ed25519)?;
                let seed = <&[u8; 32]>::try_from(private_key.scalar()?).ok()?;
                Some(Self::ed25519_from_seed(seed))
            }
            "spsk" => {
                let private_key = PrivateKey::from_base58(secret_key, EllipticalCurve::Secp256k1)?;
                let public_key = Self::secp256k1_public_key(private_key.bytes())?;
                Some(Self {
                    private_key,
                    public_key,
                })
            }
            "edes" => Self::decrypt_secret_key(secret_key, EllipticalCurve::Ed25519, passphrase?),
            "spes" => Self::decrypt_secret_key(secret_key, EllipticalCurve::Secp256k1, passphrase?),
            _ => {
                debug!("unrecognised secret key prefix");
                None
            }
        }
    }

    /// Decrypt an `edesk` / `spesk` secret key and build its key pair.
    pub fn decrypt_secret_key(
        secret_key: &str,
        curve: EllipticalCurve,
        passphrase: &str,
    ) -> Option<Self> {
        let secret = decrypt_secret(secret_key, curve, passphrase)?;

        match curve {
            EllipticalCurve::Ed25519 => {
                let seed = <&[u8; 32]>::try_from(secret.as_slice()).ok()?;
                Some(Self::ed25519_from_seed(seed))
            }
            EllipticalCurve::Secp256k1 => {
                let private_key = PrivateKey::new(secret.to_vec(), EllipticalCurve::Secp256k1);
                let public_key = Self::secp256k1_public_key(private_key.bytes())?;
                Some(Self {
                    private_key,
                    public_key,
                })
            }
        }
    }

    /// Compressed secp256k1 public key (33 bytes) of a 32-byte scalar.
    ///
    /// Returns `None` for any other length or an invalid scalar (zero or not
    /// below the curve order).
    pub fn secp256k1_public_key(scalar: &[u8]) -> Option<PublicKey> {
        if scalar.len() != 32 {
            return None;
        }
        let signing_key = k256::ecdsa::SigningKey::from_slice(scalar).ok()?;
        let point = signing_key.verifying_key().to_encoded_point(true);
        Some(PublicKey::new(point.as_bytes().to_vec(), EllipticalCurve::Secp256k1))
    }

    /// The address (`tz1...` / `tz2...`) of this pair.
    #[inline]
    pub fn address(&self) -> String {
        self.public_key.public_key_hash()
    }

    fn ed25519_from_seed(seed: &[u8; 32]) -> Self {
        let private_key = PrivateKey::ed25519_from_seed(seed);
        let public_key = PublicKey::new(
            private_key.bytes()[32..].to_vec(),
            EllipticalCurve::Ed25519,
        );
        Self {
            private_key,
            public_key,
        }
    }

    fn secp256k1_from_scalar(scalar: &[u8; 32]) -> Option<Self> {
        let public_key = Self::secp256k1_public_key(scalar)?;
        Some(Self {
            private_key: PrivateKey::new(scalar.to_vec(), EllipticalCurve::Secp256k1),
            public_key,
        })
    }
}
