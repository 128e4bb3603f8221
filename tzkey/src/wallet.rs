//! Software wallets built on a key pair.
//!
//! [`RegularWallet`] signs with a key pair taken directly from a seed or
//! secret key, on either curve. [`HdWallet`] derives its (Ed25519) key pair
//! along a derivation path and keeps that path.

use core::fmt;

use tracing::warn;

use crate::curve::EllipticalCurve;
use crate::encoding::hex_decode;
use crate::hd::DEFAULT_DERIVATION_PATH;
use crate::keypair::KeyPair;
#[cfg(feature = "rand")]
use crate::mnemonic::{Language, WordCount};
use crate::mnemonic::Mnemonic;

/// How a wallet's key pair was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalletType {
    /// Key pair from the seed directly (non-HD).
    Regular,
    /// Key pair derived along a derivation path.
    Hd,
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regular => f.write_str("regular"),
            Self::Hd => f.write_str("hd"),
        }
    }
}

/// Common wallet capability, independent of how the key pair was produced.
pub trait Wallet {
    /// Which kind of wallet this is.
    fn wallet_type(&self) -> WalletType;

    /// The `tz1` / `tz2` address.
    fn address(&self) -> String;

    /// Position used to order wallets for display and storage.
    fn sort_index(&self) -> usize;

    /// Set the ordering position.
    fn set_sort_index(&mut self, index: usize);

    /// Sign a forged operation given as hex. The operation watermark is applied.
    fn sign(&self, hex: &str) -> Option<Vec<u8>>;

    /// Curve of the signing key.
    fn curve(&self) -> EllipticalCurve;

    /// Base58Check public key, as used when revealing it on chain.
    fn public_key_base58(&self) -> String;
}

/// A non-HD wallet on either curve.
#[derive(Debug, Clone)]
pub struct RegularWallet {
    key_pair: KeyPair,
    mnemonic: Option<Mnemonic>,
    sort_index: usize,
}

impl RegularWallet {
    /// Create a wallet from a mnemonic and passphrase.
    pub fn from_mnemonic(
        mnemonic: Mnemonic,
        passphrase: &str,
        curve: EllipticalCurve,
    ) -> Option<Self> {
        let key_pair = KeyPair::regular_from_mnemonic(&mnemonic, passphrase, curve)?;
        Some(Self {
            key_pair,
            mnemonic: Some(mnemonic),
            sort_index: 0,
        })
    }

    /// Create a wallet with a freshly generated mnemonic.
    #[cfg(feature = "rand")]
    pub fn generate(
        word_count: WordCount,
        language: Language,
        passphrase: &str,
        curve: EllipticalCurve,
    ) -> Option<Self> {
        match Mnemonic::generate(word_count, language) {
            Ok(mnemonic) => Self::from_mnemonic(mnemonic, passphrase, curve),
            Err(error) => {
                warn!(%error, "mnemonic generation failed");
                None
            }
        }
    }

    /// Create a wallet from an `edsk` / `spsk` / `edesk` / `spesk` secret key.
    pub fn from_secret_key(secret_key: &str, passphrase: Option<&str>) -> Option<Self> {
        let key_pair = KeyPair::from_secret_key(secret_key, passphrase)?;
        Some(Self {
            key_pair,
            mnemonic: None,
            sort_index: 0,
        })
    }

    /// The mnemonic, if the wallet was created from one.
    #[inline]
    pub fn mnemonic(&self) -> Option<&Mnemonic> {
        self.mnemonic.as_ref()
    }

    /// The underlying key pair.
    #[inline]
    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }
}

impl Wallet for RegularWallet {
    fn wallet_type(&self) -> WalletType {
        WalletType::Regular
    }

    fn address(&self) -> String {
        self.key_pair.address()
    }

    fn sort_index(&self) -> usize {
        self.sort_index
    }

    fn set_sort_index(&mut self, index: usize) {
        self.sort_index = index;
    }

    fn sign(&self, hex: &str) -> Option<Vec<u8>> {
        sign_forged_hex(&self.key_pair, hex)
    }

    fn curve(&self) -> EllipticalCurve {
        self.key_pair.private_key.curve()
    }

    fn public_key_base58(&self) -> String {
        self.key_pair.public_key.to_base58()
    }
}

/// An HD wallet. Always Ed25519.
#[derive(Debug, Clone)]
pub struct HdWallet {
    key_pair: KeyPair,
    mnemonic: Mnemonic,
    derivation_path: String,
    sort_index: usize,
}

impl HdWallet {
    /// Create a wallet at `path` (default `m/44'/1729'/0'/0'`).
    pub fn from_mnemonic(mnemonic: Mnemonic, passphrase: &str, path: Option<&str>) -> Option<Self> {
        let path = path.unwrap_or(DEFAULT_DERIVATION_PATH);
        let key_pair = KeyPair::hd_from_mnemonic(&mnemonic, passphrase, path)?;
        Some(Self {
            key_pair,
            mnemonic,
            derivation_path: path.to_owned(),
            sort_index: 0,
        })
    }

    /// Create a wallet with a freshly generated mnemonic.
    #[cfg(feature = "rand")]
    pub fn generate(
        word_count: WordCount,
        language: Language,
        passphrase: &str,
        path: Option<&str>,
    ) -> Option<Self> {
        match Mnemonic::generate(word_count, language) {
            Ok(mnemonic) => Self::from_mnemonic(mnemonic, passphrase, path),
            Err(error) => {
                warn!(%error, "mnemonic generation failed");
                None
            }
        }
    }

    /// The mnemonic the wallet was derived from.
    #[inline]
    pub fn mnemonic(&self) -> &Mnemonic {
        &self.mnemonic
    }

    /// The derivation path of this wallet's key pair.
    #[inline]
    pub fn derivation_path(&self) -> &str {
        &self.derivation_path
    }

    /// The underlying key pair.
    #[inline]
    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }
}

impl Wallet for HdWallet {
    fn wallet_type(&self) -> WalletType {
        WalletType::Hd
    }

    fn address(&self) -> String {
        self.key_pair.address()
    }

    fn sort_index(&self) -> usize {
        self.sort_index
    }

    fn set_sort_index(&mut self, index: usize) {
        self.sort_index = index;
    }

    fn sign(&self, hex: &str) -> Option<Vec<u8>> {
        sign_forged_hex(&self.key_pair, hex)
    }

    fn curve(&self) -> EllipticalCurve {
        EllipticalCurve::Ed25519
    }

    fn public_key_base58(&self) -> String {
        self.key_pair.public_key.to_base58()
    }
}

fn sign_forged_hex(key_pair: &KeyPair, hex: &str) -> Option<Vec<u8>> {
    let bytes = hex_decode(hex).ok()?;
    key_pair.private_key.sign_operation(&bytes)
}
