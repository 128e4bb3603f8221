//! Supported signing curves.

use core::fmt;
use core::str::FromStr;

use crate::error::Error;
use crate::prefix;

/// Signing curve of a key pair: Ed25519 (`tz1...`) or secp256k1 (`tz2...`).
///
/// Every operation matches exhaustively on this enum. Adding a curve is a
/// breaking change that must touch every `match` in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EllipticalCurve {
    /// Ed25519, `tz1` addresses.
    #[default]
    Ed25519,
    /// secp256k1, `tz2` addresses.
    Secp256k1,
}

impl EllipticalCurve {
    /// Infer the curve from a `tz1` / `tz2` address (case-insensitive).
    pub fn from_address(address: &str) -> Option<Self> {
        let tag = address.get(..3)?.to_ascii_lowercase();
        match tag.as_str() {
            "tz1" => Some(Self::Ed25519),
            "tz2" => Some(Self::Secp256k1),
            _ => None,
        }
    }

    /// Infer the curve from an `edpk` / `sppk` public key (case-insensitive).
    pub fn from_base58_key(key: &str) -> Option<Self> {
        let tag = key.get(..4)?.to_ascii_lowercase();
        match tag.as_str() {
            "edpk" => Some(Self::Ed25519),
            "sppk" => Some(Self::Secp256k1),
            _ => None,
        }
    }

    /// Canonical lower-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ed25519 => "ed25519",
            Self::Secp256k1 => "secp256k1",
        }
    }

    /// Public key prefix (`edpk` / `sppk`).
    pub const fn public_key_prefix(self) -> &'static [u8] {
        match self {
            Self::Ed25519 => prefix::Ed25519::PUBLIC,
            Self::Secp256k1 => prefix::Secp256k1::PUBLIC,
        }
    }

    /// Secret key prefix (`edsk` / `spsk`).
    pub const fn secret_key_prefix(self) -> &'static [u8] {
        match self {
            Self::Ed25519 => prefix::Ed25519::SECRET,
            Self::Secp256k1 => prefix::Secp256k1::SECRET,
        }
    }

    /// Encrypted secret key prefix (`edesk` / `spesk`).
    pub const fn encrypted_prefix(self) -> &'static [u8] {
        match self {
            Self::Ed25519 => prefix::Ed25519::ENCRYPTED,
            Self::Secp256k1 => prefix::Secp256k1::ENCRYPTED,
        }
    }

    /// Signature prefix (`edsig` / `spsig`).
    pub const fn signature_prefix(self) -> &'static [u8] {
        match self {
            Self::Ed25519 => prefix::Ed25519::SIGNATURE,
            Self::Secp256k1 => prefix::Secp256k1::SIGNATURE,
        }
    }

    /// Address prefix (`tz1` / `tz2`).
    pub const fn address_prefix(self) -> &'static [u8] {
        match self {
            Self::Ed25519 => prefix::Address::TZ1,
            Self::Secp256k1 => prefix::Address::TZ2,
        }
    }
}

impl fmt::Display for EllipticalCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EllipticalCurve {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ed25519" | "tz1" => Ok(Self::Ed25519),
            "secp256k1" | "tz2" => Ok(Self::Secp256k1),
            _ => Err(Error::InvalidPrefix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_address() {
        assert_eq!(EllipticalCurve::from_address("TZ1abc123"), Some(EllipticalCurve::Ed25519));
        assert_eq!(EllipticalCurve::from_address("TZ2abc123"), Some(EllipticalCurve::Secp256k1));
        assert_eq!(EllipticalCurve::from_address("tz1abc123"), Some(EllipticalCurve::Ed25519));
        assert_eq!(EllipticalCurve::from_address("tz2abc123"), Some(EllipticalCurve::Secp256k1));
        assert_eq!(EllipticalCurve::from_address("tZ1abc123"), Some(EllipticalCurve::Ed25519));
        assert_eq!(EllipticalCurve::from_address("tZ2abc123"), Some(EllipticalCurve::Secp256k1));

        assert_eq!(EllipticalCurve::from_address("tz3abc123"), None);
        assert_eq!(EllipticalCurve::from_address("tz4abc123"), None);
        assert_eq!(EllipticalCurve::from_address("kt1abc123"), None);
        assert_eq!(EllipticalCurve::from_address("tz"), None);
    }

    #[test]
    fn test_from_base58_key() {
        assert_eq!(
            EllipticalCurve::from_base58_key("edpkvCbYCa6d6g9hEcK6tvwgsY9jfB4HDzp3jZSBwfuWNSvxE5T5KR"),
            Some(EllipticalCurve::Ed25519)
        );
        assert_eq!(
            EllipticalCurve::from_base58_key("sppk7bXQFZLFWSLusY6gzH9NfbFWT6c61d5vb5zxNZycThMk1qMtPwk"),
            Some(EllipticalCurve::Secp256k1)
        );
        assert_eq!(EllipticalCurve::from_base58_key("p2pk66"), None);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("ed25519".parse::<EllipticalCurve>().unwrap(), EllipticalCurve::Ed25519);
        assert_eq!("Secp256k1".parse::<EllipticalCurve>().unwrap(), EllipticalCurve::Secp256k1);
        assert_eq!(EllipticalCurve::Secp256k1.to_string(), "secp256k1");
        assert!("p256".parse::<EllipticalCurve>().is_err());
    }
}
