//! # tzkey - Tezos Key Management
//!
//! Mnemonics, hierarchical derivation and dual-curve key pairs for Tezos
//! wallets.
//!
//! ## Features
//!
//! - **BIP-39 mnemonics**: generation, validation, seed derivation, and the
//!   checksum-shift encoding of legacy secp256k1 keys
//! - **HD derivation**: hardened-only Ed25519 paths under `m/44'/1729'`
//! - **Two curves**: Ed25519 (`tz1`) and secp256k1 (`tz2`) behind one enum
//! - **Encrypted keys**: `edesk` / `spesk` secret keys
//! - **Secret hygiene**: zeroized buffers and constant-time key comparison
//!
//! ## Example
//!
//! ```
//! use tzkey::{EllipticalCurve, KeyPair, Mnemonic, DEFAULT_DERIVATION_PATH};
//!
//! let mnemonic = Mnemonic::new(
//!     "remember smile trip tumble era cube worry fuel bracket eight kitten inform",
//! )?;
//!
//! let regular = KeyPair::regular_from_mnemonic(&mnemonic, "", EllipticalCurve::Ed25519)
//!     .expect("valid mnemonic");
//! assert_eq!(regular.address(), "tz1T3QZ5w4K11RS3vy4TXiZepraV9R5GzsxG");
//!
//! let hd = KeyPair::hd_from_mnemonic(&mnemonic, "", DEFAULT_DERIVATION_PATH)
//!     .expect("valid path");
//! assert_eq!(hd.address(), "tz1bQnUB6wv77AAnvvkX5rXwzKHis6RxVnyF");
//! # Ok::<(), tzkey::Error>(())
//! ```

#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::return_self_not_must_use,
    clippy::cast_possible_truncation,
    clippy::similar_names,
    clippy::too_many_lines,
    clippy::option_if_let_else,
    clippy::needless_pass_by_value,
    clippy::unreadable_literal,
    clippy::missing_fields_in_debug
)]
#![forbid(unsafe_code)]

pub mod curve;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod hd;
pub mod keypair;
pub mod mnemonic;
pub mod prefix;
pub mod private_key;
pub mod public_key;
pub mod wallet;

pub use curve::EllipticalCurve;
pub use error::{Error, Result};
pub use hd::{DEFAULT_DERIVATION_PATH, Node};
pub use keypair::KeyPair;
pub use mnemonic::{is_valid_secp256k1_secret_key, Language, Mnemonic, WordCount};
pub use private_key::{is_secret_key_encrypted, PrivateKey};
pub use public_key::{secp256k1_public_key_uncompressed, PublicKey};
pub use wallet::{HdWallet, RegularWallet, Wallet, WalletType};
