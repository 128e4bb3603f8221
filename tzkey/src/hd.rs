//! Hardened-only hierarchical derivation for Ed25519.
//!
//! Ed25519 has no public-key point addition, so every level is hardened and
//! derived from the parent's private key and chain code. Paths are fixed to
//! purpose 44 and coin type 1729.

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroizing;

use crate::error::{Error, Result};

type HmacSha512 = Hmac<Sha512>;

/// HMAC key used to derive the root node.
const ED25519_DOMAIN: &[u8] = b"ed25519 seed";

/// Offset added to every (hardened) path level.
const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Required path prefix after normalisation.
const PATH_PREFIX: &str = "44h/1729h/";

/// Root seed length in bytes.
const SEED_LEN: usize = 64;

/// Default derivation path for HD wallets.
pub const DEFAULT_DERIVATION_PATH: &str = "m/44'/1729'/0'/0'";

/// A derivation node: 32-byte private key and 32-byte chain code.
pub struct Node {
    /// Private key of this level; the Ed25519 seed at the final level.
    pub private_key: Zeroizing<[u8; 32]>,
    /// Chain code keying the next derivation step.
    pub chain_code: Zeroizing<[u8; 32]>,
}

impl core::fmt::Debug for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Node([REDACTED])")
    }
}

/// Split `HMAC-SHA512(key, message)` into a private key and chain code.
pub fn derive_node(message: &[u8], key: &[u8]) -> Result<Node> {
    let mut mac = HmacSha512::new_from_slice(key).map_err(|_| Error::InvalidHmac)?;
    mac.update(message);
    let output = Zeroizing::new(mac.finalize().into_bytes());

    if output.len() < 64 {
        return Err(Error::InvalidHmac);
    }

    let mut private_key = Zeroizing::new([0u8; 32]);
    let mut chain_code = Zeroizing::new([0u8; 32]);
    private_key.copy_from_slice(&output[..32]);
    chain_code.copy_from_slice(&output[32..64]);

    Ok(Node {
        private_key,
        chain_code,
    })
}

/// Derive the root node from a 64-byte seed.
///
/// # Errors
///
/// Returns [`Error::InvalidSeedSize`] unless the seed is exactly 64 bytes.
pub fn derive_root_node(seed: &[u8]) -> Result<Node> {
    if seed.len() != SEED_LEN {
        return Err(Error::InvalidSeedSize(seed.len()));
    }
    derive_node(seed, ED25519_DOMAIN)
}

/// Derive a hardened child. `index` already includes the hardened offset.
pub fn derive_child_node(node: &Node, index: u32) -> Result<Node> {
    // 0x00 || private key || index
    let mut message = Zeroizing::new([0u8; 37]);
    message[1..33].copy_from_slice(&*node.private_key);
    message[33..].copy_from_slice(&index.to_be_bytes());

    derive_node(&*message, &*node.chain_code)
}

/// Normalise a path: strip the leading `m/` and write `'` as `h`.
fn normalize_path(path: &str) -> String {
    let path = path.strip_prefix("m/").unwrap_or(path);
    path.replace('\'', "h")
}

/// Check that a path starts with `44'/1729'/` (or `44h/1729h/`) and has
/// at least one further level.
pub fn validate_derivation_path(path: &str) -> bool {
    let path = normalize_path(path);
    path.strip_prefix(PATH_PREFIX)
        .is_some_and(|rest| !rest.is_empty())
}

/// Parse a derivation path into hardened indices.
///
/// Both `m/44'/1729'/0'/0'` and `44h/1729h/0h/0h` are accepted. Each level
/// must be hardened.
///
/// # Errors
///
/// - [`Error::InvalidDerivationPath`] if the prefix is wrong or a level is
///   malformed.
/// - [`Error::DerivationPathTooLarge`] if a level is `>= 2^31`.
pub fn convert_derivation_path_to_array(path: &str) -> Result<Vec<u32>> {
    if !validate_derivation_path(path) {
        return Err(Error::InvalidDerivationPath);
    }

    normalize_path(path).split('/').map(parse_level).collect()
}

fn parse_level(component: &str) -> Result<u32> {
    let digits = component
        .strip_suffix('h')
        .ok_or(Error::InvalidDerivationPath)?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidDerivationPath);
    }

    // Only overflow remains as a parse failure once the digits are checked.
    let level: u64 = digits.parse().map_err(|_| Error::DerivationPathTooLarge)?;
    if level >= u64::from(HARDENED_OFFSET) {
        return Err(Error::DerivationPathTooLarge);
    }

    Ok(level as u32 + HARDENED_OFFSET)
}

/// Derive the node at `path` from a 64-byte seed.
pub fn seed_to_node(seed: &[u8], path: &str) -> Result<Node> {
    let indices = convert_derivation_path_to_array(path)?;
    let root = derive_root_node(seed)?;

    indices
        .into_iter()
        .try_fold(root, |node, index| derive_child_node(&node, index))
}
