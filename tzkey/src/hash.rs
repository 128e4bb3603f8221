//! Hash functions used for checksums, addresses and operation signing.

use blake2::digest::consts::{U20, U32};
use blake2::{Blake2b, Digest};
use sha2::Sha256;

use crate::prefix::Watermark;

type Blake2b20 = Blake2b<U20>;
type Blake2b32 = Blake2b<U32>;

/// Compute SHA-256 hash
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute double SHA-256 hash (Base58Check checksums)
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Compute the 20-byte BLAKE2b generic hash (public key hashes)
#[inline]
pub fn blake2b_160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Blake2b20::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the 32-byte BLAKE2b generic hash
#[inline]
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b32::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Prefix forged operation bytes with the operation watermark and hash them.
///
/// Operations are never signed directly; signatures are produced over
/// `blake2b_256(0x03 || bytes)`.
pub fn watermarked_operation_hash(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b32::new();
    hasher.update(Watermark::OPERATION);
    hasher.update(bytes);
    hasher.finalize().into()
}
