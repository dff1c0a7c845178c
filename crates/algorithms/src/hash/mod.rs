//! Cryptographic hash functions and checksums
//!
//! This module provides the streaming [`HashFunction`] trait, its
//! implementations (MD5, SHA-1, and the SHA-2 family), and the CRC
//! checksums. MD5 and SHA-1 remain available for interoperability with
//! legacy formats (HMAC-MD5, PBKDF1); do not use them where collision
//! resistance matters.

pub mod crc;
pub mod md5;
pub mod sha1;
pub mod sha2;

pub use crc::{Crc16, Crc32, Crc32c};
pub use md5::Md5;
pub use sha1::Sha1;
pub use sha2::{Sha224, Sha256, Sha384, Sha512};

use crate::error::Result;

/// Marker trait describing a hash algorithm's fixed parameters
pub trait HashAlgorithm {
    /// Digest length in bytes
    const OUTPUT_SIZE: usize;

    /// Compression function block length in bytes
    const BLOCK_SIZE: usize;

    /// Static algorithm identifier
    const ALGORITHM_ID: &'static str;
}

/// Streaming hash function interface
///
/// A value is created with [`new`](Self::new), fed with
/// [`update`](Self::update) any number of times, and consumed by
/// [`finalize`](Self::finalize). `update` returns `&mut Self` so calls
/// chain.
pub trait HashFunction: Clone {
    /// The algorithm this function implements
    type Algorithm: HashAlgorithm;

    /// Digest type produced at finalization
    type Output: AsRef<[u8]> + Clone;

    /// Create a fresh hash state
    fn new() -> Self;

    /// Absorb `data` into the state
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Produce the digest and reset the state to fresh
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Digest length in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Compression block length in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Algorithm name
    fn name() -> &'static str {
        Self::Algorithm::ALGORITHM_ID
    }

    /// One-shot convenience digest
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }
}
