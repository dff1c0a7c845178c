//! Block ciphers and modes of operation
//!
//! The [`BlockCipher`] trait is the single-block collaborator contract the
//! mode workers are built on: a deterministic in-place transform of one
//! block in each direction, with all evolving state (chaining values,
//! counters, accumulators) owned by the mode worker, never the cipher.

pub mod aes;
pub mod blowfish;
pub mod modes;

// Re-exports
pub use aes::{Aes128, Aes192, Aes256};
pub use blowfish::Blowfish;
pub use modes::{Cbc, Cfb, CfbSegment, Ctr, Ecb, Ofb, Pcbc};

use crate::error::Result;
use rand::{CryptoRng, RngCore};

/// Marker trait describing a block cipher's fixed parameters
pub trait CipherAlgorithm {
    /// Key length in bytes (the canonical length for variable-key ciphers)
    const KEY_SIZE: usize;

    /// Block length in bytes
    const BLOCK_SIZE: usize;

    /// Human-readable algorithm name
    fn name() -> &'static str;

    /// Block length in bytes
    fn block_size() -> usize {
        Self::BLOCK_SIZE
    }

    /// Key length in bytes
    fn key_size() -> usize {
        Self::KEY_SIZE
    }
}

/// Single-block cipher transform
///
/// Implementations must be deterministic: the same input block always
/// maps to the same output block for the lifetime of the value. The
/// borrowed key schedule is read-only, so one cipher instance can back
/// any number of concurrently running mode workers.
pub trait BlockCipher: CipherAlgorithm {
    /// Key material type accepted by [`new`](Self::new)
    type Key;

    /// Build the key schedule
    fn new(key: &Self::Key) -> Self;

    /// Encrypt one block in place; fails if `block` is not exactly
    /// [`CipherAlgorithm::BLOCK_SIZE`] bytes
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt one block in place; same length contract as
    /// [`encrypt_block`](Self::encrypt_block)
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Generate a random key of the canonical length
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;
}
