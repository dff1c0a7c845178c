//! HMAC (RFC 2104 / FIPS 198-1)
//!
//! Generic over any [`HashFunction`]. The derived key K' is selected
//! byte-wise with a mask so the choice between "key as is" and "hashed
//! key" does not branch on key length, and the pad blocks live in
//! zeroizing buffers.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::hash::HashFunction;
use crypta_common::security::SecretBuffer;

// SHA-512 has the largest block among the supported hash functions
const MAX_BLOCK: usize = 128;

const IPAD_BYTE: u8 = 0x36;
const OPAD_BYTE: u8 = 0x5c;

/// HMAC state over a hash function `H`
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Hmac<H: HashFunction + Clone> {
    #[zeroize(skip)] // hash state holds no key material of its own
    hash: H,
    opad: SecretBuffer<MAX_BLOCK>,
    block_size: usize,
    is_finalized: bool,
}

impl<H> Hmac<H>
where
    H: HashFunction + Clone,
    H::Output: AsRef<[u8]> + Clone,
{
    /// Create a new HMAC instance from `key`
    pub fn new(key: &[u8]) -> Result<Self> {
        let block_size = H::block_size();
        debug_assert!(block_size <= MAX_BLOCK);

        // Hash the key unconditionally so timing depends only on the
        // public key length, then mask-select between the raw and hashed
        // forms.
        let mut key_hasher = H::new();
        key_hasher.update(key)?;
        let hashed = key_hasher.finalize()?;

        let long = (key.len() > block_size) as u8;
        let mask = long.wrapping_neg();
        let mut k_prime = SecretBuffer::<MAX_BLOCK>::zeroed();
        for i in 0..block_size {
            let raw = key.get(i).copied().unwrap_or(0);
            let digest = hashed.as_ref().get(i).copied().unwrap_or(0);
            k_prime.as_mut()[i] = (digest & mask) | (raw & !mask);
        }

        let mut ipad = SecretBuffer::<MAX_BLOCK>::zeroed();
        let mut opad = SecretBuffer::<MAX_BLOCK>::zeroed();
        for i in 0..block_size {
            ipad.as_mut()[i] = k_prime.as_ref()[i] ^ IPAD_BYTE;
            opad.as_mut()[i] = k_prime.as_ref()[i] ^ OPAD_BYTE;
        }

        let mut hash = H::new();
        hash.update(&ipad.as_ref()[..block_size])?;

        Ok(Self {
            hash,
            opad,
            block_size,
            is_finalized: false,
        })
    }

    /// Feed additional `data` into the MAC
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.is_finalized {
            return Err(Error::param("hmac_state", "cannot update after finalization"));
        }
        self.hash.update(data).map(|_| ())
    }

    /// Finalize and return the full-length tag
    pub fn finalize(&mut self) -> Result<Vec<u8>> {
        if self.is_finalized {
            return Err(Error::param("hmac_state", "HMAC already finalized"));
        }
        self.is_finalized = true;

        let inner_hash = self.hash.finalize()?;

        let mut outer = H::new();
        outer.update(&self.opad.as_ref()[..self.block_size])?;
        outer.update(inner_hash.as_ref())?;

        outer.finalize().map(|out| out.as_ref().to_vec())
    }

    /// One-shot MAC helper
    pub fn mac(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let mut hmac = Self::new(key)?;
        hmac.update(data)?;
        hmac.finalize()
    }

    /// Constant-time verification of `tag` against `key` / `data`
    ///
    /// The comparison always walks the full digest length; a short or
    /// long caller-supplied tag folds into the verdict without changing
    /// the amount of work done.
    pub fn verify(key: &[u8], data: &[u8], tag: &[u8]) -> Result<bool> {
        let expected = Self::mac(key, data)?;

        let mut diff = 0u8;
        for i in 0..H::output_size() {
            let a = expected.get(i).copied().unwrap_or(0);
            let b = tag.get(i).copied().unwrap_or(0);
            diff |= a ^ b;
        }
        diff |= (tag.len() ^ H::output_size()) as u8;

        Ok(diff.ct_eq(&0u8).unwrap_u8() == 1)
    }

    /// Constant-time verification of a truncated tag of `len` bytes
    pub fn verify_truncated(key: &[u8], data: &[u8], tag: &[u8], len: usize) -> Result<bool> {
        if len == 0 || len > H::output_size() {
            return Err(Error::param("tag_length", "invalid truncated tag length"));
        }
        let expected = Self::mac(key, data)?;

        let mut diff = 0u8;
        for i in 0..len {
            let a = expected.get(i).copied().unwrap_or(0);
            let b = tag.get(i).copied().unwrap_or(0);
            diff |= a ^ b;
        }
        diff |= (tag.len() ^ len) as u8;

        Ok(diff.ct_eq(&0u8).unwrap_u8() == 1)
    }
}
