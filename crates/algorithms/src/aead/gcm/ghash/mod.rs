//! GHASH, the GF(2^128) polynomial accumulator used by GCM
//!
//! The accumulator folds 16-byte blocks into a running state via
//! `state = (state XOR block) * H`, where multiplication is in GF(2^128)
//! with the polynomial x^128 + x^7 + x^2 + x + 1 (NIST SP 800-38D bit
//! ordering). The multiply is branch-free: both reduction and conditional
//! accumulation are mask arithmetic.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crypta_internal::endian::u64_to_be_bytes;

const BLOCK_SIZE: usize = 16;

// x^128 + x^7 + x^2 + x + 1 in the reflected representation
const REDUCTION: u128 = 0xe1 << 120;

/// Running GHASH accumulator keyed by the hash subkey `H = E(K, 0^128)`
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct GHash {
    h: [u8; BLOCK_SIZE],
    state: [u8; BLOCK_SIZE],
}

impl GHash {
    /// Create an accumulator over the hash subkey `h`
    pub fn new(h: &[u8; BLOCK_SIZE]) -> Self {
        Self {
            h: *h,
            state: [0u8; BLOCK_SIZE],
        }
    }

    /// Multiply two field elements
    pub fn gf_multiply(x: &[u8; BLOCK_SIZE], y: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let x = u128::from_be_bytes(*x);
        let mut v = u128::from_be_bytes(*y);
        let mut z: u128 = 0;

        for i in 0..128 {
            // accumulate V when bit i (MSB first) of x is set
            let x_mask = ((x >> (127 - i)) & 1).wrapping_neg();
            z ^= v & x_mask;
            // shift V down, folding the reduction in when a bit falls off
            let v_mask = (v & 1).wrapping_neg();
            v = (v >> 1) ^ (REDUCTION & v_mask);
        }

        z.to_be_bytes()
    }

    /// Fold `data[..len]` into the accumulator, zero-padding a trailing
    /// partial block
    ///
    /// One logical segment (the whole AAD, or the whole ciphertext) may
    /// span several calls, but only the last call of a segment may carry
    /// a partial block.
    pub fn update_block(&mut self, data: &[u8], len: usize) -> Result<()> {
        validate::max_length("GHASH input", len, data.len())?;

        for chunk in data[..len].chunks(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block[..chunk.len()].copy_from_slice(chunk);
            for (s, b) in self.state.iter_mut().zip(block.iter()) {
                *s ^= b;
            }
            self.state = Self::gf_multiply(&self.state, &self.h);
        }
        Ok(())
    }

    /// Fold the closing length block: AAD and ciphertext lengths in bits,
    /// each as a 64-bit big-endian field
    pub fn update_lengths(&mut self, aad_len: u64, ct_len: u64) -> Result<()> {
        let mut block = [0u8; BLOCK_SIZE];
        block[..8].copy_from_slice(&u64_to_be_bytes(aad_len.wrapping_mul(8)));
        block[8..].copy_from_slice(&u64_to_be_bytes(ct_len.wrapping_mul(8)));
        self.update_block(&block, BLOCK_SIZE)
    }

    /// Read out the accumulator
    pub fn finalize(&self) -> [u8; BLOCK_SIZE] {
        self.state
    }
}

/// One-shot GHASH over an AAD segment and a ciphertext segment,
/// including the closing length block
pub fn process_ghash(
    h: &[u8; BLOCK_SIZE],
    aad: &[u8],
    ciphertext: &[u8],
) -> Result<[u8; BLOCK_SIZE]> {
    let mut ghash = GHash::new(h);
    if !aad.is_empty() {
        ghash.update_block(aad, aad.len())?;
    }
    if !ciphertext.is_empty() {
        ghash.update_block(ciphertext, ciphertext.len())?;
    }
    ghash.update_lengths(aad.len() as u64, ciphertext.len() as u64)?;
    Ok(ghash.finalize())
}
