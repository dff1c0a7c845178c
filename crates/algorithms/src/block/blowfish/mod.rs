//! Blowfish block cipher
//!
//! Schneier's 16-round Feistel cipher over 64-bit blocks with a 4 to 56
//! byte key. The key schedule repeatedly encrypts a zero block to replace
//! the pi-derived P-array and S-boxes, which makes key setup deliberately
//! expensive. The 64-bit block makes Blowfish unsuitable for bulk
//! encryption of large messages; it is provided for interoperability.

mod consts;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};
use crate::types::SecretBytes;
use consts::{P_INIT, S0_INIT, S1_INIT, S2_INIT, S3_INIT};
use crypta_params::utils::symmetric::{
    BLOWFISH_BLOCK_SIZE, BLOWFISH_MAX_KEY_SIZE, BLOWFISH_MIN_KEY_SIZE,
};
use rand::{CryptoRng, RngCore};

const ROUNDS: usize = 16;

/// Blowfish block cipher with an expanded key schedule
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Blowfish {
    p: [u32; ROUNDS + 2],
    s: [[u32; 256]; 4],
}

impl Blowfish {
    /// Build a key schedule from a 4 to 56 byte key
    pub fn with_key(key: &[u8]) -> Result<Self> {
        validate::min_length("Blowfish key", key.len(), BLOWFISH_MIN_KEY_SIZE)?;
        validate::max_length("Blowfish key", key.len(), BLOWFISH_MAX_KEY_SIZE)?;

        let mut cipher = Blowfish {
            p: P_INIT,
            s: [S0_INIT, S1_INIT, S2_INIT, S3_INIT],
        };

        // fold the key into the P-array, cycling it as needed
        let mut key_pos = 0;
        for p in cipher.p.iter_mut() {
            let mut word = 0u32;
            for _ in 0..4 {
                word = (word << 8) | key[key_pos] as u32;
                key_pos = (key_pos + 1) % key.len();
            }
            *p ^= word;
        }

        // replace P and S with successive encryptions of the zero block
        let (mut left, mut right) = (0u32, 0u32);
        for i in (0..ROUNDS + 2).step_by(2) {
            let (l, r) = cipher.encrypt_words(left, right);
            cipher.p[i] = l;
            cipher.p[i + 1] = r;
            left = l;
            right = r;
        }
        for sbox in 0..4 {
            for i in (0..256).step_by(2) {
                let (l, r) = cipher.encrypt_words(left, right);
                cipher.s[sbox][i] = l;
                cipher.s[sbox][i + 1] = r;
                left = l;
                right = r;
            }
        }

        Ok(cipher)
    }

    #[inline(always)]
    fn feistel(&self, x: u32) -> u32 {
        let a = self.s[0][(x >> 24) as usize];
        let b = self.s[1][((x >> 16) & 0xFF) as usize];
        let c = self.s[2][((x >> 8) & 0xFF) as usize];
        let d = self.s[3][(x & 0xFF) as usize];
        (a.wrapping_add(b) ^ c).wrapping_add(d)
    }

    fn encrypt_words(&self, mut left: u32, mut right: u32) -> (u32, u32) {
        for i in 0..ROUNDS {
            left ^= self.p[i];
            right ^= self.feistel(left);
            core::mem::swap(&mut left, &mut right);
        }
        core::mem::swap(&mut left, &mut right);
        right ^= self.p[ROUNDS];
        left ^= self.p[ROUNDS + 1];
        (left, right)
    }

    fn decrypt_words(&self, mut left: u32, mut right: u32) -> (u32, u32) {
        for i in (2..ROUNDS + 2).rev() {
            left ^= self.p[i];
            right ^= self.feistel(left);
            core::mem::swap(&mut left, &mut right);
        }
        core::mem::swap(&mut left, &mut right);
        right ^= self.p[1];
        left ^= self.p[0];
        (left, right)
    }
}

impl CipherAlgorithm for Blowfish {
    const KEY_SIZE: usize = 16;
    const BLOCK_SIZE: usize = BLOWFISH_BLOCK_SIZE;

    fn name() -> &'static str {
        "Blowfish"
    }
}

impl BlockCipher for Blowfish {
    type Key = SecretBytes<16>;

    fn new(key: &Self::Key) -> Self {
        Self::with_key(key.as_ref()).expect("16-byte Blowfish key is always in range")
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("Blowfish block", block.len(), BLOWFISH_BLOCK_SIZE)?;
        let left = u32::from_be_bytes([block[0], block[1], block[2], block[3]]);
        let right = u32::from_be_bytes([block[4], block[5], block[6], block[7]]);
        let (l, r) = self.encrypt_words(left, right);
        block[..4].copy_from_slice(&l.to_be_bytes());
        block[4..].copy_from_slice(&r.to_be_bytes());
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("Blowfish block", block.len(), BLOWFISH_BLOCK_SIZE)?;
        let left = u32::from_be_bytes([block[0], block[1], block[2], block[3]]);
        let right = u32::from_be_bytes([block[4], block[5], block[6], block[7]]);
        let (l, r) = self.decrypt_words(left, right);
        block[..4].copy_from_slice(&l.to_be_bytes());
        block[4..].copy_from_slice(&r.to_be_bytes());
        Ok(())
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        let mut key_data = [0u8; 16];
        rng.fill_bytes(&mut key_data);
        SecretBytes::new(key_data)
    }
}

#[cfg(test)]
mod tests;
