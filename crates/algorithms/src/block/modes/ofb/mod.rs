//! Output Feedback (OFB) mode
//!
//! Keystream `K_i = E(K_{i-1})` with `K_0 = IV`, XORed with the data. The
//! keystream never depends on the message, so encryption and decryption
//! are the same operation and any chunking is fine; the worker buffers
//! the unused tail of the current keystream block between calls.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::super::BlockCipher;
use crate::error::{validate, Result};
use crate::types::nonce::BlockIvCompatible;
use crate::types::Nonce;

/// OFB mode worker
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ofb<B: BlockCipher + Zeroize> {
    cipher: B,
    register: Zeroizing<Vec<u8>>,
    position: usize,
}

impl<B: BlockCipher + Zeroize> Ofb<B> {
    /// Create a new OFB worker; the IV must match the cipher block size
    pub fn new<const N: usize>(cipher: B, iv: &Nonce<N>) -> Result<Self>
    where
        Nonce<N>: BlockIvCompatible,
    {
        Self::from_iv(cipher, iv.as_ref())
    }

    /// Create from a runtime-sized IV slice
    pub fn from_iv(cipher: B, iv: &[u8]) -> Result<Self> {
        let block_size = B::block_size();
        validate::length("OFB initialization vector", iv.len(), block_size)?;
        Ok(Self {
            cipher,
            register: Zeroizing::new(iv.to_vec()),
            // the register still holds the IV, not keystream
            position: block_size,
        })
    }

    /// XOR the next chunk of the message with the keystream; encryption
    /// and decryption are identical
    pub fn process(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        let mut out = data.to_vec();

        for byte in out.iter_mut() {
            if self.position == block_size {
                self.cipher.encrypt_block(&mut self.register)?;
                self.position = 0;
            }
            *byte ^= self.register[self.position];
            self.position += 1;
        }
        Ok(out)
    }

    /// Alias for [`process`](Self::process)
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.process(plaintext)
    }

    /// Alias for [`process`](Self::process)
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.process(ciphertext)
    }
}

#[cfg(test)]
mod tests;
