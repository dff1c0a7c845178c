//! Electronic Codebook (ECB) mode
//!
//! `C_i = E(P_i)` with no chaining state: equal plaintext blocks produce
//! equal ciphertext blocks, which leaks message structure. ECB exists for
//! building blocks and interoperability, not for encrypting anything with
//! patterns. Input must be a whole number of blocks; pair with a padding
//! scheme for arbitrary lengths.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::Zeroize;

use super::super::BlockCipher;
use crate::error::{Error, Result};
use crypta_internal::chunks::full_windows;

/// ECB mode worker
#[derive(Clone, Zeroize)]
pub struct Ecb<B: BlockCipher + Zeroize> {
    cipher: B,
}

impl<B: BlockCipher + Zeroize> Ecb<B> {
    /// Create a new ECB worker
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// Encrypt exactly one block
    pub fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        let mut out = block.to_vec();
        self.cipher.encrypt_block(&mut out)?;
        Ok(out)
    }

    /// Decrypt exactly one block
    pub fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        let mut out = block.to_vec();
        self.cipher.decrypt_block(&mut out)?;
        Ok(out)
    }

    /// Encrypt a whole-blocks message
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.process(plaintext, true)
    }

    /// Decrypt a whole-blocks message
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.process(ciphertext, false)
    }

    fn process(&self, data: &[u8], encrypting: bool) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        if data.len() % block_size != 0 {
            return Err(Error::Length {
                context: "ECB input",
                expected: data.len().div_ceil(block_size) * block_size,
                actual: data.len(),
            });
        }

        let mut out = Vec::with_capacity(data.len());
        let (blocks, tail) = full_windows(data, block_size);
        debug_assert!(tail.is_empty());
        for block in blocks {
            let mut buffer = block.to_vec();
            if encrypting {
                self.cipher.encrypt_block(&mut buffer)?;
            } else {
                self.cipher.decrypt_block(&mut buffer)?;
            }
            out.extend_from_slice(&buffer);
        }
        Ok(out)
    }
}
