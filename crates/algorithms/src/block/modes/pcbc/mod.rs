//! Propagating Cipher Block Chaining (PCBC) mode
//!
//! `C_i = E(P_i XOR P_{i-1} XOR C_{i-1})` with the chain seeded by the
//! IV. Both the previous plaintext and ciphertext feed the next block, so
//! corruption of one ciphertext block garbles every later block on
//! decryption, unlike CBC where the damage stops after two blocks.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::super::BlockCipher;
use crate::error::{validate, Error, Result};
use crate::types::nonce::BlockIvCompatible;
use crate::types::Nonce;
use crypta_internal::chunks::windows;
use crypta_internal::xor::xor_in_place;

/// PCBC mode worker
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Pcbc<B: BlockCipher + Zeroize> {
    cipher: B,
    // running P_{i-1} XOR C_{i-1}, seeded by the IV
    chain: Zeroizing<Vec<u8>>,
}

impl<B: BlockCipher + Zeroize> Pcbc<B> {
    /// Create a new PCBC worker; the IV must match the cipher block size
    pub fn new<const N: usize>(cipher: B, iv: &Nonce<N>) -> Result<Self>
    where
        Nonce<N>: BlockIvCompatible,
    {
        Self::from_iv(cipher, iv.as_ref())
    }

    /// Create from a runtime-sized IV slice
    pub fn from_iv(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length("PCBC initialization vector", iv.len(), B::block_size())?;
        Ok(Self {
            cipher,
            chain: Zeroizing::new(iv.to_vec()),
        })
    }

    /// Encrypt the next block of the message
    pub fn encrypt_block(&mut self, block: &[u8]) -> Result<Vec<u8>> {
        validate::length("PCBC plaintext block", block.len(), B::block_size())?;

        let mut out = block.to_vec();
        xor_in_place(&mut out, &self.chain);
        self.cipher.encrypt_block(&mut out)?;

        self.chain.copy_from_slice(block);
        xor_in_place(&mut self.chain, &out);
        Ok(out)
    }

    /// Decrypt the next block of the message
    pub fn decrypt_block(&mut self, block: &[u8]) -> Result<Vec<u8>> {
        validate::length("PCBC ciphertext block", block.len(), B::block_size())?;

        let mut out = block.to_vec();
        self.cipher.decrypt_block(&mut out)?;
        xor_in_place(&mut out, &self.chain);

        self.chain.copy_from_slice(&out);
        xor_in_place(&mut self.chain, block);
        Ok(out)
    }

    /// Encrypt a whole-blocks message
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        if plaintext.len() % block_size != 0 {
            return Err(Error::Length {
                context: "PCBC plaintext",
                expected: plaintext.len().div_ceil(block_size) * block_size,
                actual: plaintext.len(),
            });
        }

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        for chunk in windows(plaintext, block_size) {
            ciphertext.extend_from_slice(&self.encrypt_block(chunk)?);
        }
        Ok(ciphertext)
    }

    /// Decrypt a whole-blocks message
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        if ciphertext.len() % block_size != 0 {
            return Err(Error::Length {
                context: "PCBC ciphertext",
                expected: ciphertext.len().div_ceil(block_size) * block_size,
                actual: ciphertext.len(),
            });
        }

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        for chunk in windows(ciphertext, block_size) {
            plaintext.extend_from_slice(&self.decrypt_block(chunk)?);
        }
        Ok(plaintext)
    }
}
