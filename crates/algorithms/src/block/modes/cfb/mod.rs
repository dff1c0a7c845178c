//! Cipher Feedback (CFB) mode
//!
//! Keystream `K_i = E(register)` XORed with the data, with the register
//! refilled from ciphertext: the full-block segment replaces the whole
//! register, the 8-bit segment shifts one ciphertext byte in at a time.
//! Both directions use only the cipher's encrypt transform; decryption is
//! the same keystream generation with the roles of input and register
//! feed swapped.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::super::BlockCipher;
use crate::error::{validate, Result};
use crate::types::nonce::BlockIvCompatible;
use crate::types::Nonce;
use crypta_internal::chunks::windows;

/// Feedback segment width for CFB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CfbSegment {
    /// Segment equals the cipher block size (CFB-128 for AES)
    Full,
    /// One byte per segment (CFB-8), byte-at-a-time shift register
    Byte,
}

/// CFB mode worker
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cfb<B: BlockCipher + Zeroize> {
    cipher: B,
    register: Zeroizing<Vec<u8>>,
    #[zeroize(skip)]
    segment: CfbSegment,
}

impl<B: BlockCipher + Zeroize> Cfb<B> {
    /// Create a full-segment (CFB-128 style) worker
    pub fn new<const N: usize>(cipher: B, iv: &Nonce<N>) -> Result<Self>
    where
        Nonce<N>: BlockIvCompatible,
    {
        Self::from_iv(cipher, iv.as_ref(), CfbSegment::Full)
    }

    /// Create a byte-segment (CFB-8) worker
    pub fn new_cfb8<const N: usize>(cipher: B, iv: &Nonce<N>) -> Result<Self>
    where
        Nonce<N>: BlockIvCompatible,
    {
        Self::from_iv(cipher, iv.as_ref(), CfbSegment::Byte)
    }

    /// Create from a runtime-sized IV slice
    pub fn from_iv(cipher: B, iv: &[u8], segment: CfbSegment) -> Result<Self> {
        validate::length("CFB initialization vector", iv.len(), B::block_size())?;
        Ok(Self {
            cipher,
            register: Zeroizing::new(iv.to_vec()),
            segment,
        })
    }

    /// Encrypt the next chunk
    ///
    /// With the full segment a partial chunk is allowed only as the final
    /// one; CFB-8 accepts any chunking.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.process(plaintext, true)
    }

    /// Decrypt the next chunk
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.process(ciphertext, false)
    }

    fn process(&mut self, data: &[u8], encrypting: bool) -> Result<Vec<u8>> {
        match self.segment {
            CfbSegment::Full => self.process_full(data, encrypting),
            CfbSegment::Byte => self.process_bytes(data, encrypting),
        }
    }

    fn process_full(&mut self, data: &[u8], encrypting: bool) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        let mut out = Vec::with_capacity(data.len());

        for chunk in windows(data, block_size) {
            let mut keystream = Zeroizing::new(self.register.to_vec());
            self.cipher.encrypt_block(&mut keystream)?;

            let mut segment = chunk.to_vec();
            for (byte, ks) in segment.iter_mut().zip(keystream.iter()) {
                *byte ^= ks;
            }

            // the register is refilled with ciphertext; a short final
            // segment leaves it untouched since nothing may follow it
            if chunk.len() == block_size {
                let ciphertext = if encrypting { &segment } else { chunk };
                self.register.copy_from_slice(ciphertext);
            }
            out.extend_from_slice(&segment);
        }
        Ok(out)
    }

    fn process_bytes(&mut self, data: &[u8], encrypting: bool) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(data.len());

        for &byte in data {
            let mut keystream = Zeroizing::new(self.register.to_vec());
            self.cipher.encrypt_block(&mut keystream)?;

            let cipher_byte = byte ^ keystream[0];
            let feedback = if encrypting { cipher_byte } else { byte };

            self.register.rotate_left(1);
            let last = self.register.len() - 1;
            self.register[last] = feedback;

            out.push(cipher_byte);
        }
        Ok(out)
    }
}
