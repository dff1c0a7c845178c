//! Counter with CBC-MAC (CCM, RFC 3610)
//!
//! A CBC-MAC over a length-prefixed formatting of nonce, AAD, and
//! plaintext, interleaved with CTR-mode encryption. The first block B0
//! encodes the tag length, the AAD flag, and the message length in
//! exactly the RFC 3610 bit layout, which is why the total message
//! length must be known up front: CCM is a one-shot mode by
//! construction.
//!
//! Decryption runs the same counter stream in reverse (keystream XOR),
//! then recomputes the CBC-MAC over the recovered plaintext and compares
//! tags constant-time before releasing anything.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::AeadCipher;
use crate::block::BlockCipher;
use crate::error::{validate, Error, Result};
use crypta_params::utils::symmetric::{CCM_MAX_NONCE_SIZE, CCM_MIN_NONCE_SIZE, CCM_TAG_SIZES};

const BLOCK_SIZE: usize = 16;

/// CCM instance fixing the cipher, nonce, and tag length
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ccm<B: BlockCipher + Zeroize> {
    cipher: B,
    nonce: Zeroizing<Vec<u8>>,
    tag_len: usize,
}

impl<B: BlockCipher + Zeroize> Ccm<B> {
    /// Create a CCM instance
    ///
    /// The nonce must be 7 to 13 bytes (the remainder of the block holds
    /// the message-length field), and the tag length one of the RFC 3610
    /// M values: 4, 6, 8, 10, 12, 14, or 16 bytes.
    pub fn new(cipher: B, nonce: &[u8], tag_len: usize) -> Result<Self> {
        validate::length("CCM block size", B::block_size(), BLOCK_SIZE)?;
        validate::min_length("CCM nonce", nonce.len(), CCM_MIN_NONCE_SIZE)?;
        validate::max_length("CCM nonce", nonce.len(), CCM_MAX_NONCE_SIZE)?;
        validate::parameter(
            CCM_TAG_SIZES.contains(&tag_len),
            "tag_len",
            "CCM tag length must be one of 4, 6, 8, 10, 12, 14, 16",
        )?;

        Ok(Self {
            cipher,
            nonce: Zeroizing::new(nonce.to_vec()),
            tag_len,
        })
    }

    /// Octets reserved for the message length field: q = 15 - n
    fn length_field_size(&self) -> usize {
        15 - self.nonce.len()
    }

    /// Verify the message length fits its q-octet field
    fn check_message_length(&self, len: usize) -> Result<()> {
        let q = self.length_field_size();
        if q < core::mem::size_of::<usize>() && len >> (8 * q) != 0 {
            return Err(Error::Length {
                context: "CCM message",
                expected: 1 << (8 * q),
                actual: len,
            });
        }
        Ok(())
    }

    /// Build B0: flags, nonce, and the message length in q big-endian
    /// octets. Flag bits per RFC 3610: Adata in bit 6, (t-2)/2 in bits
    /// 5..3, q-1 in bits 2..0.
    fn block0(&self, message_len: usize, has_aad: bool) -> [u8; BLOCK_SIZE] {
        let q = self.length_field_size();
        let mut b0 = [0u8; BLOCK_SIZE];
        b0[0] = ((has_aad as u8) << 6)
            | (((self.tag_len as u8 - 2) / 2) << 3)
            | (q as u8 - 1);
        b0[1..1 + self.nonce.len()].copy_from_slice(&self.nonce);
        let mut len = message_len;
        for i in (16 - q..16).rev() {
            b0[i] = len as u8;
            len >>= 8;
        }
        b0
    }

    /// Counter block A_i: flags carry only q-1, then nonce, then the
    /// block index in q big-endian octets
    fn counter_block(&self, index: usize) -> [u8; BLOCK_SIZE] {
        let q = self.length_field_size();
        let mut a = [0u8; BLOCK_SIZE];
        a[0] = q as u8 - 1;
        a[1..1 + self.nonce.len()].copy_from_slice(&self.nonce);
        let mut i = index;
        for pos in (16 - q..16).rev() {
            a[pos] = i as u8;
            i >>= 8;
        }
        a
    }

    /// CBC-MAC over B0, the encoded AAD, and the message
    fn compute_mac(&self, message: &[u8], aad: &[u8]) -> Result<[u8; BLOCK_SIZE]> {
        let mut x = self.block0(message.len(), !aad.is_empty());
        self.cipher.encrypt_block(&mut x)?;

        if !aad.is_empty() {
            // AAD block stream starts with the RFC 3610 length encoding
            let mut header = Zeroizing::new(Vec::with_capacity(10 + aad.len()));
            if aad.len() < 0xFF00 {
                header.extend_from_slice(&(aad.len() as u16).to_be_bytes());
            } else if aad.len() <= 0xFFFF_FFFF {
                header.extend_from_slice(&[0xFF, 0xFE]);
                header.extend_from_slice(&(aad.len() as u32).to_be_bytes());
            } else {
                header.extend_from_slice(&[0xFF, 0xFF]);
                header.extend_from_slice(&(aad.len() as u64).to_be_bytes());
            }
            header.extend_from_slice(aad);
            for chunk in header.chunks(BLOCK_SIZE) {
                for (xi, b) in x.iter_mut().zip(chunk.iter()) {
                    *xi ^= b;
                }
                self.cipher.encrypt_block(&mut x)?;
            }
        }

        for chunk in message.chunks(BLOCK_SIZE) {
            for (xi, b) in x.iter_mut().zip(chunk.iter()) {
                *xi ^= b;
            }
            self.cipher.encrypt_block(&mut x)?;
        }

        Ok(x)
    }

    /// XOR the keystream blocks A_1, A_2, ... over `data` in place
    fn apply_counter_stream(&self, data: &mut [u8]) -> Result<()> {
        for (index, chunk) in data.chunks_mut(BLOCK_SIZE).enumerate() {
            let mut keystream = Zeroizing::new(self.counter_block(index + 1));
            self.cipher.encrypt_block(keystream.as_mut())?;
            for (byte, ks) in chunk.iter_mut().zip(keystream.iter()) {
                *byte ^= ks;
            }
        }
        Ok(())
    }

    /// Truncated tag: MAC XOR E(A_0)
    fn tag_from_mac(&self, mac: &[u8; BLOCK_SIZE]) -> Result<Vec<u8>> {
        let mut a0 = Zeroizing::new(self.counter_block(0));
        self.cipher.encrypt_block(a0.as_mut())?;
        Ok(mac
            .iter()
            .zip(a0.iter())
            .map(|(m, s)| m ^ s)
            .take(self.tag_len)
            .collect())
    }

    /// Encrypt `plaintext`, returning ciphertext and detached tag
    pub fn encrypt_detached(
        &self,
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<(Vec<u8>, Vec<u8>)> {
        self.check_message_length(plaintext.len())?;
        let aad = aad.unwrap_or(&[]);

        let mac = self.compute_mac(plaintext, aad)?;
        let tag = self.tag_from_mac(&mac)?;

        let mut ciphertext = plaintext.to_vec();
        self.apply_counter_stream(&mut ciphertext)?;
        Ok((ciphertext, tag))
    }

    /// Decrypt `ciphertext` against a detached `tag`
    pub fn decrypt_detached(
        &self,
        ciphertext: &[u8],
        tag: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        self.check_message_length(ciphertext.len())?;
        let aad = aad.unwrap_or(&[]);

        // counter stream is its own inverse
        let mut plaintext = Zeroizing::new(ciphertext.to_vec());
        self.apply_counter_stream(&mut plaintext)?;

        let mac = self.compute_mac(&plaintext, aad)?;
        let expected = Zeroizing::new(self.tag_from_mac(&mac)?);

        let matches = tag.len() == self.tag_len && expected.ct_eq(tag).unwrap_u8() == 1;
        validate::authentication(matches, "CCM")?;
        Ok(plaintext.to_vec())
    }
}

impl<B: BlockCipher + Zeroize> AeadCipher for Ccm<B> {
    fn encrypt(&self, plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        let (mut ciphertext, tag) = self.encrypt_detached(plaintext, aad)?;
        ciphertext.extend_from_slice(&tag);
        Ok(ciphertext)
    }

    fn decrypt(&self, ciphertext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        validate::min_length("CCM ciphertext", ciphertext.len(), self.tag_len)?;
        let split = ciphertext.len() - self.tag_len;
        self.decrypt_detached(&ciphertext[..split], &ciphertext[split..], aad)
    }

    fn tag_len(&self) -> usize {
        self.tag_len
    }

    fn algorithm(&self) -> &'static str {
        "CCM"
    }
}

#[cfg(test)]
mod tests;
