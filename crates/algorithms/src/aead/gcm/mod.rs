//! Galois/Counter Mode (NIST SP 800-38D)
//!
//! CTR encryption with a 32-bit wrapping counter, bound to the AAD and
//! ciphertext through a GHASH accumulator keyed by `H = E(K, 0^128)`.
//! A 96-bit nonce forms the initial counter block directly; other nonce
//! lengths are compressed through GHASH first.
//!
//! [`Gcm`] is the one-shot interface. [`GcmWorker`] is the streaming
//! worker: AAD is folded in at construction, chunks flow through
//! `update`, and finalization either produces the tag or verifies the
//! expected one.

pub mod ghash;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::AeadCipher;
use crate::block::BlockCipher;
use crate::error::{validate, Error, Result};
use crate::types::nonce::AesGcmCompatible;
use crate::types::Nonce;
use crypta_params::utils::symmetric::{AEAD_TAG_SIZES, GCM_TAG_SIZE};
use ghash::GHash;

const BLOCK_SIZE: usize = 16;

/// Increment the last 32 bits of a counter block, wrapping inside them
fn inc32(block: &mut [u8; BLOCK_SIZE]) {
    let mut counter = u32::from_be_bytes([block[12], block[13], block[14], block[15]]);
    counter = counter.wrapping_add(1);
    block[12..].copy_from_slice(&counter.to_be_bytes());
}

/// GCM instance fixing the cipher, nonce, and tag length
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Gcm<B: BlockCipher + Clone + Zeroize> {
    cipher: B,
    h: [u8; BLOCK_SIZE],
    nonce: Zeroizing<Vec<u8>>,
    tag_len: usize,
}

impl<B: BlockCipher + Clone + Zeroize> Gcm<B> {
    /// Create a GCM instance with the default 16-byte tag
    pub fn new<const N: usize>(cipher: B, nonce: &Nonce<N>) -> Result<Self>
    where
        Nonce<N>: AesGcmCompatible,
    {
        Self::with_tag_len(cipher, nonce, GCM_TAG_SIZE)
    }

    /// Create a GCM instance with an explicit tag length
    ///
    /// Accepted lengths are 4, 8, and 12 through 16 bytes; anything else
    /// is rejected here rather than silently truncated later.
    pub fn with_tag_len<const N: usize>(cipher: B, nonce: &Nonce<N>, tag_len: usize) -> Result<Self>
    where
        Nonce<N>: AesGcmCompatible,
    {
        validate::length("GCM block size", B::block_size(), BLOCK_SIZE)?;
        validate::parameter(
            AEAD_TAG_SIZES.contains(&tag_len),
            "tag_len",
            "GCM tag length must be one of 4, 8, 12, 13, 14, 15, 16",
        )?;

        let mut h = [0u8; BLOCK_SIZE];
        cipher.encrypt_block(&mut h)?;

        Ok(Self {
            cipher,
            h,
            nonce: Zeroizing::new(nonce.as_ref().to_vec()),
            tag_len,
        })
    }

    /// Derive the pre-counter block J0 from the nonce
    fn derive_j0(&self) -> Result<[u8; BLOCK_SIZE]> {
        let mut j0 = [0u8; BLOCK_SIZE];
        if self.nonce.len() == 12 {
            j0[..12].copy_from_slice(&self.nonce);
            j0[15] = 1;
        } else {
            let mut ghash = GHash::new(&self.h);
            ghash.update_block(&self.nonce, self.nonce.len())?;
            ghash.update_lengths(0, self.nonce.len() as u64)?;
            j0 = ghash.finalize();
        }
        Ok(j0)
    }

    /// Start a streaming encryption worker, folding `aad` in up front
    pub fn encryptor(&self, aad: Option<&[u8]>) -> Result<GcmWorker<B>> {
        GcmWorker::new(self, aad, true)
    }

    /// Start a streaming decryption worker, folding `aad` in up front
    pub fn decryptor(&self, aad: Option<&[u8]>) -> Result<GcmWorker<B>> {
        GcmWorker::new(self, aad, false)
    }

    /// Encrypt `plaintext`, returning ciphertext and detached tag
    pub fn encrypt_detached(
        &self,
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<(Vec<u8>, Vec<u8>)> {
        let mut worker = self.encryptor(aad)?;
        let ciphertext = worker.update(plaintext)?;
        let tag = worker.finalize_tag()?;
        Ok((ciphertext, tag))
    }

    /// Decrypt `ciphertext` against a detached `tag`
    pub fn decrypt_detached(
        &self,
        ciphertext: &[u8],
        tag: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let mut worker = self.decryptor(aad)?;
        let plaintext = Zeroizing::new(worker.update(ciphertext)?);
        worker.finalize_verify(tag)?;
        Ok(plaintext.to_vec())
    }
}

impl<B: BlockCipher + Clone + Zeroize> AeadCipher for Gcm<B> {
    fn encrypt(&self, plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        let (mut ciphertext, tag) = self.encrypt_detached(plaintext, aad)?;
        ciphertext.extend_from_slice(&tag);
        Ok(ciphertext)
    }

    fn decrypt(&self, ciphertext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        validate::min_length("GCM ciphertext", ciphertext.len(), self.tag_len)?;
        let split = ciphertext.len() - self.tag_len;
        self.decrypt_detached(&ciphertext[..split], &ciphertext[split..], aad)
    }

    fn tag_len(&self) -> usize {
        self.tag_len
    }

    fn algorithm(&self) -> &'static str {
        "GCM"
    }
}

/// Streaming GCM worker for one message in one direction
///
/// Feed data with [`update`](Self::update) in block-multiple chunks (the
/// final chunk may be any length), then finalize exactly once. The
/// encrypt side returns the tag; the decrypt side verifies the expected
/// tag over its full configured length before the plaintext may be used.
pub struct GcmWorker<B: BlockCipher + Clone + Zeroize> {
    cipher: B,
    ghash: GHash,
    j0: [u8; BLOCK_SIZE],
    counter: [u8; BLOCK_SIZE],
    keystream: Zeroizing<[u8; BLOCK_SIZE]>,
    keystream_pos: usize,
    aad_len: u64,
    data_len: u64,
    tag_len: usize,
    encrypting: bool,
}

impl<B: BlockCipher + Clone + Zeroize> GcmWorker<B> {
    fn new(gcm: &Gcm<B>, aad: Option<&[u8]>, encrypting: bool) -> Result<Self> {
        let j0 = gcm.derive_j0()?;
        let mut counter = j0;
        inc32(&mut counter);

        let mut ghash = GHash::new(&gcm.h);
        let aad = aad.unwrap_or(&[]);
        if !aad.is_empty() {
            ghash.update_block(aad, aad.len())?;
        }

        Ok(Self {
            cipher: gcm.cipher.clone(),
            ghash,
            j0,
            counter,
            keystream: Zeroizing::new([0u8; BLOCK_SIZE]),
            keystream_pos: BLOCK_SIZE,
            aad_len: aad.len() as u64,
            data_len: 0,
            tag_len: gcm.tag_len,
            encrypting,
        })
    }

    /// Process the next chunk; all chunks except the last must be
    /// multiples of the block size so the GHASH fold stays aligned
    pub fn update(&mut self, chunk: &[u8]) -> Result<Vec<u8>> {
        if self.data_len % BLOCK_SIZE as u64 != 0 {
            return Err(Error::Processing {
                operation: "GCM update",
                details: "a partial chunk may only be the final one",
            });
        }

        let mut out = chunk.to_vec();
        for byte in out.iter_mut() {
            if self.keystream_pos == BLOCK_SIZE {
                let mut block = Zeroizing::new(self.counter);
                self.cipher.encrypt_block(block.as_mut())?;
                *self.keystream = *block;
                inc32(&mut self.counter);
                self.keystream_pos = 0;
            }
            *byte ^= self.keystream[self.keystream_pos];
            self.keystream_pos += 1;
        }

        // the tag always covers the ciphertext side
        let ciphertext = if self.encrypting { &out } else { chunk };
        if !ciphertext.is_empty() {
            self.ghash.update_block(ciphertext, ciphertext.len())?;
        }
        self.data_len = self.data_len.wrapping_add(chunk.len() as u64);
        Ok(out)
    }

    /// Compute the full tag block: GHASH closed with the length block,
    /// then XORed with `E(J0)`
    fn raw_tag(&mut self) -> Result<[u8; BLOCK_SIZE]> {
        self.ghash.update_lengths(self.aad_len, self.data_len)?;
        let mut tag = self.ghash.finalize();

        let mut e_j0 = Zeroizing::new(self.j0);
        self.cipher.encrypt_block(e_j0.as_mut())?;
        for (t, e) in tag.iter_mut().zip(e_j0.iter()) {
            *t ^= e;
        }
        Ok(tag)
    }

    /// Finalize the encrypt side, producing the truncated tag
    pub fn finalize_tag(mut self) -> Result<Vec<u8>> {
        let tag = self.raw_tag()?;
        Ok(tag[..self.tag_len].to_vec())
    }

    /// Finalize the decrypt side, verifying `expected` in constant time
    /// over the full configured tag length
    pub fn finalize_verify(mut self, expected: &[u8]) -> Result<()> {
        let tag = self.raw_tag()?;
        let matches = expected.len() == self.tag_len
            && tag[..self.tag_len].ct_eq(expected).unwrap_u8() == 1;
        validate::authentication(matches, "GCM")
    }
}
