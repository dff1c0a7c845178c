//! Offset Codebook Mode (OCB3, RFC 7253)
//!
//! One block cipher call per block plus one per message: each block is
//! whitened with an offset built from doubling-derived masks, a plaintext
//! checksum feeds the tag, and the AAD is hashed with the same offset
//! scheme. The mask table grows on demand, one doubling per new index,
//! and is owned by the running operation.
//!
//! OCB is the only provided AEAD mode that uses the block cipher's
//! decrypt direction.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::AeadCipher;
use crate::block::BlockCipher;
use crate::error::{validate, Result};
use crypta_params::utils::symmetric::{AEAD_TAG_SIZES, OCB_MAX_NONCE_SIZE};

const BLOCK_SIZE: usize = 16;

/// Double a field element in GF(2^128): shift left one bit and fold the
/// reduction polynomial 0x87 in when the top bit falls off, branch-free
fn double(block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let value = u128::from_be_bytes(*block);
    let carry_mask = (value >> 127).wrapping_neg();
    ((value << 1) ^ (carry_mask & 0x87)).to_be_bytes()
}

#[inline]
fn xor_block(a: &mut [u8; BLOCK_SIZE], b: &[u8; BLOCK_SIZE]) {
    for (x, y) in a.iter_mut().zip(b.iter()) {
        *x ^= y;
    }
}

/// The lazily extended table of masks `L_i = double(L_{i-1})`
struct LTable {
    entries: Vec<[u8; BLOCK_SIZE]>,
}

impl LTable {
    fn new(l0: [u8; BLOCK_SIZE]) -> Self {
        Self { entries: vec![l0] }
    }

    /// Mask for index `i`, doubling forward as far as needed
    fn get(&mut self, i: usize) -> [u8; BLOCK_SIZE] {
        while self.entries.len() <= i {
            let last = self.entries[self.entries.len() - 1];
            self.entries.push(double(&last));
        }
        self.entries[i]
    }
}

impl Drop for LTable {
    fn drop(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.zeroize();
        }
    }
}

/// Number of trailing zero bits of a 1-based block index
#[inline]
fn ntz(i: usize) -> usize {
    i.trailing_zeros() as usize
}

/// OCB instance fixing the cipher, nonce, and tag length
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ocb<B: BlockCipher + Zeroize> {
    cipher: B,
    nonce: Zeroizing<Vec<u8>>,
    tag_len: usize,
    l_star: [u8; BLOCK_SIZE],
    l_dollar: [u8; BLOCK_SIZE],
}

impl<B: BlockCipher + Zeroize> Ocb<B> {
    /// Create an OCB instance
    ///
    /// The nonce must be 1 to 15 bytes; the tag length one of 4, 8, or
    /// 12 through 16 bytes.
    pub fn new(cipher: B, nonce: &[u8], tag_len: usize) -> Result<Self> {
        validate::length("OCB block size", B::block_size(), BLOCK_SIZE)?;
        validate::min_length("OCB nonce", nonce.len(), 1)?;
        validate::max_length("OCB nonce", nonce.len(), OCB_MAX_NONCE_SIZE)?;
        validate::parameter(
            AEAD_TAG_SIZES.contains(&tag_len),
            "tag_len",
            "OCB tag length must be one of 4, 8, 12, 13, 14, 15, 16",
        )?;

        // L_* = E(0^128), L_$ = double(L_*)
        let mut l_star = [0u8; BLOCK_SIZE];
        cipher.encrypt_block(&mut l_star)?;
        let l_dollar = double(&l_star);

        Ok(Self {
            cipher,
            nonce: Zeroizing::new(nonce.to_vec()),
            tag_len,
            l_star,
            l_dollar,
        })
    }

    fn l_table(&self) -> LTable {
        LTable::new(double(&self.l_dollar))
    }

    /// Initial offset from the nonce: format the nonce block, take the
    /// bottom six bits, encrypt the rest to Ktop, and slide the 24-byte
    /// Stretch by `bottom` bits
    fn initial_offset(&self) -> Result<[u8; BLOCK_SIZE]> {
        let n = self.nonce.len();
        let mut nonce_block = [0u8; BLOCK_SIZE];
        nonce_block[0] = (((self.tag_len * 8) % 128) as u8) << 1;
        nonce_block[BLOCK_SIZE - 1 - n] |= 1;
        nonce_block[BLOCK_SIZE - n..].copy_from_slice(&self.nonce);

        let bottom = (nonce_block[15] & 0x3F) as usize;
        let mut ktop = nonce_block;
        ktop[15] &= 0xC0;
        self.cipher.encrypt_block(&mut ktop)?;

        let mut stretch = [0u8; 24];
        stretch[..16].copy_from_slice(&ktop);
        for i in 0..8 {
            stretch[16 + i] = ktop[i] ^ ktop[i + 1];
        }

        let mut offset = [0u8; BLOCK_SIZE];
        let byte_shift = bottom / 8;
        let bit_shift = bottom % 8;
        for i in 0..BLOCK_SIZE {
            offset[i] = if bit_shift == 0 {
                stretch[i + byte_shift]
            } else {
                (stretch[i + byte_shift] << bit_shift)
                    | (stretch[i + byte_shift + 1] >> (8 - bit_shift))
            };
        }
        Ok(offset)
    }

    /// HASH(A): the AAD folded through the offset scheme from a zero
    /// offset
    fn hash_aad(&self, aad: &[u8], l: &mut LTable) -> Result<[u8; BLOCK_SIZE]> {
        let mut sum = [0u8; BLOCK_SIZE];
        let mut offset = [0u8; BLOCK_SIZE];

        let full_blocks = aad.len() / BLOCK_SIZE;
        for i in 0..full_blocks {
            xor_block(&mut offset, &l.get(ntz(i + 1)));
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(&aad[i * BLOCK_SIZE..(i + 1) * BLOCK_SIZE]);
            xor_block(&mut block, &offset);
            self.cipher.encrypt_block(&mut block)?;
            xor_block(&mut sum, &block);
        }

        let tail = &aad[full_blocks * BLOCK_SIZE..];
        if !tail.is_empty() {
            xor_block(&mut offset, &self.l_star);
            let mut block = [0u8; BLOCK_SIZE];
            block[..tail.len()].copy_from_slice(tail);
            block[tail.len()] = 0x80;
            xor_block(&mut block, &offset);
            self.cipher.encrypt_block(&mut block)?;
            xor_block(&mut sum, &block);
        }

        Ok(sum)
    }

    fn process(
        &self,
        data: &[u8],
        aad: &[u8],
        encrypting: bool,
    ) -> Result<(Vec<u8>, [u8; BLOCK_SIZE])> {
        let mut l = self.l_table();
        let mut offset = self.initial_offset()?;
        let mut checksum = [0u8; BLOCK_SIZE];
        let mut out = Vec::with_capacity(data.len());

        let full_blocks = data.len() / BLOCK_SIZE;
        for i in 0..full_blocks {
            xor_block(&mut offset, &l.get(ntz(i + 1)));

            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(&data[i * BLOCK_SIZE..(i + 1) * BLOCK_SIZE]);
            xor_block(&mut block, &offset);
            if encrypting {
                self.cipher.encrypt_block(&mut block)?;
            } else {
                self.cipher.decrypt_block(&mut block)?;
            }
            xor_block(&mut block, &offset);

            // the checksum always accumulates plaintext
            let plaintext_block: &[u8] = if encrypting {
                &data[i * BLOCK_SIZE..(i + 1) * BLOCK_SIZE]
            } else {
                &block
            };
            for (c, p) in checksum.iter_mut().zip(plaintext_block.iter()) {
                *c ^= p;
            }
            out.extend_from_slice(&block);
        }

        let tail = &data[full_blocks * BLOCK_SIZE..];
        if !tail.is_empty() {
            xor_block(&mut offset, &self.l_star);
            let mut pad = Zeroizing::new(offset);
            self.cipher.encrypt_block(pad.as_mut())?;

            let mut tail_out = Zeroizing::new(tail.to_vec());
            for (byte, p) in tail_out.iter_mut().zip(pad.iter()) {
                *byte ^= p;
            }

            let plaintext_tail: &[u8] = if encrypting { tail } else { &tail_out[..] };
            checksum
                .iter_mut()
                .zip(plaintext_tail.iter().chain(core::iter::once(&0x80u8)))
                .for_each(|(c, p)| *c ^= p);

            out.extend_from_slice(&tail_out);
        }

        // Tag = E(Checksum XOR Offset XOR L_$) XOR HASH(A)
        let mut tag = checksum;
        xor_block(&mut tag, &offset);
        xor_block(&mut tag, &self.l_dollar);
        self.cipher.encrypt_block(&mut tag)?;
        xor_block(&mut tag, &self.hash_aad(aad, &mut l)?);

        Ok((out, tag))
    }

    /// Encrypt `plaintext`, returning ciphertext and detached tag
    pub fn encrypt_detached(
        &self,
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<(Vec<u8>, Vec<u8>)> {
        let (ciphertext, tag) = self.process(plaintext, aad.unwrap_or(&[]), true)?;
        Ok((ciphertext, tag[..self.tag_len].to_vec()))
    }

    /// Decrypt `ciphertext` against a detached `tag`
    pub fn decrypt_detached(
        &self,
        ciphertext: &[u8],
        tag: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let (plaintext, full_tag) = self.process(ciphertext, aad.unwrap_or(&[]), false)?;
        let plaintext = Zeroizing::new(plaintext);

        let matches =
            tag.len() == self.tag_len && full_tag[..self.tag_len].ct_eq(tag).unwrap_u8() == 1;
        validate::authentication(matches, "OCB")?;
        Ok(plaintext.to_vec())
    }
}

impl<B: BlockCipher + Zeroize> AeadCipher for Ocb<B> {
    fn encrypt(&self, plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        let (mut ciphertext, tag) = self.encrypt_detached(plaintext, aad)?;
        ciphertext.extend_from_slice(&tag);
        Ok(ciphertext)
    }

    fn decrypt(&self, ciphertext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        validate::min_length("OCB ciphertext", ciphertext.len(), self.tag_len)?;
        let split = ciphertext.len() - self.tag_len;
        self.decrypt_detached(&ciphertext[..split], &ciphertext[split..], aad)
    }

    fn tag_len(&self) -> usize {
        self.tag_len
    }

    fn algorithm(&self) -> &'static str {
        "OCB"
    }
}

#[cfg(test)]
mod tests;
