//! Counter (CTR) mode
//!
//! Turns a block cipher into a stream cipher by encrypting successive
//! counter blocks and XORing the result with the data, per NIST SP
//! 800-38A. The counter block is a fixed nonce prefix plus a big-endian
//! incrementing suffix that wraps within its configured width; partial
//! final chunks of any length are fine since nothing chains on the
//! message.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::super::BlockCipher;
use crate::error::{validate, Result};
use crate::types::nonce::AesCtrCompatible;
use crate::types::Nonce;
use crypta_common::security::barrier;

/// Counter position within the counter block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPosition {
    /// Counter occupies the leading bytes, nonce follows
    Prefix,
    /// Counter occupies the trailing bytes (the common AES-CTR layout)
    Postfix,
}

/// CTR mode worker
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ctr<B: BlockCipher + Zeroize> {
    cipher: B,
    counter_block: Zeroizing<Vec<u8>>,
    counter_position: usize,
    counter_size: usize,
    keystream: Zeroizing<Vec<u8>>,
    keystream_pos: usize,
}

impl<B: BlockCipher + Zeroize> Ctr<B> {
    /// Create a standard CTR worker: nonce prefix, 4-byte trailing counter
    pub fn new<const N: usize>(cipher: B, nonce: &Nonce<N>) -> Result<Self>
    where
        Nonce<N>: AesCtrCompatible,
    {
        Self::with_counter_params(cipher, nonce.as_ref(), CounterPosition::Postfix, 4)
    }

    /// Create a CTR worker with a custom counter layout
    ///
    /// `counter_size` is the wrapping counter's width in bytes (1 to 8);
    /// the nonce must fit in the remaining block bytes and is never
    /// truncated.
    pub fn with_counter_params(
        cipher: B,
        nonce: &[u8],
        counter_pos: CounterPosition,
        counter_size: usize,
    ) -> Result<Self> {
        let block_size = B::block_size();

        validate::parameter(
            counter_size > 0 && counter_size <= 8,
            "counter_size",
            "counter width must be between 1 and 8 bytes",
        )?;
        validate::max_length("CTR nonce", nonce.len(), block_size - counter_size)?;

        let position = match counter_pos {
            CounterPosition::Prefix => 0,
            CounterPosition::Postfix => block_size - counter_size,
        };

        let mut counter_block = Zeroizing::new(vec![0u8; block_size]);
        let nonce_offset = match counter_pos {
            CounterPosition::Prefix => counter_size,
            CounterPosition::Postfix => 0,
        };
        counter_block[nonce_offset..nonce_offset + nonce.len()].copy_from_slice(nonce);

        Ok(Self {
            cipher,
            counter_block,
            counter_position: position,
            counter_size,
            keystream: Zeroizing::new(Vec::new()),
            keystream_pos: 0,
        })
    }

    /// Encrypt the next keystream block and step the counter
    fn generate_keystream(&mut self) -> Result<()> {
        let block_size = B::block_size();
        self.keystream = Zeroizing::new(vec![0u8; block_size]);

        barrier::compiler_fence_seq_cst();

        self.keystream.copy_from_slice(&self.counter_block);
        self.cipher.encrypt_block(&mut self.keystream)?;
        self.increment_counter();
        self.keystream_pos = 0;

        barrier::compiler_fence_seq_cst();

        Ok(())
    }

    /// Increment the counter field, wrapping inside its width
    fn increment_counter(&mut self) {
        let start = self.counter_position;
        let end = start + self.counter_size;
        for i in (start..end).rev() {
            let (value, overflow) = self.counter_block[i].overflowing_add(1);
            self.counter_block[i] = value;
            if !overflow {
                return;
            }
        }
        // wrapped the full width; the counter truncates silently
    }

    /// Encrypt a chunk of any length
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut out = plaintext.to_vec();
        self.process(&mut out)?;
        Ok(out)
    }

    /// Decrypt a chunk of any length; identical to encryption
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(ciphertext)
    }

    /// Encrypt or decrypt in place
    pub fn process(&mut self, data: &mut [u8]) -> Result<()> {
        barrier::compiler_fence_seq_cst();

        for byte in data.iter_mut() {
            if self.keystream_pos >= self.keystream.len() {
                self.generate_keystream()?;
            }
            *byte ^= self.keystream[self.keystream_pos];
            self.keystream_pos += 1;
        }

        barrier::compiler_fence_seq_cst();

        Ok(())
    }

    /// Fill `output` with raw keystream starting at the next block
    /// boundary
    pub fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        for byte in output.iter_mut() {
            *byte = 0;
        }
        self.keystream_pos = self.keystream.len();
        self.process(output)
    }

    /// Set the counter field to `counter` (big-endian within its width)
    /// and discard buffered keystream
    pub fn set_counter(&mut self, counter: u64) {
        let mut bytes = [0u8; 8];
        BigEndian::write_u64(&mut bytes, counter);
        let start = self.counter_position;
        for i in 0..self.counter_size {
            self.counter_block[start + self.counter_size - 1 - i] = bytes[7 - i];
        }
        self.keystream = Zeroizing::new(Vec::new());
        self.keystream_pos = 0;
    }

    /// Seek so the next generated keystream block is block
    /// `block_offset` of the stream (counting from zero)
    pub fn seek(&mut self, block_offset: u64) {
        self.set_counter(block_offset);
    }
}
