//! XChaCha20 stream cipher
//!
//! The extended-nonce ChaCha20 construction: HChaCha20 compresses the
//! key and the first 16 nonce bytes into a subkey, which keys a regular
//! ChaCha20 whose 12-byte nonce is four zero bytes followed by the
//! remaining 8 nonce bytes. The 24-byte nonce is large enough to pick at
//! random per message, which a 12-byte ChaCha20 nonce is not.

use byteorder::{ByteOrder, LittleEndian};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::chacha20::{run_rounds, ChaCha20, CHACHA20_KEY_SIZE, SIGMA};
use crate::types::nonce::XChaCha20Compatible;
use crate::types::Nonce;
use crypta_common::security::{EphemeralSecret, SecretBuffer};

/// Size of XChaCha20 nonce in bytes
pub const XCHACHA20_NONCE_SIZE: usize = 24;

/// HChaCha20: 20 ChaCha rounds over key and 16 nonce bytes, returning
/// words 0..4 and 12..16 of the final state (no feed-forward addition)
pub(crate) fn hchacha20(key: &SecretBuffer<CHACHA20_KEY_SIZE>, nonce: &[u8]) -> SecretBuffer<32> {
    debug_assert_eq!(nonce.len(), 16);

    let mut state = EphemeralSecret::new([0u32; 16]);
    state.as_mut()[..4].copy_from_slice(&SIGMA);
    let key_bytes = key.as_ref();
    for i in 0..8 {
        state[4 + i] = LittleEndian::read_u32(&key_bytes[i * 4..]);
    }
    for i in 0..4 {
        state[12 + i] = LittleEndian::read_u32(&nonce[i * 4..]);
    }

    run_rounds(&mut state);

    let mut subkey = [0u8; 32];
    for i in 0..4 {
        LittleEndian::write_u32(&mut subkey[i * 4..], state[i]);
        LittleEndian::write_u32(&mut subkey[16 + i * 4..], state[12 + i]);
    }
    SecretBuffer::new(subkey)
}

/// XChaCha20 stream cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct XChaCha20 {
    inner: ChaCha20,
}

impl XChaCha20 {
    /// Create an XChaCha20 instance with block counter zero
    pub fn new<const N: usize>(key: &[u8; CHACHA20_KEY_SIZE], nonce: &Nonce<N>) -> Self
    where
        Nonce<N>: XChaCha20Compatible,
    {
        Self::with_counter(key, nonce, 0)
    }

    /// Create an XChaCha20 instance starting at the given block counter
    pub fn with_counter<const N: usize>(
        key: &[u8; CHACHA20_KEY_SIZE],
        nonce: &Nonce<N>,
        counter: u32,
    ) -> Self
    where
        Nonce<N>: XChaCha20Compatible,
    {
        let key_buf = SecretBuffer::new(*key);
        let subkey = hchacha20(&key_buf, &nonce.as_ref()[..16]);

        let mut inner_nonce = [0u8; 12];
        inner_nonce[4..].copy_from_slice(&nonce.as_ref()[16..]);

        Self {
            inner: ChaCha20::from_parts(&subkey, &inner_nonce, counter),
        }
    }

    /// Encrypt or decrypt data in place
    pub fn process(&mut self, data: &mut [u8]) {
        self.inner.process(data);
    }

    /// Encrypt data in place
    pub fn encrypt(&mut self, data: &mut [u8]) {
        self.process(data);
    }

    /// Decrypt data in place
    pub fn decrypt(&mut self, data: &mut [u8]) {
        self.process(data);
    }

    /// Generate keystream directly into an output buffer
    pub fn keystream(&mut self, output: &mut [u8]) {
        self.inner.keystream(output);
    }

    /// Seek so the next generated keystream block is block
    /// `block_offset` of the stream
    pub fn seek(&mut self, block_offset: u32) {
        self.inner.seek(block_offset);
    }
}

#[cfg(test)]
mod tests;
