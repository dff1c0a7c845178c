//! Salsa20 stream cipher
//!
//! Bernstein's Salsa20/20 with a 64-bit nonce and 64-bit block counter.
//! Both 256-bit and 128-bit keys are supported, selecting the "expand
//! 32-byte k" and "expand 16-byte k" constants respectively.

use byteorder::{ByteOrder, LittleEndian};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::types::nonce::Salsa20Compatible;
use crate::types::Nonce;
use crypta_common::security::{EphemeralSecret, SecretBuffer};

/// Size of a Salsa20 key in bytes (the 128-bit variant also exists)
pub const SALSA20_KEY_SIZE: usize = 32;
/// Size of the Salsa20 nonce in bytes
pub const SALSA20_NONCE_SIZE: usize = 8;
/// Size of a Salsa20 keystream block in bytes
pub const SALSA20_BLOCK_SIZE: usize = 64;

const SIGMA: [u32; 4] = [0x61707865, 0x3320646e, 0x79622d32, 0x6b206574];
const TAU: [u32; 4] = [0x61707865, 0x3120646e, 0x79622d36, 0x6b206574];

#[inline]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[b] ^= state[a].wrapping_add(state[d]).rotate_left(7);
    state[c] ^= state[b].wrapping_add(state[a]).rotate_left(9);
    state[d] ^= state[c].wrapping_add(state[b]).rotate_left(13);
    state[a] ^= state[d].wrapping_add(state[c]).rotate_left(18);
}

/// One double round: four column quarter-rounds, four row quarter-rounds
#[inline]
fn double_round(state: &mut [u32; 16]) {
    quarter_round(state, 0, 4, 8, 12);
    quarter_round(state, 5, 9, 13, 1);
    quarter_round(state, 10, 14, 2, 6);
    quarter_round(state, 15, 3, 7, 11);

    quarter_round(state, 0, 1, 2, 3);
    quarter_round(state, 5, 6, 7, 4);
    quarter_round(state, 10, 11, 8, 9);
    quarter_round(state, 15, 12, 13, 14);
}

/// Salsa20 stream cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Salsa20 {
    state: [u32; 16],
    buffer: [u8; SALSA20_BLOCK_SIZE],
    position: usize,
    counter: u64,
}

impl Salsa20 {
    /// Create a Salsa20 instance with a 256-bit key
    pub fn new<const N: usize>(key: &[u8; SALSA20_KEY_SIZE], nonce: &Nonce<N>) -> Self
    where
        Nonce<N>: Salsa20Compatible,
    {
        let key_buf = SecretBuffer::new(*key);
        let key_bytes = key_buf.as_ref();

        let mut state = [0u32; 16];
        state[0] = SIGMA[0];
        for i in 0..4 {
            state[1 + i] = LittleEndian::read_u32(&key_bytes[i * 4..]);
        }
        state[5] = SIGMA[1];
        state[6] = LittleEndian::read_u32(&nonce.as_ref()[0..4]);
        state[7] = LittleEndian::read_u32(&nonce.as_ref()[4..8]);
        // state[8], state[9] hold the 64-bit block counter
        state[10] = SIGMA[2];
        for i in 0..4 {
            state[11 + i] = LittleEndian::read_u32(&key_bytes[16 + i * 4..]);
        }
        state[15] = SIGMA[3];

        Self {
            state,
            buffer: [0; SALSA20_BLOCK_SIZE],
            position: SALSA20_BLOCK_SIZE,
            counter: 0,
        }
    }

    /// Create a Salsa20 instance with a 128-bit key (the key is used for
    /// both halves, with the "expand 16-byte k" constants)
    pub fn new_128<const N: usize>(key: &[u8; 16], nonce: &Nonce<N>) -> Self
    where
        Nonce<N>: Salsa20Compatible,
    {
        let key_buf = SecretBuffer::new(*key);
        let key_bytes = key_buf.as_ref();

        let mut state = [0u32; 16];
        state[0] = TAU[0];
        for i in 0..4 {
            state[1 + i] = LittleEndian::read_u32(&key_bytes[i * 4..]);
        }
        state[5] = TAU[1];
        state[6] = LittleEndian::read_u32(&nonce.as_ref()[0..4]);
        state[7] = LittleEndian::read_u32(&nonce.as_ref()[4..8]);
        state[10] = TAU[2];
        for i in 0..4 {
            state[11 + i] = LittleEndian::read_u32(&key_bytes[i * 4..]);
        }
        state[15] = TAU[3];

        Self {
            state,
            buffer: [0; SALSA20_BLOCK_SIZE],
            position: SALSA20_BLOCK_SIZE,
            counter: 0,
        }
    }

    /// Generate the next keystream block into the buffer
    fn generate_keystream(&mut self) {
        let mut input = EphemeralSecret::new(self.state);
        input[8] = self.counter as u32;
        input[9] = (self.counter >> 32) as u32;

        let mut working = EphemeralSecret::new(*input.as_ref());
        for _ in 0..10 {
            double_round(&mut working);
        }

        for i in 0..16 {
            let word = working[i].wrapping_add(input[i]);
            LittleEndian::write_u32(&mut self.buffer[i * 4..], word);
        }

        self.position = 0;
        self.counter = self.counter.wrapping_add(1);
    }

    /// Encrypt or decrypt data in place
    pub fn process(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            if self.position >= SALSA20_BLOCK_SIZE {
                self.generate_keystream();
            }
            *byte ^= self.buffer[self.position];
            self.position += 1;
        }
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
        for byte in output.iter_mut() {
            *byte = 0;
        }
        self.position = SALSA20_BLOCK_SIZE;
        self.process(output);
    }

    /// Seek so the next generated keystream block is block
    /// `block_offset` of the stream
    pub fn seek(&mut self, block_offset: u64) {
        self.counter = block_offset;
        self.position = SALSA20_BLOCK_SIZE;
        self.buffer.zeroize();
    }
}

#[cfg(test)]
mod tests;
