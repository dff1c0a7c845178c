//! ChaCha20 stream cipher (RFC 8439)

use byteorder::{ByteOrder, LittleEndian};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::types::nonce::ChaCha20Compatible;
use crate::types::Nonce;
use crypta_common::security::{EphemeralSecret, SecretBuffer};

/// Size of ChaCha20 key in bytes
pub const CHACHA20_KEY_SIZE: usize = 32;
/// Size of ChaCha20 nonce in bytes
pub const CHACHA20_NONCE_SIZE: usize = 12;
/// Size of ChaCha20 block in bytes
pub const CHACHA20_BLOCK_SIZE: usize = 64;

/// "expand 32-byte k" in little-endian words
pub(crate) const SIGMA: [u32; 4] = [0x61707865, 0x3320646e, 0x79622d32, 0x6b206574];

/// The ChaCha quarter round
#[inline]
pub(crate) fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// Ten double rounds (20 rounds total) over the state in place
#[inline]
pub(crate) fn run_rounds(state: &mut [u32; 16]) {
    for _ in 0..10 {
        // column rounds
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 1, 5, 9, 13);
        quarter_round(state, 2, 6, 10, 14);
        quarter_round(state, 3, 7, 11, 15);

        // diagonal rounds
        quarter_round(state, 0, 5, 10, 15);
        quarter_round(state, 1, 6, 11, 12);
        quarter_round(state, 2, 7, 8, 13);
        quarter_round(state, 3, 4, 9, 14);
    }
}

/// ChaCha20 stream cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    /// Key and nonce laid out as the initial state matrix
    state: [u32; 16],
    /// Buffered keystream block
    buffer: [u8; CHACHA20_BLOCK_SIZE],
    /// Current position in the buffer
    position: usize,
    /// Current block counter
    counter: u32,
}

impl ChaCha20 {
    /// Create a ChaCha20 instance with block counter zero
    pub fn new<const N: usize>(key: &[u8; CHACHA20_KEY_SIZE], nonce: &Nonce<N>) -> Self
    where
        Nonce<N>: ChaCha20Compatible,
    {
        Self::with_counter(key, nonce, 0)
    }

    /// Create a ChaCha20 instance starting at the given block counter
    pub fn with_counter<const N: usize>(
        key: &[u8; CHACHA20_KEY_SIZE],
        nonce: &Nonce<N>,
        counter: u32,
    ) -> Self
    where
        Nonce<N>: ChaCha20Compatible,
    {
        let key_buf = SecretBuffer::new(*key);
        Self::from_parts(&key_buf, nonce.as_ref(), counter)
    }

    /// Internal constructor over secured key bytes and a raw nonce slice
    pub(crate) fn from_parts(
        key: &SecretBuffer<CHACHA20_KEY_SIZE>,
        nonce: &[u8],
        counter: u32,
    ) -> Self {
        debug_assert_eq!(nonce.len(), CHACHA20_NONCE_SIZE);

        let mut state = [0u32; 16];
        state[..4].copy_from_slice(&SIGMA);

        let key_bytes = key.as_ref();
        for i in 0..8 {
            state[4 + i] = LittleEndian::read_u32(&key_bytes[i * 4..]);
        }

        state[12] = counter;
        state[13] = LittleEndian::read_u32(&nonce[0..4]);
        state[14] = LittleEndian::read_u32(&nonce[4..8]);
        state[15] = LittleEndian::read_u32(&nonce[8..12]);

        Self {
            state,
            buffer: [0; CHACHA20_BLOCK_SIZE],
            position: CHACHA20_BLOCK_SIZE, // force initial keystream generation
            counter,
        }
    }

    /// Generate the next keystream block into the buffer
    fn generate_keystream(&mut self) {
        let mut working_state = EphemeralSecret::new(self.state);
        working_state[12] = self.counter;

        run_rounds(&mut working_state);

        let mut output_state = EphemeralSecret::new([0u32; 16]);
        for i in 0..16 {
            let original = if i == 12 { self.counter } else { self.state[i] };
            output_state[i] = working_state[i].wrapping_add(original);
        }

        for i in 0..16 {
            LittleEndian::write_u32(&mut self.buffer[i * 4..], output_state[i]);
        }

        self.position = 0;
        self.counter = self.counter.wrapping_add(1);
    }

    /// Encrypt or decrypt data in place
    pub fn process(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            if self.position >= CHACHA20_BLOCK_SIZE {
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

    /// Generate keystream directly into an output buffer, starting at
    /// the next block boundary
    pub fn keystream(&mut self, output: &mut [u8]) {
        for byte in output.iter_mut() {
            *byte = 0;
        }
        self.position = CHACHA20_BLOCK_SIZE;
        self.process(output);
    }

    /// Seek so the next generated keystream block is block
    /// `block_offset` of the stream
    pub fn seek(&mut self, block_offset: u32) {
        self.counter = block_offset;
        self.position = CHACHA20_BLOCK_SIZE;
        self.buffer.zeroize();
    }

    /// Reset to the initial counter, discarding buffered keystream
    pub fn reset(&mut self) {
        self.counter = self.state[12];
        self.position = CHACHA20_BLOCK_SIZE;
        self.buffer.zeroize();
    }
}
