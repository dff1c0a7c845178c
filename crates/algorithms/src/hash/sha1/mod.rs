//! SHA-1 hash function (FIPS 180-4)
//!
//! Retained for HMAC-SHA1 and PBKDF2 interoperability; SHA-1 collisions
//! are practical, so it must not anchor signatures or integrity on its
//! own.

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use crate::error::Result;
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;
use crypta_params::utils::hash::{SHA1_BLOCK_SIZE, SHA1_OUTPUT_SIZE};

const INITIAL_STATE: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Marker type for the SHA-1 algorithm
pub enum Sha1Algorithm {}

impl HashAlgorithm for Sha1Algorithm {
    const OUTPUT_SIZE: usize = SHA1_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA1_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-1";
}

/// SHA-1 hash state
#[derive(Clone, Zeroize)]
pub struct Sha1 {
    state: [u32; 5],
    buffer: [u8; SHA1_BLOCK_SIZE],
    buffer_len: usize,
    total_len: u64,
}

impl Sha1 {
    fn process_block(&mut self, block: &[u8]) {
        let mut w = [0u32; 80];
        for (i, word) in w.iter_mut().take(16).enumerate() {
            *word = BigEndian::read_u32(&block[i * 4..]);
        }
        for i in 16..80 {
            w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = self.state;

        for (i, &word) in w.iter().enumerate() {
            let (f, k) = match i / 20 {
                0 => ((b & c) | (!b & d), 0x5a827999),
                1 => (b ^ c ^ d, 0x6ed9eba1),
                2 => ((b & c) | (b & d) | (c & d), 0x8f1bbcdc),
                _ => (b ^ c ^ d, 0xca62c1d6),
            };
            let tmp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(word);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = tmp;
        }

        self.state[0] = self.state[0].wrapping_add(a);
        self.state[1] = self.state[1].wrapping_add(b);
        self.state[2] = self.state[2].wrapping_add(c);
        self.state[3] = self.state[3].wrapping_add(d);
        self.state[4] = self.state[4].wrapping_add(e);
    }
}

impl HashFunction for Sha1 {
    type Algorithm = Sha1Algorithm;
    type Output = Digest<SHA1_OUTPUT_SIZE>;

    fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0u8; SHA1_BLOCK_SIZE],
            buffer_len: 0,
            total_len: 0,
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        let mut rest = data;
        if self.buffer_len > 0 {
            let take = (SHA1_BLOCK_SIZE - self.buffer_len).min(rest.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&rest[..take]);
            self.buffer_len += take;
            rest = &rest[take..];
            if self.buffer_len == SHA1_BLOCK_SIZE {
                let block = self.buffer;
                self.process_block(&block);
                self.buffer_len = 0;
            }
        }

        while rest.len() >= SHA1_BLOCK_SIZE {
            let (block, tail) = rest.split_at(SHA1_BLOCK_SIZE);
            let mut copy = [0u8; SHA1_BLOCK_SIZE];
            copy.copy_from_slice(block);
            self.process_block(&copy);
            rest = tail;
        }

        if !rest.is_empty() {
            self.buffer[..rest.len()].copy_from_slice(rest);
            self.buffer_len = rest.len();
        }

        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let bit_len = self.total_len.wrapping_mul(8);

        self.update(&[0x80])?;
        while self.buffer_len != 56 {
            self.update(&[0])?;
        }
        let mut length_bytes = [0u8; 8];
        BigEndian::write_u64(&mut length_bytes, bit_len);
        self.update(&length_bytes)?;
        debug_assert_eq!(self.buffer_len, 0);

        let mut digest = [0u8; SHA1_OUTPUT_SIZE];
        for (i, &word) in self.state.iter().enumerate() {
            BigEndian::write_u32(&mut digest[i * 4..], word);
        }

        *self = Self::new();
        Ok(Digest::new(digest))
    }
}
