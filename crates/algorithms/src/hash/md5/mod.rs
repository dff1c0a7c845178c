//! MD5 hash function (RFC 1321)
//!
//! Kept for interoperability with legacy protocols and PBKDF1; MD5 is
//! cryptographically broken and must not be used where collision
//! resistance matters.

use byteorder::{ByteOrder, LittleEndian};
use zeroize::Zeroize;

use crate::error::Result;
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;
use crypta_params::utils::hash::{MD5_BLOCK_SIZE, MD5_OUTPUT_SIZE};

/// Integer parts of abs(sin(i + 1)) * 2^32, per RFC 1321
const K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Per-round left-rotation amounts
const S: [u32; 64] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22,
    5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20,
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23,
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

const INITIAL_STATE: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// Marker type for the MD5 algorithm
pub enum Md5Algorithm {}

impl HashAlgorithm for Md5Algorithm {
    const OUTPUT_SIZE: usize = MD5_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = MD5_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "MD5";
}

/// MD5 hash state
#[derive(Clone, Zeroize)]
pub struct Md5 {
    state: [u32; 4],
    buffer: [u8; MD5_BLOCK_SIZE],
    buffer_len: usize,
    total_len: u64,
}

impl Md5 {
    fn process_block(&mut self, block: &[u8]) {
        let mut m = [0u32; 16];
        for (i, word) in m.iter_mut().enumerate() {
            *word = LittleEndian::read_u32(&block[i * 4..]);
        }

        let [mut a, mut b, mut c, mut d] = self.state;

        for i in 0..64 {
            let (f, g) = match i / 16 {
                0 => ((b & c) | (!b & d), i),
                1 => ((d & b) | (!d & c), (5 * i + 1) % 16),
                2 => (b ^ c ^ d, (3 * i + 5) % 16),
                _ => (c ^ (b | !d), (7 * i) % 16),
            };
            let tmp = d;
            d = c;
            c = b;
            b = b.wrapping_add(
                a.wrapping_add(f)
                    .wrapping_add(K[i])
                    .wrapping_add(m[g])
                    .rotate_left(S[i]),
            );
            a = tmp;
        }

        self.state[0] = self.state[0].wrapping_add(a);
        self.state[1] = self.state[1].wrapping_add(b);
        self.state[2] = self.state[2].wrapping_add(c);
        self.state[3] = self.state[3].wrapping_add(d);
    }
}

impl HashFunction for Md5 {
    type Algorithm = Md5Algorithm;
    type Output = Digest<MD5_OUTPUT_SIZE>;

    fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0u8; MD5_BLOCK_SIZE],
            buffer_len: 0,
            total_len: 0,
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        let mut rest = data;
        if self.buffer_len > 0 {
            let take = (MD5_BLOCK_SIZE - self.buffer_len).min(rest.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&rest[..take]);
            self.buffer_len += take;
            rest = &rest[take..];
            if self.buffer_len == MD5_BLOCK_SIZE {
                let block = self.buffer;
                self.process_block(&block);
                self.buffer_len = 0;
            }
        }

        while rest.len() >= MD5_BLOCK_SIZE {
            let (block, tail) = rest.split_at(MD5_BLOCK_SIZE);
            let mut copy = [0u8; MD5_BLOCK_SIZE];
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

        // one pad byte, then zeros to 56 mod 64, then the length
        self.update(&[0x80])?;
        while self.buffer_len != 56 {
            self.update(&[0])?;
        }
        let mut length_bytes = [0u8; 8];
        LittleEndian::write_u64(&mut length_bytes, bit_len);
        self.update(&length_bytes)?;
        debug_assert_eq!(self.buffer_len, 0);

        let mut digest = [0u8; MD5_OUTPUT_SIZE];
        for (i, &word) in self.state.iter().enumerate() {
            LittleEndian::write_u32(&mut digest[i * 4..], word);
        }

        *self = Self::new();
        Ok(Digest::new(digest))
    }
}

#[cfg(test)]
mod tests;
