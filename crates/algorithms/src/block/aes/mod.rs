//! AES block cipher (FIPS 197)
//!
//! ## Constant-Time Guarantees
//!
//! The S-box is computed from the GF(2^8) inverse with branchless
//! arithmetic instead of table lookups, so no memory access depends on
//! secret data, and the round loops are fenced against compiler
//! reordering. On platforms with AES hardware the dedicated instructions
//! are still the better choice; this core is the portable fallback.

use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(not(feature = "std"))]
use portable_atomic::{compiler_fence, Ordering};
#[cfg(feature = "std")]
use std::sync::atomic::{compiler_fence, Ordering};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};
use crate::types::SecretBytes;
use crypta_common::security::SecretBuffer;
use crypta_params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE,
};
use rand::{CryptoRng, RngCore};

/// Round constants for the key expansion
const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000, 0x20000000, 0x40000000,
    0x80000000, 0x1b000000, 0x36000000,
];

/// Multiply two bytes in GF(2^8) with the AES reduction polynomial
/// x^8 + x^4 + x^3 + x + 1, branch-free
#[inline(always)]
fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        let mask = (b & 1).wrapping_neg();
        product ^= a & mask;
        let high = a & 0x80;
        a <<= 1;
        a ^= ((high != 0) as u8) * 0x1B;
        b >>= 1;
    }
    product
}

/// GF(2^8) inverse via x^254, computed unconditionally so x == 0 costs
/// the same as everything else
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);

    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    y = gf_mul(y, x2);

    let mask = ((x != 0) as u8).wrapping_neg();
    y & mask
}

/// Forward S-box: affine transform of the field inverse
#[inline(always)]
fn sbox(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

/// Inverse S-box: undo the affine transform, then invert
#[inline(always)]
fn inv_sbox(x: u8) -> u8 {
    let y = x ^ 0x63;
    let u = y.rotate_left(1) ^ y.rotate_left(3) ^ y.rotate_left(6);
    gf_inv(u)
}

#[inline(always)]
fn mul2(byte: u8) -> u8 {
    let high = byte >> 7;
    (byte << 1) ^ (high * 0x1B)
}

#[inline(always)]
fn word_from_bytes(bytes: &[u8]) -> u32 {
    ((bytes[0] as u32) << 24) | ((bytes[1] as u32) << 16) | ((bytes[2] as u32) << 8) | bytes[3] as u32
}

#[inline(always)]
fn word_to_bytes(word: u32) -> [u8; 4] {
    [(word >> 24) as u8, (word >> 16) as u8, (word >> 8) as u8, word as u8]
}

#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let bytes = word_to_bytes(word);
    word_from_bytes(&[sbox(bytes[0]), sbox(bytes[1]), sbox(bytes[2]), sbox(bytes[3])])
}

fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
    compiler_fence(Ordering::SeqCst);
}

fn inv_sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
    compiler_fence(Ordering::SeqCst);
}

fn shift_rows(state: &mut [u8; 16]) {
    let tmp = *state;
    // row r rotates left by r positions, column-major layout
    for col in 0..4 {
        for row in 1..4 {
            state[col * 4 + row] = tmp[((col + row) % 4) * 4 + row];
        }
    }
}

fn inv_shift_rows(state: &mut [u8; 16]) {
    let tmp = *state;
    for col in 0..4 {
        for row in 1..4 {
            state[((col + row) % 4) * 4 + row] = tmp[col * 4 + row];
        }
    }
}

fn mix_columns(state: &mut [u8; 16]) {
    for col in 0..4 {
        let i = col * 4;
        let (s0, s1, s2, s3) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        state[i] = mul2(s0) ^ mul2(s1) ^ s1 ^ s2 ^ s3;
        state[i + 1] = s0 ^ mul2(s1) ^ mul2(s2) ^ s2 ^ s3;
        state[i + 2] = s0 ^ s1 ^ mul2(s2) ^ mul2(s3) ^ s3;
        state[i + 3] = mul2(s0) ^ s0 ^ s1 ^ s2 ^ mul2(s3);
    }
}

#[inline(always)]
fn mul9(b: u8) -> u8 {
    gf_mul(b, 9)
}
#[inline(always)]
fn mul11(b: u8) -> u8 {
    gf_mul(b, 11)
}
#[inline(always)]
fn mul13(b: u8) -> u8 {
    gf_mul(b, 13)
}
#[inline(always)]
fn mul14(b: u8) -> u8 {
    gf_mul(b, 14)
}

fn inv_mix_columns(state: &mut [u8; 16]) {
    for col in 0..4 {
        let i = col * 4;
        let (s0, s1, s2, s3) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        state[i] = mul14(s0) ^ mul11(s1) ^ mul13(s2) ^ mul9(s3);
        state[i + 1] = mul9(s0) ^ mul14(s1) ^ mul11(s2) ^ mul13(s3);
        state[i + 2] = mul13(s0) ^ mul9(s1) ^ mul14(s2) ^ mul11(s3);
        state[i + 3] = mul11(s0) ^ mul13(s1) ^ mul9(s2) ^ mul14(s3);
    }
}

fn add_round_key(state: &mut [u8; 16], round_key: &[u8]) {
    for i in 0..16 {
        state[i] ^= round_key[i];
    }
}

/// Expand an AES key of `NK` words into `RK` bytes of round keys
fn expand_key<const RK: usize>(key: &[u8], nk: usize) -> SecretBuffer<RK> {
    let total_words = RK / 4;
    let mut words = [0u32; 60]; // enough for AES-256
    for (i, chunk) in key.chunks_exact(4).enumerate() {
        words[i] = word_from_bytes(chunk);
    }
    for i in nk..total_words {
        let mut temp = words[i - 1];
        if i % nk == 0 {
            temp = sub_word(temp.rotate_left(8)) ^ RCON[i / nk];
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        words[i] = words[i - nk] ^ temp;
    }

    let mut bytes = [0u8; RK];
    for i in 0..total_words {
        bytes[i * 4..(i + 1) * 4].copy_from_slice(&word_to_bytes(words[i]));
    }
    words.zeroize();
    SecretBuffer::new(bytes)
}

/// Run the forward rounds over one block; `round_keys` holds
/// `(rounds + 1) * 16` bytes
fn encrypt_with_schedule(round_keys: &[u8], block: &mut [u8]) -> Result<()> {
    validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
    let rounds = round_keys.len() / 16 - 1;

    compiler_fence(Ordering::SeqCst);

    let mut state = [0u8; 16];
    state.copy_from_slice(block);

    add_round_key(&mut state, &round_keys[0..16]);
    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, &round_keys[round * 16..(round + 1) * 16]);
    }
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[rounds * 16..]);

    block.copy_from_slice(&state);
    state.zeroize();
    Ok(())
}

/// Run the inverse rounds over one block
fn decrypt_with_schedule(round_keys: &[u8], block: &mut [u8]) -> Result<()> {
    validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
    let rounds = round_keys.len() / 16 - 1;

    compiler_fence(Ordering::SeqCst);

    let mut state = [0u8; 16];
    state.copy_from_slice(block);

    add_round_key(&mut state, &round_keys[rounds * 16..]);
    for round in (1..rounds).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, &round_keys[round * 16..(round + 1) * 16]);
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, &round_keys[0..16]);

    block.copy_from_slice(&state);
    state.zeroize();
    Ok(())
}

macro_rules! aes_variant {
    ($name:ident, $key_size:expr, $schedule_bytes:expr, $nk:expr, $id:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct $name {
            round_keys: SecretBuffer<$schedule_bytes>,
        }

        impl CipherAlgorithm for $name {
            const KEY_SIZE: usize = $key_size;
            const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

            fn name() -> &'static str {
                $id
            }
        }

        impl BlockCipher for $name {
            type Key = SecretBytes<$key_size>;

            fn new(key: &Self::Key) -> Self {
                $name {
                    round_keys: expand_key::<$schedule_bytes>(key.as_ref(), $nk),
                }
            }

            fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
                encrypt_with_schedule(self.round_keys.as_ref(), block)
            }

            fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
                decrypt_with_schedule(self.round_keys.as_ref(), block)
            }

            fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
                let mut key_data = [0u8; $key_size];
                rng.fill_bytes(&mut key_data);
                SecretBytes::new(key_data)
            }
        }
    };
}

aes_variant!(Aes128, AES128_KEY_SIZE, 176, 4, "AES-128", "AES-128 block cipher");
aes_variant!(Aes192, AES192_KEY_SIZE, 208, 6, "AES-192", "AES-192 block cipher");
aes_variant!(Aes256, AES256_KEY_SIZE, 240, 8, "AES-256", "AES-256 block cipher");

#[cfg(test)]
mod tests;
