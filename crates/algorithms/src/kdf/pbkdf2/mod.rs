//! Password-Based Key Derivation Function 2 (RFC 8018 section 5.2)
//!
//! PBKDF2 applies HMAC over the password, salt, and a block counter, then
//! chains and XOR-folds the result `iterations` times per output block.
//! Output blocks are independent, so any key length up to
//! `(2^32 - 1) * hash_len` can be derived.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use core::marker::PhantomData;
use zeroize::Zeroizing;

use crate::error::{validate, Error, Result};
use crate::hash::HashFunction;
use crate::kdf::KeyDerivationFunction;
use crate::mac::hmac::Hmac;
use byteorder::{BigEndian, ByteOrder};

/// PBKDF2 over HMAC with hash function `H`
pub struct Pbkdf2<H: HashFunction + Clone> {
    _hash: PhantomData<H>,
}

impl<H> Pbkdf2<H>
where
    H: HashFunction + Clone,
    H::Output: AsRef<[u8]> + Clone,
{
    /// Derive `key_length` bytes from `password` and `salt`
    pub fn derive(
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        key_length: usize,
    ) -> Result<Vec<u8>> {
        validate::parameter(iterations > 0, "iterations", "iteration count must be > 0")?;
        validate::parameter(key_length > 0, "key_length", "output length must be > 0")?;

        let hash_len = H::output_size();
        let block_count = key_length.div_ceil(hash_len);
        if block_count > 0xFFFF_FFFF {
            return Err(Error::Length {
                context: "PBKDF2 output length",
                expected: 0xFFFF_FFFF * hash_len,
                actual: key_length,
            });
        }

        let mut derived = Zeroizing::new(Vec::with_capacity(key_length));
        for block_index in 1..=block_count as u32 {
            let block = Self::derive_block(password, salt, iterations, block_index)?;
            let take = hash_len.min(key_length - derived.len());
            derived.extend_from_slice(&block[..take]);
        }

        Ok(derived.to_vec())
    }

    /// The F function of RFC 8018: U_1 = PRF(P, S || INT(i)),
    /// U_j = PRF(P, U_{j-1}), output the XOR of all U_j
    fn derive_block(
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        block_index: u32,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let mut index_bytes = [0u8; 4];
        BigEndian::write_u32(&mut index_bytes, block_index);

        let mut mac = Hmac::<H>::new(password)?;
        mac.update(salt)?;
        mac.update(&index_bytes)?;
        let mut u = Zeroizing::new(mac.finalize()?);

        let mut acc = Zeroizing::new(u.to_vec());
        for _ in 1..iterations {
            u = Zeroizing::new(Hmac::<H>::mac(password, &u)?);
            for (a, b) in acc.iter_mut().zip(u.iter()) {
                *a ^= b;
            }
        }

        Ok(acc)
    }
}

impl<H> KeyDerivationFunction for Pbkdf2<H>
where
    H: HashFunction + Clone,
    H::Output: AsRef<[u8]> + Clone,
{
    const ALGORITHM_ID: &'static str = "PBKDF2";

    fn derive(
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        output_len: usize,
    ) -> Result<Vec<u8>> {
        Self::derive(password, salt, iterations, output_len)
    }
}

#[cfg(test)]
mod tests;
