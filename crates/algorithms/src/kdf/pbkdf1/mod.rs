//! Password-Based Key Derivation Function 1 (RFC 8018 section 5.1)
//!
//! The legacy construction: `T_1 = H(P || S)`, `T_i = H(T_{i-1})`, output
//! the leading bytes of `T_c`. The derived key can never exceed the hash
//! output length, which is why PBKDF2 superseded it; PBKDF1 is here for
//! interoperability with PKCS #5 v1.5 era formats only.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use core::marker::PhantomData;
use zeroize::Zeroizing;

use crate::error::{validate, Error, Result};
use crate::hash::HashFunction;
use crate::kdf::KeyDerivationFunction;

/// PBKDF1 over hash function `H`
pub struct Pbkdf1<H: HashFunction + Clone> {
    _hash: PhantomData<H>,
}

impl<H> Pbkdf1<H>
where
    H: HashFunction + Clone,
    H::Output: AsRef<[u8]> + Clone,
{
    /// Derive `key_length` bytes from `password` and `salt`
    ///
    /// `key_length` must not exceed the digest length of `H`.
    pub fn derive(
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        key_length: usize,
    ) -> Result<Vec<u8>> {
        validate::parameter(iterations > 0, "iterations", "iteration count must be > 0")?;
        validate::parameter(key_length > 0, "key_length", "output length must be > 0")?;
        if key_length > H::output_size() {
            return Err(Error::Length {
                context: "PBKDF1 output length",
                expected: H::output_size(),
                actual: key_length,
            });
        }

        let mut hasher = H::new();
        hasher.update(password)?;
        hasher.update(salt)?;
        let mut t = Zeroizing::new(hasher.finalize()?.as_ref().to_vec());

        for _ in 1..iterations {
            t = Zeroizing::new(H::digest(&t)?.as_ref().to_vec());
        }

        Ok(t[..key_length].to_vec())
    }
}

impl<H> KeyDerivationFunction for Pbkdf1<H>
where
    H: HashFunction + Clone,
    H::Output: AsRef<[u8]> + Clone,
{
    const ALGORITHM_ID: &'static str = "PBKDF1";

    fn derive(
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        output_len: usize,
    ) -> Result<Vec<u8>> {
        Self::derive(password, salt, iterations, output_len)
    }
}
