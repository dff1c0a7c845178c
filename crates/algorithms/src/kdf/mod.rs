//! Password-based key derivation functions
//!
//! PBKDF2 (RFC 8018 section 5.2) over HMAC, and the legacy PBKDF1
//! (section 5.1) for compatibility with old PKCS formats. Both stretch a
//! low-entropy password through an iterated pseudorandom function.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::error::Result;

pub mod pbkdf1;
pub mod pbkdf2;

pub use pbkdf1::Pbkdf1;
pub use pbkdf2::Pbkdf2;

/// Common one-call interface for the password-based KDFs
pub trait KeyDerivationFunction {
    /// Static algorithm identifier
    const ALGORITHM_ID: &'static str;

    /// Derive `output_len` bytes from `password` and `salt` using
    /// `iterations` rounds of the underlying pseudorandom function
    fn derive(password: &[u8], salt: &[u8], iterations: u32, output_len: usize)
        -> Result<Vec<u8>>;
}
