//! Authenticated encryption modes over block ciphers
//!
//! GCM, CCM, and OCB bind a ciphertext and optional additional
//! authenticated data (AAD) into a tag that decryption verifies before
//! releasing any plaintext. Tag comparison is constant time across the
//! full configured tag length, and a mismatch surfaces as the single
//! authentication-failure error with the candidate plaintext discarded.

pub mod ccm;
pub mod gcm;
pub mod ocb;

pub use ccm::Ccm;
pub use gcm::Gcm;
pub use ocb::Ocb;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::Result;

/// One-shot authenticated cipher interface with a combined tag
///
/// `encrypt` appends the tag to the ciphertext; `decrypt` splits it back
/// off and verifies it. Both sides must be configured with the same tag
/// length and AAD.
pub trait AeadCipher {
    /// Encrypt `plaintext`, returning ciphertext with the tag appended
    fn encrypt(&self, plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>>;

    /// Verify and strip the trailing tag, returning the plaintext
    fn decrypt(&self, ciphertext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>>;

    /// Configured tag length in bytes
    fn tag_len(&self) -> usize;

    /// Algorithm name for error context
    fn algorithm(&self) -> &'static str;
}
