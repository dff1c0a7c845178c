//! Type-safe wrappers for cryptographic values
//!
//! Domain-specific byte containers with compile-time sizes: nonces, salts,
//! authentication tags, and digests. Algorithm compatibility is expressed
//! through sealed marker traits on the container sizes, so passing a
//! 12-byte nonce to a mode that needs 16 fails at compile time where the
//! size is algorithm-fixed, and at construction time otherwise.

// Submodules
pub mod digest;
pub mod nonce;
pub mod salt;
pub mod tag;

// Sealed trait module (not public)
pub(crate) mod sealed;

// Re-export main types
pub use digest::Digest;
pub use nonce::Nonce;
pub use salt::Salt;
pub use tag::Tag;

// Import and re-export core types
pub use crypta_api::types::SecretBytes;

// Import and re-export security types from crypta-common
pub use crypta_common::security::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

use rand::{CryptoRng, RngCore};

/// Trait for cryptographic types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}

/// Trait for cryptographic types that can be randomly generated
pub trait RandomGeneration: Sized {
    /// Generate a random instance using the provided RNG
    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> crate::error::Result<Self>;
}

/// Trait for types that have a fixed size
pub trait FixedSize {
    /// Get the size in bytes
    fn size() -> usize;
}

// Re-export algorithm compatibility traits from submodules
pub use nonce::{
    AesCtrCompatible, AesGcmCompatible, BlockIvCompatible, ChaCha20Compatible, RabbitIvCompatible,
    Salsa20Compatible, XChaCha20Compatible,
};

pub use salt::Pbkdf2Compatible;

pub use tag::{GcmCompatible, HmacCompatible};
