//! Cryptographic primitives for the crypta library
//!
//! This crate implements the symmetric side of crypta: block ciphers and
//! their modes of operation (including the authenticated GCM, CCM, and OCB
//! modes), stream ciphers, hash functions, HMAC, password-based key
//! derivation, padding schemes, and a small DER encoder for the integers
//! the asymmetric layers exchange.
//!
//! # Security Features
//!
//! Sensitive material is handled through zeroizing containers, tag
//! comparison is constant-time, and secret-dependent table lookups are
//! avoided in the cipher cores.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Type system
pub mod types;
pub use types::{Digest, Nonce, Salt, SecretBytes, Tag};

// Block cipher implementations and modes of operation
pub mod block;
pub use block::{
    Aes128, Aes192, Aes256, BlockCipher, Blowfish, Cbc, Cfb, CipherAlgorithm, Ctr, Ecb, Ofb, Pcbc,
};

// Padding schemes for block modes
pub mod padding;
pub use padding::{NoPadding, Padding, Pkcs7, ZeroPadding};

// AEAD cipher implementations
#[cfg(feature = "alloc")]
pub mod aead;
#[cfg(feature = "alloc")]
pub use aead::{AeadCipher, Ccm, Gcm, Ocb};

// Hash function implementations
pub mod hash;
pub use hash::{
    Crc16, Crc32, Crc32c, HashAlgorithm, HashFunction, Md5, Sha1, Sha224, Sha256, Sha384, Sha512,
};

// MAC implementations
pub mod mac;
pub use mac::Hmac;

// Stream cipher implementations
pub mod stream;
pub use stream::{ChaCha20, Rabbit, Salsa20, XChaCha20};

// KDF implementations
#[cfg(feature = "alloc")]
pub mod kdf;
#[cfg(feature = "alloc")]
pub use kdf::{Pbkdf1, Pbkdf2};

// DER encoding for library consumers that exchange big integers
#[cfg(feature = "alloc")]
pub mod asn1;

// Re-export security types from crypta-common
pub use crypta_common::security::{
    barrier, EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard,
};
#[cfg(feature = "alloc")]
pub use crypta_common::security::SecretVec;
