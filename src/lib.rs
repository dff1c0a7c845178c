//! # crypta
//!
//! A pure-Rust cryptography library: block and stream ciphers, the full
//! family of cipher modes of operation (ECB, CBC, PCBC, CFB, OFB, CTR, and
//! the authenticated GCM, CCM, and OCB), hash functions, HMAC,
//! password-based key derivation, padding schemes, a small DER codec, and
//! arbitrary-precision integer arithmetic.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! crypta = "0.6"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - `crypta-algorithms`: ciphers, modes, hashes, MACs, KDFs
//! - `crypta-bigint`: arbitrary-precision integers
//! - `crypta-api`: the shared error taxonomy and secret containers
//! - `crypta-common` / `crypta-internal` / `crypta-params`: security
//!   memory types, byte-level utilities, and algorithm constants
//!
//! ## Example
//!
//! ```
//! use crypta::prelude::*;
//!
//! let key = SecretBytes::<16>::new([0x2b; 16]);
//! let nonce = Nonce::<12>::new([0x24; 12]);
//! let gcm = Gcm::new(Aes128::new(&key), &nonce).unwrap();
//!
//! let sealed = gcm.encrypt(b"attack at dawn", Some(b"header")).unwrap();
//! let opened = gcm.decrypt(&sealed, Some(b"header")).unwrap();
//! assert_eq!(opened, b"attack at dawn");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Core re-exports (always available)
pub use crypta_api as api;
pub use crypta_bigint as bigint;
pub use crypta_common as common;
pub use crypta_internal as internal;
pub use crypta_params as params;

pub use crypta_algorithms as algorithms;

/// Common imports for crypta users
pub mod prelude {
    pub use crate::algorithms::block::{
        Aes128, Aes192, Aes256, BlockCipher, Blowfish, Cbc, Cfb, CfbSegment, CipherAlgorithm,
        Ctr, Ecb, Ofb, Pcbc,
    };
    pub use crate::algorithms::hash::{
        Crc16, Crc32, Crc32c, HashFunction, Md5, Sha1, Sha224, Sha256, Sha384, Sha512,
    };
    pub use crate::algorithms::mac::Hmac;
    pub use crate::algorithms::padding::{NoPadding, Padding, Pkcs7, ZeroPadding};
    pub use crate::algorithms::stream::{ChaCha20, Rabbit, Salsa20, StreamCipher, XChaCha20};
    pub use crate::algorithms::types::{Digest, Nonce, Salt, SecretBytes, Tag};

    pub use crate::algorithms::aead::{AeadCipher, Ccm, Gcm, Ocb};
    pub use crate::algorithms::kdf::{KeyDerivationFunction, Pbkdf1, Pbkdf2};

    pub use crate::bigint::{BigInt, BigUint, Sign};

    pub use crate::api::{Error, Result};

    pub use crate::common::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

    #[cfg(feature = "alloc")]
    pub use crate::common::SecretVec;
}
