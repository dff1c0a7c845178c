//! Arbitrary-precision integer arithmetic for the crypta library
//!
//! The core types of `crypta-bigint` are:
//!
//! - [`BigUint`]: heap-allocated unsigned big integer stored as a
//!   little-endian sequence of 32-bit words.
//! - [`BigInt`]: a sign-and-magnitude pair over [`BigUint`].
//!
//! Both are plain value types: assignment clones the word buffer, no two
//! values ever alias, and every mutating operation re-normalizes the
//! representation (no trailing zero words; zero is a single zero word).
//!
//! The operations cryptographic callers need are all here: full-precision
//! long division, modular exponentiation, binary GCD, modular inverse,
//! Miller-Rabin primality testing with a deterministic tier for small
//! inputs, and radix 2-36 string conversion.
//!
//! ```
//! use crypta_bigint::BigUint;
//!
//! let a = BigUint::from_str_radix("123456789012345678901234567890", 10).unwrap();
//! let b = BigUint::from(0x1_0000_0000u64);
//! let (q, r) = a.div_rem(&b).unwrap();
//! assert_eq!(&q * &b + &r, a);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

mod div;
mod error;
mod gcd;
mod int;
mod pow;
mod prime;
mod radix;
mod uint;

pub use error::{Error, Result};
pub use int::{BigInt, Sign};
pub use prime::DEFAULT_MILLER_RABIN_ROUNDS;
pub use uint::{BigUint, Word, WORD_BITS};
