//! Constant values for crypta cryptographic operations
//!
//! Process-wide read-only constants shared across the crypta crates. Plain
//! static data only: nothing in this crate is computed at run time.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod utils;
