//! Internal utilities shared by the crypta crates
//!
//! This crate collects the byte-level plumbing every algorithm crate needs:
//! constant-time comparison and selection, XOR over byte sequences, fixed-size
//! chunked iteration, and endianness conversion. Nothing here is a
//! cryptographic primitive on its own.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod chunks;
pub mod constant_time;
pub mod endian;
pub mod xor;

pub use constant_time::{ct_assign, ct_eq, ct_eq_choice, ct_select};
pub use xor::{xor, xor_in_place};
