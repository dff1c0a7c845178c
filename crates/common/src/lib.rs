//! Shared functionality for the crypta library
//!
//! This crate provides the security-memory types used across the crypta
//! crates: zeroizing buffers for key material, ephemeral wrappers for
//! intermediate secrets, and memory barrier helpers.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

// Conditionally re-export SecretVec only when alloc feature is enabled
#[cfg(feature = "alloc")]
pub use security::SecretVec;

// Re-export constant-time comparison and memory barrier utilities
pub use security::memory::{barrier, SecureCompare};
