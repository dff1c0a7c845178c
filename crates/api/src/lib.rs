//! Public API types for the crypta library
//!
//! This crate provides the surface shared by every crypta component: the
//! user-facing error taxonomy and the secret byte containers that key
//! material travels in. Algorithm crates convert their internal errors into
//! [`Error`] at the boundary.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::SecretBytes;
