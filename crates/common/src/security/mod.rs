//! Security primitives and memory safety utilities
//!
//! Foundational types for handling sensitive cryptographic material: every
//! key schedule, pad block, and intermediate secret in the crypta crates
//! lives in one of these wrappers.

pub mod memory;
pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

// Conditionally re-export SecretVec only when alloc feature is enabled
#[cfg(feature = "alloc")]
pub use secret::SecretVec;

// Re-export memory safety traits and barrier utilities
pub use memory::{barrier, SecureCompare};
