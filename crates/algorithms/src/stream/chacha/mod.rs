//! The ChaCha family of stream ciphers

pub mod chacha20;
pub mod xchacha20;

// Re-export for convenience
pub use chacha20::ChaCha20;
pub use xchacha20::XChaCha20;
