//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Blowfish block size in bytes
pub const BLOWFISH_BLOCK_SIZE: usize = 8;

/// Minimum Blowfish key size in bytes
pub const BLOWFISH_MIN_KEY_SIZE: usize = 4;

/// Maximum Blowfish key size in bytes
pub const BLOWFISH_MAX_KEY_SIZE: usize = 56;

/// ChaCha20 key size in bytes
pub const CHACHA20_KEY_SIZE: usize = 32;

/// ChaCha20 nonce size in bytes
pub const CHACHA20_NONCE_SIZE: usize = 12;

/// ChaCha20 block size in bytes
pub const CHACHA20_BLOCK_SIZE: usize = 64;

/// XChaCha20 nonce size in bytes
pub const XCHACHA20_NONCE_SIZE: usize = 24;

/// Salsa20 key size in bytes
pub const SALSA20_KEY_SIZE: usize = 32;

/// Salsa20 nonce size in bytes
pub const SALSA20_NONCE_SIZE: usize = 8;

/// Salsa20 block size in bytes
pub const SALSA20_BLOCK_SIZE: usize = 64;

/// Rabbit key size in bytes
pub const RABBIT_KEY_SIZE: usize = 16;

/// Rabbit IV size in bytes
pub const RABBIT_IV_SIZE: usize = 8;

/// Rabbit keystream block size in bytes
pub const RABBIT_BLOCK_SIZE: usize = 16;

/// GCM default tag size in bytes
pub const GCM_TAG_SIZE: usize = 16;

/// Tag lengths accepted by GCM and OCB, in bytes
pub const AEAD_TAG_SIZES: [usize; 7] = [4, 8, 12, 13, 14, 15, 16];

/// Tag lengths accepted by CCM, in bytes (RFC 3610 valid M values)
pub const CCM_TAG_SIZES: [usize; 7] = [4, 6, 8, 10, 12, 14, 16];

/// Minimum CCM nonce size in bytes
pub const CCM_MIN_NONCE_SIZE: usize = 7;

/// Maximum CCM nonce size in bytes
pub const CCM_MAX_NONCE_SIZE: usize = 13;

/// Maximum OCB nonce size in bytes (RFC 7253)
pub const OCB_MAX_NONCE_SIZE: usize = 15;
