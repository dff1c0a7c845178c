//! Stream cipher implementations
//!
//! Keystream generators XORed over the data: ChaCha20 and XChaCha20
//! (RFC 8439 plus the extended-nonce construction), Salsa20, and Rabbit
//! (RFC 4503). Encryption and decryption are the same operation for all
//! of them, none authenticates anything on its own, and a nonce must
//! never repeat under one key.

/// ChaCha family of stream cipher implementations
pub mod chacha;
/// Rabbit stream cipher (RFC 4503)
pub mod rabbit;
/// Salsa20 stream cipher
pub mod salsa20;

// Re-export commonly used types
pub use chacha::chacha20::{ChaCha20, CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE};
pub use chacha::xchacha20::XChaCha20;
pub use rabbit::Rabbit;
pub use salsa20::Salsa20;

use crate::error::Result;
use crypta_params::utils::symmetric::{
    RABBIT_BLOCK_SIZE, RABBIT_IV_SIZE, RABBIT_KEY_SIZE, SALSA20_BLOCK_SIZE, SALSA20_KEY_SIZE,
    SALSA20_NONCE_SIZE, XCHACHA20_NONCE_SIZE,
};

/// Common trait for stream cipher implementations
pub trait StreamCipher {
    /// The key size in bytes
    const KEY_SIZE: usize;

    /// The nonce size in bytes
    const NONCE_SIZE: usize;

    /// The keystream block size in bytes
    const BLOCK_SIZE: usize;

    /// Process data in place; encryption and decryption are identical
    fn process(&mut self, data: &mut [u8]) -> Result<()>;

    /// Encrypt data in place
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Decrypt data in place
    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Generate keystream directly into an output buffer, starting at
    /// the next block boundary
    fn keystream(&mut self, output: &mut [u8]) -> Result<()>;
}

impl StreamCipher for ChaCha20 {
    const KEY_SIZE: usize = CHACHA20_KEY_SIZE;
    const NONCE_SIZE: usize = CHACHA20_NONCE_SIZE;
    const BLOCK_SIZE: usize = CHACHA20_BLOCK_SIZE;

    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data);
        Ok(())
    }

    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        self.keystream(output);
        Ok(())
    }
}

impl StreamCipher for XChaCha20 {
    const KEY_SIZE: usize = CHACHA20_KEY_SIZE;
    const NONCE_SIZE: usize = XCHACHA20_NONCE_SIZE;
    const BLOCK_SIZE: usize = CHACHA20_BLOCK_SIZE;

    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data);
        Ok(())
    }

    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        self.keystream(output);
        Ok(())
    }
}

impl StreamCipher for Salsa20 {
    const KEY_SIZE: usize = SALSA20_KEY_SIZE;
    const NONCE_SIZE: usize = SALSA20_NONCE_SIZE;
    const BLOCK_SIZE: usize = SALSA20_BLOCK_SIZE;

    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data);
        Ok(())
    }

    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        self.keystream(output);
        Ok(())
    }
}

impl StreamCipher for Rabbit {
    const KEY_SIZE: usize = RABBIT_KEY_SIZE;
    const NONCE_SIZE: usize = RABBIT_IV_SIZE;
    const BLOCK_SIZE: usize = RABBIT_BLOCK_SIZE;

    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data);
        Ok(())
    }

    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        self.keystream(output);
        Ok(())
    }
}
