//! Block cipher modes of operation
//!
//! Each mode is a stateful worker over a [`BlockCipher`]: the worker owns
//! exactly the chaining state its algorithm needs (previous ciphertext,
//! keystream register, counter block) and consumes successive chunks via
//! `encrypt` / `decrypt`. A worker covers one message; create a fresh one
//! (or call the mode's reset, where offered) before touching another
//! message under the same key.
//!
//! [`BlockMode`] is the configuration sum type: callers that pick a mode
//! at run time build a [`ModeWorker`] from it and drive the common
//! chunk-processing interface.

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;
pub mod pcbc;

// Re-exports
pub use cbc::Cbc;
pub use cfb::{Cfb, CfbSegment};
pub use ctr::{CounterPosition, Ctr};
pub use ecb::Ecb;
pub use ofb::Ofb;
pub use pcbc::Pcbc;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::Zeroize;

use super::BlockCipher;
use crate::error::Result;

/// Runtime configuration for an unauthenticated block mode
///
/// IV and nonce lengths are validated when the worker is built, never
/// silently truncated or padded.
#[derive(Clone, Debug)]
pub enum BlockMode {
    /// Electronic codebook; whole blocks only, no chaining state
    Ecb,
    /// Cipher block chaining; IV must match the cipher block size
    Cbc {
        /// Initialization vector
        iv: Vec<u8>,
    },
    /// Propagating CBC; IV must match the cipher block size
    Pcbc {
        /// Initialization vector
        iv: Vec<u8>,
    },
    /// Cipher feedback; IV must match the cipher block size
    Cfb {
        /// Initialization vector
        iv: Vec<u8>,
        /// Feedback segment width
        segment: CfbSegment,
    },
    /// Output feedback; IV must match the cipher block size
    Ofb {
        /// Initialization vector
        iv: Vec<u8>,
    },
    /// Counter mode; the nonce prefixes the counter block
    Ctr {
        /// Nonce prefix (at most block size minus counter size bytes)
        nonce: Vec<u8>,
        /// Width of the big-endian wrapping counter suffix, 1 to 8 bytes
        counter_size: usize,
    },
}

impl BlockMode {
    /// Build the worker for this configuration over `cipher`
    pub fn build<B: BlockCipher + Zeroize>(self, cipher: B) -> Result<ModeWorker<B>> {
        Ok(match self {
            BlockMode::Ecb => ModeWorker::Ecb(Ecb::new(cipher)),
            BlockMode::Cbc { iv } => ModeWorker::Cbc(Cbc::from_iv(cipher, &iv)?),
            BlockMode::Pcbc { iv } => ModeWorker::Pcbc(Pcbc::from_iv(cipher, &iv)?),
            BlockMode::Cfb { iv, segment } => {
                ModeWorker::Cfb(Cfb::from_iv(cipher, &iv, segment)?)
            }
            BlockMode::Ofb { iv } => ModeWorker::Ofb(Ofb::from_iv(cipher, &iv)?),
            BlockMode::Ctr { nonce, counter_size } => ModeWorker::Ctr(Ctr::with_counter_params(
                cipher,
                &nonce,
                CounterPosition::Postfix,
                counter_size,
            )?),
        })
    }
}

/// A mode worker built from a [`BlockMode`] configuration
///
/// Dispatches the chunk-processing interface over the mode variants.
pub enum ModeWorker<B: BlockCipher + Zeroize> {
    /// ECB worker
    Ecb(Ecb<B>),
    /// CBC worker
    Cbc(Cbc<B>),
    /// PCBC worker
    Pcbc(Pcbc<B>),
    /// CFB worker
    Cfb(Cfb<B>),
    /// OFB worker
    Ofb(Ofb<B>),
    /// CTR worker
    Ctr(Ctr<B>),
}

impl<B: BlockCipher + Zeroize> ModeWorker<B> {
    /// Encrypt the next chunk of the message
    ///
    /// ECB, CBC, and PCBC require whole blocks; CFB, OFB, and CTR accept
    /// arbitrary lengths (a partial CFB chunk must be the final one).
    pub fn encrypt(&mut self, chunk: &[u8]) -> Result<Vec<u8>> {
        match self {
            ModeWorker::Ecb(worker) => worker.encrypt(chunk),
            ModeWorker::Cbc(worker) => worker.encrypt(chunk),
            ModeWorker::Pcbc(worker) => worker.encrypt(chunk),
            ModeWorker::Cfb(worker) => worker.encrypt(chunk),
            ModeWorker::Ofb(worker) => worker.process(chunk),
            ModeWorker::Ctr(worker) => worker.encrypt(chunk),
        }
    }

    /// Decrypt the next chunk of the message
    pub fn decrypt(&mut self, chunk: &[u8]) -> Result<Vec<u8>> {
        match self {
            ModeWorker::Ecb(worker) => worker.decrypt(chunk),
            ModeWorker::Cbc(worker) => worker.decrypt(chunk),
            ModeWorker::Pcbc(worker) => worker.decrypt(chunk),
            ModeWorker::Cfb(worker) => worker.decrypt(chunk),
            ModeWorker::Ofb(worker) => worker.process(chunk),
            ModeWorker::Ctr(worker) => worker.decrypt(chunk),
        }
    }
}
