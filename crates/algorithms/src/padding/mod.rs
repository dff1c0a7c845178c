//! Padding schemes for block cipher modes
//!
//! Block modes operate on whole blocks; these schemes extend a message to
//! a block boundary and strip the extension after decryption. PKCS#7 is
//! the interoperable default. Zero padding cannot represent messages that
//! end in zero bytes and is provided for formats that require it; the
//! no-op scheme is for callers that manage alignment themselves.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::{Error, Result};

/// A reversible block padding scheme
pub trait Padding {
    /// Extend `data` to a multiple of `block_size` bytes
    fn pad(&self, data: &[u8], block_size: usize) -> Vec<u8>;

    /// Strip the padding from `data`; fails on malformed padding
    fn unpad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>>;

    /// Name of the scheme for error reporting
    fn name(&self) -> &'static str;
}

/// PKCS#7 padding (RFC 5652): append `n` bytes of value `n`
///
/// A message already at a block boundary gains a full block of padding,
/// so removal is always unambiguous.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pkcs7;

impl Padding for Pkcs7 {
    fn pad(&self, data: &[u8], block_size: usize) -> Vec<u8> {
        debug_assert!(block_size > 0 && block_size < 256);
        let pad_len = block_size - (data.len() % block_size);
        let mut out = Vec::with_capacity(data.len() + pad_len);
        out.extend_from_slice(data);
        out.resize(data.len() + pad_len, pad_len as u8);
        out
    }

    fn unpad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        let pad_len = match data.last() {
            Some(&last) => last as usize,
            None => return Err(Error::InvalidPadding { scheme: "PKCS#7" }),
        };
        if pad_len == 0 || pad_len > block_size || pad_len > data.len() {
            return Err(Error::InvalidPadding { scheme: "PKCS#7" });
        }
        let boundary = data.len() - pad_len;
        if data[boundary..].iter().any(|&b| b as usize != pad_len) {
            return Err(Error::InvalidPadding { scheme: "PKCS#7" });
        }
        Ok(data[..boundary].to_vec())
    }

    fn name(&self) -> &'static str {
        "PKCS#7"
    }
}

/// Zero padding: fill to the boundary with zero bytes
///
/// Removal strips every trailing zero, so a message whose real content
/// ends in zeros does not round-trip; callers must know their data. A
/// message already at a block boundary gains nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroPadding;

impl Padding for ZeroPadding {
    fn pad(&self, data: &[u8], block_size: usize) -> Vec<u8> {
        debug_assert!(block_size > 0);
        let remainder = data.len() % block_size;
        let pad_len = if remainder == 0 { 0 } else { block_size - remainder };
        let mut out = Vec::with_capacity(data.len() + pad_len);
        out.extend_from_slice(data);
        out.resize(data.len() + pad_len, 0);
        out
    }

    fn unpad(&self, data: &[u8], _block_size: usize) -> Result<Vec<u8>> {
        let end = data
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |index| index + 1);
        Ok(data[..end].to_vec())
    }

    fn name(&self) -> &'static str {
        "zero"
    }
}

/// No padding: input passes through unchanged in both directions
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPadding;

impl Padding for NoPadding {
    fn pad(&self, data: &[u8], _block_size: usize) -> Vec<u8> {
        data.to_vec()
    }

    fn unpad(&self, data: &[u8], _block_size: usize) -> Result<Vec<u8>> {
        Ok(data.to_vec())
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

#[cfg(test)]
mod tests;
