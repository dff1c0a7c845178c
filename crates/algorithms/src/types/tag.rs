//! Type-safe authentication tag with size guarantees

#[cfg(feature = "alloc")]
use alloc::string::String;

use core::fmt;
use core::ops::{Deref, DerefMut};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::types::sealed::Sealed;
use crate::types::{ConstantTimeEq as LocalConstantEq, FixedSize};

/// A cryptographic authentication tag with fixed size
#[derive(Clone, Zeroize)]
pub struct Tag<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Sealed for Tag<N> {}

impl<const N: usize> Tag<N> {
    /// Create a new tag from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Tag::from_slice", slice.len(), N)?;

        let mut data = [0u8; N];
        data.copy_from_slice(slice);

        Ok(Self { data })
    }

    /// Create a zeroed tag
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Length of the tag in bytes
    pub fn len(&self) -> usize {
        N
    }

    /// Whether the tag has zero length
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Convert to a hexadecimal string
    #[cfg(feature = "alloc")]
    pub fn to_hex(&self) -> String {
        hex::encode(self.data)
    }
}

impl<const N: usize> AsRef<[u8]> for Tag<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for Tag<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> Deref for Tag<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> DerefMut for Tag<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<const N: usize> PartialEq for Tag<N> {
    fn eq(&self, other: &Self) -> bool {
        // Equality on Tag values is constant time; verification paths in
        // the AEAD modes rely on it.
        self.data.ct_eq(&other.data).into()
    }
}

impl<const N: usize> Eq for Tag<N> {}

impl<const N: usize> LocalConstantEq for Tag<N> {
    fn ct_eq(&self, other: &Self) -> bool {
        self.data.ct_eq(&other.data).into()
    }
}

impl<const N: usize> FixedSize for Tag<N> {
    fn size() -> usize {
        N
    }
}

impl<const N: usize> fmt::Debug for Tag<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag<{}>({:?})", N, &self.data[..])
    }
}

/// Tag sizes a GCM instance may be configured with
pub trait GcmCompatible: Sealed {}
impl GcmCompatible for Tag<4> {}
impl GcmCompatible for Tag<8> {}
impl GcmCompatible for Tag<12> {}
impl GcmCompatible for Tag<13> {}
impl GcmCompatible for Tag<14> {}
impl GcmCompatible for Tag<15> {}
impl GcmCompatible for Tag<16> {}

/// Tag sizes usable as truncated HMAC outputs
pub trait HmacCompatible: Sealed {}
impl<const N: usize> HmacCompatible for Tag<N> {}
