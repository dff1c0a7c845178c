//! XOR helpers for byte sequences
//!
//! Chaining modes XOR whole blocks constantly; these helpers keep the loops
//! in one place. Inputs of unequal length are combined over the common
//! prefix, which is the behavior every segmented mode (CFB-8, final partial
//! CTR block) relies on.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// XOR `src` into `dst` in place over the common prefix of the two slices
#[inline]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}

/// XOR two byte slices into a new buffer, truncated to the shorter input
#[cfg(any(feature = "alloc", feature = "std"))]
pub fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_length() {
        assert_eq!(xor(&[0xff, 0x0f], &[0x0f, 0xff]), vec![0xf0, 0xf0]);
    }

    #[test]
    fn unequal_length_truncates() {
        assert_eq!(xor(&[0xaa, 0xbb, 0xcc], &[0xff]), vec![0x55]);
        assert_eq!(xor(&[], &[0xff]), Vec::<u8>::new());
    }

    #[test]
    fn in_place_common_prefix() {
        let mut dst = [0x01u8, 0x02, 0x03];
        xor_in_place(&mut dst, &[0xff, 0xff]);
        assert_eq!(dst, [0xfe, 0xfd, 0x03]);
    }
}
