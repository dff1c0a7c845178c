use super::*;
use proptest::prelude::*;

#[test]
fn pkcs7_basic_shapes() {
    // 12 bytes of data, 16-byte blocks: four bytes of 0x04
    let padded = Pkcs7.pad(&[0xaa; 12], 16);
    assert_eq!(padded.len(), 16);
    assert_eq!(&padded[12..], &[4, 4, 4, 4]);

    // block-aligned input gains a full padding block
    let padded = Pkcs7.pad(&[0xbb; 16], 16);
    assert_eq!(padded.len(), 32);
    assert_eq!(&padded[16..], &[16; 16]);

    // empty input is one full padding block
    let padded = Pkcs7.pad(&[], 8);
    assert_eq!(padded, vec![8; 8]);
}

#[test]
fn pkcs7_rejects_malformed() {
    // zero count
    assert!(Pkcs7.unpad(&[1, 2, 3, 0], 4).is_err());
    // count above the block size
    assert!(Pkcs7.unpad(&[9; 8], 8).is_err());
    assert!(Pkcs7.unpad(&[17; 16], 16).is_err());
    // count above the total length
    assert!(Pkcs7.unpad(&[3, 3], 4).is_err());
    // inconsistent padding bytes
    assert!(Pkcs7.unpad(&[1, 2, 2, 3], 4).is_err());
    // empty input
    assert!(Pkcs7.unpad(&[], 4).is_err());
}

#[test]
fn zero_padding_shapes() {
    let padded = ZeroPadding.pad(&[1, 2, 3], 8);
    assert_eq!(padded, vec![1, 2, 3, 0, 0, 0, 0, 0]);
    // aligned input is unchanged
    assert_eq!(ZeroPadding.pad(&[7; 8], 8), vec![7; 8]);
    assert_eq!(ZeroPadding.unpad(&[1, 2, 3, 0, 0, 0, 0, 0], 8).unwrap(), vec![1, 2, 3]);
    // all-zero input strips to nothing
    assert!(ZeroPadding.unpad(&[0; 8], 8).unwrap().is_empty());
}

#[test]
fn no_padding_passthrough() {
    assert_eq!(NoPadding.pad(&[1, 2, 3], 16), vec![1, 2, 3]);
    assert_eq!(NoPadding.unpad(&[1, 2, 3], 16).unwrap(), vec![1, 2, 3]);
}

proptest! {
    #[test]
    fn pkcs7_round_trips(data in proptest::collection::vec(any::<u8>(), 0..100),
                         block_size in prop_oneof![Just(8usize), Just(16usize)]) {
        let padded = Pkcs7.pad(&data, block_size);
        prop_assert_eq!(padded.len() % block_size, 0);
        prop_assert!(padded.len() > data.len());
        prop_assert_eq!(Pkcs7.unpad(&padded, block_size).unwrap(), data);
    }

    #[test]
    fn zero_padding_round_trips_when_data_ends_nonzero(
        mut data in proptest::collection::vec(any::<u8>(), 1..100),
        block_size in prop_oneof![Just(8usize), Just(16usize)],
    ) {
        if let Some(last) = data.last_mut() {
            *last = (*last).max(1);
        }
        let padded = ZeroPadding.pad(&data, block_size);
        prop_assert_eq!(padded.len() % block_size, 0);
        prop_assert_eq!(ZeroPadding.unpad(&padded, block_size).unwrap(), data);
    }
}
