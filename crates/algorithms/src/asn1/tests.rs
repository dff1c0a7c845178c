use super::*;
use crypta_bigint::{BigInt, BigUint, Sign};
use hex;

fn int(v: i64) -> DerValue {
    DerValue::Integer(BigInt::from(v))
}

#[test]
fn integer_encodings() {
    let cases: [(i64, &str); 7] = [
        (0, "020100"),
        (127, "02017f"),
        (128, "02020080"),
        (256, "02020100"),
        (-1, "0201ff"),
        (-128, "020180"),
        (-129, "0202ff7f"),
    ];
    for (value, expected) in cases {
        let encoded = int(value).encode();
        assert_eq!(hex::encode(&encoded), expected, "encoding {}", value);
        assert_eq!(DerValue::decode(&encoded).unwrap(), int(value));
    }
}

#[test]
fn large_integer_round_trip() {
    let magnitude = BigUint::from_str_radix(
        "ffeeddccbbaa99887766554433221100f0e0d0c0b0a090807060504030201000",
        16,
    )
    .unwrap();
    let value = DerValue::Integer(BigInt::from_biguint(Sign::Plus, magnitude));
    let encoded = value.encode();
    // leading 0xff byte needs a zero pad, so the body is 33 bytes
    assert_eq!(encoded[1], 33);
    assert_eq!(DerValue::decode(&encoded).unwrap(), value);
}

#[test]
fn sequence_and_octet_string() {
    let value = DerValue::Sequence(vec![
        int(65537),
        DerValue::OctetString(vec![0xde, 0xad, 0xbe, 0xef]),
        DerValue::Null,
    ]);
    let encoded = value.encode();
    assert_eq!(hex::encode(&encoded), "300d02030100010404deadbeef0500");
    assert_eq!(DerValue::decode(&encoded).unwrap(), value);
}

#[test]
fn long_form_lengths() {
    let value = DerValue::OctetString(vec![0xab; 300]);
    let encoded = value.encode();
    // 0x82 announces two length bytes: 0x012c = 300
    assert_eq!(&encoded[..4], &[0x04, 0x82, 0x01, 0x2c]);
    assert_eq!(DerValue::decode(&encoded).unwrap(), value);

    let nested = DerValue::Sequence(vec![value.clone(), value]);
    let encoded = nested.encode();
    assert_eq!(DerValue::decode(&encoded).unwrap(), nested);
}

#[test]
fn malformed_inputs_are_rejected() {
    // trailing garbage
    let mut encoded = int(7).encode();
    encoded.push(0x00);
    assert!(DerValue::decode(&encoded).is_err());

    // truncated body
    let encoded = int(65537).encode();
    assert!(DerValue::decode(&encoded[..encoded.len() - 1]).is_err());

    // indefinite length
    assert!(DerValue::decode(&[0x04, 0x80, 0x00, 0x00]).is_err());

    // non-minimal integer (extra 0x00 pad)
    assert!(DerValue::decode(&[0x02, 0x02, 0x00, 0x01]).is_err());

    // non-minimal length form
    assert!(DerValue::decode(&[0x04, 0x81, 0x01, 0xaa]).is_err());

    // unsupported tag
    assert!(DerValue::decode(&[0x06, 0x01, 0x2a]).is_err());

    // NULL with a body
    assert!(DerValue::decode(&[0x05, 0x01, 0x00]).is_err());

    // empty input
    assert!(DerValue::decode(&[]).is_err());
}
