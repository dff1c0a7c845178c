use super::*;
use hex;

fn encrypt_hex(key_hex: &str, pt_hex: &str) -> String {
    let cipher = Blowfish::with_key(&hex::decode(key_hex).unwrap()).unwrap();
    let mut block = hex::decode(pt_hex).unwrap();
    cipher.encrypt_block(&mut block).unwrap();
    hex::encode(block)
}

#[test]
fn eric_young_variable_key_vectors() {
    assert_eq!(
        encrypt_hex("0000000000000000", "0000000000000000"),
        "4ef997456198dd78"
    );
    assert_eq!(
        encrypt_hex("ffffffffffffffff", "ffffffffffffffff"),
        "51866fd5b85ecb8a"
    );
    assert_eq!(
        encrypt_hex("3000000000000000", "1000000000000001"),
        "7d856f9a613063f2"
    );
}

#[test]
fn long_key_vector() {
    // "Who is John Galt?" as the key
    assert_eq!(
        encrypt_hex("57686f206973204a6f686e2047616c743f", "fedcba9876543210"),
        "cc91732b8022f684"
    );
}

#[test]
fn ascii_key_round_trip() {
    let cipher = Blowfish::with_key(b"abcdefgh").unwrap();
    let mut block = *b"12345678";
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(block), "ee69a226ed1c0939");
    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(&block, b"12345678");
}

#[test]
fn key_length_bounds() {
    assert!(Blowfish::with_key(&[0u8; 3]).is_err());
    assert!(Blowfish::with_key(&[0u8; 4]).is_ok());
    assert!(Blowfish::with_key(&[0u8; 56]).is_ok());
    assert!(Blowfish::with_key(&[0u8; 57]).is_err());
}

#[test]
fn block_length_is_enforced() {
    let cipher = Blowfish::with_key(b"testkey!").unwrap();
    let mut short = [0u8; 7];
    assert!(cipher.encrypt_block(&mut short).is_err());
    let mut long = [0u8; 16];
    assert!(cipher.encrypt_block(&mut long).is_err());
}
