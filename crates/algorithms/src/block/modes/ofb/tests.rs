use super::*;
use crate::block::Aes128;
use crate::types::SecretBytes;
use hex;

fn worker() -> Ofb<Aes128> {
    let key = SecretBytes::from_slice(&hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap())
        .unwrap();
    Ofb::from_iv(
        Aes128::new(&key),
        &hex::decode("000102030405060708090a0b0c0d0e0f").unwrap(),
    )
    .unwrap()
}

const NIST_PT: &str = "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51\
                       30c81c46a35ce411e5fbc1191a0a52eff69f2445df4f9b17ad2b417be66c3710";
const NIST_CT: &str = "3b3fd92eb72dad20333449f8e83cfb4a7789508d16918f03f53c52dac54ed825\
                       9740051e9c5fecf64344f7a82260edcc304c6528f659c77866a510d9c1d6ae5e";

#[test]
fn nist_sp800_38a_vectors() {
    let mut enc = worker();
    let ciphertext = enc.encrypt(&hex::decode(NIST_PT).unwrap()).unwrap();
    assert_eq!(hex::encode(&ciphertext), NIST_CT);

    let mut dec = worker();
    assert_eq!(hex::encode(dec.decrypt(&ciphertext).unwrap()), NIST_PT);
}

#[test]
fn keystream_is_message_independent() {
    // identical keystream whether fed zeros or data
    let mut a = worker();
    let keystream = a.process(&[0u8; 40]).unwrap();

    let pt = hex::decode(NIST_PT).unwrap();
    let mut b = worker();
    let ciphertext = b.process(&pt[..40]).unwrap();
    for i in 0..40 {
        assert_eq!(ciphertext[i] ^ pt[i], keystream[i]);
    }
}

#[test]
fn arbitrary_chunking_matches_one_shot() {
    let pt = hex::decode(NIST_PT).unwrap();
    let mut one_shot = worker();
    let expected = one_shot.process(&pt).unwrap();

    let mut chunked = worker();
    let mut got = Vec::new();
    for chunk in pt.chunks(7) {
        got.extend_from_slice(&chunked.process(chunk).unwrap());
    }
    assert_eq!(got, expected);
}
