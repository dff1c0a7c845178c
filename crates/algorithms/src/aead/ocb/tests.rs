use super::*;
use crate::block::aes::Aes128;
use crate::error::Error;
use crate::types::SecretBytes;
use hex;

fn rfc7253_ocb(nonce_hex: &str) -> Ocb<Aes128> {
    let key = SecretBytes::<16>::from_slice(
        &hex::decode("000102030405060708090a0b0c0d0e0f").unwrap(),
    )
    .unwrap();
    Ocb::new(Aes128::new(&key), &hex::decode(nonce_hex).unwrap(), 16).unwrap()
}

#[test]
fn rfc7253_empty_message() {
    let ocb = rfc7253_ocb("bbaa99887766554433221100");
    let ciphertext = ocb.encrypt(&[], None).unwrap();
    assert_eq!(hex::encode(&ciphertext), "785407bfffc8ad9edcc5520ac9111ee6");
    assert!(ocb.decrypt(&ciphertext, None).unwrap().is_empty());
}

#[test]
fn rfc7253_eight_bytes_with_aad() {
    let ocb = rfc7253_ocb("bbaa99887766554433221101");
    let aad = hex::decode("0001020304050607").unwrap();
    let plaintext = hex::decode("0001020304050607").unwrap();
    let ciphertext = ocb.encrypt(&plaintext, Some(&aad)).unwrap();
    assert_eq!(
        hex::encode(&ciphertext),
        "6820b3657b6f615a5725bda0d3b4eb3a257c9af1f8f03009"
    );
    assert_eq!(ocb.decrypt(&ciphertext, Some(&aad)).unwrap(), plaintext);
}

#[test]
fn rfc7253_aad_only_and_ct_only() {
    // AAD empty, ciphertext present
    let ocb = rfc7253_ocb("bbaa99887766554433221102");
    let plaintext = hex::decode("0001020304050607").unwrap();
    let ciphertext = ocb.encrypt(&plaintext, None).unwrap();
    assert_eq!(
        hex::encode(&ciphertext),
        "6dd42c17cbf9c7835dfd6e630e8f98eb3d2a49b0dc0f314e"
    );
}

#[test]
fn rfc7253_24_byte_message() {
    let ocb = rfc7253_ocb("bbaa99887766554433221106");
    let data = hex::decode("000102030405060708090a0b0c0d0e0f1011121314151617").unwrap();
    let ciphertext = ocb.encrypt(&data, Some(&data)).unwrap();
    assert_eq!(
        hex::encode(&ciphertext),
        "5ce88ec2e0692706a915c00aeb8b23968467b2cfbb580496923a4c5285b1f9ae693442ec9cdfb030"
    );
    assert_eq!(ocb.decrypt(&ciphertext, Some(&data)).unwrap(), data);
}

#[test]
fn forty_byte_message_exercises_table_growth() {
    let ocb = rfc7253_ocb("bbaa99887766554433221107");
    let data: Vec<u8> = (0..40).collect();
    let ciphertext = ocb.encrypt(&data, Some(&data)).unwrap();
    assert_eq!(
        hex::encode(&ciphertext),
        "1ca2207308c87c010756104d8840ce196cda7324e9be130b74bf92bfb8ae3210\
         f1634662484b8d2bc7f9da5f69c42c8faf71980643ca0337"
    );
    assert_eq!(ocb.decrypt(&ciphertext, Some(&data)).unwrap(), data);
}

#[test]
fn partial_final_block_no_aad() {
    let ocb = rfc7253_ocb("bbaa99887766554433221108");
    let data: Vec<u8> = (0..27).collect();
    let ciphertext = ocb.encrypt(&data, None).unwrap();
    assert_eq!(
        hex::encode(&ciphertext),
        "fed5b2062e331bd1d243dce4030bf42b3efdf8be9ad40fddde75f61b43f05d5a541f3a9a51983989a20d7f"
    );
    assert_eq!(ocb.decrypt(&ciphertext, None).unwrap(), data);
}

#[test]
fn tamper_detection() {
    let ocb = rfc7253_ocb("bbaa99887766554433221100");
    let aad = [0x33; 11];
    let ciphertext = ocb.encrypt(&[0x55; 21], Some(&aad)).unwrap();

    let mut bad = ciphertext.clone();
    bad[2] ^= 0x04;
    assert!(matches!(
        ocb.decrypt(&bad, Some(&aad)),
        Err(Error::Authentication { algorithm: "OCB" })
    ));

    let mut bad = ciphertext.clone();
    let last = bad.len() - 1;
    bad[last] ^= 0x01;
    assert!(matches!(
        ocb.decrypt(&bad, Some(&aad)),
        Err(Error::Authentication { algorithm: "OCB" })
    ));

    assert!(ocb.decrypt(&ciphertext, Some(&[0x33; 10])).is_err());
    assert!(ocb.decrypt(&ciphertext, Some(&aad)).is_ok());
}

#[test]
fn truncated_tags_round_trip() {
    let key = SecretBytes::new([0x42; 16]);
    for tag_len in [4usize, 8, 12, 16] {
        let ocb = Ocb::new(Aes128::new(&key), &[0x24; 12], tag_len).unwrap();
        let ciphertext = ocb.encrypt(&[0xaa; 33], None).unwrap();
        assert_eq!(ciphertext.len(), 33 + tag_len);
        assert_eq!(ocb.decrypt(&ciphertext, None).unwrap(), vec![0xaa; 33]);
    }
}

#[test]
fn construction_bounds() {
    let key = SecretBytes::new([0u8; 16]);
    assert!(Ocb::new(Aes128::new(&key), &[], 16).is_err());
    assert!(Ocb::new(Aes128::new(&key), &[0u8; 16], 16).is_err());
    assert!(Ocb::new(Aes128::new(&key), &[0u8; 12], 5).is_err());
    assert!(Ocb::new(Aes128::new(&key), &[0u8; 15], 16).is_ok());
}
