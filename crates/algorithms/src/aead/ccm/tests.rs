use super::*;
use crate::block::aes::Aes128;
use crate::types::SecretBytes;
use hex;

fn rfc3610_cipher() -> Aes128 {
    let key = SecretBytes::<16>::from_slice(
        &hex::decode("c0c1c2c3c4c5c6c7c8c9cacbcccdcecf").unwrap(),
    )
    .unwrap();
    Aes128::new(&key)
}

#[test]
fn rfc3610_packet_vector_1() {
    let ccm = Ccm::new(
        rfc3610_cipher(),
        &hex::decode("00000003020100a0a1a2a3a4a5").unwrap(),
        8,
    )
    .unwrap();
    let aad = hex::decode("0001020304050607").unwrap();
    let plaintext = hex::decode("08090a0b0c0d0e0f101112131415161718191a1b1c1d1e").unwrap();

    let ciphertext = ccm.encrypt(&plaintext, Some(&aad)).unwrap();
    assert_eq!(
        hex::encode(&ciphertext),
        "588c979a61c663d2f066d0c2c0f989806d5f6b61dac38417e8d12cfdf926e0"
    );

    assert_eq!(ccm.decrypt(&ciphertext, Some(&aad)).unwrap(), plaintext);
}

#[test]
fn rfc3610_packet_vector_2() {
    let ccm = Ccm::new(
        rfc3610_cipher(),
        &hex::decode("00000004030201a0a1a2a3a4a5").unwrap(),
        8,
    )
    .unwrap();
    let aad = hex::decode("0001020304050607").unwrap();
    let plaintext = hex::decode("08090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f").unwrap();

    let ciphertext = ccm.encrypt(&plaintext, Some(&aad)).unwrap();
    assert_eq!(
        hex::encode(&ciphertext),
        "72c91a36e135f8cf291ca894085c87e3cc15c439c9e43a3ba091d56e10400916"
    );

    assert_eq!(ccm.decrypt(&ciphertext, Some(&aad)).unwrap(), plaintext);
}

#[test]
fn nonce_and_tag_extremes() {
    // 13-byte nonce, 10-byte tag
    let ccm = Ccm::new(Aes128::new(&SecretBytes::new([0x42; 16])), &[0x24; 13], 10).unwrap();
    let ciphertext = ccm.encrypt(&[0xaa; 32], Some(&[0x10; 16])).unwrap();
    assert_eq!(
        hex::encode(&ciphertext),
        "635c4a0ad5e5b48586cff9391560b6baf83711f821077f3ad612ec0f1220d2329de4a801f6dd432f8b3b"
    );
    assert_eq!(
        ccm.decrypt(&ciphertext, Some(&[0x10; 16])).unwrap(),
        vec![0xaa; 32]
    );

    // 7-byte nonce, full 16-byte tag, no AAD
    let ccm = Ccm::new(Aes128::new(&SecretBytes::new([0x42; 16])), &[0x24; 7], 16).unwrap();
    let ciphertext = ccm.encrypt(&[0xaa; 24], None).unwrap();
    assert_eq!(
        hex::encode(&ciphertext),
        "0874e09ab198f2271fb82fd1d33def5b3ca27d67db1f7c8b2164890de8ad8c19059ec758e608497a"
    );
    assert_eq!(ccm.decrypt(&ciphertext, None).unwrap(), vec![0xaa; 24]);
}

#[test]
fn tamper_detection() {
    let ccm = Ccm::new(Aes128::new(&SecretBytes::new([0x42; 16])), &[0x24; 13], 8).unwrap();
    let aad = [0x10; 4];
    let ciphertext = ccm.encrypt(&[0xaa; 19], Some(&aad)).unwrap();

    // ciphertext bit
    let mut bad = ciphertext.clone();
    bad[0] ^= 0x01;
    assert!(matches!(
        ccm.decrypt(&bad, Some(&aad)),
        Err(Error::Authentication { algorithm: "CCM" })
    ));

    // tag bit
    let mut bad = ciphertext.clone();
    let last = bad.len() - 1;
    bad[last] ^= 0x80;
    assert!(matches!(
        ccm.decrypt(&bad, Some(&aad)),
        Err(Error::Authentication { algorithm: "CCM" })
    ));

    // AAD bit
    assert!(matches!(
        ccm.decrypt(&ciphertext, Some(&[0x11, 0x10, 0x10, 0x10])),
        Err(Error::Authentication { algorithm: "CCM" })
    ));

    // missing AAD entirely
    assert!(ccm.decrypt(&ciphertext, None).is_err());
}

#[test]
fn construction_bounds() {
    let key = SecretBytes::new([0u8; 16]);
    assert!(Ccm::new(Aes128::new(&key), &[0u8; 6], 8).is_err());
    assert!(Ccm::new(Aes128::new(&key), &[0u8; 14], 8).is_err());
    assert!(Ccm::new(Aes128::new(&key), &[0u8; 12], 7).is_err());
    assert!(Ccm::new(Aes128::new(&key), &[0u8; 12], 0).is_err());
    assert!(Ccm::new(Aes128::new(&key), &[0u8; 12], 16).is_ok());
}

#[test]
fn message_length_field_overflow() {
    // 13-byte nonce leaves a 2-byte length field: 65536-byte messages
    // cannot be represented
    let ccm = Ccm::new(Aes128::new(&SecretBytes::new([0u8; 16])), &[0u8; 13], 8).unwrap();
    let big = vec![0u8; 65536];
    assert!(ccm.encrypt(&big, None).is_err());
    assert!(ccm.encrypt(&big[..65535], None).is_ok());
}
