use super::*;
use hex;

#[test]
fn test_hchacha20_subkey_derivation() {
    // draft-irtf-cfrg-xchacha test vector
    let key = SecretBuffer::new({
        let mut k = [0u8; 32];
        for (i, byte) in k.iter_mut().enumerate() {
            *byte = i as u8;
        }
        k
    });
    let nonce = hex::decode("000000090000004a0000000031415927").unwrap();
    let subkey = hchacha20(&key, &nonce);
    assert_eq!(
        hex::encode(subkey.as_ref()),
        "82413b4227b27bfed30e42508a877d73a0f9e4d58a74a853c12ec41326d3ecdc"
    );
}

#[test]
fn test_xchacha20_draft_vector() {
    let key: [u8; 32] = hex::decode(
        "808182838485868788898a8b8c8d8e8f909192939495969798999a9b9c9d9e9f",
    )
    .unwrap()
    .try_into()
    .unwrap();
    let nonce = Nonce::<24>::from_slice(
        &hex::decode("404142434445464748494a4b4c4d4e4f5051525354555658").unwrap(),
    )
    .unwrap();

    let mut data = hex::decode(
        "5468652064686f6c65202870726f6e6f756e6365642022646f6c652229206973\
         20616c736f206b6e6f776e2061732074686520417369617469632077696c6420\
         646f672c2072656420646f672c20616e642077686973746c696e6720646f672e\
         2049742069732061626f7574207468652073697a65206f662061204765726d61\
         6e20736865706865726420627574206c6f6f6b73206d6f7265206c696b652061\
         206c6f6e672d6c656767656420666f782e205468697320686967686c7920656c\
         757369766520616e6420736b696c6c6564206a756d70657220697320636c6173\
         736966696564207769746820776f6c7665732c20636f796f7465732c206a6163\
         6b616c732c20616e6420666f78657320696e20746865207461786f6e6f6d6963\
         2066616d696c792043616e696461652e",
    )
    .unwrap();

    let mut cipher = XChaCha20::with_counter(&key, &nonce, 1);
    cipher.process(&mut data);
    assert_eq!(
        hex::encode(&data),
        "7d0a2e6b7f7c65a236542630294e063b7ab9b555a5d5149aa21e4ae1e4fbce87\
         ecc8e08a8b5e350abe622b2ffa617b202cfad72032a3037e76ffdcdc4376ee05\
         3a190d7e46ca1de04144850381b9cb29f051915386b8a710b8ac4d027b8b050f\
         7cba5854e028d564e453b8a968824173fc16488b8970cac828f11ae53cabd201\
         12f87107df24ee6183d2274fe4c8b1485534ef2c5fbc1ec24bfc3663efaa08bc\
         047d29d25043532db8391a8a3d776bf4372a6955827ccb0cdd4af403a7ce4c63\
         d595c75a43e045f0cce1f29c8b93bd65afc5974922f214a40b7c402cdb91ae73\
         c0b63615cdad0480680f16515a7ace9d39236464328a37743ffc28f4ddb324f4\
         d0f5bbdc270c65b1749a6efff1fbaa09536175ccd29fb9e6057b307320d31683\
         8a9c71f70b5b5907a66f7ea49aadc409"
    );
}

#[test]
fn test_round_trip() {
    let key = [0x01u8; 32];
    let nonce = Nonce::<24>::new([0x02; 24]);

    let mut data = b"hello xchacha twenty!".to_vec();
    let mut enc = XChaCha20::new(&key, &nonce);
    enc.encrypt(&mut data);
    assert_eq!(
        hex::encode(&data),
        "dede628db0ccecbe36dff0a7533dc3e2847cd739d0"
    );

    let mut dec = XChaCha20::new(&key, &nonce);
    dec.decrypt(&mut data);
    assert_eq!(data, b"hello xchacha twenty!");
}
