use super::*;
use hex;

#[test]
fn test_ecrypt_set1_vector0_256() {
    let mut key = [0u8; 32];
    key[0] = 0x80;
    let mut cipher = Salsa20::new(&key, &Nonce::<8>::zeroed());
    let mut keystream = [0u8; 64];
    cipher.keystream(&mut keystream);
    assert_eq!(
        hex::encode(keystream),
        "e3be8fdd8beca2e3ea8ef9475b29a6e7003951e1097a5c38d23b7a5fad9f6844\
         b22c97559e2723c7cbbd3fe4fc8d9a0744652a83e72a9c461876af4d7ef1a117"
    );
}

#[test]
fn test_ecrypt_set1_vector0_128() {
    let mut key = [0u8; 16];
    key[0] = 0x80;
    let mut cipher = Salsa20::new_128(&key, &Nonce::<8>::zeroed());
    let mut keystream = [0u8; 64];
    cipher.keystream(&mut keystream);
    assert_eq!(
        hex::encode(keystream),
        "4dfa5e481da23ea09a31022050859936da52fcee218005164f267cb65f5cfd7f\
         2b4f97e0ff16924a52df269515110a07f9e460bc65ef95da58f740b7d1dbb0aa"
    );
}

#[test]
fn test_zero_key_keystream() {
    let mut cipher = Salsa20::new(&[0u8; 32], &Nonce::<8>::zeroed());
    let mut keystream = [0u8; 32];
    cipher.keystream(&mut keystream);
    assert_eq!(
        hex::encode(keystream),
        "9a97f65b9b4c721b960a672145fca8d4e32e67f9111ea979ce9c4826806aeee6"
    );
}

#[test]
fn test_message_encryption_round_trip() {
    let key: [u8; 32] = (0..32).collect::<Vec<u8>>().try_into().unwrap();
    let nonce = Nonce::<8>::new([0, 1, 2, 3, 4, 5, 6, 7]);

    let mut data = b"Attack at dawn! Attack at dawn! Attack at dawn!!".to_vec();
    let mut enc = Salsa20::new(&key, &nonce);
    enc.encrypt(&mut data);
    assert_eq!(
        hex::encode(&data),
        "6fd97b3e7b3c09afa252d7c85f8a75d76eaf30c918f7f8b36dc48875d997e79c\
         36cb711e3532f7144c689cb28918bd84"
    );

    let mut dec = Salsa20::new(&key, &nonce);
    dec.decrypt(&mut data);
    assert_eq!(data, b"Attack at dawn! Attack at dawn! Attack at dawn!!");
}

#[test]
fn test_seek_matches_sequential() {
    let key = [7u8; 32];
    let nonce = Nonce::<8>::new([9; 8]);
    let mut cipher = Salsa20::new(&key, &nonce);
    let mut stream = [0u8; 192];
    cipher.keystream(&mut stream);

    let mut seeked = Salsa20::new(&key, &nonce);
    seeked.seek(2);
    let mut tail = [0u8; 64];
    seeked.keystream(&mut tail);
    assert_eq!(tail[..], stream[128..]);
}
