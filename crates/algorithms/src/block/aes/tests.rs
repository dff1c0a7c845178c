use super::*;
use hex;

fn key128(hex_str: &str) -> SecretBytes<16> {
    SecretBytes::from_slice(&hex::decode(hex_str).unwrap()).unwrap()
}

#[test]
fn fips197_aes128() {
    let cipher = Aes128::new(&key128("000102030405060708090a0b0c0d0e0f"));
    let mut block = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "69c4e0d86a7b0430d8cdb78070b4c55a");

    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "00112233445566778899aabbccddeeff");
}

#[test]
fn fips197_aes192() {
    let key = SecretBytes::<24>::from_slice(
        &hex::decode("000102030405060708090a0b0c0d0e0f1011121314151617").unwrap(),
    )
    .unwrap();
    let cipher = Aes192::new(&key);
    let mut block = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "dda97ca4864cdfe06eaf70a0ec0d7191");
}

#[test]
fn fips197_aes256() {
    let key = SecretBytes::<32>::from_slice(
        &hex::decode("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f").unwrap(),
    )
    .unwrap();
    let cipher = Aes256::new(&key);
    let mut block = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "8ea2b7ca516745bfeafc49904b496089");

    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "00112233445566778899aabbccddeeff");
}

#[test]
fn block_length_is_enforced() {
    let cipher = Aes128::new(&key128("00000000000000000000000000000000"));
    let mut short = [0u8; 15];
    assert!(cipher.encrypt_block(&mut short).is_err());
    let mut long = [0u8; 17];
    assert!(cipher.decrypt_block(&mut long).is_err());
}

#[test]
fn determinism_across_calls() {
    let cipher = Aes128::new(&key128("2b7e151628aed2a6abf7158809cf4f3c"));
    let mut a = [0x42u8; 16];
    let mut b = [0x42u8; 16];
    cipher.encrypt_block(&mut a).unwrap();
    cipher.encrypt_block(&mut b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn random_key_round_trip() {
    use rand::SeedableRng;
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
    let key = Aes256::generate_key(&mut rng);
    let cipher = Aes256::new(&key);
    let original = [0xa5u8; 16];
    let mut block = original;
    cipher.encrypt_block(&mut block).unwrap();
    assert_ne!(block, original);
    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(block, original);
}
