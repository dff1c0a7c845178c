//! End-to-end scenarios across the facade surface

use crypta::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn aes128(key_hex: &str) -> Aes128 {
    Aes128::new(&SecretBytes::from_slice(&hex::decode(key_hex).unwrap()).unwrap())
}

#[test]
fn aes128_ecb_fips197() {
    let ecb = Ecb::new(aes128("000102030405060708090a0b0c0d0e0f"));
    let ciphertext = ecb
        .encrypt(&hex::decode("00112233445566778899aabbccddeeff").unwrap())
        .unwrap();
    assert_eq!(hex::encode(&ciphertext), "69c4e0d86a7b0430d8cdb78070b4c55a");
}

#[test]
fn aes128_cbc_pkcs7_single_block() {
    let iv = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let plaintext = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();

    let mut worker = Cbc::from_iv(aes128("2b7e151628aed2a6abf7158809cf4f3c"), &iv).unwrap();
    let ciphertext = worker.encrypt(&Pkcs7.pad(&plaintext, 16)).unwrap();
    assert_eq!(
        hex::encode(&ciphertext),
        "7649abac8119b246cee98e9b12e9197d8964e0b149c10b7b682e6e39aaeb731c"
    );

    let mut worker = Cbc::from_iv(aes128("2b7e151628aed2a6abf7158809cf4f3c"), &iv).unwrap();
    let unpadded = Pkcs7.unpad(&worker.decrypt(&ciphertext).unwrap(), 16).unwrap();
    assert_eq!(unpadded, plaintext);
}

#[test]
fn aes128_ctr_with_irregular_tail() {
    fn worker() -> Ctr<Aes128> {
        let mut ctr = Ctr::with_counter_params(
            aes128("2b7e151628aed2a6abf7158809cf4f3c"),
            &hex::decode("f0f1f2f3f4f5f6f7f8f9fafb").unwrap(),
            crypta::algorithms::block::modes::CounterPosition::Postfix,
            4,
        )
        .unwrap();
        ctr.set_counter(0xfcfdfeff);
        ctr
    }

    let plaintext = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();
    let ciphertext = worker().encrypt(&plaintext).unwrap();
    assert_eq!(hex::encode(&ciphertext), "874d6191b620e3261bef6864990db6ce");

    // one extra plaintext byte draws one extra keystream byte
    let mut extended = plaintext.clone();
    extended.push(0x01);
    let ciphertext = worker().encrypt(&extended).unwrap();
    assert_eq!(
        hex::encode(&ciphertext),
        "874d6191b620e3261bef6864990db6ce37"
    );

    assert_eq!(worker().decrypt(&ciphertext).unwrap(), extended);
}

#[test]
fn pbkdf2_hmac_sha1_long_output() {
    let derived = Pbkdf2::<Sha1>::derive(b"s33krit", b"nacl", 2, 140).unwrap();
    assert!(hex::encode(&derived).starts_with("a53cf3df485e5cd9"));
    assert_eq!(derived.len(), 140);
}

#[test]
fn pseudoprime_boundary_is_composite() {
    let n = BigUint::from_str_radix("318665857834031151167461", 10).unwrap();
    // a strong pseudoprime to base 37 (and every smaller prime base)...
    assert!(n.is_strong_probable_prime(&BigUint::from(37u32)));
    // ...that the tabulated-threshold logic still rejects
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert!(!n.is_prime(crypta::bigint::DEFAULT_MILLER_RABIN_ROUNDS, &mut rng));
}

#[test]
fn authenticated_modes_round_trip_and_reject_tampering() {
    let key = SecretBytes::<16>::new([0x42; 16]);
    let plaintext = b"the lazy dog jumps back over the quick brown fox";
    let aad = b"packet header";

    let gcm = Gcm::new(Aes128::new(&key), &Nonce::<12>::new([1; 12])).unwrap();
    let ccm = Ccm::new(Aes128::new(&key), &[2; 12], 8).unwrap();
    let ocb = Ocb::new(Aes128::new(&key), &[3; 12], 16).unwrap();
    let modes: [&dyn AeadCipher; 3] = [&gcm, &ccm, &ocb];

    for aead in modes {
        let sealed = aead.encrypt(plaintext, Some(aad)).unwrap();
        assert_eq!(sealed.len(), plaintext.len() + aead.tag_len());
        assert_eq!(aead.decrypt(&sealed, Some(aad)).unwrap(), plaintext);

        // single-bit flips anywhere must fail authentication
        for position in [0, sealed.len() / 2, sealed.len() - 1] {
            let mut corrupt = sealed.clone();
            corrupt[position] ^= 0x01;
            assert!(
                aead.decrypt(&corrupt, Some(aad)).is_err(),
                "{} accepted corrupt input",
                aead.algorithm()
            );
        }
        assert!(aead.decrypt(&sealed, Some(b"wrong header")).is_err());
        assert!(aead.decrypt(&sealed, None).is_err());
    }
}

#[test]
fn every_mode_round_trips_under_one_key() {
    let key = SecretBytes::<16>::new([0x5a; 16]);
    let message = b"streaming through all the modes of operation, one after another!";
    assert_eq!(message.len() % 16, 0);

    let iv = [0x11u8; 16];

    let ecb = Ecb::new(Aes128::new(&key));
    assert_eq!(ecb.decrypt(&ecb.encrypt(message).unwrap()).unwrap(), message);

    let mut enc = Cbc::from_iv(Aes128::new(&key), &iv).unwrap();
    let mut dec = Cbc::from_iv(Aes128::new(&key), &iv).unwrap();
    assert_eq!(dec.decrypt(&enc.encrypt(message).unwrap()).unwrap(), message);

    let mut enc = Pcbc::from_iv(Aes128::new(&key), &iv).unwrap();
    let mut dec = Pcbc::from_iv(Aes128::new(&key), &iv).unwrap();
    assert_eq!(dec.decrypt(&enc.encrypt(message).unwrap()).unwrap(), message);

    let mut enc = Cfb::from_iv(Aes128::new(&key), &iv, CfbSegment::Full).unwrap();
    let mut dec = Cfb::from_iv(Aes128::new(&key), &iv, CfbSegment::Full).unwrap();
    assert_eq!(dec.decrypt(&enc.encrypt(message).unwrap()).unwrap(), message);

    let mut enc = Cfb::from_iv(Aes128::new(&key), &iv, CfbSegment::Byte).unwrap();
    let mut dec = Cfb::from_iv(Aes128::new(&key), &iv, CfbSegment::Byte).unwrap();
    assert_eq!(dec.decrypt(&enc.encrypt(message).unwrap()).unwrap(), message);

    let mut enc = Ofb::from_iv(Aes128::new(&key), &iv).unwrap();
    let mut dec = Ofb::from_iv(Aes128::new(&key), &iv).unwrap();
    assert_eq!(dec.decrypt(&enc.encrypt(message).unwrap()).unwrap(), message);

    let mut enc = Ctr::new(Aes128::new(&key), &Nonce::<12>::zeroed()).unwrap();
    let mut dec = Ctr::new(Aes128::new(&key), &Nonce::<12>::zeroed()).unwrap();
    assert_eq!(dec.decrypt(&enc.encrypt(message).unwrap()).unwrap(), message);
}

#[test]
fn determinism_with_fixed_key_and_nonce() {
    let key = SecretBytes::<16>::new([9; 16]);
    let nonce = Nonce::<12>::new([8; 12]);
    let message = [0x77u8; 45];

    let gcm = Gcm::new(Aes128::new(&key), &nonce).unwrap();
    let first = gcm.encrypt(&message, None).unwrap();
    let second = gcm.encrypt(&message, None).unwrap();
    assert_eq!(first, second);

    let mut a = Ctr::new(Aes128::new(&key), &nonce).unwrap();
    let mut b = Ctr::new(Aes128::new(&key), &nonce).unwrap();
    assert_eq!(a.encrypt(&message).unwrap(), b.encrypt(&message).unwrap());
}

#[test]
fn biguint_division_law_with_seeded_randomness() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xB16);
    use rand::RngCore;

    for _ in 0..200 {
        let mut a_words = [0u32; 8];
        let mut b_words = [0u32; 3];
        for w in a_words.iter_mut() {
            *w = rng.next_u32();
        }
        for w in b_words.iter_mut() {
            *w = rng.next_u32();
        }
        let a = BigUint::from_words(&a_words);
        let b = BigUint::from_words(&b_words);
        if b.is_zero() {
            continue;
        }
        let (q, r) = a.div_rem(&b).unwrap();
        assert!(r < b);
        assert_eq!(&q.mul_ref(&b) + &r, a);
    }
}

#[test]
fn hmac_and_hashes_compose() {
    // HMAC over each hash implementation agrees with itself across
    // streaming boundaries
    let tag_one_shot = Hmac::<Sha256>::mac(b"key material", b"body of the message").unwrap();
    let mut mac = Hmac::<Sha256>::new(b"key material").unwrap();
    mac.update(b"body of ").unwrap();
    mac.update(b"the message").unwrap();
    assert_eq!(mac.finalize().unwrap(), tag_one_shot);
    assert!(Hmac::<Sha256>::verify(b"key material", b"body of the message", &tag_one_shot).unwrap());
}
