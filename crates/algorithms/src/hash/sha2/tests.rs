use super::*;
use hex;

const ABC: &[u8] = b"abc";
const TWO_BLOCK: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

#[test]
fn test_sha224_vectors() {
    assert_eq!(
        hex::encode(Sha224::digest(b"").unwrap()),
        "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
    );
    assert_eq!(
        hex::encode(Sha224::digest(ABC).unwrap()),
        "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
    );
    assert_eq!(
        hex::encode(Sha224::digest(TWO_BLOCK).unwrap()),
        "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525"
    );
}

#[test]
fn test_sha256_vectors() {
    assert_eq!(
        hex::encode(Sha256::digest(b"").unwrap()),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        hex::encode(Sha256::digest(ABC).unwrap()),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(
        hex::encode(Sha256::digest(TWO_BLOCK).unwrap()),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
}

#[test]
fn test_sha384_vectors() {
    assert_eq!(
        hex::encode(Sha384::digest(ABC).unwrap()),
        "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
         8086072ba1e7cc2358baeca134c825a7"
    );
    assert_eq!(
        hex::encode(Sha384::digest(b"").unwrap()),
        "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da\
         274edebfe76f65fbd51ad2f14898b95b"
    );
}

#[test]
fn test_sha512_vectors() {
    assert_eq!(
        hex::encode(Sha512::digest(ABC).unwrap()),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
    assert_eq!(
        hex::encode(Sha512::digest(b"").unwrap()),
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
         47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
    );
}

#[test]
fn test_sha256_million_a() {
    let mut hasher = Sha256::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        hasher.update(&chunk).unwrap();
    }
    assert_eq!(
        hex::encode(hasher.finalize().unwrap()),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

#[test]
fn test_sha512_incremental_matches_one_shot() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let mut hasher = Sha512::new();
    for chunk in data.chunks(11) {
        hasher.update(chunk).unwrap();
    }
    assert_eq!(hasher.finalize().unwrap(), Sha512::digest(data).unwrap());
    assert_eq!(
        hex::encode(Sha512::digest(data).unwrap()),
        "07e547d9586f6a73f73fbac0435ed76951218fb7d0c8d788a309d785436bbb64\
         2e93a252a954f23912547d1e8a3b5ed6e1bfd7097821233fa0538f3db854fee6"
    );
}

#[test]
fn test_block_boundary_lengths() {
    // lengths straddling the 64-byte padding boundary
    for len in [55usize, 56, 63, 64, 65, 119, 120, 127, 128] {
        let data = vec![0x61u8; len];
        let mut hasher = Sha256::new();
        hasher.update(&data[..len / 2]).unwrap();
        hasher.update(&data[len / 2..]).unwrap();
        assert_eq!(
            hasher.finalize().unwrap(),
            Sha256::digest(&data).unwrap(),
            "length {}",
            len
        );
    }
}
