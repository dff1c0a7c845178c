use super::*;
use crate::hash::{Sha1, Sha256};
use hex;

#[test]
fn rfc6070_style_sha1_vectors() {
    let dk = Pbkdf2::<Sha1>::derive(b"password", b"salt", 1, 20).unwrap();
    assert_eq!(hex::encode(&dk), "0c60c80f961f0e71f3a9b524af6012062fe037a6");

    let dk = Pbkdf2::<Sha1>::derive(b"password", b"salt", 2, 20).unwrap();
    assert_eq!(hex::encode(&dk), "ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957");

    let dk = Pbkdf2::<Sha1>::derive(b"password", b"salt", 4096, 20).unwrap();
    assert_eq!(hex::encode(&dk), "4b007901b765489abead49d926f721d065a429c1");

    // multi-block output with long password and salt
    let dk = Pbkdf2::<Sha1>::derive(
        b"passwordPASSWORDpassword",
        b"saltSALTsaltSALTsaltSALTsaltSALTsalt",
        4096,
        25,
    )
    .unwrap();
    assert_eq!(
        hex::encode(&dk),
        "3d2eec4fe41c849b80c8d83662c0e44a8b291a964cf2f07038"
    );
}

#[test]
fn sha256_vector() {
    let dk = Pbkdf2::<Sha256>::derive(b"password", b"salt", 1, 32).unwrap();
    assert_eq!(
        hex::encode(&dk),
        "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
    );
}

#[test]
fn long_output_spans_many_blocks() {
    // 140 bytes = seven SHA-1 blocks
    let dk = Pbkdf2::<Sha1>::derive(b"s33krit", b"nacl", 2, 140).unwrap();
    assert_eq!(
        hex::encode(&dk),
        "a53cf3df485e5cd91c17c4978048e3ca86e03cced5f748fb55eff9c1edfce7f9\
         f490c0beee768b85c1ba14ec5750cf059fea52565ffd9e4f9dba01c5c953955e\
         7f1012b6a9eb40629ce767982e598df9081048e22781b35187c16d61ac43f69b\
         88630a9e80233b4c58bdc74ea5c06b5bb1b2c2a86e3ddc2775b852c4508ac85a\
         6a47c0e23a3d8dc6e4dca583"
    );
}

#[test]
fn rejects_degenerate_parameters() {
    assert!(Pbkdf2::<Sha1>::derive(b"p", b"s", 0, 20).is_err());
    assert!(Pbkdf2::<Sha1>::derive(b"p", b"s", 1, 0).is_err());
}
