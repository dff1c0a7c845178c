use super::*;

fn md5_hex(data: &[u8]) -> String {
    Md5::digest(data).unwrap().to_hex()
}

#[test]
fn rfc_1321_style_vectors() {
    assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(md5_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(
        md5_hex(b"The quick brown fox jumps over the lazy dog"),
        "9e107d9d372bb6826bd81d3542a419d6"
    );
    assert_eq!(
        md5_hex(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        "8215ef0796a20bcaaae116d3876c664a"
    );
}

#[test]
fn million_a() {
    let mut h = Md5::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        h.update(&chunk).unwrap();
    }
    assert_eq!(
        h.finalize().unwrap().to_hex(),
        "7707d6ae4e027c70eea2a935c2296f21"
    );
}

#[test]
fn incremental_matches_one_shot() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let mut h = Md5::new();
    for chunk in data.chunks(7) {
        h.update(chunk).unwrap();
    }
    assert_eq!(h.finalize().unwrap(), Md5::digest(data).unwrap());
}

#[test]
fn finalize_resets_state() {
    let mut h = Md5::new();
    h.update(b"abc").unwrap();
    let first = h.finalize().unwrap();
    h.update(b"abc").unwrap();
    assert_eq!(h.finalize().unwrap(), first);
}
