use super::*;

const CHECK: &[u8] = b"123456789";
const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

#[test]
fn crc32_check_values() {
    assert_eq!(Crc32::checksum(CHECK), 0xCBF4_3926);
    assert_eq!(Crc32::checksum(FOX), 0x414F_A339);
    assert_eq!(Crc32::checksum(b""), 0);
}

#[test]
fn crc32c_check_values() {
    assert_eq!(Crc32c::checksum(CHECK), 0xE306_9283);
    assert_eq!(Crc32c::checksum(FOX), 0x2262_0404);
}

#[test]
fn crc16_check_values() {
    assert_eq!(Crc16::checksum(CHECK), 0xBB3D);
    assert_eq!(Crc16::checksum(FOX), 0xFCDF);
    assert_eq!(Crc16::checksum(b""), 0);
}

#[test]
fn streaming_matches_one_shot() {
    let mut crc = Crc32::new();
    crc.update(b"1234");
    crc.update(b"");
    crc.update(b"56789");
    assert_eq!(crc.finalize(), Crc32::checksum(CHECK));

    let mut crc = Crc16::new();
    for b in CHECK {
        crc.update(&[*b]);
    }
    assert_eq!(crc.finalize(), 0xBB3D);
}
