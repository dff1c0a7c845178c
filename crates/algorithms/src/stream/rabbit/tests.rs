use super::*;
use hex;

fn first_blocks(cipher: &mut Rabbit) -> String {
    let mut keystream = [0u8; 48];
    cipher.keystream(&mut keystream);
    hex::encode(keystream)
}

#[test]
fn test_rfc4503_keys_without_iv() {
    let mut cipher = Rabbit::new(&[0u8; 16]);
    assert_eq!(
        first_blocks(&mut cipher),
        "02f74a1c26456bf5ecd6a536f05457b1\
         a78ac689476c697b390c9cc515d8e888\
         96d6731688d168da51d40c70c3a116f4"
    );

    let key: [u8; 16] = hex::decode("912813292e3d36fe3bfc62f1dc51c3ac")
        .unwrap()
        .try_into()
        .unwrap();
    let mut cipher = Rabbit::new(&key);
    assert_eq!(
        first_blocks(&mut cipher),
        "73751e3eea66556153200726b21ccdd4\
         1a2fe2889a4fd7cd180f898aadd92015\
         a9e61c96fa94458063de43dd92d4f029"
    );

    let key: [u8; 16] = hex::decode("8395741587e0c733e9e9ab01c09b0043")
        .unwrap()
        .try_into()
        .unwrap();
    let mut cipher = Rabbit::new(&key);
    assert_eq!(
        first_blocks(&mut cipher),
        "a084b4b6c012c0e336e6c8dc11a65c36\
         dfd89d8c648e8c062e29dda5b4f9bde0\
         ad3abe013e330f12398d8659b6495efa"
    );
}

#[test]
fn test_rfc4503_iv_setup() {
    let iv = Nonce::<8>::from_slice(&hex::decode("c373f575c1267e59").unwrap()).unwrap();
    let mut cipher = Rabbit::with_iv(&[0u8; 16], &iv);
    assert_eq!(
        first_blocks(&mut cipher),
        "787e6e10a13308935744fa722b293086\
         800dc64b660758f414f03ccb30ec769c\
         6c50138880674bb86a0c43772aa47556"
    );

    let iv = Nonce::<8>::from_slice(&hex::decode("a6eb561ad2f41727").unwrap()).unwrap();
    let mut cipher = Rabbit::with_iv(&[0u8; 16], &iv);
    assert_eq!(
        first_blocks(&mut cipher),
        "4785ce2569acfa3c69fdf738943e66e5\
         4c96c85013e108e03c5506f5879999e4\
         0c0d66dc5aa5b6fe1b6a57e4c4cfa36f"
    );
}

#[test]
fn test_round_trip_with_ragged_chunks() {
    let key = [0x42u8; 16];
    let iv = Nonce::<8>::new([0x24; 8]);

    let mut data = b"rabbit runs in sixteen byte hops".to_vec();
    let mut enc = Rabbit::with_iv(&key, &iv);
    enc.encrypt(&mut data);

    let mut dec = Rabbit::with_iv(&key, &iv);
    let (head, tail) = data.split_at_mut(11);
    dec.decrypt(head);
    dec.decrypt(tail);
    assert_eq!(data, b"rabbit runs in sixteen byte hops");
}
