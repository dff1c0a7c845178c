use super::*;
use crypta_api::Error as CoreError;

#[test]
fn conversion_to_core_error() {
    let err = Error::param("test", "invalid value");
    match CoreError::from(err) {
        CoreError::InvalidParameter { context, .. } => assert_eq!(context, "test"),
        other => panic!("expected InvalidParameter, got {:?}", other),
    }

    let err = Error::Length {
        context: "buffer",
        expected: 32,
        actual: 16,
    };
    match CoreError::from(err) {
        CoreError::InvalidLength {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "buffer");
            assert_eq!(expected, 32);
            assert_eq!(actual, 16);
        }
        other => panic!("expected InvalidLength, got {:?}", other),
    }

    let err = Error::Authentication { algorithm: "GCM" };
    assert!(matches!(
        CoreError::from(err),
        CoreError::AuthenticationFailed { context: "GCM", .. }
    ));

    let err = Error::InvalidPadding { scheme: "PKCS#7" };
    assert!(matches!(
        CoreError::from(err),
        CoreError::InvalidCiphertext { context: "PKCS#7", .. }
    ));
}

#[test]
fn validation_helpers() {
    assert!(validate::parameter(true, "p", "ok").is_ok());
    assert!(matches!(
        validate::parameter(false, "p", "bad"),
        Err(Error::Parameter { .. })
    ));

    assert!(validate::length("buf", 32, 32).is_ok());
    assert!(matches!(
        validate::length("buf", 16, 32),
        Err(Error::Length {
            expected: 32,
            actual: 16,
            ..
        })
    ));

    assert!(validate::min_length("buf", 8, 4).is_ok());
    assert!(validate::min_length("buf", 3, 4).is_err());
    assert!(validate::max_length("buf", 4, 8).is_ok());
    assert!(validate::max_length("buf", 9, 8).is_err());

    assert!(validate::authentication(true, "HMAC").is_ok());
    assert!(matches!(
        validate::authentication(false, "HMAC"),
        Err(Error::Authentication { algorithm: "HMAC" })
    ));
}

#[test]
fn display_formatting() {
    let err = Error::Length {
        context: "CBC plaintext",
        expected: 16,
        actual: 15,
    };
    assert_eq!(
        err.to_string(),
        "Invalid length for CBC plaintext: expected 16, got 15"
    );
    assert_eq!(
        Error::Authentication { algorithm: "OCB" }.to_string(),
        "Authentication failed for OCB"
    );
}
