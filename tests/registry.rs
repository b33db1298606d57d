use std::sync::Arc;

use jose_jws::{Algorithm, Hmac, JoseError, JwsAlgorithm, Plaintext, Registry, NONE};

#[test]
fn none_is_discoverable() {
    simple_logger::SimpleLogger::new().init().ok();

    let alg = Registry::global().get(NONE).unwrap();
    assert_eq!(alg.name(), NONE);
    assert_eq!(alg.name(), Plaintext.name());
    assert!(alg.sign(b"header.payload", None).unwrap().is_empty());
}

#[test]
fn lookup_by_parsed_name() {
    simple_logger::SimpleLogger::new().init().ok();

    let registry = Registry::default();
    for name in Algorithm::defaults() {
        let parsed: Algorithm = name.as_ref().parse().unwrap();
        let alg = registry.get(parsed.as_ref()).unwrap();
        assert_eq!(alg.name(), name.as_ref());
    }
}

#[test]
fn hmac_through_registry() {
    simple_logger::SimpleLogger::new().init().ok();

    let registry = Registry::default();
    let key = b"0123456789abcdef0123456789abcdef".to_vec();
    let alg = registry.get("HS256").unwrap();

    let sig = alg.sign(b"header.payload", Some(&key)).unwrap();
    alg.verify(b"header.payload", &sig, Some(&key)).unwrap();

    let err = alg.verify(b"header.payload", &[], Some(&key)).unwrap_err();
    assert!(matches!(err, JoseError::InvalidSignature("HS256")));
}

#[test]
fn strict_registry() {
    simple_logger::SimpleLogger::new().init().ok();

    let registry = Registry::builder()
        .allow_none(false)
        .add_custom(Arc::new(Hmac::hs256()))
        .build()
        .unwrap();

    let err = registry.get(NONE).unwrap_err();
    assert!(matches!(err, JoseError::UnknownAlgorithm(..)));
    assert_eq!(err.to_string(), "unknown algorithm none");
}

#[test]
fn unknown_name() {
    let err = "HS999".parse::<Algorithm>().unwrap_err();
    let err = JoseError::from(err);
    assert_eq!(err.to_string(), "unknown algorithm name \"HS999\"");
}
