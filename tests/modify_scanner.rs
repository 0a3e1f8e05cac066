//! Integration tests for the modify_scanner command
//!
//! Drives [`Gmp`] through a [`MockConnection`] and asserts on the exact
//! serialized XML handed to the transport.

use gmp_client::{
    Error, Gmp, LoggingConnection, MockConnection, Port, ScannerModification, ScannerType,
};

fn gmp() -> Gmp<MockConnection> {
    // Surface LoggingConnection output when running with RUST_LOG set
    let _ = env_logger::builder().is_test(true).try_init();
    Gmp::new(MockConnection::new())
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_modify_scanner_without_optional_fields() {
    let mut gmp = gmp();
    gmp.modify_scanner("s1", &ScannerModification::new()).unwrap();

    assert_eq!(
        gmp.connection().last_command(),
        Some(r#"<modify_scanner scanner_id="s1"/>"#)
    );
}

#[test]
fn test_modify_scanner_with_comment() {
    let mut gmp = gmp();
    gmp.modify_scanner("s1", &ScannerModification::new().comment("foo"))
        .unwrap();

    assert_eq!(
        gmp.connection().last_command(),
        Some(r#"<modify_scanner scanner_id="s1"><comment>foo</comment></modify_scanner>"#)
    );
}

#[test]
fn test_modify_scanner_with_host() {
    let mut gmp = gmp();
    gmp.modify_scanner("s1", &ScannerModification::new().host("foo"))
        .unwrap();

    assert_eq!(
        gmp.connection().last_command(),
        Some(r#"<modify_scanner scanner_id="s1"><host>foo</host></modify_scanner>"#)
    );
}

#[test]
fn test_modify_scanner_with_port() {
    let mut gmp = gmp();
    gmp.modify_scanner("s1", &ScannerModification::new().port(1234))
        .unwrap();

    assert_eq!(
        gmp.connection().last_command(),
        Some(r#"<modify_scanner scanner_id="s1"><port>1234</port></modify_scanner>"#)
    );
}

#[test]
fn test_modify_scanner_with_port_from_string() {
    // A numeric string port serializes exactly like the native integer
    let port: Port = "1234".parse().unwrap();

    let mut gmp = gmp();
    gmp.modify_scanner("s1", &ScannerModification::new().port(port))
        .unwrap();

    assert_eq!(
        gmp.connection().last_command(),
        Some(r#"<modify_scanner scanner_id="s1"><port>1234</port></modify_scanner>"#)
    );
}

#[test]
fn test_modify_scanner_with_name() {
    let mut gmp = gmp();
    gmp.modify_scanner("s1", &ScannerModification::new().name("foo"))
        .unwrap();

    assert_eq!(
        gmp.connection().last_command(),
        Some(r#"<modify_scanner scanner_id="s1"><name>foo</name></modify_scanner>"#)
    );
}

#[test]
fn test_modify_scanner_with_ca_pub() {
    let mut gmp = gmp();
    gmp.modify_scanner("s1", &ScannerModification::new().ca_pub("foo"))
        .unwrap();

    assert_eq!(
        gmp.connection().last_command(),
        Some(r#"<modify_scanner scanner_id="s1"><ca_pub>foo</ca_pub></modify_scanner>"#)
    );
}

#[test]
fn test_modify_scanner_with_credential_id() {
    let mut gmp = gmp();
    gmp.modify_scanner("s1", &ScannerModification::new().credential_id("c1"))
        .unwrap();

    // The credential is referenced via an id attribute, not text content
    assert_eq!(
        gmp.connection().last_command(),
        Some(r#"<modify_scanner scanner_id="s1"><credential id="c1"/></modify_scanner>"#)
    );
}

#[test]
fn test_modify_scanner_with_scanner_type() {
    let cases = [
        (ScannerType::Osp, "1"),
        (ScannerType::OpenVas, "2"),
        (ScannerType::Cve, "3"),
        (ScannerType::Gmp, "4"),
    ];

    for (scanner_type, code) in cases {
        let mut gmp = gmp();
        gmp.modify_scanner("s1", &ScannerModification::new().scanner_type(scanner_type))
            .unwrap();

        assert_eq!(
            gmp.connection().last_command().unwrap(),
            format!(r#"<modify_scanner scanner_id="s1"><type>{code}</type></modify_scanner>"#)
        );
    }
}

#[test]
fn test_modify_scanner_child_order_is_fixed() {
    let modification = ScannerModification::new()
        .scanner_type(ScannerType::Cve)
        .credential_id("c1")
        .comment("foo")
        .port(9390)
        .host("bar");

    let mut gmp = gmp();
    gmp.modify_scanner("s1", &modification).unwrap();

    // Order follows the protocol, not the order the setters were called in
    assert_eq!(
        gmp.connection().last_command(),
        Some(concat!(
            r#"<modify_scanner scanner_id="s1">"#,
            "<comment>foo</comment>",
            "<host>bar</host>",
            "<port>9390</port>",
            r#"<credential id="c1"/>"#,
            "<type>3</type>",
            "</modify_scanner>"
        ))
    );
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_modify_scanner_missing_scanner_id() {
    let mut gmp = gmp();
    let result = gmp.modify_scanner("", &ScannerModification::new());

    assert!(matches!(
        result,
        Err(Error::RequiredArgument {
            function: "modify_scanner",
            argument: "scanner_id",
        })
    ));
    // Nothing was sent
    assert_eq!(gmp.connection().send_count(), 0);
}

#[test]
fn test_modify_scanner_invalid_scanner_type() {
    // Out-of-vocabulary raw values fail at the coercion boundary, so no
    // command is ever built or sent
    for raw in ["", "-1", "66"] {
        let mut gmp = gmp();

        let result = raw
            .parse::<ScannerType>()
            .map(|t| gmp.modify_scanner("s1", &ScannerModification::new().scanner_type(t)));

        assert!(
            matches!(result, Err(Error::InvalidArgument { .. })),
            "raw {raw:?}"
        );
        assert_eq!(gmp.connection().send_count(), 0);
    }
}

// ============================================================================
// Transport interaction
// ============================================================================

#[test]
fn test_modify_scanner_sends_exactly_once() {
    let mut gmp = gmp();
    gmp.modify_scanner("s1", &ScannerModification::new().comment("foo"))
        .unwrap();

    assert_eq!(gmp.connection().send_count(), 1);
}

#[test]
fn test_modify_scanner_returns_raw_response() {
    let response = r#"<modify_scanner_response status="200" status_text="OK"/>"#;
    let mut gmp = Gmp::new(MockConnection::new().with_response(response));

    let result = gmp
        .modify_scanner("s1", &ScannerModification::new())
        .unwrap();
    assert_eq!(result, response);
}

#[test]
fn test_modify_scanner_over_logging_connection() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut gmp = Gmp::new(LoggingConnection::new(MockConnection::new()));
    gmp.modify_scanner("s1", &ScannerModification::new().comment("foo"))
        .unwrap();

    // The wrapper only logs; the command reaches the transport unchanged
    let inner = gmp.into_connection().into_inner();
    assert_eq!(
        inner.last_command(),
        Some(r#"<modify_scanner scanner_id="s1"><comment>foo</comment></modify_scanner>"#)
    );
}

#[test]
fn test_modify_scanner_surfaces_connection_errors() {
    let mock = MockConnection::new().with_error(Error::Connection("reset by peer".to_string()));
    let mut gmp = Gmp::new(mock);

    let result = gmp.modify_scanner("s1", &ScannerModification::new());
    assert!(matches!(result, Err(Error::Connection(_))));
}
