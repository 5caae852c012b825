#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use counting_service::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
service:
  port: 9000
  header_kye: "Counter-ID" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.service.port, 8080);
    assert_eq!(cfg.service.host, "0.0.0.0");
    assert_eq!(cfg.service.header_key, "Counter-ID");
    assert!(cfg.service.instance_id.is_none());
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn invalid_header_key_rejected() {
    let bad = r#"
version: 1
service:
  header_key: "Counter ID"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn empty_instance_id_rejected() {
    let bad = r#"
version: 1
service:
  instance_id: ""
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn port_env_overrides_file() {
    let mut cfg = config::load_from_str("version: 1\nservice:\n  port: 9000\n").unwrap();
    cfg.service.apply_port_override(Some("8181")).unwrap();
    assert_eq!(cfg.service.port, 8181);
    assert_eq!(cfg.service.listen_addr().unwrap().port(), 8181);
}

#[test]
fn empty_port_env_keeps_default() {
    let mut cfg = config::load_from_str("version: 1\n").unwrap();
    cfg.service.apply_port_override(Some("")).unwrap();
    cfg.service.apply_port_override(None).unwrap();
    assert_eq!(cfg.service.port, 8080);
}

#[test]
fn garbage_port_env_rejected() {
    let mut cfg = config::load_from_str("version: 1\n").unwrap();
    let err = cfg.service.apply_port_override(Some("eighty")).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn missing_file_yields_defaults() {
    let cfg = config::load_optional("/nonexistent/counting-service.yaml").unwrap();
    assert_eq!(cfg.service.port, 8080);
}
