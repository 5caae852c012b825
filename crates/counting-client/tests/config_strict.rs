#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use counting_client::config;

#[test]
fn defaults_match_the_reference_run() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.client.url, "http://localhost:8080/count");
    assert_eq!(cfg.client.rounds, 50);
    assert_eq!(cfg.client.header_key, "Counter-ID");
    assert_eq!(cfg.client.error_key, "Error");
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
client:
  rouns: 10 # typo should fail
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn custom_run() {
    let ok = r#"
version: 1
client:
  url: "http://lb.internal/count"
  rounds: 200
  error_key: "Failed"
"#;
    let cfg = config::load_from_str(ok).unwrap();
    assert_eq!(cfg.client.rounds, 200);
    assert_eq!(cfg.client.error_key, "Failed");
    assert_eq!(cfg.client.header_key, "Counter-ID");
}

#[test]
fn non_http_url_rejected() {
    let bad = "version: 1\nclient:\n  url: \"ftp://host/count\"\n";
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn empty_error_key_rejected() {
    let bad = "version: 1\nclient:\n  error_key: \"\"\n";
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn timeout_out_of_range_rejected() {
    let bad = "version: 1\nclient:\n  timeout_ms: 10\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn zero_rounds_allowed() {
    let cfg = config::load_from_str("version: 1\nclient:\n  rounds: 0\n").unwrap();
    assert_eq!(cfg.client.rounds, 0);
}
