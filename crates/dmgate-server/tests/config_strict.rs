#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use dmgate_core::model::path::ObjectId;
use dmgate_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:5683"
access:
  protected_objectz: [0] # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.response_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    // Security is protected by default.
    assert_eq!(cfg.access.protected_objects, vec![ObjectId(0)]);
    assert_eq!(cfg.server.listen, "0.0.0.0:5683");
}

#[test]
fn protected_set_must_include_security() {
    let bad = r#"
version: 1
access:
  protected_objects: [2]
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.response_code().as_str(), "BAD_REQUEST");
}

#[test]
fn timeout_range_enforced() {
    let bad = r#"
version: 1
server:
  request_timeout_ms: 100
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.response_code().as_str(), "BAD_REQUEST");
}

#[test]
fn object_seeds_parse() {
    let ok = r#"
version: 1
objects:
  - oid: 3
    instances: [0]
  - oid: 1
    instances: [0, 1]
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.objects.len(), 2);
    assert_eq!(cfg.objects[0].oid, ObjectId(3));
    assert_eq!(cfg.objects[1].instances, vec![0, 1]);
}
