//! Target path parsing vectors.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use dmgate_core::model::path::{parse_target, InstancePath, ObjectId, ResourcePath, Target};

#[test]
fn instance_and_resource_paths() {
    let cases = [
        ("/0/1", Target::Instance(InstancePath::new(ObjectId(0), 1))),
        ("/3/0", Target::Instance(InstancePath::new(ObjectId(3), 0))),
        ("1/2", Target::Instance(InstancePath::new(ObjectId(1), 2))),
        ("/0/2/1", Target::Resource(ResourcePath::new(ObjectId(0), 2, 1))),
        ("/1/0/10", Target::Resource(ResourcePath::new(ObjectId(1), 0, 10))),
        ("/65535/65535", Target::Instance(InstancePath::new(ObjectId(65535), 65535))),
    ];

    for (raw, want) in cases {
        let got = parse_target(raw).expect("must parse");
        assert_eq!(got, want, "path={raw}");
    }
}

#[test]
fn malformed_paths_rejected() {
    let cases = [
        "",           // empty
        "/",          // empty after prefix strip
        "/0",         // object-level not addressable
        "/0/1/2/3",   // too deep
        "/x/1",       // non-numeric object
        "/0/abc",     // non-numeric instance
        "/0/1/-1",    // negative resource
        "/0/70000",   // out of u16 range
    ];

    for raw in cases {
        let err = parse_target(raw).expect_err("must fail");
        assert_eq!(err.response_code().as_str(), "BAD_REQUEST", "path={raw}");
    }
}

#[test]
fn resource_target_reduces_to_owning_instance() {
    let t = parse_target("/0/7/1").unwrap();
    assert_eq!(t.object_id(), ObjectId(0));
    assert_eq!(t.instance_path(), InstancePath::new(ObjectId(0), 7));
}

#[test]
fn display_round_trips() {
    for raw in ["/0/1", "/0/1/2", "/42/9/10"] {
        let t = parse_target(raw).unwrap();
        assert_eq!(t.to_string(), raw);
    }
}
