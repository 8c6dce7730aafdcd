//! Normal (non-protected) dispatch taxonomy and fault isolation.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use dmgate_core::error::ResponseCode;
use dmgate_core::model::path::{InstancePath, ResourcePath, Target, OID_DEVICE, OID_SECURITY};
use dmgate_core::model::request::{parse_attribute_query, Attribute, DmOperation, DmRequest};

use dmgate_server::context::CallerContext;
use dmgate_server::dispatch::{Dispatcher, ExecOutcome, ResourceStore, StoreError};
use dmgate_server::policy::{protected::compile_protected_set, AccessPolicy};
use dmgate_server::store::MemoryStore;

fn build_with(store: Arc<dyn ResourceStore>) -> Dispatcher {
    let protected = compile_protected_set(&[OID_SECURITY]).unwrap();
    Dispatcher::new(Arc::new(AccessPolicy::new(protected)), store)
}

fn build(store: Arc<MemoryStore>) -> Dispatcher {
    build_with(store)
}

#[tokio::test]
async fn read_write_delete_taxonomy() {
    let store = Arc::new(MemoryStore::new());
    let path = InstancePath::new(OID_DEVICE, 0);
    store.declare_instance(path);
    let dispatcher = build(store.clone());
    let caller = CallerContext::unauthenticated("s1");

    // Write then read back.
    let write = dispatcher
        .handle(
            &DmRequest::new(DmOperation::Write, Target::Instance(path))
                .with_payload(Bytes::from_static(b"manufacturer=acme")),
            &caller,
        )
        .await;
    assert_eq!(write.status, ResponseCode::Changed);

    let read = dispatcher
        .handle(
            &DmRequest::new(DmOperation::Read, Target::Instance(path)),
            &caller,
        )
        .await;
    assert_eq!(read.status, ResponseCode::Content);
    assert_eq!(read.payload, Some(Bytes::from_static(b"manufacturer=acme")));

    // Write without payload is malformed, not NOT_FOUND.
    let no_payload = dispatcher
        .handle(
            &DmRequest::new(DmOperation::Write, Target::Instance(path)),
            &caller,
        )
        .await;
    assert_eq!(no_payload.status, ResponseCode::BadRequest);

    // Delete, then the instance is gone.
    let delete = dispatcher
        .handle(
            &DmRequest::new(DmOperation::Delete, Target::Instance(path)),
            &caller,
        )
        .await;
    assert_eq!(delete.status, ResponseCode::Deleted);

    let gone = dispatcher
        .handle(
            &DmRequest::new(DmOperation::Delete, Target::Instance(path)),
            &caller,
        )
        .await;
    assert_eq!(gone.status, ResponseCode::NotFound);
}

#[tokio::test]
async fn execute_taxonomy() {
    let store = Arc::new(MemoryStore::new());
    store.put_executable(ResourcePath::new(OID_DEVICE, 0, 4)); // Reboot
    store.put_resource(ResourcePath::new(OID_DEVICE, 0, 0), Bytes::from_static(b"acme"));
    let dispatcher = build(store);
    let caller = CallerContext::unauthenticated("s1");

    let cases = [
        (ResourcePath::new(OID_DEVICE, 0, 4), ResponseCode::Changed),
        (ResourcePath::new(OID_DEVICE, 0, 0), ResponseCode::MethodNotAllowed),
        (ResourcePath::new(OID_DEVICE, 0, 9), ResponseCode::NotFound),
        (ResourcePath::new(OID_DEVICE, 7, 4), ResponseCode::NotFound),
    ];

    for (path, want) in cases {
        let resp = dispatcher
            .handle(
                &DmRequest::new(DmOperation::Execute, Target::Resource(path)),
                &caller,
            )
            .await;
        assert_eq!(resp.status, want, "path={path}");
    }
}

#[tokio::test]
async fn write_attributes_lands_in_store() {
    let store = Arc::new(MemoryStore::new());
    let rp = ResourcePath::new(OID_DEVICE, 0, 13);
    store.put_resource(rp, Bytes::from_static(b"0"));
    let dispatcher = build(store.clone());
    let caller = CallerContext::unauthenticated("s1");

    let attrs = parse_attribute_query(&["pmin=5".to_string(), "pmax=60".to_string()]).unwrap();
    let resp = dispatcher
        .handle(
            &DmRequest::new(DmOperation::WriteAttributes, Target::Resource(rp))
                .with_attributes(attrs.clone()),
            &caller,
        )
        .await;
    assert_eq!(resp.status, ResponseCode::Changed);
    assert_eq!(store.attributes_of(rp), Some(attrs));

    // Absent resource.
    let resp = dispatcher
        .handle(
            &DmRequest::new(
                DmOperation::WriteAttributes,
                Target::Resource(ResourcePath::new(OID_DEVICE, 0, 99)),
            ),
            &caller,
        )
        .await;
    assert_eq!(resp.status, ResponseCode::NotFound);
}

#[tokio::test]
async fn verb_depth_mismatch_is_method_not_allowed() {
    let store = Arc::new(MemoryStore::new());
    store.declare_instance(InstancePath::new(OID_DEVICE, 0));
    let dispatcher = build(store);
    let caller = CallerContext::unauthenticated("s1");

    let inst = Target::Instance(InstancePath::new(OID_DEVICE, 0));
    let res = Target::Resource(ResourcePath::new(OID_DEVICE, 0, 1));

    let cases = [
        DmRequest::new(DmOperation::Execute, inst),
        DmRequest::new(DmOperation::WriteAttributes, inst),
        DmRequest::new(DmOperation::Read, res),
        DmRequest::new(DmOperation::Write, res).with_payload(Bytes::from_static(b"x")),
        DmRequest::new(DmOperation::Delete, res),
    ];

    for req in cases {
        let resp = dispatcher.handle(&req, &caller).await;
        assert_eq!(
            resp.status,
            ResponseCode::MethodNotAllowed,
            "op={}",
            req.op.as_str()
        );
    }
}

/// Store that fails every call.
struct BrokenStore;

#[async_trait]
impl ResourceStore for BrokenStore {
    async fn instance_exists(&self, _: InstancePath) -> Result<bool, StoreError> {
        Err(StoreError::new("backing store offline"))
    }
    async fn read_instance(&self, _: InstancePath) -> Result<Option<Bytes>, StoreError> {
        Err(StoreError::new("backing store offline"))
    }
    async fn write_instance(&self, _: InstancePath, _: Bytes) -> Result<bool, StoreError> {
        Err(StoreError::new("backing store offline"))
    }
    async fn delete_instance(&self, _: InstancePath) -> Result<bool, StoreError> {
        Err(StoreError::new("backing store offline"))
    }
    async fn execute(&self, _: ResourcePath) -> Result<ExecOutcome, StoreError> {
        Err(StoreError::new("backing store offline"))
    }
    async fn write_attributes(&self, _: ResourcePath, _: &[Attribute]) -> Result<bool, StoreError> {
        Err(StoreError::new("backing store offline"))
    }
}

/// Store faults surface as INTERNAL_ERROR on the deferred path, and stay
/// masked as UNAUTHORIZED on the protected path: an unrelated error must
/// not weaken the non-disclosure guarantee either way.
#[tokio::test]
async fn store_faults_never_alias_access_statuses() {
    let dispatcher = build_with(Arc::new(BrokenStore));
    let caller = CallerContext::unauthenticated("s1");

    let deferred = dispatcher
        .handle(
            &DmRequest::new(
                DmOperation::Read,
                Target::Instance(InstancePath::new(OID_DEVICE, 0)),
            ),
            &caller,
        )
        .await;
    assert_eq!(deferred.status, ResponseCode::InternalError);

    let gated = dispatcher
        .handle(
            &DmRequest::new(
                DmOperation::Read,
                Target::Instance(InstancePath::new(OID_SECURITY, 0)),
            ),
            &caller,
        )
        .await;
    assert_eq!(gated.status, ResponseCode::Unauthorized);
}
