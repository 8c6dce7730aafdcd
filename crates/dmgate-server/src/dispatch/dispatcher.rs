use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use dmgate_core::error::ResponseCode;
use dmgate_core::model::path::{InstancePath, ResourcePath};
use dmgate_core::model::request::{Attribute, DmOperation, DmRequest, DmResponse};

use crate::context::CallerContext;
use crate::policy::{AccessPolicy, Decision};

/// Fault inside the resource store (backing storage, codec, ...).
///
/// Deliberately a separate type from `DmError`: a store implementation can
/// only signal "something broke", never an access-control outcome, so a
/// buggy store cannot weaken the non-disclosure guarantee.
#[derive(Debug, Error)]
#[error("store fault: {0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Outcome of an Execute against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecOutcome {
    /// Resource existed and was executable.
    Done,
    /// Instance or resource absent.
    NotFound,
    /// Resource exists but is not executable.
    NotExecutable,
}

/// Resource store seam. Implementations may suspend on I/O, but they are
/// only ever reached after the access policy has deferred.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    async fn instance_exists(&self, path: InstancePath) -> Result<bool, StoreError>;

    /// Read an instance; `None` if absent.
    async fn read_instance(&self, path: InstancePath) -> Result<Option<Bytes>, StoreError>;

    /// Replace instance content; `false` if the instance is absent.
    async fn write_instance(&self, path: InstancePath, payload: Bytes)
        -> Result<bool, StoreError>;

    /// Remove an instance; `false` if it was absent.
    async fn delete_instance(&self, path: InstancePath) -> Result<bool, StoreError>;

    async fn execute(&self, path: ResourcePath) -> Result<ExecOutcome, StoreError>;

    /// Attach notification attributes; `false` if instance or resource is
    /// absent.
    async fn write_attributes(
        &self,
        path: ResourcePath,
        attrs: &[Attribute],
    ) -> Result<bool, StoreError>;
}

/// Per-request orchestration: policy gate, then store-backed handling.
///
/// Stateless across requests; construct once and share via Arc.
pub struct Dispatcher {
    policy: Arc<AccessPolicy>,
    store: Arc<dyn ResourceStore>,
}

impl Dispatcher {
    pub fn new(policy: Arc<AccessPolicy>, store: Arc<dyn ResourceStore>) -> Self {
        Self { policy, store }
    }

    /// Handle one DM request end-to-end. Always produces exactly one
    /// response; store faults surface as InternalError and are never mapped
    /// onto the access-control statuses.
    pub async fn handle(&self, request: &DmRequest, caller: &CallerContext) -> DmResponse {
        // Gate first. On Deny nothing below runs, so a denied Read cannot
        // leak a payload and a denied Write cannot mutate the store.
        match self.policy.decide(request, caller) {
            Decision::Deny { code, msg } => {
                tracing::debug!(
                    session = %caller.session_id,
                    auth = caller.auth_label(),
                    op = request.op.as_str(),
                    target = %request.target,
                    code = code.as_str(),
                    msg,
                    "request denied by policy"
                );
                return DmResponse::status(code);
            }
            Decision::Defer => {}
        }

        match self.run_on_store(request).await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(
                    session = %caller.session_id,
                    op = request.op.as_str(),
                    target = %request.target,
                    error = %e,
                    "resource store fault"
                );
                DmResponse::status(ResponseCode::InternalError)
            }
        }
    }

    /// Normal (non-protected) taxonomy, reached only on Defer.
    async fn run_on_store(&self, request: &DmRequest) -> Result<DmResponse, StoreError> {
        use dmgate_core::model::path::Target;

        let resp = match (request.op, request.target) {
            (DmOperation::Read, Target::Instance(path)) => {
                match self.store.read_instance(path).await? {
                    Some(payload) => DmResponse::content(payload),
                    None => DmResponse::status(ResponseCode::NotFound),
                }
            }

            (DmOperation::Write, Target::Instance(path)) => match &request.payload {
                None => DmResponse::status(ResponseCode::BadRequest),
                Some(payload) => {
                    if self.store.write_instance(path, payload.clone()).await? {
                        DmResponse::status(ResponseCode::Changed)
                    } else {
                        DmResponse::status(ResponseCode::NotFound)
                    }
                }
            },

            (DmOperation::Delete, Target::Instance(path)) => {
                if self.store.delete_instance(path).await? {
                    DmResponse::status(ResponseCode::Deleted)
                } else {
                    DmResponse::status(ResponseCode::NotFound)
                }
            }

            (DmOperation::Execute, Target::Resource(path)) => {
                match self.store.execute(path).await? {
                    ExecOutcome::Done => DmResponse::status(ResponseCode::Changed),
                    ExecOutcome::NotFound => DmResponse::status(ResponseCode::NotFound),
                    ExecOutcome::NotExecutable => {
                        DmResponse::status(ResponseCode::MethodNotAllowed)
                    }
                }
            }

            (DmOperation::WriteAttributes, Target::Resource(path)) => {
                if self.store.write_attributes(path, &request.attributes).await? {
                    DmResponse::status(ResponseCode::Changed)
                } else {
                    DmResponse::status(ResponseCode::NotFound)
                }
            }

            // Verb/depth mismatch: Execute and Write-Attributes need a
            // resource, the others an instance.
            (DmOperation::Read, Target::Resource(_))
            | (DmOperation::Write, Target::Resource(_))
            | (DmOperation::Delete, Target::Resource(_))
            | (DmOperation::Execute, Target::Instance(_))
            | (DmOperation::WriteAttributes, Target::Instance(_)) => {
                DmResponse::status(ResponseCode::MethodNotAllowed)
            }
        };

        Ok(resp)
    }
}
