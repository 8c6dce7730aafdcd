use dmgate_core::error::ResponseCode;
use dmgate_core::model::request::DmRequest;

use crate::context::CallerContext;

use super::protected::ProtectedObjectSet;

/// Decision from policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// No objection here; the dispatcher proceeds to normal existence and
    /// permission checks against the resource store.
    Defer,
    /// Short-circuit with this status. No store access may happen.
    Deny {
        code: ResponseCode,
        msg: &'static str,
    },
}

/// Access-control gate. Construct once at startup, then share via Arc.
///
/// `decide` is a pure function of (request, caller): it performs no store
/// lookup and no I/O, so a denied probe cannot observe a timing difference
/// between existing and absent instances.
pub struct AccessPolicy {
    protected: ProtectedObjectSet,
}

impl AccessPolicy {
    pub fn new(protected: ProtectedObjectSet) -> Self {
        Self { protected }
    }

    pub fn protected(&self) -> &ProtectedObjectSet {
        &self.protected
    }

    /// Gate a DM request before any resource lookup.
    ///
    /// For a protected object and a caller without the manage capability
    /// the answer is Unauthorized regardless of operation kind and
    /// regardless of whether the instance exists. Execute and
    /// Write-Attributes address a resource; the check reduces their target
    /// to the owning instance, so operation choice cannot be used to probe
    /// existence either.
    pub fn decide(&self, request: &DmRequest, caller: &CallerContext) -> Decision {
        let object = request.target.object_id();

        if self.protected.contains(object) && !caller.can_manage_protected(object) {
            return Decision::Deny {
                code: ResponseCode::Unauthorized,
                msg: "access denied",
            };
        }

        Decision::Defer
    }
}
