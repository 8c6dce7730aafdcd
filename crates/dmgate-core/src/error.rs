//! Shared error type across dmgate crates.

use thiserror::Error;

/// Wire-facing response statuses (stable API).
///
/// The numeric rendering follows the CoAP dotted convention used by LWM2M,
/// but nothing in this crate depends on a CoAP stack. Success codes are
/// operation-specific; error codes form the fixed taxonomy adapters encode
/// onto the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    /// Read succeeded, payload attached.
    Content,
    /// Write / Execute / Write-Attributes succeeded.
    Changed,
    /// Delete succeeded.
    Deleted,
    /// Invalid input / malformed path or query.
    BadRequest,
    /// Access denied. Deliberately also covers "does not exist" for
    /// protected objects, so existence is never disclosed.
    Unauthorized,
    /// Target absent. Only valid for non-protected objects, or for
    /// protected objects seen by a sufficiently privileged caller.
    NotFound,
    /// Operation invalid for the target's kind.
    MethodNotAllowed,
    /// Unexpected failure in a collaborator (e.g. the resource store).
    InternalError,
}

impl ResponseCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseCode::Content => "CONTENT",
            ResponseCode::Changed => "CHANGED",
            ResponseCode::Deleted => "DELETED",
            ResponseCode::BadRequest => "BAD_REQUEST",
            ResponseCode::Unauthorized => "UNAUTHORIZED",
            ResponseCode::NotFound => "NOT_FOUND",
            ResponseCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ResponseCode::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Dotted CoAP-style code (`class.detail`) for wire adapters and logs.
    pub fn coap(self) -> &'static str {
        match self {
            ResponseCode::Content => "2.05",
            ResponseCode::Changed => "2.04",
            ResponseCode::Deleted => "2.02",
            ResponseCode::BadRequest => "4.00",
            ResponseCode::Unauthorized => "4.01",
            ResponseCode::NotFound => "4.04",
            ResponseCode::MethodNotAllowed => "4.05",
            ResponseCode::InternalError => "5.00",
        }
    }

    /// True for the OK-family codes.
    pub fn is_success(self) -> bool {
        matches!(
            self,
            ResponseCode::Content | ResponseCode::Changed | ResponseCode::Deleted
        )
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, DmError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum DmError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("internal: {0}")]
    Internal(String),
}

impl DmError {
    /// Map internal error to a stable wire-facing code.
    pub fn response_code(&self) -> ResponseCode {
        match self {
            DmError::BadRequest(_) => ResponseCode::BadRequest,
            DmError::Unauthorized => ResponseCode::Unauthorized,
            DmError::NotFound => ResponseCode::NotFound,
            DmError::MethodNotAllowed => ResponseCode::MethodNotAllowed,
            DmError::Internal(_) => ResponseCode::InternalError,
        }
    }
}
