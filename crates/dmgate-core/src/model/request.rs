//! DM request/response values and notification attribute queries.

use bytes::Bytes;

use crate::error::{DmError, ResponseCode, Result};
use crate::model::path::Target;

/// Device-management verb. Closed set: adding a verb forces every match in
/// the policy and dispatcher to be revisited at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DmOperation {
    Read,
    Write,
    Delete,
    Execute,
    WriteAttributes,
}

impl DmOperation {
    /// Lowercase name for logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            DmOperation::Read => "read",
            DmOperation::Write => "write",
            DmOperation::Delete => "delete",
            DmOperation::Execute => "execute",
            DmOperation::WriteAttributes => "write_attributes",
        }
    }
}

/// One decoded DM request, as handed over by a transport adapter.
#[derive(Debug, Clone)]
pub struct DmRequest {
    pub op: DmOperation,
    pub target: Target,
    /// Raw payload bytes (Write). Codec interpretation is the adapter's job.
    pub payload: Option<Bytes>,
    /// Ordered notification attributes (Write-Attributes).
    pub attributes: Vec<Attribute>,
}

impl DmRequest {
    pub fn new(op: DmOperation, target: Target) -> Self {
        Self {
            op,
            target,
            payload: None,
            attributes: Vec::new(),
        }
    }

    pub fn with_payload(mut self, payload: Bytes) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }
}

/// One DM response. Exactly one is produced per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DmResponse {
    pub status: ResponseCode,
    pub payload: Option<Bytes>,
}

impl DmResponse {
    /// Status-only response (no payload).
    pub fn status(status: ResponseCode) -> Self {
        Self {
            status,
            payload: None,
        }
    }

    /// Successful Read carrying content.
    pub fn content(payload: Bytes) -> Self {
        Self {
            status: ResponseCode::Content,
            payload: Some(payload),
        }
    }
}

/// A single `key=value` notification attribute (e.g. `pmax=1`).
///
/// Values are kept as raw strings; range/type validation belongs to the
/// store that applies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

/// Notification attribute keys accepted in Write-Attributes queries.
const KNOWN_ATTRIBUTE_KEYS: [&str; 5] = ["pmin", "pmax", "gt", "lt", "st"];

/// Compile an ordered `key=value` query into attributes.
///
/// Order is preserved; unknown keys and malformed entries are rejected.
pub fn parse_attribute_query(raw: &[String]) -> Result<Vec<Attribute>> {
    let mut out = Vec::with_capacity(raw.len());
    for s in raw {
        let (key, value) = s.split_once('=').ok_or_else(|| {
            DmError::BadRequest(format!("invalid attribute entry: {s} (expected key=value)"))
        })?;

        if !KNOWN_ATTRIBUTE_KEYS.contains(&key) {
            return Err(DmError::BadRequest(format!(
                "unknown notification attribute: {key}"
            )));
        }
        if value.is_empty() {
            return Err(DmError::BadRequest(format!(
                "empty value for attribute: {key}"
            )));
        }

        out.push(Attribute {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(out)
}
