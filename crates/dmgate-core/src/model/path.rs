//! Object/instance/resource addressing (panic-free).
//!
//! Parsing rules:
//! - Never index into segments — split and check every piece.
//! - Never `unwrap()` / `expect()` / `panic!()` in production paths.

use serde::Deserialize;

use crate::error::{DmError, Result};

/// Object type identifier, fixed by the protocol registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u16);

/// Reserved Security object (credentials, bootstrap parameters).
pub const OID_SECURITY: ObjectId = ObjectId(0);
/// Server object.
pub const OID_SERVER: ObjectId = ObjectId(1);
/// Access Control object.
pub const OID_ACCESS_CONTROL: ObjectId = ObjectId(2);
/// Device object.
pub const OID_DEVICE: ObjectId = ObjectId(3);

/// Security object resource: Bootstrap-Server flag.
pub const RID_SECURITY_BOOTSTRAP: u16 = 1;
/// Security object resource: Short Server ID.
pub const RID_SECURITY_SHORT_SERVER_ID: u16 = 10;

/// (object, instance index) pair. The index is not guaranteed to correspond
/// to an existing instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstancePath {
    pub object: ObjectId,
    pub instance: u16,
}

impl InstancePath {
    pub fn new(object: ObjectId, instance: u16) -> Self {
        Self { object, instance }
    }
}

impl std::fmt::Display for InstancePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}/{}", self.object.0, self.instance)
    }
}

/// A single resource within an instance (Execute, Write-Attributes targets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    pub instance: InstancePath,
    pub resource: u16,
}

impl ResourcePath {
    pub fn new(object: ObjectId, instance: u16, resource: u16) -> Self {
        Self {
            instance: InstancePath::new(object, instance),
            resource,
        }
    }
}

impl std::fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.instance, self.resource)
    }
}

/// Addressing target of a DM request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Instance(InstancePath),
    Resource(ResourcePath),
}

impl Target {
    /// Object the target lives under, regardless of depth.
    pub fn object_id(&self) -> ObjectId {
        match self {
            Target::Instance(p) => p.object,
            Target::Resource(p) => p.instance.object,
        }
    }

    /// Owning instance path. A resource target reduces to its instance, so
    /// access checks answer identically at both depths.
    pub fn instance_path(&self) -> InstancePath {
        match self {
            Target::Instance(p) => *p,
            Target::Resource(p) => p.instance,
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Instance(p) => p.fmt(f),
            Target::Resource(p) => p.fmt(f),
        }
    }
}

fn parse_segment(seg: &str, what: &str) -> Result<u16> {
    seg.parse::<u16>()
        .map_err(|_| DmError::BadRequest(format!("invalid {what} segment: {seg}")))
}

/// Decode a URI-style target path: `/oid/iid` or `/oid/iid/rid`.
///
/// Object-level paths (`/oid`) are rejected here; this core only dispatches
/// instance- and resource-addressed operations.
pub fn parse_target(path: &str) -> Result<Target> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        return Err(DmError::BadRequest("empty target path".into()));
    }

    let mut segs = trimmed.split('/');
    // split always yields at least one item; guarded by the emptiness check.
    let oid = match segs.next() {
        Some(s) => parse_segment(s, "object id")?,
        None => return Err(DmError::BadRequest("empty target path".into())),
    };

    let iid = match segs.next() {
        Some(s) => parse_segment(s, "instance id")?,
        None => {
            return Err(DmError::BadRequest(format!(
                "object-level path not addressable: /{oid}"
            )))
        }
    };

    let target = match segs.next() {
        None => Target::Instance(InstancePath::new(ObjectId(oid), iid)),
        Some(s) => {
            let rid = parse_segment(s, "resource id")?;
            Target::Resource(ResourcePath::new(ObjectId(oid), iid, rid))
        }
    };

    if segs.next().is_some() {
        return Err(DmError::BadRequest(format!(
            "target path too deep: {path}"
        )));
    }

    Ok(target)
}
