use serde::Deserialize;

use dmgate_core::error::{DmError, Result};
use dmgate_core::model::path::{ObjectId, OID_SECURITY};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub access: AccessSection,

    /// Instances declared at boot (seeds the resource store).
    #[serde(default)]
    pub objects: Vec<ObjectSeed>,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(DmError::BadRequest("config version must be 1".into()));
        }

        self.server.validate()?;
        self.access.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if !(500..=60000).contains(&self.request_timeout_ms) {
            return Err(DmError::BadRequest(
                "server.request_timeout_ms must be between 500 and 60000".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:5683".into()
}
fn default_request_timeout_ms() -> u64 {
    10000
}

/// Access-control section. The protected set is fixed for the process
/// lifetime once compiled by the policy layer.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessSection {
    #[serde(default = "default_protected_objects")]
    pub protected_objects: Vec<ObjectId>,
}

impl Default for AccessSection {
    fn default() -> Self {
        Self {
            protected_objects: default_protected_objects(),
        }
    }
}

impl AccessSection {
    pub fn validate(&self) -> Result<()> {
        // The Security object must never be left unprotected by config.
        if !self.protected_objects.contains(&OID_SECURITY) {
            return Err(DmError::BadRequest(
                "access.protected_objects must include the Security object (0)".into(),
            ));
        }
        Ok(())
    }
}

fn default_protected_objects() -> Vec<ObjectId> {
    vec![OID_SECURITY]
}

/// Boot-time instance declaration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectSeed {
    pub oid: ObjectId,
    #[serde(default)]
    pub instances: Vec<u16>,
}
