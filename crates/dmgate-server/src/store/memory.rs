use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use dmgate_core::model::path::{InstancePath, ResourcePath};
use dmgate_core::model::request::Attribute;

use crate::config::ServerConfig;
use crate::dispatch::{ExecOutcome, ResourceStore, StoreError};

/// A single resource slot within an instance.
#[derive(Debug, Clone)]
enum ResourceSlot {
    Value(Bytes),
    Executable,
}

#[derive(Debug, Default, Clone)]
struct InstanceEntry {
    /// Whole-instance content as last written (opaque to the store).
    content: Bytes,
    resources: HashMap<u16, ResourceSlot>,
    /// Notification attributes per resource, in write order.
    attributes: HashMap<u16, Vec<Attribute>>,
}

/// In-memory resource store: `InstancePath -> InstanceEntry`.
///
/// Mutations go through DashMap entry locks, which serializes Write/Delete
/// per instance; different instances proceed independently.
#[derive(Default)]
pub struct MemoryStore {
    instances: DashMap<InstancePath, InstanceEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            instances: DashMap::new(),
        }
    }

    /// Seed the store from boot config declarations.
    pub fn from_config(cfg: &ServerConfig) -> Self {
        let store = Self::new();
        for seed in &cfg.objects {
            for &iid in &seed.instances {
                store.declare_instance(InstancePath::new(seed.oid, iid));
            }
        }
        store
    }

    /// Declare an (empty) instance. Idempotent.
    pub fn declare_instance(&self, path: InstancePath) {
        self.instances.entry(path).or_default();
    }

    /// Set a value resource on an existing or new instance.
    pub fn put_resource(&self, path: ResourcePath, value: Bytes) {
        self.instances
            .entry(path.instance)
            .or_default()
            .resources
            .insert(path.resource, ResourceSlot::Value(value));
    }

    /// Mark a resource as executable.
    pub fn put_executable(&self, path: ResourcePath) {
        self.instances
            .entry(path.instance)
            .or_default()
            .resources
            .insert(path.resource, ResourceSlot::Executable);
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Attributes currently attached to a resource (test observability).
    pub fn attributes_of(&self, path: ResourcePath) -> Option<Vec<Attribute>> {
        self.instances
            .get(&path.instance)
            .and_then(|e| e.attributes.get(&path.resource).cloned())
    }
}

#[async_trait]
impl ResourceStore for MemoryStore {
    async fn instance_exists(&self, path: InstancePath) -> Result<bool, StoreError> {
        Ok(self.instances.contains_key(&path))
    }

    async fn read_instance(&self, path: InstancePath) -> Result<Option<Bytes>, StoreError> {
        Ok(self.instances.get(&path).map(|e| e.content.clone()))
    }

    async fn write_instance(
        &self,
        path: InstancePath,
        payload: Bytes,
    ) -> Result<bool, StoreError> {
        match self.instances.get_mut(&path) {
            Some(mut e) => {
                e.content = payload;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_instance(&self, path: InstancePath) -> Result<bool, StoreError> {
        Ok(self.instances.remove(&path).is_some())
    }

    async fn execute(&self, path: ResourcePath) -> Result<ExecOutcome, StoreError> {
        let Some(entry) = self.instances.get(&path.instance) else {
            return Ok(ExecOutcome::NotFound);
        };
        match entry.resources.get(&path.resource) {
            Some(ResourceSlot::Executable) => Ok(ExecOutcome::Done),
            Some(ResourceSlot::Value(_)) => Ok(ExecOutcome::NotExecutable),
            None => Ok(ExecOutcome::NotFound),
        }
    }

    async fn write_attributes(
        &self,
        path: ResourcePath,
        attrs: &[Attribute],
    ) -> Result<bool, StoreError> {
        match self.instances.get_mut(&path.instance) {
            Some(mut e) => {
                if !e.resources.contains_key(&path.resource) {
                    return Ok(false);
                }
                e.attributes.insert(path.resource, attrs.to_vec());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
