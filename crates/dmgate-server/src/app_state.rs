//! Shared application state for the dmgate server.
//!
//! Wires config, access policy, resource store, and dispatcher together.
//! Startup errors are explicit (Result instead of panic).

use std::sync::Arc;

use dmgate_core::error::{DmError, Result};

use crate::config::ServerConfig;
use crate::dispatch::Dispatcher;
use crate::obs::ServerMetrics;
use crate::policy::{self, AccessPolicy};
use crate::store::MemoryStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    store: Arc<MemoryStore>,
    dispatcher: Arc<Dispatcher>,
    metrics: Arc<ServerMetrics>,
}

impl AppState {
    /// Build application state from validated config.
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        // 1) Compile the protected-object set into the policy gate.
        let protected = policy::protected::compile_protected_set(&cfg.access.protected_objects)
            .map_err(|e| DmError::BadRequest(format!("protected set compile failed: {e}")))?;
        let policy = Arc::new(AccessPolicy::new(protected));

        // 2) Seed the store from boot declarations.
        let store = Arc::new(MemoryStore::from_config(&cfg));
        tracing::info!(
            instances = store.instance_count(),
            protected = ?policy.protected().ids(),
            "resource store seeded"
        );

        // 3) Dispatcher on top of the gate + store.
        let store_seam: Arc<dyn crate::dispatch::ResourceStore> = store.clone();
        let dispatcher = Arc::new(Dispatcher::new(policy, store_seam));

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store,
                dispatcher,
                metrics: Arc::new(ServerMetrics::default()),
            }),
        })
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> Arc<MemoryStore> {
        Arc::clone(&self.inner.store)
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.inner.dispatcher)
    }

    pub fn metrics(&self) -> Arc<ServerMetrics> {
        Arc::clone(&self.inner.metrics)
    }
}
