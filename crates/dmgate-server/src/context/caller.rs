use dmgate_core::model::path::ObjectId;

/// Authorization state of the peer behind a session.
///
/// Created when a connection is established, discarded when it ends;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    /// No completed handshake / no active session.
    Unauthenticated,
    /// A management server authenticated under its Short Server ID.
    Server { short_id: u16 },
    /// The bootstrap server. Only it may manage protected objects.
    Bootstrap,
}

/// Per-session caller identity handed to the policy and dispatcher.
#[derive(Debug, Clone)]
pub struct CallerContext {
    /// Session identifier (per-connection), used for log correlation.
    pub session_id: String,
    pub auth: Authorization,
}

impl CallerContext {
    pub fn new(session_id: impl Into<String>, auth: Authorization) -> Self {
        Self {
            session_id: session_id.into(),
            auth,
        }
    }

    pub fn unauthenticated(session_id: impl Into<String>) -> Self {
        Self::new(session_id, Authorization::Unauthenticated)
    }

    pub fn bootstrap(session_id: impl Into<String>) -> Self {
        Self::new(session_id, Authorization::Bootstrap)
    }

    /// Whether this caller holds the capability to manage instances of a
    /// protected object. Regular management servers never do; the object
    /// holding their own credentials is exactly what must stay opaque.
    pub fn can_manage_protected(&self, _object: ObjectId) -> bool {
        matches!(self.auth, Authorization::Bootstrap)
    }

    /// Short label for logs.
    pub fn auth_label(&self) -> &'static str {
        match self.auth {
            Authorization::Unauthenticated => "unauthenticated",
            Authorization::Server { .. } => "server",
            Authorization::Bootstrap => "bootstrap",
        }
    }
}
