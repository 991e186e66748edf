//! session/handle.rs
//! Typed handle returned by the registry.
use std::ops::Deref;
use std::sync::{Arc, Weak};

use crate::session::registry::RegistryInner;
use crate::session::CompressionSession;
use crate::types::SessionError;

/// Reference to a live session.
///
/// Cloning a handle does not clone the session. Once the session is closed,
/// through any handle or by name, every handle's operations fail with
/// `NotFound`.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    session: Arc<CompressionSession>,
    registry: Weak<RegistryInner>,
}

impl SessionHandle {
    pub(crate) fn new(session: Arc<CompressionSession>, registry: Weak<RegistryInner>) -> Self {
        Self { session, registry }
    }

    /// Close the session and remove it from its registry.
    ///
    /// Fails with `NotFound` if this session was already closed, even when a
    /// newer session has since been registered under the same name.
    pub fn close(&self) -> Result<(), SessionError> {
        match self.registry.upgrade() {
            Some(registry) => registry.close_session(&self.session),
            // Registry is gone and took the session down with it.
            None => Err(SessionError::NotFound(self.session.name().to_string())),
        }
    }

    pub fn session(&self) -> &Arc<CompressionSession> {
        &self.session
    }
}

impl Deref for SessionHandle {
    type Target = CompressionSession;

    fn deref(&self) -> &Self::Target {
        &self.session
    }
}
