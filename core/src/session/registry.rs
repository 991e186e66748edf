//! session/registry.rs
//! Name → session table. Owns every live session.
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::{
    compression::{create_codec, CodecFactory, LevelTier},
    config::ServiceConfig,
    params::SessionParams,
    session::{CompressionSession, SessionHandle},
    types::SessionError,
};

pub(crate) struct RegistryInner {
    sessions: RwLock<HashMap<String, Arc<CompressionSession>>>,
    next_id: AtomicU64,
    config: ServiceConfig,
    factory: CodecFactory,
}

impl RegistryInner {
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<CompressionSession>>> {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<CompressionSession>>> {
        self.sessions.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Next generated name not already taken by a caller-chosen one.
    /// Must be called with the write lock held so the name cannot be taken
    /// between the check and the insert.
    fn generate_name(&self, sessions: &HashMap<String, Arc<CompressionSession>>) -> String {
        loop {
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            let name = format!("{}_{}", self.config.name_prefix, id);
            if !sessions.contains_key(&name) {
                return name;
            }
        }
    }

    fn remove(&self, name: &str) -> Result<Arc<CompressionSession>, SessionError> {
        self.write()
            .remove(name)
            .ok_or_else(|| SessionError::NotFound(name.to_string()))
    }

    /// Close `session` only if it is still the entry registered under its name.
    pub(crate) fn close_session(&self, session: &Arc<CompressionSession>) -> Result<(), SessionError> {
        {
            let mut sessions = self.write();
            match sessions.get(session.name()) {
                Some(current) if Arc::ptr_eq(current, session) => {
                    sessions.remove(session.name());
                }
                _ => return Err(SessionError::NotFound(session.name().to_string())),
            }
        }
        session.shutdown();
        info!(session = %session.name(), "session closed");
        Ok(())
    }

    fn close_all(&self) -> usize {
        let drained: Vec<_> = self.write().drain().map(|(_, s)| s).collect();
        drained.iter().filter(|s| s.shutdown()).count()
    }
}

impl Drop for RegistryInner {
    fn drop(&mut self) {
        let closed = self.close_all();
        if closed > 0 {
            debug!(closed, "registry dropped with live sessions");
        }
    }
}

/// Process-wide session table. Cheap to clone; clones share the same table.
#[derive(Clone)]
pub struct SessionRegistry {
    inner: Arc<RegistryInner>,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::from_valid_config(ServiceConfig::default())
    }
}

impl SessionRegistry {
    pub fn new(config: ServiceConfig) -> Result<Self, SessionError> {
        Self::with_codec_factory(config, create_codec)
    }

    /// Registry whose sessions get their codec from `factory` instead of the
    /// linked zstd library.
    pub fn with_codec_factory(config: ServiceConfig, factory: CodecFactory) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self::build(config, factory))
    }

    fn from_valid_config(config: ServiceConfig) -> Self {
        Self::build(config, create_codec)
    }

    fn build(config: ServiceConfig, factory: CodecFactory) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                sessions: RwLock::new(HashMap::new()),
                next_id: AtomicU64::new(1),
                config,
                factory,
            }),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.inner.config
    }

    /// Create and register a session.
    ///
    /// - `name`: caller-chosen name, or `None` to have one generated.
    ///
    /// # Errors
    /// - `InvalidLevel` / `InvalidWindowSize` before anything is allocated.
    /// - `DuplicateName` if `name` is already registered.
    /// - `CodecFailure` if the codec rejects the parameters; nothing is registered.
    pub fn create(&self, name: Option<&str>, level: i32, window_log: i32) -> Result<SessionHandle, SessionError> {
        let params = SessionParams::new(level, window_log)?;
        self.create_with_params(name, params)
    }

    /// Create a session with the configured default level and window.
    pub fn create_default(&self, name: Option<&str>) -> Result<SessionHandle, SessionError> {
        let params = self.inner.config.default_params()?;
        self.create_with_params(name, params)
    }

    pub fn create_with_params(&self, name: Option<&str>, params: SessionParams) -> Result<SessionHandle, SessionError> {
        let config = &self.inner.config;
        if let Some(n) = name {
            if self.contains(n) {
                return Err(SessionError::DuplicateName(n.to_string()));
            }
        }

        // Built outside the map lock; the name is checked again before insert.
        let codec = (self.inner.factory)(params.codec_options(config.include_checksum, config.max_decompressed_size))
            .map_err(SessionError::CodecFailure)?;

        let mut sessions = self.inner.write();
        let name = match name {
            Some(n) if sessions.contains_key(n) => return Err(SessionError::DuplicateName(n.to_string())),
            Some(n) => n.to_string(),
            None => self.inner.generate_name(&sessions),
        };
        let session = Arc::new(CompressionSession::new(name.clone(), params, codec));
        sessions.insert(name, Arc::clone(&session));
        drop(sessions);

        info!(
            session = %session.name(),
            level = %LevelTier::describe(params.level()),
            window_log = params.window_log(),
            "session created"
        );
        Ok(SessionHandle::new(session, Arc::downgrade(&self.inner)))
    }

    pub fn get(&self, name: &str) -> Result<SessionHandle, SessionError> {
        let session = self
            .inner
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| SessionError::NotFound(name.to_string()))?;
        Ok(SessionHandle::new(session, Arc::downgrade(&self.inner)))
    }

    /// Close the session registered under `name`.
    pub fn close(&self, name: &str) -> Result<(), SessionError> {
        let session = self.inner.remove(name)?;
        session.shutdown();
        info!(session = %name, "session closed");
        Ok(())
    }

    /// Close every remaining session. Returns how many were closed.
    pub fn close_all(&self) -> usize {
        let closed = self.inner.close_all();
        info!(closed, "registry cleared");
        closed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.read().keys().cloned().collect();
        names.sort();
        names
    }
}
