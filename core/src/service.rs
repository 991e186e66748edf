//! service.rs
//! Stable public API: sessions, one-shot helpers and codec info.

use tracing::{debug, warn};

use crate::{
    compression::{codec_info, compress_once, decode_frames, CodecInfo},
    config::ServiceConfig,
    params::validate_level,
    session::{SessionHandle, SessionRegistry},
    types::SessionError,
};

/// Entry point for callers. Owns one registry; independent services share
/// nothing.
#[derive(Clone, Default)]
pub struct ZstdService {
    registry: SessionRegistry,
}

impl ZstdService {
    pub fn new(config: ServiceConfig) -> Result<Self, SessionError> {
        Ok(Self { registry: SessionRegistry::new(config)? })
    }

    pub fn config(&self) -> &ServiceConfig {
        self.registry.config()
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// Create a session with a generated name.
    pub fn create_session(&self, level: i32, window_log: i32) -> Result<SessionHandle, SessionError> {
        self.registry.create(None, level, window_log)
    }

    /// Create a session with the configured default level and window.
    pub fn create_default_session(&self) -> Result<SessionHandle, SessionError> {
        self.registry.create_default(None)
    }

    pub fn create_named_session(&self, name: &str, level: i32, window_log: i32) -> Result<SessionHandle, SessionError> {
        self.registry.create(Some(name), level, window_log)
    }

    pub fn session(&self, name: &str) -> Result<SessionHandle, SessionError> {
        self.registry.get(name)
    }

    pub fn close_session(&self, name: &str) -> Result<(), SessionError> {
        self.registry.close(name)
    }

    /// Stateless one-shot compression; no session involved.
    pub fn quick_compress(&self, data: &[u8], level: i32) -> Result<Vec<u8>, SessionError> {
        validate_level(level)?;
        let out = compress_once(data, level, self.config().include_checksum).map_err(|e| {
            warn!(error = %e, "quick compress failed");
            SessionError::CompressionFailed(e)
        })?;
        debug!(original = data.len(), compressed = out.len(), level, "quick compress");
        Ok(out)
    }

    /// Stateless one-shot decompression, bounded by the configured ceiling.
    pub fn quick_decompress(&self, data: &[u8]) -> Result<Vec<u8>, SessionError> {
        let out = decode_frames(data, self.config().max_decompressed_size).map_err(|e| {
            warn!(error = %e, "quick decompress failed");
            SessionError::DecompressionFailed(e)
        })?;
        debug!(compressed = data.len(), original = out.len(), "quick decompress");
        Ok(out)
    }

    pub fn codec_info(&self) -> CodecInfo {
        codec_info()
    }

    /// Close every remaining session. Returns how many were closed.
    pub fn shutdown(&self) -> usize {
        self.registry.close_all()
    }
}
