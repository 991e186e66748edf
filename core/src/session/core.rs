//! session/core.rs
//! One compression session: fixed parameters, a codec and its counters.
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::{
    compression::Codec,
    params::SessionParams,
    telemetry::{SessionCounters, SessionStats, Stage},
    types::SessionError,
};

struct SessionState {
    /// `None` once the session has been closed.
    codec: Option<Box<dyn Codec>>,
    counters: SessionCounters,
}

pub struct CompressionSession {
    name: String,
    params: SessionParams,
    created_at: DateTime<Utc>,
    state: Mutex<SessionState>,
}

impl std::fmt::Debug for CompressionSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompressionSession")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("created_at", &self.created_at)
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl CompressionSession {
    pub(crate) fn new(name: String, params: SessionParams, codec: Box<dyn Codec>) -> Self {
        Self {
            name,
            params,
            created_at: Utc::now(),
            state: Mutex::new(SessionState {
                codec: Some(codec),
                counters: SessionCounters::default(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        // Counters are only written after a codec call returns, so a panic
        // mid-call leaves them consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn not_found(&self) -> SessionError {
        SessionError::NotFound(self.name.clone())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> SessionParams {
        self.params
    }

    pub fn level(&self) -> i32 {
        self.params.level()
    }

    pub fn window_log(&self) -> u32 {
        self.params.window_log()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_closed(&self) -> bool {
        self.lock().codec.is_none()
    }

    /// Compress `data` into one frame using the session's level and window.
    ///
    /// Stats are updated only on success.
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>, SessionError> {
        let mut state = self.lock();
        let codec = state.codec.as_mut().ok_or_else(|| self.not_found())?;

        let start = Instant::now();
        let out = codec.compress(data).map_err(|e| {
            warn!(session = %self.name, error = %e, "compress failed");
            SessionError::CompressionFailed(e)
        })?;
        let elapsed = start.elapsed();

        state.counters.accumulate(Stage::Compress, data.len(), out.len(), elapsed);
        debug!(session = %self.name, original = data.len(), compressed = out.len(), "compressed");
        Ok(out)
    }

    /// Decompress every frame in `data`.
    ///
    /// Stats are updated only on success, with the output counted as the
    /// original side.
    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, SessionError> {
        let mut state = self.lock();
        let codec = state.codec.as_mut().ok_or_else(|| self.not_found())?;

        let start = Instant::now();
        let out = codec.decompress(data).map_err(|e| {
            warn!(session = %self.name, error = %e, "decompress failed");
            SessionError::DecompressionFailed(e)
        })?;
        let elapsed = start.elapsed();

        state.counters.accumulate(Stage::Decompress, out.len(), data.len(), elapsed);
        debug!(session = %self.name, compressed = data.len(), original = out.len(), "decompressed");
        Ok(out)
    }

    pub fn stats(&self) -> Result<SessionStats, SessionError> {
        let state = self.lock();
        if state.codec.is_none() {
            return Err(self.not_found());
        }
        Ok(SessionStats::from_counters(&state.counters))
    }

    /// Drop the codec. Waits for any in-flight call on this session.
    /// Returns `false` if the session was already shut down.
    pub(crate) fn shutdown(&self) -> bool {
        self.lock().codec.take().is_some()
    }
}
