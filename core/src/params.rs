//! params.rs
//! Parameter validation. Runs before any codec state is allocated.

use crate::{
    compression::CodecOptions,
    constants::{DEFAULT_LEVEL, DEFAULT_WINDOW_LOG, MAX_LEVEL, MAX_WINDOW_LOG, MIN_LEVEL, MIN_WINDOW_LOG},
    types::SessionError,
};

pub fn validate_level(level: i32) -> Result<(), SessionError> {
    if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        Ok(())
    } else {
        Err(SessionError::InvalidLevel(level))
    }
}

pub fn validate_window_size(window_log: i32) -> Result<(), SessionError> {
    if (MIN_WINDOW_LOG..=MAX_WINDOW_LOG).contains(&window_log) {
        Ok(())
    } else {
        Err(SessionError::InvalidWindowSize(window_log))
    }
}

/// A level/window pair that has passed validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SessionParams {
    level: i32,
    window_log: u32,
}

impl SessionParams {
    /// Level is checked first, so a call with both values out of range
    /// reports the level.
    pub fn new(level: i32, window_log: i32) -> Result<Self, SessionError> {
        validate_level(level)?;
        validate_window_size(window_log)?;
        Ok(Self { level, window_log: window_log as u32 })
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn window_log(&self) -> u32 {
        self.window_log
    }

    pub fn codec_options(&self, checksum: bool, max_output: u64) -> CodecOptions {
        CodecOptions {
            level: self.level,
            window_log: self.window_log,
            checksum,
            max_output,
        }
    }
}

impl Default for SessionParams {
    fn default() -> Self {
        Self { level: DEFAULT_LEVEL, window_log: DEFAULT_WINDOW_LOG as u32 }
    }
}
