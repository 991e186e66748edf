//! types.rs
//! Session-layer error type, its classification and the flattened report.
use std::error::Error as _;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::{
    compression::CodecError,
    config::ConfigError,
    constants::{MAX_LEVEL, MAX_WINDOW_LOG, MIN_LEVEL, MIN_WINDOW_LOG},
};

/// Unified session-layer error.
/// - Validation errors are raised before anything is allocated.
/// - Codec errors keep the underlying `CodecError` as their source.
/// - Messages aim to be stable; `code()` is stable across releases.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid compression level: {0} (must be {min}-{max})", min = MIN_LEVEL, max = MAX_LEVEL)]
    InvalidLevel(i32),

    #[error("invalid window size: {0} (must be {min}-{max})", min = MIN_WINDOW_LOG, max = MAX_WINDOW_LOG)]
    InvalidWindowSize(i32),

    #[error("session already exists: {0}")]
    DuplicateName(String),

    #[error("session not found: {0}")]
    NotFound(String),

    #[error("compression failed: {0}")]
    CompressionFailed(#[source] CodecError),

    #[error("decompression failed: {0}")]
    DecompressionFailed(#[source] CodecError),

    /// Codec could not be set up while creating a session.
    #[error("codec failure: {0}")]
    CodecFailure(#[source] CodecError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Who has to act on a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Bad parameters; the caller can fix the input.
    Validation,
    /// Name collision or unknown session; a caller logic bug.
    Resource,
    /// Malformed or oversized compressed data; fix or discard the data.
    Data,
    /// Opaque failure inside the codec library.
    Codec,
    /// The caller's own reader or writer failed.
    Io,
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Resource   => "resource",
            ErrorKind::Data       => "data",
            ErrorKind::Codec      => "codec",
            ErrorKind::Io         => "io",
            ErrorKind::Config     => "config",
        };
        f.write_str(name)
    }
}

fn codec_kind(e: &CodecError) -> ErrorKind {
    match e {
        CodecError::CorruptData { .. } | CodecError::OutputTooLarge { .. } => ErrorKind::Data,
        CodecError::CodecInitFailed { .. } | CodecError::CodecProcessFailed { .. } => ErrorKind::Codec,
        CodecError::Io(_) => ErrorKind::Io,
    }
}

fn codec_code(e: &CodecError) -> u16 {
    match e {
        CodecError::CorruptData { .. } => 3001,
        CodecError::OutputTooLarge { .. } => 3002,
        CodecError::CodecInitFailed { .. } | CodecError::CodecProcessFailed { .. } => 4001,
        CodecError::Io(_) => 6001,
    }
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::InvalidLevel(_) | SessionError::InvalidWindowSize(_) => ErrorKind::Validation,
            SessionError::DuplicateName(_) | SessionError::NotFound(_) => ErrorKind::Resource,
            SessionError::CompressionFailed(e)
            | SessionError::DecompressionFailed(e)
            | SessionError::CodecFailure(e) => codec_kind(e),
            SessionError::Config(_) => ErrorKind::Config,
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            SessionError::InvalidLevel(_) => 1001,
            SessionError::InvalidWindowSize(_) => 1002,
            SessionError::DuplicateName(_) => 2001,
            SessionError::NotFound(_) => 2002,
            SessionError::CompressionFailed(e)
            | SessionError::DecompressionFailed(e)
            | SessionError::CodecFailure(e) => codec_code(e),
            SessionError::Config(_) => 5001,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

/// Flattened description of a failure for callers across a process or
/// language boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub code: u16,
    pub kind: ErrorKind,
    pub message: String,
    pub cause: Option<String>,
}

impl ErrorReport {
    pub fn from_error(err: &SessionError) -> Self {
        Self {
            code: err.code(),
            kind: err.kind(),
            message: err.to_string(),
            cause: err.source().map(|s| s.to_string()),
        }
    }
}

impl From<&SessionError> for ErrorReport {
    fn from(err: &SessionError) -> Self {
        ErrorReport::from_error(err)
    }
}
