//! compression/registry.rs
//! Codec information and factory functions.

use serde::Serialize;

use crate::compression::codecs::ZstdCodec;
use crate::compression::constants::CODEC_ZSTD;
use crate::compression::types::{Codec, CodecError, CodecOptions};
use crate::constants::{DEFAULT_LEVEL, DEFAULT_WINDOW_LOG, MAX_LEVEL, MAX_WINDOW_LOG, MIN_LEVEL, MIN_WINDOW_LOG};

/// Capabilities of the linked codec.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodecInfo {
    pub codec: &'static str,
    /// Version string of the linked zstd library.
    pub version: &'static str,
    pub max_level: i32,
    pub min_level: i32,
    pub default_level: i32,
    pub min_window_log: i32,
    pub max_window_log: i32,
    pub default_window_log: i32,
}

pub fn codec_info() -> CodecInfo {
    CodecInfo {
        codec: CODEC_ZSTD,
        version: zstd_safe::version_string(),
        max_level: MAX_LEVEL,
        min_level: MIN_LEVEL,
        default_level: DEFAULT_LEVEL,
        min_window_log: MIN_WINDOW_LOG,
        max_window_log: MAX_WINDOW_LOG,
        default_window_log: DEFAULT_WINDOW_LOG,
    }
}

/// Builds the codec behind each new session.
pub type CodecFactory = fn(CodecOptions) -> Result<Box<dyn Codec>, CodecError>;

/// Build the codec a session drives.
pub fn create_codec(options: CodecOptions) -> Result<Box<dyn Codec>, CodecError> {
    Ok(Box::new(ZstdCodec::new(options)?))
}
