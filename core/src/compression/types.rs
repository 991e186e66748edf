//! compression/types.rs
//! Codec trait, codec options, level tiers and codec errors.
use std::fmt;

use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::constants::level_tiers;
use crate::utils::enum_name_or_level;

/// Named compression level tiers.
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum LevelTier {
    Fastest = level_tiers::FASTEST,
    Default = level_tiers::DEFAULT,
    Better  = level_tiers::BETTER,
    Best    = level_tiers::BEST,
    Ultra   = level_tiers::ULTRA,
}

impl LevelTier {
    pub fn level(self) -> i32 {
        self as i32
    }

    /// Tier name for a raw level, or the number itself when it is not a tier.
    pub fn describe(level: i32) -> String {
        enum_name_or_level::<LevelTier>(level)
    }
}

impl fmt::Display for LevelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LevelTier::Fastest => "fastest",
            LevelTier::Default => "default",
            LevelTier::Better  => "better",
            LevelTier::Best    => "best",
            LevelTier::Ultra   => "ultra",
        };
        f.write_str(name)
    }
}

/// Settings a codec instance is built with. Already validated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CodecOptions {
    pub level: i32,
    pub window_log: u32,
    pub checksum: bool,
    /// Upper bound on the size of any single decompressed output.
    pub max_output: u64,
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("corrupt compressed data: {msg}")]
    CorruptData { msg: String },

    #[error("decompressed size {size} exceeds limit of {limit} bytes")]
    OutputTooLarge { size: u64, limit: u64 },

    #[error("codec {codec} init failed: {msg}")]
    CodecInitFailed { codec: String, msg: String },

    #[error("codec {codec} process failed: {msg}")]
    CodecProcessFailed { codec: String, msg: String },

    /// The caller's reader or writer failed while streaming.
    #[error("stream i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// One-shot compression primitive a session drives.
///
/// Every call is self-contained: `compress` emits a complete frame and
/// `decompress` consumes complete frames. Implementations may keep reusable
/// context between calls but never carry data across them.
pub trait Codec: Send {
    fn compress(&mut self, input: &[u8]) -> Result<Vec<u8>, CodecError>;
    fn decompress(&mut self, input: &[u8]) -> Result<Vec<u8>, CodecError>;
}
