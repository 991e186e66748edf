//! constants.rs
//! Parameter bounds and service-wide defaults.

/// Compression level bounds (inclusive).
pub const MIN_LEVEL: i32 = 1;
pub const MAX_LEVEL: i32 = 22;
pub const DEFAULT_LEVEL: i32 = 3;

/// Window size bounds, expressed as a base-2 exponent (inclusive).
pub const MIN_WINDOW_LOG: i32 = 10;
pub const MAX_WINDOW_LOG: i32 = 31;
pub const DEFAULT_WINDOW_LOG: i32 = 22;

/// Named level tiers exposed to callers.
pub mod level_tiers {
    pub const FASTEST: i32 = 1;
    pub const DEFAULT: i32 = 3;
    pub const BETTER: i32  = 6;
    pub const BEST: i32    = 9;
    pub const ULTRA: i32   = 19;
}

/// Decompression-bomb ceiling (512 MiB).
pub const DEFAULT_MAX_DECOMPRESSED_SIZE: u64 = 512 * 1024 * 1024;

/// Prefix for registry-generated session names.
pub const DEFAULT_NAME_PREFIX: &str = "compressor";
