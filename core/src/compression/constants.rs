/// Codec name reported in errors and codec info.
pub const CODEC_ZSTD: &str = "zstd";

/// Copy buffer for the streaming helpers (128 KiB, one zstd block).
pub const STREAM_BUFFER_SIZE: usize = 128 * 1024;

/// Decoder window limit. Frames encoded with any accepted window log must
/// decode, so the decoder is opened up to the top of the accepted range.
pub const DECODER_WINDOW_LOG_MAX: u32 = crate::constants::MAX_WINDOW_LOG as u32;
