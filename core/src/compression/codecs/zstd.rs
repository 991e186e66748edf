//! src/compression/codecs/zstd.rs
//!
//! Zstd codec backed by the reference library.
//!
//! Design notes:
//! - The encoder context is created once per codec and reused; level, window
//!   log and checksum flag are fixed at construction.
//! - Decoding goes through the streaming reader so the output can be capped
//!   while it is produced. Frames that declare a content size are rejected up
//!   front when that size is already over the limit.
//! - Errors are mapped into `CodecError` variants with codec context.
use std::io::Read;

use zstd::bulk::Compressor;
use zstd::stream::read::Decoder;
use zstd_safe::CParameter;

use crate::compression::constants::{CODEC_ZSTD, DECODER_WINDOW_LOG_MAX};
use crate::compression::types::{Codec, CodecError, CodecOptions};

/// A header may lie about its size, so trust it only this far when allocating.
const PREALLOC_CAP: u64 = 16 * 1024 * 1024;

fn init_failed(e: std::io::Error) -> CodecError {
    CodecError::CodecInitFailed { codec: CODEC_ZSTD.into(), msg: e.to_string() }
}

fn process_failed(e: std::io::Error) -> CodecError {
    CodecError::CodecProcessFailed { codec: CODEC_ZSTD.into(), msg: e.to_string() }
}

/// Zstd codec bound to one level/window configuration.
pub struct ZstdCodec {
    encoder: Compressor<'static>,
    options: CodecOptions,
}

impl ZstdCodec {
    /// Create a codec with an encoder context configured from `options`.
    ///
    /// # Errors
    /// - `CodecError::CodecInitFailed` if the library rejects a parameter.
    pub fn new(options: CodecOptions) -> Result<Self, CodecError> {
        let encoder = new_encoder(options.level, Some(options.window_log), options.checksum)?;
        Ok(Self { encoder, options })
    }
}

impl Codec for ZstdCodec {
    fn compress(&mut self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        self.encoder.compress(input).map_err(process_failed)
    }

    fn decompress(&mut self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        decode_frames(input, self.options.max_output)
    }
}

pub(crate) fn new_encoder(
    level: i32,
    window_log: Option<u32>,
    checksum: bool,
) -> Result<Compressor<'static>, CodecError> {
    let mut encoder = Compressor::new(level).map_err(init_failed)?;
    if let Some(w) = window_log {
        encoder.set_parameter(CParameter::WindowLog(w)).map_err(init_failed)?;
    }
    encoder.set_parameter(CParameter::ChecksumFlag(checksum)).map_err(init_failed)?;
    Ok(encoder)
}

/// Compress `input` into a single frame without keeping any context around.
pub fn compress_once(input: &[u8], level: i32, checksum: bool) -> Result<Vec<u8>, CodecError> {
    let mut encoder = new_encoder(level, None, checksum)?;
    encoder.compress(input).map_err(process_failed)
}

/// Check the first frame header and return its declared content size, if any.
///
/// # Errors
/// - `CodecError::CorruptData` if `input` does not start with a frame header.
/// - `CodecError::OutputTooLarge` if the declared size is over `limit`.
pub fn declared_content_size(input: &[u8], limit: u64) -> Result<Option<u64>, CodecError> {
    match zstd_safe::get_frame_content_size(input) {
        Ok(Some(size)) if size > limit => Err(CodecError::OutputTooLarge { size, limit }),
        Ok(size) => Ok(size),
        Err(_) => Err(CodecError::CorruptData { msg: "missing or invalid frame header".into() }),
    }
}

/// Decode every frame in `input`, refusing to produce more than `limit` bytes.
///
/// Empty input decodes to empty output.
pub fn decode_frames(input: &[u8], limit: u64) -> Result<Vec<u8>, CodecError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let declared = declared_content_size(input, limit)?;

    let mut decoder = Decoder::with_buffer(input).map_err(init_failed)?;
    decoder.window_log_max(DECODER_WINDOW_LOG_MAX).map_err(init_failed)?;

    // One byte past the limit is enough to tell "exactly at limit" from "over".
    let mut out = Vec::with_capacity(declared.unwrap_or(0).min(PREALLOC_CAP) as usize);
    decoder
        .take(limit.saturating_add(1))
        .read_to_end(&mut out)
        .map_err(|e| CodecError::CorruptData { msg: e.to_string() })?;

    if out.len() as u64 > limit {
        return Err(CodecError::OutputTooLarge { size: out.len() as u64, limit });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(max_output: u64) -> CodecOptions {
        CodecOptions { level: 3, window_log: 22, checksum: true, max_output }
    }

    #[test]
    fn frame_declares_content_size() {
        let mut codec = ZstdCodec::new(options(1 << 20)).unwrap();
        let frame = codec.compress(&[7u8; 1000]).unwrap();
        assert_eq!(declared_content_size(&frame, 1 << 20).unwrap(), Some(1000));
    }

    #[test]
    fn declared_size_over_limit_is_rejected_before_decoding() {
        let mut codec = ZstdCodec::new(options(1 << 20)).unwrap();
        let frame = codec.compress(&[0u8; 4096]).unwrap();
        match declared_content_size(&frame, 100) {
            Err(CodecError::OutputTooLarge { size, limit }) => {
                assert_eq!(size, 4096);
                assert_eq!(limit, 100);
            }
            other => panic!("expected OutputTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn output_exactly_at_limit_is_accepted() {
        let frame = compress_once(&[1u8; 512], 3, false).unwrap();
        assert_eq!(decode_frames(&frame, 512).unwrap().len(), 512);
    }

    #[test]
    fn garbage_header_is_corrupt() {
        let err = decode_frames(b"definitely not zstd", 1024).unwrap_err();
        assert!(matches!(err, CodecError::CorruptData { .. }));
    }
}
