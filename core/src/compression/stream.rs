//! compression/stream.rs
//! Streaming helpers for inputs too large to hold in memory.
//!
//! These follow the same rules as the one-shot path: the encoder honours the
//! window log, the decoder accepts any window in the valid range and stops at
//! the output ceiling, and an empty source decodes to nothing. On error the
//! sink may already hold a prefix of the output; callers must discard it.
//!
//! Failures of the caller's own reader or writer surface as `CodecError::Io`;
//! everything the library reports while decoding is `CorruptData`.
use std::io::{self, BufRead, BufReader, ErrorKind, Read, Write};

use zstd::stream::read::Decoder;
use zstd::stream::write::Encoder;
use zstd_safe::CParameter;

use crate::compression::constants::{CODEC_ZSTD, DECODER_WINDOW_LOG_MAX, STREAM_BUFFER_SIZE};
use crate::compression::types::CodecError;

/// Byte counts for one streamed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamTotals {
    pub bytes_in: u64,
    pub bytes_out: u64,
}

/// Counts bytes and remembers whether the wrapped sink itself failed.
struct CountingWriter<W> {
    inner: W,
    written: u64,
    failed: bool,
}

impl<W> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, written: 0, failed: false }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.inner.write(buf) {
            Ok(n) => {
                self.written += n as u64;
                Ok(n)
            }
            Err(e) => {
                self.failed |= e.kind() != ErrorKind::Interrupted;
                Err(e)
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().map_err(|e| {
            self.failed = true;
            e
        })
    }
}

/// Counts bytes and remembers whether the wrapped source itself failed.
struct CountingReader<R> {
    inner: R,
    read: u64,
    failed: bool,
}

impl<R> CountingReader<R> {
    fn new(inner: R) -> Self {
        Self { inner, read: 0, failed: false }
    }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.inner.read(buf) {
            Ok(n) => {
                self.read += n as u64;
                Ok(n)
            }
            Err(e) => {
                self.failed |= e.kind() != ErrorKind::Interrupted;
                Err(e)
            }
        }
    }
}

fn init_failed(e: io::Error) -> CodecError {
    CodecError::CodecInitFailed { codec: CODEC_ZSTD.into(), msg: e.to_string() }
}

/// Blame the caller's stream if it reported a failure, the codec otherwise.
fn encode_failed(e: io::Error, caller_side: bool) -> CodecError {
    if caller_side {
        CodecError::Io(e)
    } else {
        CodecError::CodecProcessFailed { codec: CODEC_ZSTD.into(), msg: e.to_string() }
    }
}

fn decode_failed(e: io::Error, caller_side: bool) -> CodecError {
    if caller_side {
        CodecError::Io(e)
    } else {
        CodecError::CorruptData { msg: e.to_string() }
    }
}

/// Summary: Compress everything readable from `r` into one frame written to `w`.
/// - Interrupted reads are retried.
/// - The frame carries no content size, since the total is unknown up front.
pub fn compress_stream<R: Read, W: Write>(
    r: R,
    w: W,
    level: i32,
    window_log: u32,
    checksum: bool,
) -> Result<StreamTotals, CodecError> {
    let mut source = CountingReader::new(r);
    let mut encoder = Encoder::new(CountingWriter::new(w), level).map_err(init_failed)?;
    encoder.set_parameter(CParameter::WindowLog(window_log)).map_err(init_failed)?;
    encoder.set_parameter(CParameter::ChecksumFlag(checksum)).map_err(init_failed)?;

    let bytes_in = io::copy(&mut source, &mut encoder)
        .map_err(|e| encode_failed(e, source.failed || encoder.get_ref().failed))?;
    encoder
        .do_finish()
        .map_err(|e| encode_failed(e, encoder.get_ref().failed))?;

    let sink = encoder.get_mut();
    sink.flush()?;
    Ok(StreamTotals { bytes_in, bytes_out: sink.written })
}

/// Summary: Decompress every frame readable from `r` into `w`.
/// - An empty source yields empty output.
/// - Fails with `OutputTooLarge` before writing the block that would cross `limit`.
/// - Malformed or truncated frames fail with `CorruptData`.
pub fn decompress_stream<R: Read, W: Write>(
    r: R,
    mut w: W,
    limit: u64,
) -> Result<StreamTotals, CodecError> {
    let mut source = BufReader::with_capacity(STREAM_BUFFER_SIZE, CountingReader::new(r));

    let at_eof = loop {
        match source.fill_buf() {
            Ok(peek) => break peek.is_empty(),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(CodecError::Io(e)),
        }
    };
    if at_eof {
        w.flush()?;
        return Ok(StreamTotals::default());
    }

    let mut buf = vec![0u8; STREAM_BUFFER_SIZE];
    let mut bytes_out = 0u64;

    {
        let mut decoder = Decoder::with_buffer(&mut source).map_err(init_failed)?;
        decoder.window_log_max(DECODER_WINDOW_LOG_MAX).map_err(init_failed)?;

        loop {
            // The decoder never advances past a failed refill, so retrying is safe.
            let n = match decoder.read(&mut buf) {
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(decode_failed(e, decoder.get_ref().get_ref().failed)),
            };
            if n == 0 {
                break;
            }
            let total = bytes_out + n as u64;
            if total > limit {
                return Err(CodecError::OutputTooLarge { size: total, limit });
            }
            w.write_all(&buf[..n])?;
            bytes_out = total;
        }
    }

    w.flush()?;
    Ok(StreamTotals { bytes_in: source.get_ref().read, bytes_out })
}
