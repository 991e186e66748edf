//! compression/mod.rs
//! Codec adapter: the only layer that talks to the zstd library.
//!
//! Notes:
//! - Sessions hold a `Box<dyn Codec>` built by `registry::create_codec`.
//! - One-shot helpers (`compress_once`, `decode_frames`) back the stateless API.
//! - `stream` offers the same rules over `Read`/`Write` pairs.

pub mod constants;
pub mod types;
pub mod registry;
pub mod codecs;
pub mod stream;

pub use constants::*;
pub use types::*;
pub use registry::*;
pub use codecs::{compress_once, declared_content_size, decode_frames, ZstdCodec};
pub use stream::{compress_stream, decompress_stream, StreamTotals};
