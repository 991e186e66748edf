//! compression/codecs/mod.rs
//! Concrete codec implementations behind the `Codec` trait.

pub mod zstd;

pub use self::zstd::*;
