//! zstd-session
//!
//! Named, stateful zstd compression sessions with cumulative statistics.
//! The codec itself comes from the reference zstd library; this crate owns
//! parameter validation, the session registry, stats and error reporting.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod params;
pub mod types;
pub mod utils;

pub mod compression;
pub mod session;
pub mod telemetry;

// Public API
pub mod service;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{CodecError, CodecInfo, LevelTier};
    pub use crate::config::ServiceConfig;
    pub use crate::constants::*;
    pub use crate::service::ZstdService;
    pub use crate::session::{SessionHandle, SessionRegistry};
    pub use crate::telemetry::SessionStats;
    pub use crate::types::{ErrorKind, ErrorReport, SessionError};
}
