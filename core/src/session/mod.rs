//! session/mod.rs
//! Named, stateful compression sessions and the registry that owns them.
//!
//! Locking:
//! - The registry map sits behind its own `RwLock`; it is only held while the
//!   map is read or edited, never across a codec call.
//! - Each session guards its codec and counters with one `Mutex`, so codec
//!   work, stats updates and close are mutually exclusive per session and
//!   independent across sessions.

pub mod core;
pub mod handle;
pub mod registry;

pub use self::core::CompressionSession;
pub use self::handle::SessionHandle;
pub use self::registry::SessionRegistry;
