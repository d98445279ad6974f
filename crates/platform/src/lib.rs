//! Platform detection and OS-specific paths for the q2kit build tool.
//!
//! This crate provides:
//! - Host OS detection into a small closed enum
//! - File-extension and archive-suffix naming derived from the OS
//! - Well-known directories of third-party tools (TrenchBroom)

mod error;
mod paths;
mod platform;

pub use error::PlatformError;
pub use paths::trenchbroom_games_dir;
pub use platform::Os;
