//! Error types for q2kit-platform

use thiserror::Error;

/// Errors that can occur in platform operations
#[derive(Debug, Error)]
pub enum PlatformError {
  #[error("failed to determine home directory")]
  NoHomeDirectory,

  #[error("APPDATA environment variable is not set")]
  MissingAppData,

  #[error("this operating system is not supported")]
  Unsupported,
}
