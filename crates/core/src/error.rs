//! Error types for q2kit-core

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while running build steps
#[derive(Debug, Error)]
pub enum Error {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("platform error: {0}")]
  Platform(#[from] q2kit_platform::PlatformError),

  #[error("failed to read config '{path}': {source}")]
  ConfigRead {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid config '{path}': {source}")]
  ConfigParse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },

  #[error("HTTP error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("download failed for '{url}': {message}")]
  DownloadFailed { url: String, message: String },

  #[error("failed to unpack archive '{path}': {message}")]
  Archive { path: PathBuf, message: String },

  #[error("failed to start '{program}': {source}")]
  Spawn {
    program: String,
    #[source]
    source: std::io::Error,
  },

  #[error("command '{program}' failed with exit code {code:?}")]
  CommandFailed { program: String, code: Option<i32> },

  #[error("map tool not found at '{0}'")]
  ToolMissing(PathBuf),

  #[error("build artifact not found at '{0}'")]
  ArtifactMissing(PathBuf),

  #[error("'{0}' not found in the pak0 extraction. Did you forget to provide a pak0.pak file?")]
  PakFileMissing(PathBuf),

  #[error("no dynamic-library extension is defined for this platform")]
  NoDynLibExt,
}
