//! Build configuration loading.
//!
//! `config.toml` at the project root pins the external sources (repository
//! URLs and commits, the toolchain base URL) and carries the boolean build
//! flags. The file is read once at startup; a missing file, a missing key
//! or a mistyped key is fatal before any step runs.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::Result;
use crate::error::Error;

/// Name of the settings file, looked up in the project root.
pub const CONFIG_FILE: &str = "config.toml";

/// Pinned sources and build flags, as declared in `config.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
  /// yquake2 engine repository and the commit it is pinned to.
  pub yquake2_url: String,
  pub yquake2_commit: String,

  /// Vulkan renderer repository and the commit it is pinned to.
  pub yquake2_ref_vk_url: String,
  pub yquake2_ref_vk_commit: String,

  /// Base URL of the ericw-tools release archive; the platform tag and
  /// `.zip` are appended at download time.
  pub ericw_tools_url: String,

  pub debug_build: bool,
  pub build_odin: bool,
  pub use_odin_renderer: bool,
  pub odin_vet: bool,
}

impl BuildConfig {
  /// Load and validate the settings file at `path`.
  pub fn load(path: &Path) -> Result<Self> {
    let text = fs::read_to_string(path).map_err(|e| Error::ConfigRead {
      path: path.to_path_buf(),
      source: e,
    })?;

    toml::from_str(&text).map_err(|e| Error::ConfigParse {
      path: path.to_path_buf(),
      source: e,
    })
  }
}
