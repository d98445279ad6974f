//! Fixed project layout.
//!
//! Every path the pipeline touches hangs off one project root, so tests
//! can aim the whole pipeline at a temporary directory.

use std::path::PathBuf;

use crate::config::CONFIG_FILE;

/// Well-known directories and files under the project root.
#[derive(Debug, Clone)]
pub struct Layout {
  root: PathBuf,
}

impl Layout {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn config_file(&self) -> PathBuf {
    self.root.join(CONFIG_FILE)
  }

  /// Scratch space for downloads and extractions.
  pub fn tmp_dir(&self) -> PathBuf {
    self.root.join("tmp")
  }

  /// User-supplied extraction of the retail pak0 archive.
  pub fn pak0_dir(&self) -> PathBuf {
    self.tmp_dir().join("pak0")
  }

  pub fn tools_archive(&self) -> PathBuf {
    self.tmp_dir().join("ericw-tools.zip")
  }

  pub fn tools_extract_dir(&self) -> PathBuf {
    self.tmp_dir().join("ericw-tools-extract")
  }

  /// Installed map-toolchain binaries.
  pub fn tools_dir(&self) -> PathBuf {
    self.tmp_dir().join("ericw-tools")
  }

  /// yquake2 engine checkout.
  pub fn engine_dir(&self) -> PathBuf {
    self.root.join("yquake2")
  }

  /// Vulkan renderer checkout.
  pub fn ref_vk_dir(&self) -> PathBuf {
    self.root.join("ref_vk")
  }

  pub fn game_c_dir(&self) -> PathBuf {
    self.root.join("game-c")
  }

  pub fn game_odin_dir(&self) -> PathBuf {
    self.root.join("game-odin")
  }

  pub fn render_odin_dir(&self) -> PathBuf {
    self.root.join("render-odin")
  }

  /// In-repo asset tree.
  pub fn base_dir(&self) -> PathBuf {
    self.root.join("base")
  }

  /// Map sources inside the asset tree.
  pub fn maps_dir(&self) -> PathBuf {
    self.base_dir().join("maps")
  }

  /// The assembled, runnable distribution.
  pub fn release_dir(&self) -> PathBuf {
    self.root.join("release")
  }

  pub fn baseq2_dir(&self) -> PathBuf {
    self.release_dir().join("baseq2")
  }

  /// TrenchBroom game definition shipped in-repo.
  pub fn trenchbroom_config_dir(&self) -> PathBuf {
    self.root.join("trenchbroom-config")
  }

  /// Destination of the lines-of-code report.
  pub fn loc_report(&self) -> PathBuf {
    self.root.join("game-c-loc.txt")
  }
}
