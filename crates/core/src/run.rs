//! Launching the assembled game.

use std::process::Command;

use tracing::info;

use q2kit_platform::Os;

use crate::Result;
use crate::config::BuildConfig;
use crate::error::Error;
use crate::paths::Layout;
use crate::process;

/// Extra engine arguments selecting the Odin renderer.
fn renderer_args(cfg: &BuildConfig) -> &'static [&'static str] {
  if cfg.use_odin_renderer {
    &["+set", "vid_renderer", "odin"]
  } else {
    &[]
  }
}

/// Launch the game from the release directory with `extra_args` appended.
///
/// A non-zero exit of the game process is fatal, like every other external
/// process in the pipeline.
pub fn run_game(cfg: &BuildConfig, layout: &Layout, os: Os, extra_args: &[String]) -> Result<()> {
  let exe = layout.release_dir().join(format!("quake2{}", os.exe_suffix()));
  if !exe.is_file() {
    return Err(Error::ArtifactMissing(exe));
  }
  let exe = exe.canonicalize()?;

  info!(exe = %exe.display(), "launching game");

  let mut command = Command::new(exe);
  command
    .current_dir(layout.release_dir())
    .args(extra_args)
    .args(renderer_args(cfg));

  // MoltenVK is not on the default loader path on Mac.
  if os == Os::Mac {
    command.env("DYLD_LIBRARY_PATH", "/opt/homebrew/opt/molten-vk/lib");
  }

  process::run(&mut command)
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  fn config(use_odin_renderer: bool) -> BuildConfig {
    BuildConfig {
      yquake2_url: String::new(),
      yquake2_commit: String::new(),
      yquake2_ref_vk_url: String::new(),
      yquake2_ref_vk_commit: String::new(),
      ericw_tools_url: String::new(),
      debug_build: false,
      build_odin: false,
      use_odin_renderer,
      odin_vet: false,
    }
  }

  #[test]
  fn renderer_args_only_with_odin_renderer() {
    assert_eq!(renderer_args(&config(false)), &[] as &[&str]);
    assert_eq!(renderer_args(&config(true)), &["+set", "vid_renderer", "odin"]);
  }

  #[test]
  fn missing_executable_names_the_file() {
    let temp = TempDir::new().unwrap();
    let layout = Layout::new(temp.path());

    let err = run_game(&config(false), &layout, Os::Linux, &[]).unwrap_err();
    match err {
      Error::ArtifactMissing(path) => assert!(path.ends_with("release/quake2")),
      other => panic!("unexpected error: {other}"),
    }
  }
}
