//! Component builds.
//!
//! Each build is a thin wrapper over the component's own build system:
//! make for the engine, the Vulkan renderer and the C game library, the
//! Odin compiler for the Odin game and renderer flavors.

use std::fs;
use std::path::Path;
use std::process::Command;

use tracing::info;

use q2kit_platform::Os;

use crate::Result;
use crate::config::BuildConfig;
use crate::error::Error;
use crate::paths::Layout;
use crate::process;

/// Which game-library implementation a config selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameFlavor {
  /// Conventional C game library, built with make.
  C,
  /// Odin game library, built with the Odin compiler.
  Odin,
}

impl GameFlavor {
  pub fn from_config(cfg: &BuildConfig) -> Self {
    if cfg.build_odin { GameFlavor::Odin } else { GameFlavor::C }
  }
}

/// Flag set for a make-based component build. SDL3 is the only supported
/// audio/windowing backend.
fn make_args(cfg: &BuildConfig) -> Vec<&'static str> {
  let mut args = Vec::new();
  if cfg.debug_build {
    args.push("DEBUG=1");
  }
  args.push("WITH_SDL3=yes");
  args
}

/// Build the yquake2 engine.
pub fn build_engine(cfg: &BuildConfig, layout: &Layout) -> Result<()> {
  info!("building yquake2");
  process::run(Command::new("make").args(make_args(cfg)).current_dir(layout.engine_dir()))
}

/// Build the Vulkan renderer.
pub fn build_ref_vk(cfg: &BuildConfig, layout: &Layout) -> Result<()> {
  info!("building yquake2 ref_vk");
  process::run(Command::new("make").args(make_args(cfg)).current_dir(layout.ref_vk_dir()))
}

/// Build the game library in the flavor the config selects.
pub fn build_game(cfg: &BuildConfig, layout: &Layout, os: Os) -> Result<()> {
  match GameFlavor::from_config(cfg) {
    GameFlavor::Odin => build_game_odin(cfg, layout, os),
    GameFlavor::C => build_game_c(layout, os),
  }
}

/// The C game library always builds from a clean tree, then its artifact
/// is staged into the release.
fn build_game_c(layout: &Layout, os: Os) -> Result<()> {
  info!("building game-c");
  fs::create_dir_all(layout.baseq2_dir())?;

  let dir = layout.game_c_dir();
  process::run(Command::new("make").arg("clean").current_dir(&dir))?;
  process::run(Command::new("make").arg("DEBUG=0").current_dir(&dir))?;

  let lib = game_lib_name(os)?;
  let built = dir.join("release").join(&lib);
  if !built.is_file() {
    return Err(Error::ArtifactMissing(built));
  }
  fs::copy(&built, layout.baseq2_dir().join(&lib))?;

  Ok(())
}

fn build_game_odin(cfg: &BuildConfig, layout: &Layout, os: Os) -> Result<()> {
  info!("building game-odin");
  fs::create_dir_all(layout.baseq2_dir())?;

  let out = layout.baseq2_dir().join(game_lib_name(os)?);
  process::run(Command::new("odin").args(odin_build_args(cfg, &layout.game_odin_dir(), &out)))
}

/// Outcome of a renderer build request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
  Built,
  /// Preconditions not met; carries the reason for the skip.
  Skipped(&'static str),
}

/// Build the Odin renderer. Runs only when both the Odin build and the
/// Odin renderer are configured; otherwise reports why it did nothing.
pub fn build_render(cfg: &BuildConfig, layout: &Layout, os: Os) -> Result<RenderOutcome> {
  if !cfg.build_odin || !cfg.use_odin_renderer {
    return Ok(RenderOutcome::Skipped(
      "not using odin or not using the odin renderer",
    ));
  }

  info!("building render-odin");
  fs::create_dir_all(layout.release_dir())?;

  let ext = os.dyn_lib_ext().ok_or(Error::NoDynLibExt)?;
  let out = layout.release_dir().join(format!("ref_odin.{ext}"));
  process::run(Command::new("odin").args(odin_build_args(cfg, &layout.render_odin_dir(), &out)))?;

  Ok(RenderOutcome::Built)
}

/// Argument list for an Odin dynamic-library build.
fn odin_build_args(cfg: &BuildConfig, package_dir: &Path, out: &Path) -> Vec<String> {
  let mut args = vec![
    "build".to_string(),
    package_dir.display().to_string(),
    "-build-mode:dll".to_string(),
    format!("-out:{}", out.display()),
  ];
  if cfg.debug_build {
    args.push("-debug".to_string());
  }
  if cfg.odin_vet {
    args.push("-vet".to_string());
  }
  args
}

/// `game.<ext>` with the platform's dynamic-library extension.
fn game_lib_name(os: Os) -> Result<String> {
  let ext = os.dyn_lib_ext().ok_or(Error::NoDynLibExt)?;
  Ok(format!("game.{ext}"))
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  fn config(build_odin: bool, debug_build: bool, odin_vet: bool) -> BuildConfig {
    BuildConfig {
      yquake2_url: "https://example.invalid/yquake2.git".to_string(),
      yquake2_commit: "aaaa".to_string(),
      yquake2_ref_vk_url: "https://example.invalid/ref_vk.git".to_string(),
      yquake2_ref_vk_commit: "bbbb".to_string(),
      ericw_tools_url: "https://example.invalid/ericw-tools".to_string(),
      debug_build,
      build_odin,
      use_odin_renderer: false,
      odin_vet,
    }
  }

  #[test]
  fn flavor_follows_the_odin_flag() {
    assert_eq!(GameFlavor::from_config(&config(false, false, false)), GameFlavor::C);
    assert_eq!(GameFlavor::from_config(&config(true, false, false)), GameFlavor::Odin);
  }

  #[test]
  fn make_args_carry_debug_only_when_configured() {
    assert_eq!(make_args(&config(false, false, false)), vec!["WITH_SDL3=yes"]);
    assert_eq!(make_args(&config(false, true, false)), vec!["DEBUG=1", "WITH_SDL3=yes"]);
  }

  #[test]
  fn odin_args_include_configured_flags() {
    let out = Path::new("release/baseq2/game.so");

    let plain = odin_build_args(&config(true, false, false), Path::new("game-odin"), out);
    assert_eq!(
      plain,
      vec!["build", "game-odin", "-build-mode:dll", "-out:release/baseq2/game.so"]
    );

    let full = odin_build_args(&config(true, true, true), Path::new("game-odin"), out);
    assert_eq!(
      full,
      vec![
        "build",
        "game-odin",
        "-build-mode:dll",
        "-out:release/baseq2/game.so",
        "-debug",
        "-vet",
      ]
    );
  }

  #[test]
  fn render_is_skipped_unless_both_flags_are_set() {
    let temp = TempDir::new().unwrap();
    let layout = Layout::new(temp.path());

    for (build_odin, use_renderer) in [(false, false), (true, false), (false, true)] {
      let mut cfg = config(build_odin, false, false);
      cfg.use_odin_renderer = use_renderer;

      let outcome = build_render(&cfg, &layout, Os::Linux).unwrap();
      assert!(matches!(outcome, RenderOutcome::Skipped(_)));
    }

    // Skipping never touches the filesystem.
    assert!(!layout.release_dir().exists());
  }

  #[test]
  fn game_lib_name_is_platform_specific() {
    assert_eq!(game_lib_name(Os::Linux).unwrap(), "game.so");
    assert_eq!(game_lib_name(Os::Windows).unwrap(), "game.dll");
    assert_eq!(game_lib_name(Os::Mac).unwrap(), "game.dylib");
    assert!(matches!(game_lib_name(Os::Other), Err(Error::NoDynLibExt)));
  }
}
