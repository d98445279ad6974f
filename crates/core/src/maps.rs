//! Map compilation.
//!
//! Drives the three ericw-tools stages over every `.map` source under the
//! asset tree. The stages share a base name and hand off through the
//! `.bsp` written by qbsp; any stage failing aborts the whole step.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use q2kit_platform::Os;

use crate::Result;
use crate::error::Error;
use crate::paths::Layout;
use crate::process;

/// Compile every map source found in `base/maps/`.
pub fn compile_maps(layout: &Layout, os: Os) -> Result<()> {
  let maps_dir = layout.maps_dir();
  let stems = discover_maps(&maps_dir)?;

  if stems.is_empty() {
    info!(dir = %maps_dir.display(), "no map sources found");
    return Ok(());
  }

  let tools_dir = layout.tools_dir();
  let qbsp = tool_path(&tools_dir, "qbsp", os)?;
  let vis = tool_path(&tools_dir, "vis", os)?;
  let light = tool_path(&tools_dir, "light", os)?;

  for stem in &stems {
    info!(map = %stem, "compiling map");

    let map_file = format!("{stem}.map");
    let bsp_file = format!("{stem}.bsp");

    process::run(Command::new(&qbsp).args(["-q2bsp", &map_file]).current_dir(&maps_dir))?;
    process::run(Command::new(&vis).arg(&bsp_file).current_dir(&maps_dir))?;
    process::run(Command::new(&light).arg(&bsp_file).current_dir(&maps_dir))?;
  }

  Ok(())
}

/// Base names of all `.map` sources directly under `dir`, sorted for a
/// stable build order.
fn discover_maps(dir: &Path) -> Result<Vec<String>> {
  let mut stems = Vec::new();

  if !dir.is_dir() {
    return Ok(stems);
  }

  for entry in fs::read_dir(dir)? {
    let path = entry?.path();
    if path.is_file() && path.extension().is_some_and(|e| e == "map") {
      if let Some(stem) = path.file_stem() {
        stems.push(stem.to_string_lossy().into_owned());
      }
    }
  }

  stems.sort();
  Ok(stems)
}

/// Resolve a toolchain executable, making sure it can actually be invoked.
///
/// The zip the tools ship in does not always carry mode bits, so the
/// executable bits are set here when absent.
fn tool_path(tools_dir: &Path, name: &str, os: Os) -> Result<PathBuf> {
  let path = tools_dir.join(format!("{}{}", name, os.exe_suffix()));
  if !path.is_file() {
    return Err(Error::ToolMissing(path));
  }

  ensure_executable(&path)?;
  debug!(tool = name, path = %path.display(), "resolved map tool");
  Ok(path)
}

#[cfg(unix)]
fn ensure_executable(path: &Path) -> Result<()> {
  use std::os::unix::fs::PermissionsExt;

  let mut perms = path.metadata()?.permissions();
  if perms.mode() & 0o111 == 0 {
    debug!(path = %path.display(), "setting executable mode");
    perms.set_mode(perms.mode() | 0o111);
    fs::set_permissions(path, perms)?;
  }
  Ok(())
}

#[cfg(not(unix))]
fn ensure_executable(_path: &Path) -> Result<()> {
  Ok(())
}
