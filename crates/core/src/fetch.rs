//! Source checkout and toolchain download.
//!
//! The two source repositories are pinned to exact commits in
//! `config.toml` and checked out with git driven as an external process.
//! An existing destination directory means the checkout is skipped
//! wholesale; no freshness check is attempted.
//!
//! The ericw-tools archive is downloaded once per platform and its
//! binaries installed into the toolchain directory on every fetch.

use std::fs;
use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use q2kit_platform::{Os, PlatformError};

use crate::Result;
use crate::config::BuildConfig;
use crate::error::Error;
use crate::paths::Layout;
use crate::process;

/// What a checkout request actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneOutcome {
  /// Fresh clone, checked out at the pinned commit.
  Cloned,
  /// Destination already present; nothing was fetched.
  SkippedExisting,
}

/// Clone `url` into `dest` and check out `commit`.
///
/// Skips entirely when `dest` already exists. Clone and checkout failures
/// are both fatal.
pub fn clone_at(url: &str, dest: &Path, commit: &str) -> Result<CloneOutcome> {
  if dest.exists() {
    info!(dest = %dest.display(), "directory already exists, skipping clone");
    return Ok(CloneOutcome::SkippedExisting);
  }

  info!(url, commit, "cloning");
  process::run(Command::new("git").args(["clone", url]).arg(dest))?;
  process::run(Command::new("git").args(["checkout", commit]).current_dir(dest))?;

  Ok(CloneOutcome::Cloned)
}

/// Download `url` to `dest`.
pub fn download(url: &str, dest: &Path) -> Result<()> {
  info!(url, "downloading");

  if let Some(parent) = dest.parent() {
    fs::create_dir_all(parent)?;
  }

  let response = reqwest::blocking::get(url)?;
  if !response.status().is_success() {
    return Err(Error::DownloadFailed {
      url: url.to_string(),
      message: format!("HTTP {}", response.status()),
    });
  }

  let bytes = response.bytes()?;
  fs::write(dest, &bytes)?;

  info!(dest = %dest.display(), size = bytes.len(), "download complete");
  Ok(())
}

/// Unpack a `.zip` archive into `dest`, preserving Unix mode bits.
pub fn unpack_zip(archive_path: &Path, dest: &Path) -> Result<()> {
  let archive_err = |message: String| Error::Archive {
    path: archive_path.to_path_buf(),
    message,
  };

  let file = fs::File::open(archive_path)?;
  let mut archive =
    zip::ZipArchive::new(std::io::BufReader::new(file)).map_err(|e| archive_err(e.to_string()))?;

  fs::create_dir_all(dest)?;

  for i in 0..archive.len() {
    let mut entry = archive.by_index(i).map_err(|e| archive_err(e.to_string()))?;

    let path = entry
      .enclosed_name()
      .ok_or_else(|| archive_err(format!("unsafe entry name '{}'", entry.name())))?;
    let dest_path = dest.join(path);

    if entry.is_dir() {
      fs::create_dir_all(&dest_path)?;
    } else {
      if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent)?;
      }

      let mut outfile = fs::File::create(&dest_path)?;
      std::io::copy(&mut entry, &mut outfile)?;

      #[cfg(unix)]
      {
        use std::os::unix::fs::PermissionsExt;
        if let Some(mode) = entry.unix_mode() {
          fs::set_permissions(&dest_path, fs::Permissions::from_mode(mode))?;
        }
      }
    }
  }

  debug!(dest = %dest.display(), "unpacked archive");
  Ok(())
}

/// Move every platform-native executable at the archive's top level into
/// the toolchain directory. Returns how many binaries were installed.
pub fn install_tools(extract_dir: &Path, tools_dir: &Path, os: Os) -> Result<usize> {
  fs::create_dir_all(tools_dir)?;

  let mut installed = 0;
  for entry in fs::read_dir(extract_dir)? {
    let entry = entry?;
    let path = entry.path();
    if !path.is_file() || !is_native_executable(&path, os) {
      continue;
    }

    fs::rename(&path, tools_dir.join(entry.file_name()))?;
    installed += 1;
  }

  debug!(count = installed, dir = %tools_dir.display(), "installed toolchain binaries");
  Ok(installed)
}

/// Windows toolchain binaries carry `.exe`; elsewhere they are
/// extensionless or ship with an executable mode bit in the archive.
fn is_native_executable(path: &Path, os: Os) -> bool {
  if os == Os::Windows {
    return path.extension().is_some_and(|e| e == "exe");
  }

  if path.extension().is_none() {
    return true;
  }

  #[cfg(unix)]
  {
    use std::os::unix::fs::PermissionsExt;
    if let Ok(meta) = path.metadata() {
      return meta.permissions().mode() & 0o111 != 0;
    }
  }

  false
}

/// Fetch the ericw-tools release archive and install its binaries.
///
/// The download is skipped when the archive is already on disk;
/// extraction and installation always run.
pub fn fetch_tools(cfg: &BuildConfig, layout: &Layout, os: Os) -> Result<()> {
  let archive = layout.tools_archive();

  if archive.exists() {
    info!(archive = %archive.display(), "archive already exists, skipping download");
  } else {
    let suffix = os
      .tools_archive_suffix()
      .ok_or(Error::Platform(PlatformError::Unsupported))?;
    let url = format!("{}-{}.zip", cfg.ericw_tools_url, suffix);
    download(&url, &archive)?;
  }

  unpack_zip(&archive, &layout.tools_extract_dir())?;
  install_tools(&layout.tools_extract_dir(), &layout.tools_dir(), os)?;

  Ok(())
}

/// Check out both pinned repositories and fetch the map toolchain.
pub fn fetch_all(cfg: &BuildConfig, layout: &Layout, os: Os) -> Result<()> {
  clone_at(&cfg.yquake2_url, &layout.engine_dir(), &cfg.yquake2_commit)?;
  clone_at(&cfg.yquake2_ref_vk_url, &layout.ref_vk_dir(), &cfg.yquake2_ref_vk_commit)?;
  fetch_tools(cfg, layout, os)?;
  Ok(())
}
