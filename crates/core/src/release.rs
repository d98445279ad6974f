//! Release assembly.
//!
//! Stages the compiled binaries and the asset tree into `release/`, then
//! pulls a small allow-list of classic UI assets out of the user-supplied
//! pak0 extraction. Everything else in the release is built from in-repo
//! sources.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use q2kit_platform::Os;

use crate::Result;
use crate::error::Error;
use crate::paths::Layout;

/// File extensions never copied into the release asset tree: editor
/// project files, map sources, build logs, compiler intermediates and
/// metadata.
pub const EXCLUDED_EXTENSIONS: [&str; 6] = ["aseprite", "map", "log", "prt", "vis", "json"];

/// Assets pulled from the pak0 extraction, relative to its root. Entries
/// may use `*` wildcards in the final path component.
pub const PAK0_ALLOW_LIST: [&str; 10] = [
  "pics/colormap.pcx",
  "pics/conchars.pcx",
  "pics/ch1.pcx",
  "pics/m_main_*.pcx",
  "pics/quit.pcx",
  "pics/num_*.pcx",
  "pics/anum_*.pcx",
  "pics/m_cursor*.pcx",
  "pics/m_banner_*.pcx",
  "pics/16to8.dat",
];

/// Assemble the full release tree: binaries, filtered assets, pak0
/// allow-list.
pub fn assemble(layout: &Layout, os: Os) -> Result<()> {
  info!("copying files to release directory");

  fs::create_dir_all(layout.release_dir())?;
  copy_binaries(layout, os)?;

  fs::create_dir_all(layout.baseq2_dir())?;
  copy_tree_filtered(&layout.base_dir(), &layout.baseq2_dir(), &EXCLUDED_EXTENSIONS)?;

  for pattern in PAK0_ALLOW_LIST {
    copy_pak_entry(&layout.pak0_dir(), pattern, &layout.baseq2_dir())?;
  }

  info!("release directory complete");
  Ok(())
}

/// Engine executables and renderer libraries, straight into the release
/// root. A missing build output is fatal and names the file.
fn copy_binaries(layout: &Layout, os: Os) -> Result<()> {
  for file in binary_list(layout, os)? {
    if !file.is_file() {
      return Err(Error::ArtifactMissing(file));
    }

    debug!(file = %file.display(), "copying binary");
    if let Some(name) = file.file_name() {
      fs::copy(&file, layout.release_dir().join(name))?;
    }
  }
  Ok(())
}

fn binary_list(layout: &Layout, os: Os) -> Result<Vec<PathBuf>> {
  let ext = os.dyn_lib_ext().ok_or(Error::NoDynLibExt)?;
  let exe = os.exe_suffix();
  let engine_release = layout.engine_dir().join("release");

  let mut files = vec![
    engine_release.join(format!("q2ded{exe}")),
    engine_release.join(format!("quake2{exe}")),
  ];
  for renderer in ["ref_soft", "ref_gl1", "ref_gl3", "ref_gles3"] {
    files.push(engine_release.join(format!("{renderer}.{ext}")));
  }
  files.push(layout.ref_vk_dir().join("release").join(format!("ref_vk.{ext}")));

  Ok(files)
}

/// Recursively copy `src` into `dst`, skipping files whose extension
/// (compared without the leading dot) is in `excluded`. Returns how many
/// files were copied.
pub fn copy_tree_filtered(src: &Path, dst: &Path, excluded: &[&str]) -> Result<u64> {
  let mut copied = 0;

  for entry in WalkDir::new(src) {
    let entry = entry.map_err(std::io::Error::from)?;
    let Ok(rel) = entry.path().strip_prefix(src) else {
      continue;
    };
    let target = dst.join(rel);

    if entry.file_type().is_dir() {
      fs::create_dir_all(&target)?;
    } else {
      if is_excluded(entry.path(), excluded) {
        debug!(file = %entry.path().display(), "excluded from release");
        continue;
      }

      debug!(file = %entry.path().display(), "copying");
      fs::copy(entry.path(), &target)?;
      copied += 1;
    }
  }

  Ok(copied)
}

fn is_excluded(path: &Path, excluded: &[&str]) -> bool {
  path
    .extension()
    .and_then(|e| e.to_str())
    .is_some_and(|e| excluded.contains(&e))
}

/// Copy one allow-list entry from the pak0 extraction, preserving its
/// relative path. An entry that matches nothing is fatal: the pak0
/// archive is not bundled with the repository.
fn copy_pak_entry(pak_root: &Path, pattern: &str, dest_root: &Path) -> Result<()> {
  let matches = expand_pattern(pak_root, pattern)?;

  if matches.is_empty() {
    return Err(Error::PakFileMissing(pak_root.join(pattern)));
  }

  for rel in matches {
    let source = pak_root.join(&rel);
    let target = dest_root.join(&rel);

    if let Some(parent) = target.parent() {
      fs::create_dir_all(parent)?;
    }

    debug!(file = %source.display(), "copying pak0 asset");
    fs::copy(&source, &target)?;
  }

  Ok(())
}

/// Expand a (possibly wildcarded) allow-list entry to the relative paths
/// it matches under `root`.
fn expand_pattern(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
  let rel = Path::new(pattern);

  if !pattern.contains('*') {
    let exists = root.join(rel).is_file();
    return Ok(if exists { vec![rel.to_path_buf()] } else { Vec::new() });
  }

  let parent = rel.parent().unwrap_or_else(|| Path::new(""));
  let Some(file_pattern) = rel.file_name().and_then(|n| n.to_str()) else {
    return Ok(Vec::new());
  };

  let dir = root.join(parent);
  if !dir.is_dir() {
    return Ok(Vec::new());
  }

  let mut matches = Vec::new();
  for entry in fs::read_dir(&dir)? {
    let entry = entry?;
    if !entry.path().is_file() {
      continue;
    }
    let name = entry.file_name();
    let Some(name) = name.to_str() else {
      continue;
    };
    if wildcard_match(file_pattern, name) {
      matches.push(parent.join(name));
    }
  }

  matches.sort();
  Ok(matches)
}

/// Match `name` against a pattern where `*` stands for any run of
/// characters. Only the wildcard is special.
fn wildcard_match(pattern: &str, name: &str) -> bool {
  fn rec(p: &[u8], n: &[u8]) -> bool {
    match p.first() {
      None => n.is_empty(),
      Some(b'*') => (0..=n.len()).any(|i| rec(&p[1..], &n[i..])),
      Some(&c) => n.first() == Some(&c) && rec(&p[1..], &n[1..]),
    }
  }
  rec(pattern.as_bytes(), name.as_bytes())
}
