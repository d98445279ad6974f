//! TrenchBroom editor integration.
//!
//! Installs the in-repo game definition into the editor's per-user games
//! directory so maps can be edited against this distribution.

use std::fs;
use std::path::Path;

use tracing::info;

use q2kit_platform::{Os, trenchbroom_games_dir};

use crate::Result;
use crate::paths::Layout;
use crate::release::copy_tree_filtered;

/// Name of the game definition as it appears in the editor.
pub const GAME_NAME: &str = "MinimalQuake2Base";

/// Outcome of the editor setup step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
  Installed,
  /// The editor's games directory does not exist; nothing was written.
  EditorNotFound,
}

/// Install the game configuration into TrenchBroom's games directory.
pub fn setup_trenchbroom(layout: &Layout, os: Os) -> Result<SetupOutcome> {
  let games_dir = trenchbroom_games_dir(os)?;
  install_game_config(layout, &games_dir)
}

fn install_game_config(layout: &Layout, games_dir: &Path) -> Result<SetupOutcome> {
  if !games_dir.is_dir() {
    return Ok(SetupOutcome::EditorNotFound);
  }

  let dest = games_dir.join(GAME_NAME).join("trenchbroom-config");
  fs::create_dir_all(&dest)?;
  copy_tree_filtered(&layout.trenchbroom_config_dir(), &dest, &[])?;

  info!(dest = %dest.display(), "installed TrenchBroom game config");
  Ok(SetupOutcome::Installed)
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[test]
  fn missing_games_dir_skips_the_install() {
    let temp = TempDir::new().unwrap();
    let layout = Layout::new(temp.path());

    let outcome = install_game_config(&layout, &temp.path().join("no-such-dir")).unwrap();
    assert_eq!(outcome, SetupOutcome::EditorNotFound);
  }

  #[test]
  fn config_tree_lands_under_the_game_name() {
    let temp = TempDir::new().unwrap();
    let layout = Layout::new(temp.path());

    let src = layout.trenchbroom_config_dir();
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("GameConfig.cfg"), b"{}").unwrap();

    let games_dir = temp.path().join("games");
    fs::create_dir_all(&games_dir).unwrap();

    let outcome = install_game_config(&layout, &games_dir).unwrap();

    assert_eq!(outcome, SetupOutcome::Installed);
    assert!(
      games_dir
        .join(GAME_NAME)
        .join("trenchbroom-config")
        .join("GameConfig.cfg")
        .is_file()
    );
  }
}
