//! Lines-of-code reporting for the C game library.

use std::fs;
use std::process::Command;

use tracing::info;

use crate::Result;
use crate::paths::Layout;
use crate::process;

/// Run tokei over `game-c/` and write the report next to the project root.
pub fn loc_metrics(layout: &Layout) -> Result<()> {
  let report = process::run_capture(Command::new("tokei").arg(layout.game_c_dir()))?;
  fs::write(layout.loc_report(), report)?;

  info!(report = %layout.loc_report().display(), "wrote lines-of-code report");
  Ok(())
}
