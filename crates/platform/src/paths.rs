//! OS-specific well-known directories

use std::path::PathBuf;

use crate::error::PlatformError;
use crate::platform::Os;

/// TrenchBroom's per-user game configuration directory.
///
/// The level editor looks for game definitions here; the location differs
/// per OS and on Windows is anchored at `%APPDATA%`.
pub fn trenchbroom_games_dir(os: Os) -> Result<PathBuf, PlatformError> {
  match os {
    Os::Mac => Ok(home_dir()?.join("Library/Application Support/TrenchBroom/games")),
    Os::Linux => Ok(home_dir()?.join(".TrenchBroom/games")),
    Os::Windows => {
      let appdata = std::env::var_os("APPDATA").ok_or(PlatformError::MissingAppData)?;
      Ok(PathBuf::from(appdata).join("TrenchBroom").join("games"))
    }
    Os::Other => Err(PlatformError::Unsupported),
  }
}

fn home_dir() -> Result<PathBuf, PlatformError> {
  dirs::home_dir().ok_or(PlatformError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unsupported_os_has_no_games_dir() {
    assert!(matches!(
      trenchbroom_games_dir(Os::Other),
      Err(PlatformError::Unsupported)
    ));
  }

  #[test]
  #[cfg(unix)]
  fn linux_games_dir_is_a_dotdir_under_home() {
    let dir = trenchbroom_games_dir(Os::Linux).unwrap();
    assert!(dir.ends_with(".TrenchBroom/games"));
  }

  #[test]
  #[cfg(unix)]
  fn mac_games_dir_is_under_application_support() {
    let dir = trenchbroom_games_dir(Os::Mac).unwrap();
    assert!(dir.ends_with("Library/Application Support/TrenchBroom/games"));
  }
}
