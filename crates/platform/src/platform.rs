//! Host operating system detection

use std::fmt;

/// Operating system the build tool is running on.
///
/// Everything that is not one of the three supported desktop systems
/// collapses into [`Os::Other`]; the pipeline refuses to run there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
  Windows,
  Linux,
  Mac,
  Other,
}

impl Os {
  /// Detect the operating system this process is running on.
  pub fn current() -> Self {
    Self::from_identifier(std::env::consts::OS)
  }

  /// Map an OS identifier string (as found in `std::env::consts::OS`) to a
  /// variant. Total: unknown identifiers map to [`Os::Other`].
  pub fn from_identifier(id: &str) -> Self {
    match id {
      "windows" => Os::Windows,
      "linux" => Os::Linux,
      "macos" => Os::Mac,
      _ => Os::Other,
    }
  }

  /// Returns the OS name as used in status output
  pub const fn as_str(&self) -> &'static str {
    match self {
      Os::Windows => "windows",
      Os::Linux => "linux",
      Os::Mac => "mac",
      Os::Other => "other",
    }
  }

  /// Extension used for dynamic libraries, without the leading dot.
  ///
  /// Defined only on the three real platforms; there is no library naming
  /// convention to map to on [`Os::Other`].
  pub const fn dyn_lib_ext(&self) -> Option<&'static str> {
    match self {
      Os::Windows => Some("dll"),
      Os::Linux => Some("so"),
      Os::Mac => Some("dylib"),
      Os::Other => None,
    }
  }

  /// Suffix appended to executable file names.
  pub const fn exe_suffix(&self) -> &'static str {
    match self {
      Os::Windows => ".exe",
      _ => "",
    }
  }

  /// Platform tag used in ericw-tools release archive names.
  pub const fn tools_archive_suffix(&self) -> Option<&'static str> {
    match self {
      Os::Windows => Some("win64"),
      Os::Linux => Some("linux"),
      Os::Mac => Some("darwin"),
      Os::Other => None,
    }
  }

  /// Whether the pipeline can run on this OS at all.
  pub const fn is_supported(&self) -> bool {
    !matches!(self, Os::Other)
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
