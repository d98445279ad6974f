//! Build-step tokens and validation.
//!
//! The fixed mapping from step names to pipeline actions. Every token
//! given on the command line is validated against this set before any
//! step executes.

use std::fmt;

/// A named unit of work in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
  Clone,
  Engine,
  Game,
  Render,
  Maps,
  Copy,
  Run,
  SetupTrenchbroom,
  LocMetrics,
  Build,
  All,
}

impl Step {
  /// Every step, in help-listing order.
  pub const ALL: [Step; 11] = [
    Step::Clone,
    Step::Engine,
    Step::Game,
    Step::Render,
    Step::Maps,
    Step::Copy,
    Step::Run,
    Step::SetupTrenchbroom,
    Step::LocMetrics,
    Step::Build,
    Step::All,
  ];

  pub const fn name(self) -> &'static str {
    match self {
      Step::Clone => "clone",
      Step::Engine => "engine",
      Step::Game => "game",
      Step::Render => "render",
      Step::Maps => "maps",
      Step::Copy => "copy",
      Step::Run => "run",
      Step::SetupTrenchbroom => "setup-trenchbroom",
      Step::LocMetrics => "loc-metrics",
      Step::Build => "build",
      Step::All => "all",
    }
  }

  pub const fn description(self) -> &'static str {
    match self {
      Step::Clone => "Clone pinned repositories and fetch the map toolchain",
      Step::Engine => "Build the yquake2 engine",
      Step::Game => "Build the game library",
      Step::Render => "Build the Odin renderer library",
      Step::Maps => "Compile map files",
      Step::Copy => "Copy binaries and assets to the release directory",
      Step::Run => "Run the game",
      Step::SetupTrenchbroom => "Install the TrenchBroom game configuration",
      Step::LocMetrics => "Generate lines-of-code metrics for game-c",
      Step::Build => "Build all components",
      Step::All => "Clone, build, and run",
    }
  }

  /// Whether `--run-args` is forwarded to this step.
  pub const fn accepts_run_args(self) -> bool {
    matches!(self, Step::Run | Step::All)
  }

  pub fn parse(token: &str) -> Option<Step> {
    Step::ALL.into_iter().find(|s| s.name() == token)
  }
}

impl fmt::Display for Step {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// A step token that is not in the fixed mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStep(pub String);

/// Validate every token before running anything. One unknown token
/// rejects the whole list.
pub fn parse_steps(tokens: &[String]) -> Result<Vec<Step>, UnknownStep> {
  tokens
    .iter()
    .map(|t| Step::parse(t).ok_or_else(|| UnknownStep(t.clone())))
    .collect()
}
