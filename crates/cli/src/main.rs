//! q2kit: build tool for the minimal Quake 2 base distribution.

use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use q2kit_core::{BuildConfig, Layout, RenderOutcome, SetupOutcome};
use q2kit_platform::Os;

mod output;
mod steps;

use output::{format_duration, print_error, print_step, print_success, print_warning};
use steps::{Step, parse_steps};

/// Build tool for the minimal Quake 2 base distribution.
///
/// Runs one or more build steps in the order given.
///
/// Examples:
///   q2kit maps copy run
///   q2kit game copy run --run-args "+map test1"
///   q2kit build run --run-args "+set vid_fullscreen 0"
///   q2kit all --run-args "+developer 1"
#[derive(Parser)]
#[command(name = "q2kit", version, about, verbatim_doc_comment)]
struct Cli {
  /// Steps to run, in order
  #[arg(required = true)]
  steps: Vec<String>,

  /// Arguments forwarded to the game by the run step (e.g. "+map test1")
  #[arg(long)]
  run_args: Option<String>,

  /// Enable debug logging
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{e}"));
      ExitCode::FAILURE
    }
  }
}

fn init_tracing(verbose: bool) {
  let default = if verbose { "debug" } else { "info" };

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
    .without_time()
    .with_writer(std::io::stderr)
    .init();
}

fn run(cli: &Cli) -> Result<()> {
  let os = Os::current();
  if !os.is_supported() {
    anyhow::bail!("this platform/OS is currently not supported");
  }
  tracing::debug!(os = %os, "detected platform");

  // Validate every token before executing anything.
  let steps = match parse_steps(&cli.steps) {
    Ok(steps) => steps,
    Err(unknown) => {
      print_error(&format!("unknown step: {}", unknown.0));
      eprintln!();
      eprintln!("Available steps:");
      for step in Step::ALL {
        eprintln!("  {}: {}", step.name(), step.description());
      }
      std::process::exit(2);
    }
  };

  let run_params: Vec<String> = cli
    .run_args
    .as_deref()
    .map(|s| s.split_whitespace().map(str::to_string).collect())
    .unwrap_or_default();

  if !run_params.is_empty() && !steps.iter().any(|s| s.accepts_run_args()) {
    print_warning("--run-args has no effect without the run or all step");
  }

  let layout = Layout::new(".");
  let cfg = BuildConfig::load(&layout.config_file())?;

  for step in steps {
    print_step(step.name());
    let started = Instant::now();

    execute(step, &cfg, &layout, os, &run_params)?;

    print_success(&format!("{step} finished in {}", format_duration(started.elapsed())));
  }

  Ok(())
}

fn execute(step: Step, cfg: &BuildConfig, layout: &Layout, os: Os, run_params: &[String]) -> Result<()> {
  match step {
    Step::Clone => q2kit_core::fetch_all(cfg, layout, os)?,
    Step::Engine => q2kit_core::build_engine(cfg, layout)?,
    Step::Game => q2kit_core::build_game(cfg, layout, os)?,
    Step::Render => report_render(q2kit_core::build_render(cfg, layout, os)?),
    Step::Maps => q2kit_core::compile_maps(layout, os)?,
    Step::Copy => q2kit_core::assemble(layout, os)?,
    Step::Run => q2kit_core::run_game(cfg, layout, os, run_params)?,
    Step::SetupTrenchbroom => report_setup(q2kit_core::setup_trenchbroom(layout, os)?),
    Step::LocMetrics => q2kit_core::loc_metrics(layout)?,
    Step::Build => build_all(cfg, layout, os)?,
    Step::All => {
      q2kit_core::fetch_all(cfg, layout, os)?;
      build_all(cfg, layout, os)?;
      q2kit_core::run_game(cfg, layout, os, run_params)?;
    }
  }
  Ok(())
}

/// Build every component in dependency order: the engine and renderer
/// first, maps and assets staged before the game library lands in the
/// release tree.
fn build_all(cfg: &BuildConfig, layout: &Layout, os: Os) -> Result<()> {
  q2kit_core::build_engine(cfg, layout)?;
  q2kit_core::build_ref_vk(cfg, layout)?;
  q2kit_core::compile_maps(layout, os)?;
  q2kit_core::assemble(layout, os)?;
  q2kit_core::build_game(cfg, layout, os)?;
  report_render(q2kit_core::build_render(cfg, layout, os)?);
  Ok(())
}

fn report_render(outcome: RenderOutcome) {
  if let RenderOutcome::Skipped(reason) = outcome {
    print_warning(&format!("not building render: {reason}"));
  }
}

fn report_setup(outcome: SetupOutcome) {
  if outcome == SetupOutcome::EditorNotFound {
    print_warning("TrenchBroom games directory not found, not setting up TrenchBroom");
  }
}
