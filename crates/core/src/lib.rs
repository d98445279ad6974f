//! q2kit-core: build-pipeline steps for the minimal Quake 2 base.
//!
//! Each module wraps one stage of the pipeline: fetching pinned sources,
//! driving the component build systems, compiling maps, assembling the
//! release tree and launching the result. Everything is synchronous; every
//! external process is waited on and its exit status checked before the
//! next stage runs.

mod build;
mod config;
mod error;
mod fetch;
mod maps;
mod metrics;
mod paths;
mod process;
mod release;
mod run;
mod trenchbroom;

pub use build::{GameFlavor, RenderOutcome, build_engine, build_game, build_ref_vk, build_render};
pub use config::BuildConfig;
pub use error::Error;
pub use fetch::{CloneOutcome, clone_at, fetch_all, fetch_tools};
pub use maps::compile_maps;
pub use metrics::loc_metrics;
pub use paths::Layout;
pub use release::{EXCLUDED_EXTENSIONS, PAK0_ALLOW_LIST, assemble, copy_tree_filtered};
pub use run::run_game;
pub use trenchbroom::{SetupOutcome, setup_trenchbroom};

/// Result type for build-step operations
pub type Result<T> = std::result::Result<T, Error>;
