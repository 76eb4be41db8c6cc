//! Lattelint core library.
//!
//! A build-pipeline plugin that runs a CoffeeScript lint engine over source
//! text, renders the findings as a colorized aligned table, and signals the
//! host build system with a warning or an error. The source text itself is
//! always returned unchanged.
//!
//! High-level modules:
//! - `options`: Merging embedded, query, and config-file option sources.
//! - `config`: JSON-with-comments config file loading (sync and async).
//! - `context`: Capabilities granted by the host build system.
//! - `engine`: Delegation seam for the external rule-checking engine.
//! - `models`: Issue and summary data models.
//! - `report`: Table rendering, pluralized summaries, host signaling.
//! - `loader`: Per-file pipeline orchestration and the blocking adapter.
//! - `error`: Error taxonomy for the pipeline.
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod loader;
pub mod models;
pub mod options;
pub mod report;

pub use context::BuildContext;
pub use engine::LintEngine;
pub use error::LoaderError;
pub use loader::{run, run_blocking, run_with_raw_options};
pub use models::{Issue, Severity, Summary};
pub use options::{ConfigFile, LintOptions, DEFAULT_CONFIG_FILE};
pub use report::{RenderedReport, Reporter};
