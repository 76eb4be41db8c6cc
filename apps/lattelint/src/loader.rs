//! Pipeline entry point invoked once per source file.
//!
//! Control flow: resolve options (see [`LintOptions::resolve`]) → load the
//! external config → merge it into the options → delegate to the lint
//! engine → render and signal the report → hand the source text back
//! unchanged. The loader is a pass-through transform; it never modifies the
//! input.
//!
//! [`run`] is the single async implementation; [`run_blocking`] is a thin
//! adapter that drives it to completion on a current-thread runtime, for
//! hosts without an async completion mechanism.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::config;
use crate::context::BuildContext;
use crate::engine::LintEngine;
use crate::error::LoaderError;
use crate::options::LintOptions;
use crate::report;

/// Process one source file: load config, lint, report, and return the input
/// text unchanged.
///
/// Config and engine failures abort the invocation; lint findings do not,
/// they are delivered through the context's warning/error signals.
pub async fn run<'a>(
    ctx: &dyn BuildContext,
    engine: &dyn LintEngine,
    path: &Path,
    source: &'a str,
    options: LintOptions,
) -> Result<&'a str, LoaderError> {
    let mut options = options;
    if let Some(loaded) = config::load(ctx, &options).await? {
        options.apply_config(loaded);
    }

    let issues = engine
        .lint(source, &options.rules)
        .map_err(LoaderError::Engine)?;
    debug!(path = %path.display(), issues = issues.len(), "lint completed");

    report::report(ctx, path, &issues, &options);
    Ok(source)
}

/// Convenience wrapper resolving options from raw embedded and query maps
/// before running the pipeline.
pub async fn run_with_raw_options<'a>(
    ctx: &dyn BuildContext,
    engine: &dyn LintEngine,
    path: &Path,
    source: &'a str,
    embedded: Option<&Map<String, Value>>,
    query: Option<&Map<String, Value>>,
) -> Result<&'a str, LoaderError> {
    let options = LintOptions::resolve(embedded, query);
    run(ctx, engine, path, source, options).await
}

/// Blocking adapter over [`run`] for hosts without async completion.
///
/// Must not be called from within an async runtime.
pub fn run_blocking<'a>(
    ctx: &dyn BuildContext,
    engine: &dyn LintEngine,
    path: &Path,
    source: &'a str,
    options: LintOptions,
) -> Result<&'a str, LoaderError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(ctx, engine, path, source, options))
}
