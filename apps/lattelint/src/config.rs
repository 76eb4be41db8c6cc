//! External config file loading.
//!
//! The config file (`coffeelint.json` by convention) is JSON-with-comments:
//! `//` line comments and `/* */` block comments are tolerated and stripped
//! during parsing. A missing file is not an error and resolves to "no
//! configuration"; a read or parse failure is fatal for the invocation.
//!
//! There is one async implementation; the blocking entry point in `loader`
//! drives it to completion on a current-thread runtime.

use jsonc_parser::ParseOptions;
use serde_json::{Map, Value};
use tokio::fs;
use tracing::debug;

use crate::context::BuildContext;
use crate::error::LoaderError;
use crate::options::LintOptions;

/// Load the external config file named by `options.config_file`.
///
/// Returns `Ok(None)` when loading is disabled or the file does not exist.
/// When the file is found it is registered with the host's dependency
/// tracker before being read, so downstream caching invalidates on config
/// changes.
pub async fn load(
    ctx: &dyn BuildContext,
    options: &LintOptions,
) -> Result<Option<Map<String, Value>>, LoaderError> {
    let Some(path) = options.config_file.path() else {
        debug!("external config disabled, skipping lookup");
        return Ok(None);
    };

    let exists = fs::try_exists(&path).await.map_err(|e| LoaderError::Config {
        path: path.clone(),
        source: e,
    })?;
    if !exists {
        debug!(path = %path.display(), "no external config found");
        return Ok(None);
    }

    ctx.add_dependency(&path);
    debug!(path = %path.display(), "loading external config");

    let contents = fs::read_to_string(&path)
        .await
        .map_err(|e| LoaderError::Config {
            path: path.clone(),
            source: e,
        })?;

    let value = jsonc_parser::parse_to_serde_value(&contents, &ParseOptions::default())
        .map_err(|e| LoaderError::config_parse(&path, e.to_string()))?;
    match value {
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(LoaderError::config_parse(
            &path,
            "top level must be a JSON object",
        )),
        None => Err(LoaderError::config_parse(&path, "file is empty")),
    }
}
