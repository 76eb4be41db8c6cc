//! Lint engine delegation seam.
//!
//! The loader performs no analysis of its own; it hands the raw source text
//! and the merged rule settings to an external engine and renders whatever
//! issues come back. Issues are expected in document order and are not
//! re-sorted here.

use serde_json::{Map, Value};

use crate::models::Issue;

/// Boxed error type surfaced by engine implementations.
pub type EngineError = Box<dyn std::error::Error + Send + Sync>;

/// External rule-checking engine invoked once per source file.
pub trait LintEngine {
    /// Lint `source` with the fully merged rule settings.
    ///
    /// A failure here is fatal for the invocation, exactly like a config
    /// load failure.
    fn lint(&self, source: &str, rules: &Map<String, Value>) -> Result<Vec<Issue>, EngineError>;
}
