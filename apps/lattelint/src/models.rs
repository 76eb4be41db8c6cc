//! Shared data models for lint issues and report summaries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Issue severity as reported by the lint engine.
///
/// Anything the engine labels other than `"error"` counts as a warning.
pub enum Severity {
    Error,
    #[serde(other)]
    Warning,
}

impl Severity {
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Label used in rendered report rows.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A single lint finding with severity, location, message, and rule id.
pub struct Issue {
    pub level: Severity,
    #[serde(alias = "lineNumber")]
    pub line_number: u32,
    pub message: String,
    /// Preferred over `message` for display when present.
    #[serde(default)]
    pub context: Option<String>,
    pub rule: String,
}

impl Issue {
    /// Text shown in the report row: `context` when present, else `message`.
    pub fn display_text(&self) -> &str {
        self.context.as_deref().unwrap_or(&self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Rendered issue counts after quiet filtering.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.errors + self.warnings
    }
}
