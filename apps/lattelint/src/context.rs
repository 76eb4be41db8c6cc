//! Host build context capabilities.
//!
//! The host build system invokes the loader once per source file and receives
//! results through this interface: a warning or error signal carrying the
//! rendered report, and dependency registration so the host can invalidate
//! its cache when the external config file changes.

use std::path::Path;

/// Capabilities granted by the host build system for one invocation.
///
/// Passed explicitly to the pipeline rather than implicitly bound, so hosts
/// and tests can supply their own implementations.
pub trait BuildContext {
    /// Signal a non-fatal build warning with the rendered report.
    fn emit_warning(&self, report: String);

    /// Signal a build error with the rendered report.
    fn emit_error(&self, report: String);

    /// Register `path` as an input of the current file's build, for cache
    /// invalidation when it changes.
    fn add_dependency(&self, path: &Path);
}
