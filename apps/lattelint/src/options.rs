//! Effective option resolution.
//!
//! Three option sources merge into one `LintOptions`, in increasing
//! precedence: embedded build options, inline per-file query parameters, and
//! the externally loaded config file. The recognized keys (`configFile`,
//! `quiet`, `color`) become typed fields; everything else is kept verbatim in
//! an open rule map and forwarded to the lint engine untouched.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::report::Reporter;

/// Conventional config filename probed when no explicit path is set.
pub const DEFAULT_CONFIG_FILE: &str = "./coffeelint.json";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Where to look for the external config file.
pub enum ConfigFile {
    /// Probe `./coffeelint.json` in the working directory.
    #[default]
    Default,
    /// Probe an explicitly configured path.
    Path(PathBuf),
    /// Skip external config entirely, without touching the filesystem.
    Disabled,
}

impl ConfigFile {
    /// The path to probe, or `None` when loading is disabled.
    pub fn path(&self) -> Option<PathBuf> {
        match self {
            ConfigFile::Default => Some(PathBuf::from(DEFAULT_CONFIG_FILE)),
            ConfigFile::Path(p) => Some(p.clone()),
            ConfigFile::Disabled => None,
        }
    }

    fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) if s.is_empty() => ConfigFile::Disabled,
            Value::String(s) => ConfigFile::Path(PathBuf::from(s)),
            Value::Bool(false) | Value::Null => ConfigFile::Disabled,
            _ => ConfigFile::Default,
        }
    }
}

#[derive(Clone)]
/// Fully resolved plugin options for one invocation.
pub struct LintOptions {
    pub config_file: ConfigFile,
    /// Drop warnings from both the table and the counts.
    pub quiet: bool,
    /// Colorize the rendered report. Defaults to on unless `NO_COLOR` is set.
    pub color: bool,
    /// Custom reporter replacing default rendering and host signaling.
    /// API-level only; never read from option maps or config files.
    pub reporter: Option<Arc<dyn Reporter>>,
    /// Pass-through rule settings forwarded verbatim to the lint engine.
    pub rules: Map<String, Value>,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            config_file: ConfigFile::Default,
            quiet: false,
            color: std::env::var_os("NO_COLOR").is_none(),
            reporter: None,
            rules: Map::new(),
        }
    }
}

impl fmt::Debug for LintOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LintOptions")
            .field("config_file", &self.config_file)
            .field("quiet", &self.quiet)
            .field("color", &self.color)
            .field("reporter", &self.reporter.is_some())
            .field("rules", &self.rules)
            .finish()
    }
}

impl LintOptions {
    /// Merge embedded build options with inline query parameters.
    ///
    /// Query parameters take precedence over embedded defaults. Values are
    /// shallow-copied; no validation is applied to unknown keys.
    pub fn resolve(embedded: Option<&Map<String, Value>>, query: Option<&Map<String, Value>>) -> Self {
        let mut merged: Map<String, Value> = Map::new();
        if let Some(embedded) = embedded {
            for (key, value) in embedded {
                merged.insert(key.clone(), value.clone());
            }
        }
        if let Some(query) = query {
            for (key, value) in query {
                merged.insert(key.clone(), value.clone());
            }
        }

        let mut options = Self::default();
        for (key, value) in merged {
            match key.as_str() {
                "configFile" => options.config_file = ConfigFile::from_value(&value),
                "quiet" => {
                    if let Some(b) = parse_bool(&value) {
                        options.quiet = b;
                    }
                }
                "color" => {
                    if let Some(b) = parse_bool(&value) {
                        options.color = b;
                    }
                }
                // Reporters are functions and cannot arrive through raw
                // option maps; drop the key instead of forwarding it as a
                // rule setting.
                "reporter" => {}
                _ => {
                    options.rules.insert(key, value);
                }
            }
        }
        options
    }

    /// Merge an externally loaded config file into these options.
    ///
    /// The config file has highest precedence: its values override both
    /// embedded and query settings, for recognized keys and rules alike.
    /// A `configFile` key inside the loaded file is ignored; the file has
    /// already been located.
    pub fn apply_config(&mut self, config: Map<String, Value>) {
        for (key, value) in config {
            match key.as_str() {
                "configFile" | "reporter" => {}
                "quiet" => {
                    if let Some(b) = parse_bool(&value) {
                        self.quiet = b;
                    }
                }
                "color" => {
                    if let Some(b) = parse_bool(&value) {
                        self.color = b;
                    }
                }
                _ => {
                    self.rules.insert(key, value);
                }
            }
        }
    }
}

/// Accept JSON booleans plus the string forms some hosts leave unparsed in
/// query parameters.
fn parse_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s == "true" => Some(true),
        Value::String(s) if s == "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_query_overrides_embedded() {
        let embedded = map(json!({"quiet": false, "max_line_length": {"value": 80}}));
        let query = map(json!({"quiet": true}));
        let options = LintOptions::resolve(Some(&embedded), Some(&query));
        assert!(options.quiet);
        assert_eq!(options.rules["max_line_length"]["value"], 80);
    }

    #[test]
    fn test_unknown_keys_are_forwarded_untouched() {
        let query = map(json!({"no_tabs": {"level": "error"}, "custom": 42}));
        let options = LintOptions::resolve(None, Some(&query));
        assert_eq!(options.rules.len(), 2);
        assert_eq!(options.rules["custom"], 42);
    }

    #[test]
    fn test_recognized_keys_are_not_forwarded() {
        let query = map(json!({"configFile": "lint.json", "quiet": true, "color": false}));
        let options = LintOptions::resolve(None, Some(&query));
        assert!(options.rules.is_empty());
        assert_eq!(options.config_file, ConfigFile::Path(PathBuf::from("lint.json")));
        assert!(options.quiet);
        assert!(!options.color);
    }

    #[test]
    fn test_string_booleans_from_query_parameters() {
        let query = map(json!({"quiet": "true", "color": "false"}));
        let options = LintOptions::resolve(None, Some(&query));
        assert!(options.quiet);
        assert!(!options.color);
    }

    #[test]
    fn test_config_file_disabled_forms() {
        for raw in [json!({"configFile": ""}), json!({"configFile": false})] {
            let query = map(raw);
            let options = LintOptions::resolve(None, Some(&query));
            assert_eq!(options.config_file, ConfigFile::Disabled);
            assert_eq!(options.config_file.path(), None);
        }
    }

    #[test]
    fn test_default_config_path() {
        let options = LintOptions::resolve(None, None);
        assert_eq!(
            options.config_file.path(),
            Some(PathBuf::from(DEFAULT_CONFIG_FILE))
        );
    }

    #[test]
    fn test_config_file_overrides_query_and_embedded() {
        let embedded = map(json!({"indentation": {"value": 2}}));
        let query = map(json!({"quiet": false, "indentation": {"value": 4}}));
        let mut options = LintOptions::resolve(Some(&embedded), Some(&query));
        options.apply_config(map(json!({"quiet": true, "indentation": {"value": 8}})));
        assert!(options.quiet);
        assert_eq!(options.rules["indentation"]["value"], 8);
    }

    #[test]
    fn test_reporter_key_is_never_forwarded() {
        let query = map(json!({"reporter": "custom"}));
        let mut options = LintOptions::resolve(None, Some(&query));
        options.apply_config(map(json!({"reporter": "other"})));
        assert!(options.rules.is_empty());
        assert!(options.reporter.is_none());
    }

    #[test]
    fn test_config_file_key_in_config_is_ignored() {
        let mut options = LintOptions::resolve(None, None);
        options.apply_config(map(json!({"configFile": "other.json"})));
        assert_eq!(options.config_file, ConfigFile::Default);
        assert!(options.rules.is_empty());
    }
}
