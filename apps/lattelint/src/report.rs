//! Report rendering and host signaling.
//!
//! Issues are rendered as a colorized aligned table with a file-path header
//! and a pluralized summary line, then signaled to the host: a build error
//! when any error-level issue was rendered, a build warning otherwise. With
//! `quiet`, warnings are dropped from both the table and the counts; if
//! nothing is left to render, no output is produced and no signal is sent.

use std::path::Path;

use owo_colors::OwoColorize;

use crate::context::BuildContext;
use crate::models::{Issue, Severity, Summary};
use crate::options::LintOptions;

/// Caller-supplied replacement for default rendering and signaling.
///
/// When configured, the reporter receives the full unfiltered issue sequence
/// and is solely responsible for output and host signaling.
pub trait Reporter {
    fn report(&self, issues: &[Issue], ctx: &dyn BuildContext);
}

#[derive(Debug)]
/// A fully rendered report plus its post-filtering counts.
pub struct RenderedReport {
    pub text: String,
    pub summary: Summary,
}

impl RenderedReport {
    /// Overall severity: error if any error-level row was rendered.
    pub fn severity(&self) -> Severity {
        if self.summary.errors > 0 {
            Severity::Error
        } else {
            Severity::Warning
        }
    }
}

struct Row {
    line: String,
    level: Severity,
    text: String,
    rule: String,
}

/// Report `issues` for `path` according to `options`, signaling the host.
///
/// An empty issue sequence produces no output and no signal. A custom
/// reporter short-circuits everything else.
pub fn report(ctx: &dyn BuildContext, path: &Path, issues: &[Issue], options: &LintOptions) {
    if issues.is_empty() {
        return;
    }
    if let Some(reporter) = &options.reporter {
        reporter.report(issues, ctx);
        return;
    }
    let Some(rendered) = render(path, issues, options.quiet, options.color) else {
        return;
    };
    match rendered.severity() {
        Severity::Error => ctx.emit_error(rendered.text),
        Severity::Warning => ctx.emit_warning(rendered.text),
    }
}

/// Render `issues` into a table-formatted report string.
///
/// Returns `None` when nothing is left after quiet filtering, even if the
/// input sequence was non-empty.
pub fn render(path: &Path, issues: &[Issue], quiet: bool, color: bool) -> Option<RenderedReport> {
    let mut errors = 0usize;
    let mut warnings = 0usize;
    let mut rows: Vec<Row> = Vec::new();

    for issue in issues {
        let is_error = issue.level.is_error();
        if quiet && !is_error {
            continue;
        }
        if is_error {
            errors += 1;
        } else {
            warnings += 1;
        }
        rows.push(Row {
            line: issue.line_number.to_string(),
            level: issue.level,
            text: issue.display_text().to_string(),
            rule: issue.rule.clone(),
        });
    }

    if rows.is_empty() {
        return None;
    }

    let summary = Summary { errors, warnings };
    let overall = if errors > 0 {
        Severity::Error
    } else {
        Severity::Warning
    };

    let mut out = String::new();
    out.push('\n');
    out.push_str(&header_line(path, overall, color));
    out.push('\n');
    out.push_str(&table(&rows, color));
    out.push('\n');
    out.push_str(&summary_line(&summary, overall, color));

    Some(RenderedReport { text: out, summary })
}

/// File path, relativized to the working directory when possible,
/// underlined and colorized by overall severity.
fn header_line(path: &Path, overall: Severity, color: bool) -> String {
    let display = std::env::current_dir()
        .ok()
        .and_then(|cwd| pathdiff::diff_paths(path, &cwd))
        .unwrap_or_else(|| path.to_path_buf());
    let display = display.display().to_string();
    if !color {
        return display;
    }
    match overall {
        Severity::Error => display.underline().red().to_string(),
        Severity::Warning => display.underline().yellow().to_string(),
    }
}

/// Aligned issue table: empty leading cell, right-aligned line number, then
/// left-aligned severity, display text, and rule id, separated by two
/// spaces. Widths are computed on the uncolored cell text so ANSI codes do
/// not break alignment.
fn table(rows: &[Row], color: bool) -> String {
    let line_width = rows.iter().map(|r| r.line.len()).max().unwrap_or(0);
    let level_width = rows.iter().map(|r| r.level.label().len()).max().unwrap_or(0);
    let text_width = rows.iter().map(|r| r.text.len()).max().unwrap_or(0);

    let mut out = String::new();
    for row in rows {
        let line = format!("{:>line_width$}", row.line);
        let level = format!("{:<level_width$}", row.level.label());
        let text = format!("{:<text_width$}", row.text);
        let (line, level, text, rule) = if color {
            (
                line.bright_black().to_string(),
                match row.level {
                    Severity::Error => level.red().to_string(),
                    Severity::Warning => level.yellow().to_string(),
                },
                text.bold().to_string(),
                row.rule.bright_black().to_string(),
            )
        } else {
            (line, level, text, row.rule.clone())
        };
        out.push_str(&format!("  {}  {}  {}  {}\n", line, level, text, rule));
    }
    out
}

/// Cross mark, total count, and pluralized error/warning breakdown, bold in
/// the overall severity color.
fn summary_line(summary: &Summary, overall: Severity, color: bool) -> String {
    let total = summary.total();
    let text = format!(
        "\u{2716} {} {} ({} {}, {} {})",
        total,
        pluralize("problem", total),
        summary.errors,
        pluralize("error", summary.errors),
        summary.warnings,
        pluralize("warning", summary.warnings),
    );
    if !color {
        return text;
    }
    match overall {
        Severity::Error => text.red().bold().to_string(),
        Severity::Warning => text.yellow().bold().to_string(),
    }
}

/// A count of exactly 1 is singular; every other count appends "s".
fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
