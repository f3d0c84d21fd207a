//! Diagnostic formatting for lexer messages
//!
//! Renders errors and skipped-character warnings with a colored header and
//! the offending line of source.

use super::{SibilError, SourceLocation};
use crate::lexer::Skipped;
use colored::Colorize;

/// How loudly a diagnostic is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Diagnostic information for displaying messages with context
pub struct Diagnostic {
    severity: Severity,
    kind: String,
    message: String,
    location: Option<SourceLocation>,
    source: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic from an error
    pub fn new(error: &SibilError) -> Self {
        Self {
            severity: Severity::Error,
            kind: error.kind().to_string(),
            message: error.message(),
            location: error.location().cloned(),
            source: None,
        }
    }

    /// Create a warning for a character the scanner discarded
    pub fn warning(skipped: &Skipped) -> Self {
        Self {
            severity: Severity::Warning,
            kind: "Warning".to_string(),
            message: format!("skipped character {:?}", skipped.character),
            location: Some(skipped.location.clone()),
            source: None,
        }
    }

    /// Attach source code context
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        let kind = match self.severity {
            Severity::Error => self.kind.red().bold(),
            Severity::Warning => self.kind.yellow().bold(),
        };
        output.push_str(&format!("{}: ", kind));
        output.push_str(&self.message);
        output.push('\n');

        if let Some(ref location) = self.location {
            output.push_str(&format!("  {} {}\n", "-->".blue().bold(), location));

            if let Some(ref source) = self.source {
                output.push_str(&self.format_source_context(source, location));
            }
        }

        output
    }

    /// Format the source line holding the location, with a caret under it
    fn format_source_context(&self, source: &str, location: &SourceLocation) -> String {
        let mut output = String::new();
        let lines: Vec<&str> = source.lines().collect();

        if location.line == 0 || location.line > lines.len() {
            return output;
        }

        let line_idx = location.line - 1;
        let line_num_width = location.line.to_string().len();

        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", location.line, width = line_num_width)
                .blue()
                .bold(),
            lines[line_idx]
        ));

        // Tabs in the line stay tabs under it so the caret lines up.
        let prefix: String = lines[line_idx]
            .chars()
            .take(location.column.saturating_sub(1))
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let indicator_padding = format!("{}{}", " ".repeat(line_num_width + 3), prefix);
        let caret = match self.severity {
            Severity::Error => "^".red().bold(),
            Severity::Warning => "^".yellow().bold(),
        };
        output.push_str(&format!("{}{}\n", indicator_padding, caret));

        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
