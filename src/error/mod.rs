//! Error handling and diagnostics for the Sibil lexer
//!
//! The scanner itself never fails. The types here serve the layers around it:
//! strict tokenizing, which rejects skipped characters, and the CLI, which
//! reads input from disk or stdin.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

pub mod diagnostic;

pub use diagnostic::{Diagnostic, Severity};

/// Result type alias for Sibil operations
pub type SibilResult<T> = Result<T, SibilError>;

/// Source location information for tokens and diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, counted in characters)
    pub column: usize,
    /// Byte offset into the input buffer (0-based)
    pub offset: usize,
    /// Optional filename, shared by every location in one scan
    pub filename: Option<Arc<str>>,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize, offset: usize, filename: Option<Arc<str>>) -> Self {
        Self {
            line,
            column,
            offset,
            filename,
        }
    }

    /// Create a source location without a filename
    pub fn at(line: usize, column: usize, offset: usize) -> Self {
        Self::new(line, column, offset, None)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref filename) = self.filename {
            write!(f, "{}:{}:{}", filename, self.line, self.column)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// Main error type for the Sibil lexer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SibilError {
    /// A character outside the token grammar, reported by strict tokenizing
    #[error("Lexer Error: unexpected character {character:?} at {location}")]
    UnexpectedCharacter {
        character: char,
        location: SourceLocation,
    },
    /// The input buffer could not be read
    #[error("I/O Error: failed to read '{path}': {message}")]
    Io { path: String, message: String },
}

impl SibilError {
    /// Create a new unexpected-character error
    pub fn unexpected_character(character: char, location: SourceLocation) -> Self {
        Self::UnexpectedCharacter {
            character,
            location,
        }
    }

    /// Create a new I/O error for the given input path
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::UnexpectedCharacter { .. } => "Lexer Error",
            Self::Io { .. } => "I/O Error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::UnexpectedCharacter { character, .. } => {
                format!("unexpected character {:?}", character)
            }
            Self::Io { path, message } => format!("failed to read '{}': {}", path, message),
        }
    }

    /// Get the source location if available
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::UnexpectedCharacter { location, .. } => Some(location),
            Self::Io { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_location_display() {
        let loc = SourceLocation::at(10, 5, 42);
        assert_eq!(loc.to_string(), "10:5");

        let loc_with_file = SourceLocation::new(10, 5, 42, Some("test.scm".into()));
        assert_eq!(loc_with_file.to_string(), "test.scm:10:5");
    }

    #[test]
    fn test_error_creation() {
        let loc = SourceLocation::at(1, 3, 2);
        let err = SibilError::unexpected_character('@', loc.clone());

        assert_eq!(err.kind(), "Lexer Error");
        assert_eq!(err.message(), "unexpected character '@'");
        assert_eq!(err.location(), Some(&loc));
    }

    #[test]
    fn test_error_display() {
        let err = SibilError::unexpected_character('#', SourceLocation::at(5, 10, 60));
        assert_eq!(
            err.to_string(),
            "Lexer Error: unexpected character '#' at 5:10"
        );

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = SibilError::io("missing.scm", &io);
        assert_eq!(err.kind(), "I/O Error");
        assert_eq!(err.location(), None);
        assert_eq!(
            err.to_string(),
            "I/O Error: failed to read 'missing.scm': no such file"
        );
    }
}
