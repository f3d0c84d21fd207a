//! Token definitions for the Sibil lexer

use crate::error::SourceLocation;
use std::fmt;

/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub location: SourceLocation,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// The exact text consumed for this token.
    pub fn text(&self) -> &str {
        &self.lexeme
    }

    /// Compare kind and text, ignoring where the token was found.
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.lexeme == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind.name(), self.lexeme)
    }
}

/// Token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LeftParen,  // (
    RightParen, // )
    Identifier,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LeftParen => "LeftParen",
            Self::RightParen => "RightParen",
            Self::Identifier => "Identifier",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Identifier => write!(f, "identifier"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Identifier, "foo", SourceLocation::at(1, 2, 1));
        assert_eq!(token.to_string(), "Identifier(\"foo\")");
        assert_eq!(TokenKind::LeftParen.to_string(), "(");
        assert_eq!(TokenKind::Identifier.to_string(), "identifier");
    }

    #[test]
    fn test_token_is() {
        let token = Token::new(TokenKind::RightParen, ")", SourceLocation::at(3, 1, 9));
        assert!(token.is(TokenKind::RightParen, ")"));
        assert!(!token.is(TokenKind::LeftParen, ")"));
        assert_eq!(token.text(), ")");
    }
}
