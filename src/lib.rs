//! # Sibil Lexer
//!
//! A lexical scanner for a small Scheme-style S-expression language. Source
//! text goes in, a lazy stream of parens and identifiers comes out.
//!
//! ## Architecture
//!
//! - `lexer`: character classification, tokens, and the scanner itself
//! - `error`: error types, source locations and diagnostic formatting
//!
//! ```
//! use sibil_lexer::{Scanner, TokenKind};
//!
//! let kinds: Vec<TokenKind> = Scanner::new("(car xs)").map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::LeftParen, TokenKind::Identifier, TokenKind::Identifier, TokenKind::RightParen]
//! );
//! ```

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{Diagnostic, SibilError, SibilResult, SourceLocation};
pub use lexer::{Scanner, Skipped, Token, TokenKind};

/// Version of the Sibil lexer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan a whole buffer into tokens
///
/// Characters outside the token grammar are dropped without complaint.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}

/// Scan a whole buffer, rejecting anything that is neither a token nor
/// whitespace
///
/// # Arguments
///
/// * `source` - The source code to scan
/// * `filename` - Optional filename for error reporting
///
/// # Returns
///
/// The tokens, or `SibilError::UnexpectedCharacter` for the first character
/// the scanner had to skip.
pub fn tokenize_strict(source: &str, filename: Option<&str>) -> SibilResult<Vec<Token>> {
    let mut scanner = match filename {
        Some(name) => Scanner::with_filename(source, name),
        None => Scanner::new(source),
    };
    let tokens = scanner.tokenize();

    if let Some(skipped) = scanner.into_skipped().into_iter().next() {
        return Err(SibilError::unexpected_character(
            skipped.character,
            skipped.location,
        ));
    }

    Ok(tokens)
}
