//! Scanner implementation for the Sibil lexer
//!
//! The scanner is a pull-based iterator over a borrowed input buffer. Every
//! call to `next` runs a small state machine until it has a token or runs out
//! of input:
//!
//! - `Initial` looks at the character under the cursor. Parens are emitted
//!   immediately, identifier characters move to `Identifier`, anything else is
//!   skipped.
//! - `Identifier` moves a lookahead cursor forward while the characters are
//!   identifier subsequents.
//! - `Emit` moves the cursor past the lexeme and hands the token back.
//!
//! The lookahead cursor only ever moves forward, so nothing is retracted.

use std::iter::FusedIterator;
use std::sync::Arc;

use log::{debug, trace};

use super::chars::Lexable;
use super::token::{Token, TokenKind};
use crate::error::SourceLocation;

/// A character the scanner discarded because it is neither whitespace nor
/// part of any token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub character: char,
    pub location: SourceLocation,
}

/// Scanning states. `Identifier` and `Emit` carry the lookahead cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Initial,
    Identifier(usize),
    Emit(TokenKind, usize),
}

/// Scanner for Sibil source code
pub struct Scanner<'a> {
    source: &'a str,
    /// Byte offset where the lexeme being scanned begins
    start: usize,
    /// Byte offset of the next unconsumed character
    current: usize,
    line: usize,
    column: usize,
    filename: Option<Arc<str>>,
    skipped: Vec<Skipped>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner positioned at the start of `source`
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            filename: None,
            skipped: Vec::new(),
        }
    }

    /// Create a scanner whose token locations name `filename`
    pub fn with_filename(source: &'a str, filename: &str) -> Self {
        Self {
            filename: Some(Arc::from(filename)),
            ..Self::new(source)
        }
    }

    /// Scan every remaining token
    pub fn tokenize(&mut self) -> Vec<Token> {
        self.by_ref().collect()
    }

    /// Byte offset of the cursor
    pub fn position(&self) -> usize {
        self.current
    }

    /// Check if we've reached the end of the source
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// The input not yet consumed
    pub fn remaining(&self) -> &'a str {
        &self.source[self.current..]
    }

    /// Non-whitespace characters skipped so far, in input order
    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }

    pub fn into_skipped(self) -> Vec<Skipped> {
        self.skipped
    }

    /// Run the state machine until one token is emitted or the input ends
    fn scan_token(&mut self) -> Option<Token> {
        let mut state = State::Initial;

        loop {
            trace!("{:?} at current={}", state, self.current);
            state = match state {
                State::Initial => {
                    let c = self.char_at(self.current)?;
                    self.start = self.current;
                    let forward = self.current + c.len_utf8();

                    if c.is_left_paren() {
                        State::Emit(TokenKind::LeftParen, forward)
                    } else if c.is_right_paren() {
                        State::Emit(TokenKind::RightParen, forward)
                    } else if c.is_identifier_initial() || c.is_identifier_subsequent() {
                        // Digits and `. + -` open peculiar identifiers like `+`, `...` or `1+2`.
                        trace!("identifier starts at {}", self.start);
                        State::Identifier(forward)
                    } else {
                        self.skip(c);
                        State::Initial
                    }
                }
                State::Identifier(forward) => match self.char_at(forward) {
                    Some(c) if c.is_identifier_subsequent() => State::Identifier(forward + c.len_utf8()),
                    _ => State::Emit(TokenKind::Identifier, forward),
                },
                State::Emit(kind, end) => return Some(self.emit(kind, end)),
            };
        }
    }

    /// Build the token for `start..end` and move the cursor past it
    fn emit(&mut self, kind: TokenKind, end: usize) -> Token {
        let lexeme = &self.source[self.start..end];
        let location = self.current_location();

        self.current = end;
        self.column += lexeme.chars().count();
        trace!("emit {:?} {:?}, current={}", kind, lexeme, self.current);

        Token::new(kind, lexeme, location)
    }

    /// Discard the character under the cursor
    fn skip(&mut self, c: char) {
        if !c.is_whitespace() {
            let location = self.current_location();
            debug!("skipping unexpected character {:?} at {}", c, location);
            self.skipped.push(Skipped {
                character: c,
                location,
            });
        }

        self.current += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.source[offset..].chars().next()
    }

    /// Get the location of the cursor
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column, self.current, self.filename.clone())
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.scan_token()
    }
}

impl FusedIterator for Scanner<'_> {}
