//! Lexical analysis module
//!
//! This module handles tokenization of Sibil source code.

pub mod chars;
pub mod scanner;
pub mod token;

pub use chars::Lexable;
pub use scanner::{Scanner, Skipped};
pub use token::{Token, TokenKind};
