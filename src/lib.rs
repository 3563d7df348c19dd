//! # Pascal Lexer
//!
//! Lexical analysis for a Pascal-like language: nested comments in three
//! syntaxes, quoted strings glued with `#nn` character codes, decimal and
//! `$`/`&`/`%` prefixed numbers, identifiers with the `&` reserved-word
//! override, and one- or two-character operators.
//!
//! - Batch scanning into a token stream ([`tokenizer::tokenizer`])
//! - Parser-facing access ([`tokenizer::cursor`])
//! - Lossless highlighting ([`tokenizer::highlight`])
//! - Configuration ([`config`]) and errors ([`error`])

pub mod config;
pub mod error;
pub mod tokenizer;

// Re-exports
pub use config::LexerConfig;
pub use error::{LexError, LexResult};
pub use tokenizer::{
    cursor::TokenCursor,
    highlight::{HighlightLexer, Lexeme, SyntaxKind},
    keyword::{Keyword, KeywordSet, DEFAULT_KEYWORDS},
    token::{Failure, Recognition, Status, Token, TokenStream, TokenType},
    tokenizer::{tokenize, Recognizer, Tokenizer},
};
