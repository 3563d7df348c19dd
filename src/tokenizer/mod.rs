//! # Tokenizer Component
//!
//! Lexical analysis of Pascal-like source text. A scan turns raw text into a
//! [`TokenStream`](token::TokenStream): an ordered list of tokens that are
//! views into the source, plus a terminal status and, on failure, the
//! diagnostic of the closest near-miss.
//!
//! ## Component Structure
//!
//! * [`token`]: token, failure and stream types
//! * [`charset`]: character classes and symbol tables
//! * [`comment`]: nested `{ }`, `(* *)` and `//` comments
//! * [`literal`]: numbers and strings
//! * [`keyword`]: identifiers and reserved words
//! * [`symbol`]: operators and punctuation
//! * [`whitespace`]: whitespace runs
//! * [`tokenizer`]: the driver that sequences the recognizers
//! * [`cursor`]: sequential access for a parser
//! * [`highlight`]: a restartable, lossless lexer for syntax colouring
//!
//! Every recognizer shares one shape: `fn(text, pos) -> Recognition`. It
//! either matches a token that starts exactly at `pos` or returns a
//! [`Failure`](token::Failure) saying where and why it gave up.
//!
//! ## Usage Example
//!
//! ```rust
//! use pascal_lexer::tokenizer::{token::TokenType, tokenizer::tokenize};
//!
//! let stream = tokenize("begin x := $FF; end.");
//! assert!(stream.is_ok());
//! assert_eq!(stream.tokens[2].kind, TokenType::SymbolPair);
//! assert_eq!(stream.tokens[3].kind, TokenType::HexInt);
//! ```

pub mod charset;
pub mod comment;
pub mod cursor;
pub mod highlight;
pub mod keyword;
pub mod literal;
pub mod symbol;
pub mod token;
#[allow(clippy::module_inception)]
pub mod tokenizer;
pub mod whitespace;
