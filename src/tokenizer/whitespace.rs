//! # Whitespace Recognition
//!
//! Runs of space, tab, CR and LF. The token stream driver only falls back
//! to this recognizer when every content recognizer failed, and skips the
//! run without emitting it. The highlighting lexer keeps the runs as
//! [`TokenType::Whitespace`] tokens so its output covers the whole text.

use nom::{bytes::complete::take_while1, error::context};

use super::{
    charset::is_whitespace,
    token::{
        failure_from, offset_of, Failure, ParserResult, Recognition, Token, TokenType,
        END_OF_INPUT,
    },
};

const UNEXPECTED_CHARACTER: &str = "Unexpected character";

fn whitespace_run(input: &str) -> ParserResult<'_, &str> {
    context(UNEXPECTED_CHARACTER, take_while1(is_whitespace))(input)
}

/// Recognizes a maximal whitespace run starting at `pos`.
///
/// # Examples
///
/// ```
/// # use pascal_lexer::tokenizer::whitespace::parse_whitespace;
/// # use pascal_lexer::tokenizer::token::TokenType;
/// let token = parse_whitespace("x \t\ny", 1).unwrap();
/// assert_eq!(token.kind, TokenType::Whitespace);
/// assert_eq!(token.end, 4);
/// ```
#[tracing::instrument(level = "debug", skip(text))]
pub fn parse_whitespace(text: &str, pos: usize) -> Recognition<'_> {
    assert!(pos <= text.len(), "start position {pos} is past the end");
    let input = &text[pos..];
    if input.is_empty() {
        return Err(Failure::new(END_OF_INPUT, pos));
    }

    match whitespace_run(input) {
        Ok((rest, _)) => Ok(Token::new(
            text,
            pos,
            offset_of(text, rest),
            TokenType::Whitespace,
        )),
        Err(e) => Err(failure_from(text, e, UNEXPECTED_CHARACTER)),
    }
}
