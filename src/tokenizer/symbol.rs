//! # Symbol Recognition
//!
//! Operators and punctuation come in two shapes:
//!
//! * [`TokenType::SymbolPair`]: two-character operators such as `:=`, `<>`
//!   or `..`, listed in [`SYMBOL_PAIRS`](super::charset::SYMBOL_PAIRS)
//! * [`TokenType::Symbol`]: single characters from
//!   [`SYMBOLS`](super::charset::SYMBOLS)
//!
//! The pair table is consulted first, so `:=` is never split into `:` and `=`.

use nom::{
    branch::alt,
    bytes::complete::take,
    character::complete::satisfy,
    combinator::{value, verify},
    error::context,
};

use super::{
    charset::{is_symbol, is_symbol_pair},
    token::{
        failure_from, offset_of, Failure, ParserResult, Recognition, Token, TokenType,
        END_OF_INPUT,
    },
};

const UNEXPECTED_SYMBOL: &str = "Unexpected symbol";

fn symbol(input: &str) -> ParserResult<'_, TokenType> {
    context(
        UNEXPECTED_SYMBOL,
        alt((
            value(
                TokenType::SymbolPair,
                verify(take(2usize), |pair: &str| is_symbol_pair(pair)),
            ),
            value(TokenType::Symbol, satisfy(is_symbol)),
        )),
    )(input)
}

#[tracing::instrument(level = "debug", skip(text))]
pub fn parse_symbol(text: &str, pos: usize) -> Recognition<'_> {
    assert!(pos <= text.len(), "start position {pos} is past the end");
    let input = &text[pos..];
    if input.is_empty() {
        return Err(Failure::new(END_OF_INPUT, pos));
    }

    match symbol(input) {
        Ok((rest, kind)) => Ok(Token::new(text, pos, offset_of(text, rest), kind)),
        Err(e) => Err(failure_from(text, e, UNEXPECTED_SYMBOL)),
    }
}
