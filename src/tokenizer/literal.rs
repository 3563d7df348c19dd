use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, digit1, hex_digit1, oct_digit1, one_of, satisfy},
    combinator::{cut, opt, recognize, value},
    error::context,
    multi::many1,
    sequence::{pair, preceded, tuple},
};

use super::{
    charset::{
        is_bin_digit, is_digit, is_line_break, is_sign, BIN_PREFIX, CHAR_CODE_PREFIX, HEX_PREFIX,
        OCT_PREFIX, QUOTE, REAL_DELIMITER,
    },
    token::{
        failure_from, offset_of, Failure, ParserResult, Recognition, Token, TokenType,
        END_OF_INPUT,
    },
};

const NUMBERS_AFTER_SIGN: &str = "There must be numbers after the sign";
const AT_LEAST_ONE_DIGIT: &str = "The number must contain at least one digit";
const EXPONENT_DIGITS: &str = "There must be at least one digit after the exponent";
const UNCLOSED_QUOTE: &str = "Unclosed quote";
const UNSIGNED_EXPECTED: &str = "An unsigned integer expected";
const NOT_A_STRING: &str = "Not a string";

#[tracing::instrument(level = "debug", skip(input))]
fn prefixed_integer(input: &str) -> ParserResult<'_, TokenType> {
    alt((
        value(
            TokenType::HexInt,
            preceded(char(HEX_PREFIX), cut(context(AT_LEAST_ONE_DIGIT, hex_digit1))),
        ),
        value(
            TokenType::OctInt,
            preceded(char(OCT_PREFIX), cut(context(AT_LEAST_ONE_DIGIT, oct_digit1))),
        ),
        value(
            TokenType::BinInt,
            preceded(
                char(BIN_PREFIX),
                cut(context(AT_LEAST_ONE_DIGIT, take_while1(is_bin_digit))),
            ),
        ),
    ))(input)
}

/// Digits, then an optional fraction, then an optional exponent.
///
/// A dot without digits after it is not part of the number (`123.` stops
/// before the dot), but an exponent marker must be followed by digits.
#[tracing::instrument(level = "debug", skip(input))]
fn decimal(input: &str) -> ParserResult<'_, TokenType> {
    let (input, _) = context(AT_LEAST_ONE_DIGIT, digit1)(input)?;
    let (input, fraction) = opt(recognize(pair(char(REAL_DELIMITER), digit1)))(input)?;
    let (input, exponent) = opt(preceded(
        one_of("eE"),
        cut(pair(opt(satisfy(is_sign)), context(EXPONENT_DIGITS, digit1))),
    ))(input)?;

    let kind = if fraction.is_some() || exponent.is_some() {
        TokenType::Real
    } else {
        TokenType::Integer
    };
    Ok((input, kind))
}

/// Recognizes a signed integer, a `$`/`&`/`%` prefixed integer or a real.
#[tracing::instrument(level = "debug", skip(text))]
pub fn parse_number(text: &str, pos: usize) -> Recognition<'_> {
    assert!(pos <= text.len(), "start position {pos} is past the end");
    let input = &text[pos..];
    if input.is_empty() {
        return Err(Failure::new(END_OF_INPUT, pos));
    }

    let unsigned = input.strip_prefix(is_sign).unwrap_or(input);
    if unsigned.is_empty() {
        return Err(Failure::new(NUMBERS_AFTER_SIGN, text.len()));
    }

    match alt((prefixed_integer, decimal))(unsigned) {
        Ok((rest, kind)) => Ok(Token::new(text, pos, offset_of(text, rest), kind)),
        Err(e) => Err(failure_from(text, e, AT_LEAST_ONE_DIGIT)),
    }
}

#[tracing::instrument(level = "debug", skip(input))]
fn quoted_segment(input: &str) -> ParserResult<'_, &str> {
    recognize(tuple((
        char(QUOTE),
        take_while(|c: char| c != QUOTE && !is_line_break(c)),
        cut(context(UNCLOSED_QUOTE, char(QUOTE))),
    )))(input)
}

#[tracing::instrument(level = "debug", skip(input))]
fn char_code_segment(input: &str) -> ParserResult<'_, &str> {
    recognize(preceded(
        char(CHAR_CODE_PREFIX),
        cut(context(UNSIGNED_EXPECTED, take_while1(is_digit))),
    ))(input)
}

/// Recognizes a string: glued quoted runs and `#nn` character codes.
///
/// Two quoted runs with nothing between them are one string, which is how
/// `'it''s'` embeds a quote.
#[tracing::instrument(level = "debug", skip(text))]
pub fn parse_string(text: &str, pos: usize) -> Recognition<'_> {
    assert!(pos <= text.len(), "start position {pos} is past the end");
    let input = &text[pos..];
    if input.is_empty() {
        return Err(Failure::new(END_OF_INPUT, pos));
    }

    match recognize(many1(alt((quoted_segment, char_code_segment))))(input) {
        Ok((rest, _)) => Ok(Token::new(text, pos, offset_of(text, rest), TokenType::String)),
        Err(nom::Err::Failure(e)) if e.message == Some(UNCLOSED_QUOTE) => Err(
            Failure::with_progress(UNCLOSED_QUOTE, pos, offset_of(text, e.input)),
        ),
        Err(e) => Err(failure_from(text, e, NOT_A_STRING)),
    }
}
