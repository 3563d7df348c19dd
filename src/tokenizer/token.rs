use std::fmt;

use nom::{
    error::{ContextError, ErrorKind, ParseError},
    IResult,
};
use thiserror::Error;

use super::keyword::KeywordSet;

/// Kind of a recognized token.
///
/// The names double as the frame labels of the unfinished-comment report,
/// so `Comment` is the brace form, `CommentBi` the `(* *)` form and
/// `CommentLine` the `//` form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::AsRefStr,
)]
pub enum TokenType {
    Symbol, // + * = ...
    SymbolPair, // := <> ...
    Comment, // { comment }
    CommentBi, // (* comment *)
    CommentLine, // // comment
    String, // 'abc'#12'def'
    Identifier, // abc
    ReservedIdentifierOverride, // &program
    Integer, // 123
    Real, // 123.456e789
    HexInt, // $beef
    OctInt, // &777
    BinInt, // %101
    Whitespace, // \t\n \r
}

impl TokenType {
    pub fn is_whitespace(self) -> bool {
        self == TokenType::Whitespace
    }

    pub fn is_comment(self) -> bool {
        matches!(
            self,
            TokenType::Comment | TokenType::CommentBi | TokenType::CommentLine
        )
    }

    pub fn is_string(self) -> bool {
        self == TokenType::String
    }

    pub fn is_number(self) -> bool {
        matches!(
            self,
            TokenType::Integer
                | TokenType::Real
                | TokenType::HexInt
                | TokenType::OctInt
                | TokenType::BinInt
        )
    }

    pub fn is_identifier(self) -> bool {
        matches!(
            self,
            TokenType::Identifier | TokenType::ReservedIdentifierOverride
        )
    }

    /// Whitespace and comments, which a grammar skips between its tokens.
    pub fn is_trivia(self) -> bool {
        self.is_whitespace() || self.is_comment()
    }
}

/// A recognized token: a view `[start, end)` into the source text.
///
/// `inner` is only populated on comments that contain fully matched nested
/// comments, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenType,
    pub start: usize,
    pub end: usize,
    pub value: &'src str,
    pub inner: Vec<Token<'src>>,
}

impl<'src> Token<'src> {
    pub fn new(source: &'src str, start: usize, end: usize, kind: TokenType) -> Self {
        Self::with_inner(source, start, end, kind, Vec::new())
    }

    pub fn with_inner(
        source: &'src str,
        start: usize,
        end: usize,
        kind: TokenType,
        inner: Vec<Token<'src>>,
    ) -> Self {
        debug_assert!(start < end, "zero-width {kind} token at {start}");
        Self {
            kind,
            start,
            end,
            value: &source[start..end],
            inner,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }

    pub fn is_comment(&self) -> bool {
        self.kind.is_comment()
    }

    pub fn is_string(&self) -> bool {
        self.kind.is_string()
    }

    pub fn is_number(&self) -> bool {
        self.kind.is_number()
    }

    pub fn is_identifier(&self) -> bool {
        self.kind.is_identifier()
    }

    /// Only plain identifiers can be keywords; `&begin` is always a name.
    pub fn is_keyword(&self, keywords: &KeywordSet) -> bool {
        self.kind == TokenType::Identifier && keywords.contains(self.value)
    }

    /// Renders the token, nesting inner tokens one `prefix` + tab deeper.
    pub fn render(&self, prefix: &str) -> String {
        let mut out = String::new();
        let mut indent = prefix.to_string();
        let mut pending = vec![(self, 0)];
        while let Some((token, depth)) = pending.pop() {
            indent.truncate(prefix.len() + depth);
            while indent.len() < prefix.len() + depth {
                indent.push('\t');
            }
            if depth > 0 {
                out.push('\n');
                out.push_str(&indent);
            }
            out.push_str(&format!(
                "Token{{ OK, type={} range=({}, {}) str={} }}",
                token.kind, token.start, token.end, token.value
            ));
            if !token.inner.is_empty() {
                out.push('\n');
                out.push_str(&indent);
                out.push_str("Inner tokens:");
                pending.extend(token.inner.iter().rev().map(|t| (t, depth + 1)));
            }
        }
        out
    }
}

// Nesting depth is unbounded, so the inner tree is torn down iteratively.
impl Drop for Token<'_> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.inner);
        while let Some(mut token) = pending.pop() {
            pending.append(&mut token.inner);
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(""))
    }
}

/// A positioned recognition failure.
///
/// `pos` is where the message points; `furthest` is how far the recognizer
/// got before giving up and drives the closest near-miss selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} at pos {pos}")]
pub struct Failure {
    pub message: String,
    pub pos: usize,
    pub furthest: usize,
}

impl Failure {
    pub fn new(message: impl Into<String>, pos: usize) -> Self {
        Self::with_progress(message, pos, pos)
    }

    pub fn with_progress(message: impl Into<String>, pos: usize, furthest: usize) -> Self {
        Self {
            message: message.into(),
            pos,
            furthest,
        }
    }
}

/// Outcome of one recognizer call at one offset.
pub type Recognition<'src> = Result<Token<'src>, Failure>;

pub(crate) const END_OF_INPUT: &str = "Unexpected end of input";

/// Error type threaded through the nom recognizers.
///
/// The first `context` attached to a failing parser becomes the message;
/// outer contexts never override it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanError<'a> {
    pub input: &'a str,
    pub message: Option<&'static str>,
}

impl<'a> ParseError<&'a str> for ScanError<'a> {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        Self {
            input,
            message: None,
        }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> ContextError<&'a str> for ScanError<'a> {
    fn add_context(_input: &'a str, ctx: &'static str, other: Self) -> Self {
        Self {
            message: other.message.or(Some(ctx)),
            ..other
        }
    }
}

pub type ParserResult<'a, T> = IResult<&'a str, T, ScanError<'a>>;

/// Offset of `rest`, a suffix of `text`, from the start of `text`.
pub(crate) fn offset_of(text: &str, rest: &str) -> usize {
    text.len() - rest.len()
}

/// Converts a nom error raised while scanning `text` into a [`Failure`].
pub(crate) fn failure_from(text: &str, err: nom::Err<ScanError<'_>>, fallback: &str) -> Failure {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            Failure::new(e.message.unwrap_or(fallback), offset_of(text, e.input))
        }
        nom::Err::Incomplete(_) => Failure::new(fallback, text.len()),
    }
}

/// Terminal state of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum Status {
    Ok,
    Fail,
}

/// Tokens of one scan plus its terminal status.
///
/// On failure `tokens` still holds everything recognized before the
/// stopping offset `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream<'src> {
    pub source: &'src str,
    pub tokens: Vec<Token<'src>>,
    pub status: Status,
    pub error: Option<Failure>,
    pub start: usize,
    pub end: usize,
}

impl<'src> TokenStream<'src> {
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn cursor(&self) -> super::cursor::TokenCursor<'_, 'src> {
        super::cursor::TokenCursor::new(&self.tokens)
    }

    pub fn into_result(self) -> crate::error::LexResult<Vec<Token<'src>>> {
        match self.error {
            None => Ok(self.tokens),
            Some(failure) => Err(crate::error::LexError::Tokenize {
                failure,
                stopped_at: self.end,
            }),
        }
    }
}

impl fmt::Display for TokenStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "STATUS = {} Length = {}", self.status, self.len())?;
        for token in &self.tokens {
            writeln!(f, "\t{}", token.render("\t"))?;
        }
        Ok(())
    }
}
