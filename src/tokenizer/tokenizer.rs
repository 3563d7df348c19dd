use super::{
    comment::parse_comment,
    keyword::parse_identifier,
    literal::{parse_number, parse_string},
    symbol::parse_symbol,
    token::{Failure, Recognition, Status, Token, TokenStream},
    whitespace::parse_whitespace,
};

const INVALID_SEQUENCE: &str = "Invalid sequence";
const NO_PROGRESS: &str = "Recognizer made no progress";

/// The closed set of recognizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Recognizer {
    Comment,
    String,
    Identifier,
    Number,
    Symbol,
    Whitespace,
}

impl Recognizer {
    /// Content recognizers in the order they are tried. First match wins;
    /// their starting characters do not overlap once comments and strings
    /// are carved out.
    pub const PRIORITY: [Recognizer; 5] = [
        Recognizer::Comment,
        Recognizer::String,
        Recognizer::Identifier,
        Recognizer::Number,
        Recognizer::Symbol,
    ];

    pub fn recognize(self, text: &str, pos: usize) -> Recognition<'_> {
        match self {
            Recognizer::Comment => parse_comment(text, pos),
            Recognizer::String => parse_string(text, pos),
            Recognizer::Identifier => parse_identifier(text, pos),
            Recognizer::Number => parse_number(text, pos),
            Recognizer::Symbol => parse_symbol(text, pos),
            Recognizer::Whitespace => parse_whitespace(text, pos),
        }
    }
}

enum Step<'src> {
    Emit(Token<'src>),
    Skip(usize),
}

/// Scans a whole text into a [`TokenStream`].
///
/// Whitespace between tokens is skipped, not emitted. Scanning stops at the
/// first position where neither a content recognizer nor whitespace
/// matches; the diagnostic is then the failure that got furthest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize<'src>(&self, text: &'src str) -> TokenStream<'src> {
        self.tokenize_from(text, 0)
    }

    /// # Panics
    ///
    /// If `start` is past the end of `text` or not on a char boundary.
    #[tracing::instrument(level = "debug", skip(self, text), fields(len = text.len()))]
    pub fn tokenize_from<'src>(&self, text: &'src str, start: usize) -> TokenStream<'src> {
        assert!(start <= text.len(), "start position {start} is past the end");
        let mut tokens = Vec::new();
        let mut pos = start;

        while pos < text.len() {
            match self.step(text, pos) {
                Ok(Step::Emit(token)) => {
                    pos = token.end;
                    tokens.push(token);
                }
                Ok(Step::Skip(end)) => pos = end,
                Err(failure) => {
                    tracing::error!(pos, "{}", failure);
                    return TokenStream {
                        source: text,
                        tokens,
                        status: Status::Fail,
                        error: Some(failure),
                        start,
                        end: pos,
                    };
                }
            }
        }

        tracing::debug!(count = tokens.len(), "tokenized");
        TokenStream {
            source: text,
            tokens,
            status: Status::Ok,
            error: None,
            start,
            end: pos,
        }
    }

    /// One driver step at `pos`: a token to emit, a whitespace run to skip,
    /// or the closest near-miss when nothing matches.
    fn step<'src>(&self, text: &'src str, pos: usize) -> Result<Step<'src>, Failure> {
        let mut closest: Option<Failure> = None;
        for recognizer in Recognizer::PRIORITY {
            match recognizer.recognize(text, pos) {
                Ok(token) if token.end > pos => return Ok(Step::Emit(token)),
                Ok(_) => return Err(Failure::new(NO_PROGRESS, pos)),
                Err(failure) => {
                    let best = closest.as_ref().map_or(pos, |c| c.furthest);
                    if failure.furthest > best {
                        closest = Some(failure);
                    }
                }
            }
        }

        if let Ok(run) = parse_whitespace(text, pos) {
            return Ok(Step::Skip(run.end));
        }
        Err(closest.unwrap_or_else(|| Failure::new(INVALID_SEQUENCE, pos)))
    }
}

/// Scans `text` from the start with the default [`Tokenizer`].
pub fn tokenize(text: &str) -> TokenStream<'_> {
    Tokenizer::new().tokenize(text)
}
