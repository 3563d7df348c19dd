use std::collections::HashSet;

use lazy_static::lazy_static;
use nom::{
    bytes::complete::take_while,
    character::complete::{char, satisfy},
    combinator::opt,
    sequence::tuple,
};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::{
    charset::{is_ident_continue, is_ident_start, RESERVED_OVERRIDE},
    token::{offset_of, Failure, Recognition, ScanError, Token, TokenType, END_OF_INPUT},
};

const IDENTIFIER_START: &str = "Identifier must start with [a-zA-Z_]";

/// Reserved words of the language.
///
/// Matching is case-insensitive, so `BEGIN`, `Begin` and `begin` are the
/// same keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Keyword {
    Goto,
    Label,
    Begin,
    End,
    Case,
    Of,
    Else,
    Otherwise,
    If,
    Then,
    For,
    To,
    Downto,
    Do,
    In,
    Repeat,
    Until,
    While,
    With,
    Raise,
    Try,
    Except,
    Finally,
    Asm,
    Div,
    Mod,
    And,
    Shl,
    Shr,
    As,
    Or,
    Xor,
    Nil,
    Not,
    Is,
    Procedure,
    Forward,
    Array,
    Const,
    Var,
    Out,
    Absolute,
    Export,
    Cvar,
    External,
    Name,
}

impl Keyword {
    pub fn lookup(word: &str) -> Option<Keyword> {
        word.parse().ok()
    }
}

/// Case-insensitive set of reserved words used to classify identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    words: HashSet<String>,
}

impl KeywordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        DEFAULT_KEYWORDS.clone()
    }
}

lazy_static! {
    pub static ref DEFAULT_KEYWORDS: KeywordSet =
        KeywordSet::new(Keyword::iter().map(|k| k.to_string()));
}

/// Recognizes an identifier, optionally marked with `&` to use a reserved
/// word as a plain name (`&begin`).
#[tracing::instrument(level = "debug", skip(text))]
pub fn parse_identifier(text: &str, pos: usize) -> Recognition<'_> {
    assert!(pos <= text.len(), "start position {pos} is past the end");
    let input = &text[pos..];
    if input.is_empty() {
        return Err(Failure::new(END_OF_INPUT, pos));
    }

    let (rest, (marker, _, _)) = tuple((
        opt(char::<_, ScanError>(RESERVED_OVERRIDE)),
        satisfy(is_ident_start),
        take_while(is_ident_continue),
    ))(input)
    .map_err(|_| Failure::new(IDENTIFIER_START, pos))?;

    let kind = if marker.is_some() {
        TokenType::ReservedIdentifierOverride
    } else {
        TokenType::Identifier
    };
    Ok(Token::new(text, pos, offset_of(text, rest), kind))
}
