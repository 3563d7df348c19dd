//! # Highlighting Lexer
//!
//! A lossless, restartable lexer for editors and other presentation layers.
//! Unlike the [`Tokenizer`](super::tokenizer::Tokenizer) it never stops at
//! bad input: a character nothing recognizes becomes a one-character
//! [`SyntaxKind::Error`] lexeme and scanning resumes right after it. With
//! whitespace emission enabled the lexemes tile the whole text.

use strum::IntoEnumIterator;

use super::{
    keyword::KeywordSet,
    token::{Token, TokenType},
    tokenizer::Recognizer,
};
use crate::config::LexerConfig;

/// Colouring class of a lexeme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::EnumString,
)]
pub enum SyntaxKind {
    Keyword,
    Identifier,
    Integer,
    Real,
    String,
    BraceComment,
    ParenComment,
    LineComment,
    Symbol,
    SymbolPair,
    Whitespace,
    Error,
}

impl SyntaxKind {
    fn classify(token: &Token<'_>, keywords: &KeywordSet) -> Self {
        match token.kind {
            TokenType::Identifier if token.is_keyword(keywords) => SyntaxKind::Keyword,
            TokenType::Identifier | TokenType::ReservedIdentifierOverride => {
                SyntaxKind::Identifier
            }
            TokenType::Integer | TokenType::HexInt | TokenType::OctInt | TokenType::BinInt => {
                SyntaxKind::Integer
            }
            TokenType::Real => SyntaxKind::Real,
            TokenType::String => SyntaxKind::String,
            TokenType::Comment => SyntaxKind::BraceComment,
            TokenType::CommentBi => SyntaxKind::ParenComment,
            TokenType::CommentLine => SyntaxKind::LineComment,
            TokenType::Symbol => SyntaxKind::Symbol,
            TokenType::SymbolPair => SyntaxKind::SymbolPair,
            TokenType::Whitespace => SyntaxKind::Whitespace,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: SyntaxKind,
    pub start: usize,
    pub end: usize,
}

impl Lexeme {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.start..self.end]
    }
}

#[derive(Debug, Clone)]
pub struct HighlightLexer<'src> {
    text: &'src str,
    pos: usize,
    keywords: KeywordSet,
    emit_whitespace: bool,
}

impl<'src> HighlightLexer<'src> {
    pub fn new(text: &'src str) -> Self {
        Self {
            text,
            pos: 0,
            keywords: KeywordSet::default(),
            emit_whitespace: true,
        }
    }

    pub fn with_config(text: &'src str, config: &LexerConfig) -> Self {
        Self {
            text,
            pos: 0,
            keywords: config.keyword_set(),
            emit_whitespace: config.emit_whitespace,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Repositions the lexer, e.g. at the start of a line an editor
    /// invalidated.
    ///
    /// # Panics
    ///
    /// If `pos` is past the end of the text or not on a char boundary.
    pub fn restart_at(&mut self, pos: usize) {
        assert!(
            self.text.is_char_boundary(pos),
            "restart position {pos} is not a char boundary"
        );
        tracing::debug!(from = self.pos, to = pos, "restart");
        self.pos = pos;
    }

    fn recognize(&self) -> Option<Token<'src>> {
        Recognizer::iter()
            .filter_map(|recognizer| recognizer.recognize(self.text, self.pos).ok())
            .find(|token| token.end > self.pos)
    }
}

impl Iterator for HighlightLexer<'_> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Lexeme> {
        while self.pos < self.text.len() {
            let start = self.pos;
            let Some(token) = self.recognize() else {
                let width = self.text[start..].chars().next().map_or(1, char::len_utf8);
                tracing::debug!(pos = start, "unrecognized character");
                self.pos = start + width;
                return Some(Lexeme {
                    kind: SyntaxKind::Error,
                    start,
                    end: self.pos,
                });
            };

            self.pos = token.end;
            if token.is_whitespace() && !self.emit_whitespace {
                continue;
            }
            return Some(Lexeme {
                kind: SyntaxKind::classify(&token, &self.keywords),
                start,
                end: token.end,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(text: &str) -> Vec<(SyntaxKind, &str)> {
        HighlightLexer::new(text)
            .map(|l| (l.kind, l.text(text)))
            .collect()
    }

    #[test]
    fn test_covers_whole_text() {
        assert_eq!(
            lex("begin x:=$1F; {c} end"),
            vec![
                (SyntaxKind::Keyword, "begin"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::Identifier, "x"),
                (SyntaxKind::SymbolPair, ":="),
                (SyntaxKind::Integer, "$1F"),
                (SyntaxKind::Symbol, ";"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::BraceComment, "{c}"),
                (SyntaxKind::Whitespace, " "),
                (SyntaxKind::Keyword, "end"),
            ]
        );
    }

    #[test]
    fn test_comment_and_literal_kinds() {
        assert_eq!(
            lex("(*a*)//b\n'c'1.5&end"),
            vec![
                (SyntaxKind::ParenComment, "(*a*)"),
                (SyntaxKind::LineComment, "//b\n"),
                (SyntaxKind::String, "'c'"),
                (SyntaxKind::Real, "1.5"),
                (SyntaxKind::Identifier, "&end"),
            ]
        );
    }

    #[test]
    fn test_error_lexeme_never_stalls() {
        assert_eq!(
            lex("a?é'x"),
            vec![
                (SyntaxKind::Identifier, "a"),
                (SyntaxKind::Error, "?"),
                (SyntaxKind::Error, "é"),
                (SyntaxKind::Error, "'"),
                (SyntaxKind::Identifier, "x"),
            ]
        );
    }

    #[test]
    fn test_restart_at() {
        let text = "one two three";
        let mut lexer = HighlightLexer::new(text);
        assert_eq!(lexer.next().map(|l| l.text(text)), Some("one"));
        lexer.restart_at(8);
        assert_eq!(lexer.position(), 8);
        assert_eq!(lexer.next().map(|l| l.text(text)), Some("three"));
        assert_eq!(lexer.next(), None);

        lexer.restart_at(0);
        assert_eq!(lexer.count(), 5);
    }

    #[test]
    #[should_panic]
    fn test_restart_inside_char_panics() {
        HighlightLexer::new("é").restart_at(1);
    }

    #[test]
    fn test_with_config() {
        let config = LexerConfig {
            keywords: vec!["program".to_string()],
            emit_whitespace: false,
        };
        let text = "program begin";
        let kinds: Vec<_> = HighlightLexer::with_config(text, &config)
            .map(|l| l.kind)
            .collect();
        assert_eq!(kinds, vec![SyntaxKind::Keyword, SyntaxKind::Identifier]);
    }
}
