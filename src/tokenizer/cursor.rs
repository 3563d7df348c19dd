use super::token::Token;

/// Sequential read access over a token slice, for a parser to consume.
///
/// The cursor never mutates the tokens; `position` is an index into the
/// slice, not a source offset.
#[derive(Debug, Clone)]
pub struct TokenCursor<'t, 'src> {
    tokens: &'t [Token<'src>],
    position: usize,
}

impl<'t, 'src> TokenCursor<'t, 'src> {
    pub fn new(tokens: &'t [Token<'src>]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn current(&self) -> Option<&'t Token<'src>> {
        self.tokens.get(self.position)
    }

    /// Looks `n` tokens ahead without moving; `peek(0)` is `current()`.
    pub fn peek(&self, n: usize) -> Option<&'t Token<'src>> {
        self.tokens.get(self.position + n)
    }

    /// Returns the current token and moves past it.
    pub fn advance(&mut self) -> Option<&'t Token<'src>> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    pub fn is_eof(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves past whitespace and comments. Returns how many were skipped.
    pub fn skip_trivia(&mut self) -> usize {
        let from = self.position;
        while self.current().is_some_and(|t| t.kind.is_trivia()) {
            self.position += 1;
        }
        self.position - from
    }

    pub fn next_significant(&mut self) -> Option<&'t Token<'src>> {
        self.skip_trivia();
        self.advance()
    }
}

impl<'t, 'src> Iterator for TokenCursor<'t, 'src> {
    type Item = &'t Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tokens.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{token::TokenType, tokenizer::tokenize};

    #[test]
    fn test_sequential_access() {
        let stream = tokenize("a := 1;");
        let mut cursor = stream.cursor();
        assert_eq!(cursor.current().map(|t| t.value), Some("a"));
        assert_eq!(cursor.peek(1).map(|t| t.value), Some(":="));
        assert_eq!(cursor.peek(9), None);

        assert_eq!(cursor.advance().map(|t| t.value), Some("a"));
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.by_ref().count(), 3);
        assert!(cursor.is_eof());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_skip_trivia() {
        let stream = tokenize("{ a } (* b *) x // c\ny");
        let mut cursor = stream.cursor();
        assert_eq!(cursor.skip_trivia(), 2);
        assert_eq!(cursor.current().map(|t| t.kind), Some(TokenType::Identifier));
        assert_eq!(cursor.skip_trivia(), 0);

        assert_eq!(cursor.next_significant().map(|t| t.value), Some("x"));
        assert_eq!(cursor.next_significant().map(|t| t.value), Some("y"));
        assert_eq!(cursor.next_significant(), None);
    }

    #[test]
    fn test_empty() {
        let tokens: Vec<Token<'_>> = Vec::new();
        let mut cursor = TokenCursor::new(&tokens);
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.size_hint(), (0, Some(0)));
        assert_eq!(cursor.next(), None);
    }
}
