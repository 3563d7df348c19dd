//! # Comment Recognition
//!
//! Three comment forms are recognized:
//!
//! * **Brace comments**: `{ text }`
//! * **Bi comments**: `(* text *)`
//! * **Line comments**: `// text` up to and including the newline
//!
//! ## Nesting
//!
//! `{ }` and `(* *)` nest inside every comment form, mixed freely. Each
//! closer only closes the innermost frame of its own kind; otherwise it is
//! plain content, so `{ *) }` is a single brace comment. Fully closed nested
//! comments are reported as [`Token::inner`] tokens of their parent.
//!
//! A line comment ends at the first newline regardless of nesting. Frames
//! still open inside it at that point are dropped, and only the nested
//! comments that were closed before the newline are kept.
//!
//! ## Diagnostics
//!
//! When input ends while a brace or bi comment is open, the failure lists
//! every open frame from the outermost to the innermost:
//!
//! ```text
//! Comment error
//!  :: Unfinished comment (Comment) at pos 0 level 0
//!  :: Unfinished comment (CommentBi) at pos 2 level 1
//!  at pos 0
//! ```

use super::{
    charset::{BI_CLOSE, BI_OPEN, BRACE_CLOSE, BRACE_OPEN, LINE_COMMENT, NEWLINE},
    token::{Failure, Recognition, Token, TokenType, END_OF_INPUT},
};

const NOT_A_COMMENT: &str = "Not a comment";
const INVALID_COMMENT: &str = "Invalid comment";
const IS_NOT_A_COMMENT: &str = "Is not a comment";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommentKind {
    Brace,
    Bi,
    Line,
}

impl CommentKind {
    fn token_type(self) -> TokenType {
        match self {
            CommentKind::Brace => TokenType::Comment,
            CommentKind::Bi => TokenType::CommentBi,
            CommentKind::Line => TokenType::CommentLine,
        }
    }
}

/// One open comment delimiter and the nested comments closed inside it.
#[derive(Debug)]
struct CommentFrame<'src> {
    start: usize,
    kind: CommentKind,
    collected: Vec<Token<'src>>,
}

impl<'src> CommentFrame<'src> {
    fn open(start: usize, kind: CommentKind) -> Self {
        tracing::trace!(start, ?kind, "comment frame opened");
        Self {
            start,
            kind,
            collected: Vec::new(),
        }
    }

    fn close(self, text: &'src str, end: usize) -> Token<'src> {
        tracing::trace!(start = self.start, end, kind = ?self.kind, "comment frame closed");
        Token::with_inner(text, self.start, end, self.kind.token_type(), self.collected)
    }
}

/// Call-local stack of open frames. The outermost frame is held apart from
/// the nested ones, so the stack is never empty while a scan runs.
struct FrameStack<'src> {
    outer: CommentFrame<'src>,
    nested: Vec<CommentFrame<'src>>,
}

impl<'src> FrameStack<'src> {
    fn new(outer: CommentFrame<'src>) -> Self {
        Self {
            outer,
            nested: Vec::new(),
        }
    }

    fn innermost_is(&self, kind: CommentKind) -> bool {
        self.nested.last().unwrap_or(&self.outer).kind == kind
    }

    fn outermost_is(&self, kind: CommentKind) -> bool {
        self.outer.kind == kind
    }

    /// Closes the innermost nested frame at `end` and attaches it to its
    /// parent. Returns `false` when only the outermost frame is open.
    fn close_nested(&mut self, text: &'src str, end: usize) -> bool {
        let Some(frame) = self.nested.pop() else {
            return false;
        };
        let token = frame.close(text, end);
        self.nested
            .last_mut()
            .unwrap_or(&mut self.outer)
            .collected
            .push(token);
        true
    }

    /// Closes the outermost frame at `end`, dropping everything opened
    /// inside it that has not been closed yet.
    fn close(self, text: &'src str, end: usize) -> Token<'src> {
        if !self.nested.is_empty() {
            tracing::debug!(
                dropped = self.nested.len(),
                end,
                "line comment closed with nested comments still open"
            );
        }
        self.outer.close(text, end)
    }

    fn report(&self, start: usize, stopped_at: usize) -> Failure {
        let mut message = String::from("Comment error\n");
        let frames = std::iter::once(&self.outer).chain(&self.nested);
        for (level, frame) in frames.enumerate() {
            message.push_str(&format!(
                " :: Unfinished comment ({}) at pos {} level {}\n",
                frame.kind.token_type(),
                frame.start,
                level
            ));
        }
        Failure::with_progress(message, start, stopped_at)
    }
}

/// Recognizes a (possibly nested) comment starting at `pos`.
#[tracing::instrument(level = "debug", skip(text))]
pub fn parse_comment(text: &str, pos: usize) -> Recognition<'_> {
    assert!(pos <= text.len(), "start position {pos} is past the end");
    let bytes = text.as_bytes();
    let len = bytes.len();
    if pos == len {
        return Err(Failure::new(END_OF_INPUT, pos));
    }

    let next = bytes.get(pos + 1).copied();
    let (kind, width) = match bytes[pos] {
        LINE_COMMENT if next == Some(LINE_COMMENT) => (CommentKind::Line, 2),
        LINE_COMMENT => return Err(Failure::with_progress(INVALID_COMMENT, pos, pos + 1)),
        BRACE_OPEN => (CommentKind::Brace, 1),
        c if c == BI_OPEN[0] && next == Some(BI_OPEN[1]) => (CommentKind::Bi, 2),
        c if c == BI_OPEN[0] && next.is_none() => {
            return Err(Failure::with_progress(IS_NOT_A_COMMENT, pos, len));
        }
        c if c == BI_OPEN[0] => return Err(Failure::with_progress(NOT_A_COMMENT, pos, pos + 1)),
        _ => return Err(Failure::new(NOT_A_COMMENT, pos)),
    };

    let mut stack = FrameStack::new(CommentFrame::open(pos, kind));
    let mut cursor = pos + width;
    while cursor < len {
        let next = bytes.get(cursor + 1).copied();
        match bytes[cursor] {
            BRACE_OPEN => {
                stack
                    .nested
                    .push(CommentFrame::open(cursor, CommentKind::Brace));
                cursor += 1;
            }
            c if c == BI_OPEN[0] && next == Some(BI_OPEN[1]) => {
                stack.nested.push(CommentFrame::open(cursor, CommentKind::Bi));
                cursor += 2;
            }
            BRACE_CLOSE if stack.innermost_is(CommentKind::Brace) => {
                cursor += 1;
                if !stack.close_nested(text, cursor) {
                    return Ok(stack.close(text, cursor));
                }
            }
            c if c == BI_CLOSE[0]
                && next == Some(BI_CLOSE[1])
                && stack.innermost_is(CommentKind::Bi) =>
            {
                cursor += 2;
                if !stack.close_nested(text, cursor) {
                    return Ok(stack.close(text, cursor));
                }
            }
            NEWLINE if stack.outermost_is(CommentKind::Line) => {
                return Ok(stack.close(text, cursor + 1));
            }
            _ => cursor += 1,
        }
    }

    if stack.outermost_is(CommentKind::Line) {
        return Ok(stack.close(text, len));
    }
    Err(stack.report(pos, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_full(input: &str, kind: TokenType) {
        let token = parse_comment(input, 0).unwrap_or_else(|e| panic!("{input:?}: {e}"));
        assert_eq!(token.kind, kind, "{input:?}");
        assert_eq!((token.start, token.end), (0, input.len()), "{input:?}");
    }

    fn assert_not_full(input: &str) {
        if let Ok(token) = parse_comment(input, 0) {
            assert!(token.end < input.len(), "{input:?} matched fully");
        }
    }

    #[test]
    fn test_brace_comment() {
        assert_full("{ comment }", TokenType::Comment);
        assert_full("{}", TokenType::Comment);
        assert_full("{multi\nline\ncomment}", TokenType::Comment);
    }

    #[test]
    fn test_bi_comment() {
        assert_full("(* comment *)", TokenType::CommentBi);
        assert_full("(**)", TokenType::CommentBi);
        assert_full("(*multi\nline\ncomment*)", TokenType::CommentBi);
    }

    #[test]
    fn test_line_comment() {
        assert_full("// comment", TokenType::CommentLine);
        assert_full("//", TokenType::CommentLine);
        assert_full("/////////", TokenType::CommentLine);
        assert_full("// { comment\n", TokenType::CommentLine);
    }

    #[test]
    fn test_not_comments() {
        for input in [
            "c{comment}",
            "{",
            "}",
            "(*",
            "*)",
            "/",
            "(**+)",
            "{c)",
            "/comm/",
            "{comm",
            "comment",
            "(*)",
        ] {
            assert_not_full(input);
        }
    }

    #[test]
    fn test_partial_matches() {
        for (input, end) in [
            ("{aa}1", 4),
            ("{aa}{}", 4),
            ("//{\n//", 4),
            ("(* \n*\n *))", 9),
        ] {
            let token = parse_comment(input, 0).unwrap();
            assert_eq!(token.end, end, "{input:?}");
        }
    }

    #[test]
    fn test_nested_inner_tokens() {
        let token = parse_comment("{ { } }", 0).unwrap();
        assert_eq!(token.kind, TokenType::Comment);
        assert_eq!(token.end, 7);
        assert_eq!(token.inner.len(), 1);
        assert_eq!((token.inner[0].start, token.inner[0].end), (2, 5));
        assert_eq!(token.inner[0].value, "{ }");
    }

    #[test]
    fn test_mixed_nesting() {
        let input = "{WHAT {Level 2} (*Level2 {Level 3 comment}*)}";
        let token = parse_comment(input, 0).unwrap();
        assert_eq!(token.end, input.len());
        let kinds: Vec<_> = token.inner.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenType::Comment, TokenType::CommentBi]);
        assert_eq!(token.inner[1].inner[0].value, "{Level 3 comment}");
    }

    #[test]
    fn test_closer_of_other_kind_is_content() {
        assert_full("{ *) }", TokenType::Comment);
        assert_full("(* } *)", TokenType::CommentBi);
        assert_full("{ ( }", TokenType::Comment);
    }

    #[test]
    fn test_unfinished_report() {
        let failure = parse_comment("{ { }", 0).unwrap_err();
        assert_eq!(
            failure.to_string(),
            "Comment error\n :: Unfinished comment (Comment) at pos 0 level 0\n at pos 0"
        );
        assert_eq!(failure.furthest, 5);
    }

    #[test]
    fn test_unfinished_report_lists_every_level() {
        let failure = parse_comment("{ (* {", 0).unwrap_err();
        assert_eq!(
            failure.to_string(),
            "Comment error\n\
             \x20:: Unfinished comment (Comment) at pos 0 level 0\n\
             \x20:: Unfinished comment (CommentBi) at pos 2 level 1\n\
             \x20:: Unfinished comment (Comment) at pos 5 level 2\n\
             \x20at pos 0"
        );
    }

    #[test]
    fn test_report_uses_scan_start() {
        let failure = parse_comment("{unfinished} { comment", 13).unwrap_err();
        assert_eq!(
            failure.to_string(),
            "Comment error\n :: Unfinished comment (Comment) at pos 13 level 0\n at pos 13"
        );
        assert_eq!(failure.furthest, 22);
    }

    #[test]
    fn test_line_comment_drops_open_frames() {
        let token = parse_comment("// a {b} { c (* d\nrest", 0).unwrap();
        assert_eq!(token.kind, TokenType::CommentLine);
        assert_eq!(token.value, "// a {b} { c (* d\n");
        assert_eq!(token.inner.len(), 1);
        assert_eq!(token.inner[0].value, "{b}");
    }

    #[test]
    fn test_single_slash_and_paren() {
        let failure = parse_comment("/x", 0).unwrap_err();
        assert_eq!(failure, Failure::with_progress("Invalid comment", 0, 1));
        let failure = parse_comment("(x", 0).unwrap_err();
        assert_eq!(failure, Failure::with_progress("Not a comment", 0, 1));
        let failure = parse_comment("x(", 1).unwrap_err();
        assert_eq!(failure, Failure::with_progress("Is not a comment", 1, 2));
    }

    #[test]
    fn test_deep_nesting() {
        const DEPTH: usize = 100_000;
        let input = format!("{}{}", "{".repeat(DEPTH), "}".repeat(DEPTH));
        let token = parse_comment(&input, 0).unwrap();
        assert_eq!(token.end, input.len());

        let mut depth = 1;
        let mut level = &token;
        while let Some(child) = level.inner.first() {
            assert_eq!(child.start, depth);
            assert_eq!(child.end, input.len() - depth);
            depth += 1;
            level = child;
        }
        assert_eq!(depth, DEPTH);
    }

    #[test]
    fn test_deep_unfinished_report() {
        let input = "{ (* ".repeat(50_000);
        let failure = parse_comment(&input, 0).unwrap_err();
        assert_eq!((failure.pos, failure.furthest), (0, input.len()));
        assert_eq!(failure.message.lines().count(), 100_001);
        assert!(failure.message.ends_with(&format!(
            " :: Unfinished comment (CommentBi) at pos {} level 99999\n",
            input.len() - 3
        )));
    }
}
