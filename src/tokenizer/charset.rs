//! Character classes and delimiter tables shared by the recognizers.
//!
//! All of these are ASCII-only: a Pascal letter is `[a-zA-Z]`, and the
//! non-ASCII range never starts or ends a token.

pub const UNDERSCORE: char = '_';
pub const RESERVED_OVERRIDE: char = '&';
pub const HEX_PREFIX: char = '$';
pub const OCT_PREFIX: char = '&';
pub const BIN_PREFIX: char = '%';
pub const CHAR_CODE_PREFIX: char = '#';
pub const REAL_DELIMITER: char = '.';
pub const QUOTE: char = '\'';

pub const LINE_COMMENT: u8 = b'/';
pub const BRACE_OPEN: u8 = b'{';
pub const BRACE_CLOSE: u8 = b'}';
pub const BI_OPEN: [u8; 2] = [b'(', b'*'];
pub const BI_CLOSE: [u8; 2] = [b'*', b')'];
pub const NEWLINE: u8 = b'\n';

/// Single-character operators and punctuation.
pub const SYMBOLS: &str = "+-*/=<>[].,():;^@";

/// Two-character operators, always preferred over two single symbols.
pub const SYMBOL_PAIRS: [&str; 18] = [
    "<<", ">>", "**", "<>", "><", "<=", ">=", ":=", "+=", "-=", "*=", "/=", "(*", "*)", "(.", ".)",
    "//", "..",
];

pub const WHITESPACE: &str = " \t\n\r";

pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_ident_start(c: char) -> bool {
    is_letter(c) || c == UNDERSCORE
}

pub fn is_ident_continue(c: char) -> bool {
    is_letter(c) || is_digit(c) || c == UNDERSCORE
}

pub fn is_bin_digit(c: char) -> bool {
    c == '0' || c == '1'
}

pub fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

pub fn is_symbol_pair(pair: &str) -> bool {
    SYMBOL_PAIRS.contains(&pair)
}

/// Characters a quoted string segment may not contain raw.
pub fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

pub fn is_whitespace(c: char) -> bool {
    WHITESPACE.contains(c)
}
