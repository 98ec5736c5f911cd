//! Character classification for the JSON tokenizer.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Category of a single input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `"`
    Quote,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// Any Unicode decimal digit (category Nd)
    Digit,
    /// `.`
    Period,
    /// Everything else
    Other,
}

/// Maps a character to its category.
///
/// Digits are checked before punctuation, and every character lands in
/// exactly one category.
///
/// # Examples
///
/// ```
/// use json_codec::{TokenKind, classify};
///
/// assert_eq!(classify('7'), TokenKind::Digit);
/// assert_eq!(classify('{'), TokenKind::OpenBrace);
/// assert_eq!(classify('t'), TokenKind::Other);
/// ```
pub fn classify(ch: char) -> TokenKind {
    if get_general_category(ch) == GeneralCategory::DecimalNumber {
        return TokenKind::Digit;
    }

    match ch {
        '{' => TokenKind::OpenBrace,
        '}' => TokenKind::CloseBrace,
        '[' => TokenKind::OpenBracket,
        ']' => TokenKind::CloseBracket,
        '"' => TokenKind::Quote,
        ':' => TokenKind::Colon,
        ',' => TokenKind::Comma,
        '.' => TokenKind::Period,
        _ => TokenKind::Other,
    }
}

/// A classified character together with its offset in the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub ch: char,
    pub position: usize,
}

impl Token {
    /// Classifies `ch` found at `position`.
    pub fn new(ch: char, position: usize) -> Self {
        Self {
            kind: classify(ch),
            ch,
            position,
        }
    }

    /// True for `,`, `}` and `]`, the characters that close an unquoted literal.
    pub fn is_terminator(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Comma | TokenKind::CloseBrace | TokenKind::CloseBracket
        )
    }
}
