//! Error types for JSON encoding and decoding.

/// Result type for JSON operations.
pub type Result<T> = std::result::Result<T, JsonError>;

/// Error type for JSON decoding failures.
///
/// Every parse error carries the character offset into the original input
/// where the problem was detected.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonError {
    /// Input ended while a value was still expected
    UnexpectedEndOfInput { position: usize },
    /// A structural character did not match what the grammar required
    UnexpectedCharacter {
        expected: Option<char>,
        actual: char,
        position: usize,
    },
    /// A value cannot start with this character
    MalformedJson { character: char, position: usize },
    /// Numeric literal with a stray character, several periods, or out of range
    MalformedNumber { literal: String, position: usize },
    /// Unquoted literal that is not `true`, `false` or `null`
    MalformedLiteral { literal: String, position: usize },
    /// String without its closing quote, positioned at the opening quote it started from
    UnterminatedString { position: usize },
    /// Unrecognized escape sequence (strict mode only)
    InvalidEscape { sequence: String, position: usize },
    /// Input continues after the root value
    TrailingCharacters { position: usize },
    /// Value has the wrong shape for the requested Rust type
    TypeMismatch(String),
}

impl JsonError {
    /// Returns the input position of a parse error, if the error has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            JsonError::UnexpectedEndOfInput { position }
            | JsonError::UnexpectedCharacter { position, .. }
            | JsonError::MalformedJson { position, .. }
            | JsonError::MalformedNumber { position, .. }
            | JsonError::MalformedLiteral { position, .. }
            | JsonError::UnterminatedString { position }
            | JsonError::InvalidEscape { position, .. }
            | JsonError::TrailingCharacters { position } => Some(*position),
            JsonError::TypeMismatch(_) => None,
        }
    }
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonError::UnexpectedEndOfInput { position } => {
                write!(f, "Unexpected end of input at position {}", position)
            }
            JsonError::UnexpectedCharacter {
                expected: Some(expected),
                actual,
                position,
            } => write!(
                f,
                "Expected '{}', got '{}' at position {}",
                expected, actual, position
            ),
            JsonError::UnexpectedCharacter {
                expected: None,
                actual,
                position,
            } => write!(f, "Unexpected character '{}' at position {}", actual, position),
            JsonError::MalformedJson {
                character,
                position,
            } => write!(
                f,
                "Unexpected character '{}' at position {}, expected a JSON value",
                character, position
            ),
            JsonError::MalformedNumber { literal, position } => {
                write!(f, "Malformed number '{}' at position {}", literal, position)
            }
            JsonError::MalformedLiteral { literal, position } => {
                write!(f, "Malformed literal '{}' at position {}", literal, position)
            }
            JsonError::UnterminatedString { position } => {
                write!(f, "Unterminated string starting at position {}", position)
            }
            JsonError::InvalidEscape { sequence, position } => {
                write!(f, "Invalid escape sequence '{}' at position {}", sequence, position)
            }
            JsonError::TrailingCharacters { position } => {
                write!(f, "Trailing characters after JSON value at position {}", position)
            }
            JsonError::TypeMismatch(s) => write!(f, "Type mismatch: {}", s),
        }
    }
}

impl std::error::Error for JsonError {}
