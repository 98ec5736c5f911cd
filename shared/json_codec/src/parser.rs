//! JSON parsing implementation.
//!
//! Parsing happens in two steps. A string-aware pass first drops every
//! whitespace character that sits outside a quoted span, then a recursive
//! descent parser with one character of lookahead walks the remaining
//! characters. Unquoted literals (numbers, booleans, null) have no closing
//! delimiter and run until a terminator: `,`, `}`, `]` or the end of input.

use crate::error::{JsonError, Result};
use crate::token::{Token, TokenKind};
use crate::value::{Integer, JsonValue, Map};

/// Parses a JSON string into a JsonValue using the lenient defaults.
///
/// # Errors
///
/// Returns a positioned `JsonError` if the input is not valid JSON. No partial
/// value is ever returned.
///
/// # Examples
///
/// ```
/// use json_codec::{JsonValue, deserialize};
///
/// let json = deserialize(r#"{"key": "value", "number": 42}"#).unwrap();
/// assert_eq!(json["key"].as_str(), Some("value"));
/// assert_eq!(json["number"].as_i64(), Some(42));
///
/// assert!(deserialize(r#"{"a": }"#).is_err());
/// ```
pub fn deserialize(input: &str) -> Result<JsonValue> {
    Deserializer::new(input).deserialize()
}

/// Recursive descent JSON parser over a compacted character buffer.
///
/// # Examples
///
/// ```
/// use json_codec::{Deserializer, JsonError};
///
/// let lenient = Deserializer::new(r#""\q""#).deserialize().unwrap();
/// assert_eq!(lenient.as_str(), Some("\\q"));
///
/// let strict = Deserializer::new(r#""\q""#).strict(true).deserialize();
/// assert!(matches!(strict, Err(JsonError::InvalidEscape { .. })));
/// ```
pub struct Deserializer {
    tokens: Vec<Token>,
    cursor: usize,
    input_len: usize,
    strict: bool,
    #[cfg(feature = "logging")]
    logger: Option<logging::Logger>,
}

impl Deserializer {
    /// Prepares `input` for parsing.
    pub fn new(input: &str) -> Self {
        let (tokens, input_len) = compact(input);
        Self {
            tokens,
            cursor: 0,
            input_len,
            strict: false,
            #[cfg(feature = "logging")]
            logger: None,
        }
    }

    /// Rejects unknown escape sequences and validates the `null` literal.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Attaches a logger that records parse starts and failures.
    #[cfg(feature = "logging")]
    pub fn with_logger(mut self, logger: logging::Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Parses the whole input as a single JSON value.
    pub fn deserialize(mut self) -> Result<JsonValue> {
        #[cfg(feature = "logging")]
        if let Some(ref logger) = self.logger {
            logger.debug(&format!(
                "Parsing {} characters ({} significant)",
                self.input_len,
                self.tokens.len()
            ));
        }

        let result = self.parse_root();

        #[cfg(feature = "logging")]
        if let (Some(logger), Err(e)) = (&self.logger, &result) {
            logger.warn(&format!("JSON parse failed: {}", e));
        }

        result
    }

    fn parse_root(&mut self) -> Result<JsonValue> {
        let value = self.parse_element()?;

        match self.tokens.get(self.cursor) {
            Some(token) => Err(JsonError::TrailingCharacters {
                position: token.position,
            }),
            None => Ok(value),
        }
    }

    fn parse_element(&mut self) -> Result<JsonValue> {
        let token = self.peek()?;

        match token.kind {
            TokenKind::OpenBrace => self.parse_object(),
            TokenKind::OpenBracket => self.parse_array(),
            TokenKind::Quote => self.parse_string().map(JsonValue::String),
            TokenKind::Digit => self.parse_number(),
            _ => match token.ch {
                't' | 'f' => self.parse_boolean(),
                'n' => self.parse_null(),
                '-' => self.parse_number(),
                character => Err(JsonError::MalformedJson {
                    character,
                    position: token.position,
                }),
            },
        }
    }

    fn parse_object(&mut self) -> Result<JsonValue> {
        self.expect('{')?;
        let mut map = Map::new();

        if !self.next_is('}') {
            loop {
                let key = self.parse_string()?;
                self.expect(':')?;
                let value = self.parse_element()?;
                map.insert(key, value);

                if !self.next_is(',') {
                    break;
                }
                self.advance()?;
            }
        }

        self.expect('}')?;
        Ok(JsonValue::Object(map))
    }

    fn parse_array(&mut self) -> Result<JsonValue> {
        self.expect('[')?;
        let mut array = Vec::new();

        if !self.next_is(']') {
            loop {
                array.push(self.parse_element()?);

                if !self.next_is(',') {
                    break;
                }
                self.advance()?;
            }
        }

        self.expect(']')?;
        Ok(JsonValue::Array(array))
    }

    fn parse_string(&mut self) -> Result<String> {
        let open = self.expect('"')?;
        let unterminated = JsonError::UnterminatedString {
            position: open.position,
        };

        let mut result = String::new();
        loop {
            let token = self.advance().map_err(|_| unterminated.clone())?;
            match token.ch {
                '"' => return Ok(result),
                '\\' => {
                    let next = self.advance().map_err(|_| unterminated.clone())?;
                    self.process_escape_sequence(token, next, &mut result)?;
                }
                ch => result.push(ch),
            }
        }
    }

    fn process_escape_sequence(
        &self,
        backslash: Token,
        next: Token,
        result: &mut String,
    ) -> Result<()> {
        match next.ch {
            'b' => result.push('\x08'),
            'f' => result.push('\x0C'),
            'n' => result.push('\n'),
            'r' => result.push('\r'),
            't' => result.push('\t'),
            '"' => result.push('"'),
            '\\' => result.push('\\'),
            other if self.strict => {
                return Err(JsonError::InvalidEscape {
                    sequence: format!("\\{}", other),
                    position: backslash.position,
                });
            }
            // Unknown escapes pass through as both characters
            other => {
                result.push('\\');
                result.push(other);
            }
        }
        Ok(())
    }

    fn parse_number(&mut self) -> Result<JsonValue> {
        let start = self.peek()?.position;
        let mut literal = String::new();

        if self.next_is('-') {
            literal.push(self.advance()?.ch);
        }

        while !self.at_terminator() {
            let token = self.advance()?;
            literal.push(token.ch);
            if !matches!(token.kind, TokenKind::Digit | TokenKind::Period) {
                return Err(JsonError::MalformedNumber {
                    literal,
                    position: token.position,
                });
            }
        }

        let parsed = match literal.matches('.').count() {
            0 => literal.parse::<Integer>().ok().map(JsonValue::Integer),
            1 => literal.parse::<f64>().ok().map(JsonValue::Float),
            _ => None,
        };

        parsed.ok_or(JsonError::MalformedNumber {
            literal,
            position: start,
        })
    }

    fn parse_boolean(&mut self) -> Result<JsonValue> {
        let start = self.peek()?.position;
        let literal = self.read_literal()?;

        match literal.as_str() {
            "true" => Ok(JsonValue::Boolean(true)),
            "false" => Ok(JsonValue::Boolean(false)),
            _ => Err(JsonError::MalformedLiteral {
                literal,
                position: start,
            }),
        }
    }

    /// Lenient unless strict: anything from `n` up to a terminator is null.
    fn parse_null(&mut self) -> Result<JsonValue> {
        let start = self.peek()?.position;
        let literal = self.read_literal()?;

        if self.strict && literal != "null" {
            return Err(JsonError::MalformedLiteral {
                literal,
                position: start,
            });
        }
        Ok(JsonValue::Null)
    }

    fn read_literal(&mut self) -> Result<String> {
        let mut literal = String::new();
        while !self.at_terminator() {
            literal.push(self.advance()?.ch);
        }
        Ok(literal)
    }

    fn peek(&self) -> Result<Token> {
        self.tokens
            .get(self.cursor)
            .copied()
            .ok_or(JsonError::UnexpectedEndOfInput {
                position: self.input_len,
            })
    }

    fn advance(&mut self) -> Result<Token> {
        let token = self.peek()?;
        self.cursor += 1;
        Ok(token)
    }

    fn expect(&mut self, expected: char) -> Result<Token> {
        let token = self.advance()?;
        if token.ch == expected {
            Ok(token)
        } else {
            Err(JsonError::UnexpectedCharacter {
                expected: Some(expected),
                actual: token.ch,
                position: token.position,
            })
        }
    }

    fn next_is(&self, ch: char) -> bool {
        self.tokens.get(self.cursor).is_some_and(|t| t.ch == ch)
    }

    fn at_terminator(&self) -> bool {
        self.tokens
            .get(self.cursor)
            .is_none_or(|token| token.is_terminator())
    }
}

/// Drops whitespace outside quoted spans, keeping each character's offset.
///
/// A backslash inside a string always claims the next character, so an
/// escaped quote never ends the span. Returns the tokens and the input length
/// in characters.
fn compact(input: &str) -> (Vec<Token>, usize) {
    let mut tokens = Vec::with_capacity(input.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut length = 0;

    for (position, ch) in input.chars().enumerate() {
        length = position + 1;

        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
        } else if ch == '"' {
            in_string = true;
        } else if ch.is_whitespace() {
            continue;
        }

        tokens.push(Token::new(ch, position));
    }

    (tokens, length)
}
