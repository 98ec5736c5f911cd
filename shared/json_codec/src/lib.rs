//! Minimal JSON codec.
//!
//! Reads JSON text into a [`JsonValue`] tree with a recursive descent parser,
//! and writes Rust values back out as compact JSON.
//!
//! # Example
//!
//! ```
//! use json_codec::{JsonValue, deserialize, serialize};
//!
//! let value = deserialize(r#"{"field": 5, "otherField": "test"}"#).unwrap();
//! assert_eq!(value["field"].as_i64(), Some(5));
//! assert_eq!(value["otherField"].as_str(), Some("test"));
//!
//! assert_eq!(serialize(&value), r#"{"field":5,"otherField":"test"}"#);
//! ```
//!
//! # Leniency
//!
//! By default the codec mirrors a permissive reader and writer: unknown
//! escape sequences such as `\q` are kept as written, anything starting with
//! `n` up to a terminator reads as null, and strings are written without
//! escaping. [`Deserializer::strict`] and [`Serializer::escape_strings`] turn
//! on the standard behaviour.
//!
//! # Features
//!
//! - `arbitrary-precision`: integers are `num_bigint::BigInt` instead of `i64`.
//! - `logging`: [`Deserializer::with_logger`] accepts a `logging::Logger`.

pub mod de;
pub mod error;
pub mod macros;
mod parser;
pub mod ser;
mod serializer;
mod token;
mod value;

pub use de::{FromJson, from_str};
pub use error::{JsonError, Result};
pub use parser::{Deserializer, deserialize};
pub use ser::{JsonSerializable, NativeValue, Number, Serialize};
pub use serializer::{Serializer, escape_json_string, serialize};
pub use token::{Token, TokenKind, classify};
pub use value::{Integer, JsonValue, Map};
