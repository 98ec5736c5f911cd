//! JSON text writer.

use crate::ser::{NativeValue, Serialize};

/// Serializes a value to compact JSON using the default writer.
///
/// Strings are written as-is between quotes; see
/// [`Serializer::escape_strings`] for escaping output.
///
/// # Examples
///
/// ```
/// use json_codec::serialize;
///
/// assert_eq!(serialize(&-49), "-49");
/// assert_eq!(serialize(&6.66666666), "6.66666666");
/// assert_eq!(serialize(&vec!["this", "is", "a", "test"]), r#"["this","is","a","test"]"#);
/// ```
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> String {
    Serializer::new().serialize(value)
}

/// Compact JSON writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Serializer {
    escape_strings: bool,
}

impl Serializer {
    /// Creates a writer that does not escape string contents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Escapes quotes, backslashes and control characters in strings and keys.
    pub fn escape_strings(mut self, escape: bool) -> Self {
        self.escape_strings = escape;
        self
    }

    /// Serializes `value` to a JSON string.
    pub fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> String {
        let mut out = String::new();
        self.write_value(&value.to_native(), &mut out);
        out
    }

    fn write_value(&self, value: &NativeValue<'_>, out: &mut String) {
        match value {
            NativeValue::Null => out.push_str("null"),
            NativeValue::Map(entries) => {
                out.push('{');
                for (i, (key, item)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    self.write_string(key, out);
                    out.push(':');
                    self.write_value(item, out);
                }
                out.push('}');
            }
            NativeValue::Seq(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    self.write_value(item, out);
                }
                out.push(']');
            }
            NativeValue::Number(n) => out.push_str(&n.to_string()),
            NativeValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            NativeValue::Text(s) => self.write_string(s, out),
            NativeValue::Serializable(obj) => out.push_str(&obj.to_json_string()),
            NativeValue::Display(obj) => out.push_str(&obj.to_string()),
        }
    }

    fn write_string(&self, s: &str, out: &mut String) {
        out.push('"');
        if self.escape_strings {
            out.push_str(&escape_json_string(s));
        } else {
            out.push_str(s);
        }
        out.push('"');
    }
}

/// Escapes special characters in a string for JSON serialization.
pub fn escape_json_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\x08' => result.push_str("\\b"),
            '\x0C' => result.push_str("\\f"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            ch if ch.is_control() => {
                result.push_str(&format!("\\u{:04X}", ch as u32));
            }
            ch => result.push(ch),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ser::JsonSerializable;
    use indexmap::IndexMap;
    use std::collections::HashMap;
    use std::fmt;

    struct Point {
        x: f64,
        y: f64,
    }

    impl JsonSerializable for Point {
        fn to_json_string(&self) -> String {
            format!("\"({}, {})\"", self.x, self.y)
        }
    }

    impl Serialize for Point {
        fn to_native(&self) -> NativeValue<'_> {
            NativeValue::Serializable(self)
        }
    }

    struct Celsius(i32);

    impl fmt::Display for Celsius {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}C", self.0)
        }
    }

    impl Serialize for Celsius {
        fn to_native(&self) -> NativeValue<'_> {
            NativeValue::Display(self)
        }
    }

    #[test]
    fn test_scalars() {
        assert_eq!(serialize(&()), "null");
        assert_eq!(serialize(&None::<i32>), "null");
        assert_eq!(serialize("string"), r#""string""#);
        assert_eq!(serialize(&-49), "-49");
        assert_eq!(serialize(&6.66666666), "6.66666666");
        assert_eq!(serialize(&true), "true");
        assert_eq!(serialize(&false), "false");
        assert_eq!(serialize(&u64::MAX), "18446744073709551615");
        assert_eq!(serialize(&i128::MIN), i128::MIN.to_string());
    }

    #[test]
    fn test_lists() {
        assert_eq!(serialize(&vec![1, 2, 3, 4, 5]), "[1,2,3,4,5]");
        assert_eq!(serialize(&[true, false, true, true]), "[true,false,true,true]");
        assert_eq!(
            serialize(&vec!["this", "is", "a", "test"]),
            r#"["this","is","a","test"]"#
        );
        assert_eq!(serialize(&Vec::<i32>::new()), "[]");
        assert_eq!(serialize(&vec![vec![1], vec![]]), "[[1],[]]");
    }

    #[test]
    fn test_mixed_list() {
        let mixed: Vec<NativeValue> = vec![
            true.into(),
            2.645.into(),
            "three".into(),
            false.into(),
            5i64.into(),
        ];
        assert_eq!(serialize(&mixed), r#"[true,2.645,"three",false,5]"#);
    }

    #[test]
    fn test_maps_keep_iteration_order() {
        let mut map: IndexMap<&str, NativeValue> = IndexMap::new();
        map.insert("test", true.into());
        map.insert("name", "James".into());
        map.insert("decimal", 3.33333.into());
        assert_eq!(serialize(&map), r#"{"test":true,"name":"James","decimal":3.33333}"#);

        let empty: HashMap<String, i32> = HashMap::new();
        assert_eq!(serialize(&empty), "{}");
    }

    #[test]
    fn test_nested_maps() {
        let mut inner = IndexMap::new();
        inner.insert("list".to_string(), vec![1, 2, 3, 4, 5]);
        let mut outer = IndexMap::new();
        outer.insert("list".to_string(), vec![inner]);
        assert_eq!(serialize(&outer), r#"{"list":[{"list":[1,2,3,4,5]}]}"#);
    }

    #[test]
    fn test_serializable_passes_through() {
        assert_eq!(serialize(&Point { x: 1.0, y: 1.0 }), r#""(1, 1)""#);
        assert_eq!(
            serialize(&vec![Point { x: 0.5, y: 2.0 }]),
            r#"["(0.5, 2)"]"#
        );
    }

    #[test]
    fn test_display_fallback() {
        assert_eq!(serialize(&Celsius(21)), "21C");
    }

    #[test]
    fn test_strings_not_escaped_by_default() {
        assert_eq!(serialize("a\"b"), "\"a\"b\"");
        assert_eq!(serialize("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn test_escaping_writer() {
        let writer = Serializer::new().escape_strings(true);
        assert_eq!(writer.serialize("a\"b"), r#""a\"b""#);

        let mut map = HashMap::new();
        map.insert("k\"".to_string(), "v\n".to_string());
        assert_eq!(writer.serialize(&map), r#"{"k\"":"v\n"}"#);
    }

    #[test]
    fn test_escape_json_string() {
        assert_eq!(escape_json_string("hello"), "hello");
        assert_eq!(escape_json_string("hello\"world"), "hello\\\"world");
        assert_eq!(escape_json_string("hello\\world"), "hello\\\\world");
        assert_eq!(escape_json_string("hello\tworld"), "hello\\tworld");
        assert_eq!(escape_json_string("hello\x08world"), "hello\\bworld");
        assert_eq!(escape_json_string("\x01"), "\\u0001");
    }

    #[test]
    fn test_whole_floats_keep_decimal_point() {
        assert_eq!(serialize(&5.0), "5.0");
        assert_eq!(serialize(&2.5f32), "2.5");
        assert_eq!(serialize(&f64::NAN), "null");
    }
}
