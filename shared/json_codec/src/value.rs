//! JSON value representation.

use indexmap::IndexMap;
use std::fmt;
use std::ops::Index;

/// Integer payload of [`JsonValue::Integer`].
///
/// `i64` by default. With the `arbitrary-precision` feature every integer
/// literal is kept as a `num_bigint::BigInt`, on both the read and the write
/// side.
#[cfg(not(feature = "arbitrary-precision"))]
pub type Integer = i64;

/// Integer payload of [`JsonValue::Integer`].
#[cfg(feature = "arbitrary-precision")]
pub type Integer = num_bigint::BigInt;

/// Ordered map backing JSON objects.
pub type Map = IndexMap<String, JsonValue>;

static NULL: JsonValue = JsonValue::Null;

/// A parsed JSON value.
///
/// Objects keep their keys in input order. When a key repeats, the later value
/// replaces the earlier one in the earlier key's slot.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// JSON null: `null`
    Null,
    /// JSON boolean: `true` or `false`
    Boolean(bool),
    /// Number literal without a decimal point: `42`
    Integer(Integer),
    /// Number literal with one decimal point: `3.14`
    Float(f64),
    /// JSON string with escapes resolved: `"hello"`
    String(String),
    /// JSON array: `["item1", "item2"]`
    Array(Vec<JsonValue>),
    /// JSON object: `{"key": "value"}`
    Object(Map),
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serialize(self))
    }
}

impl JsonValue {
    /// Short name of the variant, e.g. `"integer"` or `"object"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Boolean(_) => "boolean",
            JsonValue::Integer(_) => "integer",
            JsonValue::Float(_) => "float",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }

    /// Returns true if this is JSON null.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns the boolean value if this is a JSON boolean, otherwise None.
    pub fn as_bool(&self) -> Option<bool> {
        if let JsonValue::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// Returns the integer payload if this is an integer literal.
    pub fn as_integer(&self) -> Option<&Integer> {
        if let JsonValue::Integer(i) = self {
            Some(i)
        } else {
            None
        }
    }

    /// Returns the integer as `i64` if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_integer().and_then(integer_to_i64)
    }

    /// Returns the number as `f64`, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Float(n) => Some(*n),
            JsonValue::Integer(i) => integer_to_f64(i),
            _ => None,
        }
    }

    /// Returns the string value if this is a JSON string, otherwise None.
    pub fn as_str(&self) -> Option<&str> {
        if let JsonValue::String(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Returns the elements if this is a JSON array, otherwise None.
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        if let JsonValue::Array(arr) = self {
            Some(arr)
        } else {
            None
        }
    }

    /// Returns the members if this is a JSON object, otherwise None.
    pub fn as_object(&self) -> Option<&Map> {
        if let JsonValue::Object(map) = self {
            Some(map)
        } else {
            None
        }
    }

    /// Looks up an object member.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object()?.get(key)
    }

    /// Looks up an array element.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        self.as_array()?.get(index)
    }

    /// Gets a value from nested JSON objects by key path (dot notation).
    ///
    /// # Examples
    ///
    /// ```
    /// use json_codec::deserialize;
    ///
    /// let json = deserialize(r#"{"user":{"name":"Alice","profile":{"age":30}}}"#).unwrap();
    ///
    /// assert_eq!(json.get_path("user.name").and_then(|v| v.as_str()), Some("Alice"));
    /// assert_eq!(json.get_path("user.profile.age").and_then(|v| v.as_i64()), Some(30));
    /// ```
    pub fn get_path(&self, path: &str) -> Option<&JsonValue> {
        let mut current = self;
        for key in path.split('.') {
            current = current.get(key)?;
        }
        Some(current)
    }
}

/// Indexing an object by key; missing keys and non-objects yield `Null`.
impl Index<&str> for JsonValue {
    type Output = JsonValue;

    fn index(&self, key: &str) -> &JsonValue {
        self.get(key).unwrap_or(&NULL)
    }
}

/// Indexing an array by position; out of range and non-arrays yield `Null`.
impl Index<usize> for JsonValue {
    type Output = JsonValue;

    fn index(&self, index: usize) -> &JsonValue {
        self.get_index(index).unwrap_or(&NULL)
    }
}

#[cfg(not(feature = "arbitrary-precision"))]
fn integer_to_i64(i: &Integer) -> Option<i64> {
    Some(*i)
}

#[cfg(feature = "arbitrary-precision")]
fn integer_to_i64(i: &Integer) -> Option<i64> {
    i64::try_from(i.clone()).ok()
}

#[cfg(not(feature = "arbitrary-precision"))]
fn integer_to_f64(i: &Integer) -> Option<f64> {
    Some(*i as f64)
}

#[cfg(feature = "arbitrary-precision")]
fn integer_to_f64(i: &Integer) -> Option<f64> {
    i.to_string().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> JsonValue {
        JsonValue::Integer(Integer::from(n))
    }

    fn sample() -> JsonValue {
        let mut profile = Map::new();
        profile.insert("age".to_string(), int(30));

        let mut user = Map::new();
        user.insert("name".to_string(), JsonValue::String("Alice".to_string()));
        user.insert("profile".to_string(), JsonValue::Object(profile));

        let mut root = Map::new();
        root.insert("user".to_string(), JsonValue::Object(user));
        root.insert(
            "tags".to_string(),
            JsonValue::Array(vec![JsonValue::String("a".to_string()), JsonValue::Null]),
        );
        JsonValue::Object(root)
    }

    #[test]
    fn test_as_str() {
        let value = JsonValue::String("hello".to_string());
        assert_eq!(value.as_str(), Some("hello"));
        assert_eq!(int(42).as_str(), None);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(int(42).as_i64(), Some(42));
        assert_eq!(int(42).as_f64(), Some(42.0));
        assert_eq!(JsonValue::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(JsonValue::Float(2.5).as_i64(), None);
        assert_eq!(int(7).as_integer(), Some(&Integer::from(7)));
    }

    #[test]
    fn test_as_bool_and_null() {
        assert_eq!(JsonValue::Boolean(true).as_bool(), Some(true));
        assert_eq!(JsonValue::Null.as_bool(), None);
        assert!(JsonValue::Null.is_null());
        assert!(!JsonValue::Boolean(false).is_null());
    }

    #[test]
    fn test_containers() {
        let json = sample();
        assert!(json.as_object().is_some());
        assert!(json.as_array().is_none());
        assert_eq!(json["tags"].as_array().map(|a| a.len()), Some(2));
        assert_eq!(json["tags"][0].as_str(), Some("a"));
        assert!(json["tags"][1].is_null());
        assert!(json["tags"][9].is_null());
        assert!(json["missing"]["deeper"].is_null());
    }

    #[test]
    fn test_get_path() {
        let json = sample();
        assert_eq!(
            json.get_path("user.profile.age").and_then(|v| v.as_i64()),
            Some(30)
        );
        assert_eq!(json.get_path("user.name").and_then(|v| v.as_str()), Some("Alice"));
        assert!(json.get_path("user.email").is_none());
        assert!(json.get_path("tags.0").is_none());
    }

    #[test]
    fn test_type_name() {
        assert_eq!(JsonValue::Null.type_name(), "null");
        assert_eq!(int(1).type_name(), "integer");
        assert_eq!(JsonValue::Float(1.5).type_name(), "float");
        assert_eq!(sample().type_name(), "object");
    }

    #[test]
    fn test_display_is_compact_json() {
        assert_eq!(sample().to_string(), r#"{"user":{"name":"Alice","profile":{"age":30}},"tags":["a",null]}"#);
    }
}
