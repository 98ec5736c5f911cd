//! Typed extraction from parsed JSON values.

use crate::error::{JsonError, Result};
use crate::value::{Integer, JsonValue};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Trait for types that can be built from a [`JsonValue`].
pub trait FromJson: Sized {
    /// Converts a parsed value.
    fn from_json(value: &JsonValue) -> Result<Self>;
}

/// Parses `s` and converts the result to `T`.
///
/// # Examples
///
/// ```
/// use json_codec::from_str;
///
/// let scores: Vec<u32> = from_str("[85, 92, 78]").unwrap();
/// assert_eq!(scores, vec![85, 92, 78]);
/// ```
pub fn from_str<T: FromJson>(s: &str) -> Result<T> {
    T::from_json(&crate::deserialize(s)?)
}

fn mismatch(expected: &str, value: &JsonValue) -> JsonError {
    JsonError::TypeMismatch(format!("Expected {}, found {}", expected, value.type_name()))
}

impl FromJson for JsonValue {
    fn from_json(value: &JsonValue) -> Result<Self> {
        Ok(value.clone())
    }
}

impl FromJson for String {
    fn from_json(value: &JsonValue) -> Result<Self> {
        value
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| mismatch("string", value))
    }
}

impl FromJson for bool {
    fn from_json(value: &JsonValue) -> Result<Self> {
        value.as_bool().ok_or_else(|| mismatch("boolean", value))
    }
}

impl FromJson for f64 {
    fn from_json(value: &JsonValue) -> Result<Self> {
        value.as_f64().ok_or_else(|| mismatch("number", value))
    }
}

impl FromJson for f32 {
    fn from_json(value: &JsonValue) -> Result<Self> {
        f64::from_json(value).map(|n| n as f32)
    }
}

#[cfg(not(feature = "arbitrary-precision"))]
fn narrow<T: TryFrom<Integer>>(i: &Integer) -> Option<T> {
    T::try_from(*i).ok()
}

#[cfg(feature = "arbitrary-precision")]
fn narrow<T: TryFrom<Integer>>(i: &Integer) -> Option<T> {
    T::try_from(i.clone()).ok()
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {
        $(
            impl FromJson for $ty {
                fn from_json(value: &JsonValue) -> Result<Self> {
                    let i = value
                        .as_integer()
                        .ok_or_else(|| mismatch("integer", value))?;
                    narrow(i).ok_or_else(|| {
                        JsonError::TypeMismatch(format!(
                            "{} does not fit in {}",
                            i,
                            stringify!($ty)
                        ))
                    })
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(value: &JsonValue) -> Result<Self> {
        value
            .as_array()
            .ok_or_else(|| mismatch("array", value))?
            .iter()
            .map(T::from_json)
            .collect()
    }
}

impl<T: FromJson> FromJson for Option<T> {
    fn from_json(value: &JsonValue) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_json(value).map(Some)
        }
    }
}

impl<V: FromJson> FromJson for HashMap<String, V> {
    fn from_json(value: &JsonValue) -> Result<Self> {
        value
            .as_object()
            .ok_or_else(|| mismatch("object", value))?
            .iter()
            .map(|(k, v)| Ok((k.clone(), V::from_json(v)?)))
            .collect()
    }
}

impl<V: FromJson> FromJson for IndexMap<String, V> {
    fn from_json(value: &JsonValue) -> Result<Self> {
        value
            .as_object()
            .ok_or_else(|| mismatch("object", value))?
            .iter()
            .map(|(k, v)| Ok((k.clone(), V::from_json(v)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> JsonValue {
        JsonValue::Integer(Integer::from(n))
    }

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(String::from_json(&JsonValue::String("hello".to_string())), Ok("hello".to_string()));
        assert_eq!(bool::from_json(&JsonValue::Boolean(true)), Ok(true));
        assert_eq!(i32::from_json(&int(42)), Ok(42));
        assert_eq!(u8::from_json(&int(255)), Ok(255));
        assert_eq!(f64::from_json(&int(2)), Ok(2.0));
        assert_eq!(f64::from_json(&JsonValue::Float(-42.5)), Ok(-42.5));
    }

    #[test]
    fn test_integer_narrowing() {
        assert!(matches!(u8::from_json(&int(256)), Err(JsonError::TypeMismatch(_))));
        assert!(matches!(u32::from_json(&int(-1)), Err(JsonError::TypeMismatch(_))));
        assert!(matches!(
            i32::from_json(&JsonValue::Float(1.5)),
            Err(JsonError::TypeMismatch(_))
        ));
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = String::from_json(&int(1)).unwrap_err();
        assert_eq!(err.to_string(), "Type mismatch: Expected string, found integer");
    }

    #[test]
    fn test_collections() {
        let value = JsonValue::Array(vec![int(1), int(2), int(3)]);
        assert_eq!(Vec::<i32>::from_json(&value), Ok(vec![1, 2, 3]));

        assert_eq!(Option::<String>::from_json(&JsonValue::Null), Ok(None));
        assert_eq!(Option::<i64>::from_json(&int(9)), Ok(Some(9)));

        let parsed: IndexMap<String, Vec<i32>> = from_str(r#"{"b": [1], "a": []}"#).unwrap();
        let keys: Vec<&String> = parsed.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);

        let parsed: HashMap<String, bool> = from_str(r#"{"x": true}"#).unwrap();
        assert_eq!(parsed.get("x"), Some(&true));
    }

    #[test]
    fn test_from_str_errors() {
        assert!(matches!(
            from_str::<String>(r#"{ "incomplete": "#),
            Err(JsonError::UnexpectedEndOfInput { .. })
        ));
        assert!(matches!(
            from_str::<Vec<i32>>(r#"["a"]"#),
            Err(JsonError::TypeMismatch(_))
        ));
    }
}
