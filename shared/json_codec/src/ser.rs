//! Serialization from Rust types to JSON.
//!
//! Every supported Rust value is first mapped onto [`NativeValue`], a closed
//! set of shapes the writer knows how to emit. Which variant a type maps to
//! decides how it is written, in this order of precedence: null, map,
//! sequence, number, boolean, text, [`JsonSerializable`] types, and finally
//! types that only offer `Display`.

use crate::value::{Integer, JsonValue};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::hash::BuildHasher;

/// A type that writes its own JSON.
///
/// The returned text is emitted verbatim and is trusted to be valid JSON.
/// Opt a type into serialization through this trait with
/// [`impl_serializable!`](crate::impl_serializable).
pub trait JsonSerializable {
    /// Returns the value as JSON text.
    fn to_json_string(&self) -> String;
}

/// Trait for types that can be serialized to JSON.
pub trait Serialize {
    /// Maps the value onto the writer's native shapes.
    fn to_native(&self) -> NativeValue<'_>;

    /// Serializes to a compact JSON string.
    fn to_json(&self) -> String {
        crate::Serializer::new().serialize(self)
    }
}

/// Numeric payload, written in its decimal form.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Signed(i128),
    Unsigned(u128),
    F32(f32),
    F64(f64),
    #[cfg(feature = "arbitrary-precision")]
    Big(num_bigint::BigInt),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Signed(n) => write!(f, "{}", n),
            Number::Unsigned(n) => write!(f, "{}", n),
            Number::F32(n) => write_float(f, n.is_finite(), n.to_string()),
            Number::F64(n) => write_float(f, n.is_finite(), n.to_string()),
            #[cfg(feature = "arbitrary-precision")]
            Number::Big(n) => write!(f, "{}", n),
        }
    }
}

/// Non-finite floats have no JSON form and become `null`; whole floats keep a
/// `.0` so they read back as floats.
fn write_float(f: &mut fmt::Formatter<'_>, finite: bool, text: String) -> fmt::Result {
    if !finite {
        f.write_str("null")
    } else if text.contains('.') {
        f.write_str(&text)
    } else {
        write!(f, "{}.0", text)
    }
}

/// Every value shape the serializer can write.
#[derive(Clone)]
pub enum NativeValue<'a> {
    Null,
    /// String-keyed members, written in iteration order
    Map(Vec<(Cow<'a, str>, NativeValue<'a>)>),
    Seq(Vec<NativeValue<'a>>),
    Number(Number),
    Bool(bool),
    /// Written between quotes, escaped only when the serializer asks for it
    Text(Cow<'a, str>),
    /// Written as whatever `to_json_string` returns
    Serializable(&'a dyn JsonSerializable),
    /// Best-effort fallback: the `Display` output, not guaranteed to be JSON
    Display(&'a dyn fmt::Display),
}

impl<'a> Serialize for NativeValue<'a> {
    fn to_native(&self) -> NativeValue<'_> {
        self.clone()
    }
}

impl From<bool> for NativeValue<'_> {
    fn from(b: bool) -> Self {
        NativeValue::Bool(b)
    }
}

impl<'a> From<&'a str> for NativeValue<'a> {
    fn from(s: &'a str) -> Self {
        NativeValue::Text(Cow::Borrowed(s))
    }
}

impl From<String> for NativeValue<'_> {
    fn from(s: String) -> Self {
        NativeValue::Text(Cow::Owned(s))
    }
}

impl<'a> From<&'a dyn JsonSerializable> for NativeValue<'a> {
    fn from(obj: &'a dyn JsonSerializable) -> Self {
        NativeValue::Serializable(obj)
    }
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {
        $(
            impl Serialize for $ty {
                fn to_native(&self) -> NativeValue<'_> {
                    NativeValue::Number(Number::Signed(*self as i128))
                }
            }

            impl From<$ty> for NativeValue<'_> {
                fn from(n: $ty) -> Self {
                    NativeValue::Number(Number::Signed(n as i128))
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Serialize for $ty {
                fn to_native(&self) -> NativeValue<'_> {
                    NativeValue::Number(Number::Unsigned(*self as u128))
                }
            }

            impl From<$ty> for NativeValue<'_> {
                fn from(n: $ty) -> Self {
                    NativeValue::Number(Number::Unsigned(n as u128))
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);

impl Serialize for f32 {
    fn to_native(&self) -> NativeValue<'_> {
        NativeValue::Number(Number::F32(*self))
    }
}

impl Serialize for f64 {
    fn to_native(&self) -> NativeValue<'_> {
        NativeValue::Number(Number::F64(*self))
    }
}

impl From<f64> for NativeValue<'_> {
    fn from(n: f64) -> Self {
        NativeValue::Number(Number::F64(n))
    }
}

#[cfg(feature = "arbitrary-precision")]
impl Serialize for num_bigint::BigInt {
    fn to_native(&self) -> NativeValue<'_> {
        NativeValue::Number(Number::Big(self.clone()))
    }
}

impl Serialize for bool {
    fn to_native(&self) -> NativeValue<'_> {
        NativeValue::Bool(*self)
    }
}

impl Serialize for () {
    fn to_native(&self) -> NativeValue<'_> {
        NativeValue::Null
    }
}

impl Serialize for str {
    fn to_native(&self) -> NativeValue<'_> {
        NativeValue::Text(Cow::Borrowed(self))
    }
}

impl Serialize for String {
    fn to_native(&self) -> NativeValue<'_> {
        NativeValue::Text(Cow::Borrowed(self.as_str()))
    }
}

impl Serialize for Cow<'_, str> {
    fn to_native(&self) -> NativeValue<'_> {
        NativeValue::Text(Cow::Borrowed(&**self))
    }
}

impl Serialize for char {
    fn to_native(&self) -> NativeValue<'_> {
        NativeValue::Text(Cow::Owned(self.to_string()))
    }
}

impl<T: Serialize + ?Sized> Serialize for &T {
    fn to_native(&self) -> NativeValue<'_> {
        (**self).to_native()
    }
}

impl<T: Serialize + ?Sized> Serialize for Box<T> {
    fn to_native(&self) -> NativeValue<'_> {
        (**self).to_native()
    }
}

impl<T: Serialize> Serialize for Option<T> {
    fn to_native(&self) -> NativeValue<'_> {
        match self {
            Some(v) => v.to_native(),
            None => NativeValue::Null,
        }
    }
}

impl<T: Serialize> Serialize for [T] {
    fn to_native(&self) -> NativeValue<'_> {
        NativeValue::Seq(self.iter().map(Serialize::to_native).collect())
    }
}

impl<T: Serialize, const N: usize> Serialize for [T; N] {
    fn to_native(&self) -> NativeValue<'_> {
        self.as_slice().to_native()
    }
}

impl<T: Serialize> Serialize for Vec<T> {
    fn to_native(&self) -> NativeValue<'_> {
        self.as_slice().to_native()
    }
}

impl<T: Serialize> Serialize for VecDeque<T> {
    fn to_native(&self) -> NativeValue<'_> {
        NativeValue::Seq(self.iter().map(Serialize::to_native).collect())
    }
}

fn map_entries<'a, K, V>(entries: impl Iterator<Item = (&'a K, &'a V)>) -> NativeValue<'a>
where
    K: AsRef<str> + 'a,
    V: Serialize + 'a,
{
    NativeValue::Map(
        entries
            .map(|(k, v)| (Cow::Borrowed(k.as_ref()), v.to_native()))
            .collect(),
    )
}

impl<K: AsRef<str>, V: Serialize, S: BuildHasher> Serialize for HashMap<K, V, S> {
    fn to_native(&self) -> NativeValue<'_> {
        map_entries(self.iter())
    }
}

impl<K: AsRef<str>, V: Serialize> Serialize for BTreeMap<K, V> {
    fn to_native(&self) -> NativeValue<'_> {
        map_entries(self.iter())
    }
}

impl<K: AsRef<str>, V: Serialize, S: BuildHasher> Serialize for IndexMap<K, V, S> {
    fn to_native(&self) -> NativeValue<'_> {
        map_entries(self.iter())
    }
}

impl Serialize for JsonValue {
    fn to_native(&self) -> NativeValue<'_> {
        match self {
            JsonValue::Null => NativeValue::Null,
            JsonValue::Boolean(b) => NativeValue::Bool(*b),
            JsonValue::Integer(i) => NativeValue::Number(integer_number(i)),
            JsonValue::Float(n) => NativeValue::Number(Number::F64(*n)),
            JsonValue::String(s) => NativeValue::Text(Cow::Borrowed(s.as_str())),
            JsonValue::Array(arr) => arr.to_native(),
            JsonValue::Object(map) => map.to_native(),
        }
    }
}

#[cfg(not(feature = "arbitrary-precision"))]
fn integer_number(i: &Integer) -> Number {
    Number::Signed(i128::from(*i))
}

#[cfg(feature = "arbitrary-precision")]
fn integer_number(i: &Integer) -> Number {
    Number::Big(i.clone())
}
