//! Macros for opting types into JSON serialization.

/// Implements `Serialize` and `FromJson` for a struct.
///
/// The struct serializes as an object whose members follow the field order
/// given to the macro. Deserialization starts from `Default` and overwrites
/// the fields present in the input.
///
/// # Examples
///
/// ```
/// use json_codec::{from_str, impl_json, serialize};
///
/// #[derive(Debug, Clone)]
/// struct Config {
///     host: String,
///     port: u32,
/// }
///
/// impl Default for Config {
///     fn default() -> Self {
///         Self {
///             host: "127.0.0.1".to_string(),
///             port: 8080,
///         }
///     }
/// }
///
/// impl_json! {
///     Config {
///         host: String,
///         port: u32,
///     }
/// }
///
/// // Missing fields keep their defaults
/// let config: Config = from_str(r#"{"port": 3000}"#).unwrap();
/// assert_eq!(config.host, "127.0.0.1");
/// assert_eq!(config.port, 3000);
/// assert_eq!(serialize(&config), r#"{"host":"127.0.0.1","port":3000}"#);
/// ```
#[macro_export]
macro_rules! impl_json {
    ($struct_name:ident { $($field:ident: $field_ty:ty),* $(,)? }) => {
        impl $crate::Serialize for $struct_name {
            fn to_native(&self) -> $crate::NativeValue<'_> {
                $crate::NativeValue::Map(vec![
                    $(
                        (
                            ::std::borrow::Cow::Borrowed(stringify!($field)),
                            $crate::Serialize::to_native(&self.$field),
                        ),
                    )*
                ])
            }
        }

        impl $crate::FromJson for $struct_name {
            fn from_json(value: &$crate::JsonValue) -> $crate::Result<Self> {
                let obj = value.as_object().ok_or_else(|| {
                    $crate::JsonError::TypeMismatch(format!(
                        "Expected object for {}, found {}",
                        stringify!($struct_name),
                        value.type_name()
                    ))
                })?;

                let mut result = Self::default();
                $(
                    if let Some(field_value) = obj.get(stringify!($field)) {
                        result.$field = <$field_ty as $crate::FromJson>::from_json(field_value)?;
                    }
                )*

                Ok(result)
            }
        }
    };
}

/// Serializes the listed types through their `JsonSerializable` impl.
///
/// # Examples
///
/// ```
/// use json_codec::{JsonSerializable, impl_serializable, serialize};
///
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// impl JsonSerializable for Point {
///     fn to_json_string(&self) -> String {
///         format!("\"({}, {})\"", self.x, self.y)
///     }
/// }
///
/// impl_serializable!(Point);
///
/// assert_eq!(serialize(&Point { x: 1.0, y: 1.0 }), "\"(1, 1)\"");
/// ```
#[macro_export]
macro_rules! impl_serializable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Serialize for $ty {
                fn to_native(&self) -> $crate::NativeValue<'_> {
                    $crate::NativeValue::Serializable(self)
                }
            }
        )+
    };
}

/// Serializes the listed types as their `Display` output.
///
/// This is the last-resort path; the output is only valid JSON if the
/// `Display` impl makes it so.
#[macro_export]
macro_rules! impl_json_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Serialize for $ty {
                fn to_native(&self) -> $crate::NativeValue<'_> {
                    $crate::NativeValue::Display(self)
                }
            }
        )+
    };
}
