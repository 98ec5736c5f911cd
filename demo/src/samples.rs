//! Built-in documents and native values shown when no file is given.

use json_codec::{JsonSerializable, NativeValue, Serializer, impl_serializable};
use std::borrow::Cow;

/// Labelled documents parsed by the demo.
pub const DOCUMENTS: &[(&str, &str)] = &[
    ("str", r#""test""#),
    ("number", "5.5"),
    ("boolean", "true"),
    ("array", r#"[true, false, 1, 1.5, "hi"]"#),
    (
        "dict",
        r#"
    {
        "test": true,

        "number": 3258.69,
        "string": "this is a test",
        "array": ["yes", 55, 69.6969696969],
        "object": {
            "key": false,
            "integral": 580394,
            "float": 25923.333333
        },
        "arrayOfObjects": [
            { "key": true, "name": "evan" },
            { "key": true, "name": "not evan" }
        ]
    }"#,
    ),
];

/// A type that writes its own JSON.
pub struct Employee {
    pub name: String,
    pub age: u32,
    pub weekly_pay: u32,
}

impl JsonSerializable for Employee {
    fn to_json_string(&self) -> String {
        format!(
            r#"{{"name":"{}","age":{},"weeklyPay":{}}}"#,
            self.name, self.age, self.weekly_pay
        )
    }
}

/// Serializes itself as a quoted coordinate pair.
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl JsonSerializable for Point {
    fn to_json_string(&self) -> String {
        format!("\"({}, {})\"", self.x, self.y)
    }
}

impl_serializable!(Employee, Point);

fn entry<'a>(key: &'a str, value: NativeValue<'a>) -> (Cow<'a, str>, NativeValue<'a>) {
    (Cow::Borrowed(key), value)
}

/// Serializes a fixed set of native values, returning `(label, json)` pairs.
pub fn serialize_natives(serializer: &Serializer) -> Vec<(&'static str, String)> {
    let employee = Employee {
        name: "James".to_string(),
        age: 13,
        weekly_pay: 1150,
    };
    let points = [Point { x: 0.0, y: 1.5 }, Point { x: -2.0, y: 3.0 }];
    let four = [1, 2, 3, 4];

    let records = vec![
        NativeValue::Map(vec![
            entry("one", 1.into()),
            entry("two", 2.into()),
            entry("three", 3.into()),
            entry("four", NativeValue::Seq(four.iter().map(|&n| n.into()).collect())),
        ]),
        NativeValue::Map(vec![
            entry("test", true.into()),
            entry("name", "James".into()),
            entry("decimal", 3.33333.into()),
            entry("quote", "say \"hi\"".into()),
        ]),
    ];

    vec![
        ("string", serializer.serialize("string")),
        ("integer", serializer.serialize(&-49)),
        ("float", serializer.serialize(&6.66666666)),
        ("whole float", serializer.serialize(&2.0)),
        ("nothing", serializer.serialize(&None::<i32>)),
        ("employee", serializer.serialize(&employee)),
        ("points", serializer.serialize(&points[..])),
        ("records", serializer.serialize(&records)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_codec::deserialize;

    #[test]
    fn test_documents_all_parse() {
        for (label, text) in DOCUMENTS {
            assert!(deserialize(text).is_ok(), "sample '{}' failed", label);
        }
    }

    #[test]
    fn test_serialize_natives_default_writer() {
        let out = serialize_natives(&Serializer::new());
        let get = |label: &str| {
            out.iter()
                .find(|(l, _)| *l == label)
                .map(|(_, json)| json.as_str())
                .unwrap()
        };

        assert_eq!(get("string"), r#""string""#);
        assert_eq!(get("integer"), "-49");
        assert_eq!(get("float"), "6.66666666");
        assert_eq!(get("whole float"), "2.0");
        assert_eq!(get("nothing"), "null");
        assert_eq!(get("employee"), r#"{"name":"James","age":13,"weeklyPay":1150}"#);
        assert_eq!(get("points"), r#"["(0, 1.5)","(-2, 3)"]"#);
        assert_eq!(
            get("records"),
            r#"[{"one":1,"two":2,"three":3,"four":[1,2,3,4]},{"test":true,"name":"James","decimal":3.33333,"quote":"say "hi""}]"#
        );
    }

    #[test]
    fn test_serialize_natives_escaping_writer() {
        let out = serialize_natives(&Serializer::new().escape_strings(true));
        let (_, records) = out.iter().find(|(l, _)| *l == "records").unwrap();
        assert!(records.ends_with(r#""quote":"say \"hi\""}]"#));
    }
}
