//! Walks a parsed tree and describes every node.

use json_codec::JsonValue;

const INDENT: &str = "  ";

/// Renders a node for a single line of output.
///
/// Strings print without quotes; containers print their size, since their
/// children are listed on the following lines.
pub fn describe(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Array(items) => format!("<array of {} items>", items.len()),
        JsonValue::Object(members) => format!("<object with {} members>", members.len()),
        other => other.to_string(),
    }
}

/// One summary line for a top-level value.
pub fn summary(label: &str, value: &JsonValue) -> String {
    format!(
        "Type of '{}': '{}', value: '{}'",
        label,
        value.type_name(),
        describe(value)
    )
}

/// Lists the children of `value`, one line each, indenting per level.
///
/// Scalars have no children and yield nothing.
pub fn examine(value: &JsonValue) -> Vec<String> {
    let mut lines = Vec::new();
    walk(value, INDENT, &mut lines);
    lines
}

fn walk(value: &JsonValue, prefix: &str, lines: &mut Vec<String>) {
    let nested = format!("{}{}", prefix, INDENT);
    match value {
        JsonValue::Object(members) => {
            for (key, member) in members {
                lines.push(format!(
                    "{}value of dict['{}']: '{}' ({}),",
                    prefix,
                    key,
                    describe(member),
                    member.type_name()
                ));
                walk(member, &nested, lines);
            }
        }
        JsonValue::Array(items) => {
            for item in items {
                lines.push(format!(
                    "{}value: '{}' ({}),",
                    prefix,
                    describe(item),
                    item.type_name()
                ));
                walk(item, &nested, lines);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_codec::deserialize;

    #[test]
    fn test_describe_scalars() {
        assert_eq!(describe(&deserialize(r#""test""#).unwrap()), "test");
        assert_eq!(describe(&deserialize("5.5").unwrap()), "5.5");
        assert_eq!(describe(&deserialize("true").unwrap()), "true");
        assert_eq!(describe(&JsonValue::Null), "null");
    }

    #[test]
    fn test_summary() {
        let value = deserialize("[true, false]").unwrap();
        assert_eq!(
            summary("array", &value),
            "Type of 'array': 'array', value: '<array of 2 items>'"
        );
    }

    #[test]
    fn test_examine_scalar_has_no_children() {
        assert!(examine(&deserialize("42").unwrap()).is_empty());
    }

    #[test]
    fn test_examine_nested() {
        let value = deserialize(r#"{"a": [1, {"b": "x"}], "c": null}"#).unwrap();
        assert_eq!(
            examine(&value),
            vec![
                "  value of dict['a']: '<array of 2 items>' (array),",
                "    value: '1' (integer),",
                "    value: '<object with 1 members>' (object),",
                "      value of dict['b']: 'x' (string),",
                "  value of dict['c']: 'null' (null),",
            ]
        );
    }
}
