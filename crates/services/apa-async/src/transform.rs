use serde_json::Value;

/// Recursively lowercases every object key in `value`
///
/// Array elements are processed element-wise; scalars pass through
/// unchanged. When lowercasing collides two keys, the later entry wins.
#[must_use]
pub fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), lowercase_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}

/// Normalizes a successful payload for [`KeyMode::Lowercase`](crate::KeyMode)
///
/// Keys are recursively lowercased, then the top-level `copyright` entry
/// is dropped if present.
#[must_use]
pub fn normalize_payload(value: Value) -> Value {
    let mut value = lowercase_keys(value);
    if let Value::Object(map) = &mut value {
        map.remove("copyright");
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lowercases_nested_object_keys() {
        let input = json!({"Data": {"Id": 1, "TeamName": "Sharks"}});
        assert_eq!(
            lowercase_keys(input),
            json!({"data": {"id": 1, "teamname": "Sharks"}})
        );
    }

    #[test]
    fn recurses_into_arrays() {
        let input = json!({"Items": [{"A": 1}, 2, "x"]});
        assert_eq!(lowercase_keys(input), json!({"items": [{"a": 1}, 2, "x"]}));
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(lowercase_keys(json!(42)), json!(42));
        assert_eq!(lowercase_keys(json!("Value")), json!("Value"));
        assert_eq!(lowercase_keys(json!(null)), json!(null));
    }

    #[test]
    fn normalize_strips_copyright_after_lowercasing() {
        let input = json!({"Copyright": "x", "Data": {"Id": 1}});
        assert_eq!(normalize_payload(input), json!({"data": {"id": 1}}));
    }

    #[test]
    fn normalize_keeps_nested_copyright_keys() {
        let input = json!({"Data": {"Copyright": "x"}});
        assert_eq!(normalize_payload(input), json!({"data": {"copyright": "x"}}));
    }

    #[test]
    fn normalize_leaves_non_objects_alone() {
        assert_eq!(normalize_payload(json!([1, 2])), json!([1, 2]));
    }
}
