use serde_json::Value;

/// The placeholder written into a skipped position so later fields keep
/// their positional meaning.
pub const SENTINEL: &str = "_";

/// Resolve sentinel placeholders in a request body before submission.
///
/// A non-empty string of nothing but underscores becomes `Null`. Every
/// other string has its underscore characters stripped — all of them, not
/// just full sentinels, so "a_b" comes out as "ab". The remote API expects
/// this; do not tighten the stripping without checking both sides.
pub fn resolve(value: Value) -> Value {
    match value {
        Value::String(s) => {
            if !s.is_empty() && s.chars().all(|c| c == '_') {
                Value::Null
            } else {
                Value::String(s.chars().filter(|c| *c != '_').collect())
            }
        }
        Value::Array(items) => Value::Array(items.into_iter().map(resolve).collect()),
        Value::Object(map) => {
            Value::Object(map.into_iter().map(|(k, v)| (k, resolve(v))).collect())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sentinel_strings_become_null() {
        assert_eq!(resolve(json!("_")), Value::Null);
        assert_eq!(resolve(json!("__")), Value::Null);
        assert_eq!(resolve(json!("_____")), Value::Null);
    }

    #[test]
    fn test_empty_string_is_not_a_sentinel() {
        assert_eq!(resolve(json!("")), json!(""));
    }

    #[test]
    fn test_underscores_stripped_from_every_string() {
        assert_eq!(resolve(json!("a_b")), json!("ab"));
        assert_eq!(resolve(json!("_leading")), json!("leading"));
        assert_eq!(resolve(json!("plain")), json!("plain"));
    }

    #[test]
    fn test_recursion_preserves_keys_and_order() {
        let input = json!({"a": "_", "b": [" _", "x_y"]});
        let expected = json!({"a": null, "b": [" ", "xy"]});
        assert_eq!(resolve(input), expected);
    }

    #[test]
    fn test_array_length_preserved() {
        let resolved = resolve(json!(["_", "", "a_b", 3]));
        assert_eq!(resolved, json!([null, "", "ab", 3]));
    }

    #[test]
    fn test_non_string_scalars_unchanged() {
        assert_eq!(resolve(json!(42)), json!(42));
        assert_eq!(resolve(json!(1.5)), json!(1.5));
        assert_eq!(resolve(json!(true)), json!(true));
        assert_eq!(resolve(Value::Null), Value::Null);
    }

    #[test]
    fn test_deep_nesting() {
        let input = json!({"outer": {"inner": ["__", {"leaf": "v_1"}]}});
        let expected = json!({"outer": {"inner": [null, {"leaf": "v1"}]}});
        assert_eq!(resolve(input), expected);
    }
}
