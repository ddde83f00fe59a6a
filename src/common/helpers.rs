// Value helpers and safe logging

use serde_json::Value;

/// Strips leading and trailing whitespace; a missing value becomes `""`.
pub fn trim(value: Option<&str>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Shape of a dynamic request value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

pub fn value_kind(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

pub fn is_string(value: &Value) -> bool {
    value_kind(value) == ValueKind::String
}

/// JSON numbers are always finite, so no NaN check is needed here.
pub fn is_number(value: &Value) -> bool {
    value_kind(value) == ValueKind::Number
}

pub fn is_array(value: &Value) -> bool {
    value_kind(value) == ValueKind::Array
}

pub fn is_object(value: &Value) -> bool {
    value_kind(value) == ValueKind::Object
}

/// Masks email addresses for safe logging
///
/// # Example
/// ```
/// use form_submit::common::safe_email_log;
///
/// let masked = safe_email_log("user@example.com");
/// assert_eq!(masked, "u***@example.com");
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 && !parts[0].is_empty() {
            let first: String = parts[0].chars().take(1).collect();
            format!("{}***@{}", first, parts[1])
        } else {
            "***@***.***".to_string()
        }
    } else {
        "***@***.***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trim_strips_both_ends() {
        assert_eq!(trim(Some("  John \t\n")), "John");
        assert_eq!(trim(Some("   ")), "");
        assert_eq!(trim(None), "");
    }

    #[test]
    fn test_value_predicates() {
        assert!(is_string(&json!("a")));
        assert!(is_number(&json!(1.5)));
        assert!(is_array(&json!([1, 2])));
        assert!(is_object(&json!({"a": 1})));
        assert!(!is_object(&json!([])));
        assert_eq!(value_kind(&Value::Null), ValueKind::Null);
        assert_eq!(value_kind(&json!(true)), ValueKind::Bool);
    }

    #[test]
    fn test_safe_email_log_masks_local_part() {
        assert_eq!(safe_email_log("user@example.com"), "u***@example.com");
        assert_eq!(safe_email_log("a@b"), "***@***.***");
        assert_eq!(safe_email_log("not-an-email"), "***@***.***");
    }
}
