//! # Query Encoder
//!
//! Flattens nested JSON values into `application/x-www-form-urlencoded`
//! text using bracket keys (`user[name]=x&tags[]=a&tags[]=b`), the layout
//! conventional server-side form parsers expect.


use serde_json::Value;

use crate::common::helpers::{is_array, is_object};

/// Collects `key=value` pairs in the order they are produced.
#[derive(Debug, Default)]
pub struct QueryEncoder {
    pairs: Vec<String>,
}

impl QueryEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one percent-encoded pair.
    pub fn add(&mut self, key: &str, value: &Value) {
        self.pairs.push(format!(
            "{}={}",
            urlencoding::encode(key),
            urlencoding::encode(&scalar_text(value))
        ));
    }

    /// Walks `value` below the given key prefix. An empty prefix means the
    /// value is the top-level request body.
    pub fn build_params(&mut self, prefix: &str, value: &Value) {
        if prefix.is_empty() {
            self.build_top_level(value);
            return;
        }

        match value {
            Value::Array(items) => {
                if prefix.ends_with("[]") {
                    for item in items {
                        self.add(prefix, item);
                    }
                } else {
                    for (i, item) in items.iter().enumerate() {
                        // Only structured elements keep their index.
                        let key = if matches!(item, Value::Object(_) | Value::Array(_) | Value::Null)
                        {
                            format!("{}[{}]", prefix, i)
                        } else {
                            format!("{}[]", prefix)
                        };
                        self.build_params(&key, item);
                    }
                }
            }
            Value::Object(map) => {
                for (key, child) in map {
                    self.build_params(&format!("{}[{}]", prefix, key), child);
                }
            }
            scalar => self.add(prefix, scalar),
        }
    }

    fn build_top_level(&mut self, value: &Value) {
        if is_array(value) {
            // Serialized form controls: [{ "name": .., "value": .. }, ..]
            for control in value.as_array().into_iter().flatten() {
                if let Some(name) = control.get("name").and_then(Value::as_str) {
                    let field_value = control.get("value").unwrap_or(&Value::Null);
                    self.add(name, field_value);
                }
            }
        } else if is_object(value) {
            for (key, child) in value.as_object().into_iter().flatten() {
                self.build_params(key, child);
            }
        }
    }

    pub fn pairs(&self) -> &[String] {
        &self.pairs
    }

    pub fn finish(self) -> String {
        self.pairs.join("&").replace("%20", "+").replace(char::is_whitespace, "+")
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        // Structured values under a `[]` key are sent as their JSON text.
        other => other.to_string(),
    }
}

/// Whole-valued floats drop the fraction so `2.0` is sent as `2`.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
        _ => n.to_string(),
    }
}

/// Encodes a request body or query string.
pub fn encode_to_string_url(value: &Value) -> String {
    let mut encoder = QueryEncoder::new();
    encoder.build_params("", value);
    encoder.finish()
}
