//! Row field resolution for sorting.

use serde_json::Value;

/// A row attribute resolved for comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Null,
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// Access to a row's sortable attributes by column key.
///
/// Keys may use one level of dot-path nesting (`"locality.name"`). Unknown
/// keys resolve to [`FieldValue::Null`], which the comparator treats as
/// equal to everything, so sorting by a missing column is a no-op rather
/// than a failure.
pub trait SortRow {
    fn field(&self, key: &str) -> FieldValue;
}

/// Untyped rows sort by direct map lookup. A literal key match wins over
/// the dot-path interpretation, so a flat field actually named
/// `"locality.name"` keeps working.
impl SortRow for Value {
    fn field(&self, key: &str) -> FieldValue {
        if let Some(value) = self.get(key) {
            return resolve(value);
        }
        if let Some((head, tail)) = key.split_once('.') {
            if let Some(value) = self.get(head).and_then(|nested| nested.get(tail)) {
                return resolve(value);
            }
        }
        FieldValue::Null
    }
}

fn resolve(value: &Value) -> FieldValue {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map(FieldValue::Number)
            .unwrap_or(FieldValue::Null),
        Value::String(s) => FieldValue::Text(s.clone()),
        Value::Bool(b) => FieldValue::Number(u8::from(*b) as f64),
        _ => FieldValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_lookup() {
        let row = json!({"total": 12.5, "title": "Road repair"});
        assert_eq!(row.field("total"), FieldValue::Number(12.5));
        assert_eq!(row.field("title"), FieldValue::Text("Road repair".to_string()));
        assert_eq!(row.field("missing"), FieldValue::Null);
    }

    #[test]
    fn test_dot_path_resolves_nested_objects() {
        let row = json!({"locality": {"name": "Bucha"}});
        assert_eq!(
            row.field("locality.name"),
            FieldValue::Text("Bucha".to_string())
        );
    }

    #[test]
    fn test_literal_key_wins_over_dot_path() {
        let row = json!({"locality.name": "flat", "locality": {"name": "nested"}});
        assert_eq!(row.field("locality.name"), FieldValue::Text("flat".to_string()));
    }

    #[test]
    fn test_bool_resolves_numerically() {
        let row = json!({"isDefence": true});
        assert_eq!(row.field("isDefence"), FieldValue::Number(1.0));
    }

    #[test]
    fn test_nested_non_scalar_is_null() {
        let row = json!({"awards": [1, 2], "unit": {"id": "LTR"}});
        assert_eq!(row.field("awards"), FieldValue::Null);
        assert_eq!(row.field("unit"), FieldValue::Null);
    }
}
