//! Stable sorting over resolved field values.

use std::cmp::Ordering;

use super::field::{FieldValue, SortRow};

/// Sort direction for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Current sort column and direction. An unset key leaves rows in their
/// fetched order.
#[derive(Debug, Clone)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

/// Compare two resolved values the way the dashboard's tables order them:
/// numbers compare numerically (a numeric string coerces when compared
/// against a number), text compares lexically, and null compares equal to
/// everything. NaN also compares equal, so a stable sort leaves such rows
/// in place.
pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Number(x), FieldValue::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
        (FieldValue::Number(x), FieldValue::Text(y)) => match y.trim().parse::<f64>() {
            Ok(y) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            Err(_) => Ordering::Equal,
        },
        (FieldValue::Text(_), FieldValue::Number(_)) => compare_values(b, a).reverse(),
        (FieldValue::Null, _) | (_, FieldValue::Null) => Ordering::Equal,
    }
}

/// Stable-sort a copy of `rows` by the state's key, honoring direction.
/// The source slice is never mutated; with no key set the copy keeps the
/// original order.
pub fn sorted_rows<R: SortRow + Clone>(rows: &[R], state: &SortState) -> Vec<R> {
    let mut sorted: Vec<R> = rows.to_vec();
    if let Some(key) = &state.key {
        sorted.sort_by(|a, b| {
            let ordering = compare_values(&a.field(key), &b.field(key));
            match state.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn rows() -> Vec<Value> {
        vec![
            json!({"id": 1, "total": 10.0}),
            json!({"id": 2, "total": 30.0}),
            json!({"id": 3, "total": 20.0}),
        ]
    }

    fn ids(rows: &[Value]) -> Vec<i64> {
        rows.iter().map(|r| r["id"].as_i64().unwrap()).collect()
    }

    fn state(key: &str, direction: SortDirection) -> SortState {
        SortState {
            key: Some(key.to_string()),
            direction,
        }
    }

    #[test]
    fn test_ascending_and_descending_by_total() {
        let source = rows();
        let asc = sorted_rows(&source, &state("total", SortDirection::Ascending));
        assert_eq!(ids(&asc), vec![1, 3, 2]);

        let desc = sorted_rows(&source, &state("total", SortDirection::Descending));
        assert_eq!(ids(&desc), vec![2, 3, 1]);
    }

    #[test]
    fn test_descending_is_reverse_of_ascending_without_ties() {
        let source = rows();
        let mut asc = sorted_rows(&source, &state("total", SortDirection::Ascending));
        let desc = sorted_rows(&source, &state("total", SortDirection::Descending));
        asc.reverse();
        assert_eq!(ids(&asc), ids(&desc));
    }

    #[test]
    fn test_source_is_not_mutated() {
        let source = rows();
        let _ = sorted_rows(&source, &state("total", SortDirection::Ascending));
        assert_eq!(ids(&source), vec![1, 2, 3]);
    }

    #[test]
    fn test_stability_under_ties() {
        let source = vec![
            json!({"id": 1, "total": 5.0}),
            json!({"id": 2, "total": 5.0}),
            json!({"id": 3, "total": 1.0}),
            json!({"id": 4, "total": 5.0}),
        ];
        let asc = sorted_rows(&source, &state("total", SortDirection::Ascending));
        assert_eq!(ids(&asc), vec![3, 1, 2, 4]);

        let desc = sorted_rows(&source, &state("total", SortDirection::Descending));
        assert_eq!(ids(&desc), vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_no_key_keeps_fetched_order() {
        let source = rows();
        let unsorted = sorted_rows(
            &source,
            &SortState {
                key: None,
                direction: SortDirection::Ascending,
            },
        );
        assert_eq!(ids(&unsorted), vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_key_is_a_no_op() {
        let source = rows();
        let sorted = sorted_rows(&source, &state("nope", SortDirection::Descending));
        assert_eq!(ids(&sorted), vec![1, 2, 3]);
    }

    #[test]
    fn test_numeric_strings_coerce_against_numbers() {
        let a = FieldValue::Number(2.0);
        let b = FieldValue::Text("10".to_string());
        assert_eq!(compare_values(&a, &b), Ordering::Less);
        assert_eq!(compare_values(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_null_compares_equal_to_everything() {
        assert_eq!(
            compare_values(&FieldValue::Null, &FieldValue::Number(3.0)),
            Ordering::Equal
        );
        assert_eq!(
            compare_values(&FieldValue::Text("a".to_string()), &FieldValue::Null),
            Ordering::Equal
        );
    }

    #[test]
    fn test_text_sorts_lexically() {
        let source = vec![
            json!({"id": 1, "locality": {"name": "Lviv"}}),
            json!({"id": 2, "locality": {"name": "Bucha"}}),
            json!({"id": 3, "locality": {"name": "Irpin"}}),
        ];
        let asc = sorted_rows(&source, &state("locality.name", SortDirection::Ascending));
        assert_eq!(ids(&asc), vec![2, 3, 1]);
    }
}
