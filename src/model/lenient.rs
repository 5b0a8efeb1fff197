//! Field-level decoding for engine payloads: an unreadable field falls back to
//! its empty value instead of taking the whole record with it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_or_default<T: DeserializeOwned + Default>(value: Value) -> T {
    if value.is_null() {
        return T::default();
    }
    match serde_json::from_value(value) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("unreadable field ({e}), showing it empty");
            T::default()
        }
    }
}

/// `deserialize_with` helper: the field decodes or becomes `T::default()`.
///
/// # Errors
///
/// Only fails if the input is not JSON-like at all.
pub fn or_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Value::deserialize(de).map(value_or_default)
}

/// `deserialize_with` helper for lists: each element decodes on its own, a bad
/// element becomes `T::default()` in place and a non-list becomes empty.
///
/// # Errors
///
/// Only fails if the input is not JSON-like at all.
pub fn seq_or_default<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(de)? {
        Value::Array(items) => items.into_iter().map(value_or_default).collect(),
        Value::Null => Vec::new(),
        other => {
            log::warn!("expected a list, got {other}, showing it empty");
            Vec::new()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize, Debug, Default, PartialEq)]
    #[serde(default)]
    struct Record {
        #[serde(deserialize_with = "or_default")]
        weight: Option<f64>,
        #[serde(deserialize_with = "or_default")]
        name: String,
        #[serde(deserialize_with = "seq_or_default")]
        marks: Vec<u32>,
    }

    #[test]
    fn bad_field_keeps_its_neighbours() {
        let p: Record =
            serde_json::from_value(json!({"weight": "120", "name": "Doe", "marks": [1, "x", 3]}))
                .expect("record decodes");
        assert_eq!(
            p,
            Record {
                weight: None,
                name: "Doe".to_string(),
                marks: vec![1, 0, 3],
            }
        );
    }

    #[test]
    fn null_and_missing_fields_are_empty() {
        let p: Record = serde_json::from_value(json!({"weight": null, "marks": 7}))
            .expect("record decodes");
        assert_eq!(p, Record::default());
    }
}
