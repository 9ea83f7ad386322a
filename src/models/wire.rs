// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Serde helpers for the hotel API's loosely-typed fields.
//!
//! The back-end serializes decimals as strings (`"10.00"`) and some ids as
//! integers; these helpers accept either shape.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Int(i64),
    Float(f64),
}

/// Deserialize an id that may arrive as a string or an integer.
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => Ok(s),
        StringOrNumber::Int(n) => Ok(n.to_string()),
        StringOrNumber::Float(f) => Ok(f.to_string()),
    }
}

/// Deserialize a required decimal.
pub fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
        StringOrNumber::Int(n) => Ok(n as f64),
        StringOrNumber::Float(f) => Ok(f),
    }
}

/// Deserialize an optional decimal. Null, empty and unparseable values
/// become `None`.
pub fn opt_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<StringOrNumber> = Option::deserialize(deserializer)?;
    Ok(match value {
        None => None,
        Some(StringOrNumber::String(s)) => s.trim().parse().ok(),
        Some(StringOrNumber::Int(n)) => Some(n as f64),
        Some(StringOrNumber::Float(f)) => Some(f),
    }
    .filter(|v: &f64| v.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "id")]
        id: String,
        #[serde(deserialize_with = "decimal")]
        price: f64,
        #[serde(default, deserialize_with = "opt_decimal")]
        discount: Option<f64>,
    }

    #[test]
    fn test_accepts_strings_and_numbers() {
        let s: Sample =
            serde_json::from_value(json!({"id": 7, "price": "12.50", "discount": 10})).unwrap();
        assert_eq!(s.id, "7");
        assert_eq!(s.price, 12.5);
        assert_eq!(s.discount, Some(10.0));
    }

    #[test]
    fn test_optional_decimal_tolerates_garbage() {
        let s: Sample =
            serde_json::from_value(json!({"id": "a", "price": 1, "discount": "n/a"})).unwrap();
        assert_eq!(s.discount, None);

        let s: Sample = serde_json::from_value(json!({"id": "a", "price": 1})).unwrap();
        assert_eq!(s.discount, None);

        let s: Sample =
            serde_json::from_value(json!({"id": "a", "price": 1, "discount": null})).unwrap();
        assert_eq!(s.discount, None);
    }

    #[test]
    fn test_required_decimal_rejects_garbage() {
        let result: Result<Sample, _> =
            serde_json::from_value(json!({"id": "a", "price": "free"}));
        assert!(result.is_err());
    }
}
