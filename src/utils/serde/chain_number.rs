//! Deserialization helpers for numbers that chain CLIs and UIs send either as
//! JSON numbers or as strings.
use std::fmt;

use serde::{de, Deserializer};

#[derive(Debug)]
struct U64Visitor;

impl de::Visitor<'_> for U64Visitor {
    type Value = u64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string containing a u64 number or a u64 integer")
    }

    // Sui prints object versions as strings, e.g. "12"
    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value.trim().parse::<u64>().map_err(de::Error::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(value)
            .map_err(|_| de::Error::custom("negative value cannot be converted to u64"))
    }
}

pub fn deserialize_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(U64Visitor)
}

#[derive(Debug)]
struct AmountTextVisitor;

impl<'de> de::Visitor<'de> for AmountTextVisitor {
    type Value = Option<String>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an amount as a string or a non-negative integer")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(value.to_string()))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(value.to_string()))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if value < 0 {
            Err(de::Error::custom("amount cannot be negative"))
        } else {
            Ok(Some(value.to_string()))
        }
    }

    // Floats would already have lost digits; make the caller send a string.
    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(de::Error::custom(format!(
            "amount {value} must be sent as a string or integer"
        )))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }
}

/// Keeps an amount as text so it can go through `parse_amount` unchanged.
/// Accepts `"1000"`, `1000` and `null`.
pub fn deserialize_optional_amount_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(AmountTextVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::from_str;

    #[derive(Deserialize)]
    struct Version {
        #[serde(deserialize_with = "deserialize_u64")]
        value: u64,
    }

    #[derive(Deserialize)]
    struct Amount {
        #[serde(default, deserialize_with = "deserialize_optional_amount_text")]
        value: Option<String>,
    }

    #[test]
    fn test_deserialize_string_u64_max() {
        let json = r#"{"value": "18446744073709551615"}"#;
        let result: Version = from_str(json).unwrap();
        assert_eq!(result.value, u64::MAX);
    }

    #[test]
    fn test_deserialize_numeric_u64() {
        let result: Version = from_str(r#"{"value": 42}"#).unwrap();
        assert_eq!(result.value, 42);
    }

    #[test]
    fn test_deserialize_negative_fails() {
        let result = from_str::<Version>(r#"{"value": -1}"#);
        assert!(result
            .err()
            .unwrap()
            .to_string()
            .contains("negative value cannot be converted to u64"));
    }

    #[test]
    fn test_deserialize_invalid_string_fails() {
        assert!(from_str::<Version>(r#"{"value": "not a number"}"#).is_err());
    }

    #[test]
    fn test_amount_text_accepts_strings_and_integers() {
        let s: Amount = from_str(r#"{"value": "1e18"}"#).unwrap();
        assert_eq!(s.value.as_deref(), Some("1e18"));
        let n: Amount = from_str(r#"{"value": 1000000000}"#).unwrap();
        assert_eq!(n.value.as_deref(), Some("1000000000"));
        let missing: Amount = from_str(r#"{}"#).unwrap();
        assert_eq!(missing.value, None);
        let null: Amount = from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(null.value, None);
    }

    #[test]
    fn test_amount_text_rejects_floats_and_negatives() {
        assert!(from_str::<Amount>(r#"{"value": 1.5}"#).is_err());
        assert!(from_str::<Amount>(r#"{"value": -3}"#).is_err());
    }
}
