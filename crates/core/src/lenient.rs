//! Serde helpers for integer fields that clients may send as strings.
//!
//! The quiz client posts ids and difficulties either as JSON numbers or as
//! numeric strings (`"5"`), sometimes mixed within one array. Use with `#[serde(deserialize_with = ...)]`.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

impl IntOrString {
    fn into_i64<E: de::Error>(self) -> Result<i64, E> {
        match self {
            IntOrString::Int(n) => Ok(n),
            IntOrString::Str(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("expected an integer, got \"{s}\""))),
        }
    }
}

/// Deserialize an optional `i64` from null, a number, or a numeric string.
///
/// Pair with `#[serde(default)]` so a missing field also yields `None`.
pub fn optional_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IntOrString>::deserialize(deserializer)?
        .map(IntOrString::into_i64)
        .transpose()
}

/// Deserialize an optional `i32` from null, a number, or a numeric string.
pub fn optional_int32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_int(deserializer)?
        .map(|n| {
            i32::try_from(n).map_err(|_| de::Error::custom(format!("integer {n} out of range")))
        })
        .transpose()
}

/// Deserialize an optional list of `i64`, each element a number or a numeric
/// string.
pub fn optional_int_list<'de, D>(deserializer: D) -> Result<Option<Vec<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<IntOrString>>::deserialize(deserializer)?
        .map(|items| items.into_iter().map(IntOrString::into_i64).collect())
        .transpose()
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::optional_int")]
        category: Option<i64>,
        #[serde(default, deserialize_with = "super::optional_int32")]
        difficulty: Option<i32>,
        #[serde(default, deserialize_with = "super::optional_int_list")]
        previous: Option<Vec<i64>>,
    }

    fn parse(json: &str) -> Result<Probe, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn accepts_numbers() {
        let p = parse(r#"{"category": 2, "difficulty": 3}"#).unwrap();
        assert_eq!(p.category, Some(2));
        assert_eq!(p.difficulty, Some(3));
    }

    #[test]
    fn accepts_numeric_strings() {
        let p = parse(r#"{"category": " 2 ", "difficulty": "4"}"#).unwrap();
        assert_eq!(p.category, Some(2));
        assert_eq!(p.difficulty, Some(4));
    }

    #[test]
    fn optional_accepts_null_and_missing() {
        assert_eq!(parse(r#"{"category": null}"#).unwrap().category, None);
        assert_eq!(parse(r#"{}"#).unwrap().difficulty, None);
    }

    #[test]
    fn rejects_non_numeric_strings() {
        assert!(parse(r#"{"category": "five"}"#).is_err());
        assert!(parse(r#"{"difficulty": ""}"#).is_err());
    }

    #[test]
    fn rejects_out_of_range_i32() {
        assert!(parse(r#"{"difficulty": 9999999999}"#).is_err());
    }

    #[test]
    fn list_accepts_mixed_elements() {
        let p = parse(r#"{"previous": [1, "3", " 7"]}"#).unwrap();
        assert_eq!(p.previous, Some(vec![1, 3, 7]));
    }

    #[test]
    fn list_accepts_null_and_missing() {
        assert_eq!(parse(r#"{"previous": null}"#).unwrap().previous, None);
        assert_eq!(parse(r#"{}"#).unwrap().previous, None);
    }

    #[test]
    fn list_rejects_bad_elements() {
        assert!(parse(r#"{"previous": [1, "x"]}"#).is_err());
        assert!(parse(r#"{"previous": "1,2"}"#).is_err());
    }
}
