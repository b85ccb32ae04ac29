// Author: Dustin Pilgrim
// License: MIT

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::{JsonError, Value};

/// Convert a parsed [`Value`] into a `serde_json::Value`.
///
/// Object member order is preserved. Integers stay integers and floats stay
/// floats; a float that is not finite (a decimal literal too large for `f64`)
/// has no `serde_json` counterpart and is reported as a type error.
///
/// # Examples
/// ```
/// use json_descent::{parse, export::to_serde_json};
///
/// let value = parse(r#"{"b":1,"a":[true,2.5]}"#).unwrap();
/// let json = to_serde_json(&value).unwrap();
/// assert_eq!(json["a"][1], 2.5);
/// ```
pub fn to_serde_json(value: &Value) -> Result<serde_json::Value, JsonError> {
    match value {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Bool(b) => Ok(json!(b)),
        Value::Integer(n) => Ok(json!(n)),
        Value::Float(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .ok_or_else(|| JsonError::TypeError {
                message: format!("Float {} cannot be represented as a JSON number", n),
                hint: Some("Only finite numbers can be exported".into()),
                code: Some(412),
            }),
        Value::Text(s) => Ok(json!(s)),
        Value::Array(items) => items
            .iter()
            .map(to_serde_json)
            .collect::<Result<Vec<_>, _>>()
            .map(serde_json::Value::Array),
        Value::Object(members) => members
            .iter()
            .map(|(k, v)| Ok((k.clone(), to_serde_json(v)?)))
            .collect::<Result<serde_json::Map<_, _>, JsonError>>()
            .map(serde_json::Value::Object),
    }
}

/// Convert a `serde_json::Value` into a [`Value`].
///
/// Numbers that fit `i64` become `Integer`; every other number becomes `Float`.
pub fn from_serde_json(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => n.as_f64().map_or(Value::Null, Value::Float),
        },
        serde_json::Value::String(s) => Value::Text(s),
        serde_json::Value::Array(items) => {
            Value::Array(items.into_iter().map(from_serde_json).collect())
        }
        serde_json::Value::Object(members) => members
            .into_iter()
            .map(|(k, v)| (k, from_serde_json(v)))
            .collect(),
    }
}

/// Deserialize any `serde` type out of a parsed [`Value`].
///
/// # Errors
/// Returns a type error when the value's shape does not match `T`.
pub fn deserialize_value<T: DeserializeOwned>(value: &Value) -> Result<T, JsonError> {
    let json = to_serde_json(value)?;
    serde_json::from_value(json).map_err(|e| JsonError::TypeError {
        message: format!("Cannot deserialize {}: {}", value.type_name(), e),
        hint: None,
        code: Some(413),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use serde::Deserialize;

    #[test]
    fn test_export_keeps_order_and_types() {
        let value = parse(r#"{"z":1,"a":2.0,"m":[null,"s",false]}"#).unwrap();
        let json = to_serde_json(&value).unwrap();

        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
        assert!(json["z"].is_i64());
        assert!(json["a"].is_f64());
        assert_eq!(json["m"], json!([null, "s", false]));
    }

    #[test]
    fn test_export_non_finite_float() {
        let err = to_serde_json(&Value::Float(f64::INFINITY)).unwrap_err();
        assert!(matches!(err, JsonError::TypeError { code: Some(412), .. }));

        let huge = format!("{}.0", "9".repeat(400));
        let value = parse(&huge).unwrap();
        assert!(to_serde_json(&value).is_err());
    }

    #[test]
    fn test_import_from_serde_json() {
        let value = from_serde_json(json!({"i": -4, "f": 1.5, "big": 18446744073709551615u64, "o": {}}));
        assert_eq!(value["i"], Value::Integer(-4));
        assert_eq!(value["f"], Value::Float(1.5));
        assert!(matches!(value["big"], Value::Float(_)));
        assert!(value["o"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_deserialize_struct() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Server {
            host: String,
            port: u16,
            tags: Vec<String>,
            ratio: Option<f64>,
        }

        let value = parse(r#"{"host":"localhost","port":8080,"tags":["a","b"],"ratio":null}"#).unwrap();
        let server: Server = deserialize_value(&value).unwrap();
        assert_eq!(
            server,
            Server {
                host: "localhost".into(),
                port: 8080,
                tags: vec!["a".into(), "b".into()],
                ratio: None,
            }
        );

        let bad = parse(r#"{"host":1}"#).unwrap();
        assert!(deserialize_value::<Server>(&bad).is_err());
    }
}
