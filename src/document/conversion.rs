// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::{JsonError, Value};

fn type_error(expected: &str, value: &Value, hint: &str, code: u32) -> JsonError {
    JsonError::TypeError {
        message: format!("Expected {}, got {}", expected, value.type_name()),
        hint: Some(hint.into()),
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(type_error("string", &other, "Use a double-quoted string", 401)),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            Value::Text(ref s) if s == "true" || s == "false" => Err(JsonError::TypeError {
                message: format!("Expected boolean, got the string \"{}\"", s),
                hint: Some("Remove the quotes to make it a boolean".into()),
                code: Some(404),
            }),
            other => Err(type_error("boolean", &other, "Use true or false", 404)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value
            .as_f64()
            .ok_or_else(|| type_error("number", &value, "Use a numeric value", 402))
    }
}

impl TryFrom<Value> for f32 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as f32)
    }
}

// Integer targets accept only integer literals; a decimal literal such as
// `8080.0` is a float and is refused rather than truncated.
macro_rules! integer_conversion {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = JsonError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::Integer(n) => <$ty>::try_from(n).map_err(|_| JsonError::TypeError {
                            message: format!("Number {} out of range for {}", n, stringify!($ty)),
                            hint: Some(format!(
                                "Use an integer between {} and {}",
                                <$ty>::MIN,
                                <$ty>::MAX
                            )),
                            code: Some(403),
                        }),
                        Value::Float(n) => Err(JsonError::TypeError {
                            message: format!("Expected integer, got float {}", n),
                            hint: Some("Drop the decimal point for integer values".into()),
                            code: Some(402),
                        }),
                        other => Err(type_error("integer", &other, "Use an integer value", 402)),
                    }
                }
            }
        )*
    };
}

integer_conversion!(i64, i32, u8, u16, u32, u64, usize);

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = JsonError>,
{
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => items.into_iter().map(T::try_from).collect(),
            other => Err(type_error("array", &other, "Use an array [...]", 405)),
        }
    }
}

impl<T> TryFrom<Value> for Option<T>
where
    T: TryFrom<Value, Error = JsonError>,
{
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(None),
            v => Ok(Some(T::try_from(v)?)),
        }
    }
}

impl TryFrom<Value> for IndexMap<String, Value> {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(members) => Ok(members),
            other => Err(type_error("object", &other, "Use an object {...}", 410)),
        }
    }
}

impl TryFrom<Value> for HashMap<String, Value> {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        IndexMap::try_from(value).map(|members| members.into_iter().collect())
    }
}

impl TryFrom<Value> for HashMap<String, String> {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(members) => members
                .into_iter()
                .map(|(k, v)| Ok((k, String::try_from(v)?)))
                .collect(),
            other => Err(type_error("object", &other, "Use an object with string values", 410)),
        }
    }
}

impl TryFrom<Value> for (String, String) {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let (key, val) = <(String, Value)>::try_from(value)?;
        Ok((key, String::try_from(val)?))
    }
}

impl TryFrom<Value> for (String, Value) {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) if items.len() == 2 => {
                let mut items = items.into_iter();
                match (items.next(), items.next()) {
                    (Some(key), Some(val)) => Ok((String::try_from(key)?, val)),
                    _ => unreachable!("length checked above"),
                }
            }
            _ => Err(JsonError::TypeError {
                message: "Expected array with exactly 2 elements (key and value)".into(),
                hint: Some("Use [\"key\", value] format".into()),
                code: Some(411),
            }),
        }
    }
}
