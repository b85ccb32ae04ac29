use serde::de::DeserializeOwned;

use super::*;
use crate::export::deserialize_value;

impl Document {
    /// Get a typed value from the document using dot notation.
    ///
    /// Object members are addressed by name and array elements by index.
    /// Automatically handles both `snake_case` and `kebab-case` member names.
    ///
    /// # Examples
    /// ```
    /// # use json_descent::Document;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let doc = Document::from_str(r#"{"server":{"host":"localhost","port":8080},"hosts":["a","b"]}"#)?;
    /// let host: String = doc.get("server.host")?;
    /// let port: u16 = doc.get("server.port")?;
    /// let second: String = doc.get("hosts.1")?;
    /// assert_eq!((host.as_str(), port, second.as_str()), ("localhost", 8080, "b"));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if path doesn't exist or value can't be converted to type T.
    pub fn get<T>(&self, path: &str) -> Result<T, JsonError>
    where
        T: TryFrom<Value, Error = JsonError>,
    {
        let value = self.get_value_flexible(path)?;
        T::try_from(value.clone()).map_err(|e| self.annotate(e, path))
    }

    /// Get an optional typed value - returns `None` if the path doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, JsonError>
    where
        T: TryFrom<Value, Error = JsonError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(JsonError::PathNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```
    /// # use json_descent::Document;
    /// let doc = Document::from_str(r#"{"debug":true}"#).unwrap();
    /// assert_eq!(doc.get_or("timeout", 30u64), 30);
    /// assert!(doc.get_or("debug", false));
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = JsonError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Deserialize the value at `path` into any `serde` type.
    pub fn deserialize<T: DeserializeOwned>(&self, path: &str) -> Result<T, JsonError> {
        let value = self.get_value_flexible(path)?;
        deserialize_value(value).map_err(|e| self.annotate(e, path))
    }

    /// Get a raw `Value` by exact path. The empty path yields the root.
    pub fn get_value(&self, path: &str) -> Result<&Value, JsonError> {
        let segments = helpers::split_path(path);
        helpers::lookup(&self.root, &segments).ok_or_else(|| not_found(path))
    }

    fn get_value_flexible(&self, path: &str) -> Result<&Value, JsonError> {
        let segments = helpers::split_path(path);
        helpers::lookup_flexible(&self.root, &segments).ok_or_else(|| not_found(path))
    }

    /// Member names of the object at `path`, in source order.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, JsonError> {
        match self.get_value_flexible(path)? {
            Value::Object(members) => Ok(members.keys().cloned().collect()),
            other => Err(JsonError::TypeError {
                message: format!("Path '{}' is {}, not an object", path, other.type_name()),
                hint: Some("Only objects have keys".into()),
                code: Some(406),
            }),
        }
    }

    /// Number of elements or members of the container at `path`.
    pub fn len(&self, path: &str) -> Result<usize, JsonError> {
        match self.get_value_flexible(path)? {
            Value::Array(items) => Ok(items.len()),
            Value::Object(members) => Ok(members.len()),
            other => Err(JsonError::TypeError {
                message: format!("Path '{}' is {}, not a container", path, other.type_name()),
                hint: Some("Only arrays and objects have a length".into()),
                code: Some(407),
            }),
        }
    }

    /// Check if a path exists.
    pub fn has(&self, path: &str) -> bool {
        self.get_value_flexible(path).is_ok()
    }

    /// Point type and validation errors at the source line of `path`.
    pub(super) fn annotate(&self, e: JsonError, path: &str) -> JsonError {
        let Some((line, snippet)) = helpers::find_member_line(path, &self.raw_content) else {
            return e;
        };
        let located = |hint: Option<String>| {
            Some(match hint {
                Some(h) => format!("{}\n  → line {}: {}", h, line, snippet),
                None => format!("line {}: {}", line, snippet),
            })
        };

        match e {
            JsonError::TypeError { message, hint, code } => JsonError::TypeError {
                message,
                hint: located(hint),
                code,
            },
            JsonError::ValidationError { message, hint, code } => JsonError::ValidationError {
                message,
                hint: located(hint),
                code,
            },
            other => other,
        }
    }
}

fn not_found(path: &str) -> JsonError {
    JsonError::PathNotFound {
        path: path.to_string(),
        hint: Some("Check that the path exists in the document".into()),
        code: Some(304),
    }
}
