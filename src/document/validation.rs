use super::*;

impl Document {
    /// Get a value and check it with `validator`.
    ///
    /// `valid_values` describes what the validator accepts and is echoed in
    /// the error.
    pub fn get_validated<T, F>(&self, path: &str, validator: F, valid_values: &str) -> Result<T, JsonError>
    where
        T: TryFrom<Value, Error = JsonError>,
        F: FnOnce(&T) -> bool,
    {
        let typed_value: T = self.get(path)?;

        if !validator(&typed_value) {
            let e = JsonError::ValidationError {
                message: format!("Invalid value for `{}`\nExpected: {}", path, valid_values),
                hint: Some(format!("Valid values are: {}", valid_values)),
                code: Some(450),
            };
            return Err(self.annotate(e, path));
        }

        Ok(typed_value)
    }

    /// Get a string value and check it is one of `allowed_values` (case-insensitive).
    pub fn get_string_enum(&self, path: &str, allowed_values: &[&str]) -> Result<String, JsonError> {
        let value: String = self.get(path)?;
        let lower_value = value.to_lowercase();

        if !allowed_values.iter().any(|v| v.to_lowercase() == lower_value) {
            let e = JsonError::ValidationError {
                message: format!("Invalid value '{}' for `{}`", value, path),
                hint: Some(format!("Expected one of: {}", allowed_values.join(", "))),
                code: Some(451),
            };
            return Err(self.annotate(e, path));
        }

        Ok(value)
    }
}
