// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::options::ParseOptions;
use crate::parser::Parser;
use crate::{JsonError, Value};

mod access;
mod conversion;
mod helpers;
mod validation;

/// A parsed JSON document with dotted-path access to its values.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
    raw_content: String, // Kept for error reporting
}

impl Document {
    /// Load and parse a JSON file with the default options.
    ///
    /// # Example
    /// ```ignore
    /// let doc = Document::from_file("settings.json")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, JsonError> {
        Self::from_file_with_options(path, ParseOptions::default())
    }

    pub fn from_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self, JsonError> {
        let path_ref = path.as_ref();
        debug!(path = %path_ref.display(), "loading JSON document");

        let content = fs::read_to_string(path_ref).map_err(|e| JsonError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path_ref.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        Self::from_str_with_options(&content, options)
    }

    /// Load a JSON file with fallback support
    ///
    /// Tries the primary path first. Only when that fails to be read is the
    /// fallback tried; syntax errors in the primary file are returned as-is.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> Result<Self, JsonError> {
        match Self::from_file(&primary) {
            Ok(doc) => Ok(doc),
            Err(JsonError::FileError { .. }) => {
                debug!(
                    primary = %primary.as_ref().display(),
                    fallback = %fallback.as_ref().display(),
                    "primary JSON file unavailable, using fallback"
                );
                Self::from_file(&fallback).map_err(|e| match e {
                    JsonError::FileError { message, .. } => JsonError::FileError {
                        message: format!(
                            "Failed to load from primary path '{}' or fallback path '{}': {}",
                            primary.as_ref().display(),
                            fallback.as_ref().display(),
                            message
                        ),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the files exists".into()),
                        code: Some(302),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other),
        }
    }

    /// Parse a JSON document from a string with the default options.
    pub fn from_str(content: &str) -> Result<Self, JsonError> {
        Self::from_str_with_options(content, ParseOptions::default())
    }

    pub fn from_str_with_options(content: &str, options: ParseOptions) -> Result<Self, JsonError> {
        let root = Parser::with_options(content, options).parse_document()?;
        Ok(Self {
            root,
            raw_content: content.to_string(),
        })
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn into_root(self) -> Value {
        self.root
    }

    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }
}

impl FromStr for Document {
    type Err = JsonError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Self::from_str_with_options(content, ParseOptions::default())
    }
}
