use std::fmt;

/// The main error type for JSON parsing and value access.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonError {
    /// Raised when the character at the current position matches no grammar alternative.
    UnexpectedCharacter {
        character: char,
        expected: String,
        offset: usize,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when the input ends in the middle of a term.
    UnexpectedEndOfInput {
        expected: String,
        offset: usize,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a complete value was parsed but input remains after it.
    TrailingInput {
        character: char,
        offset: usize,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    InvalidNumber {
        literal: String,
        offset: usize,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    DepthLimitExceeded {
        limit: usize,
        offset: usize,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    PathNotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    ValidationError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl JsonError {
    /// 1-based line of a grammar error, `None` for access errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            JsonError::UnexpectedCharacter { line, .. }
            | JsonError::UnexpectedEndOfInput { line, .. }
            | JsonError::TrailingInput { line, .. }
            | JsonError::InvalidNumber { line, .. }
            | JsonError::DepthLimitExceeded { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// 1-based column of a grammar error, `None` for access errors.
    pub fn column(&self) -> Option<usize> {
        match self {
            JsonError::UnexpectedCharacter { column, .. }
            | JsonError::UnexpectedEndOfInput { column, .. }
            | JsonError::TrailingInput { column, .. }
            | JsonError::InvalidNumber { column, .. }
            | JsonError::DepthLimitExceeded { column, .. } => Some(*column),
            _ => None,
        }
    }

    /// Byte offset into the input of a grammar error.
    pub fn offset(&self) -> Option<usize> {
        match self {
            JsonError::UnexpectedCharacter { offset, .. }
            | JsonError::UnexpectedEndOfInput { offset, .. }
            | JsonError::TrailingInput { offset, .. }
            | JsonError::InvalidNumber { offset, .. }
            | JsonError::DepthLimitExceeded { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            JsonError::UnexpectedCharacter { code, .. }
            | JsonError::UnexpectedEndOfInput { code, .. }
            | JsonError::TrailingInput { code, .. }
            | JsonError::InvalidNumber { code, .. }
            | JsonError::DepthLimitExceeded { code, .. }
            | JsonError::PathNotFound { code, .. }
            | JsonError::TypeError { code, .. }
            | JsonError::ValidationError { code, .. }
            | JsonError::FileError { code, .. } => *code,
        }
    }

    /// True for errors raised by the grammar rather than by value access.
    pub fn is_syntax_error(&self) -> bool {
        self.line().is_some()
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonError::UnexpectedCharacter { character, expected, line, column, hint, code, .. } =>
                write!(f, "[JSON] Unexpected character '{}' at {}:{}: expected {}{}",
                    character.escape_debug(), line, column, expected, suffix(hint, code)
                ),
            JsonError::UnexpectedEndOfInput { expected, line, column, hint, code, .. } =>
                write!(f, "[JSON] Unexpected end of input at {}:{}: expected {}{}",
                    line, column, expected, suffix(hint, code)
                ),
            JsonError::TrailingInput { character, line, column, hint, code, .. } =>
                write!(f, "[JSON] Trailing input starting with '{}' at {}:{}{}",
                    character.escape_debug(), line, column, suffix(hint, code)
                ),
            JsonError::InvalidNumber { literal, line, column, hint, code, .. } =>
                write!(f, "[JSON] Invalid number '{}' at {}:{}{}",
                    literal, line, column, suffix(hint, code)
                ),
            JsonError::DepthLimitExceeded { limit, line, column, hint, code, .. } =>
                write!(f, "[JSON] Nesting deeper than {} levels at {}:{}{}",
                    limit, line, column, suffix(hint, code)
                ),
            JsonError::PathNotFound { path, hint, code } =>
                write!(f, "[JSON] Path '{}' not found{}", path, suffix(hint, code)),
            JsonError::TypeError { message, hint, code } =>
                write!(f, "[JSON] Type Error: {}{}", message, suffix(hint, code)),
            JsonError::ValidationError { message, hint, code } =>
                write!(f, "[JSON] Validation Error: {}{}", message, suffix(hint, code)),
            JsonError::FileError { message, path, hint, code } =>
                write!(f, "[JSON] File Error '{}': {}{}", path, message, suffix(hint, code)),
        }
    }
}

impl std::error::Error for JsonError {}
