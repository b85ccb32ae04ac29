use tracing::{debug, warn};

use crate::lexer::Lexer;
use crate::options::ParseOptions;
use crate::{JsonError, Value};

mod array;
mod object;
mod value;

/// Recursive-descent parser over a single JSON document.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    options: ParseOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Self {
            lexer: Lexer::new(input),
            options,
            depth: 0,
        }
    }

    /// Parse one value and require the whole input to be consumed.
    pub fn parse_document(&mut self) -> Result<Value, JsonError> {
        debug!(offset = self.lexer.offset(), "parsing JSON document");

        let result = self.parse_root();
        match &result {
            Ok(value) => debug!(root = value.type_name(), "parsed JSON document"),
            Err(e) => debug!(error = %e, "JSON document rejected"),
        }
        result
    }

    fn parse_root(&mut self) -> Result<Value, JsonError> {
        self.skip_whitespace();
        if self.lexer.is_at_end() {
            return Err(self.lexer.unexpected_with_hint(
                "a JSON value",
                "The input is empty",
            ));
        }

        let value = value::parse_value(self)?;

        self.skip_whitespace();
        if let Some(character) = self.lexer.peek() {
            return Err(JsonError::TrailingInput {
                character,
                offset: self.lexer.offset(),
                line: self.lexer.line(),
                column: self.lexer.column(),
                hint: Some("A document holds exactly one value".into()),
                code: Some(103),
            });
        }

        Ok(value)
    }

    /// Parse a single value at the current position, leaving anything after it unread.
    pub fn parse_value(&mut self) -> Result<Value, JsonError> {
        value::parse_value(self)
    }

    pub fn offset(&self) -> usize {
        self.lexer.offset()
    }

    pub(crate) fn lexer(&mut self) -> &mut Lexer<'a> {
        &mut self.lexer
    }

    pub(crate) fn skip_whitespace(&mut self) {
        if self.options.allow_whitespace {
            self.lexer.skip_whitespace();
        }
    }

    /// Enter one container level, failing past the configured limit.
    pub(crate) fn descend(&mut self) -> Result<(), JsonError> {
        if let Some(limit) = self.options.max_depth {
            if self.depth >= limit {
                warn!(limit, offset = self.lexer.offset(), "JSON nesting limit exceeded");
                return Err(JsonError::DepthLimitExceeded {
                    limit,
                    offset: self.lexer.offset(),
                    line: self.lexer.line(),
                    column: self.lexer.column(),
                    hint: Some("Raise ParseOptions::max_depth for deeply nested documents".into()),
                    code: Some(105),
                });
            }
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn ascend(&mut self) {
        self.depth -= 1;
    }
}
