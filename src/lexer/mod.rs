// Author: Dustin Pilgrim
// License: MIT

use std::str::Chars;

use crate::{JsonError, Value};

mod scanner;
mod tokenizer;

/// Character cursor shared by the lexical and structural parsers.
///
/// Tracks the byte offset, line and column of the next unread character.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: Chars<'a>,
    peek: Option<char>,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input: input.chars(),
            peek: None,
            offset: 0,
            line: 1,
            column: 0,
        };
        lexer.peek = lexer.input.next();
        lexer
    }

    pub fn peek(&self) -> Option<char> {
        self.peek
    }

    pub fn is_at_end(&self) -> bool {
        self.peek.is_none()
    }

    /// Byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the next unread character.
    pub fn column(&self) -> usize {
        self.column + 1
    }

    pub fn bump(&mut self) -> Option<char> {
        scanner::bump(self)
    }

    /// Skip JSON insignificant whitespace (space, tab, LF, CR).
    pub fn skip_whitespace(&mut self) {
        scanner::skip_whitespace(self)
    }

    /// Consume `expected` or fail describing it as `what`.
    pub fn expect_char(&mut self, expected: char, what: &str) -> Result<(), JsonError> {
        if self.peek == Some(expected) {
            self.bump();
            Ok(())
        } else {
            Err(self.unexpected(what))
        }
    }

    /// Build the error for the current position: an unexpected character, or
    /// an unexpected end when nothing is left.
    pub fn unexpected(&self, expected: &str) -> JsonError {
        scanner::unexpected(self, expected, None)
    }

    pub fn unexpected_with_hint(&self, expected: &str, hint: &str) -> JsonError {
        scanner::unexpected(self, expected, Some(hint))
    }

    /// `true`, `false` or `null`. `Ok(None)` when the cursor is not on one.
    pub fn next_literal(&mut self) -> Result<Option<Value>, JsonError> {
        tokenizer::tokenize_literal(self)
    }

    /// A double-quoted string with `\\` and `\"` resolved.
    pub fn next_string(&mut self) -> Result<Option<String>, JsonError> {
        tokenizer::tokenize_string(self)
    }

    /// An integer or decimal numeral with optional leading minus.
    pub fn next_number(&mut self) -> Result<Option<Value>, JsonError> {
        tokenizer::tokenize_number(self)
    }
}

#[cfg(test)]
mod tests;
