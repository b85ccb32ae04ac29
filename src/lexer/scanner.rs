use super::*;

/// Advance the character iterator and update offset/line/column tracking
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = lexer.peek;
    if let Some(c) = curr {
        lexer.offset += c.len_utf8();
        if c == '\n' {
            lexer.line += 1;
            lexer.column = 0;
        } else {
            lexer.column += 1;
        }
    }
    lexer.peek = lexer.input.next();
    curr
}

pub(super) fn skip_whitespace(lexer: &mut Lexer) {
    while let Some(' ' | '\t' | '\n' | '\r') = lexer.peek {
        bump(lexer);
    }
}

pub(super) fn unexpected(lexer: &Lexer, expected: &str, hint: Option<&str>) -> JsonError {
    match lexer.peek {
        Some(character) => JsonError::UnexpectedCharacter {
            character,
            expected: expected.to_string(),
            offset: lexer.offset(),
            line: lexer.line(),
            column: lexer.column(),
            hint: hint.map(Into::into),
            code: Some(101),
        },
        None => JsonError::UnexpectedEndOfInput {
            expected: expected.to_string(),
            offset: lexer.offset(),
            line: lexer.line(),
            column: lexer.column(),
            hint: hint.map(Into::into),
            code: Some(102),
        },
    }
}
