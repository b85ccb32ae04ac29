use super::*;
use super::scanner::bump;

static LITERALS: [(&str, Value); 3] = [
    ("true", Value::Bool(true)),
    ("false", Value::Bool(false)),
    ("null", Value::Null),
];

/// Match one keyword character by character.
///
/// There is no word-boundary check after the keyword: `truefoo` yields `true`
/// and leaves `foo` for the caller to reject.
pub(super) fn tokenize_literal(lexer: &mut Lexer) -> Result<Option<Value>, JsonError> {
    let Some(first) = lexer.peek else {
        return Ok(None);
    };
    let Some((keyword, value)) = LITERALS.iter().find(|(kw, _)| kw.starts_with(first)) else {
        return Ok(None);
    };

    for expected in keyword.chars() {
        if lexer.peek != Some(expected) {
            return Err(scanner::unexpected(
                lexer,
                &format!("'{}' to continue literal '{}'", expected, keyword),
                Some("Literals are lowercase: true, false, null"),
            ));
        }
        bump(lexer);
    }

    Ok(Some(value.clone()))
}

pub(super) fn tokenize_string(lexer: &mut Lexer) -> Result<Option<String>, JsonError> {
    if lexer.peek != Some('"') {
        return Ok(None);
    }
    let (start_line, start_column) = (lexer.line(), lexer.column());
    bump(lexer); // opening quote

    let mut content = String::new();
    loop {
        match lexer.peek {
            None => {
                return Err(scanner::unexpected(
                    lexer,
                    "'\"' to close string",
                    Some(&format!("String opened at {}:{} is never closed", start_line, start_column)),
                ));
            }
            Some('"') => {
                bump(lexer);
                break;
            }
            Some('\\') => {
                bump(lexer);
                match lexer.peek {
                    Some('\\') => {
                        bump(lexer);
                        content.push('\\');
                    }
                    Some('"') => {
                        bump(lexer);
                        content.push('"');
                    }
                    // Only \\ and \" are escapes; any other backslash is literal text.
                    _ => content.push('\\'),
                }
            }
            Some(ch) => {
                bump(lexer);
                content.push(ch);
            }
        }
    }

    Ok(Some(content))
}

pub(super) fn tokenize_number(lexer: &mut Lexer) -> Result<Option<Value>, JsonError> {
    if !matches!(lexer.peek, Some('-' | '0'..='9')) {
        return Ok(None);
    }
    let (offset, line, column) = (lexer.offset(), lexer.line(), lexer.column());

    let mut literal = String::new();
    if lexer.peek == Some('-') {
        bump(lexer);
        literal.push('-');
    }
    if take_digits(lexer, &mut literal) == 0 {
        return Err(scanner::unexpected(lexer, "a digit", None));
    }

    if lexer.peek == Some('.') {
        bump(lexer);
        literal.push('.');
        if take_digits(lexer, &mut literal) == 0 {
            return Err(scanner::unexpected(
                lexer,
                "a digit after the decimal point",
                None,
            ));
        }
        return literal
            .parse::<f64>()
            .map(|n| Some(Value::Float(n)))
            .map_err(|_| invalid_number(literal, offset, line, column));
    }

    literal
        .parse::<i64>()
        .map(|n| Some(Value::Integer(n)))
        .map_err(|_| invalid_number(literal, offset, line, column))
}

fn take_digits(lexer: &mut Lexer, literal: &mut String) -> usize {
    let mut count = 0;
    while let Some(ch) = lexer.peek {
        if !ch.is_ascii_digit() {
            break;
        }
        literal.push(ch);
        bump(lexer);
        count += 1;
    }
    count
}

fn invalid_number(literal: String, offset: usize, line: usize, column: usize) -> JsonError {
    JsonError::InvalidNumber {
        literal,
        offset,
        line,
        column,
        hint: Some("Integers must fit in a signed 64-bit value; add a decimal point for larger magnitudes".into()),
        code: Some(104),
    }
}
