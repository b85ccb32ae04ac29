#[cfg(test)]
use super::*;

#[test]
fn test_literals() {
    for (input, expected) in [
        ("true", Value::Bool(true)),
        ("false", Value::Bool(false)),
        ("null", Value::Null),
    ] {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_literal(), Ok(Some(expected)));
        assert!(lexer.is_at_end());
    }
}

#[test]
fn test_literal_has_no_word_boundary() {
    let mut lexer = Lexer::new("truefoo");
    assert_eq!(lexer.next_literal(), Ok(Some(Value::Bool(true))));
    assert_eq!(lexer.peek(), Some('f'));
    assert_eq!(lexer.offset(), 4);
}

#[test]
fn test_literal_not_applicable() {
    let mut lexer = Lexer::new("\"true\"");
    assert_eq!(lexer.next_literal(), Ok(None));
    assert_eq!(lexer.offset(), 0);

    let mut lexer = Lexer::new("True");
    assert_eq!(lexer.next_literal(), Ok(None));
}

#[test]
fn test_partial_literal_fails() {
    let mut lexer = Lexer::new("nul");
    let err = lexer.next_literal().unwrap_err();
    assert!(matches!(err, JsonError::UnexpectedEndOfInput { column: 4, .. }));

    let mut lexer = Lexer::new("fals3");
    let err = lexer.next_literal().unwrap_err();
    assert!(matches!(err, JsonError::UnexpectedCharacter { character: '3', .. }));
}

#[test]
fn test_plain_string() {
    let mut lexer = Lexer::new(r#""Hello, world!""#);
    assert_eq!(lexer.next_string(), Ok(Some("Hello, world!".to_string())));
    assert!(lexer.is_at_end());
}

#[test]
fn test_string_escapes() {
    let mut lexer = Lexer::new(r#""\"Ow.\" - my pancreas""#);
    assert_eq!(lexer.next_string(), Ok(Some(r#""Ow." - my pancreas"#.to_string())));

    let mut lexer = Lexer::new(r#""c:\\dev\\code\\foo.cs""#);
    assert_eq!(lexer.next_string(), Ok(Some(r"c:\dev\code\foo.cs".to_string())));
}

#[test]
fn test_escaped_backslash_before_closing_quote() {
    let mut lexer = Lexer::new(r#""a\\"rest"#);
    assert_eq!(lexer.next_string(), Ok(Some(r"a\".to_string())));
    assert_eq!(lexer.peek(), Some('r'));
}

#[test]
fn test_unknown_escapes_stay_literal() {
    let mut lexer = Lexer::new(r#""line\nbreak\t\u0041""#);
    assert_eq!(
        lexer.next_string(),
        Ok(Some(r"line\nbreak\t\u0041".to_string()))
    );
}

#[test]
fn test_unterminated_string() {
    let mut lexer = Lexer::new("\"never closed");
    let err = lexer.next_string().unwrap_err();
    match err {
        JsonError::UnexpectedEndOfInput { hint, code, .. } => {
            assert_eq!(code, Some(102));
            assert!(hint.unwrap().contains("1:1"));
        }
        other => panic!("Expected UnexpectedEndOfInput, got {:?}", other),
    }

    // An escaped quote does not close the string
    let mut lexer = Lexer::new(r#""abc\""#);
    assert!(lexer.next_string().is_err());
}

#[test]
fn test_numbers() {
    for (input, expected) in [
        ("123", Value::Integer(123)),
        ("-123", Value::Integer(-123)),
        ("0", Value::Integer(0)),
        ("-0", Value::Integer(0)),
        ("007", Value::Integer(7)),
        ("123.45", Value::Float(123.45)),
        ("-123.45", Value::Float(-123.45)),
        ("1.0", Value::Float(1.0)),
    ] {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_number(), Ok(Some(expected)), "input {}", input);
        assert!(lexer.is_at_end(), "input {}", input);
    }
}

#[test]
fn test_integer_extremes() {
    let mut lexer = Lexer::new("-9223372036854775808");
    assert_eq!(lexer.next_number(), Ok(Some(Value::Integer(i64::MIN))));

    let mut lexer = Lexer::new("9223372036854775808");
    let err = lexer.next_number().unwrap_err();
    assert!(matches!(err, JsonError::InvalidNumber { ref literal, column: 1, .. } if literal == "9223372036854775808"));
}

#[test]
fn test_number_requires_digits() {
    let mut lexer = Lexer::new("-");
    assert!(matches!(lexer.next_number(), Err(JsonError::UnexpectedEndOfInput { .. })));

    let mut lexer = Lexer::new("-x");
    assert!(matches!(lexer.next_number(), Err(JsonError::UnexpectedCharacter { character: 'x', .. })));

    let mut lexer = Lexer::new("12.");
    assert!(matches!(lexer.next_number(), Err(JsonError::UnexpectedEndOfInput { .. })));

    let mut lexer = Lexer::new("12.e");
    assert!(matches!(lexer.next_number(), Err(JsonError::UnexpectedCharacter { character: 'e', .. })));
}

#[test]
fn test_number_stops_at_non_digit() {
    let mut lexer = Lexer::new("42,");
    assert_eq!(lexer.next_number(), Ok(Some(Value::Integer(42))));
    assert_eq!(lexer.peek(), Some(','));
}

#[test]
fn test_position_tracking() {
    let mut lexer = Lexer::new("ab\ncé");
    lexer.bump();
    lexer.bump();
    assert_eq!((lexer.line(), lexer.column(), lexer.offset()), (1, 3, 2));
    lexer.bump();
    assert_eq!((lexer.line(), lexer.column(), lexer.offset()), (2, 1, 3));
    lexer.bump();
    lexer.bump();
    assert_eq!((lexer.line(), lexer.column(), lexer.offset()), (2, 3, 6));
    assert!(lexer.is_at_end());
}

#[test]
fn test_skip_whitespace() {
    let mut lexer = Lexer::new(" \t\r\n x");
    lexer.skip_whitespace();
    assert_eq!(lexer.peek(), Some('x'));
    assert_eq!(lexer.line(), 2);
}

#[test]
fn test_expect_char() {
    let mut lexer = Lexer::new(":]");
    assert!(lexer.expect_char(':', "':'").is_ok());
    let err = lexer.expect_char(',', "','").unwrap_err();
    assert!(matches!(err, JsonError::UnexpectedCharacter { character: ']', ref expected, .. } if expected == "','"));
}
