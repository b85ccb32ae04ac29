use tracing::trace;

use super::*;

type Alternative = fn(&mut Parser) -> Result<Option<Value>, JsonError>;

/// Sub-parsers in the order they are tried.
///
/// Each returns `Ok(None)` without consuming input when it does not apply at
/// the current character. Once one has consumed input its error is final.
const ALTERNATIVES: [(&str, Alternative); 5] = [
    ("literal", parse_literal),
    ("string", parse_string),
    ("number", parse_number),
    ("object", object::parse_object),
    ("array", array::parse_array),
];

pub(super) fn parse_value(parser: &mut Parser) -> Result<Value, JsonError> {
    for (name, alternative) in ALTERNATIVES {
        if let Some(value) = alternative(parser)? {
            trace!(alternative = name, offset = parser.offset(), "matched JSON value");
            return Ok(value);
        }
    }

    Err(parser.lexer().unexpected_with_hint(
        "a JSON value",
        "Values are true, false, null, a string, a number, an object or an array",
    ))
}

fn parse_literal(parser: &mut Parser) -> Result<Option<Value>, JsonError> {
    parser.lexer().next_literal()
}

fn parse_string(parser: &mut Parser) -> Result<Option<Value>, JsonError> {
    Ok(parser.lexer().next_string()?.map(Value::Text))
}

fn parse_number(parser: &mut Parser) -> Result<Option<Value>, JsonError> {
    parser.lexer().next_number()
}
