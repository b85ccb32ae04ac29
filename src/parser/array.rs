use super::*;

/// `'[' value? (',' value)* ']'`
///
/// The first element is optional and every later one is introduced by a
/// comma, so `[,1]` reads as `[1]`. A trailing comma is rejected.
pub(super) fn parse_array(parser: &mut Parser) -> Result<Option<Value>, JsonError> {
    if parser.lexer().peek() != Some('[') {
        return Ok(None);
    }
    parser.descend()?;
    let result = parse_elements(parser);
    parser.ascend();
    result.map(|items| Some(Value::Array(items)))
}

fn parse_elements(parser: &mut Parser) -> Result<Vec<Value>, JsonError> {
    parser.lexer().bump(); // consume [
    parser.skip_whitespace();

    let mut items = Vec::new();
    if !matches!(parser.lexer().peek(), Some(',' | ']')) {
        items.push(value::parse_value(parser)?);
        parser.skip_whitespace();
    }

    while parser.lexer().peek() == Some(',') {
        parser.lexer().bump();
        parser.skip_whitespace();
        if parser.lexer().peek() == Some(']') {
            return Err(parser.lexer().unexpected_with_hint(
                "a value after ','",
                "Trailing commas are not allowed",
            ));
        }
        items.push(value::parse_value(parser)?);
        parser.skip_whitespace();
    }

    parser.lexer().expect_char(']', "',' or ']'")?;
    Ok(items)
}
