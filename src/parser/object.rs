use indexmap::IndexMap;

use super::*;

/// `'{' member? (',' member)* '}'` with `member = string ':' value`.
///
/// Members are inserted in source order; a repeated name overwrites the
/// earlier value and keeps its original position.
pub(super) fn parse_object(parser: &mut Parser) -> Result<Option<Value>, JsonError> {
    if parser.lexer().peek() != Some('{') {
        return Ok(None);
    }
    parser.descend()?;
    let result = parse_members(parser);
    parser.ascend();
    result.map(|members| Some(Value::Object(members)))
}

fn parse_members(parser: &mut Parser) -> Result<IndexMap<String, Value>, JsonError> {
    parser.lexer().bump(); // consume {
    parser.skip_whitespace();

    let mut members = IndexMap::new();
    if parser.lexer().peek() == Some('"') {
        let (name, value) = parse_member(parser)?;
        members.insert(name, value);
        parser.skip_whitespace();
    }

    while parser.lexer().peek() == Some(',') {
        parser.lexer().bump();
        parser.skip_whitespace();
        let (name, value) = parse_member(parser)?;
        members.insert(name, value);
        parser.skip_whitespace();
    }

    parser.lexer().expect_char('}', "',' or '}'")?;
    Ok(members)
}

fn parse_member(parser: &mut Parser) -> Result<(String, Value), JsonError> {
    let Some(name) = parser.lexer().next_string()? else {
        return Err(parser.lexer().unexpected_with_hint(
            "a member name",
            "Object member names are double-quoted strings",
        ));
    };

    parser.skip_whitespace();
    parser.lexer().expect_char(':', "':' after member name")?;
    parser.skip_whitespace();

    let value = value::parse_value(parser)?;
    Ok((name, value))
}
