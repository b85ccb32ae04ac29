//! A recursive-descent JSON parser producing a typed [`Value`] tree.
//!
//! ```
//! use json_descent::{parse, Value};
//!
//! let value = parse(r#"{"name":"descent","tags":["json"],"ratio":0.5,"count":3}"#).unwrap();
//! assert_eq!(value["name"].as_str(), Some("descent"));
//! assert_eq!(value["count"], Value::Integer(3));
//! assert_eq!(value["ratio"], Value::Float(0.5));
//! ```

pub mod ast;
pub mod document;
pub mod error;
pub mod export;
pub mod lexer;
pub mod options;
pub mod parser;

pub use ast::Value;
pub use document::Document;
pub use error::JsonError;
pub use options::ParseOptions;
pub use parser::Parser;

/// Parse a complete JSON document with the default options.
pub fn parse(input: &str) -> Result<Value, JsonError> {
    Parser::new(input).parse_document()
}

/// Parse a complete JSON document with explicit [`ParseOptions`].
pub fn parse_with_options(input: &str, options: ParseOptions) -> Result<Value, JsonError> {
    Parser::with_options(input, options).parse_document()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_send_and_sync() {
        assert_send_sync::<Value>();
        assert_send_sync::<Document>();
        assert_send_sync::<JsonError>();
        assert_send_sync::<ParseOptions>();
    }

    #[test]
    fn test_parse_from_several_threads() {
        let handles: Vec<_> = (0..4i64)
            .map(|n| std::thread::spawn(move || parse(&format!("[{},{{\"n\":{}}}]", n, n))))
            .collect();

        for (n, handle) in handles.into_iter().enumerate() {
            let value = handle.join().unwrap().unwrap();
            assert_eq!(value[1]["n"], Value::Integer(n as i64));
        }
    }
}
