/// Default container nesting limit.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Knobs for a single parse.
///
/// The defaults follow the bare grammar: no whitespace between tokens and a
/// nesting limit of [`DEFAULT_MAX_DEPTH`].
///
/// # Examples
/// ```
/// use json_descent::{ParseOptions, parse_with_options};
///
/// let options = ParseOptions::new().allow_whitespace(true);
/// let value = parse_with_options("{ \"a\" : [1, 2] }", options).unwrap();
/// assert_eq!(value["a"][1].as_i64(), Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub allow_whitespace: bool,
    pub max_depth: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_whitespace: false,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip space, tab, LF and CR around values and punctuation.
    pub fn allow_whitespace(mut self, allow: bool) -> Self {
        self.allow_whitespace = allow;
        self
    }

    /// `None` removes the nesting limit.
    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }
}
