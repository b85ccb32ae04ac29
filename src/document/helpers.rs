use crate::Value;

/// Split a dotted path into segments. The empty path has no segments.
pub(super) fn split_path(path: &str) -> Vec<&str> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('.').collect()
    }
}

/// Step into an object member, or into an array element for numeric segments.
pub(super) fn child<'v>(value: &'v Value, segment: &str) -> Option<&'v Value> {
    match value {
        Value::Object(members) => members.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

pub(super) fn lookup<'v>(root: &'v Value, segments: &[&str]) -> Option<&'v Value> {
    segments.iter().try_fold(root, |value, segment| child(value, segment))
}

/// The segment itself plus its snake_case and kebab-case spellings.
fn variants(segment: &str) -> Vec<String> {
    let mut out = vec![segment.to_string()];

    let snake = segment.replace('-', "_");
    if snake != segment {
        out.push(snake);
    }

    let kebab = segment.replace('_', "-");
    if kebab != segment {
        out.push(kebab);
    }

    out
}

/// Like [`lookup`] but each segment may match in snake_case or kebab-case.
///
/// Exact spellings are tried first at every level.
pub(super) fn lookup_flexible<'v>(value: &'v Value, segments: &[&str]) -> Option<&'v Value> {
    let Some((first, rest)) = segments.split_first() else {
        return Some(value);
    };

    variants(first)
        .iter()
        .filter_map(|variant| child(value, variant))
        .find_map(|next| lookup_flexible(next, rest))
}

/// Characters of context kept on each side of a member in error snippets.
const SNIPPET_BEFORE: usize = 20;
const SNIPPET_AFTER: usize = 40;

/// One open container while scanning the source text.
enum Scope {
    Object { key: Option<String>, expect_key: bool },
    Array { index: usize, has_value: bool },
}

impl Scope {
    fn matches(&self, segment: &str) -> bool {
        match self {
            Scope::Object { key: Some(key), .. } => variants(segment).iter().any(|v| v == key),
            Scope::Object { key: None, .. } => false,
            Scope::Array { index, .. } => segment.parse::<usize>().is_ok_and(|i| i == *index),
        }
    }
}

fn scopes_match(scopes: &[Scope], segments: &[&str]) -> bool {
    scopes.len() == segments.len() && scopes.iter().zip(segments).all(|(scope, segment)| scope.matches(segment))
}

/// Read a string body starting after its opening quote. Returns the decoded
/// text and the byte offset just past the closing quote.
fn read_string(raw: &str, start: usize) -> (String, usize) {
    let mut text = String::new();
    let mut chars = raw[start..].char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        match ch {
            '"' => return (text, start + i + 1),
            '\\' => match chars.peek() {
                Some(&(_, escaped @ ('\\' | '"'))) => {
                    text.push(escaped);
                    chars.next();
                }
                _ => text.push('\\'),
            },
            other => text.push(other),
        }
    }

    (text, raw.len())
}

/// Byte offset of the entry `path` names: the opening quote of an object
/// member name, or the first character of an array element.
///
/// Walks the container nesting with a scope stack so that only the full path
/// matches. With duplicate member names the last one wins, as in the tree.
fn find_member_offset(path: &str, raw_content: &str) -> Option<usize> {
    let segments = split_path(path);
    if segments.is_empty() {
        return None;
    }

    let mut scopes: Vec<Scope> = Vec::new();
    let mut found = None;
    let mut pos = 0;

    while let Some(ch) = raw_content[pos..].chars().next() {
        let start = pos;
        pos += ch.len_utf8();

        if matches!(ch, ' ' | '\t' | '\n' | '\r') {
            continue;
        }

        // An array element begins at the first significant character after
        // `[` or `,` that is not itself punctuation.
        if let Some(Scope::Array { has_value, .. }) = scopes.last_mut() {
            if !*has_value && !matches!(ch, ',' | ']') {
                *has_value = true;
                if scopes_match(&scopes, &segments) {
                    found = Some(start);
                }
            }
        }

        match ch {
            '"' => {
                let (text, end) = read_string(raw_content, pos);
                pos = end;
                if let Some(Scope::Object { key, expect_key }) = scopes.last_mut() {
                    if *expect_key {
                        *key = Some(text);
                        *expect_key = false;
                        if scopes_match(&scopes, &segments) {
                            found = Some(start);
                        }
                    }
                }
            }
            '{' => scopes.push(Scope::Object { key: None, expect_key: true }),
            '[' => scopes.push(Scope::Array { index: 0, has_value: false }),
            '}' | ']' => {
                scopes.pop();
            }
            ',' => match scopes.last_mut() {
                Some(Scope::Object { expect_key, .. }) => *expect_key = true,
                Some(Scope::Array { index, has_value }) if *has_value => {
                    *index += 1;
                    *has_value = false;
                }
                _ => {}
            },
            _ => {}
        }
    }

    found
}

/// Up to a few dozen characters of `line` around byte offset `at`.
fn snippet(line: &str, at: usize) -> String {
    let chars: Vec<char> = line.chars().collect();
    let at = line[..at].chars().count();
    let from = at.saturating_sub(SNIPPET_BEFORE);
    let to = (at + SNIPPET_AFTER).min(chars.len());

    let mut out: String = chars[from..to].iter().collect::<String>().trim().to_string();
    if from > 0 {
        out.insert_str(0, "...");
    }
    if to < chars.len() {
        out.push_str("...");
    }
    out
}

/// Find the source line declaring `path`.
///
/// Returns the 1-based line number and a short excerpt of that line around
/// the member.
pub(super) fn find_member_line(path: &str, raw_content: &str) -> Option<(usize, String)> {
    let offset = find_member_offset(path, raw_content)?;

    let line_start = raw_content[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = raw_content[offset..].find('\n').map_or(raw_content.len(), |i| offset + i);
    let line = raw_content[line_start..line_end].trim_end_matches('\r');
    let number = raw_content[..line_start].matches('\n').count() + 1;

    Some((number, snippet(line, offset - line_start)))
}
