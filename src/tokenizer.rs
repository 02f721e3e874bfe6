//! Argument tokenization
//!
//! Splits raw argument text on whitespace while keeping double-quoted
//! segments together. Quote characters are removed from the tokens and an
//! unterminated quote simply runs to the end of the input.

/// Split `raw` into positional tokens
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in raw.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c.is_whitespace() && !in_quotes {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Treat the whole argument text as one path, dropping any quotes
///
/// Used by commands whose final operand is "the rest of the line", so that
/// `chmod 644 my notes.txt` and `chmod 644 "my notes.txt"` agree.
pub fn unquote(raw: &str) -> String {
    raw.replace('"', "").trim().to_string()
}

/// Split off the first whitespace-delimited word and return it with the rest
pub fn split_first(raw: &str) -> Option<(&str, &str)> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) => Some((first, rest.trim())),
        None => Some((trimmed, "")),
    }
}
