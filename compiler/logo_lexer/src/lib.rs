//! Logo tokenizer.
//!
//! Turns raw source text into a flat sequence of string tokens:
//!
//! 1. Everything from `;` to the end of its line is dropped (full-line and
//!    trailing comments alike).
//! 2. The punctuation and operator lexemes in [`LEXEMES`] always stand alone,
//!    even when glued to other characters (`[av:taille]` is `[`, `av:taille`,
//!    `]`).
//! 3. The rest is split on whitespace.
//!
//! Case is left untouched. The analyzer lower-cases identifiers and keywords
//! when it consumes them, so string literal contents keep their case.

use memchr::memchr;

/// Lexemes that are always split into their own token.
///
/// Two-character lexemes come first: `<=` and `>=` win over `<`, `>`, `=`.
pub const LEXEMES: [&str; 14] = [
    "<=", ">=", "<", "=", ">", "\"", "(", ")", "[", "]", "+", "-", "*", "/",
];

/// Comment marker; the comment runs to the end of the line.
pub const COMMENT: u8 = b';';

/// Remove every `;` comment, keeping line structure intact.
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for (index, line) in source.split('\n').enumerate() {
        if index > 0 {
            out.push('\n');
        }
        match memchr(COMMENT, line.as_bytes()) {
            // `;` is ASCII, so the byte offset is a char boundary.
            Some(at) => out.push_str(&line[..at]),
            None => out.push_str(line),
        }
    }
    out
}

/// The standalone lexeme `text` starts with, if any.
///
/// [`LEXEMES`] is scanned in order, so the longest lexeme wins.
#[inline]
pub fn leading_lexeme(text: &str) -> Option<&'static str> {
    LEXEMES.iter().copied().find(|lexeme| text.starts_with(lexeme))
}

/// Tokenize Logo source text.
pub fn tokenize(source: &str) -> Vec<String> {
    let text = strip_comments(source);
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut rest = text.as_str();

    while let Some(ch) = rest.chars().next() {
        if let Some(lexeme) = leading_lexeme(rest) {
            flush(&mut word, &mut tokens);
            tokens.push(lexeme.to_string());
            rest = &rest[lexeme.len()..];
            continue;
        }
        if ch.is_whitespace() {
            flush(&mut word, &mut tokens);
        } else {
            word.push(ch);
        }
        rest = &rest[ch.len_utf8()..];
    }
    flush(&mut word, &mut tokens);
    tokens
}

fn flush(word: &mut String, tokens: &mut Vec<String>) {
    if !word.is_empty() {
        tokens.push(std::mem::take(word));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
mod tests;
