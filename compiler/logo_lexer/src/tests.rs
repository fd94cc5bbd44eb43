use super::*;
use pretty_assertions::assert_eq;

fn toks(source: &str) -> Vec<String> {
    tokenize(source)
}

#[test]
fn splits_on_whitespace() {
    assert_eq!(toks("av 10\n\tdr   90"), vec!["av", "10", "dr", "90"]);
}

#[test]
fn empty_and_blank_sources() {
    assert!(toks("").is_empty());
    assert!(toks("  \n\t \n").is_empty());
}

#[test]
fn brackets_stand_alone() {
    assert_eq!(
        toks("repete 4[av 10 dr 90]"),
        vec!["repete", "4", "[", "av", "10", "dr", "90", "]"]
    );
}

#[test]
fn operators_stand_alone() {
    assert_eq!(toks("3+4*2"), vec!["3", "+", "4", "*", "2"]);
    assert_eq!(toks("a-b/c"), vec!["a", "-", "b", "/", "c"]);
    assert_eq!(toks("(1)"), vec!["(", "1", ")"]);
}

#[test]
fn comparison_lexemes_use_longest_match() {
    assert_eq!(toks("a<=b"), vec!["a", "<=", "b"]);
    assert_eq!(toks("a>=b"), vec!["a", ">=", "b"]);
    assert_eq!(toks("a<b"), vec!["a", "<", "b"]);
    assert_eq!(toks("a=b"), vec!["a", "=", "b"]);
    assert_eq!(toks("a=<b"), vec!["a", "=", "<", "b"]);
}

#[test]
fn quotes_stand_alone_and_keep_case() {
    assert_eq!(toks("\"Hello World\""), vec!["\"", "Hello", "World", "\""]);
}

#[test]
fn full_line_comment_is_dropped() {
    assert_eq!(toks("; a comment\nav 10"), vec!["av", "10"]);
}

#[test]
fn trailing_comment_is_dropped() {
    assert_eq!(toks("av 10 ; forward\ndr 90;right"), vec!["av", "10", "dr", "90"]);
}

#[test]
fn comment_does_not_swallow_next_line() {
    assert_eq!(strip_comments("a ; x\nb"), "a \nb");
}

#[test]
fn sigils_and_dots_stay_in_words() {
    assert_eq!(toks(":taille 3.14"), vec![":taille", "3.14"]);
}

#[test]
fn leading_lexeme_prefers_longest() {
    assert_eq!(leading_lexeme("<=3"), Some("<="));
    assert_eq!(leading_lexeme("<3"), Some("<"));
    assert_eq!(leading_lexeme(">= x"), Some(">="));
    assert_eq!(leading_lexeme("av"), None);
    for lexeme in LEXEMES {
        assert_eq!(leading_lexeme(lexeme), Some(lexeme));
    }
}

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_tokens {
    use super::super::{tokenize, LEXEMES};
    use proptest::prelude::*;

    fn source_char() -> impl Strategy<Value = char> {
        prop_oneof![
            Just(' '),
            Just('\n'),
            Just(';'),
            Just('['),
            Just(']'),
            Just('"'),
            Just('<'),
            Just('='),
            Just('-'),
            Just(':'),
            proptest::char::range('a', 'e'),
            proptest::char::range('0', '3'),
        ]
    }

    proptest! {
        #[test]
        fn tokens_are_never_blank_or_commented(
            chars in proptest::collection::vec(source_char(), 0..128)
        ) {
            let source: String = chars.into_iter().collect();
            for token in tokenize(&source) {
                prop_assert!(!token.is_empty());
                prop_assert!(!token.contains(char::is_whitespace));
                prop_assert!(!token.contains(';'));
            }
        }

        #[test]
        fn retokenizing_joined_tokens_is_stable(
            chars in proptest::collection::vec(source_char(), 0..128)
        ) {
            let source: String = chars.into_iter().collect();
            let first = tokenize(&source);
            let second = tokenize(&first.join(" "));
            prop_assert_eq!(first, second);
        }

        #[test]
        fn lexemes_are_whole_tokens(index in 0usize..LEXEMES.len()) {
            let lexeme = LEXEMES[index];
            let source = format!("x{lexeme}y");
            prop_assert_eq!(tokenize(&source), vec!["x".to_string(), lexeme.to_string(), "y".to_string()]);
        }
    }
}
