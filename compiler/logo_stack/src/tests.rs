use super::*;

/// Mimics the analyzer's shape: one frame per nesting level.
fn nesting_depth(brackets: &[u8]) -> usize {
    ensure_sufficient_stack(|| match brackets.split_first() {
        Some((b'[', rest)) => nesting_depth(rest) + 1,
        Some((_, rest)) => nesting_depth(rest),
        None => 0,
    })
}

#[test]
fn shallow_nesting() {
    assert_eq!(nesting_depth(b"[[x]]"), 2);
}

#[test]
fn deep_nesting_does_not_overflow() {
    let source = vec![b'['; 200_000];
    assert_eq!(nesting_depth(&source), 200_000);
}

#[test]
fn passes_results_through() {
    let result: Result<i64, String> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(result, Ok(7));
}
