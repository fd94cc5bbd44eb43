//! Stack growth for recursive analysis.
//!
//! The Logo analyzer is a recursive-descent compiler: every nested bracket,
//! group and every link of an infix chain (`1 + 2 + 3 + ...` associates to
//! the right, so each operator is one more level of recursion) costs a host
//! stack frame. Wrapping the recursive entry point in
//! [`ensure_sufficient_stack`] lets long programs compile without blowing
//! the default thread stack.
//!
//! Execution of user procedures does not go through this helper. Unbounded
//! recursion in Logo code ends in a host stack overflow.
//!
//! On `wasm32` the helper is a passthrough.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// ```text
/// fn analyze(&mut self, tokens: &[String], at: usize) -> AnalyzeResult {
///     ensure_sufficient_stack(|| self.analyze_inner(tokens, at))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
mod tests;
