//! Stack growth for the recursive-descent parser.
//!
//! Statement and expression rules recurse once per nesting level of the
//! input, so a file with thousands of nested parentheses or blocks would
//! overflow a fixed native stack. Wrapping each recursive entry point in
//! [`ensure_sufficient_stack`] moves the overflow risk to heap-allocated
//! stack segments.
//!
//! On `wasm32` the wrapper is a plain call.

/// Grow when less than this much stack is left.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// nearly exhausted.
///
/// ```text
/// fn read_expr(&mut self) -> Result<Node, ParseError> {
///     ensure_sufficient_stack(|| self.read_expr_prec(0))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// `wasm32` manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
