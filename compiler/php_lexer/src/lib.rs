//! Scanner for PHP source text using logos.
//!
//! [`Scanner`] yields every raw token (whitespace, comments, tags and inline
//! HTML included) with exact line/column/offset positions. Filtering is the
//! parser's job.

mod raw_token;
mod scanner;

pub use scanner::Scanner;

use php_ir::Token;

/// Scan a whole source text into raw tokens.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Scanner::new(source).collect()
}
