//! Recursive descent parser for PHP.
//!
//! Produces an owned syntax tree ([`Program`]) with exact positions for
//! every node, optional comment attachment and an optional raw token log.
//!
//! Two modes:
//! - strict (default): the first syntax error aborts with a [`ParseError`]
//! - fault-tolerant ([`ParserOptions::suppress_errors`]): errors become
//!   `error` placeholder nodes, listed in [`Program::errors`], and parsing
//!   continues
//!
//! # Example
//!
//! ```
//! use php_parse::{parse, ParserOptions};
//!
//! let program = parse("<?php echo 1;", None, &ParserOptions::default()).unwrap();
//! assert_eq!(program.children[0].name(), "echo");
//! ```

mod builder;
mod classify;
mod error;
mod grammar;
mod options;
mod stream;

#[cfg(test)]
mod tests;

pub use classify::{Category, TokenSet};
pub use error::{ErrorCode, ParseError};
pub use options::ParserOptions;
pub use php_ir::{Node, NodeKind, Program};

use std::sync::Once;

use php_ir::TokenKind;

use builder::{Sealed, Trivia};
use stream::TokenStream;

/// File name reported when the caller gives none.
pub const DEFAULT_FILE_NAME: &str = "eval";

/// Per-parse state.
///
/// A value lives for exactly one parse, so nothing carries over between
/// parses.
pub struct Parser<'src> {
    stream: TokenStream<'src>,
    options: ParserOptions,
    file_name: String,
    errors: Vec<Node>,
    trivia: Trivia,
    next_id: u32,
    /// Opened minus sealed nodes.
    open_nodes: usize,
    /// Names of the enclosing namespace declarations.
    namespaces: Vec<String>,
}

impl<'src> Parser<'src> {
    /// Create a parser over `source`. `options` are applied as given; see
    /// [`ParserOptions::effective`].
    pub fn new(source: &'src str, file_name: &str, options: ParserOptions) -> Self {
        Parser {
            stream: TokenStream::new(source, &options),
            options,
            file_name: file_name.to_owned(),
            errors: Vec::new(),
            trivia: Trivia::default(),
            next_id: 0,
            open_nodes: 0,
            namespaces: Vec::new(),
        }
    }

    /// Parse the whole input.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        // opened before priming: the program starts at the first byte
        let program = self.open();
        self.advance();

        let mut children = Vec::new();
        while !self.stream.is_eof() {
            let before = self.stream.start();
            children.push(self.parse_start()?);
            self.force_progress(before);
        }

        self.stream.finish();
        let Sealed {
            id,
            loc,
            leading,
            trailing,
        } = self.seal(program);

        if self.options.debug && self.open_nodes != 0 {
            let end = loc.end;
            return Err(ParseError::new(
                ErrorCode::E9001,
                "Some nodes are not closed",
                self.file_name,
                end.line,
                end.column,
            ));
        }

        let (comments, tokens) = self.stream.take_collected();
        let mut program = Program {
            id,
            children,
            errors: std::mem::take(&mut self.errors),
            comments: self.options.extract_doc.then_some(comments),
            tokens,
            loc,
            leading_comments: leading,
            trailing_comments: trailing,
        };
        let trivia = std::mem::take(&mut self.trivia);
        trivia.apply(&mut program);
        Ok(program)
    }

    // Token stream delegation

    #[inline]
    fn advance(&mut self) {
        self.stream.advance();
    }

    #[inline]
    fn kind(&self) -> TokenKind {
        self.stream.kind()
    }

    #[inline]
    fn at(&self, kind: TokenKind) -> bool {
        self.stream.at(kind)
    }

    #[inline]
    fn peek(&mut self) -> TokenKind {
        self.stream.peek()
    }

    #[inline]
    fn text(&self) -> &'src str {
        self.stream.text()
    }

    /// Whether the current token belongs to `category`.
    #[inline]
    fn is(&self, category: Category) -> bool {
        category.set().contains(self.stream.kind())
    }

    /// Consume the current token if it is `kind`.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }
}

/// Reusable parser front end holding a configuration.
///
/// `parse` takes `&mut self`: one parse at a time per instance. Use one
/// instance per thread to parse concurrently.
#[derive(Clone, Debug, Default)]
pub struct PhpParser {
    options: ParserOptions,
}

impl PhpParser {
    pub fn new(options: ParserOptions) -> Self {
        PhpParser { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Change the configuration between parses.
    pub fn options_mut(&mut self) -> &mut ParserOptions {
        &mut self.options
    }

    /// Parse `source`. The file name defaults to [`DEFAULT_FILE_NAME`].
    pub fn parse(&mut self, source: &str, file_name: Option<&str>) -> Result<Program, ParseError> {
        parse(source, file_name, &self.options)
    }
}

/// Parse `source` with `options`.
pub fn parse(
    source: &str,
    file_name: Option<&str>,
    options: &ParserOptions,
) -> Result<Program, ParseError> {
    Parser::new(
        source,
        file_name.unwrap_or(DEFAULT_FILE_NAME),
        options.effective(),
    )
    .parse_program()
}

static TRACING_INIT: Once = Once::new();

/// Route parser diagnostics to stderr, filtered by `RUST_LOG`.
///
/// `RUST_LOG=php_parse=debug` shows recorded errors and
/// `RUST_LOG=php_parse=trace` every token. Without a usable `RUST_LOG`
/// nothing is installed, and a subscriber the host already set up is kept.
/// Repeated calls are no-ops.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .try_init();
        if installed.is_err() {
            tracing::debug!("keeping the existing global subscriber");
        }
    });
}
