//! Parser configuration.

/// Options fixed for the duration of a parse.
///
/// The default is strict mode (abort on the first error), no comment or
/// token extraction, and the PHP 7.4 grammar.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ParserOptions {
    /// Record errors and keep going instead of aborting.
    pub suppress_errors: bool,
    /// Collect comments and attach them to nodes.
    pub extract_doc: bool,
    /// Keep a log of every raw token.
    pub extract_tokens: bool,
    /// Accept PHP 7 syntax (`??`, `<=>`, return types, group use).
    pub php7: bool,
    /// Accept PHP 7.4 syntax (`fn` arrow functions, `??=`, typed properties).
    pub php74: bool,
    /// Trace every grammar token and check that every opened node is sealed.
    pub debug: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            suppress_errors: false,
            extract_doc: false,
            extract_tokens: false,
            php7: true,
            php74: true,
            debug: false,
        }
    }
}

impl ParserOptions {
    /// Fault-tolerant options.
    pub fn tolerant() -> Self {
        ParserOptions {
            suppress_errors: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_suppress_errors(mut self, on: bool) -> Self {
        self.suppress_errors = on;
        self
    }

    #[must_use]
    pub fn with_extract_doc(mut self, on: bool) -> Self {
        self.extract_doc = on;
        self
    }

    #[must_use]
    pub fn with_extract_tokens(mut self, on: bool) -> Self {
        self.extract_tokens = on;
        self
    }

    #[must_use]
    pub fn with_php7(mut self, on: bool) -> Self {
        self.php7 = on;
        self
    }

    #[must_use]
    pub fn with_php74(mut self, on: bool) -> Self {
        self.php74 = on;
        self
    }

    #[must_use]
    pub fn with_debug(mut self, on: bool) -> Self {
        self.debug = on;
        self
    }

    /// Options as a parse actually applies them: PHP 7.4 syntax implies
    /// PHP 7 syntax.
    #[must_use]
    pub fn effective(self) -> Self {
        ParserOptions {
            php74: self.php74 && self.php7,
            ..self
        }
    }
}
