//! Lexer tokens.

use crate::types::{ErrorLocationProvider, SourceLocation};

/// A single token produced by the lexer or pushed back by the macro expander.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The raw text of the token. For control sequences this includes the
    /// leading backslash (e.g. `\alpha`).
    pub text: String,
    /// Where in the source this token came from, when known. Tokens
    /// synthesized during macro expansion carry `None`.
    pub loc: Option<SourceLocation>,
    /// Set by `\noexpand`: the expander must not expand this token.
    pub noexpand: bool,
    /// Set by `\noexpand` on an expandable token: the token behaves as
    /// `\relax` when it finally reaches the parser.
    pub treat_as_relax: bool,
}

impl Token {
    /// Create a token with the given text and optional location.
    #[must_use]
    pub const fn new(text: String, loc: Option<SourceLocation>) -> Self {
        Self {
            text,
            loc,
            noexpand: false,
            treat_as_relax: false,
        }
    }

    /// Create a token from a static string, without location.
    #[must_use]
    pub fn of(text: &str) -> Self {
        Self::new(text.to_owned(), None)
    }

    /// A token spanning from the start of `self` to the end of `end_token`,
    /// carrying `text`. Used to report a combined region, e.g. for a size
    /// argument assembled from several tokens.
    #[must_use]
    pub fn range(&self, end_token: &Self, text: String) -> Self {
        Self::new(
            text,
            SourceLocation::range(self.loc.clone(), end_token.loc.clone()),
        )
    }
}

impl ErrorLocationProvider for Token {
    fn loc(&self) -> Option<&SourceLocation> {
        self.loc.as_ref()
    }
}

impl ErrorLocationProvider for Option<Token> {
    fn loc(&self) -> Option<&SourceLocation> {
        self.as_ref().and_then(|t| t.loc.as_ref())
    }
}
