/// The classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Starts with an option prefix, such as `-v` or `--verbose`.
    Option,
    /// Anything else, such as `value`.
    Argument,
}

/// A lexical unit of the command line, borrowed from a [`TokenStream`](crate::TokenStream).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'t> {
    kind: TokenKind,
    text: &'t str,
    joined: bool,
}

impl<'t> Token<'t> {
    pub(crate) fn new(kind: TokenKind, text: &'t str, joined: bool) -> Self {
        Self { kind, text, joined }
    }

    /// Whether this is an option or an argument.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The text of this token, without any delimiter.
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// Whether this token was split out of a delimiter-joined argument.
    ///
    /// For `--name=value`, both `--name` and `value` are joined.
    pub fn is_joined(&self) -> bool {
        self.joined
    }

    /// Shorthand for `kind() == TokenKind::Option`.
    pub fn is_option(&self) -> bool {
        self.kind == TokenKind::Option
    }

    /// Shorthand for `kind() == TokenKind::Argument`.
    pub fn is_argument(&self) -> bool {
        self.kind == TokenKind::Argument
    }
}

impl<'t> std::fmt::Display for Token<'t> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
