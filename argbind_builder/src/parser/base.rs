use crate::args::Args;
use crate::error::ParseError;
use crate::model::Cardinality;
use crate::parser::{Customization, DefaultCustomization};
use crate::tokens::TokenStream;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The classification of a single match attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseOutcome {
    /// The parser matched, consuming zero or more tokens.
    Matched,
    /// The parser does not apply to the current token; nothing was consumed.
    NoMatch,
    /// The parser matched and all further matching must stop (ex: `--help`).
    ShortCircuitAll,
}

/// The outcome of a match attempt, along with the token stream that remains after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseState {
    outcome: ParseOutcome,
    remaining: TokenStream,
}

impl ParseState {
    /// Pair an `outcome` with the `remaining` tokens.
    pub fn new(outcome: ParseOutcome, remaining: TokenStream) -> Self {
        Self { outcome, remaining }
    }

    /// A match, leaving `remaining` to be parsed.
    pub fn matched(remaining: TokenStream) -> Self {
        Self::new(ParseOutcome::Matched, remaining)
    }

    /// No match; `remaining` should be the stream as it was given.
    pub fn no_match(remaining: TokenStream) -> Self {
        Self::new(ParseOutcome::NoMatch, remaining)
    }

    /// A match which stops all further matching.
    pub fn short_circuit(remaining: TokenStream) -> Self {
        Self::new(ParseOutcome::ShortCircuitAll, remaining)
    }

    /// How the attempt went.
    pub fn outcome(&self) -> ParseOutcome {
        self.outcome
    }

    /// The tokens left after this attempt.
    pub fn remaining(&self) -> &TokenStream {
        &self.remaining
    }

    pub(crate) fn into_remaining(self) -> TokenStream {
        self.remaining
    }

    /// Whether all further matching must stop.
    pub fn is_short_circuit(&self) -> bool {
        self.outcome == ParseOutcome::ShortCircuitAll
    }
}

/// A line of help: the option syntax, and its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpTextItem {
    /// The option syntax (ex: `-w, --width <WIDTH>`).
    pub option: String,
    /// The description; may be empty.
    pub description: String,
}

/// The help lines of a parser hierarchy, in declaration order.
pub type HelpText = Vec<HelpTextItem>;

/// The behaviour of all parsers: flags, options, positional arguments, and groups.
///
/// A parser attempts to match at the current position of a [`TokenStream`], and reports the position after whatever it consumed.
/// On a match it has already bound its value, so bound destinations change as matching proceeds.
/// When a parse fails, destinations bound before the failure keep their new values.
pub trait Parser<'a> {
    /// Attempt to match starting at the current token of `tokens`.
    ///
    /// Returns [`ParseOutcome::NoMatch`] (with `tokens` unchanged, and without side effects) when this parser does not apply.
    fn parse(
        &self,
        exe_name: &str,
        tokens: &TokenStream,
        customization: &dyn Customization,
    ) -> Result<ParseState, ParseError>;

    /// Check the state after matching (ex: the number of matches against the cardinality).
    fn validate(&self) -> Result<(), ParseError> {
        Ok(())
    }

    /// The number of times this parser may match.
    fn cardinality(&self) -> Cardinality {
        Cardinality::new(0, 1)
    }

    /// Whether this parser may be absent.
    fn is_optional(&self) -> bool {
        self.cardinality().is_optional()
    }

    /// The spread `maximum - minimum` of the cardinality.
    fn remaining_capacity(&self) -> usize {
        self.cardinality().remaining_capacity()
    }

    /// Whether this parser has used up the upper bound of its cardinality.
    fn is_exhausted(&self) -> bool {
        false
    }

    /// Forget any state recorded by previous matching.
    fn reset(&self) {}

    /// The usage fragment for this parser (ex: `[-v|--verbose]`).
    fn usage_text(&self) -> String {
        String::default()
    }

    /// The help lines for this parser.
    fn help_text(&self) -> HelpText {
        HelpText::default()
    }

    /// An independent copy of this parser, bound onto the same destinations.
    /// Parsers which cannot be copied return `None`.
    fn clone_parser(&self) -> Option<Box<dyn Parser<'a> + 'a>> {
        None
    }

    /// Parse the command line `args` with the default token syntax.
    ///
    /// See [`Parser::parse_args_with`].
    fn parse_args(&self, args: &Args) -> Result<ParseState, ParseError> {
        self.parse_args_with(args, &DefaultCustomization)
    }

    /// Parse the command line `args`.
    ///
    /// Parsing happens in two phases:
    /// 1. Matching, which binds each token as it is matched.
    /// Any error aborts the parse immediately, as does a token left unmatched.
    /// 2. Validation, which checks the number of matches of each parser.
    ///
    /// If matching short-circuits (ex: `--help`), validation is skipped.
    fn parse_args_with(
        &self,
        args: &Args,
        customization: &dyn Customization,
    ) -> Result<ParseState, ParseError> {
        self.reset();
        let tokens = TokenStream::customized(args.arguments(), customization);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Parsing {} argument(s) for '{}'.", args.arguments().len(), args.exe_name());
        }

        let state = self.parse(args.exe_name(), &tokens, customization)?;

        if state.is_short_circuit() {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Short-circuited at position {}.", state.remaining().position());
            }

            return Ok(state);
        }

        if let Some(token) = state.remaining().current() {
            return Err(ParseError::UnrecognizedToken {
                token: token.text().to_string(),
            });
        }

        self.validate()?;
        Ok(state)
    }
}

impl<'a> std::fmt::Debug for dyn Parser<'a> + 'a {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parser[{}]", self.usage_text())
    }
}
