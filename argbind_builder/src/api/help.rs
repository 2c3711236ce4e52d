use crate::api::*;
use crate::error::ParseError;
use crate::model::Cardinality;
use crate::parser::{Customization, HelpText, ParseOutcome, ParseState, Parser};
use crate::tokens::TokenStream;

const HELP_NAMES: [&str; 3] = ["-h", "-?", "--help"];
const HELP_DESCRIPTION: &str = "Display usage information.";

/// The help flag (`-h`, `-?`, `--help`).
///
/// A match stops all further matching, and skips validation.
/// Check the outcome with [`ParseState::is_short_circuit`].
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::{prelude::*, Arg, Args, Group, Help};
///
/// let mut value: u32 = 0;
/// let group = Group::new()
///     .add(Help::new())
///     .add(Arg::value(&mut value, "VALUE").required());
///
/// let state = group
///     .parse_args(&Args::new("program", ["--help", "not-a-number"]))
///     .unwrap();
/// assert!(state.is_short_circuit());
/// ```
#[derive(Debug, Clone)]
pub struct Help<'a> {
    inner: Opt<'a>,
}

impl<'a> Help<'a> {
    /// Create a help flag without a destination.
    pub fn new() -> Self {
        Self::from_opt(Opt::flag_callback(|_: bool| ()))
    }

    /// Create a help flag which also sets `show_help` to `true` when matched.
    ///
    /// A joined value (ex: `--help=false`) does not change this.
    pub fn flag(show_help: &'a mut bool) -> Self {
        Self::from_opt(Opt::flag_callback(move |_: bool| *show_help = true))
    }

    fn from_opt(opt: Opt<'a>) -> Self {
        let inner = HELP_NAMES
            .iter()
            .fold(opt, |opt, name| opt.name(*name))
            .description(HELP_DESCRIPTION);
        Self { inner }
    }
}

impl<'a> Default for Help<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Parser<'a> for Help<'a> {
    fn parse(
        &self,
        exe_name: &str,
        tokens: &TokenStream,
        customization: &dyn Customization,
    ) -> Result<ParseState, ParseError> {
        let state = self.inner.parse(exe_name, tokens, customization)?;

        match state.outcome() {
            ParseOutcome::NoMatch => Ok(state),
            _ => Ok(ParseState::short_circuit(state.into_remaining())),
        }
    }

    fn cardinality(&self) -> Cardinality {
        self.inner.cardinality()
    }

    fn reset(&self) {
        self.inner.reset();
    }

    fn usage_text(&self) -> String {
        self.inner.usage_text()
    }

    fn help_text(&self) -> HelpText {
        self.inner.help_text()
    }

    fn clone_parser(&self) -> Option<Box<dyn Parser<'a> + 'a>> {
        Some(Box::new(self.clone()))
    }
}
