use crate::error::ParseError;
use crate::parser::{Customization, HelpText, ParseOutcome, ParseState, Parser};
use crate::tokens::TokenStream;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An ordered composition of parsers.
///
/// Each token is offered to the children in the order they were added; the first child to match consumes it.
/// A child that has used up the upper bound of its cardinality is only offered a token once no other child matches it.
/// This way an over-supplied option still binds (keeping the last value), and is reported by [`Parser::validate`].
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::{prelude::*, Arg, Args, Group, Opt};
///
/// let mut verbose = false;
/// let mut width: u32 = 0;
/// let mut files: Vec<String> = Vec::default();
/// let group = Group::new()
///     .add(Opt::flag(&mut verbose).name("-v").name("--verbose"))
///     .add(Opt::value(&mut width, "WIDTH").name("--width").required())
///     .add(Arg::values(&mut files, "FILE"));
///
/// group
///     .parse_args(&Args::new("program", ["a.txt", "--width=80", "-v", "b.txt"]))
///     .unwrap();
/// drop(group);
///
/// assert!(verbose);
/// assert_eq!(width, 80);
/// assert_eq!(files, vec!["a.txt", "b.txt"]);
/// ```
#[derive(Default)]
pub struct Group<'a> {
    children: Vec<Box<dyn Parser<'a> + 'a>>,
}

impl<'a> Group<'a> {
    /// Create an empty group, which matches only an empty command line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child parser.
    pub fn add(self, parser: impl Parser<'a> + 'a) -> Self {
        self.add_boxed(Box::new(parser))
    }

    /// Add an already boxed child parser.
    pub fn add_boxed(mut self, parser: Box<dyn Parser<'a> + 'a>) -> Self {
        self.children.push(parser);
        self
    }

    /// The child parsers, in the order they were added.
    pub fn children(&self) -> &[Box<dyn Parser<'a> + 'a>] {
        &self.children
    }

    /// Offer the current token to the children, preferring those with spare capacity.
    ///
    /// A child that matches without consuming anything does not stop the search; its state is only returned when no other child consumes the token.
    fn parse_next(
        &self,
        exe_name: &str,
        tokens: &TokenStream,
        customization: &dyn Customization,
    ) -> Result<Option<ParseState>, ParseError> {
        let mut stalled = None;

        for exhausted in [false, true] {
            for child in self.children.iter() {
                if child.is_exhausted() != exhausted {
                    continue;
                }

                let state = child.parse(exe_name, tokens, customization)?;

                match state.outcome() {
                    ParseOutcome::NoMatch => {}
                    ParseOutcome::Matched if state.remaining().position() == tokens.position() => {
                        if stalled.is_none() {
                            stalled = Some(state);
                        }
                    }
                    ParseOutcome::Matched | ParseOutcome::ShortCircuitAll => {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!(
                                "Matched {} at position {} (exhausted: {exhausted}).",
                                child.usage_text(),
                                tokens.position()
                            );
                        }

                        return Ok(Some(state));
                    }
                }
            }
        }

        Ok(stalled)
    }
}

impl<'a> std::fmt::Debug for Group<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Group")
            .field("children", &self.children)
            .finish()
    }
}

impl<'a> Parser<'a> for Group<'a> {
    /// Match tokens until the stream is exhausted, or until no child matches.
    ///
    /// An unmatched token is left at the front of the remaining stream (the top-level parse reports it as unrecognized).
    /// If not even the first token matches, the group does not match.
    fn parse(
        &self,
        exe_name: &str,
        tokens: &TokenStream,
        customization: &dyn Customization,
    ) -> Result<ParseState, ParseError> {
        let mut remaining = tokens.clone();
        let mut matched = false;

        while !remaining.is_exhausted() {
            match self.parse_next(exe_name, &remaining, customization)? {
                Some(state) if state.is_short_circuit() => return Ok(state),
                Some(state) if state.remaining().position() == remaining.position() => {
                    // No progress; the token is left for the caller.
                    matched = true;
                    break;
                }
                Some(state) => {
                    remaining = state.into_remaining();
                    matched = true;
                }
                None => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("No match at position {}.", remaining.position());
                    }

                    break;
                }
            }
        }

        if matched || tokens.is_exhausted() {
            Ok(ParseState::matched(remaining))
        } else {
            Ok(ParseState::no_match(remaining))
        }
    }

    /// Validate each child in order, reporting the first failure.
    fn validate(&self) -> Result<(), ParseError> {
        for child in self.children.iter() {
            child.validate()?;
        }

        Ok(())
    }

    fn reset(&self) {
        for child in self.children.iter() {
            child.reset();
        }
    }

    fn usage_text(&self) -> String {
        self.children
            .iter()
            .map(|child| child.usage_text())
            .filter(|usage| !usage.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn help_text(&self) -> HelpText {
        self.children
            .iter()
            .flat_map(|child| child.help_text())
            .collect()
    }

    /// Clones every child; `None` if any child cannot be cloned.
    fn clone_parser(&self) -> Option<Box<dyn Parser<'a> + 'a>> {
        let children = self
            .children
            .iter()
            .map(|child| child.clone_parser())
            .collect::<Option<Vec<_>>>()?;
        Some(Box::new(Group { children }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::*;
    use crate::args::Args;
    use crate::error::ErrorKind;
    use crate::model::Cardinality;
    use crate::parser::{Customized, DefaultCustomization};
    use rstest::rstest;

    fn args(arguments: &[&str]) -> Args {
        Args::new("program", arguments.iter().copied())
    }

    #[test]
    fn empty_group() {
        let group = Group::new();
        let arguments: &[&str] = &[];
        let state = group.parse_args(&args(arguments)).unwrap();
        assert_eq!(state.outcome(), ParseOutcome::Matched);
        assert_eq!(group.usage_text(), "");
        assert_eq!(group.help_text(), vec![]);
    }

    #[test]
    fn empty_group_unrecognized() {
        let group = Group::new();
        assert_eq!(
            group.parse_args(&args(&["x"])).unwrap_err(),
            ParseError::UnrecognizedToken {
                token: "x".to_string(),
            }
        );
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec!["a"])]
    #[case(vec!["a", "b", "c"])]
    #[case(vec!["a=b", "", "-", "c d"])]
    fn positional_catch_all(#[case] arguments: Vec<&str>) {
        // Setup
        let mut verbose = false;
        let mut width: u32 = 0;
        let mut items: Vec<String> = Vec::default();
        let group = Group::new()
            .add(Opt::flag(&mut verbose).name("-v"))
            .add(Opt::value(&mut width, "WIDTH").name("--width"))
            .add(Arg::values(&mut items, "ITEM"));

        // Execute
        group.parse_args(&args(&arguments)).unwrap();

        // Verify
        drop(group);
        assert_eq!(items, arguments);
        assert!(!verbose);
        assert_eq!(width, 0);
    }

    #[test]
    fn single_value_twice() {
        // Setup
        let mut name = String::default();
        let group = Group::new().add(Opt::value(&mut name, "NAME").name("--name"));

        // Execute
        let error = group
            .parse_args(&args(&["--name", "first", "--name=second"]))
            .unwrap_err();

        // Verify
        assert_eq!(
            error,
            ParseError::Cardinality {
                name: "--name".to_string(),
                expected: Cardinality::new(0, 1),
                observed: 2,
            }
        );
        drop(group);
        assert_eq!(name, "second");
    }

    #[test]
    fn exhausted_child_yields() {
        // Setup
        let mut first: u32 = 0;
        let mut second: u32 = 0;
        let group = Group::new()
            .add(Arg::value(&mut first, "FIRST").required())
            .add(Arg::value(&mut second, "SECOND").required());

        // Execute
        group.parse_args(&args(&["1", "2"])).unwrap();

        // Verify
        drop(group);
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn too_many_positionals() {
        let mut first: u32 = 0;
        let group = Group::new().add(Arg::value(&mut first, "FIRST").required());

        let error = group.parse_args(&args(&["1", "2"])).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Cardinality);
        drop(group);
        assert_eq!(first, 2);
    }

    #[test]
    fn unrecognized_option() {
        let mut items: Vec<String> = Vec::default();
        let group = Group::new().add(Arg::values(&mut items, "ITEM"));

        let error = group
            .parse_args(&args(&["a", "--unknown", "b"]))
            .unwrap_err();

        assert_eq!(
            error,
            ParseError::UnrecognizedToken {
                token: "--unknown".to_string(),
            }
        );
        drop(group);
        // Binds before the failure are kept.
        assert_eq!(items, vec!["a".to_string()]);
    }

    #[test]
    fn error_short_circuits() {
        let mut width: u32 = 0;
        let mut items: Vec<String> = Vec::default();
        let group = Group::new()
            .add(Opt::value(&mut width, "WIDTH").name("--width"))
            .add(Arg::values(&mut items, "ITEM"));

        let error = group
            .parse_args(&args(&["a", "--width", "abc", "b"]))
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Conversion);
        drop(group);
        assert_eq!(width, 0);
        assert_eq!(items, vec!["a".to_string()]);
    }

    #[test]
    fn nested_group() {
        // Setup
        let mut verbose = false;
        let mut quiet = false;
        let mut items: Vec<String> = Vec::default();
        let group = Group::new()
            .add(Group::new().add(Opt::flag(&mut verbose).name("-v")))
            .add(Group::new().add(Opt::flag(&mut quiet).name("-q")))
            .add(Arg::values(&mut items, "ITEM"));

        // Execute
        group.parse_args(&args(&["-q", "a", "-v"])).unwrap();

        // Verify
        drop(group);
        assert!(verbose);
        assert!(quiet);
        assert_eq!(items, vec!["a".to_string()]);
    }

    #[test]
    fn validate_first_failure() {
        let mut a: u32 = 0;
        let mut b: u32 = 0;
        let group = Group::new()
            .add(Opt::value(&mut a, "A").name("-a").required())
            .add(Opt::value(&mut b, "B").name("-b").required());

        let error = group.parse_args(&args(&[])).unwrap_err();

        assert_eq!(
            error,
            ParseError::Cardinality {
                name: "-a".to_string(),
                expected: Cardinality::new(1, 1),
                observed: 0,
            }
        );
    }

    #[test]
    fn required_absent_matches() {
        // Setup
        let mut name = String::default();
        let group = Group::new().add(Opt::value(&mut name, "NAME").name("--name").required());
        let arguments: &[&str] = &[];
        let stream = TokenStream::new(arguments.iter().copied(), " =", "-");

        // Execute
        let state = group
            .parse("program", &stream, &DefaultCustomization)
            .unwrap();

        // Verify
        assert_eq!(state.outcome(), ParseOutcome::Matched);
        assert_matches!(group.validate(), Err(ParseError::Cardinality { .. }));
    }

    #[test]
    fn customized_syntax() {
        // Setup
        let mut limit: u32 = 0;
        let mut reverse = false;
        let mut words: Vec<String> = Vec::default();
        let group = Group::new()
            .add(Opt::value(&mut limit, "LIMIT").name("/limit"))
            .add(Opt::flag(&mut reverse).name("/r"))
            .add(Arg::values(&mut words, "WORD"));
        let customization = Customized::new(":", "/");

        // Execute
        group
            .parse_args_with(
                &args(&["/limit:3", "-x", "/r", "a=b"]),
                &customization,
            )
            .unwrap();

        // Verify
        drop(group);
        assert_eq!(limit, 3);
        assert!(reverse);
        assert_eq!(words, vec!["-x".to_string(), "a=b".to_string()]);
    }

    #[test]
    fn customized_syntax_unrecognized() {
        let mut words: Vec<String> = Vec::default();
        let group = Group::new().add(Arg::values(&mut words, "WORD"));

        let error = group
            .parse_args_with(&args(&["a", "/limit:3"]), &Customized::new(":", "/"))
            .unwrap_err();

        assert_eq!(
            error,
            ParseError::UnrecognizedToken {
                token: "/limit".to_string(),
            }
        );
    }

    #[test]
    fn reparse_resets() {
        let mut name = String::default();
        let group = Group::new().add(Opt::value(&mut name, "NAME").name("--name"));

        group.parse_args(&args(&["--name", "a"])).unwrap();
        group.parse_args(&args(&["--name", "b"])).unwrap();

        drop(group);
        assert_eq!(name, "b");
    }

    #[test]
    fn usage_and_help() {
        let mut verbose = false;
        let mut width: u32 = 0;
        let mut items: Vec<String> = Vec::default();
        let group = Group::new()
            .add(Opt::flag(&mut verbose).name("-v").description("Verbose."))
            .add(Opt::value(&mut width, "WIDTH").name("--width"))
            .add(Arg::values(&mut items, "ITEM").cardinality_range(1, 0));

        assert_eq!(group.usage_text(), "[-v] [--width <WIDTH>] <ITEM> ...");
        let options: Vec<String> = group
            .help_text()
            .into_iter()
            .map(|item| item.option)
            .collect();
        assert_eq!(options, vec!["-v", "--width <WIDTH>", "<ITEM>"]);
    }

    #[test]
    fn clone_group() {
        let mut verbose = false;
        {
            let group = Group::new().add(Opt::flag(&mut verbose).name("-v"));
            let clone = group.clone_parser().unwrap();
            clone.parse_args(&args(&["-v"])).unwrap();
            assert_eq!(clone.usage_text(), group.usage_text());
        }
        assert!(verbose);
    }

    struct Opaque;

    impl<'a> Parser<'a> for Opaque {
        fn parse(
            &self,
            _exe_name: &str,
            tokens: &TokenStream,
            _customization: &dyn Customization,
        ) -> Result<ParseState, ParseError> {
            Ok(ParseState::no_match(tokens.clone()))
        }
    }

    #[test]
    fn clone_group_opaque() {
        let group = Group::new().add(Opaque);
        assert!(group.clone_parser().is_none());
    }

    struct Marker;

    impl<'a> Parser<'a> for Marker {
        fn parse(
            &self,
            _exe_name: &str,
            tokens: &TokenStream,
            _customization: &dyn Customization,
        ) -> Result<ParseState, ParseError> {
            Ok(ParseState::matched(tokens.clone()))
        }
    }

    #[test]
    fn zero_consumption_child_yields() {
        // Setup
        let mut items: Vec<String> = Vec::default();
        let group = Group::new()
            .add(Marker)
            .add(Arg::values(&mut items, "ITEM"));

        // Execute
        group.parse_args(&args(&["a", "b"])).unwrap();

        // Verify
        drop(group);
        assert_eq!(items, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn zero_consumption_child_alone() {
        let group = Group::new().add(Marker);

        let error = group.parse_args(&args(&["a"])).unwrap_err();

        assert_eq!(
            error,
            ParseError::UnrecognizedToken {
                token: "a".to_string(),
            }
        );
    }
}
