use std::cell::Cell;
use std::rc::Rc;

use crate::api::BoundRef;
use crate::error::ParseError;
use crate::model::Cardinality;

/// The state common to every parser that binds onto a destination.
///
/// The binding is shared (`Rc`) so that cloned parsers still bind onto the same destination.
/// The match count is recorded during matching, and checked against the cardinality in [`BoundParser::validate`].
#[derive(Clone)]
pub struct BoundParser<'a> {
    bound: Rc<dyn BoundRef + 'a>,
    hint: String,
    description: String,
    cardinality: Cardinality,
    matches: Cell<usize>,
}

impl<'a> std::fmt::Debug for BoundParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundParser")
            .field("hint", &self.hint)
            .field("description", &self.description)
            .field("cardinality", &self.cardinality)
            .field("matches", &self.matches.get())
            .finish()
    }
}

impl<'a> BoundParser<'a> {
    /// Create a bound parser.
    /// Container destinations default to an unbounded cardinality, all others to `(0, 1)`.
    pub fn new(bound: Rc<dyn BoundRef + 'a>, hint: impl Into<String>) -> Self {
        let cardinality = if bound.is_container() {
            Cardinality::exactly(0)
        } else {
            Cardinality::new(0, 1)
        };

        Self {
            bound,
            hint: hint.into(),
            description: String::default(),
            cardinality,
            matches: Cell::new(0),
        }
    }

    /// The name of the value in usage and errors (ex: `FILE`).
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// The help description; empty unless configured.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The number of times this parser may match.
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Whether the destination is set by presence alone.
    pub fn is_flag(&self) -> bool {
        self.bound.is_flag()
    }

    /// The number of matches since the last [`BoundParser::reset`].
    pub fn matches(&self) -> usize {
        self.matches.get()
    }

    pub(crate) fn set_description(&mut self, description: String) {
        self.description = description;
    }

    pub(crate) fn set_cardinality(&mut self, cardinality: Cardinality) {
        self.cardinality = cardinality;
    }

    /// Bind the token onto the destination, counting the match only when it succeeds.
    pub(crate) fn bind(&self, token: &str) -> Result<(), ParseError> {
        self.bound.bind(token)?;
        self.matched();
        Ok(())
    }

    pub(crate) fn set_flag(&self, flag: bool) -> Result<(), ParseError> {
        self.bound.set_flag(flag)?;
        self.matched();
        Ok(())
    }

    fn matched(&self) {
        self.matches.set(self.matches.get() + 1);
    }

    pub(crate) fn reset(&self) {
        self.matches.set(0);
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.cardinality.is_exhausted(self.matches.get())
    }

    /// Check the match count against the cardinality; `name` identifies this parser in the error.
    pub(crate) fn validate(&self, name: impl Into<String>) -> Result<(), ParseError> {
        let observed = self.matches.get();

        if self.cardinality.admits(observed) {
            Ok(())
        } else {
            Err(ParseError::Cardinality {
                name: name.into(),
                expected: self.cardinality,
                observed,
            })
        }
    }
}

/// Fluent configuration for parsers built on a [`BoundParser`].
///
/// Each method configures the parser's own metadata and returns it for chaining.
/// None of these affect the bound destination.
pub trait Bounded<'a>: Sized {
    /// The underlying bound parser.
    fn inner(&self) -> &BoundParser<'a>;

    /// The underlying bound parser, for configuration.
    fn inner_mut(&mut self) -> &mut BoundParser<'a>;

    /// Document the description for this parser.
    /// If repeated, only the final description applies.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::{prelude::*, Opt};
    ///
    /// let mut verbose = false;
    /// let opt = Opt::flag(&mut verbose)
    ///     .name("--verbose")
    ///     .description("--this will get discarded--")
    ///     .description("Print extra details.");
    /// assert_eq!(opt.inner().description(), "Print extra details.");
    /// ```
    fn description(mut self, description: impl Into<String>) -> Self {
        self.inner_mut().set_description(description.into());
        self
    }

    /// Require precisely one match: `(1, 1)`.
    fn required(self) -> Self {
        self.cardinality_range(1, 1)
    }

    /// Allow zero or one match: `(0, 1)`.
    fn optional(self) -> Self {
        self.cardinality_range(0, 1)
    }

    /// Require precisely `n` matches: `(n, n)`.
    /// Notice, `n = 0` means any number of matches.
    fn cardinality_exact(mut self, n: usize) -> Self {
        self.inner_mut().set_cardinality(Cardinality::exactly(n));
        self
    }

    /// Require between `n` and `m` matches: `(n, m)`.
    /// Notice, `m = 0` means at least `n` matches.
    ///
    /// ### Panics
    /// When `m` is non-zero and `n > m`.
    fn cardinality_range(mut self, n: usize, m: usize) -> Self {
        self.inner_mut().set_cardinality(Cardinality::new(n, m));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Arg, BoundCollection, BoundValue};
    use rand::{thread_rng, Rng};

    #[test]
    fn default_cardinality() {
        let mut variable: u32 = 0;
        let parser = BoundParser::new(Rc::new(BoundValue::new(&mut variable)), "VALUE");
        assert_eq!(parser.cardinality(), Cardinality::new(0, 1));
        assert_eq!(parser.hint(), "VALUE");
        assert_eq!(parser.description(), "");

        let mut variable: Vec<u32> = Vec::default();
        let parser = BoundParser::new(Rc::new(BoundCollection::new(&mut variable)), "VALUES");
        assert_eq!(parser.cardinality(), Cardinality::new(0, 0));
        assert!(parser.cardinality().is_unbounded());
    }

    #[test]
    fn bind_counts_success_only() {
        let mut variable: u32 = 0;
        let parser = BoundParser::new(Rc::new(BoundValue::new(&mut variable)), "VALUE");
        parser.bind("1").unwrap();
        assert_matches!(parser.bind("x"), Err(ParseError::Conversion { .. }));
        assert_eq!(parser.matches(), 1);
        assert!(parser.is_exhausted());

        parser.reset();
        assert_eq!(parser.matches(), 0);
        assert!(!parser.is_exhausted());
    }

    #[test]
    fn clone_shares_destination() {
        let mut variable: u32 = 0;
        {
            let parser = BoundParser::new(Rc::new(BoundValue::new(&mut variable)), "VALUE");
            let clone = parser.clone();
            parser.bind("1").unwrap();
            clone.bind("2").unwrap();
            assert_eq!(parser.matches(), 1);
            assert_eq!(clone.matches(), 1);
        }
        assert_eq!(variable, 2);
    }

    #[test]
    fn validate() {
        for _ in 0..100 {
            let maximum: usize = thread_rng().gen_range(1..10);
            let minimum: usize = thread_rng().gen_range(0..=maximum);
            let mut variable: Vec<u32> = Vec::default();
            let mut parser =
                BoundParser::new(Rc::new(BoundCollection::new(&mut variable)), "VALUES");
            parser.set_cardinality(Cardinality::new(minimum, maximum));

            for i in 0..minimum {
                parser.bind(&i.to_string()).unwrap();
            }

            assert_eq!(parser.validate("VALUES"), Ok(()));

            if minimum > 0 {
                parser.reset();

                for i in 0..(minimum - 1) {
                    parser.bind(&i.to_string()).unwrap();
                }

                assert_eq!(
                    parser.validate("VALUES"),
                    Err(ParseError::Cardinality {
                        name: "VALUES".to_string(),
                        expected: Cardinality::new(minimum, maximum),
                        observed: minimum - 1,
                    })
                );
            }
        }
    }

    #[test]
    fn bounded_configuration() {
        let mut variable: u32 = 0;
        let arg = Arg::value(&mut variable, "VALUE")
            .description("The value.")
            .required();

        assert_eq!(arg.inner().hint(), "VALUE");
        assert_eq!(arg.inner().description(), "The value.");
        assert_eq!(arg.inner().cardinality(), Cardinality::new(1, 1));
    }
}
