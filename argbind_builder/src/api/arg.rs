use std::rc::Rc;
use std::str::FromStr;

use crate::api::*;
use crate::error::ParseError;
use crate::model::Cardinality;
use crate::parser::{Customization, HelpText, HelpTextItem, ParseState, Parser};
use crate::prelude::Collectable;
use crate::tokens::TokenStream;

/// A positional argument, matching any value-like (non option-prefixed) token.
#[derive(Debug, Clone)]
pub struct Arg<'a> {
    inner: BoundParser<'a>,
}

impl<'a> Arg<'a> {
    /// Create an argument bound onto an arbitrary [`BoundRef`].
    pub fn bound(bound: impl BoundRef + 'a, hint: impl Into<String>) -> Self {
        Self {
            inner: BoundParser::new(Rc::new(bound), hint),
        }
    }

    /// Create an argument which overwrites `variable`.
    pub fn value<T: FromStr + 'a>(variable: &'a mut T, hint: impl Into<String>) -> Self {
        Self::bound(BoundValue::new(variable), hint)
    }

    /// Create an argument which adds each value to `variable`.
    /// The cardinality defaults to unbounded.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::{prelude::*, Args, Arg, Group};
    ///
    /// let mut files: Vec<String> = Vec::default();
    /// Group::new()
    ///     .add(Arg::values(&mut files, "FILE"))
    ///     .parse_args(&Args::new("program", ["a.txt", "b.txt"]))
    ///     .unwrap();
    /// assert_eq!(files, vec!["a.txt", "b.txt"]);
    /// ```
    pub fn values<C, T>(variable: &'a mut C, hint: impl Into<String>) -> Self
    where
        C: Collectable<T> + 'a,
        T: FromStr + 'a,
    {
        Self::bound(BoundCollection::<C, T>::new(variable), hint)
    }

    /// Create an argument which invokes `callback` with each value.
    pub fn callback<F, T, R>(callback: F, hint: impl Into<String>) -> Self
    where
        F: FnMut(T) -> R + 'a,
        T: FromStr + 'a,
        R: CallbackResult,
    {
        Self::bound(BoundLambda::new(callback), hint)
    }
}

impl<'a> Bounded<'a> for Arg<'a> {
    fn inner(&self) -> &BoundParser<'a> {
        &self.inner
    }

    fn inner_mut(&mut self) -> &mut BoundParser<'a> {
        &mut self.inner
    }
}

impl<'a> Parser<'a> for Arg<'a> {
    fn parse(
        &self,
        _exe_name: &str,
        tokens: &TokenStream,
        _customization: &dyn Customization,
    ) -> Result<ParseState, ParseError> {
        match tokens.current() {
            Some(token) if token.is_argument() => {
                self.inner.bind(token.text())?;
                Ok(ParseState::matched(tokens.advance()))
            }
            _ => Ok(ParseState::no_match(tokens.clone())),
        }
    }

    fn validate(&self) -> Result<(), ParseError> {
        self.inner.validate(self.inner.hint())
    }

    fn cardinality(&self) -> Cardinality {
        self.inner.cardinality()
    }

    fn is_exhausted(&self) -> bool {
        self.inner.is_exhausted()
    }

    fn reset(&self) {
        self.inner.reset();
    }

    fn usage_text(&self) -> String {
        let cardinality = self.inner.cardinality();
        let mut usage = format!("<{}>", self.inner.hint());

        if cardinality.remaining_capacity() > 1 || cardinality.minimum() > 1 {
            usage.push_str(" ...");
        }

        if cardinality.is_optional() {
            format!("[{usage}]")
        } else {
            usage
        }
    }

    fn help_text(&self) -> HelpText {
        vec![HelpTextItem {
            option: format!("<{}>", self.inner.hint()),
            description: self.inner.description().to_string(),
        }]
    }

    fn clone_parser(&self) -> Option<Box<dyn Parser<'a> + 'a>> {
        Some(Box::new(self.clone()))
    }
}
