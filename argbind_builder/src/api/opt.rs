use std::rc::Rc;
use std::str::FromStr;

use crate::api::*;
use crate::error::ParseError;
use crate::model::Cardinality;
use crate::parser::{Customization, HelpText, HelpTextItem, ParseState, Parser};
use crate::prelude::Collectable;
use crate::tokens::TokenStream;

/// A named option, such as `-n VALUE`/`--name VALUE`, or the flag `-v`/`--verbose`.
///
/// Option names include their prefix and are matched verbatim.
/// A value option binds the token that follows its name (`--name value`, or equivalently `--name=value`).
/// A flag binds `true` by its presence alone (or the `bool` joined onto it: `--verbose=false`).
#[derive(Debug, Clone)]
pub struct Opt<'a> {
    inner: BoundParser<'a>,
    names: Vec<String>,
}

impl<'a> Opt<'a> {
    /// Create an option bound onto an arbitrary [`BoundRef`].
    pub fn bound(bound: impl BoundRef + 'a, hint: impl Into<String>) -> Self {
        Self {
            inner: BoundParser::new(Rc::new(bound), hint),
            names: Vec::default(),
        }
    }

    /// Create an option which overwrites `variable` with each value.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::{prelude::*, Args, Opt};
    ///
    /// let mut width: u32 = 0;
    /// Opt::value(&mut width, "WIDTH")
    ///     .name("-w")
    ///     .name("--width")
    ///     .parse_args(&Args::new("program", ["--width=80"]))
    ///     .unwrap();
    /// assert_eq!(width, 80);
    /// ```
    pub fn value<T: FromStr + 'a>(variable: &'a mut T, hint: impl Into<String>) -> Self {
        Self::bound(BoundValue::new(variable), hint)
    }

    /// Create an option which sets `variable` to `Some` value.
    pub fn optional_value<T: FromStr + 'a>(
        variable: &'a mut Option<T>,
        hint: impl Into<String>,
    ) -> Self {
        Self::bound(BoundOptional::new(variable), hint)
    }

    /// Create an option which adds each value to `variable`.
    /// The cardinality defaults to unbounded.
    pub fn values<C, T>(variable: &'a mut C, hint: impl Into<String>) -> Self
    where
        C: Collectable<T> + 'a,
        T: FromStr + 'a,
    {
        Self::bound(BoundCollection::<C, T>::new(variable), hint)
    }

    /// Create an option which invokes `callback` with each value.
    pub fn callback<F, T, R>(callback: F, hint: impl Into<String>) -> Self
    where
        F: FnMut(T) -> R + 'a,
        T: FromStr + 'a,
        R: CallbackResult,
    {
        Self::bound(BoundLambda::new(callback), hint)
    }

    /// Create a flag which sets `variable` to `true`.
    pub fn flag(variable: &'a mut bool) -> Self {
        Self::bound(BoundFlag::new(variable), "")
    }

    /// Create a flag which invokes `callback` with `true`.
    pub fn flag_callback<F, R>(callback: F) -> Self
    where
        F: FnMut(bool) -> R + 'a,
        R: CallbackResult,
    {
        Self::bound(BoundFlagLambda::new(callback), "")
    }

    /// Add a name for this option, including its prefix (ex: `-n` or `--name`).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// The names of this option, in the order they were added.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    fn is_named(&self, text: &str) -> bool {
        self.names.iter().any(|name| name == text)
    }

    fn display_name(&self) -> String {
        match self.names.iter().max_by_key(|name| name.len()) {
            Some(name) => name.clone(),
            None => self.inner.hint().to_string(),
        }
    }
}

impl<'a> Bounded<'a> for Opt<'a> {
    fn inner(&self) -> &BoundParser<'a> {
        &self.inner
    }

    fn inner_mut(&mut self) -> &mut BoundParser<'a> {
        &mut self.inner
    }
}

impl<'a> Parser<'a> for Opt<'a> {
    fn parse(
        &self,
        _exe_name: &str,
        tokens: &TokenStream,
        _customization: &dyn Customization,
    ) -> Result<ParseState, ParseError> {
        let token = match tokens.current() {
            Some(token) if token.is_option() && self.is_named(token.text()) => token,
            _ => return Ok(ParseState::no_match(tokens.clone())),
        };
        let next = tokens.advance();

        if self.inner.is_flag() {
            if token.is_joined() {
                // `--flag=false`: the joined half is always present after a split.
                if let Some(value) = next.current() {
                    self.inner.bind(value.text())?;
                    return Ok(ParseState::matched(next.advance()));
                }
            }

            self.inner.set_flag(true)?;
            return Ok(ParseState::matched(next));
        }

        match next.current() {
            Some(value) if value.is_argument() => {
                self.inner.bind(value.text())?;
                Ok(ParseState::matched(next.advance()))
            }
            _ => Err(ParseError::MissingValue {
                option: token.text().to_string(),
            }),
        }
    }

    fn validate(&self) -> Result<(), ParseError> {
        self.inner.validate(self.display_name())
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
        let mut usage = self.names.join("|");

        if !self.inner.is_flag() {
            usage.push_str(&format!(" <{}>", self.inner.hint()));
        }

        let cardinality = self.inner.cardinality();

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
        let mut option = self.names.join(", ");

        if !self.inner.is_flag() {
            option.push_str(&format!(" <{}>", self.inner.hint()));
        }

        vec![HelpTextItem {
            option,
            description: self.inner.description().to_string(),
        }]
    }

    fn clone_parser(&self) -> Option<Box<dyn Parser<'a> + 'a>> {
        Some(Box::new(self.clone()))
    }
}
