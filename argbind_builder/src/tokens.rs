mod model;

pub use model::*;

use std::rc::Rc;

use crate::parser::Customization;

#[derive(Debug)]
struct TokenSource {
    arguments: Vec<String>,
    delimiters: String,
    prefix: String,
}

impl TokenSource {
    fn is_option(&self, argument: &str) -> bool {
        let mut characters = argument.chars();

        match characters.next() {
            // A lone prefix character (ex: `-`) is conventionally a value.
            Some(first) => self.prefix.contains(first) && characters.next().is_some(),
            None => false,
        }
    }

    /// Find the first delimiter in an option-like argument, as `(byte index, byte width)`.
    fn split_point(&self, argument: &str) -> Option<(usize, usize)> {
        if !self.is_option(argument) {
            return None;
        }

        argument
            .char_indices()
            .skip(1)
            .find(|(_, character)| self.delimiters.contains(*character))
            .map(|(index, character)| (index, character.len_utf8()))
    }
}

/// An immutable cursor over the command line arguments.
///
/// Cloning is cheap (the arguments are shared), and [`TokenStream::advance`] returns a new cursor rather than moving this one.
/// This lets sibling parsers each attempt a match from "the same" position before one of them commits.
///
/// An option-like argument containing a delimiter yields two tokens.
/// For example, `--name=value` yields `--name` followed by `value`.
#[derive(Debug, Clone)]
pub struct TokenStream {
    source: Rc<TokenSource>,
    position: usize,
    // Positioned at the value half of a delimiter-joined argument.
    split: bool,
}

impl TokenStream {
    /// Create a token stream over `arguments`.
    ///
    /// Any character in `delimiters` may split an option from its value (only the first occurrence splits).
    /// Any character in `prefix` marks an argument as option-like.
    pub fn new(
        arguments: impl IntoIterator<Item = impl Into<String>>,
        delimiters: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            source: Rc::new(TokenSource {
                arguments: arguments.into_iter().map(Into::into).collect(),
                delimiters: delimiters.into(),
                prefix: prefix.into(),
            }),
            position: 0,
            split: false,
        }
    }

    /// Create a token stream over `arguments`, using the delimiters and prefix of `customization`.
    pub fn customized(arguments: &[String], customization: &dyn Customization) -> Self {
        Self::new(
            arguments.iter().cloned(),
            customization.token_delimiters(),
            customization.option_prefix(),
        )
    }

    /// The token at this position, or `None` once exhausted.
    pub fn current(&self) -> Option<Token<'_>> {
        let argument = self.source.arguments.get(self.position)?;

        let token = match self.source.split_point(argument) {
            Some((index, width)) if self.split => {
                Token::new(TokenKind::Argument, &argument[index + width..], true)
            }
            Some((index, _)) => Token::new(TokenKind::Option, &argument[..index], true),
            None if self.source.is_option(argument) => {
                Token::new(TokenKind::Option, argument, false)
            }
            None => Token::new(TokenKind::Argument, argument, false),
        };

        Some(token)
    }

    /// A cursor positioned after the current token.
    /// Advancing an exhausted stream returns an equivalent exhausted stream.
    pub fn advance(&self) -> Self {
        match self.source.arguments.get(self.position) {
            Some(argument) if !self.split && self.source.split_point(argument).is_some() => {
                Self {
                    source: Rc::clone(&self.source),
                    position: self.position,
                    split: true,
                }
            }
            Some(_) => Self {
                source: Rc::clone(&self.source),
                position: self.position + 1,
                split: false,
            },
            None => self.clone(),
        }
    }

    /// Whether no tokens remain.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.source.arguments.len()
    }

    /// The index of the argument this cursor points into.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl PartialEq for TokenStream {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.source, &other.source)
            && self.position == other.position
            && self.split == other.split
    }
}

impl Eq for TokenStream {}
