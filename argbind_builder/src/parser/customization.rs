/// The token syntax of the command line.
pub trait Customization {
    /// The characters that split an option from its value within a single argument (ex: `=` in `--name=value`).
    fn token_delimiters(&self) -> &str;

    /// The characters that mark an argument as an option (ex: `-` in `-n` and `--name`).
    fn option_prefix(&self) -> &str;
}

/// Splits on space or `=`, and marks options with `-`.
/// This yields the conventional `-n` short and `--name` long options.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultCustomization;

impl Customization for DefaultCustomization {
    fn token_delimiters(&self) -> &str {
        " ="
    }

    fn option_prefix(&self) -> &str {
        "-"
    }
}

/// A user specified token syntax.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::{Customization, Customized};
///
/// // Windows style: `/name:value`.
/// let customized = Customized::new(":", "/");
/// assert_eq!(customized.option_prefix(), "/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customized {
    delimiters: String,
    prefix: String,
}

impl Customized {
    /// Create a customization from the `delimiters` and `prefix` character sets.
    pub fn new(delimiters: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            delimiters: delimiters.into(),
            prefix: prefix.into(),
        }
    }
}

impl Customization for Customized {
    fn token_delimiters(&self) -> &str {
        &self.delimiters
    }

    fn option_prefix(&self) -> &str {
        &self.prefix
    }
}
