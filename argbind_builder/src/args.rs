use std::env;

/// The program name and the arguments that follow it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    exe_name: String,
    arguments: Vec<String>,
}

impl Args {
    /// Create the args for program `exe_name`.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::Args;
    ///
    /// let args = Args::new("program", ["--verbose", "file.txt"]);
    /// assert_eq!(args.exe_name(), "program");
    /// assert_eq!(args.arguments(), &["--verbose", "file.txt"]);
    /// ```
    pub fn new(
        exe_name: impl Into<String>,
        arguments: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            exe_name: exe_name.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    /// The args of this process ([`env::args`]).
    pub fn from_env() -> Self {
        env::args().collect()
    }

    /// The program name.
    pub fn exe_name(&self) -> &str {
        &self.exe_name
    }

    /// The arguments, excluding the program name.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

/// Collects a full command line: the first item is the program name.
impl<S: Into<String>> FromIterator<S> for Args {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut items = iter.into_iter();
        let exe_name = items.next().map(Into::into).unwrap_or_default();
        Self::new(exe_name, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_iter() {
        let args: Args = vec!["program", "a", "--b"].into_iter().collect();
        assert_eq!(args, Args::new("program", vec!["a", "--b"]));
    }

    #[test]
    fn from_iter_empty() {
        let arguments: &[&str] = &[];
        let args: Args = arguments.iter().copied().collect();
        assert_eq!(args.exe_name(), "");
        assert!(args.arguments().is_empty());
    }
}
