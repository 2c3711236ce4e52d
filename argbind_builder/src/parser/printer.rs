use terminal_size::{terminal_size, Width};

use crate::parser::{HelpTextItem, Parser};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// The description column never shrinks below this.
// 17 allows precisely 3 words (of 5 characters) with a space between them.
const MINIMUM_DESCRIPTION_WIDTH: usize = 17;
const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;

/// Renders the usage and help of a parser hierarchy.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::{prelude::*, Group, Opt, Printer};
///
/// let mut verbose = false;
/// let group = Group::new().add(
///     Opt::flag(&mut verbose)
///         .name("-v")
///         .description("Print extra details."),
/// );
///
/// assert_eq!(
///     Printer::new(None).render("program", &group),
///     "usage: program [-v]\n\noptions:\n -v   Print extra details."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    /// A printer that wraps descriptions to the width of the terminal (if any).
    pub fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Terminal width: {terminal_width:?}.");
        }

        Self::new(terminal_width)
    }

    /// A printer that wraps descriptions to `terminal_width`, or not at all for `None`.
    pub fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    /// Render the usage line followed by the options table.
    pub fn render<'a>(&self, exe_name: &str, parser: &(dyn Parser<'a> + 'a)) -> String {
        let usage = parser.usage_text();
        let mut out = if usage.is_empty() {
            format!("usage: {exe_name}")
        } else {
            format!("usage: {exe_name} {usage}")
        };

        let items = parser.help_text();

        if !items.is_empty() {
            out.push_str("\n\noptions:");

            for line in self.table(&items) {
                out.push('\n');
                out.push_str(&line);
            }
        }

        out
    }

    /// Print the rendered help to stdout.
    pub fn print<'a>(&self, exe_name: &str, parser: &(dyn Parser<'a> + 'a)) {
        println!("{}", self.render(exe_name, parser));
    }

    fn table(&self, items: &[HelpTextItem]) -> Vec<String> {
        let left_width = items
            .iter()
            .map(|item| item.option.chars().count())
            .max()
            .unwrap_or_default();
        let description_width = self.terminal_width.map(|total| {
            std::cmp::max(
                total.saturating_sub(MAIN_INDENT + left_width + PADDING_WIDTH),
                MINIMUM_DESCRIPTION_WIDTH,
            )
        });

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Help columns: left {left_width}, description {description_width:?}.");
        }

        let continuation = " ".repeat(MAIN_INDENT + left_width + PADDING_WIDTH);
        let mut lines = Vec::default();

        for item in items {
            let head = format!(
                "{indent}{option:<left_width$}{padding}",
                indent = " ".repeat(MAIN_INDENT),
                option = item.option,
                padding = " ".repeat(PADDING_WIDTH),
            );
            let mut chunks = wrap(&item.description, description_width).into_iter();

            match chunks.next() {
                Some(first) => lines.push(format!("{head}{first}")),
                None => lines.push(head.trim_end().to_string()),
            }

            for chunk in chunks {
                lines.push(format!("{continuation}{chunk}"));
            }
        }

        lines
    }
}

/// Greedily fill lines of at most `width` characters, breaking on whitespace.
/// A word longer than `width` occupies a line of its own.
fn wrap(text: &str, width: Option<usize>) -> Vec<String> {
    let width = width.unwrap_or(usize::MAX);

    let mut lines: Vec<String> = Vec::default();
    let mut current = String::default();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::*;
    use rstest::rstest;

    #[rstest]
    #[case("", Some(10), vec![])]
    #[case("   ", None, vec![])]
    #[case("one", Some(10), vec!["one"])]
    #[case("one two three", None, vec!["one two three"])]
    #[case("one  two\nthree", None, vec!["one two three"])]
    #[case("one two three", Some(7), vec!["one two", "three"])]
    #[case("one two three", Some(3), vec!["one", "two", "three"])]
    #[case("abcdefghij k", Some(4), vec!["abcdefghij", "k"])]
    fn wrap_words(#[case] text: &str, #[case] width: Option<usize>, #[case] expected: Vec<&str>) {
        assert_eq!(wrap(text, width), expected);
    }

    #[test]
    fn render_empty() {
        let group = Group::new();
        assert_eq!(Printer::new(Some(80)).render("program", &group), "usage: program");
    }

    #[test]
    fn render() {
        // Setup
        let mut verbose = false;
        let mut width: u32 = 0;
        let mut files: Vec<String> = Vec::default();
        let group = Group::new()
            .add(
                Opt::flag(&mut verbose)
                    .name("-v")
                    .name("--verbose")
                    .description("Print extra details while running."),
            )
            .add(
                Opt::value(&mut width, "WIDTH")
                    .name("--width")
                    .description("The width."),
            )
            .add(Arg::values(&mut files, "FILE").required());

        // Execute
        let message = Printer::new(Some(40)).render("program", &group);

        // Verify
        assert_eq!(
            message,
            r#"usage: program [-v|--verbose] [--width <WIDTH>] <FILE>

options:
 -v, --verbose     Print extra details
                   while running.
 --width <WIDTH>   The width.
 <FILE>"#
        );
    }

    #[test]
    fn render_narrow_terminal() {
        let mut verbose = false;
        let opt = Opt::flag(&mut verbose)
            .name("--a-rather-long-option-name")
            .description("one two three four five");

        let message = Printer::new(Some(10)).render("program", &opt);

        assert_eq!(
            message,
            r#"usage: program [--a-rather-long-option-name]

options:
 --a-rather-long-option-name   one two three
                               four five"#
        );
    }
}
