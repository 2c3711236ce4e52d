use argbind::{prelude::*, Args, Customized, Group, Opt};
use std::process::exit;

// A Windows style command line: `/reverse`, `/limit:3`.
fn main() {
    let mut reverse = false;
    let mut limit: Option<usize> = None;
    let mut words: Vec<String> = Vec::default();

    let group = Group::new()
        .add(
            Opt::flag(&mut reverse)
                .name("/reverse")
                .description("Sort in descending order."),
        )
        .add(
            Opt::optional_value(&mut limit, "N")
                .name("/limit")
                .description("Only print the first N words."),
        )
        .add(Opt::callback(
            |word: String| {
                if word.is_empty() {
                    Err("words cannot be empty")
                } else {
                    words.push(word);
                    Ok(())
                }
            },
            "WORD",
        )
        .name("/word")
        .cardinality_exact(0)
        .description("A word to sort."));

    let customization = Customized::new(":", "/");

    if let Err(error) = group.parse_args_with(&Args::from_env(), &customization) {
        eprintln!("Parse error: {error}");
        exit(1);
    }

    drop(group);
    words.sort();

    if reverse {
        words.reverse();
    }

    for word in words.iter().take(limit.unwrap_or(usize::MAX)) {
        println!("{word}");
    }
}
