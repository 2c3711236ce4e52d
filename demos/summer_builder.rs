use argbind::{prelude::*, Arg, Args, Group, Help, Opt, Printer};
use std::process::exit;

fn main() {
    let mut verbose = false;
    let mut items: Vec<u32> = Vec::default();

    let group = Group::new()
        .add(Help::new())
        .add(
            Opt::flag(&mut verbose)
                .name("-v")
                .name("--verbose")
                .description("Show the items being summed."),
        )
        .add(
            Arg::values(&mut items, "ITEM")
                .cardinality_range(1, 0)
                .description("The items to sum."),
        );

    match group.parse_args(&Args::from_env()) {
        Ok(state) if state.is_short_circuit() => {
            Printer::terminal().print("summer", &group);
            return;
        }
        Ok(_) => {}
        Err(error) => {
            eprintln!("Parse error: {error}");
            exit(1);
        }
    }

    drop(group);

    if verbose {
        println!("Items: {items:?}");
    }

    let sum: u32 = items.iter().sum();
    println!("Sum: {sum}");
}
