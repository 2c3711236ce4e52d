use argbind::derive::*;

#[derive(Default, ArgParser)]
#[argbind(program = "summer")]
struct Parameters {
    #[argbind(short = 'v', help = "Show the items being summed.")]
    verbose: bool,
    #[argbind(hint = "ITEM", help = "The items to sum.", required)]
    items: Vec<u32>,
}

fn main() {
    let parameters = Parameters::argbind_parse();

    if parameters.verbose {
        println!("Items: {:?}", parameters.items);
    }

    let sum: u32 = parameters.items.iter().sum();
    println!("Sum: {sum}");
}
