mod arg;
mod bound;
mod bound_parser;
mod group;
mod help;
mod opt;

pub use arg::*;
pub use bound::*;
pub use bound_parser::*;
pub use group::*;
pub use help::*;
pub use opt::*;
