mod base;
mod customization;
mod printer;

pub use base::*;
pub use customization::*;
pub use printer::*;
