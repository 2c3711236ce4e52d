//! Builder module for `argbind`.
//!
//! Command line parsers are declared by composing [`Opt`], [`Arg`], [`Help`], and [`Group`] parsers, each bound directly onto the program's variables.
//! See [documentation root](https://docs.rs/argbind/latest/argbind/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod args;
mod error;
mod model;
mod parser;
mod tokens;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use args::*;
pub use error::*;
pub use model::*;
pub use parser::*;
pub use tokens::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
