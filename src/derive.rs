//! Derive Api for `argbind` configuration.
//!
//! ### Getting Started
//! Use the derive Api by instrumenting a parameter struct `S` with `#[derive(Default, ArgParser)]`.
//! This generates the following methods:
//! * `S::argbind_parse() -> S`: parses the Cli of this process.
//! Prints help and exits `0` on `--help`, or prints the error and exits `1` when parsing fails.
//! * `S::argbind_parse_args(&Args) -> Result<Option<S>, ParseError>`: parses the given args (`None` when help is requested).
//! * `s.argbind_group() -> Group`: the parser bound onto the fields of `s`, for further composition.
//!
//! ```no_run
#![doc = include_str!("../demos/summer_derive.rs")]
//! ```
//!
//! ### Parser Configuration
//! * `#[argbind(program = "..")]` sets the program name shown in the help (defaults to the crate name).
//!
//! ### Parameter Configuration
//! The implicit Cli inference uses the following rules:
//! ```console
//! Type        | Parser
//! -----------------------------------
//! bool        | Opt::flag(..)
//! Option<T>   | Opt::optional_value(..)
//! Vec<T>      | Arg::values(..)
//! HashSet<T>  | Arg::values(..)
//! T           | Arg::value(..).required()
//! ```
//!
//! Options are named `--field-name`, after the field (with `_` replaced by `-`).
//! The hint defaults to the upper-cased field name.
//! The explicit field attributes may be combined as necessary:
//! * `#[argbind(argument)]` or `#[argbind(option)]` to explicitly use `Arg` or `Opt`, respectively.
//! Only one of these may be used on the same field.
//! * `#[argbind(short = C)]` to add the short name `-C` to an option.
//! `C` must be a char value (ex: `'c'`).
//! * `#[argbind(hint = "..")]` to name the value in the help (ex: `<FILE>`).
//! * `#[argbind(help = "..")]` to describe the parameter in the help.
//! * `#[argbind(required)]` to require precisely one match (or at least one, for a collection).
//!
//! A partial example of these rules is provided as follows:
//! ```ignore
//! #[derive(Default, ArgParser)]
//! struct Parameters {
//!     quick: usize,
//!     // the above generates:
//!     //  .add(Arg::value(&mut self.quick, "QUICK").required())
//!
//!     #[argbind(option, short = 'b')]
//!     brown: usize,
//!     // the above generates:
//!     //  .add(Opt::value(&mut self.brown, "BROWN").name("-b").name("--brown"))
//!
//!     #[argbind(option, required, help = "The jumps.")]
//!     fox_jumps: Vec<usize>,
//!     // the above generates:
//!     //  .add(Opt::values(&mut self.fox_jumps, "FOX_JUMPS").name("--fox-jumps").cardinality_range(1, 0).description("The jumps."))
//! }
//! ```
pub use argbind_derive::ArgParser;
