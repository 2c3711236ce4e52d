//! `argbind` is a combinator style command line parser for Rust.
//!
//! A command line parser is declared by composing small parsers, each bound directly onto a variable of the program.
//! Parsing then writes straight into those variables: there is no intermediate "matches" structure to query.
//! `argbind` prioritizes the following design concerns:
//! * *Type safe argument parsing*:
//! The user should not call any `&str -> T` conversion functions directly.
//! Every destination converts via [`std::str::FromStr`].
//! * *Composable parsers*:
//! Options, positional arguments, and groups of parsers all share the one [`Parser`] interface.
//! Groups nest, so a program's parser may be assembled from reusable pieces.
//! * *Explicit cardinality*:
//! Every parser states how many times it may match, and this is checked after matching completes.
//! * *Basic UX*:
//! The help output is generated from the same declarations, and wraps to the width of the terminal.
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/summer_derive.rs")]
//! ```
//! or equivalently via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/summer_builder.rs")]
//! ```
//!
//! Both of these generate the same Cli program:
//! ```console
//! $ summer -h
//! usage: summer [-h|-?|--help] [-v|--verbose] <ITEM> ...
//!
//! options:
//!  -h, -?, --help   Display usage information.
//!  -v, --verbose    Show the items being summed.
//!  <ITEM>           The items to sum.
//!
//! $ summer 1 2 3
//! Sum: 6
//!
//! $ summer
//! Parse error: Parameter 'ITEM' expects [1, ∞) match(es), but matched 0.
//!
//! $ summer 1 blah
//! Parse error: 'blah' cannot convert to u32.
//! ```
//!
//! # Builder Api
//! Configure `argbind` by composing parsers into a [`Group`]:
//! * [`Opt`]: a named option (ex: `-w 80`, `--width=80`), or a flag (ex: `--verbose`).
//! * [`Arg`]: a positional argument, matching any token that is not option-like.
//! * [`Help`]: the `-h`/`-?`/`--help` flag, which stops matching as soon as it is seen.
//! * [`Group`]: an ordered composition of parsers (including other groups).
//!
//! Each of `Opt` and `Arg` binds onto a destination:
//! * `value(&mut T, ..)`: overwrites the variable with each match.
//! * `optional_value(&mut Option<T>, ..)` (`Opt` only): sets `Some(..)`.
//! * `values(&mut C, ..)`: adds each match to any [Collectable](./prelude/trait.Collectable.html) (`argbind` provides `Vec<T>` and `HashSet<T>`).
//! * `callback(FnMut(T), ..)`: invokes the callback with each converted match.
//! The callback may reject a value by returning `Err(..)`.
//! * `flag(&mut bool)`/`flag_callback(FnMut(bool))` (`Opt` only): a flag, taking no value.
//!
//! ### Cardinality
//! Each parser has a [`Cardinality`] `(minimum, maximum)`, where a maximum of `0` is unbounded.
//! Collections default to `(0, 0)` (any number), and all others default to `(0, 1)`.
//! Configure it via the [Bounded](./prelude/trait.Bounded.html) methods: `required()`, `optional()`, `cardinality_exact(n)`, and `cardinality_range(n, m)`.
//!
//! ### Parsing
//! [`Parser::parse_args`] runs in two phases.
//! First, tokens are matched in order, each binding onto its destination as it matches.
//! The first error (ex: a failed conversion, or an unrecognized token) aborts the parse; binds made before it are not rolled back.
//! Second, each parser's match count is validated against its cardinality.
//! When `Help` matches, parsing stops early and validation is skipped: check [`ParseState::is_short_circuit`].
//!
//! ### Token syntax
//! By default, options are prefixed by `-`, and an option's value may be joined by `=` (ex: `--width=80`).
//! A lone `-` is a value.
//! Use [`Customized`] with [`Parser::parse_args_with`] to change these (ex: `/width:80`).
//! ```no_run
#![doc = include_str!("../demos/sorter.rs")]
//! ```
pub mod derive;
pub use argbind_builder::*;
