//! Derive macro for `argbind`.
//! See [documentation root](https://docs.rs/argbind/latest/argbind/index.html) for full details.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveParser;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Generate an `argbind` parser for a struct with named fields.
///
/// Generates the methods `argbind_group(&mut self)`, `argbind_parse_args(&Args)`, and `argbind_parse()`.
/// The latter two require the struct to implement `Default`.
#[proc_macro_derive(ArgParser, attributes(argbind))]
pub fn arg_parser(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveParser::try_from(derive_input) {
        Ok(parser) => TokenStream2::from(parser).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
