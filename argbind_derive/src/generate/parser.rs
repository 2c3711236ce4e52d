use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};

use crate::model::DeriveParser;

impl From<DeriveParser> for TokenStream2 {
    fn from(value: DeriveParser) -> Self {
        let DeriveParser {
            struct_name,
            program_name,
            parameters,
        } = value;
        let program_name = program_name.tokens;
        let parent = format_ident!("self");

        let group = if parameters.is_empty() {
            quote! {
                let group = ::argbind::Group::new();
            }
        } else {
            let fields = parameters
                .into_iter()
                .map(|parameter| parameter.generate(&parent))
                .collect::<Vec<_>>();

            quote! {
                let mut group = ::argbind::Group::new();
                #( #fields )*
            }
        };

        quote! {
            impl #struct_name {
                /// The parser for this struct, bound onto its fields.
                #[allow(unused_imports)]
                pub fn argbind_group(&mut self) -> ::argbind::Group<'_> {
                    use ::argbind::prelude::*;
                    #group
                    group
                }

                /// Parse `args` into a new (default) instance; `None` when help is requested.
                pub fn argbind_parse_args(
                    args: &::argbind::Args,
                ) -> ::std::result::Result<::std::option::Option<Self>, ::argbind::ParseError> {
                    use ::argbind::prelude::*;
                    let mut target = <Self as ::std::default::Default>::default();
                    let state = target
                        .argbind_group()
                        .add(::argbind::Help::new())
                        .parse_args(args)?;

                    if state.is_short_circuit() {
                        ::std::result::Result::Ok(::std::option::Option::None)
                    } else {
                        ::std::result::Result::Ok(::std::option::Option::Some(target))
                    }
                }

                /// Parse the command line of this process.
                /// Prints help and exits `0` when help is requested; prints the error and exits `1` when parsing fails.
                pub fn argbind_parse() -> Self {
                    let args = ::argbind::Args::from_env();

                    match Self::argbind_parse_args(&args) {
                        ::std::result::Result::Ok(::std::option::Option::Some(target)) => target,
                        ::std::result::Result::Ok(::std::option::Option::None) => {
                            let mut target = <Self as ::std::default::Default>::default();
                            let group = target.argbind_group().add(::argbind::Help::new());
                            ::argbind::Printer::terminal().print(#program_name, &group);
                            ::std::process::exit(0);
                        }
                        ::std::result::Result::Err(error) => {
                            ::std::eprintln!("{}", error);
                            ::std::process::exit(1);
                        }
                    }
                }
            }
        }
    }
}
