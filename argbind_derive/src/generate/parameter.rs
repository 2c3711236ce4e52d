use crate::model::{DeriveParameter, ParameterType};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl DeriveParameter {
    /// The option names: `-c` (for `short = 'c'`) followed by `--field-name`.
    fn names(&self) -> Vec<String> {
        let mut names = Vec::default();

        if let Some(short) = self.short {
            names.push(format!("-{short}"));
        }

        names.push(format!(
            "--{}",
            self.field_name.to_string().replace('_', "-")
        ));
        names
    }

    /// Generate the statement adding this parameter's parser onto `group`.
    pub(crate) fn generate(self, parent: &syn::Ident) -> TokenStream2 {
        let names = if self.parameter_type.is_option() {
            self.names()
        } else {
            Vec::default()
        };
        let DeriveParameter {
            field_name,
            parameter_type,
            hint,
            help,
            required,
            ..
        } = self;

        let constructor = match parameter_type {
            ParameterType::FlagOption => quote! {
                ::argbind::Opt::flag(&mut #parent.#field_name)
            },
            ParameterType::OptionalOption => quote! {
                ::argbind::Opt::optional_value(&mut #parent.#field_name, #hint)
            },
            ParameterType::CollectionOption => quote! {
                ::argbind::Opt::values(&mut #parent.#field_name, #hint)
            },
            ParameterType::ValueOption => quote! {
                ::argbind::Opt::value(&mut #parent.#field_name, #hint)
            },
            ParameterType::CollectionArgument => quote! {
                ::argbind::Arg::values(&mut #parent.#field_name, #hint)
            },
            ParameterType::ValueArgument => quote! {
                ::argbind::Arg::value(&mut #parent.#field_name, #hint)
            },
        };
        // A positional value is always required; a required collection takes at least one value.
        let cardinality = if parameter_type.is_collection() {
            if required {
                quote! { .cardinality_range(1, 0) }
            } else {
                quote! {}
            }
        } else if required || parameter_type == ParameterType::ValueArgument {
            quote! { .required() }
        } else {
            quote! {}
        };
        let description = match help {
            Some(help) => {
                let help = help.tokens;
                quote! { .description(#help) }
            }
            None => quote! {},
        };

        quote! {
            group = group.add(#constructor #( .name(#names) )* #cardinality #description);
        }
    }
}
