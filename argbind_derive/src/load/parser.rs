use crate::load::{load_attributes, single_value};
use crate::model::{DeriveParameter, DeriveParser, DeriveValue};
use quote::quote;

impl TryFrom<syn::DeriveInput> for DeriveParser {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let attributes = load_attributes(&value.attrs)?;

        if let Some(singleton) = attributes.singletons.iter().next() {
            return Err(syn::Error::new(
                value.ident.span(),
                format!("Invalid - unknown attribute `#[argbind({singleton})]`."),
            ));
        }

        if let Some(key) = attributes.pairs.keys().find(|key| *key != "program") {
            return Err(syn::Error::new(
                value.ident.span(),
                format!("Invalid - unknown attribute `#[argbind({key} = ..)]`."),
            ));
        }

        let program = match single_value(&attributes, "program", &value.ident)? {
            Some(DeriveValue { tokens }) => quote! { #tokens },
            None => quote! { env!("CARGO_CRATE_NAME") },
        };

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &value.generics,
                "Invalid - ArgParser cannot be derived for a generic struct.",
            ));
        }

        let parameters = match &value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => fields
                .named
                .iter()
                .map(DeriveParameter::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Unit,
                ..
            }) => Vec::default(),
            _ => {
                return Err(syn::Error::new(
                    value.ident.span(),
                    "Invalid - ArgParser may only be derived for a struct with named fields.",
                ));
            }
        };

        Ok(DeriveParser {
            struct_name: value.ident.clone(),
            program_name: DeriveValue { tokens: program },
            parameters,
        })
    }
}
