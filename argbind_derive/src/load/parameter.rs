use crate::load::{incompatible_error, load_attributes, single_value};
use crate::model::{DeriveParameter, ParameterType};
use quote::ToTokens;

impl TryFrom<&syn::Field> for DeriveParameter {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = match &value.ident {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new_spanned(
                    value,
                    "Invalid - only named fields are supported.",
                ));
            }
        };
        let attributes = load_attributes(&value.attrs)?;
        let explicit_argument = attributes.singletons.contains("argument");
        let explicit_option = attributes.singletons.contains("option");
        let required = attributes.singletons.contains("required");

        for singleton in &attributes.singletons {
            if !["argument", "option", "required"].contains(&singleton.as_str()) {
                return Err(syn::Error::new(
                    field_name.span(),
                    format!("Invalid - unknown attribute `#[argbind({singleton})]`."),
                ));
            }
        }

        for key in attributes.pairs.keys() {
            if !["short", "hint", "help"].contains(&key.as_str()) {
                return Err(syn::Error::new(
                    field_name.span(),
                    format!("Invalid - unknown attribute `#[argbind({key} = ..)]`."),
                ));
            }
        }

        let short = match single_value(&attributes, "short", &field_name)? {
            Some(derive_value) => {
                let literal: syn::LitChar = syn::parse2(derive_value.tokens.clone())?;
                Some(literal.value())
            }
            None => None,
        };
        let hint = match single_value(&attributes, "hint", &field_name)? {
            Some(derive_value) => {
                let literal: syn::LitStr = syn::parse2(derive_value.tokens.clone())?;
                literal.value()
            }
            None => field_name.to_string().to_uppercase(),
        };
        let help = single_value(&attributes, "help", &field_name)?.cloned();

        if explicit_argument && explicit_option {
            return Err(incompatible_error(
                &field_name,
                "#[argbind(argument)]",
                "#[argbind(option)]",
            ));
        }

        let type_name = match &value.ty {
            syn::Type::Path(path) => match path.path.segments.last() {
                Some(segment) => segment.ident.to_string(),
                None => return Err(unsupported_type(&value.ty)),
            },
            _ => return Err(unsupported_type(&value.ty)),
        };

        let parameter_type = match type_name.as_str() {
            "bool" => {
                disallow(&field_name, "bool", &[(explicit_argument, "argument")])?;
                ParameterType::FlagOption
            }
            "Option" => {
                disallow(
                    &field_name,
                    "Option<..>",
                    &[(explicit_argument, "argument"), (required, "required")],
                )?;
                ParameterType::OptionalOption
            }
            "Vec" | "HashSet" => {
                if explicit_option {
                    ParameterType::CollectionOption
                } else {
                    ParameterType::CollectionArgument
                }
            }
            _ => {
                if explicit_option {
                    ParameterType::ValueOption
                } else {
                    ParameterType::ValueArgument
                }
            }
        };

        if short.is_some() && !parameter_type.is_option() {
            return Err(incompatible_error(
                &field_name,
                "#[argbind(short = ..)]",
                "an argument",
            ));
        }

        Ok(DeriveParameter {
            field_name,
            parameter_type,
            short,
            hint,
            help,
            required,
        })
    }
}

fn unsupported_type(ty: &syn::Type) -> syn::Error {
    syn::Error::new_spanned(
        ty,
        format!(
            "Invalid - unsupported field type `{}`.",
            ty.to_token_stream()
        ),
    )
}

fn disallow(
    field_name: &syn::Ident,
    antecedent: &str,
    conditions: &[(bool, &str)],
) -> Result<(), syn::Error> {
    for (condition, name) in conditions {
        if *condition {
            return Err(incompatible_error(
                field_name,
                antecedent,
                format!("#[argbind({name})]"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeriveValue;
    use proc_macro2::{Literal, Span};
    use rstest::rstest;
    use syn::parse_quote;

    #[rstest]
    #[case(parse_quote! { struct S { my_field: usize } }, ParameterType::ValueArgument)]
    #[case(parse_quote! { struct S { #[argbind(argument)] my_field: usize } }, ParameterType::ValueArgument)]
    #[case(parse_quote! { struct S { #[argbind(option)] my_field: String } }, ParameterType::ValueOption)]
    #[case(parse_quote! { struct S { my_field: bool } }, ParameterType::FlagOption)]
    #[case(parse_quote! { struct S { #[argbind(option)] my_field: bool } }, ParameterType::FlagOption)]
    #[case(parse_quote! { struct S { my_field: Option<u32> } }, ParameterType::OptionalOption)]
    #[case(parse_quote! { struct S { my_field: Vec<u32> } }, ParameterType::CollectionArgument)]
    #[case(parse_quote! { struct S { my_field: std::collections::HashSet<u32> } }, ParameterType::CollectionArgument)]
    #[case(parse_quote! { struct S { #[argbind(option)] my_field: Vec<u32> } }, ParameterType::CollectionOption)]
    fn construct_parameter_type(#[case] input: syn::ItemStruct, #[case] expected: ParameterType) {
        // Execute
        let derive_parameter = DeriveParameter::try_from(&field(input)).unwrap();

        // Verify
        assert_eq!(
            derive_parameter,
            DeriveParameter {
                field_name: ident("my_field"),
                parameter_type: expected,
                short: None,
                hint: "MY_FIELD".to_string(),
                help: None,
                required: false,
            }
        );
    }

    #[test]
    fn construct_attributes() {
        // Setup
        let input: syn::ItemStruct = parse_quote! {
            struct Parameters {
                #[argbind(option, short = 'w', hint = "N", help = "The width.", required)]
                width: u32,
            }
        };

        // Execute
        let derive_parameter = DeriveParameter::try_from(&field(input)).unwrap();

        // Verify
        assert_eq!(
            derive_parameter,
            DeriveParameter {
                field_name: ident("width"),
                parameter_type: ParameterType::ValueOption,
                short: Some('w'),
                hint: "N".to_string(),
                help: Some(DeriveValue {
                    tokens: Literal::string("The width.").into_token_stream(),
                }),
                required: true,
            }
        );
    }

    #[test]
    fn construct_attributes_split() {
        let input: syn::ItemStruct = parse_quote! {
            struct Parameters {
                #[argbind(option)]
                #[argbind(short = 'w')]
                width: u32,
            }
        };

        let derive_parameter = DeriveParameter::try_from(&field(input)).unwrap();

        assert_eq!(derive_parameter.parameter_type, ParameterType::ValueOption);
        assert_eq!(derive_parameter.short, Some('w'));
    }

    #[rstest]
    #[case(parse_quote! { struct S { #[argbind(argument, option)] my_field: u32 } }, "cannot be both")]
    #[case(parse_quote! { struct S { #[argbind(argument)] my_field: bool } }, "cannot be both")]
    #[case(parse_quote! { struct S { #[argbind(argument)] my_field: Option<u32> } }, "cannot be both")]
    #[case(parse_quote! { struct S { #[argbind(required)] my_field: Option<u32> } }, "cannot be both")]
    #[case(parse_quote! { struct S { #[argbind(short = 'm')] my_field: u32 } }, "cannot be both")]
    #[case(parse_quote! { struct S { #[argbind(option, short = "m")] my_field: u32 } }, "expected")]
    #[case(parse_quote! { struct S { #[argbind(option, short = 'm', short = 'n')] my_field: u32 } }, "only be specified once")]
    #[case(parse_quote! { struct S { #[argbind(hint = 1)] my_field: u32 } }, "expected")]
    #[case(parse_quote! { struct S { #[argbind(positional)] my_field: u32 } }, "unknown attribute")]
    #[case(parse_quote! { struct S { #[argbind(choices = 1)] my_field: u32 } }, "unknown attribute")]
    #[case(parse_quote! { struct S { my_field: (u32, u32) } }, "unsupported field type")]
    #[case(parse_quote! { struct S { my_field: &'static str } }, "unsupported field type")]
    fn construct_invalid(#[case] input: syn::ItemStruct, #[case] message: &str) {
        let error = DeriveParameter::try_from(&field(input)).unwrap_err();

        assert!(
            error.to_string().contains(message),
            "'{error}' does not contain '{message}'"
        );
    }

    #[test]
    fn construct_unnamed() {
        let input: syn::ItemStruct = parse_quote! {
            struct Parameters(u32);
        };

        let error = DeriveParameter::try_from(&field(input)).unwrap_err();

        assert!(error.to_string().contains("only named fields"));
    }

    fn field(item: syn::ItemStruct) -> syn::Field {
        item.fields.into_iter().next().unwrap()
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }
}
