use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;
use std::collections::{HashMap, HashSet};

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let expressions = value.parse_args_with(attributes_parser)?;
        let mut singletons = HashSet::default();
        let mut pairs: HashMap<String, Vec<DeriveValue>> = HashMap::default();

        for expression in expressions {
            match expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream();
                    pairs
                        .entry(left.to_string())
                        .or_default()
                        .push(DeriveValue {
                            tokens: assignment.right.to_token_stream(),
                        });
                }
                syn::Expr::Path(path) => match path.path.get_ident() {
                    Some(ident) => {
                        singletons.insert(ident.to_string());
                    }
                    None => return Err(unparseable(&path)),
                },
                _ => return Err(unparseable(&expression)),
            };
        }

        Ok(Self { singletons, pairs })
    }
}

fn unparseable(tokens: &impl ToTokens) -> syn::Error {
    syn::Error::new_spanned(
        tokens,
        format!(
            "Invalid - unparseable attribute `{}`.",
            tokens.to_token_stream()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Literal;
    use syn::parse_quote;

    #[test]
    fn construct_attributes_empty() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argbind()]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(attributes, IntermediateAttributes::default());
    }

    #[test]
    fn construct_attributes() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argbind(option, hint = "123", hint = "456", short = 'x')]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(
            attributes,
            IntermediateAttributes {
                singletons: HashSet::from(["option".to_string()]),
                pairs: HashMap::from([
                    (
                        "hint".to_string(),
                        vec![
                            DeriveValue {
                                tokens: Literal::string("123").into_token_stream(),
                            },
                            DeriveValue {
                                tokens: Literal::string("456").into_token_stream(),
                            },
                        ]
                    ),
                    (
                        "short".to_string(),
                        vec![DeriveValue {
                            tokens: Literal::character('x').into_token_stream(),
                        }]
                    ),
                ]),
            }
        );
    }

    #[test]
    fn construct_attributes_bare() {
        let attribute: syn::Attribute = parse_quote! {
            #[argbind]
        };

        assert!(IntermediateAttributes::try_from(&attribute).is_err());
    }

    #[test]
    fn construct_attributes_invalid_expression() {
        let attribute: syn::Attribute = parse_quote! {
            #[argbind(1 + 2)]
        };

        let error = IntermediateAttributes::try_from(&attribute).unwrap_err();
        assert!(error.to_string().contains("unparseable attribute"));
    }
}
