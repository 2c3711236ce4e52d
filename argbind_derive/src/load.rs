mod attribute;
mod parameter;
mod parser;

use crate::model::{DeriveValue, IntermediateAttributes};

const ATTRIBUTE: &str = "argbind";

/// Collect every `#[argbind(..)]` attribute, in order.
fn load_attributes(attrs: &[syn::Attribute]) -> Result<IntermediateAttributes, syn::Error> {
    let mut attributes = IntermediateAttributes::default();

    for attribute in attrs {
        if attribute.path().is_ident(ATTRIBUTE) {
            let IntermediateAttributes { singletons, pairs } =
                IntermediateAttributes::try_from(attribute)?;
            attributes.singletons.extend(singletons);

            for (key, values) in pairs {
                attributes.pairs.entry(key).or_default().extend(values);
            }
        }
    }

    Ok(attributes)
}

/// The value of the pair `key`; a repeated key is an error.
fn single_value<'a>(
    attributes: &'a IntermediateAttributes,
    key: &str,
    spanned: &syn::Ident,
) -> Result<Option<&'a DeriveValue>, syn::Error> {
    match attributes.pairs.get(key).map(Vec::as_slice) {
        None | Some([]) => Ok(None),
        Some([value]) => Ok(Some(value)),
        Some(_) => Err(syn::Error::new(
            spanned.span(),
            format!("Invalid - `#[{ATTRIBUTE}({key} = ..)]` may only be specified once."),
        )),
    }
}

fn incompatible_error(
    field_name: &syn::Ident,
    left: impl Into<String>,
    right: impl Into<String>,
) -> syn::Error {
    syn::Error::new(
        field_name.span(),
        format!(
            "Invalid - field cannot be both `{}` and `{}`.",
            left.into(),
            right.into(),
        ),
    )
}
