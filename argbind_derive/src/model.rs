use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub(crate) struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

/// The raw contents of `#[argbind(..)]` attributes: bare words, and `key = value` pairs.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParameterType {
    /// `bool`
    FlagOption,
    /// `Option<T>`
    OptionalOption,
    /// `Vec<T>`/`HashSet<T>` with `#[argbind(option)]`
    CollectionOption,
    /// `Vec<T>`/`HashSet<T>`
    CollectionArgument,
    /// `T` with `#[argbind(option)]`
    ValueOption,
    /// `T`
    ValueArgument,
}

impl ParameterType {
    pub(crate) fn is_option(&self) -> bool {
        !matches!(
            self,
            ParameterType::CollectionArgument | ParameterType::ValueArgument
        )
    }

    pub(crate) fn is_collection(&self) -> bool {
        matches!(
            self,
            ParameterType::CollectionOption | ParameterType::CollectionArgument
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParameter {
    pub field_name: syn::Ident,
    pub parameter_type: ParameterType,
    pub short: Option<char>,
    pub hint: String,
    pub help: Option<DeriveValue>,
    pub required: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParser {
    pub struct_name: syn::Ident,
    pub program_name: DeriveValue,
    pub parameters: Vec<DeriveParameter>,
}
