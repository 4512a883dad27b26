use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        let st = &self.tokens.to_string();
        let ot = &other.tokens.to_string();
        st == ot
    }
}

impl Eq for DeriveValue {}

/// The loosely parsed contents of an attribute: `#[name("value", flag, key = value)]`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntermediateAttributes {
    pub values: Vec<DeriveValue>,
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingType {
    Collection,
    Optional,
    Scalar,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveGroup {
    pub name: DeriveValue,
    pub unpublicized: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveOption {
    pub field_name: syn::Ident,
    pub doc: DeriveValue,
    pub aliases: Vec<DeriveValue>,
    pub no_doc_default: bool,
    pub unpublicized: bool,
    pub group: Option<DeriveGroup>,
    pub binding_type: BindingType,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveOptions {
    pub struct_name: syn::Ident,
    pub options: Vec<DeriveOption>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveConstant {
    pub variant: syn::Ident,
    pub constant: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveEnum {
    pub enum_name: syn::Ident,
    pub constants: Vec<DeriveConstant>,
}
