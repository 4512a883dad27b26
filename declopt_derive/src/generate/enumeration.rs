use crate::model::{DeriveConstant, DeriveEnum};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl From<DeriveEnum> for TokenStream2 {
    fn from(value: DeriveEnum) -> Self {
        let DeriveEnum {
            enum_name,
            constants,
        } = value;
        let type_name = enum_name.to_string();
        let (names, variants): (Vec<String>, Vec<syn::Ident>) = constants
            .into_iter()
            .map(|DeriveConstant { variant, constant }| (constant, variant))
            .unzip();

        quote! {
            impl ::declopt::prelude::OptionValue for #enum_name {
                fn kind() -> ::declopt::ValueKind {
                    ::declopt::ValueKind::Enum(#type_name)
                }

                fn coerce(text: &str) -> ::std::result::Result<Self, ::declopt::CoerceError> {
                    ::declopt::enum_constant(#type_name, text, [ #( (#names, #enum_name::#variants) ),* ])
                }

                fn render(&self) -> ::std::string::String {
                    match self {
                        #( #enum_name::#variants => #names.to_string(), )*
                    }
                }
            }
        }
    }
}
