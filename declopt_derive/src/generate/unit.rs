use crate::model::DeriveOptions;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl From<DeriveOptions> for TokenStream2 {
    fn from(value: DeriveOptions) -> Self {
        let DeriveOptions {
            struct_name,
            options,
        } = value;
        let unit_name = struct_name.to_string();
        let declarations = options.into_iter().map(TokenStream2::from);

        quote! {
            impl ::declopt::prelude::DeclareOptions for #struct_name {
                fn source_unit(&mut self) -> ::declopt::SourceUnit<'_> {
                    ::declopt::SourceUnit::new(#unit_name)
                        #( .add(#declarations) )*
                }
            }
        }
    }
}
