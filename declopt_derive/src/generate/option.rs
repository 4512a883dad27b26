use crate::model::{BindingType, DeriveGroup, DeriveOption};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl From<DeriveOption> for TokenStream2 {
    fn from(value: DeriveOption) -> Self {
        let DeriveOption {
            field_name,
            doc,
            aliases,
            no_doc_default,
            unpublicized,
            group,
            binding_type,
        } = value;
        let identifier = field_name.to_string();
        let doc = doc.tokens;

        let binding = match binding_type {
            BindingType::Scalar => quote! { ::declopt::Scalar::new(&mut self.#field_name) },
            BindingType::Optional => quote! { ::declopt::Optional::new(&mut self.#field_name) },
            BindingType::Collection => {
                quote! { ::declopt::Collection::new(&mut self.#field_name) }
            }
        };

        let aliases = aliases.into_iter().map(|alias| {
            let tokens = alias.tokens;
            quote! { .alias(#tokens) }
        });
        let unpublicized = unpublicized.then(|| quote! { .unpublicized() });
        let no_doc_default = no_doc_default.then(|| quote! { .no_doc_default() });
        let group = group.map(|DeriveGroup { name, unpublicized }| {
            let name = name.tokens;
            let unpublicized = unpublicized.then(|| quote! { .unpublicized() });
            quote! { .group(::declopt::OptionGroup::new(#name) #unpublicized) }
        });

        quote! {
            ::declopt::Declaration::new(#identifier, #doc, #binding)
                #( #aliases )*
                #unpublicized
                #no_doc_default
                #group
        }
    }
}
