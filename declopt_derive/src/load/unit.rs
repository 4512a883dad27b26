use crate::load::invalid_error;
use crate::model::{DeriveOption, DeriveOptions};

impl TryFrom<syn::DeriveInput> for DeriveOptions {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let struct_name = value.ident;

        match value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => {
                let options = fields
                    .named
                    .iter()
                    .map(DeriveOption::load)
                    .collect::<Result<Vec<_>, _>>()?
                    .into_iter()
                    .flatten()
                    .collect();

                Ok(DeriveOptions {
                    struct_name,
                    options,
                })
            }
            syn::Data::Struct(_) => Err(invalid_error(
                struct_name.span(),
                format!("options struct `{struct_name}` must have named fields"),
            )),
            _ => Err(invalid_error(
                struct_name.span(),
                format!("options may only be derived for a struct, not `{struct_name}`"),
            )),
        }
    }
}
