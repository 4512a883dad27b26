use crate::load::invalid_error;
use crate::model::{DeriveConstant, DeriveEnum};

impl TryFrom<syn::DeriveInput> for DeriveEnum {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let enum_name = value.ident;

        let data = match value.data {
            syn::Data::Enum(data) => data,
            _ => {
                return Err(invalid_error(
                    enum_name.span(),
                    format!("option enums may only be derived for an enum, not `{enum_name}`"),
                ))
            }
        };

        let constants = data
            .variants
            .into_iter()
            .map(|variant| match variant.fields {
                syn::Fields::Unit => Ok(DeriveConstant {
                    constant: screaming_snake(&variant.ident.to_string()),
                    variant: variant.ident,
                }),
                _ => Err(invalid_error(
                    variant.ident.span(),
                    format!(
                        "option enum variant `{enum_name}::{}` must not carry fields",
                        variant.ident
                    ),
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if constants.is_empty() {
            return Err(invalid_error(
                enum_name.span(),
                format!("option enum `{enum_name}` must have at least one variant"),
            ));
        }

        Ok(DeriveEnum {
            enum_name,
            constants,
        })
    }
}

// DarkBlue -> DARK_BLUE, HTTPServer -> HTTP_SERVER.
fn screaming_snake(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let previous = chars[i - 1];
            let next_lower = chars.get(i + 1).map_or(false, |n| n.is_lowercase());

            if previous.is_lowercase()
                || previous.is_ascii_digit()
                || (previous.is_uppercase() && next_lower)
            {
                out.push('_');
            }
        }

        out.extend(c.to_uppercase());
    }

    out
}
