use crate::load::invalid_error;
use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;
use syn::spanned::Spanned;

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let mut attributes = IntermediateAttributes::default();

        // Ex: `#[unpublicized]`.
        if let syn::Meta::Path(_) = &value.meta {
            return Ok(attributes);
        }

        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;

        for expression in value.parse_args_with(attributes_parser)? {
            match expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream();
                    attributes
                        .pairs
                        .entry(left.to_string())
                        .or_default()
                        .push(DeriveValue {
                            tokens: assignment.right.to_token_stream(),
                        });
                }
                syn::Expr::Path(path) => match path.path.get_ident() {
                    Some(ident) => {
                        attributes.singletons.insert(ident.to_string());
                    }
                    None => {
                        return Err(invalid_error(
                            path.span(),
                            format!("unparseable attribute `{}`", path.to_token_stream()),
                        ));
                    }
                },
                syn::Expr::Lit(literal) => {
                    attributes.values.push(DeriveValue {
                        tokens: literal.to_token_stream(),
                    });
                }
                _ => {
                    return Err(invalid_error(
                        expression.span(),
                        format!("unparseable attribute `{}`", expression.to_token_stream()),
                    ));
                }
            };
        }

        Ok(attributes)
    }
}
