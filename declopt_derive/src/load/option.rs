use crate::load::invalid_error;
use crate::model::{BindingType, DeriveGroup, DeriveOption, DeriveValue, IntermediateAttributes};
use quote::{quote, ToTokens};
use syn::spanned::Spanned;

impl DeriveOption {
    /// Load the option declared by the field, if it has an `#[option(..)]` attribute.
    pub(crate) fn load(field: &syn::Field) -> Result<Option<Self>, syn::Error> {
        let mut option_attributes = None;
        let mut group_attributes = None;
        let mut unpublicized = false;

        for attribute in &field.attrs {
            if attribute.path().is_ident("option") {
                option_attributes.replace(IntermediateAttributes::try_from(attribute)?);
            } else if attribute.path().is_ident("option_group") {
                group_attributes.replace(IntermediateAttributes::try_from(attribute)?);
            } else if attribute.path().is_ident("unpublicized") {
                unpublicized = true;
            }
        }

        let field_name = match &field.ident {
            Some(ident) => ident.clone(),
            None => return Err(invalid_error(field.span(), "options must be named fields")),
        };

        let attributes = match option_attributes {
            Some(attributes) => attributes,
            None => {
                if group_attributes.is_some() || unpublicized {
                    return Err(invalid_error(
                        field_name.span(),
                        format!("field `{field_name}` must be an `#[option(..)]` to be grouped or unpublicized"),
                    ));
                }

                return Ok(None);
            }
        };

        if !matches!(field.vis, syn::Visibility::Public(_)) {
            return Err(invalid_error(
                field_name.span(),
                format!("option field `{field_name}` must be `pub`"),
            ));
        }

        let IntermediateAttributes {
            values,
            singletons,
            mut pairs,
        } = attributes;

        let doc = match values.as_slice() {
            [] => DeriveValue {
                tokens: quote! { "" },
            },
            [doc] => doc.clone(),
            _ => {
                return Err(invalid_error(
                    field_name.span(),
                    format!("option field `{field_name}` takes a single documentation string"),
                ))
            }
        };

        if let Some(singleton) = singletons.iter().find(|s| s.as_str() != "no_doc_default") {
            return Err(invalid_error(
                field_name.span(),
                format!("unknown option attribute `{singleton}` on field `{field_name}`"),
            ));
        }

        let aliases = pairs.remove("alias").unwrap_or_default();

        if let Some(key) = pairs.keys().next() {
            return Err(invalid_error(
                field_name.span(),
                format!("unknown option attribute `{key} = ..` on field `{field_name}`"),
            ));
        }

        let group = match group_attributes {
            Some(group_attributes) => match group_attributes.values.as_slice() {
                [name] => Some(DeriveGroup {
                    name: name.clone(),
                    unpublicized: group_attributes.singletons.contains("unpublicized"),
                }),
                _ => {
                    return Err(invalid_error(
                        field_name.span(),
                        format!("option group on field `{field_name}` requires a single name"),
                    ))
                }
            },
            None => None,
        };

        Ok(Some(DeriveOption {
            binding_type: binding_type(&field_name, &field.ty)?,
            field_name,
            doc,
            aliases,
            no_doc_default: singletons.contains("no_doc_default"),
            unpublicized,
            group,
        }))
    }
}

fn binding_type(field_name: &syn::Ident, ty: &syn::Type) -> Result<BindingType, syn::Error> {
    match ty {
        syn::Type::Path(path) => match path.path.segments.last() {
            Some(segment) => match (segment.ident.to_string().as_str(), &segment.arguments) {
                ("Vec", syn::PathArguments::AngleBracketed(_)) => Ok(BindingType::Collection),
                ("Option", syn::PathArguments::AngleBracketed(_)) => Ok(BindingType::Optional),
                (_, syn::PathArguments::None) => Ok(BindingType::Scalar),
                (ident, _) => Err(invalid_error(
                    ty.span(),
                    format!("option field `{field_name}` has the parameterized type `{ident}<..>`; only `Vec<..>` and `Option<..>` are supported"),
                )),
            },
            None => Err(invalid_error(
                ty.span(),
                format!("option field `{field_name}` has an empty type path"),
            )),
        },
        syn::Type::Array(_) => Err(invalid_error(
            ty.span(),
            format!("option field `{field_name}` cannot be an array; use `Vec<..>`"),
        )),
        _ => Err(invalid_error(
            ty.span(),
            format!(
                "option field `{field_name}` has the unsupported type `{}`",
                ty.to_token_stream()
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::{Literal, Span};
    use rstest::rstest;

    fn field(source: &str) -> syn::Field {
        let input: syn::DeriveInput = syn::parse_str(&format!("struct S {{ {source} }}")).unwrap();

        match input.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => fields.named.into_iter().next().unwrap(),
            _ => unreachable!(),
        }
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    fn string(value: &str) -> DeriveValue {
        DeriveValue {
            tokens: Literal::string(value).into_token_stream(),
        }
    }

    #[test]
    fn load_not_an_option() {
        // Setup
        let input = field("pub apple: usize");

        // Execute
        let option = DeriveOption::load(&input).unwrap();

        // Verify
        assert_eq!(option, None);
    }

    #[rstest]
    #[case("pub apple: usize", BindingType::Scalar)]
    #[case("pub apple: std::path::PathBuf", BindingType::Scalar)]
    #[case("pub apple: Option<i64>", BindingType::Optional)]
    #[case("pub apple: std::option::Option<i64>", BindingType::Optional)]
    #[case("pub apple: Vec<String>", BindingType::Collection)]
    fn load_binding_type(#[case] source: &str, #[case] expected: BindingType) {
        // Setup
        let input = field(&format!("#[option(\"the apple\")] {source}"));

        // Execute
        let option = DeriveOption::load(&input).unwrap().unwrap();

        // Verify
        assert_eq!(option.binding_type, expected);
    }

    #[test]
    fn load_option() {
        // Setup
        let input = field(
            r#"
                #[option("-a the apple", alias = "-fruit", alias = "--malus", no_doc_default)]
                #[option_group("Fruit", unpublicized)]
                #[unpublicized]
                pub apple: Vec<u32>
            "#,
        );

        // Execute
        let option = DeriveOption::load(&input).unwrap().unwrap();

        // Verify
        assert_eq!(
            option,
            DeriveOption {
                field_name: ident("apple"),
                doc: string("-a the apple"),
                aliases: vec![string("-fruit"), string("--malus")],
                no_doc_default: true,
                unpublicized: true,
                group: Some(DeriveGroup {
                    name: string("Fruit"),
                    unpublicized: true,
                }),
                binding_type: BindingType::Collection,
            }
        );
    }

    #[test]
    fn load_option_bare() {
        // Setup
        let input = field("#[option] pub apple: bool");

        // Execute
        let option = DeriveOption::load(&input).unwrap().unwrap();

        // Verify
        assert_eq!(
            option,
            DeriveOption {
                field_name: ident("apple"),
                doc: DeriveValue {
                    tokens: quote! { "" },
                },
                aliases: vec![],
                no_doc_default: false,
                unpublicized: false,
                group: None,
                binding_type: BindingType::Scalar,
            }
        );
    }

    #[rstest]
    #[case(
        "#[option(\"x\")] apple: usize",
        "Invalid - option field `apple` must be `pub`."
    )]
    #[case(
        "#[option(\"x\")] pub(crate) apple: usize",
        "Invalid - option field `apple` must be `pub`."
    )]
    #[case(
        "#[option(\"x\")] pub apple: [u32; 3]",
        "Invalid - option field `apple` cannot be an array; use `Vec<..>`."
    )]
    #[case(
        "#[option(\"x\")] pub apple: HashSet<u32>",
        "Invalid - option field `apple` has the parameterized type `HashSet<..>`; only `Vec<..>` and `Option<..>` are supported."
    )]
    #[case(
        "#[option(\"x\")] pub apple: (u32, u32)",
        "Invalid - option field `apple` has the unsupported type `(u32 , u32)`."
    )]
    #[case(
        "#[option(\"x\", \"y\")] pub apple: u32",
        "Invalid - option field `apple` takes a single documentation string."
    )]
    #[case(
        "#[option(\"x\", hidden)] pub apple: u32",
        "Invalid - unknown option attribute `hidden` on field `apple`."
    )]
    #[case(
        "#[option(\"x\", short = 'a')] pub apple: u32",
        "Invalid - unknown option attribute `short = ..` on field `apple`."
    )]
    #[case(
        "#[option(\"x\")] #[option_group(unpublicized)] pub apple: u32",
        "Invalid - option group on field `apple` requires a single name."
    )]
    #[case(
        "#[unpublicized] pub apple: u32",
        "Invalid - field `apple` must be an `#[option(..)]` to be grouped or unpublicized."
    )]
    #[case(
        "#[option_group(\"Fruit\")] pub apple: u32",
        "Invalid - field `apple` must be an `#[option(..)]` to be grouped or unpublicized."
    )]
    fn load_invalid(#[case] source: &str, #[case] expected: &str) {
        // Setup
        let input = field(source);

        // Execute
        let error = DeriveOption::load(&input).unwrap_err();

        // Verify
        assert_eq!(error.to_string(), expected);
    }
}
