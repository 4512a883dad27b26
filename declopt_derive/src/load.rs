mod attribute;
mod enumeration;
mod option;
mod unit;

pub(self) fn invalid_error(span: proc_macro2::Span, message: impl std::fmt::Display) -> syn::Error {
    syn::Error::new(span, format!("Invalid - {message}."))
}
