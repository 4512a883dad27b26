//! Derive macros for `declopt`.
//! See [documentation root](https://docs.rs/declopt/latest/declopt/derive/index.html) for full details.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::{DeriveEnum, DeriveOptions};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Implement `DeclareOptions` for a struct whose `pub` fields carry `#[option(..)]`.
#[proc_macro_derive(Options, attributes(option, option_group, unpublicized))]
pub fn options(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    DeriveOptions::try_from(input)
        .map(TokenStream2::from)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Implement `OptionValue` for a field-less enum, matching its variants by their SCREAMING_SNAKE names.
#[proc_macro_derive(OptionEnum)]
pub fn option_enum(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    DeriveEnum::try_from(input)
        .map(TokenStream2::from)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
