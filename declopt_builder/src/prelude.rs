//! Traits which, typically, may be imported without concern: `use declopt::prelude::*`.

use crate::api::CoerceError;
use crate::model::ValueKind;

/// Behaviour for a type that may be the target of an option value.
// Needs to be imported in order to implement a custom `OptionValue`.
pub trait OptionValue: Sized {
    /// The kind of value, deciding syntax rules and the usage type name.
    fn kind() -> ValueKind;

    /// Convert command line text into a value of this type.
    fn coerce(text: &str) -> Result<Self, CoerceError>;

    /// Render the value for usage defaults and settings.
    fn render(&self) -> String;
}

/// Behaviour for a program struct whose fields declare options.
/// Typically implemented via `#[derive(Options)]`.
pub trait DeclareOptions {
    fn source_unit(&mut self) -> crate::api::SourceUnit<'_>;
}
