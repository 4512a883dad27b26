use thiserror::Error;

use crate::model::ValueKind;

/// Behaviour to write (or append) text into the storage bound to an option.
///
/// The storage's static type is kept at the bottom of the object graph ([`Scalar`](crate::Scalar), [`Optional`](crate::Optional), [`Collection`](crate::Collection)).
/// The registry only sees this type-erased capability.
#[doc(hidden)]
pub trait Binding {
    /// The kind of the bound storage.
    fn kind(&self) -> ValueKind;

    /// Snapshot of the storage's current value, for display as a default.
    fn default_text(&self) -> Option<String>;

    /// Coerce the text and store it (replacing, or appending for lists).
    fn assign(&mut self, text: &str, split_lists: bool) -> Result<(), CoerceError>;

    /// The rendered current value.
    fn current(&self) -> String;

    /// The rendered current value, one entry per command line occurrence needed to recreate it.
    fn current_values(&self) -> Vec<String>;
}

/// Failure to convert text into an option's target type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoerceError {
    /// The text does not follow the kind's syntax.
    #[error("'{token}' is not {expected}")]
    Malformed {
        /// The offending text.
        token: String,
        /// Description of what was expected (ex: `an integer`).
        expected: &'static str,
    },
    /// The text names none of the enum's constants.
    #[error("no enum constant {type_name}.{token}")]
    UnknownConstant {
        /// The offending text.
        token: String,
        /// The enum type.
        type_name: &'static str,
    },
    /// The type's string constructor rejected the text.
    #[error("cannot construct {type_name} from '{token}'")]
    Construction {
        /// The offending text.
        token: String,
        /// The type being constructed.
        type_name: &'static str,
    },
}
