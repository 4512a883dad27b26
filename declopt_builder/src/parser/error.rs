use thiserror::Error;

use crate::api::CoerceError;

/// A malformed declaration, detected while building the option registry.
///
/// These indicate a programming mistake in the declaring program; no partial registry is usable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The documentation starts with `-`, but not with a short name, a space and a description.
    #[error("Config error: malformed documentation \"{doc}\" on option '{identifier}'; a leading '-' must be followed by a short name, a space, and a description.")]
    MalformedShortName {
        /// The option identifier.
        identifier: String,
        /// The documentation text.
        doc: String,
    },

    /// The documentation opens a `<type>` override that never closes.
    #[error("Config error: malformed documentation \"{doc}\" on option '{identifier}'; a type name opened with '<' must close with '>'.")]
    MalformedTypeName {
        /// The option identifier.
        identifier: String,
        /// The documentation text.
        doc: String,
    },

    /// The option has an empty identifier.
    #[error("Config error: an option must have a non-empty identifier.")]
    EmptyIdentifier,

    /// An alias does not start with a dash.
    #[error("Config error: alias '{alias}' of option '{identifier}' must start with '-' or '--'.")]
    InvalidAlias {
        /// The option identifier.
        identifier: String,
        /// The offending alias.
        alias: String,
    },

    /// The option binds a list whose elements are themselves lists.
    #[error("Config error: option '{identifier}' may not bind a list of lists.")]
    NestedList {
        /// The option identifier.
        identifier: String,
    },

    /// A short name, long name or alias is used by more than one option.
    #[error("Config error: {what} '{name}' of option '{identifier}' appears twice.")]
    DuplicateName {
        /// Which sort of name collided (short name, long name, alias).
        what: &'static str,
        /// The colliding name, with its dashes.
        name: String,
        /// The option that collided with an earlier one.
        identifier: String,
    },

    /// Two group markers use the same name.
    #[error("Config error: option group '{name}' declared twice.")]
    DuplicateGroup {
        /// The group name.
        name: String,
    },

    /// The registry is grouped, but an option of this source unit precedes any group marker.
    #[error("Config error: missing option group on option '{identifier}' of '{unit}'; the first option of every source unit must start a group.")]
    MissingGroup {
        /// The source unit name.
        unit: String,
        /// The option identifier.
        identifier: String,
    },

    /// The registry is ungrouped (its first option has no group), but a later option starts a group.
    #[error("Config error: option '{identifier}' starts group '{group}', but the first option of the registry has no group.")]
    UngroupedRegistry {
        /// The option identifier.
        identifier: String,
        /// The group name.
        group: String,
    },
}

/// A recoverable command line error, aborting the current parse.
///
/// Fields assigned by earlier tokens of the same parse are not rolled back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    /// The token names no known option.
    #[error("unknown option name '{name}' in arg '{arg}'")]
    UnknownOption {
        /// The option name, with its dashes.
        name: String,
        /// The full token.
        arg: String,
    },

    /// A value-taking option was the final token.
    #[error("option {arg} requires an argument")]
    MissingValue {
        /// The option token.
        arg: String,
    },

    /// A negated boolean (`--no-name`) was given a value.
    #[error("option {option} does not take a value")]
    NegatedValue {
        /// The option name, with its dashes.
        option: String,
    },

    /// The value does not follow the syntax of the option's kind.
    #[error("value \"{token}\" for argument {option} is not {expected}")]
    Malformed {
        /// The option name, with its dashes.
        option: String,
        /// The offending value.
        token: String,
        /// Description of what was expected (ex: `an integer`).
        expected: &'static str,
    },

    /// The value names none of the enum's constants.
    #[error("value \"{token}\" for argument {option} is not a constant of {type_name}")]
    UnknownConstant {
        /// The option name, with its dashes.
        option: String,
        /// The offending value.
        token: String,
        /// The enum type.
        type_name: &'static str,
    },

    /// The option type's string constructor rejected the value.
    #[error("invalid argument ({token}) for argument {option}")]
    InvalidArgument {
        /// The option name, with its dashes.
        option: String,
        /// The offending value.
        token: String,
    },

    /// The value cannot be quoted for the options echo.
    #[error("can't quote for internal debugging: {value}")]
    Unquotable {
        /// The offending value.
        value: String,
    },
}

impl ArgError {
    pub(crate) fn from_coerce(option: &str, error: CoerceError) -> Self {
        match error {
            CoerceError::Malformed { token, expected } => ArgError::Malformed {
                option: option.to_string(),
                token,
                expected,
            },
            CoerceError::UnknownConstant { token, type_name } => ArgError::UnknownConstant {
                option: option.to_string(),
                token,
                type_name,
            },
            CoerceError::Construction { token, .. } => ArgError::InvalidArgument {
                option: option.to_string(),
                token,
            },
        }
    }
}

/// An invalid request for usage text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// Groups were requested from an ungrouped parser.
    #[error("this parser does not have any option groups defined")]
    NotGrouped,

    /// The requested group does not exist.
    #[error("invalid option group: {0}")]
    UnknownGroup(String),

    /// The requested group only has unpublicized options.
    #[error("group does not contain any publicized options: {0}")]
    NoPublicizedOptions(String),
}
