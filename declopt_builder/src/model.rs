/// The kind of value an option accepts, fixed by the static type of its bound storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
    /// `bool`: accepts `true`/`t`/`false`/`f`, and needs no value on the command line.
    Boolean,
    /// `i8`.
    Byte,
    /// `char`: exactly one character.
    Char,
    /// `i16`.
    Short,
    /// `i32`.
    Int,
    /// `i64`.
    Long,
    /// `f32`.
    Float,
    /// `f64`.
    Double,
    /// An enumeration, matched case- and hyphen/underscore-insensitively against its constants.
    /// Carries the name of the enum type.
    Enum(&'static str),
    /// A type built from a single string, carrying the name advertised in usage text.
    StringConstructible(&'static str),
    /// A compiled regular expression.
    RegexPattern,
    /// An ordered, growable sequence of the inner (non-list) kind.
    ListOf(Box<ValueKind>),
}

impl ValueKind {
    /// Whether an occurrence of the option must carry a value.
    /// Only a plain `Boolean` may be given bare.
    pub fn requires_value(&self) -> bool {
        !matches!(self, ValueKind::Boolean)
    }

    /// Whether this kind accumulates values rather than replacing them.
    pub fn is_list(&self) -> bool {
        matches!(self, ValueKind::ListOf(_))
    }

    /// The name of the kind as advertised in usage text (ex: `--size=<int>`).
    pub fn type_name(&self) -> String {
        match self {
            ValueKind::Boolean => "boolean".to_string(),
            ValueKind::Byte => "byte".to_string(),
            ValueKind::Char => "char".to_string(),
            ValueKind::Short => "short".to_string(),
            ValueKind::Int => "int".to_string(),
            ValueKind::Long => "long".to_string(),
            ValueKind::Float => "float".to_string(),
            ValueKind::Double => "double".to_string(),
            ValueKind::Enum(_) => "enum".to_string(),
            ValueKind::StringConstructible(name) => name.to_string(),
            ValueKind::RegexPattern => "regex".to_string(),
            ValueKind::ListOf(inner) => inner.type_name(),
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::ListOf(inner) => write!(f, "ListOf({inner})"),
            ValueKind::Enum(type_name) => write!(f, "Enum({type_name})"),
            _ => write!(f, "{:?}", self),
        }
    }
}

/// The dash prefix used for long option names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashStyle {
    /// `-name`.
    Single,
    /// `--name`.
    Double,
}

impl DashStyle {
    /// The prefix for long names in this style.
    pub fn prefix(&self) -> &'static str {
        match self {
            DashStyle::Single => "-",
            DashStyle::Double => "--",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Config {
    pub style: DashStyle,
    pub use_dashes: bool,
    pub parse_after_arg: bool,
    pub space_separated_lists: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: DashStyle::Double,
            use_dashes: true,
            parse_after_arg: true,
            space_separated_lists: false,
        }
    }
}
