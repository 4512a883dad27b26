use std::path::PathBuf;
use std::str::FromStr;

use regex::Regex;

use crate::api::CoerceError;
use crate::model::ValueKind;
use crate::prelude::OptionValue;

fn coerce_boolean(text: &str) -> Result<bool, CoerceError> {
    match text.to_lowercase().as_str() {
        "true" | "t" => Ok(true),
        "false" | "f" => Ok(false),
        _ => Err(CoerceError::Malformed {
            token: text.to_string(),
            expected: "a boolean",
        }),
    }
}

// Radix-sensing decode: an optional sign, then `0x`/`0X`/`#` for hex, a leading `0` for octal, otherwise decimal.
fn decode_integral(text: &str) -> Option<i64> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (radix, digits) = if let Some(rest) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .or_else(|| unsigned.strip_prefix('#'))
    {
        (16, rest)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    // Parse the magnitude wider than the target, so that `i64::MIN` survives negation.
    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}

fn coerce_integral<T: TryFrom<i64>>(text: &str, expected: &'static str) -> Result<T, CoerceError> {
    decode_integral(text)
        .and_then(|value| T::try_from(value).ok())
        .ok_or_else(|| CoerceError::Malformed {
            token: text.to_string(),
            expected,
        })
}

fn coerce_float<T: FromStr>(text: &str, expected: &'static str) -> Result<T, CoerceError> {
    let trimmed = text.trim();
    // Accept a trailing precision suffix (ex: `1.5f`, `2d`).
    let unsuffixed = trimmed
        .strip_suffix(['f', 'F', 'd', 'D'])
        .filter(|rest| !rest.is_empty());

    T::from_str(trimmed)
        .ok()
        .or_else(|| unsuffixed.and_then(|rest| T::from_str(rest).ok()))
        .ok_or_else(|| CoerceError::Malformed {
            token: text.to_string(),
            expected,
        })
}

fn coerce_char(text: &str) -> Result<char, CoerceError> {
    let mut chars = text.chars();

    match (chars.next(), chars.next()) {
        (Some(value), None) => Ok(value),
        _ => Err(CoerceError::Malformed {
            token: text.to_string(),
            expected: "a single character",
        }),
    }
}

/// Match the text against the constants of an enum.
///
/// Matching is case-insensitive, and hyphens in the text match underscores in the constant names.
///
/// ### Example
/// ```
/// # use declopt_builder as declopt;
/// use declopt::enum_constant;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Mode { FooBar, Baz }
///
/// let constants = [("FOO_BAR", Mode::FooBar), ("BAZ", Mode::Baz)];
/// assert_eq!(enum_constant("Mode", "foo-bar", constants), Ok(Mode::FooBar));
/// assert!(enum_constant("Mode", "qux", constants).is_err());
/// ```
pub fn enum_constant<T>(
    type_name: &'static str,
    text: &str,
    constants: impl IntoIterator<Item = (&'static str, T)>,
) -> Result<T, CoerceError> {
    let normalized = text.replace('-', "_");

    constants
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(&normalized))
        .map(|(_, value)| value)
        .ok_or_else(|| CoerceError::UnknownConstant {
            token: text.to_string(),
            type_name,
        })
}

/// Construct a value through its single-string constructor ([`FromStr`]).
///
/// Any rejection is reported uniformly; the constructor's own error is not inspected.
pub fn construct<T: FromStr>(type_name: &'static str, text: &str) -> Result<T, CoerceError> {
    T::from_str(text).map_err(|_| CoerceError::Construction {
        token: text.to_string(),
        type_name,
    })
}

/// Coerce list text, handing each element to `push`.
///
/// When splitting, every whitespace separated piece is its own element.
/// Elements coerced before a failing one stay pushed.
pub(crate) fn coerce_list<T: OptionValue>(
    text: &str,
    split: bool,
    mut push: impl FnMut(T),
) -> Result<(), CoerceError> {
    let pieces: Vec<&str> = if split {
        text.split_whitespace().collect()
    } else {
        Vec::default()
    };

    if pieces.is_empty() {
        push(T::coerce(text)?);
    } else {
        for piece in pieces {
            push(T::coerce(piece)?);
        }
    }

    Ok(())
}

impl OptionValue for bool {
    fn kind() -> ValueKind {
        ValueKind::Boolean
    }

    fn coerce(text: &str) -> Result<Self, CoerceError> {
        coerce_boolean(text)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl OptionValue for char {
    fn kind() -> ValueKind {
        ValueKind::Char
    }

    fn coerce(text: &str) -> Result<Self, CoerceError> {
        coerce_char(text)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

macro_rules! integral_value {
    ($type:ty, $kind:expr, $expected:literal) => {
        impl OptionValue for $type {
            fn kind() -> ValueKind {
                $kind
            }

            fn coerce(text: &str) -> Result<Self, CoerceError> {
                coerce_integral(text, $expected)
            }

            fn render(&self) -> String {
                self.to_string()
            }
        }
    };
}

integral_value!(i8, ValueKind::Byte, "a byte");
integral_value!(i16, ValueKind::Short, "a short integer");
integral_value!(i32, ValueKind::Int, "an integer");
integral_value!(i64, ValueKind::Long, "a long integer");

impl OptionValue for f32 {
    fn kind() -> ValueKind {
        ValueKind::Float
    }

    fn coerce(text: &str) -> Result<Self, CoerceError> {
        coerce_float(text, "a float")
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl OptionValue for f64 {
    fn kind() -> ValueKind {
        ValueKind::Double
    }

    fn coerce(text: &str) -> Result<Self, CoerceError> {
        coerce_float(text, "a double")
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl OptionValue for String {
    fn kind() -> ValueKind {
        ValueKind::StringConstructible("string")
    }

    fn coerce(text: &str) -> Result<Self, CoerceError> {
        Ok(text.to_string())
    }

    fn render(&self) -> String {
        self.clone()
    }
}

impl OptionValue for PathBuf {
    fn kind() -> ValueKind {
        ValueKind::StringConstructible("filename")
    }

    fn coerce(text: &str) -> Result<Self, CoerceError> {
        construct("filename", text)
    }

    fn render(&self) -> String {
        self.display().to_string()
    }
}

impl OptionValue for Regex {
    fn kind() -> ValueKind {
        ValueKind::RegexPattern
    }

    fn coerce(text: &str) -> Result<Self, CoerceError> {
        Regex::new(text).map_err(|_| CoerceError::Construction {
            token: text.to_string(),
            type_name: "regex",
        })
    }

    fn render(&self) -> String {
        self.as_str().to_string()
    }
}

/// Implement [`OptionValue`](crate::prelude::OptionValue) for a type constructed from a single string.
///
/// The type must implement [`FromStr`](std::str::FromStr) (the constructor) and [`Display`](std::fmt::Display) (for rendering).
/// The name is what usage text advertises (ex: `--endpoint=<address>`).
///
/// ### Example
/// ```
/// # use declopt_builder as declopt;
/// use std::net::SocketAddr;
///
/// struct Endpoint(SocketAddr);
/// # impl std::str::FromStr for Endpoint {
/// #     type Err = std::net::AddrParseError;
/// #     fn from_str(s: &str) -> Result<Self, Self::Err> { s.parse().map(Endpoint) }
/// # }
/// # impl std::fmt::Display for Endpoint {
/// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { self.0.fmt(f) }
/// # }
///
/// declopt::string_constructible!(Endpoint, "address");
/// ```
#[macro_export]
macro_rules! string_constructible {
    ($type:ty, $name:literal) => {
        impl $crate::prelude::OptionValue for $type {
            fn kind() -> $crate::ValueKind {
                $crate::ValueKind::StringConstructible($name)
            }

            fn coerce(text: &str) -> ::std::result::Result<Self, $crate::CoerceError> {
                $crate::construct::<$type>($name, text)
            }

            fn render(&self) -> ::std::string::String {
                ::std::string::ToString::to_string(self)
            }
        }
    };
}
