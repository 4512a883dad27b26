use crate::api::{Binding, CoerceError, Declaration, OptionGroup};
use crate::constant::*;
use crate::model::{Config, DashStyle, ValueKind};
use crate::parser::ConfigError;

/// The pieces of an option's documentation: `[-c ][<type> ]description`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DocParts {
    pub short: Option<char>,
    pub type_name: Option<String>,
    pub description: String,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum DocError {
    ShortName,
    TypeName,
}

pub(crate) fn parse_doc(doc: &str) -> Result<DocParts, DocError> {
    let (short, rest) = match doc.strip_prefix('-') {
        Some(tail) => {
            let mut chars = tail.chars();

            match (chars.next(), chars.next()) {
                (Some(short), Some(' ')) if !short.is_whitespace() && !chars.as_str().is_empty() => {
                    (Some(short), chars.as_str())
                }
                _ => return Err(DocError::ShortName),
            }
        }
        None => (None, doc),
    };

    let (type_name, description) = match rest.strip_prefix('<') {
        Some(tail) => match tail.split_once('>') {
            Some((type_name, description)) => {
                (Some(type_name.to_string()), description.trim_start())
            }
            None => return Err(DocError::TypeName),
        },
        None => (None, rest),
    };

    Ok(DocParts {
        short,
        type_name,
        description: description.to_string(),
    })
}

/// The normalized, immutable metadata of one declared option, plus the binding to its storage.
pub(crate) struct Descriptor<'a> {
    pub identifier: String,
    /// The long name as advertised (hyphenated when configured so).
    pub long_name: String,
    pub short: Option<char>,
    pub aliases: Vec<String>,
    pub group: Option<String>,
    pub kind: ValueKind,
    pub default_text: Option<String>,
    pub unpublicized: bool,
    pub description: String,
    pub type_name: String,
    binding: Box<dyn Binding + 'a>,
}

impl<'a> std::fmt::Debug for Descriptor<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Descriptor")
            .field("identifier", &self.identifier)
            .field("long_name", &self.long_name)
            .field("short", &self.short)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<'a> Descriptor<'a> {
    /// Normalize a declaration.
    /// The group marker (if any) is handed back for the registry to resolve.
    pub(crate) fn build(
        declaration: Declaration<'a>,
        config: &Config,
    ) -> Result<(Self, Option<OptionGroup>), ConfigError> {
        let Declaration {
            identifier,
            doc,
            aliases,
            unpublicized,
            no_doc_default,
            group,
            binding,
        } = declaration;

        if identifier.is_empty() {
            return Err(ConfigError::EmptyIdentifier);
        }

        let kind = binding.kind();

        if let ValueKind::ListOf(inner) = &kind {
            if inner.is_list() {
                return Err(ConfigError::NestedList { identifier });
            }
        }

        if let Some(alias) = aliases.iter().find(|alias| !alias.starts_with('-')) {
            return Err(ConfigError::InvalidAlias {
                identifier: identifier.clone(),
                alias: alias.clone(),
            });
        }

        let DocParts {
            short,
            type_name,
            description,
        } = match parse_doc(&doc) {
            Ok(parts) => parts,
            Err(DocError::ShortName) => {
                return Err(ConfigError::MalformedShortName { identifier, doc })
            }
            Err(DocError::TypeName) => {
                return Err(ConfigError::MalformedTypeName { identifier, doc })
            }
        };

        let long_name = if config.use_dashes {
            identifier.replace('_', "-")
        } else {
            identifier.clone()
        };
        let default_text = if no_doc_default {
            None
        } else {
            binding.default_text()
        };

        Ok((
            Self {
                identifier,
                long_name,
                short,
                aliases,
                group: None,
                type_name: type_name.unwrap_or_else(|| kind.type_name()),
                kind,
                default_text,
                unpublicized,
                description,
                binding,
            },
            group,
        ))
    }

    pub(crate) fn requires_value(&self) -> bool {
        self.kind.requires_value()
    }

    pub(crate) fn is_list(&self) -> bool {
        self.kind.is_list()
    }

    /// Every name (with its dashes) that resolves to this option, labelled for error reporting.
    /// Both the hyphen and underscore spellings of the long name are included.
    pub(crate) fn lookup_names(&self, style: DashStyle) -> Vec<(&'static str, String)> {
        let prefix = style.prefix();
        let mut names = Vec::default();

        if let Some(short) = self.short {
            names.push(("short name", format!("-{short}")));
        }

        let hyphenated = format!("{prefix}{}", self.identifier.replace('_', "-"));
        let underscored = format!("{prefix}{}", self.identifier.replace('-', "_"));

        if hyphenated != underscored {
            names.push(("long name", underscored));
        }

        names.push(("long name", hyphenated));

        for alias in &self.aliases {
            names.push(("alias", alias.clone()));
        }

        names
    }

    /// Ex: `-o --outfile=<filename>`, or `--tag=<string> [+]` for lists.
    pub(crate) fn synopsis(&self, style: DashStyle) -> String {
        let mut synopsis = match self.short {
            Some(short) => format!("-{short} "),
            None => "".to_string(),
        };
        synopsis.push_str(&format!(
            "{prefix}{name}=<{type_name}>",
            prefix = style.prefix(),
            name = self.long_name,
            type_name = self.type_name,
        ));

        if self.is_list() {
            synopsis.push(' ');
            synopsis.push_str(LIST_MARKER);
        }

        synopsis
    }

    /// Ex: `-o --outfile field outfile`.
    pub(crate) fn describe(&self, style: DashStyle) -> String {
        let short = match self.short {
            Some(short) => format!("-{short} "),
            None => "".to_string(),
        };

        format!(
            "{short}{prefix}{name} field {identifier}",
            prefix = style.prefix(),
            name = self.long_name,
            identifier = self.identifier,
        )
    }

    pub(crate) fn assign(&mut self, text: &str, split_lists: bool) -> Result<(), CoerceError> {
        self.binding.assign(text, split_lists)
    }

    pub(crate) fn current(&self) -> String {
        self.binding.current()
    }

    pub(crate) fn current_values(&self) -> Vec<String> {
        self.binding.current_values()
    }
}
