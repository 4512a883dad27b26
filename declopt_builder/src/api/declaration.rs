use crate::api::capture::Binding;

/// Marker starting a named group of options, for usage rendering.
///
/// The group applies to the declaration carrying it, and to each following declaration in the same [`SourceUnit`], until the next marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    pub(crate) name: String,
    pub(crate) unpublicized: bool,
}

impl OptionGroup {
    /// Create a group marker.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unpublicized: false,
        }
    }

    /// Omit the whole group from the default usage text.
    pub fn unpublicized(mut self) -> Self {
        self.unpublicized = true;
        self
    }
}

/// A declared option: an identifier, its documentation and the binding to its storage.
///
/// The documentation follows a small grammar:
/// * An optional leading `-c ` names the short option `c`.
/// * An optional leading `<name> ` overrides the type name shown in usage text.
/// * The remainder is the description.
///
/// ### Example
/// ```
/// # use declopt_builder as declopt;
/// use declopt::{Declaration, Scalar};
///
/// let mut outfile = std::path::PathBuf::from("/tmp/foobar");
/// let declaration = Declaration::new("outfile", "-o <file> The output file", Scalar::new(&mut outfile))
///     .alias("--output");
/// ```
pub struct Declaration<'a> {
    pub(crate) identifier: String,
    pub(crate) doc: String,
    pub(crate) aliases: Vec<String>,
    pub(crate) unpublicized: bool,
    pub(crate) no_doc_default: bool,
    pub(crate) group: Option<OptionGroup>,
    pub(crate) binding: Box<dyn Binding + 'a>,
}

impl<'a> Declaration<'a> {
    /// Declare an option from its identifier (ex: a field name), documentation and binding.
    pub fn new(
        identifier: impl Into<String>,
        doc: impl Into<String>,
        binding: impl Binding + 'a,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            doc: doc.into(),
            aliases: Vec::default(),
            unpublicized: false,
            no_doc_default: false,
            group: None,
            binding: Box::new(binding),
        }
    }

    /// Add an alias, written with its dashes (ex: `-help` or `--optimise`).
    /// May be repeated.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Omit this option from the default usage text.
    /// The option still parses normally.
    pub fn unpublicized(mut self) -> Self {
        self.unpublicized = true;
        self
    }

    /// Do not advertise the initial value as a default in usage text.
    pub fn no_doc_default(mut self) -> Self {
        self.no_doc_default = true;
        self
    }

    /// Start a new option group with this declaration.
    pub fn group(mut self, group: OptionGroup) -> Self {
        self.group.replace(group);
        self
    }
}

impl<'a> std::fmt::Debug for Declaration<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Declaration[{identifier}, {kind}, \"{doc}\"]",
            identifier = self.identifier,
            kind = self.binding.kind(),
            doc = self.doc,
        )
    }
}

/// An ordered sequence of declarations coming from one place in the program (ex: one struct).
///
/// Declaration order defines usage ordering and group membership.
#[derive(Debug)]
pub struct SourceUnit<'a> {
    pub(crate) name: String,
    pub(crate) declarations: Vec<Declaration<'a>>,
}

impl<'a> SourceUnit<'a> {
    /// Create an empty source unit.
    /// The name is only used to report construction errors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::default(),
        }
    }

    /// Add a declaration after those already added.
    pub fn add(mut self, declaration: Declaration<'a>) -> Self {
        self.declarations.push(declaration);
        self
    }
}
