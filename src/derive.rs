//! Derive Api for `declopt` configuration.
//!
//! ### Getting Started
//! Declare options on a program struct `S` instrumented with `#[derive(Options)]`.
//! This implements [DeclareOptions](../prelude/trait.DeclareOptions.html) for `S`, so that it may be passed to [`Options::declare`](../struct.Options.html#method.declare).
//! Each `pub` field marked with `#[option(..)]` becomes an option named after the field; other fields are left alone.
//!
//! ```
//! use declopt::{derive::*, Options};
//! use std::path::PathBuf;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, OptionEnum)]
//! enum Format {
//!     Plain,
//!     PrettyJson,
//! }
//!
//! #[derive(Options)]
//! struct Program {
//!     #[option("-o <file> Where to write the report")]
//!     #[option_group("Report")]
//!     pub out_file: PathBuf,
//!     #[option("The report format")]
//!     pub format: Format,
//!     #[option("Skip the named sections", alias = "--skip")]
//!     pub exclude: Vec<String>,
//!     #[option("Stop after this many records")]
//!     pub limit: Option<i32>,
//!     #[option("Print progress")]
//!     #[option_group("Debugging", unpublicized)]
//!     pub trace: bool,
//!     seen: usize,
//! }
//!
//! let mut program = Program {
//!     out_file: PathBuf::from("report.txt"),
//!     format: Format::Plain,
//!     exclude: Vec::default(),
//!     limit: None,
//!     trace: false,
//!     seen: 0,
//! };
//! let mut parser = Options::new().declare(&mut program).build();
//! parser.parse_tokens(&["--format=pretty-json", "--skip", "intro", "--limit=5"]).unwrap();
//! drop(parser);
//!
//! assert_eq!(program.format, Format::PrettyJson);
//! assert_eq!(program.exclude, vec!["intro"]);
//! assert_eq!(program.limit, Some(5));
//! # assert_eq!(program.seen, 0);
//! ```
//!
//! ### Option Configuration
//! The binding follows from the field type:
//! ```console
//! Type        | Binding
//! -----------------------------------
//! Vec<T>      | Collection::new(..)
//! Option<T>   | Optional::new(..)
//! T           | Scalar::new(..)
//! ```
//!
//! The field attributes configure the declaration, and may be combined as necessary.
//! * `#[option("..")]` marks the field as an option, with the given documentation (`[-c ][<type> ]description`).
//! A bare `#[option]` declares an undocumented option.
//! * `#[option(.., alias = "..")]` adds an alias (repeatable).
//! Each alias carries its dashes (ex: `alias = "--skip"`).
//! * `#[option(.., no_doc_default)]` hides the default value from usage.
//! * `#[unpublicized]` hides the option from usage.
//! * `#[option_group("Name")]` or `#[option_group("Name", unpublicized)]` starts a group, holding this option and those declared after it.
//! When grouping, every struct passed to `Options` must start a group on its first option.
//!
//! A partial example of these rules is provided as follows:
//! ```ignore
//! #[derive(Options)]
//! struct Program {
//!     #[option("-d Dry run", alias = "-n")]
//!     pub dry_run: bool,
//!     // the above generates:
//!     //  .add(Declaration::new("dry_run", "-d Dry run", Scalar::new(&mut self.dry_run))
//!     //      .alias("-n"))
//!
//!     #[option("The api key", no_doc_default)]
//!     #[unpublicized]
//!     pub key: Option<String>,
//!     // the above generates:
//!     //  .add(Declaration::new("key", "The api key", Optional::new(&mut self.key))
//!     //      .unpublicized()
//!     //      .no_doc_default())
//! }
//! ```
//!
//! ### Enums
//! Instrument a field-less enum with `#[derive(OptionEnum)]` to implement [OptionValue](../prelude/trait.OptionValue.html).
//! Each variant is matched by its SCREAMING_SNAKE name (ex: `PrettyJson` as `PRETTY_JSON`), case-insensitively and with hyphens in place of underscores (ex: `--format=pretty-json`).

pub use declopt_derive::*;
