//! `declopt` is a declarative command line option framework for Rust.
//!
//! Programs declare their options on the variables (typically struct fields) that hold them.
//! `declopt` then takes care of the rest: parsing the command line into those variables, validating values against their types, and rendering usage text.
//! It prioritizes the following concerns:
//! * *Declarations live with the data*:
//! The documentation, short name, aliases and grouping of an option are declared right beside the variable it sets.
//! * *Type driven values*:
//! Each variable's type decides how its value is parsed (ex: `i32`, `f64`, an enum, a `Regex`), and whether it is a list.
//! * *Familiar syntax*:
//! Long options (`--name=value` or `--name value`), short names (`-n`), boolean negation (`--no-name`) and comma joined options (`--a,--b=1`).
//! * *Collected usage*:
//! Options from several source units (ex: one per library module) are gathered into a single, aligned and optionally grouped usage text.
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```
//! use declopt::{derive::*, Options};
//!
//! #[derive(Default, Options)]
//! struct Summer {
//!     #[option("-v Print each item as it is summed")]
//!     pub verbose: bool,
//!     #[option("-s The starting value")]
//!     pub start: i64,
//! }
//!
//! let mut summer = Summer::default();
//! let mut parser = Options::new()
//!     .synopsis("summer [options] ITEM...")
//!     .declare(&mut summer)
//!     .build();
//! let items = parser.parse_tokens(&["-v", "--start=10", "1", "2", "3"]).unwrap();
//! drop(parser);
//!
//! let sum: i64 = summer.start + items.iter().map(|i| i.parse::<i64>().unwrap()).sum::<i64>();
//! assert!(summer.verbose);
//! assert_eq!(sum, 16);
//! ```
//! or equivalently via builder Api (this page):
//! ```
//! use declopt::{Declaration, Options, Scalar, SourceUnit};
//!
//! let mut verbose = false;
//! let mut start: i64 = 0;
//! let mut parser = Options::new()
//!     .synopsis("summer [options] ITEM...")
//!     .unit(SourceUnit::new("Summer")
//!         .add(Declaration::new("verbose", "-v Print each item as it is summed", Scalar::new(&mut verbose)))
//!         .add(Declaration::new("start", "-s The starting value", Scalar::new(&mut start))))
//!     .build();
//! let items = parser.parse_tokens(&["-v", "--start=10", "1", "2", "3"]).unwrap();
//! drop(parser);
//!
//! assert!(verbose);
//! assert_eq!(start, 10);
//! assert_eq!(items, vec!["1", "2", "3"]);
//! ```
//!
//! Both of these generate the same usage text:
//! ```console
//! Usage: summer [options] ITEM...
//!   -v --verbose=<boolean> - Print each item as it is summed [default false]
//!   -s --start=<long>      - The starting value [default 0]
//! ```
//!
//! # Builder Api
//! Configure `declopt` by starting with [`Options`] and adding [`SourceUnit`]s of [`Declaration`]s.
//!
//! Each declaration binds a variable through one of three bindings:
//! * [`Scalar`]: a single value; a repeated option overwrites the previous value.
//! * [`Optional`]: an `Option<T>`, set to `Some(..)` when the option is given.
//! * [`Collection`]: a `Vec<T>` list option; each occurrence appends.
//!
//! Any type implementing [OptionValue](./prelude/trait.OptionValue.html) may be bound.
//! `declopt` provides this for `bool`, `char`, `i8`, `i16`, `i32`, `i64`, `f32`, `f64`, `String`, `PathBuf` and `Regex`.
//! Enums may use [`enum_constant`] (or `#[derive(OptionEnum)]`), and any [`std::str::FromStr`] type may use [`string_constructible!`].
//!
//! ### Documentation
//! The documentation of a declaration follows the syntax `[-c ][<type> ]description`:
//! * A leading `-c` gives the option the short name `c`.
//! * A `<type>` overrides the type name shown in usage (ex: `<file>` rather than `<string>`).
//! * The remainder describes the option.
//!
//! The current value of the variable at build time is shown as its default (ex: `[default 4096]`), unless the declaration is `no_doc_default`.
//!
//! ### Groups
//! Either every source unit declares its [`OptionGroup`], or none do.
//! Grouped usage shows each group under its own heading, and may be restricted to named groups.
//! Unpublicized options and groups are hidden from usage, unless explicitly requested.
//!
//! # Cli Semantics
//! * Long options are given with two dashes (`--name`), or one dash in [single dash style](./struct.Options.html#method.single_dash).
//! Multi-word names may be spelled with either hyphens or underscores (ex: `--dry-run` or `--dry_run`).
//! * A value is given either inline (`--name=value`) or as the next token (`--name value`).
//! * Booleans need no value: `--verbose` sets `true`, while `--no-verbose` sets `false`.
//! * Several options may be joined into one token with `,-`: `--verbose,--size=1` is `--verbose --size=1`.
//! * Everything else is a positional argument, returned in order from parsing.
//! Parsing of options stops after `--`, or (when [configured](./struct.Options.html#method.parse_after_arg)) after the first positional argument.
//!
//! # Features
//! * `tracing_debug`: Emit debug logs of the parser internals via the `tracing` crate.
pub mod derive;
pub use declopt_builder::*;
