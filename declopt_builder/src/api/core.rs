use crate::api::SourceUnit;
use crate::model::{Config, DashStyle};
use crate::parser::{ConfigError, ConsoleInterface, OptionsParser, Printer, Registry, UserInterface};
use crate::prelude::DeclareOptions;

/// The option framework configuration: the declared options and how they are parsed.
///
/// ### Example
/// ```
/// # use declopt_builder as declopt;
/// use declopt::{Declaration, Options, Scalar, SourceUnit};
///
/// let mut verbose = false;
/// let mut parser = Options::new()
///     .synopsis("program [options] FILE")
///     .unit(SourceUnit::new("Program")
///         .add(Declaration::new("verbose", "-v Print progress", Scalar::new(&mut verbose))))
///     .build();
///
/// let arguments = parser.parse_tokens(&["-v", "input.txt"]).unwrap();
/// drop(parser);
///
/// assert_eq!(arguments, vec!["input.txt"]);
/// assert!(verbose);
/// ```
pub struct Options<'a> {
    synopsis: Option<String>,
    config: Config,
    units: Vec<SourceUnit<'a>>,
}

impl<'a> Default for Options<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Options<'a> {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self {
            synopsis: None,
            config: Config::default(),
            units: Vec::default(),
        }
    }

    /// Document the usage synopsis, printed as `Usage: <synopsis>` ahead of the options.
    /// If repeated, only the final synopsis will apply.
    pub fn synopsis(mut self, synopsis: impl Into<String>) -> Self {
        self.synopsis.replace(synopsis.into());
        self
    }

    /// Use a single dash for long options (ex: `-verbose` rather than `--verbose`).
    pub fn single_dash(mut self, single_dash: bool) -> Self {
        self.config.style = if single_dash {
            DashStyle::Single
        } else {
            DashStyle::Double
        };
        self
    }

    /// Whether options may follow the first positional argument.
    /// When `false`, everything after the first positional argument is positional.
    pub fn parse_after_arg(mut self, parse_after_arg: bool) -> Self {
        self.config.parse_after_arg = parse_after_arg;
        self
    }

    /// Split list option values on whitespace, adding each piece to the list.
    ///
    /// ### Example
    /// ```
    /// # use declopt_builder as declopt;
    /// use declopt::{Collection, Declaration, Options, SourceUnit};
    ///
    /// let mut items: Vec<i32> = Vec::default();
    /// let mut parser = Options::new()
    ///     .space_separated_lists(true)
    ///     .unit(SourceUnit::new("Program")
    ///         .add(Declaration::new("item", "The items", Collection::new(&mut items))))
    ///     .build();
    ///
    /// parser.parse_tokens(&["--item=1 2", "--item=3"]).unwrap();
    /// drop(parser);
    ///
    /// assert_eq!(items, vec![1, 2, 3]);
    /// ```
    pub fn space_separated_lists(mut self, space_separated_lists: bool) -> Self {
        self.config.space_separated_lists = space_separated_lists;
        self
    }

    /// Advertise multi-word long names with hyphens (ex: `--dry-run`) rather than underscores.
    /// Both spellings are always accepted.
    pub fn use_dashes(mut self, use_dashes: bool) -> Self {
        self.config.use_dashes = use_dashes;
        self
    }

    /// Add the declarations of a source unit, after those already added.
    pub fn unit(mut self, unit: SourceUnit<'a>) -> Self {
        self.units.push(unit);
        self
    }

    /// Add the declarations of a program struct, typically via `#[derive(Options)]`.
    pub fn declare(self, declarer: &'a mut (impl DeclareOptions + ?Sized)) -> Self {
        self.unit(declarer.source_unit())
    }

    fn build_with(
        self,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<OptionsParser<'a>, ConfigError> {
        let registry = Registry::build(self.units, &self.config)?;
        Ok(OptionsParser::new(
            self.synopsis,
            registry,
            self.config,
            printer,
            user_interface,
        ))
    }

    /// Build the parser as a Result, reporting to the given user interface.
    pub fn build_parser_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<OptionsParser<'a>, ConfigError> {
        self.build_with(Printer::terminal(), user_interface)
    }

    /// Build the parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    pub fn build_parser(self) -> Result<OptionsParser<'a>, ConfigError> {
        self.build_parser_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> OptionsParser<'a> {
        match self.build_parser() {
            Ok(parser) => parser,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn build_plain(
        self,
    ) -> Result<(OptionsParser<'a>, crate::parser::util::ReceiverInterface), ConfigError> {
        let (sender, receiver) = crate::parser::util::channel_interface();
        let parser = self.build_with(Printer::plain(), Box::new(sender))?;
        Ok((parser, receiver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Collection, Declaration, OptionGroup, Optional, Scalar};
    use crate::parser::ArgError;
    use rstest::rstest;

    struct Program {
        verbose: bool,
        size: i32,
        tags: Vec<String>,
    }

    impl DeclareOptions for Program {
        fn source_unit(&mut self) -> SourceUnit<'_> {
            SourceUnit::new("Program")
                .add(Declaration::new("verbose", "-v be loud", Scalar::new(&mut self.verbose)))
                .add(Declaration::new("buffer_size", "the size", Scalar::new(&mut self.size)))
                .add(Declaration::new("tag", "the tags", Collection::new(&mut self.tags)))
        }
    }

    #[test]
    fn empty_build() {
        // Setup
        let options = Options::new();

        // Execute
        let (mut parser, _) = options.build_plain().unwrap();

        // Verify
        assert_eq!(parser.parse_tokens(&[]), Ok(vec![]));
        assert_eq!(parser.usage(false, &[]), Ok("".to_string()));
    }

    #[rstest]
    #[case(vec![], false, 0, vec![], vec![])]
    #[case(vec!["a"], false, 0, vec![], vec!["a"])]
    #[case(vec!["-v", "a"], true, 0, vec![], vec!["a"])]
    #[case(vec!["--buffer-size", "3", "--tag=x"], false, 3, vec!["x"], vec![])]
    #[case(vec!["a", "--buffer_size=3", "b"], false, 3, vec![], vec!["a", "b"])]
    fn declare(
        #[case] tokens: Vec<&str>,
        #[case] expected_verbose: bool,
        #[case] expected_size: i32,
        #[case] expected_tags: Vec<&str>,
        #[case] expected_positionals: Vec<&str>,
    ) {
        // Setup
        let mut program = Program {
            verbose: false,
            size: 0,
            tags: Vec::default(),
        };
        let (mut parser, _) = Options::new().declare(&mut program).build_plain().unwrap();

        // Execute
        let positionals = parser.parse_tokens(tokens.as_slice()).unwrap();
        drop(parser);

        // Verify
        assert_eq!(positionals, expected_positionals);
        assert_eq!(program.verbose, expected_verbose);
        assert_eq!(program.size, expected_size);
        assert_eq!(program.tags, expected_tags);
    }

    #[test]
    fn configuration() {
        // Setup
        let mut flag = false;
        let mut multi_word: Option<String> = None;
        let mut items: Vec<i32> = Vec::default();
        let options = Options::new()
            .single_dash(true)
            .parse_after_arg(false)
            .space_separated_lists(true)
            .use_dashes(false)
            .unit(
                SourceUnit::new("Program")
                    .add(Declaration::new("flag", "a flag", Scalar::new(&mut flag)))
                    .add(Declaration::new(
                        "multi_word",
                        "words",
                        Optional::new(&mut multi_word),
                    ))
                    .add(Declaration::new("item", "items", Collection::new(&mut items))),
            );

        // Execute
        let (mut parser, _) = options.build_plain().unwrap();
        let positionals = parser
            .parse_tokens(&["-flag", "-multi-word=a b", "-item=1 2", "x", "-item=3"])
            .unwrap();
        let usage = parser.usage(false, &[]).unwrap();
        drop(parser);

        // Verify
        assert_eq!(positionals, vec!["x", "-item=3"]);
        assert!(flag);
        assert_eq!(multi_word, Some("a b".to_string()));
        assert_eq!(items, vec![1, 2]);
        assert!(usage.contains("-multi_word=<string>"));
        assert!(usage.contains("-item=<int> [+]"));
    }

    #[test]
    fn multiple_units() {
        // Setup
        let mut a = false;
        let mut b = false;
        let options = Options::new()
            .unit(
                SourceUnit::new("First").add(
                    Declaration::new("a", "-a first", Scalar::new(&mut a))
                        .group(OptionGroup::new("First")),
                ),
            )
            .unit(
                SourceUnit::new("Second").add(
                    Declaration::new("b", "-b second", Scalar::new(&mut b))
                        .group(OptionGroup::new("Second")),
                ),
            );

        // Execute
        let (mut parser, _) = options.build_plain().unwrap();
        parser.parse_tokens(&["-a", "-b"]).unwrap();
        drop(parser);

        // Verify
        assert!(a);
        assert!(b);
    }

    #[test]
    fn build_parser_invalid() {
        // Setup
        let mut a = false;
        let mut b = false;
        let options = Options::new().unit(
            SourceUnit::new("Program")
                .add(Declaration::new("a", "-x first", Scalar::new(&mut a)))
                .add(Declaration::new("b", "-x second", Scalar::new(&mut b))),
        );

        // Execute
        let result = options.build_parser();

        // Verify
        assert_matches!(
            result.err(),
            Some(ConfigError::DuplicateName { what: "short name", name, identifier }) => {
                assert_eq!(name, "-x");
                assert_eq!(identifier, "b");
            }
        );
    }

    #[test]
    fn parse_error() {
        // Setup
        let mut size: i32 = 0;
        let options = Options::new().unit(
            SourceUnit::new("Program")
                .add(Declaration::new("size", "the size", Scalar::new(&mut size))),
        );
        let (mut parser, _) = options.build_plain().unwrap();

        // Execute
        let result = parser.parse_tokens(&["--size=abc"]);

        // Verify
        assert_matches!(result, Err(ArgError::Malformed { .. }));
    }
}
