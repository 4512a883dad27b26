use std::env;

use crate::model::Config;
use crate::parser::{dispatch, tokenize, ArgError, Printer, Registry, UsageError, UserInterface};

/// The configured option parser.
/// Built via [`Options::build`](crate::Options::build) or [`Options::build_parser`](crate::Options::build_parser).
///
/// The parser mutably borrows the declared variables; drop it before reading them.
pub struct OptionsParser<'a> {
    synopsis: Option<String>,
    registry: Registry<'a>,
    config: Config,
    printer: Printer,
    options_string: String,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> OptionsParser<'a> {
    pub(crate) fn new(
        synopsis: Option<String>,
        registry: Registry<'a>,
        config: Config,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            synopsis,
            registry,
            config,
            printer,
            options_string: String::default(),
            user_interface,
        }
    }

    /// Run the parser against the input tokens, returning the positional arguments in order.
    ///
    /// Options are applied to their variables as they are encountered.
    /// The first error aborts the parse, without rolling back the options already applied.
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<Vec<String>, ArgError> {
        dispatch(
            &mut self.registry,
            &self.config,
            &mut self.options_string,
            tokens,
        )
    }

    /// Run the parser against a raw command line, split via [`tokenize`].
    ///
    /// ### Example
    /// ```
    /// # use declopt_builder as declopt;
    /// use declopt::{Declaration, Options, Scalar, SourceUnit};
    ///
    /// let mut name = String::default();
    /// let mut parser = Options::new()
    ///     .unit(SourceUnit::new("Program")
    ///         .add(Declaration::new("name", "The name", Scalar::new(&mut name))))
    ///     .build();
    ///
    /// let arguments = parser.parse_str("--name=abc  first 'second'").unwrap();
    /// drop(parser);
    ///
    /// assert_eq!(arguments, vec!["first", "'second'"]);
    /// assert_eq!(name, "abc");
    /// ```
    pub fn parse_str(&mut self, raw: &str) -> Result<Vec<String>, ArgError> {
        let tokens = tokenize(raw);
        self.parse_tokens(
            tokens
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }

    /// Parse, reporting any error along with either the message or (when absent) the usage text.
    fn parse_reporting(&mut self, tokens: &[&str], message: Option<&str>) -> Result<Vec<String>, i32> {
        match self.parse_tokens(tokens) {
            Ok(positionals) => Ok(positionals),
            Err(error) => {
                self.user_interface.print_error(error.to_string());

                match message {
                    Some(message) => self.user_interface.print(message.to_string()),
                    None => self.print_usage(),
                }

                Err(1)
            }
        }
    }

    /// Run the parser against the input tokens.
    /// If an error is encountered, prints it along with the usage text and exits with error code `1` (via [`std::process::exit`]).
    pub fn parse_or_usage(&mut self, tokens: &[&str]) -> Vec<String> {
        match self.parse_reporting(tokens, None) {
            Ok(positionals) => positionals,
            Err(exit_code) => std::process::exit(exit_code),
        }
    }

    /// Run the parser against the input tokens.
    /// If an error is encountered, prints it along with the message (ex: `Pass --help for the options.`) and exits with error code `1`.
    pub fn parse_or_message(&mut self, message: &str, tokens: &[&str]) -> Vec<String> {
        match self.parse_reporting(tokens, Some(message)) {
            Ok(positionals) => positionals,
            Err(exit_code) => std::process::exit(exit_code),
        }
    }

    /// Run the parser against the Cli [`env::args`], as per [`OptionsParser::parse_or_usage`].
    pub fn parse(&mut self) -> Vec<String> {
        let command_input: Vec<String> = env::args().skip(1).collect();
        self.parse_or_usage(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }

    /// The usage text, one aligned line per option.
    ///
    /// When the options are grouped, only the named `groups` are included, or every publicized group when none are named.
    /// Unpublicized options and groups are included only when requested.
    pub fn usage(&self, include_unpublicized: bool, groups: &[&str]) -> Result<String, UsageError> {
        self.printer
            .usage(&self.registry, self.config.style, include_unpublicized, groups)
    }

    /// Print the synopsis and usage text of the publicized options, wrapped to the terminal.
    pub fn print_usage(&self) {
        self.printer.print_usage(
            self.synopsis.as_deref(),
            &self.registry,
            self.config.style,
            &*self.user_interface,
        );
    }

    /// The current value of each option, one `name = value` line per option.
    pub fn settings(&self, include_unpublicized: bool) -> String {
        self.printer.settings(&self.registry, include_unpublicized)
    }

    /// The current value of each option as a command line (ex: `--size=3 --tag=a --tag=b`).
    /// Unset optional values are omitted.
    ///
    /// The line reparses to the same values through [`OptionsParser::parse_str`], except for values containing whitespace or `,-`.
    pub fn settings_line(&self, include_unpublicized: bool) -> String {
        self.printer
            .settings_line(&self.registry, self.config.style, include_unpublicized)
    }

    /// Every option applied so far, as it appeared on the command line (less the positional arguments).
    pub fn options_string(&self) -> &str {
        &self.options_string
    }
}

impl<'a> std::fmt::Display for OptionsParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self
            .registry
            .descriptors()
            .iter()
            .map(|d| d.describe(self.config.style))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}
