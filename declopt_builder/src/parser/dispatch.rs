use crate::constant::*;
use crate::model::{Config, ValueKind};
use crate::parser::{ArgError, Registry};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Split off the text following a `,-` separator, to be processed as its own token.
/// A leading `,` is discarded.
fn split_pending(token: &str) -> (&str, Option<String>) {
    let token = match token.strip_prefix(',') {
        Some(rest) if rest.starts_with('-') => rest,
        _ => token,
    };

    match token.find(",-") {
        Some(position) if position > 0 => (
            &token[..position],
            Some(token[position + 1..].to_string()),
        ),
        _ => (token, None),
    }
}

/// Append `name[=value]` to the options echo, quoting the value when it contains a space.
fn record(echo: &mut String, name: &str, value: Option<&str>) -> Result<(), ArgError> {
    let quoted = match value {
        None => None,
        Some(value) if !value.contains(' ') => Some(value.to_string()),
        Some(value) if !value.contains('\'') => Some(format!("'{value}'")),
        Some(value) if !value.contains('"') => Some(format!("\"{value}\"")),
        Some(value) => {
            return Err(ArgError::Unquotable {
                value: value.to_string(),
            })
        }
    };

    if !echo.is_empty() {
        echo.push(' ');
    }

    echo.push_str(name);

    if let Some(quoted) = quoted {
        echo.push('=');
        echo.push_str(&quoted);
    }

    Ok(())
}

/// Resolve `--no-name` to the boolean option `--name`.
fn resolve_negation(registry: &Registry, config: &Config, name: &str) -> Option<usize> {
    let prefix = config.style.prefix();
    let negated = name.strip_prefix(prefix)?.strip_prefix(NEGATION_PREFIX)?;
    let index = registry.lookup(&format!("{prefix}{negated}"))?;

    match registry.descriptor(index).kind {
        ValueKind::Boolean => Some(index),
        _ => None,
    }
}

/// Walk the tokens, applying every option to its binding and collecting the positional arguments.
///
/// The first error aborts the walk; options applied before it stay applied.
pub(crate) fn dispatch(
    registry: &mut Registry,
    config: &Config,
    echo: &mut String,
    tokens: &[&str],
) -> Result<Vec<String>, ArgError> {
    let mut positionals = Vec::default();
    // Once set, every remaining token is positional.
    let mut ignore_options = false;
    let mut pending: Option<String> = None;
    let mut index = 0;

    while index < tokens.len() {
        let token = match pending.take() {
            Some(token) => token,
            None => tokens[index].to_string(),
        };

        if !ignore_options && token == "--" {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Token '--' ends option processing.");
            }

            ignore_options = true;
        } else if !ignore_options && token.starts_with('-') {
            let (option, tail) = split_pending(&token);
            pending = tail;

            let (name, inline_value) = match option.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (option, None),
            };

            let (position, value) = match registry.lookup(name) {
                Some(position) => {
                    let given = match inline_value {
                        Some(value) => Some(value.to_string()),
                        None if registry.descriptor(position).requires_value() => {
                            index += 1;

                            match tokens.get(index) {
                                Some(value) => Some(value.to_string()),
                                None => {
                                    return Err(ArgError::MissingValue {
                                        arg: option.to_string(),
                                    })
                                }
                            }
                        }
                        None => None,
                    };

                    record(echo, name, given.as_deref())?;
                    (position, given.unwrap_or_else(|| IMPLICIT_TRUE.to_string()))
                }
                None => match resolve_negation(registry, config, name) {
                    Some(position) => {
                        if inline_value.is_some() {
                            return Err(ArgError::NegatedValue {
                                option: name.to_string(),
                            });
                        }

                        record(echo, name, None)?;
                        (position, "false".to_string())
                    }
                    None => {
                        return Err(ArgError::UnknownOption {
                            name: name.to_string(),
                            arg: option.to_string(),
                        })
                    }
                },
            };

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Token '{option}' assigns '{value}' to {:?}.", registry.descriptor(position));
            }

            registry
                .descriptor_mut(position)
                .assign(&value, config.space_separated_lists)
                .map_err(|error| ArgError::from_coerce(name, error))?;
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Token '{token}' is positional.");
            }

            if !config.parse_after_arg {
                ignore_options = true;
            }

            positionals.push(token);
        }

        if pending.is_none() {
            index += 1;
        }
    }

    Ok(positionals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Collection, Declaration, Optional, Scalar, SourceUnit};
    use crate::model::DashStyle;
    use rstest::rstest;

    #[derive(Debug, PartialEq)]
    struct Fixture {
        flag: bool,
        quiet: bool,
        dry_run: bool,
        name: String,
        size: i32,
        ratio: Option<f64>,
        tags: Vec<String>,
        numbers: Vec<i32>,
    }

    impl Default for Fixture {
        fn default() -> Self {
            Self {
                flag: false,
                quiet: true,
                dry_run: false,
                name: "x".to_string(),
                size: 0,
                ratio: None,
                tags: Vec::default(),
                numbers: Vec::default(),
            }
        }
    }

    fn run(
        fixture: &mut Fixture,
        config: Config,
        tokens: &[&str],
    ) -> (Result<Vec<String>, ArgError>, String) {
        let unit = SourceUnit::new("Fixture")
            .add(Declaration::new("flag", "-f a flag", Scalar::new(&mut fixture.flag)))
            .add(Declaration::new("quiet", "be quiet", Scalar::new(&mut fixture.quiet)))
            .add(Declaration::new("dry_run", "pretend", Scalar::new(&mut fixture.dry_run)))
            .add(Declaration::new("name", "-n the name", Scalar::new(&mut fixture.name)))
            .add(Declaration::new("size", "-s the size", Scalar::new(&mut fixture.size)))
            .add(Declaration::new("ratio", "the ratio", Optional::new(&mut fixture.ratio)))
            .add(
                Declaration::new("tag", "the tags", Collection::new(&mut fixture.tags))
                    .alias("-t"),
            )
            .add(Declaration::new("number", "numbers", Collection::new(&mut fixture.numbers)));
        let mut registry = Registry::build(vec![unit], &config).unwrap();
        let mut echo = String::default();
        let result = dispatch(&mut registry, &config, &mut echo, tokens);
        (result, echo)
    }

    fn positionals(values: &[&str]) -> Result<Vec<String>, ArgError> {
        Ok(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn dispatch_empty() {
        let mut fixture = Fixture::default();
        let (result, echo) = run(&mut fixture, Config::default(), &[]);

        assert_eq!(result, positionals(&[]));
        assert_eq!(echo, "");
        assert_eq!(fixture, Fixture::default());
    }

    #[test]
    fn dispatch_options() {
        let mut fixture = Fixture::default();
        let (result, echo) = run(
            &mut fixture,
            Config::default(),
            &["--flag", "--name=hello", "pos1"],
        );

        assert_eq!(result, positionals(&["pos1"]));
        assert_eq!(echo, "--flag --name=hello");
        assert!(fixture.flag);
        assert_eq!(fixture.name, "hello");
    }

    #[rstest]
    #[case(&["--size", "3"])]
    #[case(&["-s", "3"])]
    #[case(&["-s=3"])]
    #[case(&["--size=1", "--size=3"])]
    #[case(&["--size=0x3"])]
    fn dispatch_size(#[case] tokens: &[&str]) {
        let mut fixture = Fixture::default();
        let (result, _) = run(&mut fixture, Config::default(), tokens);

        assert_eq!(result, positionals(&[]));
        assert_eq!(fixture.size, 3);
    }

    #[rstest]
    #[case(&["--flag"], true)]
    #[case(&["-f"], true)]
    #[case(&["--flag=false"], false)]
    #[case(&["--flag=T"], true)]
    #[case(&["--flag", "--flag=f"], false)]
    fn dispatch_boolean(#[case] tokens: &[&str], #[case] expected: bool) {
        let mut fixture = Fixture::default();
        let (result, _) = run(&mut fixture, Config::default(), tokens);

        assert_eq!(result, positionals(&[]));
        assert_eq!(fixture.flag, expected);
    }

    #[test]
    fn dispatch_boolean_bare_value() {
        // A bare boolean does not consume the following token.
        let mut fixture = Fixture::default();
        let (result, _) = run(&mut fixture, Config::default(), &["--flag", "false"]);

        assert_eq!(result, positionals(&["false"]));
        assert!(fixture.flag);
    }

    #[rstest]
    #[case(&["--dry-run"])]
    #[case(&["--dry_run"])]
    fn dispatch_spellings(#[case] tokens: &[&str]) {
        let mut fixture = Fixture::default();
        let (result, _) = run(&mut fixture, Config::default(), tokens);

        assert_eq!(result, positionals(&[]));
        assert!(fixture.dry_run);
    }

    #[test]
    fn dispatch_optional() {
        let mut fixture = Fixture::default();
        let (result, _) = run(&mut fixture, Config::default(), &["--ratio=0.5"]);

        assert_eq!(result, positionals(&[]));
        assert_eq!(fixture.ratio, Some(0.5));
    }

    #[test]
    fn dispatch_list() {
        let mut fixture = Fixture::default();
        let (result, _) = run(
            &mut fixture,
            Config::default(),
            &["--tag=a", "-t", "b", "--tag=c d", "--number=1", "--number", "2"],
        );

        assert_eq!(result, positionals(&[]));
        assert_eq!(fixture.tags, vec!["a", "b", "c d"]);
        assert_eq!(fixture.numbers, vec![1, 2]);
    }

    #[test]
    fn dispatch_list_space_separated() {
        let mut fixture = Fixture::default();
        let config = Config {
            space_separated_lists: true,
            ..Config::default()
        };
        let (result, _) = run(
            &mut fixture,
            config,
            &["--tag=a b", "--tag=c", "--number=1  2 3", "--name=a b"],
        );

        assert_eq!(result, positionals(&[]));
        assert_eq!(fixture.tags, vec!["a", "b", "c"]);
        assert_eq!(fixture.numbers, vec![1, 2, 3]);
        // Only lists are split.
        assert_eq!(fixture.name, "a b");
    }

    #[test]
    fn dispatch_list_space_separated_invalid() {
        let mut fixture = Fixture::default();
        let config = Config {
            space_separated_lists: true,
            ..Config::default()
        };
        let (result, _) = run(&mut fixture, config, &["--number=1 x 3"]);

        assert_eq!(
            result,
            Err(ArgError::Malformed {
                option: "--number".to_string(),
                token: "x".to_string(),
                expected: "an integer",
            })
        );
        assert_eq!(fixture.numbers, vec![1]);
    }

    #[rstest]
    #[case(&["--nope"], "--nope", "--nope")]
    #[case(&["--nope=3"], "--nope", "--nope=3")]
    #[case(&["-"], "-", "-")]
    #[case(&["-flag"], "-flag", "-flag")]
    #[case(&["--no-size"], "--no-size", "--no-size")]
    #[case(&["--no-ratio"], "--no-ratio", "--no-ratio")]
    fn dispatch_unknown(#[case] tokens: &[&str], #[case] name: &str, #[case] arg: &str) {
        let mut fixture = Fixture::default();
        let (result, _) = run(&mut fixture, Config::default(), tokens);

        assert_eq!(
            result,
            Err(ArgError::UnknownOption {
                name: name.to_string(),
                arg: arg.to_string(),
            })
        );
    }

    #[rstest]
    #[case(&["--name"], "--name")]
    #[case(&["pos", "-s"], "-s")]
    #[case(&["--tag"], "--tag")]
    fn dispatch_missing_value(#[case] tokens: &[&str], #[case] arg: &str) {
        let mut fixture = Fixture::default();
        let (result, _) = run(&mut fixture, Config::default(), tokens);

        assert_eq!(
            result,
            Err(ArgError::MissingValue {
                arg: arg.to_string(),
            })
        );
    }

    #[test]
    fn dispatch_negation() {
        let mut fixture = Fixture::default();
        let (result, echo) = run(&mut fixture, Config::default(), &["--flag", "--no-quiet"]);

        assert_eq!(result, positionals(&[]));
        assert_eq!(echo, "--flag --no-quiet");
        assert!(!fixture.quiet);
        assert!(fixture.flag);
    }

    #[test]
    fn dispatch_negation_value() {
        let mut fixture = Fixture::default();
        let (result, _) = run(&mut fixture, Config::default(), &["--no-quiet=true"]);

        assert_eq!(
            result,
            Err(ArgError::NegatedValue {
                option: "--no-quiet".to_string(),
            })
        );
        assert!(fixture.quiet);
    }

    #[test]
    fn dispatch_negation_single_dash() {
        let mut fixture = Fixture::default();
        let config = Config {
            style: DashStyle::Single,
            ..Config::default()
        };
        let (result, _) = run(&mut fixture, config, &["-no-quiet", "-flag"]);

        assert_eq!(result, positionals(&[]));
        assert!(!fixture.quiet);
        assert!(fixture.flag);
    }

    #[rstest]
    #[case(&["--", "--flag"], &["--flag"])]
    #[case(&["a", "--", "b", "--flag"], &["a", "b", "--flag"])]
    #[case(&["--", "--"], &["--"])]
    fn dispatch_terminator(#[case] tokens: &[&str], #[case] expected: &[&str]) {
        let mut fixture = Fixture::default();
        let (result, _) = run(&mut fixture, Config::default(), tokens);

        assert_eq!(result, positionals(expected));
        assert!(!fixture.flag);
    }

    #[rstest]
    #[case(true, &["pos", "--flag", "other"], &["pos", "other"], true)]
    #[case(false, &["pos", "--flag", "other"], &["pos", "--flag", "other"], false)]
    #[case(false, &["--flag", "pos", "--", "other"], &["pos", "--", "other"], true)]
    fn dispatch_parse_after_arg(
        #[case] parse_after_arg: bool,
        #[case] tokens: &[&str],
        #[case] expected: &[&str],
        #[case] flag: bool,
    ) {
        let mut fixture = Fixture::default();
        let config = Config {
            parse_after_arg,
            ..Config::default()
        };
        let (result, _) = run(&mut fixture, config, tokens);

        assert_eq!(result, positionals(expected));
        assert_eq!(fixture.flag, flag);
    }

    #[test]
    fn dispatch_single_dash() {
        let mut fixture = Fixture::default();
        let config = Config {
            style: DashStyle::Single,
            ..Config::default()
        };
        let (result, _) = run(&mut fixture, config, &["-flag", "-name", "y", "-s", "2"]);

        assert_eq!(result, positionals(&[]));
        assert!(fixture.flag);
        assert_eq!(fixture.name, "y");
        assert_eq!(fixture.size, 2);
    }

    #[test]
    fn dispatch_comma_separated() {
        let mut fixture = Fixture::default();
        let (result, echo) = run(
            &mut fixture,
            Config::default(),
            &["--flag,--tag=a,-s", "3", "pos"],
        );

        assert_eq!(result, positionals(&["pos"]));
        assert_eq!(echo, "--flag --tag=a -s=3");
        assert!(fixture.flag);
        assert_eq!(fixture.tags, vec!["a"]);
        assert_eq!(fixture.size, 3);
    }

    #[test]
    fn dispatch_comma_separated_values() {
        // Each split option consumes the next remaining token for its value.
        let mut fixture = Fixture::default();
        let (result, _) = run(
            &mut fixture,
            Config::default(),
            &["--name,-s", "hello", "3"],
        );

        assert_eq!(result, positionals(&[]));
        assert_eq!(fixture.name, "hello");
        assert_eq!(fixture.size, 3);
    }

    #[rstest]
    #[case("--flag", ("--flag", None))]
    #[case("--flag,--name=a", ("--flag", Some("--name=a")))]
    #[case("--tag=a,b", ("--tag=a,b", None))]
    #[case(",--flag", ("--flag", None))]
    #[case(",--flag,-f", ("--flag", Some("-f")))]
    #[case("--a,-b,-c", ("--a", Some("-b,-c")))]
    fn split_pending_cases(#[case] token: &str, #[case] expected: (&str, Option<&str>)) {
        let (option, tail) = split_pending(token);
        assert_eq!((option, tail.as_deref()), expected);
    }

    #[test]
    fn dispatch_malformed() {
        let mut fixture = Fixture::default();
        let (result, _) = run(&mut fixture, Config::default(), &["--size=3", "-s", "abc"]);

        assert_eq!(
            result,
            Err(ArgError::Malformed {
                option: "-s".to_string(),
                token: "abc".to_string(),
                expected: "an integer",
            })
        );
        // Earlier options are not rolled back.
        assert_eq!(fixture.size, 3);
    }

    #[test]
    fn dispatch_echo() {
        let mut fixture = Fixture::default();
        let (result, echo) = run(
            &mut fixture,
            Config::default(),
            &["--flag", "--name", "a b", "--tag=it's here", "pos", "-t", "c"],
        );

        assert_eq!(result, positionals(&["pos"]));
        assert_eq!(echo, "--flag --name='a b' --tag=\"it's here\" -t=c");
    }

    #[test]
    fn dispatch_unquotable() {
        let mut fixture = Fixture::default();
        let (result, _) = run(&mut fixture, Config::default(), &["--name=a 'b\""]);

        assert_eq!(
            result,
            Err(ArgError::Unquotable {
                value: "a 'b\"".to_string(),
            })
        );
        assert_eq!(fixture.name, "x");
    }
}
