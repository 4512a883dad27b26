/// Split a raw command line into argv-style tokens.
///
/// Whitespace separates tokens, and runs of whitespace collapse.
/// A `'` or `"` opens a quoted span which is copied verbatim (quote characters included) until the matching quote, or the end of input.
/// There is no escape processing.
///
/// ### Example
/// ```
/// # use declopt_builder as declopt;
/// use declopt::tokenize;
///
/// assert_eq!(tokenize("a 'b c'  d"), vec!["a", "'b c'", "d"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::default();
    let mut current = String::default();
    let mut chars = raw.trim().chars();

    while let Some(c) = chars.next() {
        if c == '\'' || c == '"' {
            current.push(c);

            for quoted in chars.by_ref() {
                current.push(quoted);

                if quoted == c {
                    break;
                }
            }
        } else if c.is_whitespace() {
            // Trimmed input never ends in whitespace, so `current` holds a completed token.
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    #[rstest]
    #[case("", vec![])]
    #[case("   ", vec![])]
    #[case("a", vec!["a"])]
    #[case("a b", vec!["a", "b"])]
    #[case("  a \t b\n", vec!["a", "b"])]
    #[case("a 'b c' d", vec!["a", "'b c'", "d"])]
    #[case("--name=\"x y\" z", vec!["--name=\"x y\"", "z"])]
    #[case("'it''s'", vec!["'it''s'"])]
    #[case("\"a 'b\" c", vec!["\"a 'b\"", "c"])]
    #[case("'a\\' b'", vec!["'a\\'", "b'"])]
    #[case("'unterminated quote", vec!["'unterminated quote"])]
    #[case("''", vec!["''"])]
    fn tokenize_cases(#[case] raw: &str, #[case] expected: Vec<&str>) {
        assert_eq!(tokenize(raw), expected);
    }

    #[test]
    fn tokenize_random_separators() {
        let separators = [" ", "  ", "\t", " \t ", "\n"];

        for _ in 0..100 {
            let count = thread_rng().gen_range(0..8);
            let words: Vec<String> = (0..count)
                .map(|i| format!("w{i}x{}", thread_rng().gen_range(0..1000)))
                .collect();
            let mut raw = String::default();

            for word in &words {
                raw.push_str(separators[thread_rng().gen_range(0..separators.len())]);
                raw.push_str(word);
            }

            raw.push_str(separators[thread_rng().gen_range(0..separators.len())]);
            assert_eq!(tokenize(&raw), words);
        }
    }
}
