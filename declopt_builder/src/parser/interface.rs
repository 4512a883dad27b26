use crate::constant::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// We'll target 95% of the total width, to ensure the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_RIGHT_WIDTH: usize = 17;

/// Renders indented `left - right` rows: the left column padded to a fixed width, the right column optionally wrapped.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    left: usize,
    right: Option<usize>,
}

impl ColumnRenderer {
    /// Produce a renderer which never wraps.
    pub(crate) fn unbounded(left: usize) -> Self {
        Self { left, right: None }
    }

    /// Produce a renderer which wraps the right column to fit the total width, when possible.
    pub(crate) fn guided(left: usize, total_width: usize) -> Self {
        let non_right = USAGE_INDENT + left + USAGE_SEPARATOR.len();
        let target_total_width = (total_width as f64 * TARGET_TOTAL_FACTOR) as usize;

        let right = if non_right + MINIMUM_RIGHT_WIDTH <= target_total_width {
            target_total_width - non_right
        } else {
            MINIMUM_RIGHT_WIDTH
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Columns {non_right} within the total {total_width}.  Selecting right: {right}.");
        }

        Self {
            left,
            right: Some(right),
        }
    }

    pub(crate) fn render(&self, left: &str, right: &str) -> Vec<String> {
        let indent = USAGE_INDENT;
        let width = self.left;
        let parts = match self.right {
            Some(right_width) => chunk(right, right_width),
            None => vec![right.to_string()],
        };
        let mut out = Vec::default();

        for (i, part) in parts.iter().enumerate() {
            if i == 0 {
                out.push(format!("{:indent$}{left:width$}{USAGE_SEPARATOR}{part}", ""));
            } else {
                let hanging = indent + width + USAGE_SEPARATOR.len();
                out.push(format!("{:hanging$}{part}", ""));
            }
        }

        if out.is_empty() {
            out.push(format!("{:indent$}{left:width$}{USAGE_SEPARATOR}", ""));
        }

        out
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() < width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let increment = std::cmp::max(width, 2) - 1;
    let mut characters: Vec<char> = word.chars().collect();

    while characters.len() > width {
        let rest = characters.split_off(increment);
        lines.push(format!("{}-", characters.iter().collect::<String>()));
        characters = rest;
    }

    current.extend(characters);
}

/// Behaviour for the output of usage text and error messages.
pub trait UserInterface {
    /// Display a (non-error) message, such as usage text.
    fn print(&self, message: String);

    /// Display an error message.
    fn print_error(&self, message: String);
}

/// Writes messages to stdout and errors to stderr.
#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }
}
