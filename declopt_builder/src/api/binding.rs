use crate::api::capture::*;
use crate::model::ValueKind;
use crate::parser::coerce_list;
use crate::prelude::OptionValue;

/// An option bound to a single value; each occurrence replaces the previous one.
pub struct Scalar<'a, T> {
    variable: &'a mut T,
}

impl<'a, T> Scalar<'a, T> {
    /// Create a scalar binding.
    pub fn new(variable: &'a mut T) -> Self {
        Self { variable }
    }
}

impl<'a, T: OptionValue> Binding for Scalar<'a, T> {
    fn kind(&self) -> ValueKind {
        T::kind()
    }

    fn default_text(&self) -> Option<String> {
        Some(self.variable.render())
    }

    fn assign(&mut self, text: &str, _split_lists: bool) -> Result<(), CoerceError> {
        *self.variable = T::coerce(text)?;
        Ok(())
    }

    fn current(&self) -> String {
        self.variable.render()
    }

    fn current_values(&self) -> Vec<String> {
        vec![self.variable.render()]
    }
}

/// An option bound to an [`Option`], allowing the program to have no default value.
pub struct Optional<'a, T> {
    variable: &'a mut Option<T>,
}

impl<'a, T> Optional<'a, T> {
    /// Create an optional binding.
    pub fn new(variable: &'a mut Option<T>) -> Self {
        Self { variable }
    }
}

impl<'a, T: OptionValue> Binding for Optional<'a, T> {
    fn kind(&self) -> ValueKind {
        T::kind()
    }

    fn default_text(&self) -> Option<String> {
        self.variable.as_ref().map(T::render)
    }

    fn assign(&mut self, text: &str, _split_lists: bool) -> Result<(), CoerceError> {
        self.variable.replace(T::coerce(text)?);
        Ok(())
    }

    fn current(&self) -> String {
        match self.variable.as_ref() {
            Some(value) => value.render(),
            None => "".to_string(),
        }
    }

    fn current_values(&self) -> Vec<String> {
        self.variable.iter().map(T::render).collect()
    }
}

/// An option bound to a [`Vec`]; each occurrence appends, preserving command line order.
pub struct Collection<'a, T> {
    variable: &'a mut Vec<T>,
}

impl<'a, T> Collection<'a, T> {
    /// Create a collection binding.
    pub fn new(variable: &'a mut Vec<T>) -> Self {
        Self { variable }
    }
}

impl<'a, T: OptionValue> Binding for Collection<'a, T> {
    fn kind(&self) -> ValueKind {
        ValueKind::ListOf(Box::new(T::kind()))
    }

    fn default_text(&self) -> Option<String> {
        if self.variable.is_empty() {
            None
        } else {
            Some(self.current())
        }
    }

    fn assign(&mut self, text: &str, split_lists: bool) -> Result<(), CoerceError> {
        coerce_list(text, split_lists, |value| self.variable.push(value))
    }

    fn current(&self) -> String {
        format!(
            "[{}]",
            self.variable
                .iter()
                .map(T::render)
                .collect::<Vec<String>>()
                .join(", ")
        )
    }

    fn current_values(&self) -> Vec<String> {
        self.variable.iter().map(T::render).collect()
    }
}
