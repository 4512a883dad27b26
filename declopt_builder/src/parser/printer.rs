use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::model::DashStyle;
use crate::parser::{ColumnRenderer, Descriptor, Registry, UsageError, UserInterface};

/// Renders usage and settings text from a registry.
pub(crate) struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    /// A printer which never wraps.
    #[cfg(test)]
    pub(crate) fn plain() -> Self {
        Self::new(None)
    }

    /// A printer which wraps printed usage text to the width of the current terminal, if any.
    pub(crate) fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(terminal_width)
    }

    pub(crate) fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    /// The (unwrapped) usage text of the selected groups, or of every option when ungrouped.
    pub(crate) fn usage(
        &self,
        registry: &Registry,
        style: DashStyle,
        include_unpublicized: bool,
        groups: &[&str],
    ) -> Result<String, UsageError> {
        render_usage(registry, style, include_unpublicized, groups, None)
    }

    pub(crate) fn print_usage(
        &self,
        synopsis: Option<&str>,
        registry: &Registry,
        style: DashStyle,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        if let Some(synopsis) = synopsis {
            user_interface.print(format!("Usage: {synopsis}"));
        }

        match render_usage(registry, style, false, &[], self.terminal_width) {
            Ok(usage) => user_interface.print(usage),
            Err(error) => user_interface.print_error(error.to_string()),
        }
    }

    /// Ex: `buffer-size = 4096`, one line per option.
    pub(crate) fn settings(&self, registry: &Registry, include_unpublicized: bool) -> String {
        let descriptors: Vec<&Descriptor> = registry
            .descriptors()
            .iter()
            .filter(|d| include_unpublicized || publicized(registry, d))
            .collect();
        let width = descriptors
            .iter()
            .map(|d| d.long_name.chars().count())
            .max()
            .unwrap_or(0);

        descriptors
            .iter()
            .map(|d| format!("{name:width$} = {current}", name = d.long_name, current = d.current()))
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// Ex: `--buffer-size=4096 --tag=a --tag=b`.
    ///
    /// Values are written as-is, since the tokenizer keeps quote characters.
    /// A value containing whitespace or `,-` does not survive a reparse.
    pub(crate) fn settings_line(
        &self,
        registry: &Registry,
        style: DashStyle,
        include_unpublicized: bool,
    ) -> String {
        registry
            .descriptors()
            .iter()
            .filter(|d| include_unpublicized || publicized(registry, d))
            .flat_map(|d| {
                d.current_values().into_iter().map(move |value| {
                    format!("{prefix}{name}={value}", prefix = style.prefix(), name = d.long_name)
                })
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

/// Neither the option nor its group is unpublicized.
fn publicized(registry: &Registry, descriptor: &Descriptor) -> bool {
    !descriptor.unpublicized
        && descriptor
            .group
            .as_deref()
            .and_then(|name| registry.group(name))
            .map_or(true, |group| !group.unpublicized)
}

fn render_usage(
    registry: &Registry,
    style: DashStyle,
    include_unpublicized: bool,
    groups: &[&str],
    total_width: Option<usize>,
) -> Result<String, UsageError> {
    let shown = |d: &&Descriptor| include_unpublicized || !d.unpublicized;
    let mut blocks: Vec<(Option<&str>, Vec<&Descriptor>)> = Vec::default();

    if !registry.is_grouped() {
        if !groups.is_empty() {
            return Err(UsageError::NotGrouped);
        }

        blocks.push((None, registry.descriptors().iter().filter(shown).collect()));
    } else {
        let selected = if groups.is_empty() {
            registry
                .groups()
                .iter()
                .filter(|group| {
                    include_unpublicized
                        || (!group.unpublicized
                            && group
                                .members
                                .iter()
                                .any(|i| !registry.descriptor(*i).unpublicized))
                })
                .collect::<Vec<_>>()
        } else {
            let mut selected = Vec::default();

            for name in groups {
                let group = registry
                    .group(name)
                    .ok_or_else(|| UsageError::UnknownGroup(name.to_string()))?;

                if !include_unpublicized
                    && group
                        .members
                        .iter()
                        .all(|i| registry.descriptor(*i).unpublicized)
                {
                    return Err(UsageError::NoPublicizedOptions(name.to_string()));
                }

                selected.push(group);
            }

            selected
        };

        for group in selected {
            blocks.push((
                Some(group.name.as_str()),
                group
                    .members
                    .iter()
                    .map(|i| registry.descriptor(*i))
                    .filter(shown)
                    .collect(),
            ));
        }
    }

    // Align the synopses of every block rendered together.
    let width = blocks
        .iter()
        .flat_map(|(_, descriptors)| descriptors.iter())
        .map(|d| d.synopsis(style).chars().count())
        .max()
        .unwrap_or(0);
    let renderer = match total_width {
        Some(total_width) => ColumnRenderer::guided(width, total_width),
        None => ColumnRenderer::unbounded(width),
    };
    let mut has_list = false;
    let mut rendered = Vec::default();

    for (name, descriptors) in blocks {
        let mut lines = Vec::default();

        if let Some(name) = name {
            lines.push(format!("{name}:"));
        }

        for descriptor in descriptors {
            has_list |= descriptor.is_list();
            let description = match &descriptor.default_text {
                Some(default) if !default.is_empty() => {
                    format!("{} [default {default}]", descriptor.description)
                }
                _ => descriptor.description.clone(),
            };
            lines.extend(renderer.render(&descriptor.synopsis(style), &description));
        }

        rendered.push(lines.join("\n"));
    }

    let mut usage = rendered.join("\n\n");

    if has_list {
        usage.push_str("\n\n");
        usage.push_str(LIST_HELP);
    }

    Ok(usage)
}
