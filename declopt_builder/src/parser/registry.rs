use std::collections::HashMap;

use crate::api::SourceUnit;
use crate::model::Config;
use crate::parser::{ConfigError, Descriptor};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Group {
    pub name: String,
    pub unpublicized: bool,
    /// Indices into the registry's descriptors, in declaration order.
    pub members: Vec<usize>,
}

/// The descriptors of every declared option, indexed by name and by group.
#[derive(Debug)]
pub(crate) struct Registry<'a> {
    descriptors: Vec<Descriptor<'a>>,
    names: HashMap<String, usize>,
    groups: Vec<Group>,
    grouped: bool,
}

impl<'a> Registry<'a> {
    pub(crate) fn build(units: Vec<SourceUnit<'a>>, config: &Config) -> Result<Self, ConfigError> {
        let mut registry = Self {
            descriptors: Vec::default(),
            names: HashMap::default(),
            groups: Vec::default(),
            grouped: false,
        };
        // Undecided until the first option is seen.
        let mut grouped: Option<bool> = None;

        for unit in units {
            let mut current_group: Option<usize> = None;

            for declaration in unit.declarations {
                let (mut descriptor, marker) = Descriptor::build(declaration, config)?;
                let index = registry.descriptors.len();

                let is_grouped = *grouped.get_or_insert(marker.is_some());

                match (is_grouped, marker) {
                    (true, Some(marker)) => {
                        if registry.group(&marker.name).is_some() {
                            return Err(ConfigError::DuplicateGroup { name: marker.name });
                        }

                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Starting group '{}' in '{}'.", marker.name, unit.name);
                        }

                        registry.groups.push(Group {
                            name: marker.name,
                            unpublicized: marker.unpublicized,
                            members: Vec::default(),
                        });
                        current_group.replace(registry.groups.len() - 1);
                    }
                    (true, None) => {}
                    (false, Some(marker)) => {
                        return Err(ConfigError::UngroupedRegistry {
                            identifier: descriptor.identifier,
                            group: marker.name,
                        });
                    }
                    (false, None) => {}
                }

                if is_grouped {
                    match current_group {
                        Some(group_index) => {
                            let group = &mut registry.groups[group_index];
                            group.members.push(index);
                            descriptor.group.replace(group.name.clone());
                        }
                        None => {
                            return Err(ConfigError::MissingGroup {
                                unit: unit.name.clone(),
                                identifier: descriptor.identifier,
                            });
                        }
                    }
                }

                for (what, name) in descriptor.lookup_names(config.style) {
                    match registry.names.get(&name) {
                        // A long name may coincide with the short name of the same option (ex: `-v` in single dash style).
                        Some(existing) if *existing == index && what == "long name" => {}
                        Some(_) => {
                            return Err(ConfigError::DuplicateName {
                                what,
                                name,
                                identifier: descriptor.identifier,
                            });
                        }
                        None => {
                            registry.names.insert(name, index);
                        }
                    }
                }

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Registered {descriptor:?}.");
                }

                registry.descriptors.push(descriptor);
            }
        }

        registry.grouped = grouped.unwrap_or(false);
        Ok(registry)
    }

    /// Find the option named exactly `name` (with its dashes).
    pub(crate) fn lookup(&self, name: &str) -> Option<usize> {
        self.names.get(name).copied()
    }

    pub(crate) fn descriptor(&self, index: usize) -> &Descriptor<'a> {
        &self.descriptors[index]
    }

    pub(crate) fn descriptor_mut(&mut self, index: usize) -> &mut Descriptor<'a> {
        &mut self.descriptors[index]
    }

    /// All descriptors, in declaration order.
    pub(crate) fn descriptors(&self) -> &[Descriptor<'a>] {
        &self.descriptors
    }

    /// All groups, in the order of their first declaration.
    pub(crate) fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub(crate) fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.name == name)
    }

    pub(crate) fn is_grouped(&self) -> bool {
        self.grouped
    }
}
