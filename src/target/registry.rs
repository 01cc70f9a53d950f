use std::sync::Arc;

use crate::config::{CONTAINERS_SECTION, Config};

use super::{ContainerRef, DAEMON_TARGET_NAME, Error, Result, Target};

/// The ordered, immutable list of monitored targets.
///
/// The daemon always comes first, followed by the containers in the order they
/// are watched. Polling and reporting both follow this order.
#[derive(Debug, Clone)]
pub struct Registry {
    targets: Arc<[Target]>,
}

impl Registry {
    /// Resolves the targets named by the `watch` setting against the
    /// `[Containers]` section of `config`.
    ///
    /// An empty `watch` list yields a daemon-only registry, and the
    /// `[Containers]` section is not consulted at all.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingSection`] if containers are watched but there is no
    ///   `[Containers]` section.
    /// - [`Error::MissingKey`] if a watched container has no entry.
    /// - [`Error::InvalidIdentifier`] if an entry is not a usable container reference.
    /// - [`Error::DuplicateTarget`] if a name is watched twice.
    pub fn resolve(config: &Config) -> Result<Self> {
        let watch = &config.monitor().watch;
        if watch.is_empty() {
            return Self::new(std::iter::empty::<(&str, ContainerRef)>());
        }
        let section = config.containers().ok_or(Error::MissingSection {
            section: CONTAINERS_SECTION,
        })?;

        let mut containers = Vec::with_capacity(watch.len());
        for name in watch {
            let raw = section.get(name).ok_or_else(|| Error::MissingKey {
                section: CONTAINERS_SECTION,
                key: name.clone(),
            })?;
            let container = ContainerRef::new(raw).ok_or_else(|| Error::InvalidIdentifier {
                name: name.clone(),
                identifier: raw.to_owned(),
            })?;
            containers.push((name.as_str(), container));
        }

        Self::new(containers)
    }

    /// Builds a registry of the daemon plus the given containers, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateTarget`] if two containers share a name or a
    /// container is named like the daemon.
    pub fn new<'a>(containers: impl IntoIterator<Item = (&'a str, ContainerRef)>) -> Result<Self> {
        let mut targets = vec![Target::Daemon];
        for (name, container) in containers {
            if name == DAEMON_TARGET_NAME || targets.iter().any(|t| t.name() == name) {
                return Err(Error::DuplicateTarget(name.to_owned()));
            }
            targets.push(Target::container(name, container));
        }

        for target in &targets {
            log::debug!("Monitoring target {target}");
        }

        Ok(Self {
            targets: targets.into(),
        })
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Returns a cheap shared handle to the targets.
    pub fn to_arc(&self) -> Arc<[Target]> {
        Arc::clone(&self.targets)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
