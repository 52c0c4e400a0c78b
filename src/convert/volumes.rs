// ABOUTME: Resolves data-volume specs and volumes-from names into mount settings.
// ABOUTME: Redirects the runtime's own data directory when it lives elsewhere on the host.

use super::parse::{SpecFormatError, VolumeSpec};
use crate::spec::{DEFAULT_DOCKER_ROOT, Reference};
use std::collections::BTreeSet;

/// Declared volumes, bind mounts and inherited volume sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolumeSetup {
    pub volumes: BTreeSet<String>,
    pub binds: Vec<String>,
    /// `None` when no volumes-from name resolved.
    pub volumes_from: Option<Vec<String>>,
}

pub fn resolve_volumes(
    data_volumes: &[String],
    data_volumes_from: &[String],
    reference: &Reference,
) -> Result<VolumeSetup, SpecFormatError> {
    let mut setup = VolumeSetup::default();

    for raw in data_volumes {
        match VolumeSpec::parse(raw)? {
            VolumeSpec::Anonymous(path) => {
                setup.volumes.insert(path);
            }
            VolumeSpec::Bind {
                host,
                container,
                mode,
            } => {
                // The relocated root replaces the canonical path as the declared
                // volume and is reachable at both locations.
                let root = reference.docker_root.as_str();
                if host == DEFAULT_DOCKER_ROOT
                    && container == DEFAULT_DOCKER_ROOT
                    && !root.is_empty()
                    && root != DEFAULT_DOCKER_ROOT
                {
                    tracing::debug!(root, "redirecting runtime data directory bind");
                    setup.volumes.insert(root.to_string());
                    setup.binds.push(bind(root, &container, &mode));
                    setup.binds.push(bind(root, root, &mode));
                    continue;
                }

                setup.binds.push(bind(&host, &container, &mode));
                setup.volumes.insert(container);
            }
        }
    }

    setup.volumes_from = resolve_volumes_from(data_volumes_from, reference);
    Ok(setup)
}

/// Runtime ids of the named volume sources, in input order. Names that do
/// not resolve are dropped.
pub fn resolve_volumes_from(names: &[String], reference: &Reference) -> Option<Vec<String>> {
    let ids: Vec<String> = names
        .iter()
        .filter_map(|name| {
            let id = reference.resolve_volume_source(name);
            if id.is_none() {
                tracing::debug!(name = name.as_str(), "dropping unresolved volumes-from");
            }
            id.map(|id| id.to_string())
        })
        .collect();

    if ids.is_empty() { None } else { Some(ids) }
}

fn bind(host: &str, container: &str, mode: &str) -> String {
    format!("{host}:{container}:{mode}")
}
