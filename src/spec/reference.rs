// ABOUTME: Caller-supplied context needed to resolve a container spec.
// ABOUTME: Maps volume-source names to provisioned containers and names the runtime root.

use crate::types::ContainerId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical runtime-data directory that containers expect to see.
pub const DEFAULT_DOCKER_ROOT: &str = "/var/lib/docker";

/// Resolution context for one translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reference {
    /// Logical volume-source name to the container already provisioned for it.
    pub volume_from_containers: HashMap<String, ProvisionedContainer>,
    /// Where the runtime keeps its data on this host.
    pub docker_root: String,
}

impl Reference {
    pub fn new(docker_root: impl Into<String>) -> Self {
        Self {
            volume_from_containers: HashMap::new(),
            docker_root: docker_root.into(),
        }
    }

    /// Register the container that backs a logical volume source.
    pub fn volume_source(mut self, name: &str, external_id: &str) -> Self {
        self.volume_from_containers.insert(
            name.to_string(),
            ProvisionedContainer {
                external_id: ContainerId::new(external_id),
            },
        );
        self
    }

    /// Runtime id for a volume source, if it resolves to a non-empty id.
    pub fn resolve_volume_source(&self, name: &str) -> Option<&ContainerId> {
        self.volume_from_containers
            .get(name)
            .map(|c| &c.external_id)
            .filter(|id| !id.is_empty())
    }
}

impl Default for Reference {
    fn default() -> Self {
        Self::new(DEFAULT_DOCKER_ROOT)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProvisionedContainer {
    pub external_id: ContainerId,
}
