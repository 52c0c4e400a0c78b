// ABOUTME: Translation request documents read by the CLI.
// ABOUTME: Bundles a container spec with its reference context and runtime override.

use crate::convert::{RuntimeConfigs, to_runtime_configs};
use crate::error::{Error, Result};
use crate::runtime::RuntimeConfig;
use crate::spec::{ContainerSpec, Reference};
use serde::Deserialize;
use std::path::Path;

pub const REQUEST_FILENAME: &str = "dockconv.yml";
pub const REQUEST_FILENAME_ALT: &str = "dockconv.yaml";
pub const REQUEST_FILENAME_JSON: &str = "dockconv.json";

/// A container spec plus everything needed to translate and launch it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Request {
    /// Name for the created container.
    pub name: Option<String>,
    pub container: ContainerSpec,
    pub reference: Reference,
    pub runtime: RuntimeConfig,
}

impl Request {
    /// Parse a request. JSON documents are accepted as well.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(REQUEST_FILENAME),
            dir.join(REQUEST_FILENAME_ALT),
            dir.join(REQUEST_FILENAME_JSON),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::RequestNotFound(dir.to_path_buf()))
    }

    pub fn translate(&self) -> Result<RuntimeConfigs> {
        to_runtime_configs(&self.container, &self.reference).map_err(Error::from)
    }
}
