// ABOUTME: Bollard-based runtime client for Docker and Podman.
// ABOUTME: Converts translated configs into the engine's create body and calls the API.

use super::client::{ContainerError, RuntimeClient};
use super::types::{RuntimeInfo, RuntimeType};
use crate::convert::RuntimeConfigs;
use crate::types::ContainerId;
use async_trait::async_trait;
use bollard::Docker;
use bollard::models::ContainerCreateBody;
use bollard::query_parameters::{CreateContainerOptions, StartContainerOptions};
use serde_json::Value;

// =============================================================================
// Error Mapping Helpers
// =============================================================================

fn map_container_create_error(e: bollard::errors::Error) -> ContainerError {
    match &e {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 400 => ContainerError::InvalidConfig(message.clone()),
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 404 => ContainerError::ImageNotFound(message.clone()),
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 409 => ContainerError::AlreadyExists(message.clone()),
        _ => ContainerError::Runtime(e.to_string()),
    }
}

fn map_container_start_error(e: bollard::errors::Error) -> ContainerError {
    match &e {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 404 => ContainerError::NotFound(message.clone()),
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 304 => ContainerError::AlreadyRunning(message.clone()),
        _ => ContainerError::Runtime(e.to_string()),
    }
}

// =============================================================================
// Wire Conversion
// =============================================================================

/// Build the engine's create body from a translated config pair.
///
/// Both sides use the engine's JSON field names, so the configs go through
/// their wire form. Exposed ports are set on the typed body directly. Host
/// fields the engine model lacks (`KernelMemory`, `DiskQuota`) are dropped
/// and logged.
pub fn to_create_body(configs: &RuntimeConfigs) -> Result<ContainerCreateBody, serde_json::Error> {
    let host_config = serde_json::to_value(&configs.host_config)?;
    let mut body = serde_json::to_value(&configs.config)?;
    if let Some(fields) = body.as_object_mut() {
        fields.remove("ExposedPorts");
        fields.insert("HostConfig".to_string(), host_config.clone());
    }

    let mut create: ContainerCreateBody = serde_json::from_value(body)?;
    let dropped = dropped_keys(&host_config, &serde_json::to_value(&create.host_config)?);
    if !dropped.is_empty() {
        tracing::debug!(?dropped, "host config fields not supported by the engine model");
    }

    if !configs.config.exposed_ports.is_empty() {
        create.exposed_ports = Some(configs.config.exposed_ports.iter().cloned().collect());
    }
    Ok(create)
}

/// Keys set in `sent` that did not survive into `kept`.
pub fn dropped_keys(sent: &Value, kept: &Value) -> Vec<String> {
    let Some(sent) = sent.as_object() else {
        return Vec::new();
    };
    sent.iter()
        .filter(|(key, value)| {
            !value.is_null() && kept.get(key.as_str()).is_none_or(Value::is_null)
        })
        .map(|(key, _)| key.clone())
        .collect()
}

// =============================================================================
// BollardRuntimeClient
// =============================================================================

/// Runtime client using bollard.
///
/// Supports both Docker and Podman via the Docker-compatible API.
pub struct BollardRuntimeClient {
    client: Docker,
    runtime_type: RuntimeType,
}

impl BollardRuntimeClient {
    /// Create a new client from a Docker connection.
    pub fn new(client: Docker, runtime_type: RuntimeType) -> Self {
        Self {
            client,
            runtime_type,
        }
    }

    /// Connect to a container runtime using detected runtime info.
    pub fn connect(info: &RuntimeInfo) -> Result<Self, ContainerError> {
        let client =
            Docker::connect_with_unix(&info.socket_path, 120, bollard::API_DEFAULT_VERSION)
                .map_err(|e| ContainerError::ConnectionFailed(e.to_string()))?;
        Ok(Self::new(client, info.runtime_type))
    }
}

#[async_trait]
impl RuntimeClient for BollardRuntimeClient {
    async fn create_container(
        &self,
        name: Option<&str>,
        configs: &RuntimeConfigs,
    ) -> Result<ContainerId, ContainerError> {
        let body =
            to_create_body(configs).map_err(|e| ContainerError::InvalidConfig(e.to_string()))?;

        let opts = CreateContainerOptions {
            name: name.map(str::to_string),
            ..Default::default()
        };

        tracing::debug!(runtime = %self.runtime_type, ?name, "creating container");
        let response = self
            .client
            .create_container(Some(opts), body)
            .await
            .map_err(map_container_create_error)?;

        Ok(ContainerId::new(response.id))
    }

    async fn start_container(&self, id: &ContainerId) -> Result<(), ContainerError> {
        self.client
            .start_container(id.as_str(), None::<StartContainerOptions>)
            .await
            .map_err(map_container_start_error)
    }
}
